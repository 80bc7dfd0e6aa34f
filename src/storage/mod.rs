//! Storage layer for the role registry and candidate notes.
//!
//! # Modules
//!
//! - `backend`: [`TagStore`] trait, the load/save contract
//! - `json`: JSON file-based implementation
//! - `models`: document layout and storage keys
//! - `session`: recovery rules for loading and saving tagging state

pub mod backend;
pub mod json;
pub mod models;
pub mod session;

pub use backend::TagStore;
pub use json::JsonStorage;
pub use models::{StorageDocument, DEFAULT_SEED_ROLES};
pub use session::{load_registry_or_seed, load_selection, save_selection};
