//! Terminal rendering.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//!                                     ↓
//!                                 hit_test ← mouse position
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Display-ready state with resolved positions
//! - [`layout`]: Fixed row layout and mouse hit-testing
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Component renderers
//! - [`helpers`]: Cursor positioning, match highlighting, truncation
//! - [`theme`]: Color schemes and ANSI escape sequences

pub mod components;
pub mod helpers;
pub mod layout;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use layout::{hit_test, HitTarget};
pub use renderer::{render, render_viewmodel};
pub use theme::Theme;
pub use viewmodel::{
    ChipItem, ChipRow, EmptyState, FooterInfo, HeaderInfo, InputBoxInfo, SuggestionRow, UIViewModel,
};
