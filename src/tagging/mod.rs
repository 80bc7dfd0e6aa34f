//! Tag-selection core.
//!
//! Everything in this module is synchronous and free of I/O. The host feeds
//! events into a [`TagController`] and persists the [`Notification`]s it returns.

pub mod controller;
pub mod navigation;
pub mod registry;
pub mod selection;
pub mod suggest;

pub use controller::{Notification, TagController, TagEvent};
pub use navigation::{NavKey, NavState};
pub use registry::TagRegistry;
pub use selection::Selection;
pub use suggest::{suggest, Suggestion};
