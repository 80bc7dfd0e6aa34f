//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin shim (main.rs) and the tagging, storage and worker
//! layers. Data flows one way:
//!
//! ```text
//! Keys / Mouse / Pipes → Event → handle_event → TagController → Notifications
//!                                     ↑                              ↓
//!                                     └──── WorkerResponse ←── Action::PostToWorker
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and persistence mapping
//! - [`modes`]: Input mode of the pane
//! - [`state`]: Application state and view model computation
//!
//! # Example
//!
//! ```rust
//! use role_tagger::app::{handle_event, AppState, Event};
//! use role_tagger::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default(), 6);
//! let (render, actions) = handle_event(&mut state, &Event::KeyDown)?;
//! assert!(!render && actions.is_empty());
//! # Ok::<(), role_tagger::TaggerError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::InputMode;
pub use state::AppState;
