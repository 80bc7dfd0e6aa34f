//! Domain layer for the role tagger.
//!
//! Core value types shared by the tagging core, storage and worker layers,
//! independent of Zellij APIs.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`tag`]: The case-insensitive [`Tag`] label
//! - [`notes`]: The per-candidate [`CandidateNotes`] record
//!
//! # Examples
//!
//! ```
//! use role_tagger::domain::{Tag, Result};
//!
//! fn parse_role(raw: &str) -> Result<Tag> {
//!     Tag::new(raw).ok_or_else(|| role_tagger::TaggerError::Config("blank role".to_string()))
//! }
//!
//! assert_eq!(parse_role(" SRE ").unwrap().as_str(), "SRE");
//! ```

pub mod error;
pub mod notes;
pub mod tag;

pub use error::{Result, TaggerError};
pub use notes::CandidateNotes;
pub use tag::Tag;
