//! `AgentDeck` Content
//!
//! The session-wide cache of raw agent and skill documents, the one-time load
//! of the content bundle, and the static documentation pages.
//!
//! ## Lifecycle
//!
//! The store starts empty, is populated exactly once by [`load_into`], and is
//! read-only afterwards. Lookups never fail: before the load finishes they
//! return [`LOADING`], afterwards [`NOT_FOUND`] for unknown ids.

#![deny(unsafe_code, dead_code, unused_imports, unused_variables, missing_docs)]

pub mod docs;
pub mod error;
pub mod source;
pub mod store;

pub use docs::{resolve as resolve_doc, DocPage};
pub use error::ContentError;
pub use source::{load_into, ContentSource};
pub use store::{global, ContentStore, LOADING, NOT_FOUND};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{global, load_into, ContentSource, ContentStore};
}
