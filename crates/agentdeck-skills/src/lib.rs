//! `AgentDeck` Skills
//!
//! Everything that reads agent and skill Markdown documents.
//!
//! ## Features
//!
//! - Best-effort metadata extraction (version, license, updated, status) with fixed defaults
//! - Capability bullets from a `## Capabilities` / `## Features` section
//! - Trigger keywords and allowed tools for the copy-only "test drive" panel
//! - YAML front matter split and preview truncation for rendering
//! - Document discovery for building the content bundle
//!
//! Extraction never fails: a document that matches nothing yields defaults
//! (metadata, capabilities) or empty sections (test drive).

#![deny(unsafe_code, dead_code, unused_imports, unused_variables, missing_docs)]

pub mod document;
pub mod extract;
pub mod registry;
pub mod render;

pub use document::Document;
pub use extract::{extract_capabilities, extract_test_drive, parse_metadata};
pub use registry::DocumentRegistry;
pub use render::{parse_front_matter, preview, render_body, split_front_matter, FrontMatter};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        extract_capabilities, extract_test_drive, parse_metadata, Document, DocumentRegistry,
    };
}
