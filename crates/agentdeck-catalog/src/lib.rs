//! `AgentDeck` Catalog
//!
//! The static list of agents and skills shown by the catalog, plus the
//! search-as-filter used by the browse views. Records are declared at compile
//! time and never mutated; ordering is always declaration order.

#![deny(unsafe_code, dead_code, unused_imports, unused_variables, missing_docs)]

pub mod data;
pub mod filter;

pub use data::{agent, agents_using_skill, skill, AGENTS, SKILLS};
pub use filter::{filter, Listing};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{filter, Listing, AGENTS, SKILLS};
}
