use thiserror::Error;

/// Errors raised while interpreting user input (query parameters, CLI flags)
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Category slug that names neither an agent nor a skill category
    #[error("Unknown {kind} category '{value}'")]
    UnknownCategory {
        /// Which category set was consulted ("agent" or "skill")
        kind: &'static str,
        /// The rejected input
        value: String,
    },

    /// Document kind other than agent or skill
    #[error("Unknown document kind '{0}' (expected 'agent' or 'skill')")]
    UnknownKind(String),
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, Error>;
