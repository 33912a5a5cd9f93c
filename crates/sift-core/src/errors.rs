/// Workspace-wide result alias.
pub type SiftResult<T> = Result<T, SiftError>;

/// Top-level error type for the sift workspace.
#[derive(Debug, thiserror::Error)]
pub enum SiftError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Configuration errors. Fatal: raised at engine construction, before any
/// scoring begins.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no configuration entry for category '{category}'")]
    MissingCategory { category: String },

    #[error("category '{category}' has no strong and no weak patterns")]
    EmptyPatternSet { category: String },

    #[error("category '{category}' pattern '{pattern}' failed to compile: {reason}")]
    InvalidPattern {
        category: String,
        pattern: String,
        reason: String,
    },

    #[error("category '{category}' base score {value} is not a finite non-negative number")]
    InvalidBaseScore { category: String, value: f64 },

    #[error("weak score table is empty")]
    EmptyWeakTable,

    #[error("unknown mode '{name}'")]
    UnknownMode { name: String },
}

/// Semantic backend errors. Recovered locally inside the semantic verifier;
/// a scoring call never surfaces these.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("similarity backend unavailable: {provider}")]
    Unavailable { provider: String },

    #[error("similarity inference failed: {reason}")]
    InferenceFailed { reason: String },
}
