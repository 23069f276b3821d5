//! Error types for the engine binary.
//!
//! [`EngineError`] is the top-level error type that wraps all possible
//! failure modes during startup, the run, and report output.

/// Top-level error for the engine binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: autocity_core::ConfigError,
    },

    /// The configuration was rejected by the workflow.
    #[error("configuration error: {source}")]
    Configuration {
        /// The underlying validation error.
        #[from]
        source: autocity_core::ConfigurationError,
    },

    /// Writing a report to stdout failed.
    #[error("report output error: {source}")]
    Report {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
