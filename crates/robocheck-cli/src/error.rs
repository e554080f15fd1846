//! Error types for the `robocheck` binary.

/// Top-level error for the CLI.
///
/// Each variant wraps a subsystem error so `run` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: robocheck_core::ConfigError,
    },

    /// Reading or parsing a sequence failed.
    #[error("sequence error: {source}")]
    Sequence {
        /// The underlying sequence error.
        #[from]
        source: robocheck_core::SequenceError,
    },

    /// The configured world could not be built.
    #[error("world error: {source}")]
    World {
        /// The underlying world error.
        #[from]
        source: robocheck_world::WorldError,
    },

    /// Rendering the report as JSON failed.
    #[error("failed to render report: {source}")]
    Render {
        /// The underlying serialization error.
        #[from]
        source: serde_json::Error,
    },
}
