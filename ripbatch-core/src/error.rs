use thiserror::Error;

/// Custom error types for ripbatch.
///
/// Every variant is fatal to the run; nothing below the CLI top level
/// recovers from another component's error. The only auto-correction anywhere
/// is creating the output directory when it is absent.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("directory walk error: {0}")]
    Walkdir(#[from] walkdir::Error),

    /// HandBrakeCLI could not be located. Checked once at startup; there is
    /// nothing to retry — the fix is installing the dependency.
    #[error("HandBrakeCLI is not installed or could not be located: {0}")]
    DependencyNotFound(String),

    #[error("failed to start {command}: {source}")]
    CommandStart {
        command: String,
        source: std::io::Error,
    },

    #[error("failed while waiting for {command}: {source}")]
    CommandWait {
        command: String,
        source: std::io::Error,
    },

    #[error("could not read the preset list from HandBrakeCLI: {0}")]
    PresetList(String),

    /// The requested preset is not a member of the registry's cached set.
    #[error("preset \"{requested}\" is not in the valid preset list")]
    InvalidPreset {
        requested: String,
        available: Vec<String>,
    },

    #[error("invalid path: {0}")]
    PathError(String),

    /// The encode process terminated without emitting the completion marker.
    /// The exit code is deliberately not consulted; the marker is the sole
    /// authoritative success signal.
    #[error("encoding \"{filename}\" did not report completion")]
    EncodeFailed { filename: String, log_tail: String },

    #[error("unexpected error: {0}")]
    Other(String),
}

/// Result type for ripbatch operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;
