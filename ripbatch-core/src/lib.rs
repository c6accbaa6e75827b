//! Core library for batch video encoding through HandBrakeCLI.
//!
//! This crate provides video file discovery, preset validation against the
//! installed HandBrakeCLI, and the sequential batch orchestration that runs
//! one encode process per discovered file. It performs no encoding itself:
//! HandBrakeCLI is an opaque collaborator reached through the
//! [`external::HandBrakeSpawner`] seam.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use ripbatch_core::{CoreConfig, PresetRegistry, process_run};
//! use ripbatch_core::external::{locate_handbrake, CliSpawner};
//! use std::path::PathBuf;
//!
//! let spawner = CliSpawner::new(locate_handbrake().unwrap());
//! let registry = PresetRegistry::fetch(&spawner).unwrap();
//!
//! let config = CoreConfig::new(
//!     PathBuf::from("/path/to/videos"),
//!     PathBuf::from("/path/to/output"),
//! );
//!
//! let results = process_run(&spawner, &registry, &config, &mut |line| {
//!     println!("{line}");
//! })
//! .unwrap();
//! println!("encoded {} file(s)", results.len());
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod external;
pub mod presets;
pub mod processing;

// Re-exports for public API
pub use config::CoreConfig;
pub use discovery::find_input_files;
pub use error::{CoreError, CoreResult};
pub use presets::PresetRegistry;
pub use processing::{encode_file, output_path_for, process_run};

use std::path::PathBuf;
use std::time::Duration;

/// One input-file-to-output-file transcoding request bound to a preset.
///
/// Built by the orchestrator for each discovered file and consumed exactly
/// once by [`encode_file`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeJob {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub preset: String,
}

/// Result of a single encode invocation.
///
/// `succeeded` reflects the completion-marker check, not the process exit
/// code. `captured_output` holds every line the process wrote, merged across
/// stdout and stderr, for diagnostics.
#[derive(Debug, Clone)]
pub struct EncodeResult {
    pub job: EncodeJob,
    pub succeeded: bool,
    pub captured_output: Vec<String>,
    pub duration: Duration,
}

/// Terminal artifact of a full batch run: the process exit code and the
/// message shown to the user through whichever reporter is active.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub exit_code: i32,
    pub message: String,
}

impl RunOutcome {
    pub fn success(message: impl Into<String>) -> Self {
        RunOutcome {
            exit_code: 0,
            message: message.into(),
        }
    }

    pub fn failure(exit_code: i32, message: impl Into<String>) -> Self {
        RunOutcome {
            exit_code,
            message: message.into(),
        }
    }
}
