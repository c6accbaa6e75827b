//! Interactions with the external HandBrakeCLI tool.
//!
//! This module encapsulates everything that touches the HandBrakeCLI binary:
//! locating it, building its argument vectors, and the spawner/process trait
//! pair that the rest of the crate is written against. Consumers can provide
//! their own implementations of the traits for testing; the default
//! implementation in [`handbrake`] spawns the real binary.

use crate::error::{CoreError, CoreResult};

use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

pub mod handbrake;

pub use handbrake::{CliProcess, CliSpawner};

/// Name of the external transcoder binary.
pub const HANDBRAKE_BIN: &str = "HandBrakeCLI";

/// Trait representing an active HandBrakeCLI process instance.
///
/// The output stream is the merge of the process's stdout and stderr, read
/// line by line as it becomes available so long-running encodes stay
/// observable while they run.
pub trait HandBrakeProcess {
    /// Consumes the merged output stream, invoking `on_line` for every line
    /// until the process closes its pipes.
    fn for_each_line<F>(&mut self, on_line: F) -> CoreResult<()>
    where
        F: FnMut(&str);

    /// Waits for the process to exit and returns its status.
    fn wait(&mut self) -> CoreResult<ExitStatus>;
}

/// Trait representing something that can spawn a HandBrakeCLI process.
pub trait HandBrakeSpawner {
    type Process: HandBrakeProcess;

    fn spawn(&self, args: &[String]) -> CoreResult<Self::Process>;
}

/// Argument vector for the preset-list query.
pub fn preset_list_args() -> Vec<String> {
    vec!["--preset-list".to_string()]
}

/// Argument vector for one encode: quiet logging, chapter markers, preset
/// selection by name, input path, output path.
pub fn encode_args(preset: &str, input: &Path, output: &Path) -> Vec<String> {
    vec![
        "-v".to_string(),
        "0".to_string(),
        "-m".to_string(),
        "-Z".to_string(),
        preset.to_string(),
        "-i".to_string(),
        input.to_string_lossy().into_owned(),
        "-o".to_string(),
        output.to_string_lossy().into_owned(),
    ]
}

/// Checks if the current platform is macOS.
pub fn is_macos() -> bool {
    env::consts::OS == "macos"
}

fn is_windows() -> bool {
    env::consts::OS == "windows"
}

/// Locates the HandBrakeCLI binary.
///
/// Order follows the installs HandBrake actually ships: the zip distribution
/// unpacked next to our own executable on Windows, the drag-and-drop install
/// in /Applications on macOS, and a PATH lookup everywhere else.
///
/// This is checked once at startup. Failure is fatal to the whole run; it can
/// only be fixed by installing the dependency.
pub fn locate_handbrake() -> CoreResult<PathBuf> {
    if is_windows() {
        let side_by_side = env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("HandBrakeCLI.exe")));
        if let Some(path) = side_by_side {
            if path.is_file() {
                log::debug!("found HandBrakeCLI next to the executable: {}", path.display());
                return Ok(path);
            }
        }
    }

    if is_macos() {
        let app_path = Path::new("/Applications/HandBrakeCLI");
        if app_path.is_file() {
            log::debug!("found HandBrakeCLI in /Applications");
            return Ok(app_path.to_path_buf());
        }
    }

    which::which(HANDBRAKE_BIN).map_err(|e| {
        log::warn!("dependency '{}' not found: {}", HANDBRAKE_BIN, e);
        CoreError::DependencyNotFound(e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_args_shape() {
        let args = encode_args(
            "Universal",
            Path::new("/videos/a.avi"),
            Path::new("/out/a.m4v"),
        );
        assert_eq!(
            args,
            vec!["-v", "0", "-m", "-Z", "Universal", "-i", "/videos/a.avi", "-o", "/out/a.m4v"]
        );
    }

    #[test]
    fn test_preset_list_args() {
        assert_eq!(preset_list_args(), vec!["--preset-list"]);
    }
}
