//! Run configuration for a batch encode.

use crate::error::{CoreError, CoreResult};

use std::path::PathBuf;

/// Preset used when the caller does not name one.
pub const DEFAULT_PRESET: &str = "Universal";

/// Extension given to every output file, regardless of the input's own.
pub const OUTPUT_EXTENSION: &str = "m4v";

/// Line HandBrakeCLI prints when an encode completed. Overridable per run
/// because the wording is owned by HandBrake and may change across versions.
pub const SUCCESS_MARKER: &str = "Rip done!";

/// Configuration for one batch run.
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Directory scanned for input files.
    pub input_dir: PathBuf,
    /// Directory all outputs are written into. Created if absent.
    pub output_dir: PathBuf,
    /// Scan the whole tree under `input_dir` instead of its top level only.
    pub recursive: bool,
    /// HandBrake preset name, validated against the registry before any work.
    pub preset: String,
    /// Completion marker line that decides encode success.
    pub success_marker: String,
}

impl CoreConfig {
    /// Creates a configuration with the default preset, recursive scanning
    /// enabled, and the stock completion marker.
    pub fn new(input_dir: PathBuf, output_dir: PathBuf) -> Self {
        CoreConfig {
            input_dir,
            output_dir,
            recursive: true,
            preset: DEFAULT_PRESET.to_string(),
            success_marker: SUCCESS_MARKER.to_string(),
        }
    }

    /// Checks the parts of the configuration that can be checked without
    /// touching HandBrakeCLI. Preset membership is the registry's job.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.input_dir.is_dir() {
            return Err(CoreError::PathError(format!(
                "input directory '{}' does not exist or is not a directory",
                self.input_dir.display()
            )));
        }
        if self.preset.is_empty() {
            return Err(CoreError::PathError("preset name is empty".to_string()));
        }
        if self.success_marker.is_empty() {
            return Err(CoreError::PathError(
                "success marker is empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let config = CoreConfig::new(PathBuf::from("/in"), PathBuf::from("/out"));
        assert!(config.recursive);
        assert_eq!(config.preset, "Universal");
        assert_eq!(config.success_marker, "Rip done!");
    }

    #[test]
    fn test_validate_missing_input_dir() {
        let config = CoreConfig::new(
            PathBuf::from("surely_this_does_not_exist_42"),
            PathBuf::from("/out"),
        );
        assert!(matches!(config.validate(), Err(CoreError::PathError(_))));
    }

    #[test]
    fn test_validate_empty_preset() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = CoreConfig::new(dir.path().to_path_buf(), PathBuf::from("/out"));
        config.preset = String::new();
        assert!(config.validate().is_err());
    }
}
