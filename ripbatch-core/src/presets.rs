//! Preset registry backed by `HandBrakeCLI --preset-list`.
//!
//! Querying the preset list spawns a process, so the registry fetches it at
//! most once per run and answers every later membership check from the
//! cached set. The cache is a field on the instance; callers pass the
//! registry by reference to whatever needs it.

use crate::error::{CoreError, CoreResult};
use crate::external::{preset_list_args, HandBrakeProcess, HandBrakeSpawner};

use regex::Regex;

/// The set of preset names the installed HandBrakeCLI accepts, in the order
/// the tool listed them.
#[derive(Debug, Clone)]
pub struct PresetRegistry {
    presets: Vec<String>,
}

impl PresetRegistry {
    /// Queries HandBrakeCLI for its preset list and caches the result.
    ///
    /// Fatal if the process cannot be started, exits non-zero, or produces
    /// output with no recognizable preset lines — the transcoder install is
    /// unusable and there is nothing to retry.
    pub fn fetch<S: HandBrakeSpawner>(spawner: &S) -> CoreResult<Self> {
        let mut process = spawner.spawn(&preset_list_args())?;

        let mut lines = Vec::new();
        process.for_each_line(|line| lines.push(line.to_string()))?;
        let status = process.wait()?;
        if !status.success() {
            return Err(CoreError::PresetList(format!(
                "--preset-list exited with {status}"
            )));
        }

        let presets = parse_preset_list(&lines);
        if presets.is_empty() {
            return Err(CoreError::PresetList(
                "no preset names found in --preset-list output".to_string(),
            ));
        }
        log::debug!("cached {} preset(s)", presets.len());
        Ok(PresetRegistry { presets })
    }

    /// Builds a registry from known names, bypassing HandBrakeCLI.
    pub fn from_names<I, T>(names: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        PresetRegistry {
            presets: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Membership check against the cached set. Pure; no process is spawned.
    pub fn is_valid(&self, name: &str) -> bool {
        self.presets.iter().any(|p| p == name)
    }

    /// The cached preset names, in first-encountered order.
    pub fn names(&self) -> &[String] {
        &self.presets
    }
}

/// Extracts preset names from `--preset-list` output: lines of the shape
/// `+ <name>:`. Duplicates are dropped, first-encountered order is kept.
fn parse_preset_list(lines: &[String]) -> Vec<String> {
    let pattern = Regex::new(r"\+ ([\w\s]+):").unwrap();
    let mut presets: Vec<String> = Vec::new();
    for line in lines {
        if let Some(captures) = pattern.captures(line) {
            let name = captures[1].trim().to_string();
            if !presets.contains(&name) {
                presets.push(name);
            }
        }
    }
    presets
}
