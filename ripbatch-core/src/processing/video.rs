//! Main batch encoding orchestration.
//!
//! [`process_run`] drives a whole run: validate the configuration, ensure the
//! output directory exists, enumerate the input files, and invoke
//! [`encode_file`] for each in order. The first file whose encode does not
//! report completion aborts the remainder of the run; nothing after it is
//! attempted.

use crate::config::{CoreConfig, OUTPUT_EXTENSION};
use crate::discovery::find_input_files;
use crate::error::{CoreError, CoreResult};
use crate::external::{encode_args, HandBrakeProcess, HandBrakeSpawner};
use crate::presets::PresetRegistry;
use crate::{EncodeJob, EncodeResult};

use log::{info, warn};

use std::path::{Path, PathBuf};
use std::time::Instant;

/// Number of captured lines carried into an [`CoreError::EncodeFailed`].
const FAILURE_LOG_TAIL_LINES: usize = 20;

/// Derives the output path for an input file: the input's stem plus the fixed
/// output extension, joined onto `output_dir`. The input's own directory and
/// extension never leak into the result.
pub fn output_path_for(input: &Path, output_dir: &Path) -> CoreResult<PathBuf> {
    let stem = input.file_stem().ok_or_else(|| {
        CoreError::PathError(format!("no file name in '{}'", input.display()))
    })?;
    Ok(output_dir.join(format!("{}.{}", stem.to_string_lossy(), OUTPUT_EXTENSION)))
}

/// Runs one encode job and reports whether the completion marker was seen.
///
/// The preset is re-checked against the registry before anything is spawned;
/// an invalid preset is a configuration error, not a process failure. Every
/// merged output line is handed to `on_line` as it arrives and captured into
/// the returned [`EncodeResult`].
///
/// Success is decided solely by the marker: a process that exits 0 without
/// printing it still failed, because HandBrakeCLI's exit codes are not
/// trusted.
pub fn encode_file<S, F>(
    spawner: &S,
    registry: &PresetRegistry,
    job: &EncodeJob,
    success_marker: &str,
    on_line: &mut F,
) -> CoreResult<EncodeResult>
where
    S: HandBrakeSpawner,
    F: FnMut(&str),
{
    if !registry.is_valid(&job.preset) {
        return Err(CoreError::InvalidPreset {
            requested: job.preset.clone(),
            available: registry.names().to_vec(),
        });
    }

    let start = Instant::now();
    let mut process = spawner.spawn(&encode_args(&job.preset, &job.input_path, &job.output_path))?;

    let mut captured = Vec::new();
    let mut marker_seen = false;
    process.for_each_line(|line| {
        if line.trim() == success_marker {
            marker_seen = true;
        }
        on_line(line);
        captured.push(line.to_string());
    })?;

    let status = process.wait()?;
    if !marker_seen {
        warn!(
            "{} exited with {} without reporting completion",
            job.input_path.display(),
            status
        );
    }

    Ok(EncodeResult {
        job: job.clone(),
        succeeded: marker_seen,
        captured_output: captured,
        duration: start.elapsed(),
    })
}

/// Runs a full batch: validate, create the output directory, enumerate, and
/// encode each file in enumeration order.
///
/// Returns the per-file results of a fully successful run. Zero discovered
/// files is a successful no-op. The first failing file converts into
/// [`CoreError::EncodeFailed`] and aborts the run.
pub fn process_run<S, F>(
    spawner: &S,
    registry: &PresetRegistry,
    config: &CoreConfig,
    on_line: &mut F,
) -> CoreResult<Vec<EncodeResult>>
where
    S: HandBrakeSpawner,
    F: FnMut(&str),
{
    if !registry.is_valid(&config.preset) {
        return Err(CoreError::InvalidPreset {
            requested: config.preset.clone(),
            available: registry.names().to_vec(),
        });
    }

    // The one piece of auto-correction in the whole run.
    std::fs::create_dir_all(&config.output_dir)?;

    let files = find_input_files(&config.input_dir, config.recursive)?;
    if files.is_empty() {
        info!(
            "no files found under {}, nothing to do",
            config.input_dir.display()
        );
        return Ok(Vec::new());
    }
    info!("found {} file(s) to encode", files.len());

    let mut results = Vec::with_capacity(files.len());
    for input_path in files {
        let job = EncodeJob {
            output_path: output_path_for(&input_path, &config.output_dir)?,
            input_path,
            preset: config.preset.clone(),
        };
        info!("encoding {}", job.input_path.display());

        let result = encode_file(spawner, registry, &job, &config.success_marker, on_line)?;
        if !result.succeeded {
            return Err(CoreError::EncodeFailed {
                filename: result.job.input_path.display().to_string(),
                log_tail: log_tail(&result.captured_output),
            });
        }
        info!(
            "finished {} in {}s",
            result.job.input_path.display(),
            result.duration.as_secs()
        );
        results.push(result);
    }
    Ok(results)
}

fn log_tail(lines: &[String]) -> String {
    let start = lines.len().saturating_sub(FAILURE_LOG_TAIL_LINES);
    lines[start..].join("\n")
}
