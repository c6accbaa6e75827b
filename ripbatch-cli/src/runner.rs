// ripbatch-cli/src/runner.rs
//
// The single orchestration path shared by the headless and interactive
// modes. Runs the batch through ripbatch-core, tees every captured
// HandBrakeCLI line to stdout and a timestamped run-log file, and maps the
// result onto a RunOutcome. Exit-code policy lives here and nowhere else.

use crate::report::ResultReporter;

use ripbatch_core::external::CliSpawner;
use ripbatch_core::{CoreConfig, CoreError, CoreResult, PresetRegistry, RunOutcome};

use log::info;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Exit status for a preset that is not in the valid list. Distinct from the
/// generic failure code so scripts can tell a typo from a broken run.
pub const EXIT_INVALID_PRESET: i32 = 9;

/// Runs the whole batch and reports the outcome through `reporter`.
/// Returns the process exit code.
pub fn run_batch(
    spawner: &CliSpawner,
    registry: &PresetRegistry,
    config: &CoreConfig,
    log_dir: Option<&Path>,
    reporter: &dyn ResultReporter,
) -> i32 {
    let outcome = match execute(spawner, registry, config, log_dir) {
        Ok(encoded) => RunOutcome::success(format!(
            "I am done. Encoded {encoded} file(s).\nCheck the log for details."
        )),
        Err(e) => outcome_for(&e),
    };
    reporter.report(&outcome);
    outcome.exit_code
}

fn execute(
    spawner: &CliSpawner,
    registry: &PresetRegistry,
    config: &CoreConfig,
    log_dir: Option<&Path>,
) -> CoreResult<usize> {
    config.validate()?;

    let log_dir = log_dir
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.output_dir.join("logs"));
    std::fs::create_dir_all(&log_dir)?;
    let log_path = log_dir.join(format!("ripbatch_run_{}.log", crate::logging::get_timestamp()));
    let mut run_log = BufWriter::new(File::create(&log_path)?);
    info!("run log: {}", log_path.display());

    let results = ripbatch_core::process_run(spawner, registry, config, &mut |line| {
        // raw passthrough to the console, plus the run log; flushed per line
        // so the log trails the live encode
        println!("{line}");
        writeln!(run_log, "{line}").ok();
        run_log.flush().ok();
    })?;

    run_log.flush()?;
    Ok(results.len())
}

/// Maps a core error onto the user-facing outcome. The message taxonomy
/// deliberately distinguishes directory problems, transcoder problems, and
/// everything else.
fn outcome_for(error: &CoreError) -> RunOutcome {
    match error {
        CoreError::InvalidPreset {
            requested,
            available,
        } => RunOutcome::failure(
            EXIT_INVALID_PRESET,
            format!(
                "\"{requested}\" is not in the valid preset list\nAvailable presets; {}.",
                available.join(", ")
            ),
        ),
        CoreError::Io(_) | CoreError::Walkdir(_) | CoreError::PathError(_) => {
            RunOutcome::failure(1, format!("I had a directory access error: {error}"))
        }
        CoreError::EncodeFailed { filename, log_tail } => RunOutcome::failure(
            1,
            format!(
                "HandBrake had an error: encoding \"{filename}\" did not report completion\n\
                 --- last output ---\n{log_tail}"
            ),
        ),
        CoreError::DependencyNotFound(_)
        | CoreError::CommandStart { .. }
        | CoreError::CommandWait { .. }
        | CoreError::PresetList(_) => {
            RunOutcome::failure(1, format!("HandBrake had an error: {error}"))
        }
        CoreError::Other(_) => RunOutcome::failure(1, format!("I had an error:\n {error}")),
    }
}
