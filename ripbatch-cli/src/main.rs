// ripbatch-cli/src/main.rs
//
// Entry point for the ripbatch batch encoder. Responsibilities:
// - Parsing command-line arguments (cli module).
// - Locating HandBrakeCLI and fetching its preset list exactly once.
// - Handling --list-presets and preset validation before any work happens.
// - Dispatching the headless vs interactive flow; both share runner::run_batch
//   and differ only in how directories are obtained and outcomes rendered.

mod cli;
mod interactive;
mod logging;
mod report;
mod runner;

use crate::cli::Cli;
use crate::report::{ConsoleReporter, DialogReporter, ResultReporter};

use clap::Parser;

use ripbatch_core::external::{locate_handbrake, CliSpawner};
use ripbatch_core::{CoreConfig, PresetRegistry, RunOutcome};

use std::path::PathBuf;
use std::process;

fn main() {
    logging::init();
    let cli = Cli::parse();
    process::exit(run(cli));
}

fn run(cli: Cli) -> i32 {
    let binary = match locate_handbrake() {
        Ok(path) => path,
        Err(e) => {
            println!("HandBrake had an error: {e}");
            return 1;
        }
    };
    let spawner = CliSpawner::new(binary);

    // Spawns one --preset-list process; everything afterwards answers from
    // the registry's cache.
    let registry = match PresetRegistry::fetch(&spawner) {
        Ok(registry) => registry,
        Err(e) => {
            println!("HandBrake had an error: {e}");
            return 1;
        }
    };

    if cli.list_presets {
        print_presets(&registry);
        return 0;
    }

    if !registry.is_valid(&cli.preset) {
        println!("\"{}\" is not in the valid preset list", cli.preset);
        print_presets(&registry);
        return runner::EXIT_INVALID_PRESET;
    }

    match (cli.in_directory.clone(), cli.out_directory.clone()) {
        (Some(input_dir), Some(output_dir)) => {
            headless(&cli, &spawner, &registry, input_dir, output_dir)
        }
        _ => interactive(&cli, &spawner, &registry),
    }
}

fn print_presets(registry: &PresetRegistry) {
    println!("Available presets; {}.", registry.names().join(", "));
    println!("Please check HandBrake for more information.");
}

fn headless(
    cli: &Cli,
    spawner: &CliSpawner,
    registry: &PresetRegistry,
    input_dir: PathBuf,
    output_dir: PathBuf,
) -> i32 {
    let config = build_config(cli, input_dir, output_dir);
    runner::run_batch(
        spawner,
        registry,
        &config,
        cli.log_dir.as_deref(),
        &ConsoleReporter,
    )
}

fn interactive(cli: &Cli, spawner: &CliSpawner, registry: &PresetRegistry) -> i32 {
    let reporter = DialogReporter;

    // A directory given on the command line survives into interactive mode;
    // only the missing one is prompted for.
    let input_dir = cli
        .in_directory
        .clone()
        .or_else(interactive::pick_input_directory);
    let output_dir = cli
        .out_directory
        .clone()
        .or_else(interactive::pick_output_directory);

    let (Some(input_dir), Some(output_dir)) = (input_dir, output_dir) else {
        reporter.report(&RunOutcome::failure(
            1,
            "You have to select both in and out directories",
        ));
        return 1;
    };

    let config = build_config(cli, input_dir, output_dir);
    runner::run_batch(
        spawner,
        registry,
        &config,
        cli.log_dir.as_deref(),
        &reporter,
    )
}

fn build_config(cli: &Cli, input_dir: PathBuf, output_dir: PathBuf) -> CoreConfig {
    let mut config = CoreConfig::new(input_dir, output_dir);
    config.recursive = cli.recursive;
    config.preset = cli.preset.clone();
    config.success_marker = cli.success_marker.clone();
    config
}
