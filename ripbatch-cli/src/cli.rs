// ripbatch-cli/src/cli.rs
//
// Defines the command-line argument surface using clap.

use clap::Parser;

use ripbatch_core::config::{DEFAULT_PRESET, SUCCESS_MARKER};

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Batch encode a directory of video files using HandBrake presets",
    long_about = "Batch encode a directory of video files using HandBrake presets.\n\
        With both -i and -o the run is fully headless; without them a sparse\n\
        GUI prompts for the directories and reports the outcome in a dialog."
)]
pub struct Cli {
    /// Input directory. You need both -i & -o to run headless
    #[arg(short = 'i', long = "in-directory", value_name = "DIR")]
    pub in_directory: Option<PathBuf>,

    /// Output directory. You need both -i & -o to run headless
    #[arg(short = 'o', long = "out-directory", value_name = "DIR")]
    pub out_directory: Option<PathBuf>,

    /// DISABLE recursive scanning of the input directory
    #[arg(short = 'r', long = "recursive", action = clap::ArgAction::SetFalse)]
    pub recursive: bool,

    /// HandBrake preset to use
    #[arg(short = 'p', long = "preset", value_name = "NAME", default_value = DEFAULT_PRESET)]
    pub preset: String,

    /// List available presets and quit
    #[arg(short = 'l', long = "list-presets")]
    pub list_presets: bool,

    /// Line HandBrakeCLI prints when an encode finished; overriding it keeps
    /// the success check working if HandBrake changes its wording
    #[arg(long = "success-marker", value_name = "LINE", default_value = SUCCESS_MARKER)]
    pub success_marker: String,

    /// Directory for the run log (defaults to OUT_DIR/logs)
    #[arg(long = "log-dir", value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}
