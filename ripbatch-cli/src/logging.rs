// ripbatch-cli/src/logging.rs
//
// Logging setup and related helpers. The application uses env_logger through
// the RUST_LOG environment variable (default: info); the HandBrakeCLI output
// itself is not routed through the logger — it is passed straight through to
// stdout and the run-log file by the runner.

/// Initializes env_logger with an `info` default filter.
pub fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

/// Returns the current local timestamp formatted as "YYYYMMDD_HHMMSS", used
/// for run-log file names.
pub fn get_timestamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}
