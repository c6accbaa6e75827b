// ripbatch-cli/src/report.rs
//
// The two ways a finished run reaches the user. Decision logic (exit codes,
// message wording) lives in the runner; a reporter only renders the outcome
// on its channel, so the headless and interactive flows share one
// orchestration path.

use ripbatch_core::RunOutcome;

/// Renders the terminal outcome of a run.
pub trait ResultReporter {
    fn report(&self, outcome: &RunOutcome);
}

/// Prints the outcome message to standard output.
pub struct ConsoleReporter;

impl ResultReporter for ConsoleReporter {
    fn report(&self, outcome: &RunOutcome) {
        println!("{}", outcome.message);
    }
}

/// Shows the outcome in a modal dialog: info on success, error otherwise.
pub struct DialogReporter;

impl ResultReporter for DialogReporter {
    fn report(&self, outcome: &RunOutcome) {
        let (title, level) = if outcome.exit_code == 0 {
            ("Done", rfd::MessageLevel::Info)
        } else {
            ("ripbatch", rfd::MessageLevel::Error)
        };
        rfd::MessageDialog::new()
            .set_title(title)
            .set_description(outcome.message.as_str())
            .set_level(level)
            .show();
    }
}
