// ripbatch-cli/src/interactive.rs
//
// Directory prompts for the sparse GUI mode. Cancelling either picker leaves
// the run without a directory pair, which the caller reports as an error.

use std::path::PathBuf;

pub fn pick_input_directory() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Pick Video Directory")
        .pick_folder()
}

pub fn pick_output_directory() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Pick Output Directory")
        .pick_folder()
}
