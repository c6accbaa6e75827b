//! File discovery module for finding input files to encode.
//!
//! Discovery is deliberately unfiltered: every regular file found is a
//! candidate job, and HandBrakeCLI is the judge of whether it can be encoded.
//! Both modes sort by path so the job order is deterministic across
//! filesystems.

use crate::error::CoreResult;

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Finds the input files for a run.
///
/// With `recursive` set, the whole tree rooted at `input_dir` is walked and
/// every regular file at any depth is returned. Otherwise only the direct
/// file children of `input_dir` are returned; top-level directories are
/// skipped.
///
/// A missing or unreadable `input_dir` is an error. An empty directory is
/// `Ok(vec![])` — the orchestrator treats zero jobs as a successful no-op.
pub fn find_input_files(input_dir: &Path, recursive: bool) -> CoreResult<Vec<PathBuf>> {
    let mut files = if recursive {
        collect_recursive(input_dir)?
    } else {
        collect_flat(input_dir)?
    };
    files.sort();
    log::debug!(
        "discovered {} file(s) under {} (recursive: {})",
        files.len(),
        input_dir.display(),
        recursive
    );
    Ok(files)
}

fn collect_recursive(input_dir: &Path) -> CoreResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(input_dir).follow_links(false) {
        let entry = entry?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn collect_flat(input_dir: &Path) -> CoreResult<Vec<PathBuf>> {
    let files = std::fs::read_dir(input_dir)?
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            path.is_file().then_some(path)
        })
        .collect();
    Ok(files)
}
