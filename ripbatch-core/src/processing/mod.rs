//! Batch orchestration and per-file encode invocation.

pub mod video;

pub use video::{encode_file, output_path_for, process_run};
