//! Filesystem utilities.

pub mod fs;
pub mod temp_file;

pub use fs::ensure_output_dir;
pub use temp_file::{TempFile, cleanup_all_temp_files};
