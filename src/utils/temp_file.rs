//! Scratch files removed on drop or on Ctrl+C.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex};

/// RAII guard for a scratch file such as a partial download or a preview.
///
/// The file does not have to exist yet; it is removed (if present) when the
/// guard is dropped or when [`cleanup_all_temp_files`] runs.
#[derive(Debug)]
pub struct TempFile {
    path: PathBuf,
}

impl TempFile {
    /// Register `path` as scratch.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        register_temp_file(&path);
        Self { path }
    }

    /// Path of the scratch file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
        unregister_temp_file(&self.path);
    }
}

/// Scratch paths still alive, for cleanup on signal.
static ACTIVE_TEMP_FILES: LazyLock<Mutex<Vec<PathBuf>>> = LazyLock::new(|| Mutex::new(Vec::new()));

fn register_temp_file(path: &Path) {
    if let Ok(mut files) = ACTIVE_TEMP_FILES.lock() {
        files.push(path.to_path_buf());
    }
}

fn unregister_temp_file(path: &Path) {
    if let Ok(mut files) = ACTIVE_TEMP_FILES.lock() {
        files.retain(|p| p != path);
    }
}

/// Remove every registered scratch file. Called from the Ctrl+C handler.
pub fn cleanup_all_temp_files() {
    if let Ok(files) = ACTIVE_TEMP_FILES.lock() {
        for path in files.iter() {
            let _ = fs::remove_file(path);
        }
    }
}
