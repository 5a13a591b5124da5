//! Atomic file output for generated manifests and formulas.
//!
//! Content goes to `.{filename}.tmp` beside the target, is synced, then
//! renamed over the target. A reader (or `brew`) never sees a half-written
//! formula. Source and destination share a directory, so the rename stays on
//! one filesystem.

use crate::error::{FormulaError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically replace `path` with `content`, creating parent directories.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let fail = |message: String| FormulaError::Write {
        path: path.to_path_buf(),
        message,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            fail(format!(
                "failed to create parent directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path).ok_or_else(|| fail("invalid file path".to_string()))?;

    if let Err(e) = write_and_sync(&temp_path, content.as_bytes()) {
        let _ = fs::remove_file(&temp_path);
        return Err(fail(format!("failed to write temporary file: {}", e)));
    }

    // rename() replaces an existing target on both POSIX and Windows.
    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(fail(format!("failed to replace file: {}", e)));
    }

    Ok(())
}

fn temp_path_for(target: &Path) -> Option<PathBuf> {
    let filename = target.file_name()?.to_str()?;
    let parent = target.parent().unwrap_or(Path::new("."));
    Some(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content)?;
    file.sync_all()
}
