//! Atomic prompt file writes.
//!
//! 1. Write content to a temporary file in the same directory
//! 2. Sync the file to disk (fsync)
//! 3. Rename it over the target
//!
//! On POSIX the rename is atomic when source and target share a filesystem,
//! which holds because the temp file sits next to the target. Elsewhere an
//! existing target is removed first, so a crash in between can lose it.
//! A crash before the rename may leave a `.{filename}.{pid}.tmp` behind.

use crate::error::{MissionError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write a string to a file, creating parent directories.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            MissionError::UserError(format!(
                "failed to create parent directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path)?;
    write_and_sync(&temp_path, content.as_bytes())?;
    replace(&temp_path, path)
}

/// Temp file path next to the target, unique per process.
fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            MissionError::UserError(format!("invalid output path '{}'", target.display()))
        })?;

    let temp_name = format!(".{}.{}.tmp", filename, std::process::id());
    Ok(match target.parent() {
        Some(parent) => parent.join(temp_name),
        None => PathBuf::from(temp_name),
    })
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        MissionError::UserError(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    let written = file.write_all(content).and_then(|()| file.sync_all());
    if let Err(e) = written {
        let _ = fs::remove_file(path);
        return Err(MissionError::UserError(format!(
            "failed to write temporary file '{}': {}",
            path.display(),
            e
        )));
    }

    Ok(())
}

fn replace(source: &Path, target: &Path) -> Result<()> {
    clear_target(target);

    fs::rename(source, target).map_err(|e| {
        let _ = fs::remove_file(source);
        MissionError::UserError(format!("failed to replace '{}': {}", target.display(), e))
    })
}

/// POSIX rename replaces an existing target in one step.
#[cfg(unix)]
fn clear_target(_target: &Path) {}

#[cfg(not(unix))]
fn clear_target(target: &Path) {
    if target.exists() {
        let _ = fs::remove_file(target);
    }
}
