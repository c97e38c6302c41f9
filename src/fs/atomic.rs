//! Atomic document writes.
//!
//! A document written with `--output` is often picked up by another process
//! (the agent runner) as soon as it appears. Writes go through a sibling
//! temporary file that is synced and then renamed over the target, so readers
//! see either the previous document or the complete new one.
//!
//! - Source and destination must be on the same filesystem for the rename
//! - On crash, a temporary file named `.{filename}.{pid}.tmp` may remain

use crate::error::{CharterError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write a string to a file, creating parent directories.
///
/// # Example
///
/// ```no_run
/// use charter::fs::atomic_write_file;
///
/// atomic_write_file("prompts/system.md", "You are Charter...\n")?;
/// # Ok::<(), charter::error::CharterError>(())
/// ```
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            CharterError::Io(format!(
                "failed to create parent directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path)?;
    write_and_sync(&temp_path, content.as_bytes())?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        CharterError::Io(format!(
            "failed to atomically replace '{}': {}",
            path.display(),
            e
        ))
    })
}

/// Sibling temporary path: `.{filename}.{pid}.tmp`.
fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            CharterError::UserError(format!("invalid output path '{}'", target.display()))
        })?;

    let temp_name = format!(".{}.{}.tmp", filename, std::process::id());
    Ok(match target.parent() {
        Some(parent) => parent.join(temp_name),
        None => PathBuf::from(temp_name),
    })
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        CharterError::Io(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    file.write_all(content)
        .and_then(|()| file.sync_all())
        .map_err(|e| {
            let _ = fs::remove_file(path);
            CharterError::Io(format!("failed to write temporary file: {}", e))
        })
}
