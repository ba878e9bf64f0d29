//! Directory walker.
//!
//! Enumerates candidate files under a root folder. Traversal is top-down and
//! deterministic: entries of each directory are visited in file-name order,
//! and a directory's files come before the contents of its subdirectories.

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{PowCheckError, Result};

/// Lists files under `root` whose name ends in `.{extension}`.
///
/// With `recursive` unset only the root's immediate entries are considered.
/// Symlinked directories are not descended into. A subdirectory that cannot
/// be read is logged and skipped. Names that are not valid UTF-8 are matched
/// lossily and logged.
///
/// # Errors
///
/// Returns [`PowCheckError::InvalidRoot`] if `root` is not a directory, or an
/// I/O error if the root itself cannot be listed.
pub fn discover(root: &Path, recursive: bool, extension: &str) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(PowCheckError::InvalidRoot(root.to_path_buf()));
    }

    let suffix = format!(".{}", extension.trim_start_matches('.'));
    let mut found = Vec::new();
    scan_directory(root, recursive, &suffix, &mut found)?;

    tracing::debug!(root = %root.display(), count = found.len(), "directory scan complete");
    Ok(found)
}

fn scan_directory(dir: &Path, recursive: bool, suffix: &str, found: &mut Vec<PathBuf>) -> io::Result<()> {
    let mut entries = fs::read_dir(dir)?.collect::<io::Result<Vec<_>>>()?;
    entries.sort_by_key(|entry| entry.file_name());

    let mut subdirs = Vec::new();
    for entry in entries {
        let path = entry.path();
        let file_type = entry.file_type()?;

        if file_type.is_dir() {
            if recursive {
                subdirs.push(path);
            }
            continue;
        }

        let is_file = file_type.is_file() || (file_type.is_symlink() && path.is_file());
        if is_file && has_suffix(&entry.file_name(), suffix) {
            tracing::debug!(path = %path.display(), "discovered candidate");
            found.push(path);
        }
    }

    for subdir in subdirs {
        if let Err(e) = scan_directory(&subdir, recursive, suffix, found) {
            tracing::warn!(dir = %subdir.display(), error = %e, "skipping unreadable directory");
        }
    }

    Ok(())
}

fn has_suffix(name: &OsStr, suffix: &str) -> bool {
    if let Some(name) = name.to_str() {
        return name.ends_with(suffix);
    }
    let lossy = name.to_string_lossy();
    tracing::warn!(name = %lossy, "file name is not valid UTF-8");
    lossy.ends_with(suffix)
}
