//! Filesystem listing — read one directory and return its entries sorted.
//!
//! Only the immediate children are listed; nothing is read from the files
//! themselves.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure to list the target directory.
#[derive(Debug, Error)]
pub enum ListError {
    #[error("cannot list directory `{}`", dir.display())]
    ReadDir {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed while reading entries of `{}`", dir.display())]
    ReadEntry {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One directory entry, as seen by the classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    /// `true` for regular files, including symlinks that resolve to one.
    pub is_file: bool,
}

/// List the entries of `dir`, sorted by ordinal string comparison.
///
/// Symlinks are followed when deciding `is_file`; an entry whose metadata
/// cannot be read counts as not a file.
pub fn list_entries(dir: &Path) -> Result<Vec<Entry>, ListError> {
    let read_dir = std::fs::read_dir(dir).map_err(|source| ListError::ReadDir {
        dir: dir.to_path_buf(),
        source,
    })?;

    let mut entries = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|source| ListError::ReadEntry {
            dir: dir.to_path_buf(),
            source,
        })?;
        let name = entry.file_name().to_string_lossy().into_owned();
        let is_file = std::fs::metadata(entry.path())
            .map(|meta| meta.is_file())
            .unwrap_or(false);
        entries.push(Entry { name, is_file });
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}
