//! File discovery
//!
//! Enumerates every file beneath the documentation root, following symbolic
//! links. Hidden files and directories (names starting with `.`) are skipped.
//! Nothing is filtered by extension here; that is the validator chain's job.

use std::{
    io,
    path::{Path, PathBuf},
};

use walkdir::{DirEntry, WalkDir};

/// The documentation root could not be enumerated.
#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    /// The root does not exist or cannot be resolved.
    #[error("documentation root {} cannot be opened", path.display())]
    Root {
        /// The root as given.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The root exists but is not a directory.
    #[error("documentation root {} is not a directory", .0.display())]
    NotADirectory(PathBuf),
    /// A directory beneath the root could not be read.
    #[error("failed to walk documentation tree")]
    Walk(#[from] walkdir::Error),
}

/// Returns the canonical root and every file beneath it.
///
/// Files are returned in lexical order of their names at each directory
/// level, so repeated runs over the same tree agree.
///
/// # Errors
///
/// Returns an error if the root is missing, is not a directory, or any
/// directory beneath it is unreadable.
pub fn discover(root: &Path) -> Result<(PathBuf, Vec<PathBuf>), DiscoveryError> {
    let canonical = root.canonicalize().map_err(|source| DiscoveryError::Root {
        path: root.to_path_buf(),
        source,
    })?;

    if !canonical.is_dir() {
        return Err(DiscoveryError::NotADirectory(root.to_path_buf()));
    }

    let mut files = Vec::new();
    let walker = WalkDir::new(&canonical)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry));
    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }

    tracing::info!("Discovered {} files under {}", files.len(), canonical.display());

    Ok((canonical, files))
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_str().is_some_and(|name| name.starts_with('.'))
}
