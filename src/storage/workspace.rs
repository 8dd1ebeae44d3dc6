//! Linting a documentation tree on disk
//!
//! This is the only place the validator chain meets the filesystem: files
//! are discovered, read, and handed to the [`Linter`] as [`Document`]
//! values. Files are linted in parallel; results keep discovery order.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use tracing::instrument;

use crate::{
    domain::{Config, Document, FileReport, LoadError},
    lint::Linter,
    report::Report,
    storage::discover::{DiscoveryError, discover},
};

/// A fatal error that stops a lint run before any report is produced.
#[derive(Debug, thiserror::Error)]
pub enum LintError {
    /// The documentation root could not be enumerated.
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),
    /// A discovered file could not be read.
    #[error(transparent)]
    Load(#[from] LoadError),
}

/// Lints every file beneath the configured root.
///
/// # Errors
///
/// Returns an error if the root cannot be enumerated or a discovered file
/// cannot be read. Rule violations are never errors; they are collected in
/// the [`Report`].
#[instrument(level = "debug", skip(config), fields(root = %config.root.display()))]
pub fn lint_tree(config: &Config) -> Result<Report, LintError> {
    let (root, files) = discover(&config.root)?;
    let catalog: BTreeSet<PathBuf> = files.iter().cloned().collect();
    let linter = Linter::new(config, &root, &catalog);

    let reports = files
        .par_iter()
        .map(|path| lint_file(&linter, &root, path))
        .collect::<Result<Vec<_>, _>>()?;

    let report = Report::new(reports);
    tracing::info!(
        "Linted {} files, {} with violations",
        report.files_scanned(),
        report.files().len()
    );

    Ok(report)
}

fn lint_file(
    linter: &Linter<'_, BTreeSet<PathBuf>>,
    root: &Path,
    path: &Path,
) -> Result<FileReport, LoadError> {
    let relative = path
        .strip_prefix(root)
        .map(|p| p.to_string_lossy().replace('\\', "/"))
        .unwrap_or_default();

    // Images are exempt, so there is no need to read them.
    if linter.is_exempt(&relative) {
        return Ok(FileReport::clean(relative));
    }

    let document = Document::load(root, path.to_path_buf())?;
    Ok(linter.lint(&document))
}
