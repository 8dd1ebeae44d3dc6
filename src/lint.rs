//! The validator chain
//!
//! Each [`Rule`] is a pure check over a [`Document`]. The [`Linter`] applies
//! every rule in [`Rule::ALL`] order and concatenates their violations. Link
//! existence is answered by a [`Catalog`] so that no rule touches the
//! filesystem.

use std::{
    collections::{BTreeSet, HashSet},
    path::{Path, PathBuf},
};

use crate::domain::{Config, Document, FileReport, Rule, Violation};

mod case;
mod extension;
mod front_matter;
mod heading;
mod links;

/// The set of files a link may resolve to.
pub trait Catalog {
    /// Whether a file exists at the given absolute, normalised path.
    fn contains(&self, path: &Path) -> bool;
}

impl Catalog for BTreeSet<PathBuf> {
    fn contains(&self, path: &Path) -> bool {
        BTreeSet::contains(self, path)
    }
}

impl Catalog for HashSet<PathBuf> {
    fn contains(&self, path: &Path) -> bool {
        HashSet::contains(self, path)
    }
}

/// Applies the authoring rules to documents.
#[derive(Debug)]
pub struct Linter<'a, C> {
    config: &'a Config,
    root: &'a Path,
    catalog: &'a C,
}

impl<'a, C: Catalog> Linter<'a, C> {
    /// Creates a linter for documents under `root`.
    ///
    /// `root` must be in the same form as the catalog's paths (both
    /// canonical, or both as discovered).
    #[must_use]
    pub const fn new(config: &'a Config, root: &'a Path, catalog: &'a C) -> Self {
        Self {
            config,
            root,
            catalog,
        }
    }

    /// Whether a document is an image, and so exempt from every rule.
    #[must_use]
    pub fn is_exempt(&self, relative_path: &str) -> bool {
        crate::domain::document::extension(relative_path)
            .is_some_and(|extension| self.config.is_image_extension(extension))
    }

    /// Runs a single rule against a document.
    #[must_use]
    pub fn check(&self, rule: Rule, document: &Document) -> Vec<Violation> {
        match rule {
            Rule::Case => case::check(document),
            Rule::Extension => extension::check(document),
            Rule::Links => links::check(document, self.config, self.root, self.catalog),
            Rule::Heading => heading::check(document),
            Rule::FrontMatter => front_matter::check(document),
        }
    }

    /// Runs every rule against a document, in order.
    ///
    /// Images produce an empty report.
    #[must_use]
    pub fn lint(&self, document: &Document) -> FileReport {
        let path = document.relative_path().to_string();
        if self.is_exempt(&path) {
            tracing::trace!("Skipping image {path}");
            return FileReport::clean(path);
        }

        let violations = Rule::ALL
            .into_iter()
            .flat_map(|rule| self.check(rule, document))
            .collect();

        FileReport::new(path, violations)
    }
}
