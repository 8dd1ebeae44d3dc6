use std::{
    ffi::OsString,
    path::{Component, Path, PathBuf},
};

use super::Catalog;
use crate::domain::{
    Config, Document, Violation,
    link::{self, LinkKind, LinkReference},
};

/// Links must name existing documents by ID.
///
/// External links are never checked. Image links and asset downloads are
/// skipped. Every other link is checked for a file extension, for deprecated
/// prefixes, and for a matching `.md` or `.mdx` document.
pub(super) fn check<C: Catalog>(
    document: &Document,
    config: &Config,
    root: &Path,
    catalog: &C,
) -> Vec<Violation> {
    link::extract(document.body(), config.root_marker())
        .into_iter()
        .filter(|link| link.kind() != LinkKind::External)
        .flat_map(|link| check_link(&link, document, config, root, catalog))
        .collect()
}

fn check_link<C: Catalog>(
    link: &LinkReference,
    document: &Document,
    config: &Config,
    root: &Path,
    catalog: &C,
) -> Vec<Violation> {
    let mut violations = Vec::new();

    // Same-page anchor.
    if link.path().is_empty() {
        return violations;
    }

    let extension = link.extension();
    if extension.is_some_and(|e| config.is_image_extension(e)) {
        return violations;
    }

    if let Some(prefix) = config.asset_prefixes().iter().find(|p| link.has_prefix(p)) {
        tracing::trace!("Skipping asset link {} under {prefix}", link.target());
        return violations;
    }

    if let Some(extension) = extension {
        violations.push(Violation::LinkExtension {
            link: link.target().to_string(),
            extension: extension.to_string(),
        });
    }

    for prefix in config.deprecated_prefixes() {
        if link.has_prefix(prefix) {
            violations.push(Violation::DeprecatedPrefix {
                link: link.target().to_string(),
                prefix: prefix.clone(),
            });
        }
    }

    let resolved = resolve(link, document, config, root);
    if !exists(&resolved, catalog) {
        tracing::debug!(
            "{}: link {} resolved to missing {}",
            document.relative_path(),
            link.target(),
            resolved.display()
        );
        violations.push(Violation::LinkNotFound {
            link: link.target().to_string(),
            root_marker: config.root_marker().to_string(),
        });
    }

    violations
}

/// Resolves a link to the stem of the document it names.
fn resolve(link: &LinkReference, document: &Document, config: &Config, root: &Path) -> PathBuf {
    let path = link.path();
    let joined = match link.kind() {
        LinkKind::Rooted => root.join(path.strip_prefix(config.root_marker()).unwrap_or(path)),
        // A leading `/` without the marker is still relative to the document.
        LinkKind::Relative | LinkKind::External => {
            document.directory().join(path.trim_start_matches('/'))
        }
    };
    normalize(&joined)
}

fn exists<C: Catalog>(stem: &Path, catalog: &C) -> bool {
    [".md", ".mdx"].into_iter().any(|extension| {
        let mut candidate = OsString::from(stem.as_os_str());
        candidate.push(extension);
        catalog.contains(Path::new(&candidate))
    })
}

/// Lexically resolves `.` and `..` components.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    normalized.push(component);
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}
