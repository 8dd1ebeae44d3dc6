use std::{
    io,
    path::{Component, Path, PathBuf},
};

use crate::storage::front_matter::{self, Attributes};

/// A file beneath the documentation root.
///
/// Documents are immutable values. The validator chain only ever reads them.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    path: PathBuf,
    relative_path: String,
    content: String,
    front_matter: Option<Attributes>,
    body_start: usize,
}

impl Document {
    /// Builds a document from its absolute path and content.
    ///
    /// The relative path is computed by stripping `root` from `path` and
    /// joining the remaining components with `/`.
    #[must_use]
    pub fn new(root: &Path, path: PathBuf, content: String) -> Self {
        let relative_path = relative_path(root, &path);

        let split = front_matter::split(&content);
        let front_matter = split.attributes;
        let body_start = content.len() - split.body.len();

        Self {
            path,
            relative_path,
            content,
            front_matter,
            body_start,
        }
    }

    /// Reads a document from disk.
    ///
    /// Content that is not valid UTF-8 is decoded lossily.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn load(root: &Path, path: PathBuf) -> Result<Self, LoadError> {
        let bytes = std::fs::read(&path).map_err(|source| LoadError {
            path: path.clone(),
            source,
        })?;
        let content = String::from_utf8_lossy(&bytes).into_owned();
        Ok(Self::new(root, path, content))
    }

    /// The absolute path of the document.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The path relative to the documentation root, `/`-separated.
    #[must_use]
    pub fn relative_path(&self) -> &str {
        &self.relative_path
    }

    /// The extension of the file name, including the leading dot.
    #[must_use]
    pub fn extension(&self) -> Option<&str> {
        extension(&self.relative_path)
    }

    /// The directory containing the document.
    #[must_use]
    pub fn directory(&self) -> &Path {
        self.path.parent().unwrap_or(&self.path)
    }

    /// The raw content, front matter included.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// The parsed front matter, if the document has a well-formed block.
    #[must_use]
    pub const fn front_matter(&self) -> Option<&Attributes> {
        self.front_matter.as_ref()
    }

    /// The content with the front matter block stripped.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.content[self.body_start..]
    }
}

/// A discovered file could not be read.
#[derive(Debug, thiserror::Error)]
#[error("failed to read {}", path.display())]
pub struct LoadError {
    /// The path of the unreadable file.
    pub path: PathBuf,
    /// The underlying I/O error.
    #[source]
    pub source: io::Error,
}

/// Returns the extension of the last segment of a `/`-separated path,
/// including the leading dot.
///
/// Leading dots do not start an extension, so `.gitignore` has none.
#[must_use]
pub fn extension(path: &str) -> Option<&str> {
    let name = path.rsplit('/').next().unwrap_or(path);
    if name == ".." {
        return None;
    }
    let start = name.trim_start_matches('.').len();
    let leading_dots = name.len() - start;
    name[leading_dots..]
        .rfind('.')
        .map(|index| &name[leading_dots + index..])
}

fn relative_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(segment) => Some(segment.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
