use std::fmt;

use serde::Serialize;

/// The authoring rules, in the order they are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rule {
    /// Paths must be lower-case.
    Case,
    /// Files must be markdown.
    Extension,
    /// Links must point at existing documents by ID.
    Links,
    /// Bodies must not contain a top level heading.
    Heading,
    /// Front matter must define a title.
    FrontMatter,
}

impl Rule {
    /// All rules, in execution order.
    pub const ALL: [Self; 5] = [
        Self::Case,
        Self::Extension,
        Self::Links,
        Self::Heading,
        Self::FrontMatter,
    ];
}

/// A single rule failure in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// The relative path contains upper-case characters.
    UpperCasePath,
    /// The file is neither `.md` nor `.mdx`.
    InvalidExtension,
    /// A link names a file rather than a document ID.
    LinkExtension {
        /// The raw link target.
        link: String,
        /// The offending extension, including its dot.
        extension: String,
    },
    /// A link carries a deprecated prefix.
    DeprecatedPrefix {
        /// The raw link target.
        link: String,
        /// The deprecated prefix.
        prefix: String,
    },
    /// A link does not resolve to a document.
    LinkNotFound {
        /// The raw link target.
        link: String,
        /// The marker that would make the link absolute.
        root_marker: String,
    },
    /// The body contains a top level heading.
    TopLevelHeading {
        /// The heading line.
        heading: String,
    },
    /// The front matter has no `title`.
    MissingTitle,
}

impl Violation {
    /// The rule that produced this violation.
    #[must_use]
    pub const fn rule(&self) -> Rule {
        match self {
            Self::UpperCasePath => Rule::Case,
            Self::InvalidExtension => Rule::Extension,
            Self::LinkExtension { .. } | Self::DeprecatedPrefix { .. } | Self::LinkNotFound { .. } => {
                Rule::Links
            }
            Self::TopLevelHeading { .. } => Rule::Heading,
            Self::MissingTitle => Rule::FrontMatter,
        }
    }

    /// Renders the message, passing offending text through `error` and
    /// suggested fixes through `hint`.
    ///
    /// The [`fmt::Display`] implementation renders the message with both
    /// styles as the identity.
    #[must_use]
    pub fn render(&self, error: impl Fn(&str) -> String, hint: impl Fn(&str) -> String) -> String {
        match self {
            Self::UpperCasePath => {
                "Files and folders must be lower-case and words must be separated with a dash (-)."
                    .to_string()
            }
            Self::InvalidExtension => "File extension must be .md or .mdx.".to_string(),
            Self::LinkExtension { link, extension } => {
                format!("Remove \"{}\" link \"{extension}\" extension.", error(link))
            }
            Self::DeprecatedPrefix { link, prefix } => {
                format!("Remove \"{}\" link \"{prefix}\" prefix.", error(link))
            }
            Self::LinkNotFound { link, root_marker } => format!(
                "Linked doc ID \"{}\" doesn't exist. Fix relative path or alternatively prepend \
                 with {} to make the link absolute.",
                error(link),
                hint(root_marker)
            ),
            Self::TopLevelHeading { heading } => format!(
                "No top level markdown title allowed: \"{}\", use front-matter \"title\" instead.",
                error(heading)
            ),
            Self::MissingTitle => "Front matter should have \"title\" property defined.".to_string(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(str::to_string, str::to_string))
    }
}

/// The violations found in one document, in rule order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    path: String,
    violations: Vec<Violation>,
}

impl FileReport {
    /// Creates a report for the document at `path` (relative to the root).
    #[must_use]
    pub const fn new(path: String, violations: Vec<Violation>) -> Self {
        Self { path, violations }
    }

    /// A report with no violations.
    #[must_use]
    pub const fn clean(path: String) -> Self {
        Self::new(path, Vec::new())
    }

    /// The path relative to the documentation root.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The violations, in rule order.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Whether the document passed every rule.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_renders_plain_messages() {
        let violation = Violation::LinkNotFound {
            link: "setup".to_string(),
            root_marker: "/docs/".to_string(),
        };

        assert_eq!(
            violation.to_string(),
            "Linked doc ID \"setup\" doesn't exist. Fix relative path or alternatively prepend \
             with /docs/ to make the link absolute."
        );
        assert_eq!(
            Violation::LinkExtension {
                link: "setup.md".to_string(),
                extension: ".md".to_string(),
            }
            .to_string(),
            "Remove \"setup.md\" link \".md\" extension."
        );
    }

    #[test]
    fn render_styles_offending_text_and_hints() {
        let violation = Violation::LinkNotFound {
            link: "setup".to_string(),
            root_marker: "/docs/".to_string(),
        };

        let rendered = violation.render(|s| format!("<{s}>"), |s| format!("[{s}]"));

        assert!(rendered.contains("\"<setup>\""));
        assert!(rendered.contains("with [/docs/] to"));
    }

    #[test]
    fn every_violation_maps_to_a_rule() {
        let heading = Violation::TopLevelHeading {
            heading: "# Title".to_string(),
        };

        assert_eq!(Violation::UpperCasePath.rule(), Rule::Case);
        assert_eq!(Violation::InvalidExtension.rule(), Rule::Extension);
        assert_eq!(heading.rule(), Rule::Heading);
        assert_eq!(Violation::MissingTitle.rule(), Rule::FrontMatter);
        assert_eq!(
            Violation::DeprecatedPrefix {
                link: "pages/a".to_string(),
                prefix: "pages/".to_string(),
            }
            .rule(),
            Rule::Links
        );
    }
}
