//! Link references extracted from markdown bodies.

use std::{borrow::Cow, sync::LazyLock};

use regex::Regex;

use crate::domain::document;

static CODE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```.+?```").expect("valid code fence pattern"));

static INLINE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`[^`\n]+`").expect("valid inline code pattern"));

/// The destination of an inline link or image: `](target)`, `](<target>)`,
/// or `](target "title")`. Bare targets may hold one level of balanced
/// parentheses.
static INLINE_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\]\(\s*(?:<([^<>\n]*)>|((?:[^\s()<>]|\([^()\s]*\))+))(?:\s+(?:"[^"\n]*"|'[^'\n]*'|\([^()\n]*\)))?\s*\)"#)
        .expect("valid inline link pattern")
});

/// A reference definition: `[label]: target`. Footnotes (`[^1]: ...`) are
/// not links.
static REFERENCE_DEFINITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^ {0,3}\[[^\^\]\n][^\]\n]*\]:[ \t]*(?:<([^<>\n]*)>|(\S+))")
        .expect("valid reference definition pattern")
});

static URI_SCHEME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*:").expect("valid URI scheme pattern")
});

/// How a link target is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// Starts with the root marker and resolves against the documentation
    /// root.
    Rooted,
    /// Resolves against the directory of the linking document.
    Relative,
    /// Has a URI scheme (or is protocol-relative) and is never checked.
    External,
}

/// A link target found in a document body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkReference {
    target: String,
    kind: LinkKind,
}

impl LinkReference {
    /// Classifies a raw link target.
    #[must_use]
    pub fn new(target: String, root_marker: &str) -> Self {
        let kind = if URI_SCHEME.is_match(&target) || target.starts_with("//") {
            LinkKind::External
        } else if !root_marker.is_empty() && target.starts_with(root_marker) {
            LinkKind::Rooted
        } else {
            LinkKind::Relative
        };
        Self { target, kind }
    }

    /// The raw target, exactly as written.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// How the target is resolved.
    #[must_use]
    pub const fn kind(&self) -> LinkKind {
        self.kind
    }

    /// The target without its `#fragment` or `?query`.
    #[must_use]
    pub fn path(&self) -> &str {
        self.target
            .split(['#', '?'])
            .next()
            .unwrap_or(&self.target)
    }

    /// The extension of the path, including the leading dot.
    #[must_use]
    pub fn extension(&self) -> Option<&str> {
        document::extension(self.path())
    }

    /// Whether the target starts with `prefix`, ignoring a single leading
    /// `/`.
    #[must_use]
    pub fn has_prefix(&self, prefix: &str) -> bool {
        let target = self.target.strip_prefix('/').unwrap_or(&self.target);
        target.starts_with(prefix)
    }
}

/// Removes fenced code blocks, fences included.
pub(crate) fn strip_code_fences(text: &str) -> Cow<'_, str> {
    CODE_FENCE.replace_all(text, "")
}

/// Extracts every link target from a markdown body, in document order.
///
/// Links inside fenced code blocks and inline code spans are ignored.
/// Duplicate targets are kept.
#[must_use]
pub fn extract(body: &str, root_marker: &str) -> Vec<LinkReference> {
    let without_fences = strip_code_fences(body);
    let text = INLINE_CODE.replace_all(&without_fences, "");

    let inline = INLINE_LINK
        .captures_iter(&text)
        .filter_map(|c| c.get(1).or_else(|| c.get(2)).map(|m| (m.start(), m.as_str())));
    let definitions = REFERENCE_DEFINITION
        .captures_iter(&text)
        .filter_map(|c| c.get(1).or_else(|| c.get(2)).map(|m| (m.start(), m.as_str())));

    let mut targets: Vec<_> = inline.chain(definitions).collect();
    targets.sort_by_key(|(start, _)| *start);

    targets
        .into_iter()
        .filter(|(_, target)| !target.is_empty())
        .map(|(_, target)| LinkReference::new(target.to_string(), root_marker))
        .collect()
}
