//! Front matter parsing
//!
//! A front matter block is a YAML mapping delimited by `---` lines at the very
//! top of a document:
//!
//! ```text
//! ---
//! title: Getting started
//! ---
//! Body text.
//! ```
//!
//! The closing delimiter may also be `...`.

use std::collections::BTreeMap;

/// The parsed attributes of a front matter block.
pub type Attributes = BTreeMap<String, serde_yaml::Value>;

/// A document split into its front matter and body.
#[derive(Debug, Clone, PartialEq)]
pub struct Split<'a> {
    /// The parsed attributes, if a well-formed block was found.
    pub attributes: Option<Attributes>,
    /// Everything after the front matter block.
    pub body: &'a str,
}

/// Splits the content of a document into front matter and body.
///
/// A block whose YAML cannot be parsed, or is not a mapping, yields no
/// attributes. Its lines still belong to the block rather than the body.
#[must_use]
pub fn split(content: &str) -> Split<'_> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let Some((raw, body)) = delimit(content) else {
        return Split {
            attributes: None,
            body: content,
        };
    };

    Split {
        attributes: parse(raw),
        body,
    }
}

/// Locates the front matter block, returning its raw YAML and the body.
fn delimit(content: &str) -> Option<(&str, &str)> {
    let mut lines = content.split_inclusive('\n');

    let opening = lines.next()?;
    if opening.trim_end() != "---" {
        return None;
    }

    let yaml_start = opening.len();
    let mut offset = yaml_start;
    for line in lines {
        let trimmed = line.trim_end();
        if trimmed == "---" || trimmed == "..." {
            let raw = &content[yaml_start..offset];
            let body = &content[offset + line.len()..];
            return Some((raw, body));
        }
        offset += line.len();
    }

    None
}

fn parse(raw: &str) -> Option<Attributes> {
    if raw.trim().is_empty() {
        return Some(Attributes::new());
    }

    let value: serde_yaml::Value = match serde_yaml::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!("Ignoring malformed front matter: {e}");
            return None;
        }
    };

    match value {
        serde_yaml::Value::Mapping(mapping) => Some(
            mapping
                .into_iter()
                .filter_map(|(key, value)| match key {
                    serde_yaml::Value::String(key) => Some((key, value)),
                    _ => None,
                })
                .collect(),
        ),
        serde_yaml::Value::Null => Some(Attributes::new()),
        other => {
            tracing::debug!("Ignoring front matter that is not a mapping: {other:?}");
            None
        }
    }
}
