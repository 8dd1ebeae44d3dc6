use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Configuration for the documentation linter.
///
/// Holds the documentation root and the knobs that shape the link and
/// exclusion rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// The root directory of the documentation tree.
    pub root: PathBuf,

    /// Extensions (including the leading dot) of image files.
    ///
    /// Image files are never linted, and links to images are never checked.
    image_extensions: Vec<String>,

    /// Link prefixes that are no longer valid, such as a legacy `pages/`
    /// segment.
    deprecated_prefixes: Vec<String>,

    /// Link prefixes of downloadable assets, such as `configs/`.
    ///
    /// Links under these prefixes are exempt from the extension and existence
    /// checks. Empty by default, in which case asset links are checked like
    /// any other link.
    asset_prefixes: Vec<String>,

    /// The marker that makes a link absolute, such as `/docs/`.
    ///
    /// Absolute links are resolved against [`Config::root`] with the marker
    /// stripped.
    root_marker: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: default_root(),
            image_extensions: default_image_extensions(),
            deprecated_prefixes: default_deprecated_prefixes(),
            asset_prefixes: Vec::new(),
            root_marker: default_root_marker(),
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Read)?;
        Ok(toml::from_str(&content)?)
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(ConfigError::Write)
    }

    /// Returns the image extensions, each including its leading dot.
    #[must_use]
    pub fn image_extensions(&self) -> &[String] {
        &self.image_extensions
    }

    /// Checks whether an extension (including its leading dot) is an image
    /// extension.
    #[must_use]
    pub fn is_image_extension(&self, extension: &str) -> bool {
        self.image_extensions.iter().any(|e| e == extension)
    }

    /// Returns the deprecated link prefixes.
    #[must_use]
    pub fn deprecated_prefixes(&self) -> &[String] {
        &self.deprecated_prefixes
    }

    /// Returns the asset download prefixes exempt from link checks.
    #[must_use]
    pub fn asset_prefixes(&self) -> &[String] {
        &self.asset_prefixes
    }

    /// Adds an asset download prefix.
    ///
    /// Returns `true` if the prefix was added, `false` if it already existed.
    pub fn add_asset_prefix(&mut self, prefix: String) -> bool {
        if self.asset_prefixes.contains(&prefix) {
            false
        } else {
            self.asset_prefixes.push(prefix);
            true
        }
    }

    /// Returns the marker that makes a link absolute.
    #[must_use]
    pub fn root_marker(&self) -> &str {
        &self.root_marker
    }
}

/// Errors that can occur when loading or saving a [`Config`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file: {0}")]
    Read(#[source] std::io::Error),
    /// The config file could not be written.
    #[error("failed to write config file: {0}")]
    Write(#[source] std::io::Error),
    /// The config file is not valid TOML, or has invalid values.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    /// The config could not be serialized.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

fn default_root() -> PathBuf {
    PathBuf::from("docs")
}

fn default_image_extensions() -> Vec<String> {
    [".gif", ".jpg", ".jpeg", ".png", ".webp"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_deprecated_prefixes() -> Vec<String> {
    vec!["pages/".to_string()]
}

fn default_root_marker() -> String {
    "/docs/".to_string()
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the domain
/// type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_root")]
        root: PathBuf,

        #[serde(default = "default_image_extensions")]
        image_extensions: Vec<String>,

        #[serde(default = "default_deprecated_prefixes")]
        deprecated_prefixes: Vec<String>,

        /// Asset prefixes are opt-in.
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        asset_prefixes: Vec<String>,

        #[serde(default = "default_root_marker")]
        root_marker: String,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                root,
                image_extensions,
                deprecated_prefixes,
                asset_prefixes,
                root_marker,
            } => Self {
                root,
                image_extensions,
                deprecated_prefixes,
                asset_prefixes,
                root_marker,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        let Config {
            root,
            image_extensions,
            deprecated_prefixes,
            asset_prefixes,
            root_marker,
        } = config;
        Self::V1 {
            root,
            image_extensions,
            deprecated_prefixes,
            asset_prefixes,
            root_marker,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn load_reads_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            b"_version = \"1\"\nroot = \"site/docs\"\nimage_extensions = [\".svg\"]\ndeprecated_prefixes = [\"pages/\", \"legacy/\"]\nasset_prefixes = [\"configs/\"]\nroot_marker = \"/guide/\"\n",
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();

        assert_eq!(config.root, PathBuf::from("site/docs"));
        assert_eq!(config.image_extensions(), &[".svg".to_string()]);
        assert!(config.is_image_extension(".svg"));
        assert!(!config.is_image_extension(".png"));
        assert_eq!(
            config.deprecated_prefixes(),
            &["pages/".to_string(), "legacy/".to_string()]
        );
        assert_eq!(config.asset_prefixes(), &["configs/".to_string()]);
        assert_eq!(config.root_marker(), "/guide/");
    }

    #[test]
    fn load_missing_file_returns_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing.toml");

        let error = Config::load(&missing).unwrap_err();
        assert!(matches!(error, ConfigError::Read(_)));
        assert!(error.to_string().starts_with("failed to read config file:"));
    }

    #[test]
    fn load_invalid_toml_returns_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"_version = \"1\"\nimage_extensions = \".png\"\n")
            .unwrap();

        let error = Config::load(file.path()).unwrap_err();
        assert!(matches!(error, ConfigError::Parse(_)));
    }

    #[test]
    fn empty_file_returns_default() {
        let expected = Config::default();
        let actual: Config = toml::from_str(r#"_version = "1""#).unwrap();
        assert_eq!(actual, expected);
    }

    #[test]
    fn defaults_match_docs_site_layout() {
        let config = Config::default();

        assert_eq!(config.root, PathBuf::from("docs"));
        for ext in [".gif", ".jpg", ".jpeg", ".png", ".webp"] {
            assert!(config.is_image_extension(ext), "{ext} should be an image");
        }
        assert_eq!(config.deprecated_prefixes(), &["pages/".to_string()]);
        assert!(config.asset_prefixes().is_empty());
        assert_eq!(config.root_marker(), "/docs/");
    }

    #[test]
    fn save_then_load_preserves_asset_prefixes() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("lint-docs.toml");

        let mut config = Config::default();
        assert!(config.add_asset_prefix("configs/".to_string()));
        assert!(!config.add_asset_prefix("configs/".to_string()));
        config.save(&path).unwrap();

        assert_eq!(Config::load(&path).unwrap(), config);
    }
}
