//! Generator configuration from code or `wrapgen.toml`
//!
//! ```toml
//! module = "github.com/acme/store"
//!
//! [exclude]
//! files = ["mock.go"]
//! interfaces = ["Internal"]
//! ```

use crate::error::ConfigError;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Exclusion rules for a generation run
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// File base names whose declarations are skipped
    pub files: BTreeSet<String>,
    /// Interface names that are skipped
    pub interfaces: BTreeSet<String>,
}

impl GeneratorConfig {
    /// Create a config with no exclusions
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip every declaration in files with these base names
    pub fn ignore_file_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.files.extend(names.into_iter().map(Into::into));
        self
    }

    /// Skip interfaces with these names
    pub fn ignore_interface_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.interfaces.extend(names.into_iter().map(Into::into));
        self
    }

    /// Whether a file base name is excluded
    pub fn is_file_excluded(&self, base_name: &str) -> bool {
        self.files.contains(base_name)
    }

    /// Whether an interface name is excluded
    pub fn is_interface_excluded(&self, name: &str) -> bool {
        self.interfaces.contains(name)
    }
}

/// Contents of a `wrapgen.toml` manifest
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneratorManifest {
    /// Path of the module to analyze
    pub module: String,
    #[serde(default)]
    pub exclude: GeneratorConfig,
}

impl GeneratorManifest {
    /// Parse manifest from file path
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_builder_is_additive() {
        let config = GeneratorConfig::new()
            .ignore_file_names(["mock.go"])
            .ignore_file_names(vec![String::from("gen.go")])
            .ignore_interface_names(["Internal"]);

        assert!(config.is_file_excluded("mock.go"));
        assert!(config.is_file_excluded("gen.go"));
        assert!(!config.is_file_excluded("store.go"));
        assert!(config.is_interface_excluded("Internal"));
        assert!(!config.is_interface_excluded("internal"));
    }

    #[test]
    fn test_manifest_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
module = "github.com/acme/store"

[exclude]
files = ["mock.go"]
interfaces = ["Internal", "Legacy"]
"#
        )
        .unwrap();

        let manifest = GeneratorManifest::from_file(file.path()).unwrap();
        assert_eq!(manifest.module, "github.com/acme/store");
        assert_eq!(
            manifest.exclude,
            GeneratorConfig::new()
                .ignore_file_names(["mock.go"])
                .ignore_interface_names(["Internal", "Legacy"])
        );
    }

    #[test]
    fn test_manifest_exclude_is_optional() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "module = \"example\"").unwrap();

        let manifest = GeneratorManifest::from_file(file.path()).unwrap();
        assert_eq!(manifest.exclude, GeneratorConfig::default());
    }

    #[test]
    fn test_manifest_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("wrapgen.toml");
        assert!(matches!(
            GeneratorManifest::from_file(&missing),
            Err(ConfigError::Io { .. })
        ));

        std::fs::write(&missing, "module = 42").unwrap();
        assert!(matches!(
            GeneratorManifest::from_file(&missing),
            Err(ConfigError::Parse { .. })
        ));
    }
}
