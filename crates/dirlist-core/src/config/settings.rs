//! Configuration loaded from a TOML file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::fs::entry::EntryType;
use crate::fs::list::{DEFAULT_GROWTH_INCREMENT, DEFAULT_INITIAL_CAPACITY};

/// Top-level configuration.
///
/// Call [`Config::load`] to read from a TOML path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub listing: ListingConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Loads and validates configuration from a TOML file at `path`.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotFound`] if the file does not exist.
    /// - [`CoreError::PermissionDenied`] if the file is not readable.
    /// - [`CoreError::ConfigParse`] if the TOML is malformed.
    /// - [`CoreError::InvalidArgument`] if a value is out of range.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CoreError::from_io(path, e))?;
        let config: Config =
            toml::from_str(&content).map_err(|e| CoreError::ConfigParse(e.to_string()))?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Loads from `path` when given, otherwise returns the defaults.
    pub fn load_or_default(path: Option<&Path>) -> CoreResult<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// Checks values that deserialize fine but cannot be used.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidArgument`] if `listing.growth_increment` is zero.
    pub fn validate(&self) -> CoreResult<()> {
        if self.listing.growth_increment == 0 {
            return Err(CoreError::InvalidArgument(
                "listing.growth_increment must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// How directories are read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingConfig {
    #[serde(default = "default_initial_capacity")]
    pub initial_capacity: usize,
    #[serde(default = "default_growth_increment")]
    pub growth_increment: usize,
    #[serde(default = "default_true")]
    pub show_hidden: bool,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            initial_capacity: default_initial_capacity(),
            growth_increment: default_growth_increment(),
            show_hidden: true,
        }
    }
}

/// Output rendering format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Ordering applied to each listed section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Keep the order the OS returned.
    #[default]
    None,
    /// Case-insensitive by name.
    Name,
}

/// How listings are presented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_true")]
    pub bold_headings: bool,
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub sort: SortMode,
    #[serde(default = "default_filter_type")]
    pub filter_type: EntryType,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            bold_headings: true,
            format: OutputFormat::default(),
            sort: SortMode::default(),
            filter_type: default_filter_type(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_initial_capacity() -> usize {
    DEFAULT_INITIAL_CAPACITY
}

fn default_growth_increment() -> usize {
    DEFAULT_GROWTH_INCREMENT
}

fn default_filter_type() -> EntryType {
    EntryType::Directory
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_config_listing() {
        let config = Config::default();

        assert_eq!(config.listing.initial_capacity, 10);
        assert_eq!(config.listing.growth_increment, 10);
        assert!(config.listing.show_hidden);
    }

    #[test]
    fn default_config_output() {
        let config = Config::default();

        assert!(config.output.bold_headings);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.output.sort, SortMode::None);
        assert_eq!(config.output.filter_type, EntryType::Directory);
    }

    #[test]
    fn load_full_toml() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(
            &path,
            r#"
[listing]
initial_capacity = 4
growth_increment = 16
show_hidden = false

[output]
bold_headings = false
format = "json"
sort = "name"
filter_type = "symlink"
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();

        assert_eq!(config.listing.initial_capacity, 4);
        assert_eq!(config.listing.growth_increment, 16);
        assert!(!config.listing.show_hidden);
        assert!(!config.output.bold_headings);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.output.sort, SortMode::Name);
        assert_eq!(config.output.filter_type, EntryType::Symlink);
    }

    #[test]
    fn load_partial_toml_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "[output]\nsort = \"name\"\n").unwrap();

        let config = Config::load(&path).unwrap();

        assert_eq!(config.output.sort, SortMode::Name);
        assert_eq!(config.listing, ListingConfig::default());
        assert!(config.output.bold_headings);
    }

    #[test]
    fn load_empty_file_is_default() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "").unwrap();

        assert_eq!(Config::load(&path).unwrap(), Config::default());
    }

    #[test]
    fn load_missing_file_returns_not_found() {
        let tmp = TempDir::new().unwrap();

        let err = Config::load(&tmp.path().join("nope.toml")).unwrap_err();

        assert!(matches!(err, CoreError::NotFound(_)));
    }

    #[test]
    fn load_malformed_toml_returns_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "[listing\ninitial_capacity = ").unwrap();

        let err = Config::load(&path).unwrap_err();

        assert!(matches!(err, CoreError::ConfigParse(_)));
    }

    #[test]
    fn load_unknown_entry_type_returns_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "[output]\nfilter_type = \"teapot\"\n").unwrap();

        let err = Config::load(&path).unwrap_err();

        assert!(matches!(err, CoreError::ConfigParse(_)));
    }

    #[test]
    fn zero_growth_increment_fails_validation() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "[listing]\ngrowth_increment = 0\n").unwrap();

        let err = Config::load(&path).unwrap_err();

        assert!(matches!(err, CoreError::InvalidArgument(_)));
    }

    #[test]
    fn load_or_default_without_path() {
        assert_eq!(Config::load_or_default(None).unwrap(), Config::default());
    }
}
