//! Generator configuration.
//!
//! Configuration reaches the plugin through the `protoc` parameter string
//! (`--mcp_opt=key=value,key=value`) and, optionally, a TOML file named by
//! the `config` key. Keys given directly in the parameter string take
//! precedence over the file.
//!
//! # Examples
//!
//! ```
//! use protomcp_core::GeneratorConfig;
//!
//! let config = GeneratorConfig::from_parameter(Some("log_level=debug")).unwrap();
//! assert_eq!(config.log_level.as_deref(), Some("debug"));
//! assert!(config.template.is_none());
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Recognized parameter keys.
const KEY_TEMPLATE: &str = "template";
const KEY_LOG_LEVEL: &str = "log_level";
const KEY_CONFIG: &str = "config";

/// Configuration for a generation run.
///
/// # Examples
///
/// ```
/// use protomcp_core::GeneratorConfig;
///
/// let config = GeneratorConfig::from_toml_str(r#"
///     template = "templates/custom.py.hbs"
/// "#).unwrap();
/// assert!(config.template.is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Replacement template asset. When unset, the embedded template is used.
    pub template: Option<PathBuf>,

    /// Log filter directive for the plugin (e.g. `debug`, `protomcp_codegen=trace`).
    pub log_level: Option<String>,
}

impl GeneratorConfig {
    /// Parses a `protoc` plugin parameter string.
    ///
    /// `None` and the empty string yield the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if an entry is not `key=value`, a key
    /// is unknown, or the referenced config file cannot be loaded.
    pub fn from_parameter(parameter: Option<&str>) -> Result<Self> {
        let Some(parameter) = parameter else {
            return Ok(Self::default());
        };

        let mut file_config = None;
        let mut overrides = Self::default();

        for entry in parameter.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (key, value) = entry.split_once('=').ok_or_else(|| Error::ConfigError {
                message: format!("expected key=value, got '{entry}'"),
            })?;
            let (key, value) = (key.trim(), value.trim());

            match key {
                KEY_TEMPLATE => overrides.template = Some(PathBuf::from(value)),
                KEY_LOG_LEVEL => overrides.log_level = Some(value.to_string()),
                KEY_CONFIG => file_config = Some(Self::from_toml_file(Path::new(value))?),
                _ => {
                    return Err(Error::ConfigError {
                        message: format!(
                            "unknown parameter '{key}' (expected: {KEY_TEMPLATE}, {KEY_LOG_LEVEL}, {KEY_CONFIG})"
                        ),
                    });
                }
            }
        }

        let config = file_config.unwrap_or_default().merge(overrides);
        tracing::debug!(?config, "parsed generator parameters");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] on malformed TOML or unknown keys.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::ConfigError {
            message: format!("invalid configuration: {e}"),
        })
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and
    /// [`Error::ConfigError`] if its contents are invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Overlays `other` on top of `self`; set fields in `other` win.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            template: other.template.or(self.template),
            log_level: other.log_level.or(self.log_level),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_parameter_is_default() {
        assert_eq!(GeneratorConfig::from_parameter(None).unwrap(), GeneratorConfig::default());
        assert_eq!(
            GeneratorConfig::from_parameter(Some("")).unwrap(),
            GeneratorConfig::default()
        );
    }

    #[test]
    fn test_parameter_parsing() {
        let config =
            GeneratorConfig::from_parameter(Some("template=custom.hbs, log_level=trace")).unwrap();
        assert_eq!(config.template, Some(PathBuf::from("custom.hbs")));
        assert_eq!(config.log_level.as_deref(), Some("trace"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = GeneratorConfig::from_parameter(Some("flavor=spicy")).unwrap_err();
        assert!(err.is_config_error());
        assert!(err.to_string().contains("flavor"));
    }

    #[test]
    fn test_entry_without_equals_rejected() {
        let err = GeneratorConfig::from_parameter(Some("template")).unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_toml_unknown_field_rejected() {
        assert!(GeneratorConfig::from_toml_str("colour = \"red\"").is_err());
    }

    #[test]
    fn test_config_file_with_parameter_override() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "template = \"from_file.hbs\"").unwrap();
        writeln!(file, "log_level = \"info\"").unwrap();

        let parameter = format!("config={},log_level=debug", file.path().display());
        let config = GeneratorConfig::from_parameter(Some(&parameter)).unwrap();

        assert_eq!(config.template, Some(PathBuf::from("from_file.hbs")));
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_missing_config_file() {
        let err = GeneratorConfig::from_parameter(Some("config=/nonexistent/mcp.toml")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_merge_prefers_other() {
        let base = GeneratorConfig {
            template: Some(PathBuf::from("a.hbs")),
            log_level: Some("info".to_string()),
        };
        let merged = base.merge(GeneratorConfig {
            template: None,
            log_level: Some("warn".to_string()),
        });
        assert_eq!(merged.template, Some(PathBuf::from("a.hbs")));
        assert_eq!(merged.log_level.as_deref(), Some("warn"));
    }
}
