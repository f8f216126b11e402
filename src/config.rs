//! Optional configuration defaults.
//!
//! The server endpoint, application name, and application version can be
//! read from a YAML file so the CLI can run without flags. Discovery order:
//! an explicit `--config` path, else `.uvc/config.yml` under the project
//! root. A missing default file is an empty config; CLI flags always win
//! over file values.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, UvcError};

/// Root configuration structure for .uvc/config.yml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UvcConfig {
    /// Version server endpoint URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,

    /// Application name used as the lookup key in the server payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,

    /// Locally known application version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_version: Option<String>,
}

impl UvcConfig {
    /// Load configuration for the given project root.
    ///
    /// An explicitly requested path must exist; the default location may be
    /// absent, in which case an empty config is returned.
    pub fn load(project_root: &Path, explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(UvcError::ConfigNotFound {
                        path: path.to_path_buf(),
                    });
                }
                path.to_path_buf()
            }
            None => {
                let path = default_path(project_root);
                if !path.exists() {
                    return Ok(Self::default());
                }
                path
            }
        };

        Self::parse_file(&path)
    }

    fn parse_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self =
            serde_yaml::from_str(&content).map_err(|e| UvcError::ConfigParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject present-but-empty values.
    fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("server", &self.server),
            ("app_name", &self.app_name),
            ("app_version", &self.app_version),
        ] {
            if let Some(value) = value {
                if value.trim().is_empty() {
                    return Err(UvcError::ConfigValidationError {
                        message: format!("'{}' must not be empty", name),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Default config location: .uvc/config.yml under the project root.
pub fn default_path(project_root: &Path) -> PathBuf {
    project_root.join(".uvc").join("config.yml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(temp: &TempDir, content: &str) -> PathBuf {
        let dir = temp.path().join(".uvc");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.yml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn missing_default_config_is_empty() {
        let temp = TempDir::new().unwrap();
        let config = UvcConfig::load(temp.path(), None).unwrap();

        assert!(config.server.is_none());
        assert!(config.app_name.is_none());
        assert!(config.app_version.is_none());
    }

    #[test]
    fn loads_all_fields_from_default_location() {
        let temp = TempDir::new().unwrap();
        write_config(
            &temp,
            "server: https://example.com/version_info\napp_name: MyApp\napp_version: 1.0.0.0\n",
        );

        let config = UvcConfig::load(temp.path(), None).unwrap();

        assert_eq!(
            config.server.as_deref(),
            Some("https://example.com/version_info")
        );
        assert_eq!(config.app_name.as_deref(), Some("MyApp"));
        assert_eq!(config.app_version.as_deref(), Some("1.0.0.0"));
    }

    #[test]
    fn partial_config_leaves_other_fields_unset() {
        let temp = TempDir::new().unwrap();
        write_config(&temp, "server: https://example.com/version_info\n");

        let config = UvcConfig::load(temp.path(), None).unwrap();

        assert!(config.server.is_some());
        assert!(config.app_name.is_none());
    }

    #[test]
    fn explicit_path_is_honored() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.yml");
        fs::write(&path, "app_name: Custom\n").unwrap();

        let config = UvcConfig::load(temp.path(), Some(&path)).unwrap();

        assert_eq!(config.app_name.as_deref(), Some("Custom"));
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nope.yml");

        let result = UvcConfig::load(temp.path(), Some(&path));

        assert!(matches!(result, Err(UvcError::ConfigNotFound { .. })));
    }

    #[test]
    fn invalid_yaml_is_a_parse_error() {
        let temp = TempDir::new().unwrap();
        write_config(&temp, "server: [unclosed\n");

        let result = UvcConfig::load(temp.path(), None);

        assert!(matches!(result, Err(UvcError::ConfigParseError { .. })));
    }

    #[test]
    fn empty_value_is_a_validation_error() {
        let temp = TempDir::new().unwrap();
        write_config(&temp, "server: \"  \"\n");

        let result = UvcConfig::load(temp.path(), None);

        assert!(matches!(result, Err(UvcError::ConfigValidationError { .. })));
    }

    #[test]
    fn default_path_shape() {
        let path = default_path(Path::new("/project"));
        assert!(path.ends_with(".uvc/config.yml"));
    }
}
