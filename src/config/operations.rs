//! Config loading, validation, and serialization.

use super::model::Configuration;
use crate::error::{CharterError, Result};
use std::collections::HashSet;
use std::path::Path;

impl Configuration {
    /// Load a configuration from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Configuration)` - Successfully loaded and validated configuration
    /// * `Err(CharterError::UserError)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            CharterError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse a configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Configuration = serde_yaml::from_str(yaml)
            .map_err(|e| CharterError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            CharterError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate caller-supplied values.
    ///
    /// The composer accepts anything; these rules only guard the CLI boundary:
    /// - `working_directory`, when set, must be an absolute single-line path
    /// - markup element names must be non-empty lowercase ASCII alphanumerics
    /// - markup element names must not repeat
    pub fn validate(&self) -> Result<()> {
        if let Some(dir) = &self.working_directory {
            if dir.contains('\n') || dir.contains('\r') {
                return Err(CharterError::UserError(
                    "config validation failed: working_directory must be a single line".to_string(),
                ));
            }
            if !dir.starts_with('/') {
                return Err(CharterError::UserError(format!(
                    "config validation failed: working_directory must be absolute (found '{}')",
                    dir
                )));
            }
        }

        if let Some(elements) = &self.allowed_markup_vocabulary {
            let mut seen = HashSet::new();
            for name in elements {
                if name.is_empty() {
                    return Err(CharterError::UserError(
                        "config validation failed: allowed_markup_vocabulary entries must be non-empty"
                            .to_string(),
                    ));
                }
                if !name
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
                {
                    return Err(CharterError::UserError(format!(
                        "config validation failed: '{}' is not a valid element name (use lowercase names without brackets, e.g. 'strong')",
                        name
                    )));
                }
                if !seen.insert(name.as_str()) {
                    return Err(CharterError::UserError(format!(
                        "config validation failed: element '{}' is listed more than once",
                        name
                    )));
                }
            }
        }

        Ok(())
    }
}
