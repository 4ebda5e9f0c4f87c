use crate::error::NotesError;
use crate::types::Result;
use crate::utils::WRAP_WIDTH;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Name of the configuration file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "relnotes.toml";

/// Configuration options for release notes rendering and export
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NotesConfig {
    /// Title placed at the top of every export
    pub title: String,
    /// Base name (without extension) of exported files
    pub file_name: String,
    /// Maximum width of a wrapped bullet entry
    pub wrap_width: usize,
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            title: "Release Notes".to_string(),
            file_name: "release_notes".to_string(),
            wrap_width: WRAP_WIDTH,
        }
    }
}

impl NotesConfig {
    /// Parses a configuration from TOML. Missing keys keep their defaults.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the configuration from `path`, which must exist
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(NotesError::ConfigNotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content).map_err(|e| {
            e.with_operation_context("load notes config", Some(path.display().to_string()))
        })
    }

    /// Loads the explicit `path` if given, otherwise [`DEFAULT_CONFIG_FILE`] from
    /// `dir` when it exists, otherwise the defaults
    pub fn load(path: Option<&Path>, dir: &Path) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = dir.join(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(&default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn validate(&self) -> Result<()> {
        if self.wrap_width == 0 {
            return Err(NotesError::InvalidConfig(
                "wrap_width must be greater than zero".to_string(),
            ));
        }
        if self.file_name.trim().is_empty() {
            return Err(NotesError::InvalidConfig(
                "file_name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
