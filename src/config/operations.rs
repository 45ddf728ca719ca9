//! Config loading, validation, and path resolution.

use super::model::{CONFIG_FILE_NAME, Config};
use crate::error::{MissionError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            MissionError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load the effective config for a project root.
    ///
    /// An explicit path is used as given (relative to the current directory)
    /// and must exist. Without one, `<root>/mission-prompt.yaml` is used when
    /// present and defaults apply otherwise.
    pub fn load_or_default(root: &Path, explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "loading config");
            return Self::load(path);
        }

        let implicit = root.join(CONFIG_FILE_NAME);
        if implicit.is_file() {
            debug!(path = %implicit.display(), "loading config");
            Self::load(&implicit)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // serde_yaml rejects an empty document; treat it as "all defaults".
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| MissionError::Config(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| MissionError::Config(format!("failed to serialize config to YAML: {}", e)))
    }

    /// Validate config values.
    ///
    /// - `model` must be non-empty
    /// - `temperature` must be within `0.0..=2.0`
    /// - `character_file` and `background_file` must be non-empty
    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(MissionError::Config(
                "config validation failed: model must not be empty".to_string(),
            ));
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(MissionError::Config(format!(
                "config validation failed: temperature must be between 0.0 and 2.0 (found {})",
                self.temperature
            )));
        }

        if self.character_file.as_os_str().is_empty() {
            return Err(MissionError::Config(
                "config validation failed: character_file must not be empty".to_string(),
            ));
        }

        if self.background_file.trim().is_empty() {
            return Err(MissionError::Config(
                "config validation failed: background_file must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Path of the character file under `root`.
    pub fn character_path(&self, root: &Path) -> PathBuf {
        root.join(&self.character_file)
    }

    /// Path of a game's background file under `root`.
    pub fn background_path(&self, root: &Path, game_name: &str) -> PathBuf {
        root.join(&self.stories_dir)
            .join(game_name)
            .join(&self.background_file)
    }

    /// Custom template path under `root`, if one is configured.
    pub fn resolved_template_path(&self, root: &Path) -> Option<PathBuf> {
        self.template_path.as_ref().map(|p| root.join(p))
    }
}
