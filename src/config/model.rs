//! Config struct definition and default implementation.

use crate::prompt::SYSTEM_PROMPT;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File name looked up in the project root when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = "mission-prompt.yaml";

/// Configuration for mission prompt rendering.
///
/// Relative paths are resolved against the project root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Mission sources
    // =========================================================================
    /// File holding the protagonist description.
    pub character_file: PathBuf,

    /// Directory containing one folder per game.
    pub stories_dir: PathBuf,

    /// Background file name inside `<stories_dir>/<game_name>/`.
    pub background_file: String,

    /// Custom prompt template; the built-in template is used when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_path: Option<PathBuf>,

    // =========================================================================
    // Payload settings
    // =========================================================================
    /// Model identifier written into the chat payload.
    pub model: String,

    /// Sampling temperature written into the chat payload.
    pub temperature: f64,

    /// System instruction accompanying the rendered prompt.
    pub system_prompt: String,
}

pub(crate) fn default_character_file() -> PathBuf {
    PathBuf::from("MAIN_CHARACTER.md")
}
pub(crate) fn default_stories_dir() -> PathBuf {
    PathBuf::from("stories")
}
pub(crate) fn default_background_file() -> String {
    "BACKGROUND.md".to_string()
}
pub(crate) fn default_model() -> String {
    "openai/gpt-4o".to_string()
}
pub(crate) fn default_temperature() -> f64 {
    0.9
}

impl Default for Config {
    fn default() -> Self {
        Self {
            character_file: default_character_file(),
            stories_dir: default_stories_dir(),
            background_file: default_background_file(),
            template_path: None,
            model: default_model(),
            temperature: default_temperature(),
            system_prompt: SYSTEM_PROMPT.to_string(),
        }
    }
}
