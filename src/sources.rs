//! Character and background text sources.
//!
//! A project keeps its protagonist in one file and each game's setting in
//! `<stories_dir>/<game_name>/<background_file>`. Either file may be absent;
//! the mission then renders with that slot empty, which degrades the prose
//! but is not an error.
//!
//! The game name becomes a single path component, so names that would leave
//! the stories directory (`..`, separators, absolute paths) are rejected.

use crate::config::Config;
use crate::error::{MissionError, Result};
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tracing::warn;

/// Where a game's character and background text live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissionSources {
    pub character_path: PathBuf,
    pub background_path: PathBuf,
}

impl MissionSources {
    /// Resolve source paths for `game_name` under the project root.
    pub fn resolve(root: &Path, config: &Config, game_name: &str) -> Result<Self> {
        check_game_name(game_name)?;

        Ok(Self {
            character_path: config.character_path(root),
            background_path: config.background_path(root, game_name),
        })
    }

    /// Read the character file; empty text when it is missing.
    pub fn load_character(&self) -> Result<String> {
        read_or_empty(&self.character_path)
    }

    /// Read the background file; empty text when it is missing.
    pub fn load_background(&self) -> Result<String> {
        read_or_empty(&self.background_path)
    }
}

fn check_game_name(game_name: &str) -> Result<()> {
    let mut components = Path::new(game_name).components();
    let single_dir = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );

    if single_dir && !game_name.contains(['/', '\\']) {
        return Ok(());
    }

    Err(MissionError::InvalidField {
        field: "game_name".to_string(),
        reason: format!(
            "'{}' is not a directory name under the stories directory",
            game_name
        ),
    })
}

/// Read a UTF-8 file, returning an empty string when it does not exist.
pub fn read_or_empty(path: &Path) -> Result<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(path = %path.display(), "source file not found, using empty text");
            Ok(String::new())
        }
        Err(e) => Err(MissionError::UserError(format!(
            "failed to read '{}': {}",
            path.display(),
            e
        ))),
    }
}
