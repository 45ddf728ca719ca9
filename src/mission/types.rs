//! Mode, goal and request types.

use crate::error::{MissionError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Unit system for the mission's completion target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Target is a distance in kilometers.
    Distance,
    /// Target is a running time in minutes.
    Duration,
}

impl Mode {
    /// Canonical string form, as accepted in the input mapping.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Distance => "distance",
            Mode::Duration => "duration",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = MissionError;

    /// Exact, case-sensitive match. There is no fallback branch.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "distance" => Ok(Mode::Distance),
            "duration" => Ok(Mode::Duration),
            other => Err(MissionError::InvalidMode {
                found: Some(other.to_string()),
            }),
        }
    }
}

/// What the player must reach to complete the mission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MissionGoal {
    Distance { km: f64 },
    Duration { minutes: f64 },
}

impl MissionGoal {
    /// Build a goal, rejecting values that are not strictly positive and finite.
    pub fn new(mode: Mode, target_value: f64) -> Result<Self> {
        if !target_value.is_finite() || target_value <= 0.0 {
            return Err(MissionError::InvalidTargetValue(target_value.to_string()));
        }

        Ok(match mode {
            Mode::Distance => MissionGoal::Distance { km: target_value },
            Mode::Duration => MissionGoal::Duration {
                minutes: target_value,
            },
        })
    }

    pub fn mode(&self) -> Mode {
        match self {
            MissionGoal::Distance { .. } => Mode::Distance,
            MissionGoal::Duration { .. } => Mode::Duration,
        }
    }

    /// The raw threshold, in the goal's own unit.
    pub fn target_value(&self) -> f64 {
        match *self {
            MissionGoal::Distance { km } => km,
            MissionGoal::Duration { minutes } => minutes,
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            MissionGoal::Distance { .. } => "kilometers",
            MissionGoal::Duration { .. } => "minutes",
        }
    }

    /// The completion phrase embedded in the prompt.
    ///
    /// Distance goals read `covering 5 kilometers`; duration goals read
    /// `running for 30 minutes`.
    ///
    /// The value is printed from the stored `f64` with its shortest display,
    /// not from the caller's original text. Whole numbers carry no trailing
    /// `.0`, an input of `"5.50"` reads `5.5`, and integers beyond 2^53 are
    /// rounded to the nearest representable value.
    pub fn phrase(&self) -> String {
        match *self {
            MissionGoal::Distance { km } => format!("covering {} kilometers", km),
            MissionGoal::Duration { minutes } => format!("running for {} minutes", minutes),
        }
    }
}

/// One render call's worth of input.
///
/// Constructed fresh per render and consumed by the renderer. Empty strings
/// are accepted; they only degrade the resulting prose.
#[derive(Debug, Clone, PartialEq)]
pub struct MissionRequest {
    /// Product name, e.g. "SprintQuest".
    pub game_name: String,
    /// Free-text description of the protagonist.
    pub character: String,
    /// Free-text narrative setting.
    pub background: String,
    pub goal: MissionGoal,
}

impl MissionRequest {
    pub fn new(
        game_name: impl Into<String>,
        character: impl Into<String>,
        background: impl Into<String>,
        goal: MissionGoal,
    ) -> Self {
        Self {
            game_name: game_name.into(),
            character: character.into(),
            background: background.into(),
            goal,
        }
    }

    /// Convert the request to template variables.
    ///
    /// Returns a HashMap suitable for use with `render_template`. `goal` holds
    /// the already-branched completion phrase.
    pub fn to_template_vars(&self) -> HashMap<String, String> {
        let mut vars = HashMap::new();

        vars.insert("game_name".to_string(), self.game_name.clone());
        vars.insert("character".to_string(), self.character.clone());
        vars.insert("background".to_string(), self.background.clone());

        vars.insert("mode".to_string(), self.goal.mode().as_str().to_string());
        vars.insert(
            "target_value".to_string(),
            self.goal.target_value().to_string(),
        );
        vars.insert("unit".to_string(), self.goal.unit().to_string());
        vars.insert("goal".to_string(), self.goal.phrase());

        vars
    }
}
