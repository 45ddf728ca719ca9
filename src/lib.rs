//! Mission-prompt: renders running-game mission prompts.
//!
//! The core is [`prompt::render`]: a pure function from a [`mission::MissionRequest`]
//! to the prompt string handed to a text-generation service. Callers holding a
//! raw key-value mapping use [`prompt::render_mapping`], which reports invalid
//! modes, missing fields and bad target values instead of guessing.
//!
//! ```
//! use mission_prompt::mission::{MissionGoal, MissionRequest};
//! use mission_prompt::prompt::render;
//!
//! let request = MissionRequest::new(
//!     "SprintQuest",
//!     "Kira, a rogue courier",
//!     "The city's power grid is failing",
//!     MissionGoal::Distance { km: 5.0 },
//! );
//! let prompt = render(&request)?;
//! assert!(prompt.contains("5 kilometers"));
//! # Ok::<(), mission_prompt::error::MissionError>(())
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod logging;
pub mod mission;
pub mod prompt;
pub mod sources;
