//! Error types for mission-prompt.
//!
//! Uses thiserror for derive macros. Every variant maps to an exit code so the
//! CLI can report failures without inspecting messages.

use crate::exit_codes;
use crate::prompt::TemplateError;
use thiserror::Error;

/// Main error type for mission-prompt operations.
#[derive(Error, Debug)]
pub enum MissionError {
    /// `mode` was absent or not one of `distance` / `duration`.
    #[error("invalid mode {}: expected \"distance\" or \"duration\"", describe_mode(.found))]
    InvalidMode {
        /// The rejected value, `None` when the field was absent.
        found: Option<String>,
    },

    /// A required field was absent from the input mapping.
    #[error("missing required field '{0}'")]
    MissingField(String),

    /// `target_value` was non-numeric, non-finite, zero, or negative.
    #[error("invalid target_value {0}: expected a positive number")]
    InvalidTargetValue(String),

    /// A field was present but had an unusable shape (e.g. a list).
    #[error("invalid field '{field}': {reason}")]
    InvalidField { field: String, reason: String },

    /// The template could not be rendered.
    #[error("template error: {0}")]
    Template(#[from] TemplateError),

    /// A rendered prompt dropped content every mission prompt must carry.
    #[error("rendered prompt is missing required content: {}", .missing.join(", "))]
    IncompletePrompt { missing: Vec<String> },

    /// Configuration could not be loaded or failed validation.
    #[error("{0}")]
    Config(String),

    /// User provided invalid arguments or a file could not be read/written.
    #[error("{0}")]
    UserError(String),
}

fn describe_mode(found: &Option<String>) -> String {
    match found {
        Some(value) => format!("'{}'", value),
        None => "(absent)".to_string(),
    }
}

impl MissionError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            MissionError::InvalidMode { .. }
            | MissionError::MissingField(_)
            | MissionError::InvalidTargetValue(_)
            | MissionError::InvalidField { .. } => exit_codes::INVALID_INPUT,
            MissionError::Template(_) | MissionError::IncompletePrompt { .. } => {
                exit_codes::TEMPLATE_FAILURE
            }
            MissionError::Config(_) => exit_codes::CONFIG_FAILURE,
            MissionError::UserError(_) => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for mission-prompt operations.
pub type Result<T> = std::result::Result<T, MissionError>;
