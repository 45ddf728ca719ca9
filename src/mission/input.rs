//! Parsing of the caller-supplied key-value mapping.
//!
//! Fields are checked in a fixed order (`game_name`, `character`,
//! `background`, `mode`, `target_value`) and the first problem is returned.
//! Nothing is defaulted: a guessed mode or value would put false facts in the
//! narrative.

use super::types::{MissionGoal, MissionRequest, Mode};
use crate::error::{MissionError, Result};
use serde_json::{Map, Value};
use std::path::Path;

/// Raw input mapping from field name to value.
pub type InputMap = Map<String, Value>;

impl MissionRequest {
    /// Build a request from the raw input mapping.
    ///
    /// Unknown keys are ignored.
    pub fn from_mapping(map: &InputMap) -> Result<Self> {
        let game_name = text_field(map, "game_name")?;
        let character = text_field(map, "character")?;
        let background = text_field(map, "background")?;

        let mode = mode_field(map)?;
        let target_value = target_value_field(map)?;
        let goal = MissionGoal::new(mode, target_value)?;

        Ok(Self::new(game_name, character, background, goal))
    }

    /// Parse a JSON object and build a request from it.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| MissionError::UserError(format!("failed to parse input JSON: {}", e)))?;
        Self::from_mapping(&into_mapping(value)?)
    }

    /// Parse a YAML mapping and build a request from it.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Self::from_mapping(&parse_yaml_mapping(yaml)?)
    }
}

/// Load an input mapping from a YAML or JSON file.
///
/// The YAML parser accepts JSON documents too, so no extension sniffing is done.
pub fn load_input_file<P: AsRef<Path>>(path: P) -> Result<InputMap> {
    let path = path.as_ref();

    let content = std::fs::read_to_string(path).map_err(|e| {
        MissionError::UserError(format!(
            "failed to read input file '{}': {}",
            path.display(),
            e
        ))
    })?;

    parse_yaml_mapping(&content).map_err(|e| match e {
        MissionError::UserError(msg) => {
            MissionError::UserError(format!("{} in '{}'", msg, path.display()))
        }
        other => other,
    })
}

fn parse_yaml_mapping(yaml: &str) -> Result<InputMap> {
    // An empty document is an empty mapping, so missing fields get reported by name.
    if yaml.trim().is_empty() {
        return Ok(InputMap::new());
    }

    let value: Value = serde_yaml::from_str(yaml)
        .map_err(|e| MissionError::UserError(format!("failed to parse input YAML: {}", e)))?;
    into_mapping(value)
}

fn into_mapping(value: Value) -> Result<InputMap> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(MissionError::UserError(format!(
            "input must be a mapping of field names to values, found {}",
            value_kind(&other)
        ))),
    }
}

/// Read a free-text field. Scalars are stringified; `null` counts as absent.
pub(crate) fn text_field(map: &InputMap, field: &str) -> Result<String> {
    match map.get(field) {
        None | Some(Value::Null) => Err(MissionError::MissingField(field.to_string())),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(Value::Bool(b)) => Ok(b.to_string()),
        Some(other) => Err(MissionError::InvalidField {
            field: field.to_string(),
            reason: format!("expected text, found {}", value_kind(other)),
        }),
    }
}

fn mode_field(map: &InputMap) -> Result<Mode> {
    match map.get("mode") {
        None | Some(Value::Null) => Err(MissionError::InvalidMode { found: None }),
        Some(Value::String(s)) => s.parse(),
        Some(other) => Err(MissionError::InvalidMode {
            found: Some(other.to_string()),
        }),
    }
}

/// Numbers and numeric strings are accepted; positivity is checked by the goal.
fn target_value_field(map: &InputMap) -> Result<f64> {
    match map.get("target_value") {
        None | Some(Value::Null) => Err(MissionError::MissingField("target_value".to_string())),
        Some(Value::Number(n)) => n
            .as_f64()
            .ok_or_else(|| MissionError::InvalidTargetValue(n.to_string())),
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| MissionError::InvalidTargetValue(format!("'{}'", s))),
        Some(other) => Err(MissionError::InvalidTargetValue(other.to_string())),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}
