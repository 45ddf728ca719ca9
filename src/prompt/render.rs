//! Mission prompt rendering.
//!
//! The prose lives in `templates/story_generator.md` and is embedded at compile
//! time; this module only fills its slots and checks the result.

use super::template::render_template;
use crate::error::{MissionError, Result};
use crate::mission::{InputMap, MissionRequest};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Built-in mission prompt template.
pub const STORY_TEMPLATE: &str = include_str!("../../templates/story_generator.md");

/// System instruction sent alongside the rendered prompt.
pub const SYSTEM_PROMPT: &str = "You are a creative AI that generates immersive running missions.";

/// Section labels every mission prompt must contain.
pub const SECTION_LABELS: [&str; 4] = [
    "Narrative Setup",
    "Objectives",
    "Motivation",
    "Success/Failure Condition",
];

/// Render the built-in template for a request.
pub fn render(request: &MissionRequest) -> Result<String> {
    render_with(STORY_TEMPLATE, request, &HashMap::new())
}

/// Validate a raw input mapping and render the built-in template.
///
/// Any input error is returned before rendering starts, so no partial prompt
/// is ever produced.
pub fn render_mapping(map: &InputMap) -> Result<String> {
    let request = MissionRequest::from_mapping(map)?;
    render(&request)
}

/// Render a custom template.
///
/// `extra` supplies additional variables for the template. Request fields win
/// over extras with the same name. The output is checked with [`check_prompt`].
pub fn render_with(
    template: &str,
    request: &MissionRequest,
    extra: &HashMap<String, String>,
) -> Result<String> {
    debug!(
        game = %request.game_name,
        mode = %request.goal.mode(),
        target_value = request.goal.target_value(),
        "rendering mission prompt"
    );

    let prompt = render_template(template, &merge_vars(request, extra))?;
    check_prompt(&prompt, request)?;

    Ok(prompt)
}

/// Render a narration script (beginning, interlude, success or failure lines)
/// from the same mission context.
///
/// Variables resolve as in [`render_with`], but the output is not required to
/// carry the mission section labels or any particular field.
pub fn render_narration(
    template: &str,
    request: &MissionRequest,
    extra: &HashMap<String, String>,
) -> Result<String> {
    debug!(game = %request.game_name, "rendering narration script");

    Ok(render_template(template, &merge_vars(request, extra))?)
}

fn merge_vars(
    request: &MissionRequest,
    extra: &HashMap<String, String>,
) -> HashMap<String, String> {
    let request_vars = request.to_template_vars();
    let mut vars = HashMap::with_capacity(extra.len() + request_vars.len());

    for (name, value) in extra {
        if request_vars.contains_key(name) {
            warn!(variable = %name, "extra variable shadowed by mission field");
            continue;
        }
        vars.insert(name.clone(), value.clone());
    }
    vars.extend(request_vars);

    vars
}

/// Verify a rendered prompt carries the request's character, background and
/// goal phrase, plus every section label.
pub fn check_prompt(prompt: &str, request: &MissionRequest) -> Result<()> {
    let mut missing = Vec::new();

    if !prompt.contains(&request.character) {
        missing.push("character".to_string());
    }
    if !prompt.contains(&request.background) {
        missing.push("background".to_string());
    }
    let goal = request.goal.phrase();
    if !prompt.contains(&goal) {
        missing.push(format!("goal phrase '{}'", goal));
    }
    for label in SECTION_LABELS {
        if !prompt.contains(label) {
            missing.push(format!("section '{}'", label));
        }
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(MissionError::IncompletePrompt { missing })
    }
}
