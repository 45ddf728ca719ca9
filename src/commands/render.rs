//! Implementation of the `mission-prompt render` command.
//!
//! 1. Loads config for the project root
//! 2. Builds the input mapping: `--input` file, then individual flags
//! 3. Fills still-unset character/background from the project's source files
//! 4. Renders the built-in or custom template (or a narration script)
//! 5. Prints the prompt (or chat payload) or writes it atomically

use super::GlobalOptions;
use crate::cli::{OutputFormat, RenderArgs};
use crate::config::Config;
use crate::error::{MissionError, Result};
use crate::fs::atomic_write_file;
use crate::mission::{InputMap, MissionRequest, load_input_file, text_field};
use crate::prompt::{ChatPayload, STORY_TEMPLATE, render_narration, render_with};
use crate::sources::MissionSources;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::info;

/// Execute the `render` command.
pub fn cmd_render(globals: GlobalOptions<'_>, args: RenderArgs) -> Result<()> {
    let config = Config::load_or_default(globals.root, globals.config)?;
    let output = render_output(globals.root, &config, &args)?;

    match &args.output {
        Some(path) => {
            atomic_write_file(path, &output)?;
            info!(path = %path.display(), "wrote mission prompt");
        }
        None => print!("{}", output),
    }

    Ok(())
}

/// Produce the text `render` emits, without touching stdout.
fn render_output(root: &Path, config: &Config, args: &RenderArgs) -> Result<String> {
    let map = build_input(root, config, args)?;
    let request = MissionRequest::from_mapping(&map)?;
    let extra = parse_vars(&args.vars)?;

    let template = match template_path(root, config, args) {
        Some(path) => read_text(&path, "template")?,
        None => STORY_TEMPLATE.to_string(),
    };
    let prompt = if args.narration {
        render_narration(&template, &request, &extra)?
    } else {
        render_with(&template, &request, &extra)?
    };

    match args.format {
        OutputFormat::Text => Ok(prompt),
        OutputFormat::Json => {
            let mut json = ChatPayload::new(config, prompt).to_json_pretty()?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Merge the input file, CLI flags and source files into one mapping.
fn build_input(root: &Path, config: &Config, args: &RenderArgs) -> Result<InputMap> {
    let mut map = match &args.input {
        Some(path) => load_input_file(path)?,
        None => InputMap::new(),
    };

    set_text(&mut map, "game_name", args.game_name.clone());
    set_text(&mut map, "mode", args.mode.clone());
    set_text(&mut map, "target_value", args.target_value.clone());

    match &args.character_file {
        Some(path) => set_text(&mut map, "character", Some(read_text(path, "character")?)),
        None => set_text(&mut map, "character", args.character.clone()),
    }
    match &args.background_file {
        Some(path) => set_text(&mut map, "background", Some(read_text(path, "background")?)),
        None => set_text(&mut map, "background", args.background.clone()),
    }

    fill_from_sources(root, config, &mut map)?;
    Ok(map)
}

fn set_text(map: &mut InputMap, field: &str, value: Option<String>) {
    if let Some(value) = value {
        map.insert(field.to_string(), Value::String(value));
    }
}

fn is_unset(map: &InputMap, field: &str) -> bool {
    matches!(map.get(field), None | Some(Value::Null))
}

/// Read character/background from the project layout when nothing else set them.
fn fill_from_sources(root: &Path, config: &Config, map: &mut InputMap) -> Result<()> {
    let needs_character = is_unset(map, "character");
    let needs_background = is_unset(map, "background");
    if !needs_character && !needs_background {
        return Ok(());
    }

    // Without a usable game name the background path is unknown; let validation report it.
    let Ok(game_name) = text_field(map, "game_name") else {
        return Ok(());
    };
    let sources = MissionSources::resolve(root, config, &game_name)?;

    if needs_character {
        let character = sources.load_character()?;
        map.insert("character".to_string(), Value::String(character));
    }
    if needs_background {
        let background = sources.load_background()?;
        map.insert("background".to_string(), Value::String(background));
    }

    Ok(())
}

fn template_path(root: &Path, config: &Config, args: &RenderArgs) -> Option<PathBuf> {
    args.template
        .clone()
        .or_else(|| config.resolved_template_path(root))
}

/// Parse repeated `--var key=value` arguments.
fn parse_vars(raw: &[String]) -> Result<HashMap<String, String>> {
    let mut vars = HashMap::with_capacity(raw.len());

    for entry in raw {
        let (key, value) = entry.split_once('=').ok_or_else(|| {
            MissionError::UserError(format!(
                "invalid --var '{}': expected KEY=VALUE",
                entry
            ))
        })?;

        let key = key.trim();
        if key.is_empty() {
            return Err(MissionError::UserError(format!(
                "invalid --var '{}': key must not be empty",
                entry
            )));
        }

        vars.insert(key.to_string(), value.to_string());
    }

    Ok(vars)
}

/// Read a file the user named explicitly; unlike project sources it must exist.
fn read_text(path: &Path, what: &str) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        MissionError::UserError(format!(
            "failed to read {} file '{}': {}",
            what,
            path.display(),
            e
        ))
    })
}
