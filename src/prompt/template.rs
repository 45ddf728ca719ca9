//! Template engine for variable substitution.
//!
//! Mission prompts are plain prose with `{variable}` slots. The engine has no
//! conditionals: anything that branches (such as the goal phrase) is computed
//! in Rust and handed in as a finished value.
//!
//! # Syntax
//!
//! - `{name}` - Substitutes the value of variable `name`
//! - `{{` - Renders as literal `{`
//! - `}}` - Renders as literal `}`
//!
//! Undefined variables are an error rather than an empty substitution, so a
//! misspelled slot in a custom template never silently drops mission facts.

use std::collections::HashMap;
use thiserror::Error;

/// Error type for template rendering failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A variable was referenced but not provided.
    #[error("undefined variable '{name}' at position {position} in template")]
    UndefinedVariable { name: String, position: usize },

    /// A `{` was found without a matching `}`.
    #[error("unmatched '{{' at position {position} in template")]
    UnmatchedBrace { position: usize },

    /// An empty variable name was found (e.g., `{}`).
    #[error("empty variable name '{{}}' at position {position} in template")]
    EmptyVariableName { position: usize },
}

/// A piece of a scanned template.
enum Token<'a> {
    Text(char),
    Variable { name: &'a str, position: usize },
}

/// Walk the template once, yielding literal characters and variable references.
fn scan<'a>(
    template: &'a str,
    mut visit: impl FnMut(Token<'a>) -> Result<(), TemplateError>,
) -> Result<(), TemplateError> {
    let mut chars = template.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        match ch {
            '{' => {
                if let Some((_, '{')) = chars.peek() {
                    chars.next();
                    visit(Token::Text('{'))?;
                    continue;
                }

                let name_start = pos + 1;
                let name_end = loop {
                    match chars.next() {
                        Some((end, '}')) => break end,
                        Some(_) => {}
                        None => return Err(TemplateError::UnmatchedBrace { position: pos }),
                    }
                };

                let raw = &template[name_start..name_end];
                if raw.is_empty() {
                    return Err(TemplateError::EmptyVariableName { position: pos });
                }

                visit(Token::Variable {
                    name: raw.trim(),
                    position: pos,
                })?;
            }
            '}' => {
                // `}}` collapses to one brace; a lone `}` is literal.
                if let Some((_, '}')) = chars.peek() {
                    chars.next();
                }
                visit(Token::Text('}'))?;
            }
            _ => visit(Token::Text(ch))?,
        }
    }

    Ok(())
}

/// Render a template string by substituting variables.
///
/// # Examples
///
/// ```
/// use mission_prompt::prompt::{render_template, vars};
///
/// let vars = vars([("game_name", "SprintQuest"), ("goal", "covering 5 kilometers")]);
/// let result = render_template("{game_name}: finish by {goal}.", &vars).unwrap();
/// assert_eq!(result, "SprintQuest: finish by covering 5 kilometers.");
/// ```
pub fn render_template(
    template: &str,
    variables: &HashMap<String, String>,
) -> Result<String, TemplateError> {
    let mut result = String::with_capacity(template.len());

    scan(template, |token| {
        match token {
            Token::Text(ch) => result.push(ch),
            Token::Variable { name, position } => match variables.get(name) {
                Some(value) => result.push_str(value),
                None => {
                    return Err(TemplateError::UndefinedVariable {
                        name: name.to_string(),
                        position,
                    });
                }
            },
        }
        Ok(())
    })?;

    Ok(result)
}

/// List the distinct variable names a template references, in order of first use.
///
/// Fails on the same syntax errors as [`render_template`], but never on
/// undefined variables.
pub fn placeholders(template: &str) -> Result<Vec<String>, TemplateError> {
    let mut names: Vec<String> = Vec::new();

    scan(template, |token| {
        if let Token::Variable { name, .. } = token
            && !names.iter().any(|n| n == name)
        {
            names.push(name.to_string());
        }
        Ok(())
    })?;

    Ok(names)
}

/// Helper to create a variables map from a list of key-value pairs.
pub fn vars<I, K, V>(pairs: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
