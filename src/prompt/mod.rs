//! Prompt generation for running missions.
//!
//! This module provides:
//!
//! - **Template**: `{variable}` substitution engine
//! - **Render**: the built-in mission template and the render entry points
//! - **Payload**: the chat request shape handed to a text-generation service
//!
//! Rendering is pure. Identical requests produce byte-identical prompts and
//! calls may run concurrently without coordination.

mod payload;
mod render;
mod template;


pub use payload::{ChatMessage, ChatPayload, Role};
pub use render::{
    SECTION_LABELS, STORY_TEMPLATE, SYSTEM_PROMPT, check_prompt, render, render_mapping,
    render_narration, render_with,
};
pub use template::{TemplateError, placeholders, render_template, vars};
