//! Command implementations for mission-prompt.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod render;
mod template;

use crate::cli::{Cli, Command};
use crate::error::Result;
use std::path::Path;

/// Settings shared by every command.
#[derive(Debug, Clone, Copy)]
pub struct GlobalOptions<'a> {
    pub root: &'a Path,
    pub config: Option<&'a Path>,
}

/// Dispatch a command to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    let globals = GlobalOptions {
        root: &cli.root,
        config: cli.config.as_deref(),
    };

    match cli.command {
        Command::Render(args) => render::cmd_render(globals, args),
        Command::Template(args) => template::cmd_template(args),
    }
}
