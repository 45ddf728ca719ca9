//! CLI argument parsing for mission-prompt.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::logging::DEFAULT_LOG_LEVEL;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Mission-prompt: render running-game mission prompts for a text-generation service.
///
/// The prompt is printed to stdout (or written with `--output`); logs go to stderr.
///
/// Paths given on the command line are relative to the current directory.
/// Paths inside the config file are relative to `--root`.
#[derive(Parser, Debug)]
#[command(name = "mission-prompt")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log filter (overridden by RUST_LOG).
    #[arg(long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,

    /// Config file, relative to the current directory
    /// (default: <root>/mission-prompt.yaml if present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Project root holding the character file and stories directory.
    /// Config paths (character_file, stories_dir, template_path) resolve against it.
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for mission-prompt.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a mission prompt.
    ///
    /// Fields come from `--input` and are overridden by individual flags.
    /// When character or background are still unset, they are read from
    /// the configured character file and `<stories>/<game>/BACKGROUND.md`.
    Render(RenderArgs),

    /// Show the built-in mission template.
    Template(TemplateArgs),
}

/// Output format for `render`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// The rendered prompt as plain text.
    #[default]
    Text,
    /// A chat-completion payload (model, temperature, messages) as JSON.
    Json,
}

/// Arguments for the `render` command.
#[derive(Parser, Debug, Default)]
pub struct RenderArgs {
    /// YAML or JSON file with the input mapping, relative to the current directory.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Game name.
    #[arg(short, long)]
    pub game_name: Option<String>,

    /// Protagonist description.
    #[arg(long, conflicts_with = "character_file")]
    pub character: Option<String>,

    /// File holding the protagonist description, relative to the current directory.
    #[arg(long)]
    pub character_file: Option<PathBuf>,

    /// Narrative setting.
    #[arg(long, conflicts_with = "background_file")]
    pub background: Option<String>,

    /// File holding the narrative setting, relative to the current directory.
    #[arg(long)]
    pub background_file: Option<PathBuf>,

    /// Goal unit: distance or duration.
    #[arg(short, long)]
    pub mode: Option<String>,

    /// Goal threshold: kilometers for distance, minutes for duration.
    #[arg(short, long, allow_hyphen_values = true)]
    pub target_value: Option<String>,

    /// Custom template file, relative to the current directory
    /// (default: config template_path under --root, else built-in).
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Render a narration script: the output need not carry the mission sections.
    #[arg(long)]
    pub narration: bool,

    /// Extra template variable as key=value (repeatable).
    #[arg(long = "var", value_name = "KEY=VALUE")]
    pub vars: Vec<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write to this file instead of stdout, relative to the current directory.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `template` command.
#[derive(Parser, Debug)]
pub struct TemplateArgs {
    /// List placeholder names instead of printing the template.
    #[arg(long)]
    pub placeholders: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
