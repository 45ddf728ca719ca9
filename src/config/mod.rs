//! Configuration model for mission-prompt.
//!
//! This module defines the Config struct that represents `mission-prompt.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! sensible defaults for optional fields, and validation of config values.

mod model;
mod operations;


pub use model::{CONFIG_FILE_NAME, Config};
