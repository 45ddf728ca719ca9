//! Exit code constants for the mission-prompt CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable files)
//! - 2: Invalid mission input (mode, target value, missing fields)
//! - 3: Template failure (syntax, undefined variable, incomplete prompt)
//! - 4: Configuration failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or unreadable/unwritable files.
pub const USER_ERROR: i32 = 1;

/// The mission input mapping was rejected.
pub const INVALID_INPUT: i32 = 2;

/// A template could not be rendered or dropped required content.
pub const TEMPLATE_FAILURE: i32 = 3;

/// The configuration file could not be read, parsed, or validated.
pub const CONFIG_FAILURE: i32 = 4;
