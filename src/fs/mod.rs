//! Filesystem utilities for mission-prompt.
//!
//! Rendered prompts written to disk go through an atomic write so a reader
//! never sees a half-written prompt.

pub mod atomic;

pub use atomic::atomic_write_file;
