//! Mission prompt request model.
//!
//! A request names the game, the protagonist, the narrative setting and the
//! completion goal. The goal is a tagged variant, so once a request exists its
//! mode is always one of the two recognized units.
//!
//! Requests are built either directly through [`MissionRequest::new`] or from
//! the raw key-value mapping callers supply (`game_name`, `character`,
//! `background`, `mode`, `target_value`).

mod input;
mod types;

#[cfg(test)]
mod tests;

pub use input::{InputMap, load_input_file};
pub(crate) use input::text_field;
pub use types::{MissionGoal, MissionRequest, Mode};
