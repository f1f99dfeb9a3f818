//! Terminal user interface.
//!
//! A single-threaded loop feeds ticks, key presses and resizes into a
//! [`ViewState`] reducer; each resulting state is drawn in full.

mod app;
pub mod input;
pub mod layout;
pub mod render;
pub mod state;
mod style;
pub mod table;
pub mod widgets;

#[cfg(test)]
mod fixtures;

pub use app::App;
pub use state::{Message, Phase, ViewState};
