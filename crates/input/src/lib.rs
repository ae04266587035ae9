//! Terminal input.
//!
//! Maps `crossterm` key events onto the game's [`types::Button`] set and
//! turns the event stream into one held button per frame, including on
//! terminals that never report key releases.

pub mod handler;
pub mod map;

pub use frametris_types as types;

pub use handler::InputHandler;
pub use map::{button_for_key, should_quit};
