//! Terminal rendering for the game.
//!
//! A snapshot is drawn into a plain framebuffer by [`GameView`] (pure, unit
//! tested) and then flushed to the terminal by [`TerminalRenderer`], which
//! only rewrites cells that changed since the last frame.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use frametris_core as core;
pub use frametris_types as types;

pub use fb::{FrameBuffer, Glyph, Ink};
pub use game_view::{GameView, VIEW_HEIGHT, VIEW_WIDTH};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
