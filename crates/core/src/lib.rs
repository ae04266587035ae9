//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the rules of the game: board, shapes, randomizer,
//! scoring, button debounce and the frame-driven state machine that ties them
//! together. It performs no I/O and never reads a clock; time is the number
//! of times the caller has invoked [`GameState::tick`].
//!
//! # Module Structure
//!
//! - [`board`]: 12x18 play area with fit checks and two-step row clearing
//! - [`pieces`]: 4x4 bitmask shapes and the four rotation index formulas
//! - [`rng`]: random source trait, LCG, and the 7-bag with opener filter
//! - [`scoring`]: classic per-level row scores and the soft-drop point
//! - [`debounce`]: one-shot and auto-repeat handling of held buttons
//! - [`game_state`]: mode machine (init, level select, play, pause, game over)
//! - [`snapshot`]: serializable plain-data view of a game
//!
//! # Example
//!
//! ```
//! use frametris_core::{GameConfig, GameState};
//! use frametris_core::types::{Button, GameMode};
//!
//! let mut game = GameState::new(GameConfig::new(0, 0), 12345);
//! assert_eq!(game.game_mode(), GameMode::Init);
//!
//! game.tick(Button::Primary); // leave the title screen
//! game.tick(Button::None);
//! game.tick(Button::Primary); // confirm level 0
//! assert_eq!(game.game_mode(), GameMode::Playing);
//!
//! // Gravity at level 0 moves the piece once every 60 idle frames.
//! let y = game.active().y;
//! for _ in 0..60 {
//!     game.tick(Button::None);
//! }
//! assert_eq!(game.active().y, y + 1);
//! ```
//!
//! # Timing
//!
//! One tick is one frame (16 ms at the intended 60 Hz). Gravity, auto-repeat,
//! the line-clear hold and the screen timeouts are all counted in frames.

pub mod board;
pub mod debounce;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use frametris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use debounce::{ButtonState, RepeatPolicy};
pub use game_state::{GameConfig, GameState, Mode, PlayPhase};
pub use pieces::{shape_mask, Piece};
pub use rng::{Bag, RandomSource, SimpleRng};
pub use scoring::{row_clear_points, soft_drop_bonus};
pub use snapshot::{GameSnapshot, PieceSnapshot};
