//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no game logic, making them usable in any
//! context (engine, terminal presenter, input mapping).
//!
//! # Board Dimensions
//!
//! The play area is fixed at compile time:
//!
//! - **Width**: 12 columns (indexed 0-11)
//! - **Height**: 18 rows (indexed 0-17, row 0 is the top)
//! - **Spawn anchor**: (5, 0), the top-left corner of the piece's 4x4 box
//!
//! # Frame Timing Constants
//!
//! The engine counts frames, not milliseconds. The caller ticks once per frame.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Nominal frame interval used by the demo runner (~60 FPS) |
//! | `BASE_GRAVITY_FRAMES` | 60 | Frames per automatic drop at level 0 |
//! | `GRAVITY_FRAMES_PER_LEVEL` | 2 | Gravity speed-up per level |
//! | `LINE_CLEAR_HOLD_FRAMES` | 60 | Frames the board is frozen while rows flash |
//! | `WAIT_TIMEOUT_FRAMES` | 255 | Auto-advance delay on the title and game-over screens |
//! | `REPEAT_DELAY_FRAMES` | 30 | Held frames before a delayed repeat starts |
//! | `REPEAT_INTERVAL_FRAMES` | 5 | Held frames between repeats |
//!
//! # Examples
//!
//! ```
//! use frametris_types::{Button, Changes, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! // Shape table order is stable and load-bearing for the randomizer.
//! assert_eq!(PieceKind::ALL[3], PieceKind::O);
//! assert_eq!(PieceKind::T.index(), 5);
//!
//! assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
//!
//! let changes = Changes::BOARD | Changes::PIECE;
//! assert!(changes.contains(Changes::PIECE));
//! assert!(!changes.contains(Changes::LINE_CLEAR));
//!
//! assert!(Button::Primary.is_pressed());
//! assert!(!Button::default().is_pressed());
//! assert_eq!((BOARD_WIDTH, BOARD_HEIGHT), (12, 18));
//! ```

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Board width in cells (12 columns)
pub const BOARD_WIDTH: u8 = 12;

/// Board height in cells (18 rows)
pub const BOARD_HEIGHT: u8 = 18;

/// Number of slots in the randomizer bag (one per piece kind)
pub const BAG_SIZE: usize = 7;

/// Highest selectable level
pub const MAX_LEVEL: u8 = 29;

/// Nominal frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity period at level 0, in frames per automatic one-row drop
pub const BASE_GRAVITY_FRAMES: u8 = 60;

/// Frames removed from the gravity period per level
pub const GRAVITY_FRAMES_PER_LEVEL: u8 = 2;

/// Frames the board stays frozen after a lock that marked rows
pub const LINE_CLEAR_HOLD_FRAMES: u8 = 60;

/// Frames the title and game-over screens wait before advancing on their own
pub const WAIT_TIMEOUT_FRAMES: u8 = 255;

/// Held frames before a delayed repeat fires for the first time
pub const REPEAT_DELAY_FRAMES: u32 = 30;

/// Held frames between two repeats
pub const REPEAT_INTERVAL_FRAMES: u32 = 5;

/// Points awarded per soft-drop step
pub const SOFT_DROP_POINTS: u32 = 1;

/// Line clear scoring table (Classic Nintendo scoring)
///
/// Base points for clearing N rows at level 0; anything above 4 uses the
/// 4-row value. Points are multiplied by (level + 1).
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Gravity period for a level: 60 frames at level 0, two frames faster per level.
///
/// # Examples
///
/// ```
/// use frametris_types::gravity_frames_for_level;
///
/// assert_eq!(gravity_frames_for_level(0), 60);
/// assert_eq!(gravity_frames_for_level(10), 40);
/// assert_eq!(gravity_frames_for_level(29), 2);
/// ```
pub fn gravity_frames_for_level(level: u8) -> u8 {
    let level = level.min(MAX_LEVEL);
    BASE_GRAVITY_FRAMES - level * GRAVITY_FRAMES_PER_LEVEL
}

/// The seven tetromino piece kinds
///
/// Declaration order is the shape-table order (I, L, J, O, S, T, Z). The
/// randomizer works on table indices, so the order must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    L,
    J,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds in shape-table order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::L,
        PieceKind::J,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Position of this kind in the shape table
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Rotation states, clockwise from the spawn-table orientation
///
/// - **North**: 0°
/// - **East**: 90°
/// - **South**: 180°
/// - **West**: 270°
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use frametris_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::East.rotate_cw(), Rotation::South);
    /// assert_eq!(Rotation::South.rotate_cw(), Rotation::West);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Rotate counter-clockwise (-90° or 270°)
    pub fn rotate_ccw(&self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }

    /// The rotation that undoes this one
    ///
    /// # Examples
    ///
    /// ```
    /// use frametris_types::Rotation;
    ///
    /// assert_eq!(Rotation::East.inverse(), Rotation::West);
    /// assert_eq!(Rotation::South.inverse(), Rotation::South);
    /// ```
    pub fn inverse(&self) -> Self {
        match self {
            Rotation::North => Rotation::North,
            Rotation::East => Rotation::West,
            Rotation::South => Rotation::South,
            Rotation::West => Rotation::East,
        }
    }

    /// Quarter turns from North (0..=3)
    pub fn index(self) -> usize {
        self as usize
    }

    /// Rotation for an arbitrary number of quarter turns (wraps modulo 4)
    pub fn from_quarter_turns(turns: u32) -> Self {
        Self::ALL[(turns % 4) as usize]
    }
}

/// Raw per-frame button state supplied by the caller
///
/// Exactly one button is reported per tick; `None` means nothing is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Button {
    #[default]
    None,
    Left,
    Right,
    Up,
    Down,
    /// Rotate / confirm
    Primary,
    /// Pause
    Secondary,
    Exit,
}

impl Button {
    pub fn is_pressed(&self) -> bool {
        *self != Button::None
    }
}

/// Top-level game modes, without any per-mode payload
///
/// Used for transition requests and for observers that only care which
/// screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    Init,
    LevelSelect,
    Playing,
    Paused,
    GameOver,
}

/// A cell on the play area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    /// Permanently occupied by a locked piece
    Filled,
    /// Part of a completed row waiting to be compacted
    Marked,
}

impl Cell {
    /// Marked cells still block movement until the row is compacted.
    pub fn is_occupied(self) -> bool {
        self != Cell::Empty
    }

    /// Compact numeric code (0 empty, 1 filled, 2 marked)
    pub fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Filled => 1,
            Cell::Marked => 2,
        }
    }
}

bitflags! {
    /// Bitmask of what a tick changed, so callers can redraw selectively
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Changes: u8 {
        const BOARD = 1;
        const PIECE = 2;
        const LINE_CLEAR = 4;
    }
}
