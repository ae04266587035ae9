use serde::{Deserialize, Serialize};

use crate::pieces::{Piece, SPAWN_POSITION};
use crate::types::{GameMode, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl From<Piece> for PieceSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
        }
    }
}

impl From<PieceSnapshot> for Piece {
    fn from(value: PieceSnapshot) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
        }
    }
}

impl Default for PieceSnapshot {
    fn default() -> Self {
        Self {
            kind: PieceKind::I,
            rotation: Rotation::North,
            x: SPAWN_POSITION.0,
            y: SPAWN_POSITION.1,
        }
    }
}

/// Plain-data view of a game, for rendering and for the exit summary
///
/// Board cells use the numeric codes 0 (empty), 1 (filled) and 2 (marked).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: PieceSnapshot,
    pub next: PieceSnapshot,
    pub score: u32,
    pub top_score: u32,
    pub level: u8,
    pub lines: u32,
    pub gravity_frames: u8,
    pub mode: GameMode,
    /// Frames left in the line-clear hold, when one is running
    pub clearing_frames: Option<u8>,
    pub highest_block: u8,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether the active piece responds to input
    pub fn playable(&self) -> bool {
        self.mode == GameMode::Playing && self.clearing_frames.is_none()
    }

    /// Absolute board cells covered by the active piece
    pub fn active_cells(&self) -> [(i8, i8); 4] {
        Piece::from(self.active).board_cells()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: PieceSnapshot::default(),
            next: PieceSnapshot::default(),
            score: 0,
            top_score: 0,
            level: 0,
            lines: 0,
            gravity_frames: 0,
            mode: GameMode::Init,
            clearing_frames: None,
            highest_block: BOARD_HEIGHT,
        }
    }
}
