//! Pieces module - tetromino bitmasks and the fixed rotation encoding
//!
//! Every shape is a 16-bit occupancy mask over a 4x4 box, row-major, with
//! bit `y * 4 + x` describing local cell (x, y). Rotations are not stored;
//! each one re-indexes the same mask with its own bit formula. The formulas
//! are asymmetric because the masks are not centered in the box.

use crate::types::{PieceKind, Rotation, BOARD_WIDTH};

/// Side length of a piece's bounding box
pub const PIECE_BOX: i8 = 4;

/// Spawn anchor (top-left corner of the 4x4 box)
pub const SPAWN_POSITION: (i8, i8) = ((BOARD_WIDTH / 2) as i8 - 1, 0);

/// Shape masks in shape-table order (I, L, J, O, S, T, Z)
pub const SHAPE_MASKS: [u16; 7] = [0x2222, 0x6220, 0x0226, 0x0660, 0x0630, 0x0720, 0x0360];

/// Occupancy mask for a piece kind
pub fn shape_mask(kind: PieceKind) -> u16 {
    SHAPE_MASKS[kind.index()]
}

/// Whether local cell (x, y) of `mask` is occupied under `rotation`
///
/// Coordinates outside the 4x4 box are never occupied.
pub fn cell_occupied(mask: u16, x: i8, y: i8, rotation: Rotation) -> bool {
    if !(0..PIECE_BOX).contains(&x) || !(0..PIECE_BOX).contains(&y) {
        return false;
    }
    let bit = match rotation {
        Rotation::North => y * 4 + x,
        Rotation::East => 12 + y - x * 4,
        Rotation::South => 15 - y * 4 - x,
        Rotation::West => 3 - y + x * 4,
    };
    (mask >> bit) & 1 == 1
}

/// Materialize `mask` as seen under `rotation`, as a new North-indexed mask
pub fn rotated_mask(mask: u16, rotation: Rotation) -> u16 {
    let mut out = 0u16;
    for y in 0..PIECE_BOX {
        for x in 0..PIECE_BOX {
            if cell_occupied(mask, x, y, rotation) {
                out |= 1 << (y * 4 + x);
            }
        }
    }
    out
}

/// Local offsets of the four occupied cells, in row-major scan order
pub fn occupied_cells(kind: PieceKind, rotation: Rotation) -> [(i8, i8); 4] {
    let mask = shape_mask(kind);
    let mut cells = [(0, 0); 4];
    let mut n = 0;
    for y in 0..PIECE_BOX {
        for x in 0..PIECE_BOX {
            if cell_occupied(mask, x, y, rotation) && n < cells.len() {
                cells[n] = (x, y);
                n += 1;
            }
        }
    }
    cells
}

/// A tetromino with its pose on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece at the spawn anchor with the given rotation
    pub fn spawn(kind: PieceKind, rotation: Rotation) -> Self {
        Self {
            kind,
            rotation,
            x: SPAWN_POSITION.0,
            y: SPAWN_POSITION.1,
        }
    }

    pub fn mask(&self) -> u16 {
        shape_mask(self.kind)
    }

    /// Whether local cell (x, y) is occupied under an arbitrary rotation
    pub fn occupies(&self, x: i8, y: i8, rotation: Rotation) -> bool {
        cell_occupied(self.mask(), x, y, rotation)
    }

    /// Absolute board cells covered at the current pose
    pub fn board_cells(&self) -> [(i8, i8); 4] {
        occupied_cells(self.kind, self.rotation).map(|(dx, dy)| (self.x + dx, self.y + dy))
    }
}
