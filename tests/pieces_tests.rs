//! Piece tests - shape table and rotation index formulas

use std::collections::HashSet;

use frametris::core::pieces::{cell_occupied, occupied_cells, rotated_mask, shape_mask, SHAPE_MASKS};
use frametris::types::{PieceKind, Rotation};

#[test]
fn test_shape_table_order() {
    assert_eq!(shape_mask(PieceKind::I), 0x2222);
    assert_eq!(shape_mask(PieceKind::L), 0x6220);
    assert_eq!(shape_mask(PieceKind::J), 0x0226);
    assert_eq!(shape_mask(PieceKind::O), 0x0660);
    assert_eq!(shape_mask(PieceKind::S), 0x0630);
    assert_eq!(shape_mask(PieceKind::T), 0x0720);
    assert_eq!(shape_mask(PieceKind::Z), 0x0360);
    for mask in SHAPE_MASKS {
        assert_eq!(mask.count_ones(), 4);
    }
}

#[test]
fn test_each_rotation_is_a_bijection_of_the_box() {
    for rotation in Rotation::ALL {
        let mut seen = HashSet::new();
        for y in 0..4 {
            for x in 0..4 {
                // Exactly one single-bit mask answers for (x, y).
                let hits: Vec<u16> = (0..16)
                    .filter(|bit| cell_occupied(1 << bit, x, y, rotation))
                    .collect();
                assert_eq!(hits.len(), 1, "{:?} ({}, {})", rotation, x, y);
                seen.insert(hits[0]);
            }
        }
        assert_eq!(seen.len(), 16);
    }
}

#[test]
fn test_four_quarter_turns_return_to_start() {
    for kind in PieceKind::ALL {
        let mask = shape_mask(kind);
        let mut rotation = Rotation::North;
        let mut shapes = Vec::new();
        for _ in 0..4 {
            shapes.push(rotated_mask(mask, rotation));
            rotation = rotation.rotate_cw();
        }
        assert_eq!(rotation, Rotation::North);
        assert_eq!(shapes[0], mask);
    }
}

#[test]
fn test_rotation_then_inverse_is_identity() {
    for kind in PieceKind::ALL {
        let mask = shape_mask(kind);
        for rotation in Rotation::ALL {
            let turned = rotated_mask(mask, rotation);
            assert_eq!(rotated_mask(turned, rotation.inverse()), mask, "{:?} {:?}", kind, rotation);
        }
    }
}

#[test]
fn test_o_piece_is_rotation_invariant() {
    let o = shape_mask(PieceKind::O);
    for rotation in Rotation::ALL {
        assert_eq!(rotated_mask(o, rotation), o);
    }
}

#[test]
fn test_t_piece_orientations_are_distinct() {
    let t = shape_mask(PieceKind::T);
    let distinct: HashSet<u16> = Rotation::ALL.iter().map(|&r| rotated_mask(t, r)).collect();
    assert_eq!(distinct.len(), 4);
}

#[test]
fn test_occupied_cells_match_mask() {
    for kind in PieceKind::ALL {
        for rotation in Rotation::ALL {
            let cells = occupied_cells(kind, rotation);
            let unique: HashSet<(i8, i8)> = cells.iter().copied().collect();
            assert_eq!(unique.len(), 4);
            for (x, y) in cells {
                assert!(cell_occupied(shape_mask(kind), x, y, rotation));
            }
        }
    }
}

#[test]
fn test_i_piece_east_is_horizontal_row_one() {
    assert_eq!(
        occupied_cells(PieceKind::I, Rotation::East),
        [(0, 1), (1, 1), (2, 1), (3, 1)]
    );
}
