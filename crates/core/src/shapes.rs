//! Shapes module - the static piece catalog
//!
//! Every kind has four rotation states. Each state is four (column, row)
//! offsets inside the kind's square bounding box, listed in row-major order.
//! The I piece lies on row 2 of its 4x4 box when horizontal; O never changes.

use crate::types::{PieceKind, Rotation};

/// Offset of a single cell relative to the piece anchor
pub type CellOffset = (i16, i16);

/// Shape of a piece - 4 cell offsets from the piece anchor
pub type PieceShape = [CellOffset; 4];

/// Get the shape (cell offsets) for a piece kind and rotation
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    let table = match kind {
        PieceKind::I => &I_SHAPES,
        PieceKind::J => &J_SHAPES,
        PieceKind::L => &L_SHAPES,
        PieceKind::O => &O_SHAPES,
        PieceKind::S => &S_SHAPES,
        PieceKind::T => &T_SHAPES,
        PieceKind::Z => &Z_SHAPES,
    };
    table[rotation.index() as usize]
}

type ShapeTable = [PieceShape; 4];

const I_SHAPES: ShapeTable = [
    [(0, 2), (1, 2), (2, 2), (3, 2)],
    [(2, 0), (2, 1), (2, 2), (2, 3)],
    [(0, 2), (1, 2), (2, 2), (3, 2)],
    [(1, 0), (1, 1), (1, 2), (1, 3)],
];

const J_SHAPES: ShapeTable = [
    [(0, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (2, 0), (1, 1), (1, 2)],
    [(0, 1), (1, 1), (2, 1), (2, 2)],
    [(1, 0), (1, 1), (0, 2), (1, 2)],
];

const L_SHAPES: ShapeTable = [
    [(2, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (1, 1), (1, 2), (2, 2)],
    [(0, 1), (1, 1), (2, 1), (0, 2)],
    [(0, 0), (1, 0), (1, 1), (1, 2)],
];

const O_SHAPES: ShapeTable = [[(1, 0), (2, 0), (1, 1), (2, 1)]; 4];

const S_SHAPES: ShapeTable = [
    [(1, 0), (2, 0), (0, 1), (1, 1)],
    [(1, 0), (1, 1), (2, 1), (2, 2)],
    [(1, 1), (2, 1), (0, 2), (1, 2)],
    [(0, 0), (0, 1), (1, 1), (1, 2)],
];

const T_SHAPES: ShapeTable = [
    [(1, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (1, 1), (2, 1), (1, 2)],
    [(0, 1), (1, 1), (2, 1), (1, 2)],
    [(1, 0), (0, 1), (1, 1), (1, 2)],
];

const Z_SHAPES: ShapeTable = [
    [(0, 0), (1, 0), (1, 1), (2, 1)],
    [(2, 0), (1, 1), (2, 1), (1, 2)],
    [(0, 1), (1, 1), (1, 2), (2, 2)],
    [(1, 0), (0, 1), (1, 1), (0, 2)],
];

/// Shape shown in the preview panel
pub fn get_preview_shape(kind: PieceKind) -> PieceShape {
    get_shape(kind, Rotation::North)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROTATIONS: [Rotation; 4] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    #[test]
    fn every_shape_fits_its_bounding_box() {
        for kind in PieceKind::ALL {
            let size = kind.box_size() as i16;
            for rotation in ROTATIONS {
                for (dx, dy) in get_shape(kind, rotation) {
                    assert!((0..size).contains(&dx), "{kind:?} {rotation:?} dx={dx}");
                    assert!((0..size).contains(&dy), "{kind:?} {rotation:?} dy={dy}");
                }
            }
        }
    }

    #[test]
    fn every_shape_has_four_distinct_cells() {
        for kind in PieceKind::ALL {
            for rotation in ROTATIONS {
                let shape = get_shape(kind, rotation);
                for i in 0..4 {
                    for j in (i + 1)..4 {
                        assert_ne!(shape[i], shape[j], "{kind:?} {rotation:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn offsets_are_in_row_major_order() {
        for kind in PieceKind::ALL {
            for rotation in ROTATIONS {
                let shape = get_shape(kind, rotation);
                for pair in shape.windows(2) {
                    let (a, b) = (pair[0], pair[1]);
                    assert!((a.1, a.0) < (b.1, b.0), "{kind:?} {rotation:?}");
                }
            }
        }
    }

    #[test]
    fn o_piece_is_rotation_invariant() {
        let north = get_shape(PieceKind::O, Rotation::North);
        for rotation in ROTATIONS {
            assert_eq!(get_shape(PieceKind::O, rotation), north);
        }
    }
}
