//! Piece module - the active piece as a value type
//!
//! A piece is just kind, rotation and anchor. Moving or rotating returns a
//! new piece; nothing here knows about the board.

use crate::shapes::{get_shape, PieceShape};
use crate::types::{PieceKind, Rgb, Rotation, SPAWN_ROW};

/// A piece placed relative to the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    /// Board column of the bounding box's left edge
    pub x: i16,
    /// Board row of the bounding box's top edge (negative = above the board)
    pub y: i16,
}

impl Piece {
    pub fn new(kind: PieceKind, rotation: Rotation, x: i16, y: i16) -> Self {
        Self {
            kind,
            rotation,
            x,
            y,
        }
    }

    /// Spawn orientation, bounding box centered over a board `width` columns wide
    pub fn spawn(kind: PieceKind, width: u16) -> Self {
        let x = (width.saturating_sub(kind.box_size()) / 2) as i16;
        Self::new(kind, Rotation::North, x, SPAWN_ROW)
    }

    /// Get the shape (cell offsets) for the current rotation
    pub fn shape(&self) -> PieceShape {
        get_shape(self.kind, self.rotation)
    }

    /// Board cells covered by the piece, in catalog order
    pub fn occupied_cells(&self) -> [(i16, i16); 4] {
        self.shape().map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Same anchor, rotation advanced by `delta` quarter turns (clockwise positive)
    #[must_use]
    pub fn rotated(&self, delta: i8) -> Self {
        Self {
            rotation: self.rotation.rotated_by(delta),
            ..*self
        }
    }

    /// Same rotation, anchor translated
    #[must_use]
    pub fn moved(&self, dx: i16, dy: i16) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    pub fn color(&self) -> Rgb {
        self.kind.color()
    }
}
