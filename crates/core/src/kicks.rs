//! Kicks module - rotation with a flat wall-kick list
//!
//! Every rotation of every kind tries the same offsets in the same order:
//! in place, one column left, one column right, one row up, two columns left,
//! two columns right. The first placement the board accepts wins, which keeps
//! play deterministic.

use crate::board::Board;
use crate::piece::Piece;

/// Anchor offsets tried after rotating, in priority order
pub const KICK_OFFSETS: [(i16, i16); 6] = [(0, 0), (-1, 0), (1, 0), (0, -1), (-2, 0), (2, 0)];

/// Try to rotate `piece` by `delta` quarter turns, kicking it if needed
///
/// Returns the first valid kicked placement with the new rotation, or `None`
/// if every offset collides (the caller keeps the original piece).
pub fn try_rotate(board: &Board, piece: &Piece, delta: i8) -> Option<Piece> {
    let candidate = piece.rotated(delta);
    KICK_OFFSETS
        .iter()
        .map(|&(dx, dy)| candidate.moved(dx, dy))
        .find(|kicked| board.is_valid(kicked))
}
