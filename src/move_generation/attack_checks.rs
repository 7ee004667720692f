//! Attack probing over pseudo-legal generation.
//!
//! Attack detection recomputes the opposing moves on every query. That is
//! O(pieces × generation) per call, acceptable at 64 squares and bounded
//! perft depths; keeping it behind `is_square_attacked` leaves room to swap
//! in incremental attack maps without touching any caller.

use crate::board::chess_types::{Color, Square};
use crate::board::position::Position;
use crate::move_generation::legal_moves::pseudo_destinations;
use crate::move_generation::moves_pawn::PawnMoveMode;

/// Does any piece of `by_color` attack `target`?
///
/// Pawns are generated in attacks-only mode so their diagonals count even
/// onto empty squares; every other piece attacks exactly where it moves.
pub fn is_square_attacked(position: &Position, target: Square, by_color: Color) -> bool {
    let mut destinations = Vec::with_capacity(32);

    for square in 0..64u8 {
        let Some(piece) = position.board[square as usize] else {
            continue;
        };
        if piece.color != by_color {
            continue;
        }

        destinations.clear();
        pseudo_destinations(position, square, PawnMoveMode::AttacksOnly, &mut destinations);
        if destinations.contains(&target) {
            return true;
        }
    }

    false
}

#[inline]
pub fn is_king_in_check(position: &Position, color: Color) -> bool {
    is_square_attacked(position, position.king_square(color), color.opposite())
}
