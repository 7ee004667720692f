//! Rook destination generation over the four orthogonal rays.

use crate::board::chess_types::Square;
use crate::board::position::Position;
use crate::move_generation::ray_walk::ray_destinations;

pub const ROOK_DIRECTIONS: [(i16, i16); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

#[inline]
pub fn rook_destinations(position: &Position, square: Square, out: &mut Vec<Square>) {
    ray_destinations(position, square, &ROOK_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_file_closed_rank() {
        // Rook a1 under a friendly pawn wall on a2; enemy rook h1.
        let position =
            Position::from_fen("4k3/8/8/8/8/8/P7/R3K2r w Q - 0 1").expect("test FEN should parse");
        let mut moves = Vec::new();
        rook_destinations(&position, 56, &mut moves);
        moves.sort_unstable();

        // Up blocked by a2; right: b1 c1 d1, stop before own king on e1.
        assert_eq!(moves, vec![57, 58, 59]);
    }
}
