//! Queen destination generation: the union of rook and bishop rays.

use crate::board::chess_types::Square;
use crate::board::position::Position;
use crate::move_generation::moves_bishop::bishop_destinations;
use crate::move_generation::moves_rook::rook_destinations;

pub fn queen_destinations(position: &Position, square: Square, out: &mut Vec<Square>) {
    rook_destinations(position, square, out);
    bishop_destinations(position, square, out);
}
