//! Bishop destination generation over the four diagonal rays.

use crate::board::chess_types::Square;
use crate::board::position::Position;
use crate::move_generation::ray_walk::ray_destinations;

pub const BISHOP_DIRECTIONS: [(i16, i16); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

#[inline]
pub fn bishop_destinations(position: &Position, square: Square, out: &mut Vec<Square>) {
    ray_destinations(position, square, &BISHOP_DIRECTIONS, out);
}
