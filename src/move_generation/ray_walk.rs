//! Shared ray walker for the sliding pieces.

use crate::board::chess_types::Square;
use crate::board::position::Position;

/// Walk each `(rank_step, file_step)` direction from `square`, collecting
/// empty squares, stopping on (and including) the first enemy square, and
/// stopping before the first friendly square.
pub fn ray_destinations(
    position: &Position,
    square: Square,
    directions: &[(i16, i16)],
    out: &mut Vec<Square>,
) {
    let Some(slider) = position.board[square as usize] else {
        return;
    };

    let (rank, file) = ((square / 8) as i16, (square % 8) as i16);

    for &(rank_step, file_step) in directions {
        let (mut r, mut f) = (rank + rank_step, file + file_step);

        while (0..8).contains(&r) && (0..8).contains(&f) {
            let target = (r * 8 + f) as Square;
            match position.board[target as usize] {
                None => out.push(target),
                Some(other) if other.is_enemy_of(slider) => {
                    out.push(target);
                    break;
                }
                Some(_) => break,
            }
            r += rank_step;
            f += file_step;
        }
    }
}
