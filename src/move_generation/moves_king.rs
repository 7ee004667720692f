//! King destination generation, including the castling augmentation used
//! by legal-move generation.

use crate::board::chess_types::{
    Color, Piece, PieceKind, Square, CASTLE_BLACK_KINGSIDE, CASTLE_BLACK_QUEENSIDE,
    CASTLE_WHITE_KINGSIDE, CASTLE_WHITE_QUEENSIDE,
};
use crate::board::position::Position;
use crate::move_generation::attack_checks::is_square_attacked;

const KING_OFFSETS: [i16; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

pub fn king_destinations(position: &Position, square: Square, out: &mut Vec<Square>) {
    let Some(king) = position.board[square as usize] else {
        return;
    };

    let sq = square as i16;
    let (rank, file) = (sq / 8, sq % 8);

    for offset in KING_OFFSETS {
        let target = sq + offset;
        if !(0..64).contains(&target) {
            continue;
        }
        if (target / 8 - rank).abs() > 1 || (target % 8 - file).abs() > 1 {
            continue;
        }
        if position.board[target as usize].is_some_and(|other| other.same_team(king)) {
            continue;
        }
        out.push(target as Square);
    }
}

/// Append the castle destinations available to the king on `square`.
///
/// A castle requires the matching rights flag, empty squares strictly
/// between king and rook, an unattacked origin/transit/destination for the
/// king, and the same-color rook still on its corner. Only legal-move
/// generation calls this; a castle never appears among raw pseudo-legal
/// moves and never counts as an attack.
pub fn castle_destinations(position: &Position, square: Square, out: &mut Vec<Square>) {
    let Some(king) = position.board[square as usize] else {
        return;
    };

    let enemy = king.color.opposite();
    if square % 8 != 4 || is_square_attacked(position, square, enemy) {
        return;
    }

    let (kingside, queenside) = match king.color {
        Color::White => (CASTLE_WHITE_KINGSIDE, CASTLE_WHITE_QUEENSIDE),
        Color::Black => (CASTLE_BLACK_KINGSIDE, CASTLE_BLACK_QUEENSIDE),
    };
    let own_rook = Some(Piece::new(king.color, PieceKind::Rook));
    let sq = square as usize;

    if position.castling_rights & kingside != 0
        && position.board[sq + 1].is_none()
        && position.board[sq + 2].is_none()
        && position.board[sq + 3] == own_rook
        && !is_square_attacked(position, square + 1, enemy)
        && !is_square_attacked(position, square + 2, enemy)
    {
        out.push(square + 2);
    }

    if position.castling_rights & queenside != 0
        && position.board[sq - 1].is_none()
        && position.board[sq - 2].is_none()
        && position.board[sq - 3].is_none()
        && position.board[sq - 4] == own_rook
        && !is_square_attacked(position, square - 1, enemy)
        && !is_square_attacked(position, square - 2, enemy)
    {
        out.push(square - 2);
    }
}
