//! Legal move generation pipeline.
//!
//! Piece-wise pseudo-legal generation, castling augmentation for kings, and
//! the apply → check → revert legality filter. The probe is the engine's
//! sole legality mechanism; there are no precomputed pin or discovered-check
//! tables.

use crate::board::chess_types::{Color, PieceKind, Square};
use crate::board::position::Position;
use crate::move_generation::apply_move::with_applied_move;
use crate::move_generation::attack_checks::is_king_in_check;
use crate::move_generation::moves_bishop::bishop_destinations;
use crate::move_generation::moves_king::{castle_destinations, king_destinations};
use crate::move_generation::moves_knight::knight_destinations;
use crate::move_generation::moves_pawn::{pawn_destinations, PawnMoveMode};
use crate::move_generation::moves_queen::queen_destinations;
use crate::move_generation::moves_rook::rook_destinations;

/// Pseudo-legal destinations for the piece on `square`, dispatched by kind.
/// Castling is not part of this surface; see [`legal_destinations`].
pub fn pseudo_destinations(
    position: &Position,
    square: Square,
    pawn_mode: PawnMoveMode,
    out: &mut Vec<Square>,
) {
    let Some(piece) = position.board[square as usize] else {
        return;
    };

    match piece.kind {
        PieceKind::Pawn => pawn_destinations(position, square, pawn_mode, out),
        PieceKind::Knight => knight_destinations(position, square, out),
        PieceKind::Bishop => bishop_destinations(position, square, out),
        PieceKind::Rook => rook_destinations(position, square, out),
        PieceKind::Queen => queen_destinations(position, square, out),
        PieceKind::King => king_destinations(position, square, out),
    }
}

/// Legal destinations for the piece on `square`, regardless of whose turn
/// it is: pseudo-legal candidates (plus castles for a king), each probed by
/// applying it and discarding those that leave the mover's own king
/// attacked. The probe reverts unconditionally.
///
/// A promotion's legality never depends on the promoted kind, so the probe
/// applies a queen placeholder; perft expands the four kinds explicitly.
pub fn legal_destinations(position: &mut Position, square: Square) -> Vec<Square> {
    let Some(piece) = position.board[square as usize] else {
        return Vec::new();
    };

    let mut candidates = Vec::new();
    pseudo_destinations(position, square, PawnMoveMode::Standard, &mut candidates);
    if piece.kind == PieceKind::King {
        castle_destinations(position, square, &mut candidates);
    }

    let mut legal = Vec::with_capacity(candidates.len());
    for to in candidates {
        let king_safe = with_applied_move(position, square, to, PieceKind::Queen, |probed| {
            !is_king_in_check(probed, piece.color)
        });
        if king_safe {
            legal.push(to);
        }
    }

    legal
}

/// Does `color` have at least one legal move anywhere on the board?
pub fn has_legal_moves(position: &mut Position, color: Color) -> bool {
    for square in 0..64u8 {
        if position.board[square as usize].is_some_and(|piece| piece.color == color)
            && !legal_destinations(position, square).is_empty()
        {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn move_count(position: &mut Position, color: Color) -> usize {
        let mut count = 0;
        for square in 0..64u8 {
            if position.board[square as usize].is_some_and(|piece| piece.color == color) {
                count += legal_destinations(position, square).len();
            }
        }
        count
    }

    #[test]
    fn starting_position_has_twenty_moves() {
        let mut position = Position::new_game();
        assert_eq!(move_count(&mut position, Color::White), 20);
        assert_eq!(move_count(&mut position, Color::Black), 20);
    }

    #[test]
    fn pinned_piece_cannot_expose_its_king() {
        // White knight e2 is pinned by the e8 rook; e1 king, e8 rook, e2
        // knight share the e-file.
        let mut position =
            Position::from_fen("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1").expect("FEN should parse");
        assert!(legal_destinations(&mut position, 52).is_empty());

        // The same knight unpinned moves freely.
        let mut position =
            Position::from_fen("6k1/8/8/8/8/8/4N3/4K3 w - - 0 1").expect("FEN should parse");
        assert_eq!(legal_destinations(&mut position, 52).len(), 6);
    }

    #[test]
    fn check_must_be_answered() {
        // White king e1 checked by the e8 rook; the c3 bishop's only legal
        // moves interpose on the e-file.
        let mut position =
            Position::from_fen("4r1k1/8/8/8/8/2B5/8/4K3 w - - 0 1").expect("FEN should parse");
        let bishop_moves = legal_destinations(&mut position, 42);
        assert_eq!(bishop_moves, vec![28]); // c3-e5 is the lone interposition

        // The king itself may step off the file.
        let king_moves = legal_destinations(&mut position, 60);
        assert!(!king_moves.contains(&52)); // e2 still on the checked file
        assert!(king_moves.contains(&59) && king_moves.contains(&61));
    }

    #[test]
    fn probe_restores_the_position_it_tested_on() {
        let mut position = Position::new_game();
        let before = position.get_fen();
        let _ = legal_destinations(&mut position, 57); // b1 knight
        let _ = has_legal_moves(&mut position, Color::White);
        assert_eq!(position.get_fen(), before);
        assert!(position.undo_stack.is_empty());
    }
}
