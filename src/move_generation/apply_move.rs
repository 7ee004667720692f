//! In-place move application and reversal.
//!
//! `make_move` mutates the position and pushes a reversible delta;
//! `unmake_move` pops it and restores every field exactly. Internal probes
//! (legality filtering, perft) go through [`with_applied_move`], which
//! pairs the two structurally so no code path can leave a probe applied.

use crate::board::chess_types::{
    Color, Piece, PieceKind, Square, CASTLE_BLACK_KINGSIDE, CASTLE_BLACK_QUEENSIDE,
    CASTLE_WHITE_KINGSIDE, CASTLE_WHITE_QUEENSIDE, CastlingRights,
};
use crate::board::position::Position;
use crate::board::undo_state::UndoState;

/// Apply `from -> to`. Callers submit only moves previously returned by
/// legal-move generation; legality is not re-validated here. `promotion`
/// must be supplied on every call and is consulted only when a pawn
/// reaches the far rank.
pub fn make_move(position: &mut Position, from: Square, to: Square, promotion: PieceKind) {
    let moved_piece = position.board[from as usize]
        .expect("make_move requires a piece on the origin square");
    let mover = moved_piece.color;

    let mut undo = UndoState {
        from,
        to,
        moved_piece,
        captured: None,
        castled_rook: None,
        prev_castling_rights: position.castling_rights,
        prev_en_passant_square: position.en_passant_square,
        prev_halfmove_clock: position.halfmove_clock,
    };

    if let Some(captured) = position.board[to as usize] {
        undo.captured = Some((to, captured));
    }

    position.board[to as usize] = Some(moved_piece);
    position.board[from as usize] = None;

    if moved_piece.kind == PieceKind::King {
        position.king_squares[mover.index()] = to;

        let mover_rights = both_rights_of(mover);
        if position.castling_rights & mover_rights != 0 {
            // A two-file king step while rights remain is a castle; walk
            // the matching rook over the king.
            if to == from + 2 {
                let (rook_from, rook_to) = (from + 3, from + 1);
                position.board[rook_to as usize] = position.board[rook_from as usize].take();
                undo.castled_rook = Some((rook_from, rook_to));
            } else if from >= 2 && to == from - 2 {
                let (rook_from, rook_to) = (from - 4, from - 1);
                position.board[rook_to as usize] = position.board[rook_from as usize].take();
                undo.castled_rook = Some((rook_from, rook_to));
            }
        }
        position.castling_rights &= !mover_rights;
    }

    if moved_piece.kind == PieceKind::Rook {
        position.castling_rights &= !corner_right(from);
    }
    // Any move landing on a corner captures whatever castling rook still
    // lived there.
    position.castling_rights &= !corner_right(to);

    let is_pawn = moved_piece.kind == PieceKind::Pawn;

    // En passant: the victim stands one rank behind the destination.
    if is_pawn && undo.prev_en_passant_square == Some(to) {
        let victim_square = match mover {
            Color::White => to + 8,
            Color::Black => to - 8,
        };
        if let Some(victim) = position.board[victim_square as usize].take() {
            undo.captured = Some((victim_square, victim));
        }
    }

    position.en_passant_square = None;
    if is_pawn && (to == from + 16 || from == to + 16) {
        position.en_passant_square = Some((from + to) / 2);
    }

    if is_pawn && to / 8 == mover.promotion_rank() {
        position.board[to as usize] = Some(Piece::new(mover, promotion));
    }

    if is_pawn || undo.captured.is_some() {
        position.halfmove_clock = 0;
    } else {
        position.halfmove_clock += 1;
    }

    if mover == Color::Black {
        position.fullmove_number += 1;
    }
    // Symmetric flip rather than "opponent of the mover": off-turn probes
    // (has_legal_moves for the idle color) must restore exactly on unmake.
    position.side_to_move = position.side_to_move.opposite();

    position.undo_stack.push(undo);
}

/// Revert the most recent move exactly; silent no-op on empty history.
pub fn unmake_move(position: &mut Position) {
    let Some(undo) = position.undo_stack.pop() else {
        return;
    };
    let mover = undo.moved_piece.color;

    position.board[undo.to as usize] = None;
    position.board[undo.from as usize] = Some(undo.moved_piece);
    if let Some((square, piece)) = undo.captured {
        position.board[square as usize] = Some(piece);
    }
    if let Some((rook_from, rook_to)) = undo.castled_rook {
        position.board[rook_from as usize] = position.board[rook_to as usize].take();
    }

    if undo.moved_piece.kind == PieceKind::King {
        position.king_squares[mover.index()] = undo.from;
    }

    position.castling_rights = undo.prev_castling_rights;
    position.en_passant_square = undo.prev_en_passant_square;
    position.halfmove_clock = undo.prev_halfmove_clock;

    if mover == Color::Black {
        position.fullmove_number = position.fullmove_number.saturating_sub(1);
    }
    position.side_to_move = position.side_to_move.opposite();
}

/// Apply a move, run `probe`, and revert unconditionally before returning
/// its result. Legality filtering and perft recursion both route through
/// here so the shared position can never be left in a probed state.
#[inline]
pub fn with_applied_move<T>(
    position: &mut Position,
    from: Square,
    to: Square,
    promotion: PieceKind,
    probe: impl FnOnce(&mut Position) -> T,
) -> T {
    make_move(position, from, to, promotion);
    let outcome = probe(position);
    unmake_move(position);
    outcome
}

#[inline]
const fn both_rights_of(color: Color) -> CastlingRights {
    match color {
        Color::White => CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE,
        Color::Black => CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE,
    }
}

/// The castling right tied to a corner square, if `square` is one.
#[inline]
const fn corner_right(square: Square) -> CastlingRights {
    match square {
        0 => CASTLE_BLACK_QUEENSIDE,  // a8
        7 => CASTLE_BLACK_KINGSIDE,   // h8
        56 => CASTLE_WHITE_QUEENSIDE, // a1
        63 => CASTLE_WHITE_KINGSIDE,  // h1
        _ => 0,
    }
}
