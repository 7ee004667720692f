//! Mailbox board state representation.
//!
//! `Position` is the central model for the rules engine. It stores the
//! 64-slot piece array, turn/state flags, clocks, cached king squares, and
//! the undo stack used by make/unmake workflows. It is mutated in place by
//! exactly one logical caller at a time; queries that legality-probe take
//! `&mut self` because the probe applies and reverts moves on the shared
//! board.

use crate::board::chess_rules::STARTING_POSITION_FEN;
use crate::board::chess_types::{CastlingRights, Color, Piece, PieceKind, Square};
use crate::board::undo_state::UndoState;
use crate::move_generation::apply_move::{make_move, unmake_move};
use crate::move_generation::attack_checks::is_king_in_check;
use crate::move_generation::legal_moves::{has_legal_moves, legal_destinations};
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::{parse_fen, FenParseError};

#[derive(Debug, Clone)]
pub struct Position {
    /// 64-slot mailbox, index 0 == a8, `rank * 8 + file` with rank growing
    /// downward.
    pub board: [Option<Piece>; 64],

    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,

    pub halfmove_clock: u32,
    pub fullmove_number: u32,

    /// Cached king locations, indexed by `Color::index()`. Redundant with
    /// the board but required for O(1) check queries.
    pub king_squares: [Square; 2],

    pub undo_stack: Vec<UndoState>,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            board: [None; 64],
            side_to_move: Color::White,
            castling_rights: 0,
            en_passant_square: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            king_squares: [0; 2],
            undo_stack: Vec::new(),
        }
    }
}

impl Position {
    /// An empty board; the FEN parser fills one of these in.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, FenParseError> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board[square as usize]
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    /// Legal destinations for the piece on `square`. Empty unless the
    /// square holds a piece of the side to move.
    pub fn legal_moves(&mut self, square: Square) -> Vec<Square> {
        match self.board[square as usize] {
            Some(piece) if piece.color == self.side_to_move => legal_destinations(self, square),
            _ => Vec::new(),
        }
    }

    /// Apply a move previously returned by [`Position::legal_moves`].
    /// `promotion` must be supplied on every call and is consulted only
    /// when a pawn reaches the far rank. Legality is not re-validated.
    #[inline]
    pub fn make_move(&mut self, from: Square, to: Square, promotion: PieceKind) {
        make_move(self, from, to, promotion);
    }

    /// Revert the most recent move; no-op when the history is empty.
    #[inline]
    pub fn unmake_move(&mut self) {
        unmake_move(self);
    }

    #[inline]
    pub fn is_in_check(&self, color: Color) -> bool {
        is_king_in_check(self, color)
    }

    #[inline]
    pub fn has_legal_moves(&mut self, color: Color) -> bool {
        has_legal_moves(self, color)
    }

    /// The side to move is in check and has no legal reply.
    pub fn is_checkmate(&mut self) -> bool {
        let side = self.side_to_move;
        self.is_in_check(side) && !self.has_legal_moves(side)
    }

    /// The side to move is NOT in check yet has no legal reply.
    pub fn is_stalemate(&mut self) -> bool {
        let side = self.side_to_move;
        !self.is_in_check(side) && !self.has_legal_moves(side)
    }
}
