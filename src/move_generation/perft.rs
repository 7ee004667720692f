//! Perft: exhaustive legal-move leaf counting for self-validation.
//!
//! Counts must match the published reference totals exactly; a single
//! missing or surplus node at any depth pinpoints a move-generation bug.
//! `perft_divide` attributes the total to each root move so a mismatch can
//! be chased down the tree.

use std::fmt;

use crate::board::chess_rules::PROMOTION_KINDS;
use crate::board::chess_types::{PieceKind, Square};
use crate::board::position::Position;
use crate::move_generation::apply_move::with_applied_move;
use crate::move_generation::legal_moves::legal_destinations;

/// Node count attributed to one root move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivideEntry {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
    pub nodes: u64,
}

impl fmt::Display for DivideEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_square(f, self.from)?;
        write_square(f, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.fen_char())?;
        }
        write!(f, ": {}", self.nodes)
    }
}

fn write_square(f: &mut fmt::Formatter<'_>, square: Square) -> fmt::Result {
    let file = char::from(b'a' + square % 8);
    let rank = char::from(b'8' - square / 8);
    write!(f, "{file}{rank}")
}

/// Root perft result with the per-move breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerftReport {
    pub nodes: u64,
    pub moves: Vec<DivideEntry>,
}

/// Count the leaf positions reachable in exactly `depth` plies. Depth 0 is
/// the position itself: one leaf.
pub fn perft(position: &mut Position, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut nodes = 0;
    let side = position.side_to_move;

    for square in 0..64u8 {
        let Some(piece) = position.board[square as usize] else {
            continue;
        };
        if piece.color != side {
            continue;
        }

        for to in legal_destinations(position, square) {
            if piece.kind == PieceKind::Pawn && to / 8 == side.promotion_rank() {
                // One branch per promotion choice instead of one move.
                for kind in PROMOTION_KINDS {
                    nodes += with_applied_move(position, square, to, kind, |next| {
                        perft(next, depth - 1)
                    });
                }
            } else {
                nodes += with_applied_move(position, square, to, PieceKind::Queen, |next| {
                    perft(next, depth - 1)
                });
            }
        }
    }

    nodes
}

/// Like [`perft`], additionally recording the subtree size of every root
/// move for diagnostic comparison against known reference breakdowns.
pub fn perft_divide(position: &mut Position, depth: u8) -> PerftReport {
    let mut report = PerftReport {
        nodes: 0,
        moves: Vec::new(),
    };
    if depth == 0 {
        report.nodes = 1;
        return report;
    }

    let side = position.side_to_move;

    for square in 0..64u8 {
        let Some(piece) = position.board[square as usize] else {
            continue;
        };
        if piece.color != side {
            continue;
        }

        for to in legal_destinations(position, square) {
            if piece.kind == PieceKind::Pawn && to / 8 == side.promotion_rank() {
                for kind in PROMOTION_KINDS {
                    let nodes = with_applied_move(position, square, to, kind, |next| {
                        perft(next, depth - 1)
                    });
                    report.moves.push(DivideEntry {
                        from: square,
                        to,
                        promotion: Some(kind),
                        nodes,
                    });
                    report.nodes += nodes;
                }
            } else {
                let nodes = with_applied_move(position, square, to, PieceKind::Queen, |next| {
                    perft(next, depth - 1)
                });
                report.moves.push(DivideEntry {
                    from: square,
                    to,
                    promotion: None,
                    nodes,
                });
                report.nodes += nodes;
            }
        }
    }

    report
}
