//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view from the mailbox array for
//! debugging, tests, and diagnostics in text environments.

use crate::board::chess_types::{Color, Piece, PieceKind};
use crate::board::position::Position;

/// Render the board to a Unicode string for terminal output, rank 8 at the
/// top as on a printed diagram.
pub fn render_position(position: &Position) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in 0..8usize {
        let rank_char = char::from(b'8' - rank as u8);
        out.push(rank_char);
        out.push(' ');

        for file in 0..8usize {
            match position.board[rank * 8 + file] {
                Some(piece) => out.push(piece_to_unicode(piece)),
                None => out.push('·'),
            }
            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank_char);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::render_position;
    use crate::board::position::Position;

    #[test]
    fn starting_position_renders_with_rank_eight_on_top() {
        let rendered = render_position(&Position::new_game());
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[1], "8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜ 8");
        assert_eq!(lines[4], "5 · · · · · · · · 5");
        assert_eq!(lines[8], "1 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖ 1");
    }
}
