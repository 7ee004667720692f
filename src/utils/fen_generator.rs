//! Position-to-FEN serialization, the round-trip partner of the parser.

use crate::board::chess_types::{
    CastlingRights, Color, CASTLE_BLACK_KINGSIDE, CASTLE_BLACK_QUEENSIDE,
    CASTLE_WHITE_KINGSIDE, CASTLE_WHITE_QUEENSIDE,
};
use crate::board::position::Position;
use crate::utils::algebraic::square_to_algebraic;

pub fn generate_fen(position: &Position) -> String {
    let board = generate_board_field(position);
    let side_to_move = match position.side_to_move {
        Color::White => "w",
        Color::Black => "b",
    };
    let castling = generate_castling_field(position.castling_rights);
    let en_passant = position
        .en_passant_square
        .and_then(|square| square_to_algebraic(square).ok())
        .unwrap_or_else(|| "-".to_owned());

    format!(
        "{} {} {} {} {} {}",
        board,
        side_to_move,
        castling,
        en_passant,
        position.halfmove_clock,
        position.fullmove_number
    )
}

fn generate_board_field(position: &Position) -> String {
    let mut out = String::new();

    // Index 0 is a8, so FEN rank order is plain index order.
    for rank in 0..8 {
        let mut empty_run = 0u8;

        for file in 0..8 {
            match position.board[rank * 8 + file] {
                Some(piece) => {
                    if empty_run > 0 {
                        out.push(char::from(b'0' + empty_run));
                        empty_run = 0;
                    }
                    out.push(piece.to_fen_char());
                }
                None => empty_run += 1,
            }
        }

        if empty_run > 0 {
            out.push(char::from(b'0' + empty_run));
        }
        if rank < 7 {
            out.push('/');
        }
    }

    out
}

fn generate_castling_field(rights: CastlingRights) -> String {
    let mut out = String::new();

    if rights & CASTLE_WHITE_KINGSIDE != 0 {
        out.push('K');
    }
    if rights & CASTLE_WHITE_QUEENSIDE != 0 {
        out.push('Q');
    }
    if rights & CASTLE_BLACK_KINGSIDE != 0 {
        out.push('k');
    }
    if rights & CASTLE_BLACK_QUEENSIDE != 0 {
        out.push('q');
    }

    if out.is_empty() {
        out.push('-');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::generate_fen;
    use crate::board::chess_rules::STARTING_POSITION_FEN;
    use crate::utils::fen_parser::parse_fen;

    fn assert_round_trip(fen: &str) {
        let parsed = parse_fen(fen).expect("FEN should parse");
        let generated = generate_fen(&parsed);
        assert_eq!(generated, fen);

        let reparsed = parse_fen(&generated).expect("generated FEN should parse");
        assert_eq!(reparsed.board, parsed.board);
        assert_eq!(reparsed.side_to_move, parsed.side_to_move);
        assert_eq!(reparsed.castling_rights, parsed.castling_rights);
        assert_eq!(reparsed.en_passant_square, parsed.en_passant_square);
        assert_eq!(reparsed.halfmove_clock, parsed.halfmove_clock);
        assert_eq!(reparsed.fullmove_number, parsed.fullmove_number);
        assert_eq!(reparsed.king_squares, parsed.king_squares);
    }

    #[test]
    fn round_trip_starting_position() {
        assert_round_trip(STARTING_POSITION_FEN);
    }

    #[test]
    fn round_trip_developed_position_with_partial_rights() {
        assert_round_trip("r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/2N2N2/PPPP1PPP/R1BQ1RK1 b kq - 4 6");
    }

    #[test]
    fn round_trip_en_passant_target() {
        assert_round_trip("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3");
    }

    #[test]
    fn round_trip_bare_kings_and_no_rights() {
        assert_round_trip("8/8/4k3/8/8/2K5/8/8 w - - 99 50");
    }
}
