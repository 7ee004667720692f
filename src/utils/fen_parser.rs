//! FEN-to-Position parser.
//!
//! Builds a fully-populated position from a Forsyth-Edwards Notation
//! string, including the king-square caches. Every malformed input is
//! rejected with a [`FenParseError`] before any value escapes, so a bad
//! FEN can never produce a half-initialized position.

use std::error::Error;
use std::fmt;

use crate::board::chess_types::{
    CastlingRights, Color, Piece, PieceKind, Square, CASTLE_BLACK_KINGSIDE,
    CASTLE_BLACK_QUEENSIDE, CASTLE_WHITE_KINGSIDE, CASTLE_WHITE_QUEENSIDE,
};
use crate::board::position::Position;
use crate::utils::algebraic::algebraic_to_square;

/// Rejection reasons for a malformed FEN string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenParseError {
    /// The string did not split into exactly 6 whitespace-separated fields.
    FieldCount(usize),
    /// The placement field did not contain exactly 8 ranks.
    RankCount(usize),
    /// A placement rank did not add up to exactly 8 files.
    RankWidth(String),
    /// A placement character is neither a piece letter nor a 1-8 run.
    InvalidPieceChar(char),
    /// The side-to-move field was neither `w` nor `b`.
    InvalidSideToMove(String),
    /// The castling field held characters outside `KQkq`, or mixed `-`
    /// with letters.
    InvalidCastlingField(String),
    /// The en-passant field was neither `-` nor a valid square.
    InvalidEnPassantSquare(String),
    /// A clock field was not a non-negative integer.
    InvalidClock(String),
}

impl fmt::Display for FenParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenParseError::FieldCount(found) => {
                write!(f, "FEN must have 6 fields, found {found}")
            }
            FenParseError::RankCount(found) => {
                write!(f, "FEN board layout must have 8 ranks, found {found}")
            }
            FenParseError::RankWidth(rank) => {
                write!(f, "FEN rank does not sum to 8 files: {rank}")
            }
            FenParseError::InvalidPieceChar(ch) => {
                write!(f, "invalid piece character in board layout: {ch}")
            }
            FenParseError::InvalidSideToMove(field) => {
                write!(f, "invalid side-to-move field: {field}")
            }
            FenParseError::InvalidCastlingField(field) => {
                write!(f, "invalid castling rights field: {field}")
            }
            FenParseError::InvalidEnPassantSquare(field) => {
                write!(f, "invalid en-passant square: {field}")
            }
            FenParseError::InvalidClock(field) => {
                write!(f, "invalid clock field: {field}")
            }
        }
    }
}

impl Error for FenParseError {}

pub fn parse_fen(fen: &str) -> Result<Position, FenParseError> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.len() != 6 {
        return Err(FenParseError::FieldCount(fields.len()));
    }

    let mut position = Position::new_empty();

    parse_board(fields[0], &mut position)?;
    position.side_to_move = parse_side_to_move(fields[1])?;
    position.castling_rights = parse_castling_rights(fields[2])?;
    position.en_passant_square = parse_en_passant_square(fields[3])?;
    position.halfmove_clock = parse_clock(fields[4])?;
    position.fullmove_number = parse_clock(fields[5])?;

    Ok(position)
}

fn parse_board(field: &str, position: &mut Position) -> Result<(), FenParseError> {
    let ranks: Vec<&str> = field.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenParseError::RankCount(ranks.len()));
    }

    // The first FEN rank is rank 8, which is board rank index 0.
    for (rank, rank_str) in ranks.iter().enumerate() {
        let mut file = 0usize;

        for ch in rank_str.chars() {
            if let Some(run) = ch.to_digit(10) {
                if !(1..=8).contains(&run) {
                    return Err(FenParseError::RankWidth((*rank_str).to_owned()));
                }
                file += run as usize;
                continue;
            }

            let piece =
                Piece::from_fen_char(ch).ok_or(FenParseError::InvalidPieceChar(ch))?;
            if file >= 8 {
                return Err(FenParseError::RankWidth((*rank_str).to_owned()));
            }

            let square = rank * 8 + file;
            position.board[square] = Some(piece);
            if piece.kind == PieceKind::King {
                position.king_squares[piece.color.index()] = square as Square;
            }
            file += 1;
        }

        if file != 8 {
            return Err(FenParseError::RankWidth((*rank_str).to_owned()));
        }
    }

    Ok(())
}

fn parse_side_to_move(field: &str) -> Result<Color, FenParseError> {
    match field {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(FenParseError::InvalidSideToMove(field.to_owned())),
    }
}

fn parse_castling_rights(field: &str) -> Result<CastlingRights, FenParseError> {
    if field == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;
    for ch in field.chars() {
        match ch {
            'K' => rights |= CASTLE_WHITE_KINGSIDE,
            'Q' => rights |= CASTLE_WHITE_QUEENSIDE,
            'k' => rights |= CASTLE_BLACK_KINGSIDE,
            'q' => rights |= CASTLE_BLACK_QUEENSIDE,
            _ => return Err(FenParseError::InvalidCastlingField(field.to_owned())),
        }
    }

    Ok(rights)
}

fn parse_en_passant_square(field: &str) -> Result<Option<Square>, FenParseError> {
    if field == "-" {
        return Ok(None);
    }

    algebraic_to_square(field)
        .map(Some)
        .map_err(|_| FenParseError::InvalidEnPassantSquare(field.to_owned()))
}

fn parse_clock(field: &str) -> Result<u32, FenParseError> {
    field
        .parse::<u32>()
        .map_err(|_| FenParseError::InvalidClock(field.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::chess_rules::STARTING_POSITION_FEN;
    use crate::utils::render_position::render_position;

    #[test]
    fn parse_starting_fen_and_render_board() {
        let position = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        println!("\n{}", render_position(&position));

        assert_eq!(position.side_to_move, Color::White);
        assert_eq!(position.fullmove_number, 1);
        assert_eq!(position.halfmove_clock, 0);
        assert_eq!(position.castling_rights, 0b1111);
        assert_eq!(position.en_passant_square, None);
        assert_eq!(position.king_squares, [60, 4]);
    }

    #[test]
    fn parses_partial_rights_and_en_passant_target() {
        let position = parse_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b Kq e3 12 34")
            .expect("FEN should parse");

        assert_eq!(position.side_to_move, Color::Black);
        assert_eq!(
            position.castling_rights,
            CASTLE_WHITE_KINGSIDE | CASTLE_BLACK_QUEENSIDE
        );
        assert_eq!(position.en_passant_square, Some(44)); // e3
        assert_eq!(position.halfmove_clock, 12);
        assert_eq!(position.fullmove_number, 34);
    }

    #[test]
    fn rejects_wrong_field_count() {
        assert_eq!(
            parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -").unwrap_err(),
            FenParseError::FieldCount(5)
        );
        assert_eq!(
            parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1 extra")
                .unwrap_err(),
            FenParseError::FieldCount(7)
        );
        assert_eq!(parse_fen("").unwrap_err(), FenParseError::FieldCount(0));
    }

    #[test]
    fn rejects_malformed_board_layouts() {
        // 7 ranks.
        assert_eq!(
            parse_fen("rnbqkbnr/pppppppp/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap_err(),
            FenParseError::RankCount(7)
        );
        // Rank overflows 8 files.
        assert!(matches!(
            parse_fen("rnbqkbnrr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
            Err(FenParseError::RankWidth(_))
        ));
        // Rank underflows 8 files.
        assert!(matches!(
            parse_fen("rnbqkbn/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
            Err(FenParseError::RankWidth(_))
        ));
        // A zero-length empty run is not a thing.
        assert!(matches!(
            parse_fen("rnbqkbnr/pppppppp/80/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
            Err(FenParseError::RankWidth(_))
        ));
        // Unknown piece letter.
        assert_eq!(
            parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNX w KQkq - 0 1").unwrap_err(),
            FenParseError::InvalidPieceChar('X')
        );
    }

    #[test]
    fn rejects_bad_side_castling_en_passant_and_clocks() {
        assert_eq!(
            parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1").unwrap_err(),
            FenParseError::InvalidSideToMove("x".to_owned())
        );
        assert_eq!(
            parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KX - 0 1").unwrap_err(),
            FenParseError::InvalidCastlingField("KX".to_owned())
        );
        // `-` mixed with letters.
        assert_eq!(
            parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w K- - 0 1").unwrap_err(),
            FenParseError::InvalidCastlingField("K-".to_owned())
        );
        assert_eq!(
            parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e9 0 1").unwrap_err(),
            FenParseError::InvalidEnPassantSquare("e9".to_owned())
        );
        assert_eq!(
            parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - x 1").unwrap_err(),
            FenParseError::InvalidClock("x".to_owned())
        );
        assert_eq!(
            parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 -1").unwrap_err(),
            FenParseError::InvalidClock("-1".to_owned())
        );
    }
}
