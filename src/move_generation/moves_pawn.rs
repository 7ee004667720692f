//! Pawn destination generation: pushes, double pushes, diagonal captures,
//! and the en-passant target.

use crate::board::chess_types::Square;
use crate::board::position::Position;

/// How pawn destinations are generated.
///
/// `Standard` is ordinary move generation. `AttacksOnly` emits the two
/// diagonals unconditionally and no pushes; a push can never capture, so it
/// is not an attack. Attack probing uses the latter so a pawn's diagonal
/// counts even onto an empty square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PawnMoveMode {
    Standard,
    AttacksOnly,
}

pub fn pawn_destinations(
    position: &Position,
    square: Square,
    mode: PawnMoveMode,
    out: &mut Vec<Square>,
) {
    let Some(pawn) = position.board[square as usize] else {
        return;
    };

    let sq = square as i16;
    let file = sq % 8;
    let forward = pawn.color.pawn_direction();

    if mode == PawnMoveMode::Standard {
        let one_step = sq + forward;
        if (0..64).contains(&one_step) && position.board[one_step as usize].is_none() {
            out.push(one_step as Square);

            if square / 8 == pawn.color.pawn_start_rank() {
                let two_step = one_step + forward;
                if position.board[two_step as usize].is_none() {
                    out.push(two_step as Square);
                }
            }
        }
    }

    for file_delta in [-1i16, 1] {
        // Edge guard: a pawn on file a/h must not wrap to the other side.
        if !(0..8).contains(&(file + file_delta)) {
            continue;
        }
        let target = sq + forward + file_delta;
        if !(0..64).contains(&target) {
            continue;
        }

        match mode {
            PawnMoveMode::AttacksOnly => out.push(target as Square),
            PawnMoveMode::Standard => {
                let target_square = target as Square;
                let holds_enemy = position.board[target as usize]
                    .is_some_and(|other| other.is_enemy_of(pawn));
                if holds_enemy || position.en_passant_square == Some(target_square) {
                    out.push(target_square);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn destinations(fen: &str, square: Square, mode: PawnMoveMode) -> Vec<Square> {
        let position = Position::from_fen(fen).expect("test FEN should parse");
        let mut out = Vec::new();
        pawn_destinations(&position, square, mode, &mut out);
        out.sort_unstable();
        out
    }

    #[test]
    fn start_rank_pawn_has_single_and_double_push() {
        let moves = destinations(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            52, // e2
            PawnMoveMode::Standard,
        );
        assert_eq!(moves, vec![36, 44]); // e4, e3
    }

    #[test]
    fn blocked_pawn_has_no_push() {
        // White pawn e4 blocked by black pawn e5, nothing to capture.
        let moves = destinations("4k3/8/8/4p3/4P3/8/8/4K3 w - - 0 1", 36, PawnMoveMode::Standard);
        assert!(moves.is_empty());
    }

    #[test]
    fn blocked_double_push_is_suppressed() {
        // Piece on e3 blocks both pushes from e2.
        let moves = destinations("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1", 52, PawnMoveMode::Standard);
        assert!(moves.is_empty());

        // Piece on e4 blocks only the double push.
        let moves = destinations("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1", 52, PawnMoveMode::Standard);
        assert_eq!(moves, vec![44]); // e3
    }

    #[test]
    fn edge_file_pawn_never_wraps() {
        // White pawn a2: its only diagonal is b3; h1-side wraparound would
        // show up as an extra capture square.
        let moves = destinations("4k3/8/8/8/8/1p5p/P7/4K3 w - - 0 1", 48, PawnMoveMode::Standard);
        assert_eq!(moves, vec![40, 41]); // a3, b3xp
    }

    #[test]
    fn attacks_only_mode_emits_diagonals_onto_empty_squares() {
        let moves = destinations(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            52, // e2
            PawnMoveMode::AttacksOnly,
        );
        assert_eq!(moves, vec![43, 45]); // d3, f3 despite being empty
    }

    #[test]
    fn en_passant_target_is_a_capture_square() {
        // Black just played d7d5; White pawn e5 may capture on d6.
        let moves = destinations(
            "rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3",
            28, // e5
            PawnMoveMode::Standard,
        );
        assert_eq!(moves, vec![19, 20]); // d6 (en passant), e6
    }
}
