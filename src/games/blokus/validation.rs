//! Move validation.
//!
//! Rules are checked in a fixed order and the first broken one is
//! reported:
//!
//! 1. a color is left to move and the piece belongs to it
//! 2. opening move: the piece is the start piece and covers a board corner
//! 3. later moves: the shape is undeployed and touches its own color
//!    diagonally
//! 4. each cell is on the board, empty, and does not share an edge with
//!    its own color

use crate::core::{GameState, Move, Violation};
use crate::pieces::Piece;

/// Check `mv` against `state`, naming the first rule it breaks.
pub fn check_move(state: &GameState, mv: &Move) -> Result<(), Violation> {
    match mv {
        Move::Set(piece) => check_set_move(state, piece),
        Move::Skip => {
            if state.current_color().is_none() {
                Err(Violation::NoActiveColor)
            } else if state.is_first_move() {
                Err(Violation::SkipOnFirstMove)
            } else {
                Ok(())
            }
        }
    }
}

/// Check a placement against `state`.
pub fn check_set_move(state: &GameState, piece: &Piece) -> Result<(), Violation> {
    let expected = state.current_color().ok_or(Violation::NoActiveColor)?;
    let color = piece.color();
    if color != expected {
        return Err(Violation::WrongColor {
            expected,
            actual: color,
        });
    }

    let board = &state.board;
    if state.is_first_move() {
        if piece.shape() != state.start_piece() {
            return Err(Violation::NotStartPiece {
                expected: state.start_piece(),
                actual: piece.shape(),
            });
        }
        if !piece.cells().iter().any(|&c| board.is_corner(c)) {
            return Err(Violation::NotOnCorner);
        }
    } else {
        if !state.is_undeployed(color, piece.shape()) {
            return Err(Violation::AlreadyDeployed { shape: piece.shape() });
        }
        if !piece.cells().iter().any(|&c| board.corners_on_color(c, color)) {
            return Err(Violation::NotConnected);
        }
    }

    for &at in piece.cells() {
        if !board.in_bounds(at) {
            return Err(Violation::OutOfBounds { at });
        }
        if board.is_obstructed(at) {
            return Err(Violation::Obstructed { at });
        }
        if board.borders_on_color(at, color) {
            return Err(Violation::BordersOwnColor { at });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color, Coordinates, GameConfig};
    use crate::pieces::{Orientation, PieceShape};

    fn piece(color: Color, shape: PieceShape, x: i32, y: i32) -> Piece {
        Piece::new(color, shape, Orientation::IDENTITY, Coordinates::new(x, y))
    }

    /// Standard state after Blue opened with PENTO_L in the top-left corner.
    fn after_opening() -> GameState {
        let mut state = GameState::new(&GameConfig::default());
        let opening = piece(Color::Blue, PieceShape::PentoL, 0, 0);
        state.place_piece(&opening);
        state.finish_move(Move::Set(opening));
        state
    }

    #[test]
    fn test_skip_on_first_move() {
        let state = GameState::new(&GameConfig::default());
        assert_eq!(check_move(&state, &Move::Skip), Err(Violation::SkipOnFirstMove));
        assert_eq!(check_move(&after_opening(), &Move::Skip), Ok(()));
    }

    #[test]
    fn test_opening_rules() {
        let state = GameState::new(&GameConfig::default());

        assert_eq!(check_set_move(&state, &piece(Color::Blue, PieceShape::PentoL, 0, 0)), Ok(()));
        assert_eq!(
            check_set_move(&state, &piece(Color::Yellow, PieceShape::PentoL, 0, 0)),
            Err(Violation::WrongColor {
                expected: Color::Blue,
                actual: Color::Yellow
            })
        );
        assert_eq!(
            check_set_move(&state, &piece(Color::Blue, PieceShape::Mono, 0, 0)),
            Err(Violation::NotStartPiece {
                expected: PieceShape::PentoL,
                actual: PieceShape::Mono
            })
        );
        assert_eq!(
            check_set_move(&state, &piece(Color::Blue, PieceShape::PentoL, 5, 5)),
            Err(Violation::NotOnCorner)
        );
        // Bottom-right corner: the foot of the L sits on (19, 19).
        assert_eq!(check_set_move(&state, &piece(Color::Blue, PieceShape::PentoL, 18, 16)), Ok(()));
    }

    #[test]
    fn test_opening_out_of_bounds() {
        let state = GameState::new(&GameConfig::default());
        // Covers (19, 19) but the foot sticks out past the right edge.
        let mv = piece(Color::Blue, PieceShape::PentoL, 19, 16);
        assert_eq!(
            check_set_move(&state, &mv),
            Err(Violation::OutOfBounds {
                at: Coordinates::new(20, 19)
            })
        );
    }

    #[test]
    fn test_corner_connection() {
        let mut state = after_opening();
        // Pretend Yellow, Red and Green passed so Blue moves again.
        for _ in 0..3 {
            state.finish_move(Move::Skip);
        }
        assert_eq!(state.current_color(), Some(Color::Blue));

        // The L covers (0,0)..(0,3) and (1,3); (2,4) touches (1,3) at a corner.
        assert_eq!(check_set_move(&state, &piece(Color::Blue, PieceShape::Mono, 2, 4)), Ok(()));
        assert_eq!(
            check_set_move(&state, &piece(Color::Blue, PieceShape::Mono, 10, 10)),
            Err(Violation::NotConnected)
        );
        assert_eq!(
            check_set_move(&state, &piece(Color::Blue, PieceShape::Domino, 1, 4)),
            Err(Violation::BordersOwnColor {
                at: Coordinates::new(1, 4)
            })
        );
        assert_eq!(
            check_set_move(&state, &piece(Color::Blue, PieceShape::PentoL, 2, 4)),
            Err(Violation::AlreadyDeployed {
                shape: PieceShape::PentoL
            })
        );
    }

    #[test]
    fn test_obstructed_cell() {
        let mut state = after_opening();
        state.board.set_color(Coordinates::new(2, 4), Color::Yellow);
        for _ in 0..3 {
            state.finish_move(Move::Skip);
        }

        // The domino touches Blue at (1,3) via (2,4), which Yellow holds.
        assert_eq!(
            check_set_move(&state, &piece(Color::Blue, PieceShape::Domino, 2, 4)),
            Err(Violation::Obstructed {
                at: Coordinates::new(2, 4)
            })
        );
    }

    #[test]
    fn test_no_active_color() {
        let mut state = after_opening();
        while state.remove_current_color().is_some() {}

        assert_eq!(check_move(&state, &Move::Skip), Err(Violation::NoActiveColor));
        assert_eq!(
            check_set_move(&state, &piece(Color::Blue, PieceShape::Mono, 2, 4)),
            Err(Violation::NoActiveColor)
        );
    }
}
