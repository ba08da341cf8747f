//! Rule enforcement tests.
//!
//! These tests drive the engine only through its public API:
//! - Opening moves for every start piece
//! - The corner-connection rule
//! - Elimination, scoring and termination

use blokus_rules::core::{Color, Coordinates, FirstMoveScope, Move, RulesError, Violation};
use blokus_rules::games::blokus::GameBuilder;
use blokus_rules::pieces::{Orientation, Piece, PieceShape, Rotation};
use blokus_rules::rules::RulesEngine;

fn set(color: Color, shape: PieceShape, orientation: Orientation, x: i32, y: i32) -> Move {
    Move::Set(Piece::new(color, shape, orientation, Coordinates::new(x, y)))
}

/// Every allowed start piece can open in all four corners.
#[test]
fn test_opening_moves_for_every_start_piece() {
    for shape in PieceShape::PENTOMINOES_FOR_START {
        let (game, state) = GameBuilder::new().start_piece(shape).build();
        let moves = game.legal_moves(&state);

        assert!(!moves.is_empty(), "{shape} has no opening move");
        assert!(!moves.contains(&Move::Skip));

        for mv in &moves {
            let piece = mv.piece().expect("opening moves place a piece");
            assert_eq!(piece.shape(), shape);
            assert_eq!(piece.color(), Color::Blue);
            assert!(piece.cells().iter().any(|&c| state.board.is_corner(c)));
        }

        for corner in state.board.corners() {
            assert!(
                moves.iter().any(|m| m.piece().is_some_and(|p| p.cells().contains(&corner))),
                "{shape} cannot open on {corner}"
            );
        }
    }
}

/// The opening rule applies to the first move of the game only.
#[test]
fn test_second_color_is_not_bound_to_corners() {
    let (game, mut state) = GameBuilder::new().build();
    game.perform_move(&mut state, &set(Color::Blue, PieceShape::PentoL, Orientation::IDENTITY, 0, 0))
        .unwrap();

    // Yellow owns no cells, so it has no frontier and may only skip.
    assert_eq!(state.current_color(), Some(Color::Yellow));
    assert!(!state.is_first_move());
    assert_eq!(game.legal_moves(&state), vec![Move::Skip]);

    let corner_open = set(Color::Yellow, PieceShape::PentoL, Orientation::IDENTITY, 19, 16);
    assert_eq!(
        game.check_move(&state, &corner_open),
        Err(Violation::NotConnected)
    );
}

/// With per-color openings every color starts from its own corner.
#[test]
fn test_color_scope_opens_every_color() {
    let (game, mut state) = GameBuilder::new()
        .first_move_scope(FirstMoveScope::Color)
        .build();

    let openings = [
        set(Color::Blue, PieceShape::PentoL, Orientation::IDENTITY, 0, 0),
        set(Color::Yellow, PieceShape::PentoL, Orientation::IDENTITY, 18, 16),
        set(Color::Red, PieceShape::PentoL, Orientation::new(Rotation::Right, false), 16, 0),
        set(Color::Green, PieceShape::PentoL, Orientation::new(Rotation::Left, false), 0, 18),
    ];

    for mv in &openings {
        assert!(state.is_first_move());
        assert!(!game.legal_moves(&state).contains(&Move::Skip));
        game.perform_move(&mut state, mv).unwrap();
    }

    assert!(!state.is_first_move());
    for color in Color::ALL {
        assert_eq!(state.board.fields_of_color(color).count(), 5);
        assert_eq!(state.points_for(color), 5);
    }
}

/// Pieces connect to their own color at corners only.
#[test]
fn test_corner_connection() {
    let (game, mut state) = GameBuilder::new().colors([Color::Blue]).build();
    game.perform_move(&mut state, &set(Color::Blue, PieceShape::PentoL, Orientation::IDENTITY, 0, 0))
        .unwrap();

    let diagonal = set(Color::Blue, PieceShape::TetroO, Orientation::IDENTITY, 2, 4);
    let edge = set(Color::Blue, PieceShape::TetroO, Orientation::IDENTITY, 1, 4);
    let detached = set(Color::Blue, PieceShape::TetroO, Orientation::IDENTITY, 8, 8);

    assert!(game.is_valid_move(&state, &diagonal));
    assert_eq!(
        game.check_move(&state, &edge),
        Err(Violation::BordersOwnColor {
            at: Coordinates::new(1, 4)
        })
    );
    assert_eq!(game.check_move(&state, &detached), Err(Violation::NotConnected));

    let legal = game.legal_moves(&state);
    assert!(legal.contains(&diagonal));
    assert!(!legal.contains(&edge));
    assert!(!legal.contains(&detached));
}

/// A rejected move reports the rule and leaves the state unchanged.
#[test]
fn test_rejected_move_error() {
    let (game, mut state) = GameBuilder::new().build();
    let before = state.clone();
    let wrong_color = set(Color::Red, PieceShape::PentoL, Orientation::IDENTITY, 0, 0);

    let err = game.perform_move(&mut state, &wrong_color).unwrap_err();

    assert_eq!(
        err.to_string(),
        "invalid move SetMove(RED PENTO_L at (0, 0) rotation None): it is BLUE's turn, not RED's"
    );
    assert!(matches!(
        err,
        RulesError::InvalidMove {
            violation: Violation::WrongColor { .. },
            ..
        }
    ));
    assert_eq!(state, before);
}

/// Symmetric orientations collapse into one move per placement.
#[test]
fn test_opening_move_counts() {
    let (game, state) = GameBuilder::new().start_piece(PieceShape::PentoX).build();
    let moves = game.legal_moves(&state);

    // PENTO_X has one orientation; it cannot cover a corner cell.
    assert!(moves.is_empty());

    let (game, state) = GameBuilder::new().start_piece(PieceShape::PentoI).build();
    let moves = game.legal_moves(&state);

    // Vertical and horizontal in each corner.
    assert_eq!(moves.len(), 8);
}

/// Placing every shape ends a color's turns and earns the bonus.
#[test]
fn test_exhaustion_and_bonus() {
    let (game, mut state) = GameBuilder::new()
        .colors([Color::Blue, Color::Red])
        .catalog([PieceShape::Domino, PieceShape::Mono])
        .start_piece(PieceShape::Domino)
        .build();

    let steps = [
        set(Color::Blue, PieceShape::Domino, Orientation::IDENTITY, 0, 0),
        Move::Skip,
        set(Color::Blue, PieceShape::Mono, Orientation::IDENTITY, 2, 1),
    ];
    for mv in &steps {
        game.perform_move(&mut state, mv).unwrap();
    }

    assert!(!state.is_active(Color::Blue));
    assert_eq!(state.active_colors().collect::<Vec<_>>(), vec![Color::Red]);
    assert_eq!(state.points_for(Color::Blue), 3 + 15 + 5);
    assert_eq!(state.points_for(Color::Red), 0);
    assert_eq!(state.board.fields_of_color(Color::Blue).count(), 3);

    // Red keeps playing alone until it is blocked or done.
    assert_eq!(state.current_color(), Some(Color::Red));
    assert_eq!(game.winning_condition(&state), None);
    assert_eq!(game.legal_moves(&state), vec![Move::Skip]);
}

/// The mono bonus is lost when another shape is placed after it.
#[test]
fn test_mono_placed_early_earns_no_extra_bonus() {
    let (game, mut state) = GameBuilder::new()
        .colors([Color::Blue])
        .catalog([PieceShape::Domino, PieceShape::Mono, PieceShape::TrioI])
        .start_piece(PieceShape::Domino)
        .build();

    let steps = [
        set(Color::Blue, PieceShape::Domino, Orientation::IDENTITY, 0, 0),
        set(Color::Blue, PieceShape::Mono, Orientation::IDENTITY, 2, 1),
    ];
    for mv in &steps {
        game.perform_move(&mut state, mv).unwrap();
    }
    assert!(state.mono_last(Color::Blue));
    assert_eq!(state.points_for(Color::Blue), 3);

    game.perform_move(
        &mut state,
        &set(Color::Blue, PieceShape::TrioI, Orientation::IDENTITY, 3, 2),
    )
    .unwrap();

    assert!(!state.is_active(Color::Blue));
    assert!(!state.mono_last(Color::Blue));
    assert_eq!(state.points_for(Color::Blue), 6 + 15);
}

/// The game ends once no color is left.
#[test]
fn test_game_over_when_all_colors_done() {
    let (game, mut state) = GameBuilder::new()
        .colors([Color::Green])
        .catalog([PieceShape::Mono])
        .start_piece(PieceShape::Mono)
        .build();

    game.perform_move(&mut state, &set(Color::Green, PieceShape::Mono, Orientation::IDENTITY, 19, 0))
        .unwrap();

    let result = game.winning_condition(&state).expect("game should be over");
    assert_eq!(result.winners(), vec![Color::Green]);
    assert_eq!(result.score(Color::Green), Some(21));
    assert!(game.legal_moves(&state).is_empty());
    assert!(!game.is_valid_move(&state, &Move::Skip));
}

/// Equal scores share first place.
#[test]
fn test_tie_reports_every_winner() {
    let (game, mut state) = GameBuilder::new()
        .first_move_scope(FirstMoveScope::Color)
        .round_limit(4)
        .build();

    let openings = [
        set(Color::Blue, PieceShape::PentoL, Orientation::IDENTITY, 0, 0),
        set(Color::Yellow, PieceShape::PentoL, Orientation::IDENTITY, 18, 16),
        set(Color::Red, PieceShape::PentoL, Orientation::new(Rotation::Right, false), 16, 0),
        set(Color::Green, PieceShape::PentoL, Orientation::new(Rotation::Left, false), 0, 18),
    ];
    for mv in &openings {
        assert_eq!(game.winning_condition(&state), None);
        game.perform_move(&mut state, mv).unwrap();
    }

    let result = game.winning_condition(&state).expect("round limit reached");
    assert!(result.is_tie());
    assert_eq!(result.winners(), Color::ALL.to_vec());
    assert!(result.standings().iter().all(|s| s.rank == 1 && s.score == 5));
}

/// Cloned boards never share cells.
#[test]
fn test_board_clone_is_independent() {
    let (game, mut state) = GameBuilder::new().build();
    let board = state.board.clone();

    game.perform_move(&mut state, &set(Color::Blue, PieceShape::PentoL, Orientation::IDENTITY, 0, 0))
        .unwrap();

    assert_eq!(board.fields_of_color(Color::Blue).count(), 0);
    assert_ne!(board, state.board);
}
