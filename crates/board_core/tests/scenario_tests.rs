//! Click-level scenarios for the game controller
//!
//! Covers turn alternation, same-colour rejection, undo and reset.

use board_core::{Board, ClickOutcome, Color, GameController, Square};

fn sq(row: u8, col: u8) -> Square {
    Square::new(row, col).unwrap()
}

fn click_move(game: &mut GameController, from: Square, to: Square) -> ClickOutcome {
    assert_eq!(game.on_square_clicked(from), ClickOutcome::Selected);
    game.on_square_clicked(to)
}

// =============================================================================
// Reference scenarios
// =============================================================================

#[test]
fn test_pawn_advance_is_accepted() {
    let mut game = GameController::new();
    game.on_reset_requested();

    let outcome = click_move(&mut game, sq(6, 4), sq(4, 4));
    assert!(matches!(outcome, ClickOutcome::Moved(_)));
    assert_eq!(game.turn(), Color::Black);
    assert_eq!(game.board().piece_at(sq(4, 4)).map(|p| p.glyph()), Some('♙'));
    assert_eq!(game.board().piece_at(sq(6, 4)), None);
}

#[test]
fn test_move_onto_own_pawn_is_rejected() {
    let mut game = GameController::new();
    game.on_reset_requested();

    let outcome = click_move(&mut game, sq(6, 4), sq(6, 3));
    assert_eq!(outcome, ClickOutcome::Rejected);
    assert_eq!(game.turn(), Color::White);
    assert_eq!(game.board(), &Board::standard());
}

#[test]
fn test_undo_pawn_advance() {
    let mut game = GameController::new();
    click_move(&mut game, sq(6, 4), sq(4, 4));

    assert!(game.on_undo_requested().is_some());
    assert_eq!(game.board().piece_at(sq(6, 4)).map(|p| p.glyph()), Some('♙'));
    assert_eq!(game.board().piece_at(sq(4, 4)), None);
    assert_eq!(game.turn(), Color::White);
    assert!(game.history().is_empty());
    assert_eq!(game.status_text(), "Current Turn: White");
}

// =============================================================================
// Properties over many moves
// =============================================================================

/// Plays every own piece of the side to move onto every square, undoing each
/// accepted move, and checks that nothing leaks between attempts.
#[test]
fn test_every_attempt_from_start_is_reversible() {
    let mut game = GameController::new();
    let start = game.board().clone();

    for from in Square::all() {
        let Some(piece) = start.piece_at(from) else {
            continue;
        };
        if piece.color != Color::White {
            continue;
        }
        for to in Square::all() {
            let outcome = click_move(&mut game, from, to);
            let target = start.piece_at(to);
            match outcome {
                ClickOutcome::Moved(record) => {
                    assert!(target.is_none_or(|t| t.color != piece.color));
                    assert_eq!(record.captured, target);
                    assert_eq!(game.turn(), Color::Black);
                    let expected = if target.is_some() { 31 } else { 32 };
                    assert_eq!(game.board().piece_count(), expected);

                    assert_eq!(game.on_undo_requested(), Some(record));
                }
                ClickOutcome::Rejected => {
                    assert_eq!(target.map(|t| t.color), Some(piece.color));
                }
                other => panic!("unexpected outcome {other:?}"),
            }
            assert_eq!(game.board(), &start);
            assert_eq!(game.turn(), Color::White);
            assert!(game.history().is_empty());
        }
    }
}

#[test]
fn test_long_game_undoes_back_to_start() {
    let mut game = GameController::new();
    let script = [
        ((6, 4), (4, 4)),
        ((1, 3), (3, 3)),
        ((4, 4), (3, 3)), // capture
        ((0, 3), (3, 3)), // recapture
        ((7, 6), (5, 5)),
        ((3, 3), (7, 3)), // queen takes queen
        ((7, 4), (7, 3)), // king takes queen
    ];

    let mut turns = vec![game.turn()];
    let mut counts = vec![game.board().piece_count()];
    for &((fr, fc), (tr, tc)) in &script {
        let outcome = click_move(&mut game, sq(fr, fc), sq(tr, tc));
        assert!(matches!(outcome, ClickOutcome::Moved(_)), "{outcome:?}");
        turns.push(game.turn());
        counts.push(game.board().piece_count());
    }

    for pair in turns.windows(2) {
        assert_ne!(pair[0], pair[1], "turn must alternate");
    }
    for pair in counts.windows(2) {
        assert!(pair[1] <= pair[0], "piece count never grows on a move");
    }
    assert_eq!(game.board().piece_count(), 28);
    assert_eq!(game.history().len(), script.len());

    while game.can_undo() {
        let before = game.turn();
        game.on_undo_requested();
        assert_ne!(game.turn(), before);
    }
    assert_eq!(game.board(), &Board::standard());
    assert_eq!(game.turn(), Color::White);
    assert_eq!(game.on_undo_requested(), None);
}

#[test]
fn test_reset_mid_selection() {
    let mut game = GameController::new();
    click_move(&mut game, sq(6, 0), sq(2, 0));
    game.on_square_clicked(sq(1, 1));

    game.on_reset_requested();
    assert_eq!(game.board(), &Board::standard());
    assert_eq!(game.turn(), Color::White);
    assert_eq!(game.selected(), None);
    assert!(!game.can_undo());

    // A click on a black piece is ignored again now that white is to move
    assert_eq!(game.on_square_clicked(sq(1, 1)), ClickOutcome::Ignored);
}
