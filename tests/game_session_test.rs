//! Tests for the game session and the terminal play loop.

use std::io::Cursor;
use unbeatable_tictactoe::{
    Game, Mark, MoveError, PlayConfig, Position, Status, Verdict, terminal,
};

fn run_with(input: &str) -> (Game, String) {
    let mut output = Vec::new();
    let game = terminal::run(&PlayConfig::default(), Cursor::new(input), &mut output)
        .expect("in-memory io");
    (game, String::from_utf8(output).expect("utf-8 output"))
}

#[test]
fn test_engine_answers_center_with_corner() {
    let mut game = Game::new();
    game.place(Position::Center).unwrap();
    assert_eq!(game.play_engine(), Ok(Some(Position::TopLeft)));
    assert_eq!(game.to_move(), Mark::X);
    assert_eq!(game.status(), Status::NextPlayer(Mark::X));
}

#[test]
fn test_engine_survives_scripted_line() {
    let mut game = Game::new();
    game.place(Position::TopLeft).unwrap();
    game.play_engine().unwrap();
    for pos in [Position::BottomLeft, Position::BottomCenter, Position::BottomRight] {
        if game.is_over() {
            break;
        }
        if game.place(pos).is_ok() && !game.is_over() {
            game.play_engine().unwrap();
        }
    }
    assert_ne!(game.verdict(), Verdict::Win(Mark::X));
}

#[test]
fn test_terminal_rejects_occupied_square() {
    let (game, output) = run_with("5\n5\nq\n");
    assert!(output.contains("O takes square 1 (Top-left)"));
    assert!(output.contains("Square Center is already occupied"));
    assert_eq!(game.history().len(), 2);
}

#[test]
fn test_terminal_plays_to_the_end() {
    let (game, output) = run_with("1\n2\n3\n4\n5\n6\n7\n8\n9\nq\n");
    assert!(game.is_over());
    assert_ne!(game.verdict(), Verdict::Win(Mark::X));
    assert!(output.contains("r to play again"));
}

#[test]
fn test_terminal_reset_and_invalid_input() {
    let (game, output) = run_with("5\nr\nabc\n");
    assert!(output.contains("New game."));
    assert!(output.contains("Enter a square number 1-9, r or q."));
    assert_eq!(game, Game::new());
}

#[test]
fn test_terminal_stops_at_end_of_input() {
    let (game, output) = run_with("");
    assert_eq!(game, Game::new());
    assert!(output.contains("Next player: X"));
}

#[test]
fn test_game_over_errors() {
    let (mut game, _) = run_with("1\n2\n3\n4\n5\n6\n7\n8\n9\n");
    assert_eq!(game.place(Position::Center), Err(MoveError::GameOver));
}
