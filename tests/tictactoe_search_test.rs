//! Tests for the minimax engine.

use std::collections::HashSet;
use unbeatable_tictactoe::search::{DRAW_SCORE, LOSS_SCORE, WIN_SCORE};
use unbeatable_tictactoe::{
    Board, Game, Mark, Position, Square, Verdict, analyze, choose_move, evaluate,
};

/// Boards with O to move that are still in progress, reached by play.
fn engine_turn_boards() -> Vec<Board> {
    fn walk(board: Board, to_move: Mark, seen: &mut HashSet<Board>, out: &mut Vec<Board>) {
        if !seen.insert(board) || evaluate(&board).is_terminal() {
            return;
        }
        if to_move == Mark::O {
            out.push(board);
        }
        for pos in Position::valid_moves(&board) {
            let mut next = board;
            next.set(pos, Square::Occupied(to_move));
            walk(next, to_move.opponent(), seen, out);
        }
    }

    let mut out = Vec::new();
    walk(Board::new(), Mark::X, &mut HashSet::new(), &mut out);
    out
}

#[test]
fn test_opening_move_is_top_left() {
    assert_eq!(choose_move(&Board::new()), Some(Position::TopLeft));
}

#[test]
fn test_prefers_first_winning_square() {
    // X threatens the top row, O threatens the middle row. Taking square 2
    // blocks X and forks O's middle row with the anti-diagonal, so it scores
    // the same as completing the row at 5 and wins the tie on index.
    let board: Board = "XX./OO./...".parse().unwrap();
    let report = analyze(&board);

    let score_of = |pos: Position| {
        report
            .candidates()
            .iter()
            .find(|c| c.position == pos)
            .map(|c| c.score)
    };
    assert_eq!(score_of(Position::TopRight), Some(WIN_SCORE));
    assert_eq!(score_of(Position::MiddleRight), Some(WIN_SCORE));
    assert_eq!(report.best_move(), Some(Position::TopRight));
    assert_eq!(choose_move(&board), Some(Position::TopRight));
}

#[test]
fn test_completes_middle_row() {
    // O wins at 5 and no earlier square is empty.
    let board: Board = "XXO/OO./X..".parse().unwrap();
    assert_eq!(choose_move(&board), Some(Position::MiddleRight));
}

#[test]
fn test_blocks_immediate_threat() {
    // X threatens the right column at 8; blocking draws, square 3 loses.
    let board: Board = "XOX/.OX/OX.".parse().unwrap();
    let report = analyze(&board);
    assert_eq!(report.candidates()[0].score, LOSS_SCORE);
    assert_eq!(report.best().map(|c| c.score), Some(DRAW_SCORE));
    assert_eq!(choose_move(&board), Some(Position::BottomRight));
}

#[test]
fn test_full_board_returns_none() {
    let board: Board = "XOXXOOOXX".parse().unwrap();
    assert_eq!(evaluate(&board), Verdict::Draw);
    assert_eq!(choose_move(&board), None);
}

#[test]
fn test_choose_move_does_not_mutate_board() {
    let board: Board = "X...O...X".parse().unwrap();
    let before = board;
    let _ = choose_move(&board);
    let _ = analyze(&board);
    assert_eq!(board, before);
}

#[test]
fn test_move_is_always_an_empty_square() {
    for board in engine_turn_boards() {
        let pos = choose_move(&board).expect("in-progress board has a move");
        assert!(board.is_empty(pos), "board {} chose {}", board, pos);
    }
}

#[test]
fn test_none_only_on_full_board() {
    for board in engine_turn_boards() {
        assert!(choose_move(&board).is_some(), "board {}", board);
    }
    // A won board with empty squares still yields a move.
    let won: Board = "XXX/OO./...".parse().unwrap();
    assert_eq!(choose_move(&won), Some(Position::MiddleRight));
}

#[test]
fn test_engine_reply_to_center_draws() {
    let board: Board = "....X....".parse().unwrap();
    let report = analyze(&board);
    assert_eq!(report.best().map(|c| c.score), Some(DRAW_SCORE));
}

/// Plays every possible X strategy against the engine and returns the
/// number of finished games. Panics if X ever wins.
fn play_out(game: &Game) -> usize {
    let mut finished = 0;
    for pos in Position::valid_moves(game.board()) {
        let mut next = game.clone();
        next.place(pos).expect("square was empty");
        if !next.is_over() {
            next.play_engine().expect("engine to move");
        }

        assert_ne!(
            next.verdict(),
            Verdict::Win(Mark::X),
            "engine lost: {:?}",
            next.history()
        );

        if next.is_over() {
            finished += 1;
        } else {
            finished += play_out(&next);
        }
    }
    finished
}

#[test]
fn test_engine_never_loses() {
    let games = play_out(&Game::new());
    assert!(games > 0);
}
