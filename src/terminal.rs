//! Line-oriented play loop: the human types square numbers, the engine
//! answers on its turn.

use crate::config::PlayConfig;
use crate::games::tictactoe::{Game, Position, search::ENGINE};
use std::io::{self, BufRead, Write};
use tracing::{debug, info, instrument};

/// A line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    Square(Position),
    Reset,
    Quit,
    Invalid,
}

impl Input {
    fn parse(line: &str) -> Self {
        match line.trim().to_ascii_lowercase().as_str() {
            "q" | "quit" | "exit" => Input::Quit,
            "r" | "reset" => Input::Reset,
            other => Position::from_square_number(other)
                .map(Input::Square)
                .unwrap_or(Input::Invalid),
        }
    }
}

/// Runs games until the player quits or input ends.
///
/// Returns the game as it stood when the loop stopped.
#[instrument(skip_all)]
pub fn run<R: BufRead, W: Write>(
    config: &PlayConfig,
    mut input: R,
    mut output: W,
) -> io::Result<Game> {
    let mut game = Game::new();
    info!(human = %config.human_name(), "Starting game");

    writeln!(
        output,
        "{} play X. Enter a square number (1-9), r to reset, q to quit.",
        config.human_name()
    )?;

    loop {
        writeln!(output, "\n{}\n", game.board().display(*config.show_hints()))?;
        writeln!(output, "{}", game.status())?;

        if !game.is_over() && game.to_move() == ENGINE {
            match game.play_engine() {
                Ok(Some(pos)) => {
                    writeln!(output, "O takes square {} ({})", pos.to_index() + 1, pos)?;
                    continue;
                }
                Ok(None) => return Ok(game),
                Err(e) => return Err(io::Error::other(e)),
            }
        }

        if game.is_over() {
            write!(output, "r to play again, q to quit: ")?;
        } else {
            write!(output, "{}, choose a square: ", config.human_name())?;
        }
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            debug!("Input closed");
            return Ok(game);
        }

        match Input::parse(&line) {
            Input::Quit => return Ok(game),
            Input::Reset => {
                game.reset();
                writeln!(output, "New game.")?;
            }
            Input::Square(pos) => {
                if let Err(e) = game.place(pos) {
                    writeln!(output, "{}", e)?;
                }
            }
            Input::Invalid => {
                writeln!(output, "Enter a square number 1-9, r or q.")?;
            }
        }
    }
}
