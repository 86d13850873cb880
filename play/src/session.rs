use std::io::{BufRead, Write};

use connect4::{Connect4, Outcome};
use tracing::{debug, info};

/// Plays Connect-Four with column numbers read line by line from `input`.
///
/// The engine prints the board and turns on its own output. Everything the
/// engine does not report itself (rejected input, the final result) goes to
/// `messages`. Returns `None` if the input ends before the game is decided.
pub fn play_session<R: BufRead, W: Write, M: Write>(
    input: R,
    game: &mut Connect4<W>,
    messages: &mut M,
) -> anyhow::Result<Option<Outcome>> {
    if let Some(outcome) = game.outcome() {
        return Ok(Some(outcome));
    }
    game.current_player();

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let column = match line.parse::<i32>() {
            Ok(column) => column,
            Err(err) => {
                debug!(%err, line, "Unreadable column");
                writeln!(messages, "Not a column number: {}", line)?;
                game.current_player();
                continue;
            }
        };
        if let Err(err) = game.put_disc_in_column(column) {
            writeln!(messages, "{}", err)?;
            game.current_player();
            continue;
        }
        if let Some(outcome) = game.outcome() {
            match outcome {
                Outcome::Winner(player) => writeln!(messages, "Player {} wins", player)?,
                Outcome::Draw => writeln!(messages, "Draw")?,
            }
            return Ok(Some(outcome));
        }
    }

    info!(discs = game.num_discs(), "Input ended before the game was decided");
    Ok(None)
}
