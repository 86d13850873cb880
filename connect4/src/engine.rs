use std::io::Write;

use tracing::{debug, info, warn};

use crate::{render_board, turn_notice, Board, Color, IllegalPlacement, CONNECT};

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Winner(Color),
    Draw,
}

impl Outcome {
    pub fn winner(self) -> Option<Color> {
        match self {
            Outcome::Winner(color) => Some(color),
            Outcome::Draw => None,
        }
    }
}

/// A game of Connect-Four between two players sharing one console.
///
/// Every successful move writes the board and the next turn notice to `output`.
/// Failing to write is logged and otherwise ignored, the game carries on.
pub struct Connect4<W> {
    board: Board,
    current_player: Color,
    outcome: Option<Outcome>,
    output: W,
}

impl<W: Write> Connect4<W> {
    pub fn new(output: W) -> Self {
        Self {
            board: Board::new(),
            current_player: Color::Red,
            outcome: None,
            output,
        }
    }

    /// Drops a disc of the current player into `column` and returns the row it landed in.
    ///
    /// On error nothing changes, in particular it is still the same player's turn.
    pub fn put_disc_in_column(&mut self, column: i32) -> Result<usize, IllegalPlacement> {
        if let Some(outcome) = self.outcome {
            return Err(IllegalPlacement::GameFinished {
                winner: outcome.winner(),
            });
        }
        let player = self.current_player;
        let row = self.board.drop_disc(column, player).inspect_err(|err| {
            debug!(%err, %player, "Rejected disc");
        })?;
        // drop_disc() only succeeds for columns in 0..COLUMNS
        let column_idx = column as usize;
        debug!(%player, column, row, "Disc placed");

        let connected = self.board.lines_through(column_idx, row);
        if connected.iter().any(|&len| len >= CONNECT) {
            info!(winner = %player, discs = self.num_discs(), "Four connected");
            self.outcome = Some(Outcome::Winner(player));
        } else if self.board.is_full() {
            info!("Board is full, the game is a draw");
            self.outcome = Some(Outcome::Draw);
        }
        self.current_player = player.opponent();

        self.emit(&render_board(&self.board));
        if self.outcome.is_none() {
            self.emit(&turn_notice(self.current_player));
        }
        Ok(row)
    }

    /// The player whose turn it is. Also announces the turn on the output.
    ///
    /// Use [`Self::to_move()`] to ask without writing anything.
    pub fn current_player(&mut self) -> Color {
        let player = self.current_player;
        self.emit(&turn_notice(player));
        player
    }
}

impl<W> Connect4<W> {
    pub fn to_move(&self) -> Color {
        self.current_player
    }

    pub fn num_discs(&self) -> usize {
        self.board.num_discs()
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    /// The player who connected four, if any.
    pub fn winner(&self) -> Option<Color> {
        self.outcome.and_then(Outcome::winner)
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<W: Write> Connect4<W> {
    fn emit(&mut self, text: &str) {
        let result = self
            .output
            .write_all(text.as_bytes())
            .and_then(|()| self.output.flush());
        if let Err(err) = result {
            warn!(%err, "Could not write to the game output");
        }
    }
}
