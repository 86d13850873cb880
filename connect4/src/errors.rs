use crate::{Color, COLUMNS};

/// Why a column cannot take another disc.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidColumnReason {
    OutOfRange,
    Full,
}

/// The error type for [`Connect4::put_disc_in_column()`](crate::Connect4::put_disc_in_column).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IllegalPlacement {
    InvalidColumn {
        column: i32,
        reason: InvalidColumnReason,
    },
    GameFinished { winner: Option<Color> },
}

impl IllegalPlacement {
    pub fn is_invalid_column(&self) -> bool {
        matches!(self, IllegalPlacement::InvalidColumn { .. })
    }
}

impl std::error::Error for IllegalPlacement {}

impl std::fmt::Display for IllegalPlacement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalPlacement::InvalidColumn {
                column,
                reason: InvalidColumnReason::OutOfRange,
            } => write!(
                f,
                "Invalid column {}: columns are numbered 0 to {}",
                column,
                COLUMNS - 1
            ),
            IllegalPlacement::InvalidColumn {
                column,
                reason: InvalidColumnReason::Full,
            } => write!(f, "Invalid column {}: there is no more room in it", column),
            IllegalPlacement::GameFinished {
                winner: Some(winner),
            } => write!(f, "The game is over, player {} has won", winner),
            IllegalPlacement::GameFinished { winner: None } => {
                write!(f, "The game is over, it ended in a draw")
            }
        }
    }
}
