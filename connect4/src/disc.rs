use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The color of a player and of the discs they drop.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Color {
    #[serde(rename = "R")]
    Red,
    #[serde(rename = "G")]
    Green,
}

/// A single position on the board.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Disc(Color),
}

impl Color {
    /// The color that moves after this one.
    pub fn opponent(self) -> Color {
        match self {
            Color::Red => Color::Green,
            Color::Green => Color::Red,
        }
    }

    /// The single-letter mark used in board snapshots and turn notices.
    pub fn mark(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Green => 'G',
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mark())
    }
}

/// The error type for the [`FromStr`] instance of [`Color`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorFromStrErr;

impl std::error::Error for ColorFromStrErr {}

impl std::fmt::Display for ColorFromStrErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Expected a color mark, either R or G")
    }
}

impl FromStr for Color {
    type Err = ColorFromStrErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "R" => Ok(Color::Red),
            "G" => Ok(Color::Green),
            _ => Err(ColorFromStrErr),
        }
    }
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Disc(color) => Some(color),
        }
    }

    /// Render this cell for a board snapshot, a blank for an empty cell.
    pub fn mark(self) -> char {
        self.color().map_or(' ', Color::mark)
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        Cell::Disc(color)
    }
}
