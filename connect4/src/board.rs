use crate::{Cell, Color, IllegalPlacement, InvalidColumnReason};

pub const COLUMNS: usize = 7;
pub const ROWS: usize = 6;
/// How many discs in a line win the game.
pub const CONNECT: usize = 4;

/// One of the four lines that pass through a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Axis {
    Vertical,
    Horizontal,
    /// Bottom left to top right.
    RisingDiagonal,
    /// Top left to bottom right.
    FallingDiagonal,
}

pub const AXES: [Axis; 4] = [
    Axis::Vertical,
    Axis::Horizontal,
    Axis::RisingDiagonal,
    Axis::FallingDiagonal,
];

impl Axis {
    /// The (column, row) step along this axis. The opposite step walks the other half of the line.
    pub fn step(self) -> (isize, isize) {
        match self {
            Axis::Vertical => (0, 1),
            Axis::Horizontal => (1, 0),
            Axis::RisingDiagonal => (1, 1),
            Axis::FallingDiagonal => (1, -1),
        }
    }
}

/// A 7x6 Connect-Four grid.
///
/// Columns are numbered 0 to 6 from the left, rows 0 to 5 from the bottom.
/// Discs can only be added through [`Board::drop_disc()`], so every column is
/// filled bottom-up without gaps.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    /// Indexed by column first, then row.
    cells: [[Cell; ROWS]; COLUMNS],
    /// Number of discs in each column, derived from `cells`.
    heights: [u8; COLUMNS],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates a column number coming from a caller.
    pub fn column_index(&self, column: i32) -> Result<usize, IllegalPlacement> {
        let idx = usize::try_from(column)
            .ok()
            .filter(|&idx| idx < COLUMNS)
            .ok_or(IllegalPlacement::InvalidColumn {
                column,
                reason: InvalidColumnReason::OutOfRange,
            })?;
        if usize::from(self.heights[idx]) == ROWS {
            return Err(IllegalPlacement::InvalidColumn {
                column,
                reason: InvalidColumnReason::Full,
            });
        }
        Ok(idx)
    }

    /// Drops a disc into `column` and returns the row it landed in.
    ///
    /// The board is left untouched if the column does not exist or is full.
    pub fn drop_disc(&mut self, column: i32, color: Color) -> Result<usize, IllegalPlacement> {
        let idx = self.column_index(column)?;
        let row = usize::from(self.heights[idx]);
        self.cells[idx][row] = Cell::Disc(color);
        self.heights[idx] += 1;
        Ok(row)
    }

    /// Returns the cell at the given coordinates, or `None` if they are off the board.
    pub fn cell(&self, column: usize, row: usize) -> Option<Cell> {
        self.cells.get(column)?.get(row).copied()
    }

    /// Number of discs stacked in `column`.
    ///
    /// Panics if the column does not exist.
    pub fn height(&self, column: usize) -> usize {
        usize::from(self.heights[column])
    }

    pub fn num_discs(&self) -> usize {
        self.heights.iter().map(|&h| usize::from(h)).sum()
    }

    pub fn is_full(&self) -> bool {
        self.heights.iter().all(|&h| usize::from(h) == ROWS)
    }

    /// The rows in the order they are displayed, i.e. the top row first.
    pub fn rows_top_down(&self) -> impl Iterator<Item = [Cell; COLUMNS]> + '_ {
        (0..ROWS)
            .rev()
            .map(move |row| std::array::from_fn(|column| self.cells[column][row]))
    }

    /// Length of the same-colored lines through a cell, one entry per axis in [`AXES`] order.
    ///
    /// Each length includes the cell itself. An empty or off-board cell has no lines.
    pub fn lines_through(&self, column: usize, row: usize) -> [usize; 4] {
        let Some(Cell::Disc(color)) = self.cell(column, row) else {
            return [0; 4];
        };
        AXES.map(|axis| {
            let (d_column, d_row) = axis.step();
            1 + self.run_length(column, row, d_column, d_row, color)
                + self.run_length(column, row, -d_column, -d_row, color)
        })
    }

    /// Counts the discs of `color` that follow the starting cell in one direction.
    fn run_length(
        &self,
        column: usize,
        row: usize,
        d_column: isize,
        d_row: isize,
        color: Color,
    ) -> usize {
        let mut count = 0;
        let (mut c, mut r) = (column, row);
        loop {
            let (Some(next_c), Some(next_r)) =
                (c.checked_add_signed(d_column), r.checked_add_signed(d_row))
            else {
                break count;
            };
            if self.cell(next_c, next_r) != Some(Cell::Disc(color)) {
                break count;
            }
            count += 1;
            (c, r) = (next_c, next_r);
        }
    }
}
