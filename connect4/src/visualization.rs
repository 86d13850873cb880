use crate::{Board, Color};

/// Renders the board top row first, one line per row.
///
/// Neighbouring cells share the bar between them, so an empty row reads
/// `| | | | | | | |`.
pub fn render_board(board: &Board) -> String {
    let mut result = String::new();
    for row in board.rows_top_down() {
        result.push('|');
        for cell in row {
            result.push(cell.mark());
            result.push('|');
        }
        result.push('\n');
    }
    result
}

pub fn turn_notice(player: Color) -> String {
    format!("Player {} turn\n", player)
}
