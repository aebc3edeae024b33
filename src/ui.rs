//! Text rendering of board state for terminal output. The engine itself
//! exposes only read accessors; this module is one possible view over them.

use crate::board::Board;

/// Render a board with lettered columns and numbered rows, the way the
/// browser original lays out its table. Ships are only drawn when
/// `show_ships` is set (the owner's view); hits and misses always show.
pub fn format_board(board: &Board, show_ships: bool) -> String {
    let mut out = String::new();
    out.push_str("   ");
    for col in 0..board.cols() {
        let letter = (b'A' + (col % 26) as u8) as char;
        out.push(' ');
        out.push(letter);
    }
    out.push('\n');
    for row in 0..board.rows() {
        out.push_str(&format!("{:2} ", row + 1));
        for col in 0..board.cols() {
            let mark = match board.space(row, col) {
                Some(space) => match (space.has_ship(), space.is_hit()) {
                    (true, true) => 'x',
                    (false, true) => 'o',
                    (true, false) if show_ships => '#',
                    _ => '.',
                },
                None => ' ',
            };
            out.push(' ');
            out.push(mark);
        }
        out.push('\n');
    }
    out
}
