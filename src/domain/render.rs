//! Plain-text rendering of a price board.

use super::diff::{diff_boards, ChangeDirection, Changes};
use super::pricing::{price_board, PriceBoard};
use super::snapshot::StateSnapshot;

/// Full broadcast text for `current`, with arrows relative to `previous`.
#[must_use]
pub fn rates_message(current: &StateSnapshot, previous: Option<&StateSnapshot>) -> String {
    let board = price_board(current);
    let previous_board = previous.map(price_board).unwrap_or_default();
    let changes = diff_boards(&board, &previous_board);
    render_board(&board, &changes)
}

/// Render one line per entry: `<arrow> <alias>: <price>\n`.
///
/// Lines follow the board's order. Entries missing from `changes` render
/// as unchanged.
#[must_use]
pub fn render_board(board: &PriceBoard, changes: &Changes) -> String {
    let mut out = String::new();
    for entry in board.iter() {
        let direction = changes
            .get(&entry.alias)
            .copied()
            .unwrap_or(ChangeDirection::Unchanged);
        out.push_str(direction.arrow());
        out.push(' ');
        out.push_str(&entry.alias);
        out.push_str(": ");
        out.push_str(&group_thousands(entry.price));
        out.push('\n');
    }
    out
}

/// Format an integer with comma thousands separators.
#[must_use]
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
