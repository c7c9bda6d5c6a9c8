//! Price movement between two consecutive boards.

use std::collections::HashMap;
use std::fmt;

use super::pricing::PriceBoard;

/// Direction of a price since the previous board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeDirection {
    Up,
    Down,
    /// Equal price, or no previous price to compare against.
    Unchanged,
}

impl ChangeDirection {
    #[must_use]
    pub fn between(previous: i64, current: i64) -> Self {
        match current.cmp(&previous) {
            std::cmp::Ordering::Greater => Self::Up,
            std::cmp::Ordering::Less => Self::Down,
            std::cmp::Ordering::Equal => Self::Unchanged,
        }
    }

    /// Arrow shown in front of a rendered line.
    #[must_use]
    pub const fn arrow(self) -> &'static str {
        match self {
            Self::Up => "↑",
            Self::Down => "↓",
            Self::Unchanged => "-",
        }
    }
}

impl fmt::Display for ChangeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "UP",
            Self::Down => "DOWN",
            Self::Unchanged => "UNCHANGED",
        };
        f.write_str(name)
    }
}

/// Alias to direction, keyed exactly by the current board's aliases.
pub type Changes = HashMap<String, ChangeDirection>;

/// Classify every entry of `current` against `previous`.
///
/// Aliases only present in `previous` are ignored.
#[must_use]
pub fn diff_boards(current: &PriceBoard, previous: &PriceBoard) -> Changes {
    current
        .iter()
        .map(|entry| {
            let direction = previous
                .get(&entry.alias)
                .map_or(ChangeDirection::Unchanged, |old| {
                    ChangeDirection::between(old, entry.price)
                });
            (entry.alias.clone(), direction)
        })
        .collect()
}
