//! Match configuration: grid size, ship count, and opponent mode.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Grid used by default.
pub const DEFAULT_ROWS: usize = 9;
pub const DEFAULT_COLS: usize = 9;

/// Bounds of the ship-count selector.
pub const MIN_SHIPS: usize = 1;
pub const MAX_SHIPS: usize = 9;

const DEFAULT_SHIPS: usize = 5;

/// Who controls player 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpponentMode {
    /// A second human supplies placement and attack requests.
    Human,
    /// Player 1's moves are produced by a strategy at the given difficulty
    /// tier.
    Automated { difficulty: u8 },
}

/// Everything a match needs at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    pub rows: usize,
    pub cols: usize,
    /// Ship count. Ships are placed with lengths counting down from this
    /// value to 1, so it is also the length of the longest ship.
    pub num_ships: usize,
    pub opponent: OpponentMode,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            num_ships: DEFAULT_SHIPS,
            opponent: OpponentMode::Human,
        }
    }
}

impl MatchConfig {
    /// Check that a grid of this shape can hold the requested fleet.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        if self.num_ships < MIN_SHIPS {
            return Err(ConfigError::NoShips);
        }
        // the longest ship must fit along some axis
        let max = MAX_SHIPS.min(self.rows.max(self.cols));
        if self.num_ships > max {
            return Err(ConfigError::TooManyShips {
                requested: self.num_ships,
                max,
            });
        }
        Ok(())
    }
}

/// Rejected match configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A grid dimension is zero.
    EmptyGrid,
    /// The fleet is empty.
    NoShips,
    /// The requested fleet exceeds the selector bound or the grid.
    TooManyShips { requested: usize, max: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyGrid => write!(f, "board dimensions must be nonzero"),
            ConfigError::NoShips => write!(f, "at least one ship is required"),
            ConfigError::TooManyShips { requested, max } => {
                write!(f, "ship count {} exceeds the supported maximum {}", requested, max)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
