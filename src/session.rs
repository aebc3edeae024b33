//! Session setup: collects configuration from the menu layer and
//! constructs a match.

use crate::config::{ConfigError, MatchConfig, OpponentMode, MAX_SHIPS, MIN_SHIPS};
use crate::game::Match;

/// Builder the setup screen feeds before a game starts: grid shape, the
/// ship-count selector, and the opponent toggle.
#[derive(Debug, Clone, Copy)]
pub struct Session {
    config: MatchConfig,
}

impl Session {
    pub fn new() -> Self {
        Session {
            config: MatchConfig::default(),
        }
    }

    /// Configuration collected so far.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Set the board dimensions.
    pub fn grid(&mut self, rows: usize, cols: usize) -> &mut Self {
        self.config.rows = rows;
        self.config.cols = cols;
        self
    }

    /// Set the ship count, clamped to the selector's range.
    pub fn num_ships(&mut self, num_ships: usize) -> &mut Self {
        self.config.num_ships = num_ships.clamp(MIN_SHIPS, MAX_SHIPS);
        self
    }

    /// Choose who controls player 1.
    pub fn opponent(&mut self, mode: OpponentMode) -> &mut Self {
        self.config.opponent = mode;
        self
    }

    /// Validate the collected configuration and start the match.
    pub fn start(&self) -> Result<Match, ConfigError> {
        Match::new(self.config)
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}
