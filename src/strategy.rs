//! Automated-opponent strategies: how one side picks placements and attack
//! targets. Rule enforcement stays in `Board` and `Match`; a strategy only
//! chooses.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::board::Board;
use crate::ship::Orientation;

/// What an attacker can see of the defending board: dimensions and the
/// outcomes of previous shots, never unhit ship positions.
pub struct TargetView<'a> {
    board: &'a Board,
}

impl<'a> TargetView<'a> {
    pub fn new(board: &'a Board) -> Self {
        TargetView { board }
    }

    /// Number of rows on the defending board.
    pub fn rows(&self) -> usize {
        self.board.rows()
    }

    /// Number of columns on the defending board.
    pub fn cols(&self) -> usize {
        self.board.cols()
    }

    /// Whether (`row`, `col`) has been shot at.
    pub fn is_attacked(&self, row: usize, col: usize) -> bool {
        self.board
            .space(row, col)
            .is_some_and(|space| space.is_hit())
    }

    /// Whether a previous shot at (`row`, `col`) struck a ship.
    pub fn was_hit(&self, row: usize, col: usize) -> bool {
        self.board
            .space(row, col)
            .is_some_and(|space| space.is_hit() && space.has_ship())
    }
}

/// Decision interface for an automated player. Difficulty tiers are
/// separate implementations behind this trait.
pub trait Strategy: Send {
    /// Pick a placement for a ship of `length` on the player's own board.
    fn choose_placement(
        &mut self,
        rng: &mut SmallRng,
        board: &Board,
        length: usize,
    ) -> Option<(usize, usize, Orientation)>;

    /// Pick the next attack target on the opposing board.
    fn choose_attack_target(
        &mut self,
        rng: &mut SmallRng,
        view: &TargetView<'_>,
    ) -> Option<(usize, usize)>;
}

/// Uniform-random play: random valid placements, random unattacked targets.
pub struct RandomStrategy;

impl RandomStrategy {
    pub fn new() -> Self {
        RandomStrategy
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        RandomStrategy::new()
    }
}

impl Strategy for RandomStrategy {
    fn choose_placement(
        &mut self,
        rng: &mut SmallRng,
        board: &Board,
        length: usize,
    ) -> Option<(usize, usize, Orientation)> {
        board.random_placement(rng, length)
    }

    fn choose_attack_target(
        &mut self,
        rng: &mut SmallRng,
        view: &TargetView<'_>,
    ) -> Option<(usize, usize)> {
        // uniform over every cell not yet shot at
        let open: Vec<(usize, usize)> = (0..view.rows())
            .flat_map(|row| (0..view.cols()).map(move |col| (row, col)))
            .filter(|&(row, col)| !view.is_attacked(row, col))
            .collect();
        if open.is_empty() {
            return None;
        }
        Some(open[rng.random_range(0..open.len())])
    }
}

/// Map a difficulty tier to a strategy. Every tier plays uniform random for
/// now; smarter tiers become new `Strategy` implementations here.
pub fn strategy_for(_difficulty: u8) -> Box<dyn Strategy> {
    Box::new(RandomStrategy::new())
}
