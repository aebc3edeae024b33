//! Per-player board: a grid of spaces, the placed ships, and the count of
//! ship cells still afloat.

use rand::Rng;

use crate::common::{AttackResult, PlacementError};
use crate::ship::{Orientation, Ship};
use crate::space::Space;

/// Attempts `random_placement` makes before giving up.
const PLACEMENT_ATTEMPTS: usize = 100;

/// One player's grid. Placement and attack resolution are the only
/// mutators; everything else is a read-only query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    ships: Vec<Ship>,
    cells: Vec<Space>,
    ship_spaces_remaining: usize,
}

impl Board {
    /// Create an empty `rows` x `cols` board. Dimensions must be nonzero;
    /// config validation guarantees that for boards built by a match.
    pub fn new(rows: usize, cols: usize) -> Self {
        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(Space::new(row, col));
            }
        }
        Board {
            rows,
            cols,
            ships: Vec::new(),
            cells,
            ship_spaces_remaining: 0,
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell at (`row`, `col`), or `None` outside the grid.
    pub fn space(&self, row: usize, col: usize) -> Option<&Space> {
        if row < self.rows && col < self.cols {
            self.cells.get(row * self.cols + col)
        } else {
            None
        }
    }

    fn space_mut(&mut self, row: usize, col: usize) -> Option<&mut Space> {
        if row < self.rows && col < self.cols {
            self.cells.get_mut(row * self.cols + col)
        } else {
            None
        }
    }

    /// Ships placed so far, in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Count of ship cells that have not been hit.
    pub fn ship_spaces_remaining(&self) -> usize {
        self.ship_spaces_remaining
    }

    /// True when every ship cell on this board has been hit. Monotonic:
    /// nothing puts cells back once the count reaches zero.
    pub fn check_win(&self) -> bool {
        self.ship_spaces_remaining == 0
    }

    /// True if any of the given coordinates already holds a ship. Pure
    /// query; coordinates off the grid count as unoccupied.
    pub fn is_intersecting<I>(&self, coords: I) -> bool
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        coords
            .into_iter()
            .any(|(row, col)| self.space(row, col).is_some_and(Space::has_ship))
    }

    /// Validate and commit a ship of `length` with its top/left end at
    /// (`row`, `col`). All-or-nothing: a failed placement leaves the board
    /// untouched.
    pub fn place_ship(
        &mut self,
        length: usize,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<(), PlacementError> {
        if !self.fits(length, row, col, orientation) {
            return Err(PlacementError::OutOfBounds);
        }
        let ship = Ship::new(length, row, col, orientation);
        if self.is_intersecting(ship.cells()) {
            return Err(PlacementError::Overlap);
        }
        for (r, c) in ship.cells() {
            if let Some(space) = self.space_mut(r, c) {
                space.put_ship();
            }
        }
        self.ships.push(ship);
        self.ship_spaces_remaining += length;
        Ok(())
    }

    /// Origin on the grid, movement axis within bounds, nonzero length.
    fn fits(&self, length: usize, row: usize, col: usize, orientation: Orientation) -> bool {
        if length == 0 || row >= self.rows || col >= self.cols {
            return false;
        }
        match orientation {
            Orientation::Horizontal => col + length <= self.cols,
            Orientation::Vertical => row + length <= self.rows,
        }
    }

    /// Resolve an attack on (`row`, `col`). Returns `None` when the request
    /// is a no-op: the coordinate is off the grid or the cell was already
    /// hit. Otherwise marks the cell and reports hit or miss.
    pub fn apply_attack(&mut self, row: usize, col: usize) -> Option<AttackResult> {
        let hit = {
            let space = self.space_mut(row, col)?;
            if space.is_hit() {
                return None;
            }
            space.mark_hit();
            space.has_ship()
        };
        if hit {
            self.ship_spaces_remaining -= 1;
            Some(AttackResult::Hit)
        } else {
            Some(AttackResult::Miss)
        }
    }

    /// Pick a random non-overlapping placement for a ship of `length`, or
    /// `None` when no valid spot turns up within the attempt budget.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        length: usize,
    ) -> Option<(usize, usize, Orientation)> {
        if length == 0 {
            return None;
        }
        for _ in 0..PLACEMENT_ATTEMPTS {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_row, max_col) = match orientation {
                Orientation::Horizontal if length <= self.cols => {
                    (self.rows - 1, self.cols - length)
                }
                Orientation::Vertical if length <= self.rows => {
                    (self.rows - length, self.cols - 1)
                }
                _ => continue,
            };
            let row = rng.random_range(0..=max_row);
            let col = rng.random_range(0..=max_col);
            let ship = Ship::new(length, row, col, orientation);
            if !self.is_intersecting(ship.cells()) {
                return Some((row, col, orientation));
            }
        }
        None
    }
}
