//! A single cell of a board grid.

/// One grid position: remembers whether a ship occupies it and whether it
/// has been attacked. Flags are private; only board operations mutate them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Space {
    row: usize,
    col: usize,
    has_ship: bool,
    is_hit: bool,
}

impl Space {
    pub(crate) fn new(row: usize, col: usize) -> Self {
        Space {
            row,
            col,
            has_ship: false,
            is_hit: false,
        }
    }

    /// Row coordinate of this cell.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column coordinate of this cell.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Whether a ship segment occupies this cell.
    pub fn has_ship(&self) -> bool {
        self.has_ship
    }

    /// Whether this cell has been attacked.
    pub fn is_hit(&self) -> bool {
        self.is_hit
    }

    pub(crate) fn put_ship(&mut self) {
        self.has_ship = true;
    }

    pub(crate) fn mark_hit(&mut self) {
        self.is_hit = true;
    }
}
