//! Ship geometry: origin, length, orientation, and the cells spanned.

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A contiguous run of cells of a given length. Pure value: the occupied
/// coordinates are derived from origin, length, and orientation, and never
/// change after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    length: usize,
    row: usize,
    col: usize,
    orientation: Orientation,
}

impl Ship {
    /// Describe a ship with its top/left end at (`row`, `col`). Whether it
    /// fits a particular grid is the board's concern.
    pub fn new(length: usize, row: usize, col: usize, orientation: Orientation) -> Self {
        Ship {
            length,
            row,
            col,
            orientation,
        }
    }

    /// Number of cells the ship spans.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Origin of the ship (row, col).
    pub fn origin(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Orientation of the ship.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Iterate the coordinates this ship occupies, origin first.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let Ship {
            row,
            col,
            orientation,
            ..
        } = *self;
        (0..self.length).map(move |i| match orientation {
            Orientation::Horizontal => (row, col + i),
            Orientation::Vertical => (row + i, col),
        })
    }

    /// Whether the ship occupies the given coordinate.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        match self.orientation {
            Orientation::Horizontal => {
                row == self.row && col >= self.col && col < self.col + self.length
            }
            Orientation::Vertical => {
                col == self.col && row >= self.row && row < self.row + self.length
            }
        }
    }
}
