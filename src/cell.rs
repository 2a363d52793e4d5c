/*
cell.rs

Copyright 2026 The Regina developers

This file is part of Regina.

Regina is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Regina is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Regina. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Board cell coordinates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single board square, addressed by its zero-based row and column.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Zero-based row index.
    pub row: usize,

    /// Zero-based column index.
    pub col: usize,
}

impl Cell {
    /// Create a [`Cell`] object.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether the cell lies on a board of the given size.
    pub fn is_within(&self, board_size: usize) -> bool {
        self.row < board_size && self.col < board_size
    }

    /// Whether the cell shares a diagonal with the other cell.
    pub fn same_diagonal(&self, other: &Cell) -> bool {
        self.row.abs_diff(other.row) == self.col.abs_diff(other.col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn within_board() {
        assert!(Cell::new(0, 0).is_within(8));
        assert!(Cell::new(7, 7).is_within(8));
        assert!(!Cell::new(8, 0).is_within(8));
        assert!(!Cell::new(0, 8).is_within(8));
    }

    #[test]
    fn diagonals() {
        let origin = Cell::new(2, 2);
        assert!(origin.same_diagonal(&Cell::new(5, 5)));
        assert!(origin.same_diagonal(&Cell::new(0, 4)));
        assert!(!origin.same_diagonal(&Cell::new(2, 5)));
        assert!(!origin.same_diagonal(&Cell::new(4, 5)));
    }

    #[test]
    fn display() {
        assert_eq!(Cell::new(3, 7).to_string(), "(3, 7)");
    }
}
