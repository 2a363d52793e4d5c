/*
partition.rs

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

//! Region partitions of the board.
//!
//! A [`Partition`] bundles the two representations of the same division of
//! the board: the list of [`Region`] objects, and the dense board grid that
//! maps every cell to the identifier of its owning region.
//! The board grid is always derived from the regions and the two are never
//! updated independently.

use serde::{Deserialize, Serialize};

use crate::cell::Cell;

/// A contiguous group of cells that must hold exactly one queen.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Region {
    /// Region identifier, stable for the lifetime of the partition.
    pub id: usize,

    /// Cells belonging to the region.
    pub cells: Vec<Cell>,
}

impl Region {
    /// Whether the region owns the given cell.
    pub fn contains(&self, cell: &Cell) -> bool {
        self.cells.contains(cell)
    }

    /// Number of cells in the region.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the region has no cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// A complete division of an N×N board into N regions.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    /// Dense board representation: `board[row][col]` is the identifier of
    /// the region that owns the cell.
    pub board: Vec<Vec<usize>>,

    /// The regions, indexed by their identifiers.
    pub regions: Vec<Region>,
}

impl Partition {
    /// Size of the board side.
    pub fn size(&self) -> usize {
        self.board.len()
    }

    /// Return the region that owns the given cell, or None when no region
    /// claims it.
    pub fn region_of(&self, cell: &Cell) -> Option<&Region> {
        self.regions.iter().find(|region| region.contains(cell))
    }
}
