/*
work_grid.rs

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

//! Working grid buffer used while growing regions.
//!
//! The buffer maps every cell of the board to a region identifier, with a
//! sentinel for cells that no region has claimed yet.
//! One [`WorkGrid`] object is owned exclusively by a generation attempt and
//! passed by mutable reference through the growth steps.

use rand::Rng;

use crate::cell::Cell;

/// Sentinel marking a cell that no region has claimed yet.
const UNASSIGNED: usize = usize::MAX;

/// Growth buffer mapping each cell of the board to a region identifier.
#[derive(Debug)]
pub struct WorkGrid {
    /// Size of the board side.
    size: usize,

    /// Region identifiers in row-major order.
    cells: Vec<usize>,
}

impl WorkGrid {
    /// Create a grid with every cell unassigned.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![UNASSIGNED; size * size],
        }
    }

    /// Size of the board side.
    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, cell: &Cell) -> usize {
        cell.row * self.size + cell.col
    }

    /// Whether no region has claimed the cell yet.
    pub fn is_unassigned(&self, cell: &Cell) -> bool {
        self.cells[self.index(cell)] == UNASSIGNED
    }

    /// Claim the cell for the given region.
    pub fn claim(&mut self, cell: &Cell, region_id: usize) {
        let i = self.index(cell);
        self.cells[i] = region_id;
    }

    /// Whether every cell of the grid has been claimed.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|id| *id != UNASSIGNED)
    }

    /// Pick a uniformly random unassigned cell, or None when the grid is
    /// full.
    pub fn random_unassigned(&self, rng: &mut impl Rng) -> Option<Cell> {
        let unassigned: Vec<Cell> = self.unassigned_cells();
        if unassigned.is_empty() {
            None
        } else {
            Some(unassigned[rng.random_range(0..unassigned.len())])
        }
    }

    /// List every cell that no region has claimed yet.
    fn unassigned_cells(&self) -> Vec<Cell> {
        let mut ret: Vec<Cell> = Vec::new();
        for row in 0..self.size {
            for col in 0..self.size {
                let cell = Cell::new(row, col);
                if self.is_unassigned(&cell) {
                    ret.push(cell);
                }
            }
        }
        ret
    }

    /// List the in-bounds, unassigned neighbors of the cell under the given
    /// neighbor offsets.
    pub fn unassigned_neighbors(&self, cell: &Cell, directions: &[(i32, i32)]) -> Vec<Cell> {
        let mut ret: Vec<Cell> = Vec::with_capacity(directions.len());
        for (dr, dc) in directions {
            let row = match cell.row.checked_add_signed(*dr as isize) {
                Some(row) if row < self.size => row,
                _ => continue,
            };
            let col = match cell.col.checked_add_signed(*dc as isize) {
                Some(col) if col < self.size => col,
                _ => continue,
            };
            let neighbor = Cell::new(row, col);
            if self.is_unassigned(&neighbor) {
                ret.push(neighbor);
            }
        }
        ret
    }

    /// Convert the grid into the dense board representation.
    pub fn into_board(self) -> Vec<Vec<usize>> {
        self.cells
            .chunks(self.size)
            .map(|row| row.to_vec())
            .collect()
    }
}
