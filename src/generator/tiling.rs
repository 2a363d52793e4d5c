/*
tiling.rs

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

//! Deterministic block-tiling fallback.
//!
//! When the randomized growth cannot complete within its retry budget, the
//! board is divided into N equal rectangular blocks of N cells each.
//! The result is fully determined by the board size, and is a first-class
//! partition like any other.

use super::partition::{Partition, Region};
use crate::cell::Cell;

/// Divide the board into N rectangular blocks of N cells each.
///
/// Block dimensions are `rows × cols` with `rows` the largest divisor of N
/// not exceeding √N, so a board with an integer square root gets square
/// blocks (N = 9 gives nine 3×3 blocks) and a prime size degenerates to
/// full-width row strips.
/// Region identifiers follow the blocks in row-major order.
pub fn block_tiling(board_size: usize) -> Partition {
    if board_size == 0 {
        return Partition {
            board: Vec::new(),
            regions: Vec::new(),
        };
    }

    let block_rows: usize = largest_divisor_up_to_sqrt(board_size);
    let block_cols: usize = board_size / block_rows;
    let blocks_per_row: usize = board_size / block_cols;

    let mut board: Vec<Vec<usize>> = vec![vec![0; board_size]; board_size];
    let mut regions: Vec<Region> = Vec::with_capacity(board_size);

    for block_row in 0..board_size / block_rows {
        for block_col in 0..blocks_per_row {
            let id: usize = block_row * blocks_per_row + block_col;
            let mut cells: Vec<Cell> = Vec::with_capacity(board_size);
            for i in 0..block_rows {
                for j in 0..block_cols {
                    let row = block_row * block_rows + i;
                    let col = block_col * block_cols + j;
                    board[row][col] = id;
                    cells.push(Cell::new(row, col));
                }
            }
            regions.push(Region { id, cells });
        }
    }

    Partition { board, regions }
}

/// Largest divisor of `n` that does not exceed √n.
fn largest_divisor_up_to_sqrt(n: usize) -> usize {
    let mut best: usize = 1;
    let mut d: usize = 1;
    while d * d <= n {
        if n % d == 0 {
            best = d;
        }
        d += 1;
    }
    best
}
