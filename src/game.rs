/*
game.rs

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

//! Manage the status of a game in progress.
//!
//! The [`Game`] object owns the current partition, the placed queens, and
//! the move history, and exposes the four operations the presentation layer
//! drives: [`Game::new_board`], [`Game::place`], [`Game::undo`], and
//! [`Game::reset`].
//! Every operation is synchronous and total: a rejected placement or an
//! undo with nothing to undo leaves the state untouched instead of
//! failing.
//! After each call the presentation layer re-renders from
//! [`Game::snapshot`].

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::generator::complexity::Complexity;
use crate::generator::growth::RegionGenerator;
use crate::generator::partition::{Partition, Region};
use crate::generator::tiling;
use crate::validation;

/// Progress of the current puzzle.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameStatus {
    /// A new partition is being generated.
    Generating,

    /// The player is placing queens.
    Playing,

    /// One queen stands in every row, column, and region.
    Won,
}

/// Read-only copy of the observable game state.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Dense board representation: `board[row][col]` is the identifier of
    /// the region that owns the cell.
    pub board: Vec<Vec<usize>>,

    /// The regions of the current partition.
    pub regions: Vec<Region>,

    /// Queens currently on the board.
    pub queens: Vec<Cell>,

    /// Placements in order, the last one being undone first.
    pub move_history: Vec<Cell>,

    /// Progress of the puzzle.
    pub status: GameStatus,

    /// Number of placements currently on the board.
    pub move_count: usize,
}

/// Manage the status of the game in progress.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Game {
    /// Size of the board side; also the number of regions and the number of
    /// queens to place.
    board_size: usize,

    /// Current region partition. Replaced wholesale by
    /// [`Game::new_board`], never mutated in place.
    partition: Partition,

    /// Queens currently on the board.
    queens: Vec<Cell>,

    /// Ordered record of the placements, used by [`Game::undo`].
    move_history: Vec<Cell>,

    /// Number of placements currently on the board.
    move_count: usize,

    /// Progress of the puzzle.
    status: GameStatus,
}

impl Game {
    /// Create a game over the deterministic block tiling of the board.
    ///
    /// Call [`Game::new_board`] to replace the tiling with a randomized
    /// partition.
    pub fn new(board_size: usize) -> Self {
        Self::with_partition(tiling::block_tiling(board_size))
    }

    /// Create a game over an externally built partition.
    pub fn with_partition(partition: Partition) -> Self {
        Self {
            board_size: partition.size(),
            partition,
            queens: Vec::new(),
            move_history: Vec::new(),
            move_count: 0,
            status: GameStatus::Playing,
        }
    }

    /// Generate a new puzzle and clear all placements.
    ///
    /// The method always succeeds: generation difficulties resolve
    /// internally to the deterministic fallback tiling.
    pub fn new_board(&mut self, complexity: Complexity, rng: &mut impl Rng) {
        self.status = GameStatus::Generating;
        self.partition = RegionGenerator::new(self.board_size, complexity).generate(rng);
        self.queens.clear();
        self.move_history.clear();
        self.move_count = 0;
        self.status = GameStatus::Playing;
    }

    /// Try to place a queen on the given cell.
    ///
    /// Return `false`, without changing anything, when the placement breaks
    /// a rule or when the game is not in the [`GameStatus::Playing`] state.
    /// A rejected placement is a normal outcome, not an error.
    pub fn place(&mut self, cell: Cell) -> bool {
        if self.status != GameStatus::Playing {
            return false;
        }
        if !validation::is_valid_placement(&cell, &self.queens, &self.partition) {
            return false;
        }

        debug!("Placing a queen on {cell}");
        self.queens.push(cell);
        self.move_history.push(cell);
        self.move_count += 1;
        if self.queens.len() == self.board_size {
            debug!("All {} queens placed, the puzzle is solved", self.board_size);
            self.status = GameStatus::Won;
        }
        true
    }

    /// Remove the last placed queen.
    ///
    /// Undoing from the [`GameStatus::Won`] state puts the game back in the
    /// [`GameStatus::Playing`] state; undoing with no queen on the board
    /// does nothing.
    pub fn undo(&mut self) {
        if let Some(cell) = self.move_history.pop() {
            debug!("Removing the queen from {cell}");
            self.queens.pop();
            self.move_count -= 1;
            self.status = GameStatus::Playing;
        }
    }

    /// Clear the placements but keep the current puzzle.
    pub fn reset(&mut self) {
        self.queens.clear();
        self.move_history.clear();
        self.move_count = 0;
        self.status = GameStatus::Playing;
    }

    /// Return an owned copy of the observable state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.partition.board.clone(),
            regions: self.partition.regions.clone(),
            queens: self.queens.clone(),
            move_history: self.move_history.clone(),
            status: self.status,
            move_count: self.move_count,
        }
    }

    /// Size of the board side.
    pub fn board_size(&self) -> usize {
        self.board_size
    }

    /// Current region partition.
    pub fn partition(&self) -> &Partition {
        &self.partition
    }

    /// Queens currently on the board.
    pub fn queens(&self) -> &[Cell] {
        &self.queens
    }

    /// Placements in order.
    pub fn move_history(&self) -> &[Cell] {
        &self.move_history
    }

    /// Number of placements currently on the board.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Progress of the puzzle.
    pub fn status(&self) -> GameStatus {
        self.status
    }
}
