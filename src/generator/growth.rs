/*
growth.rs

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

//! Grow random contiguous regions over the board.
//!
//! Regions are grown one at a time from a random unassigned seed cell by
//! breadth-first expansion over a [`WorkGrid`] buffer.
//! The neighbors of each claimed cell are shuffled before joining the
//! frontier, which gives the regions their irregular outlines.
//!
//! A region that ends up smaller than the configured minimum is discarded,
//! but its cells stay claimed on the grid.
//! The shrinking pool of free cells can then starve later regions, in which
//! case the attempt resolves to [`Attempt::Stuck`] and the caller starts
//! over with a fresh grid.
//! After the retry budget is spent, [`RegionGenerator::generate`] falls
//! back to the deterministic block tiling.

use log::{debug, warn};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::VecDeque;

use super::complexity::Complexity;
use super::partition::{Partition, Region};
use super::tiling;
use super::work_grid::WorkGrid;
use crate::cell::Cell;

/// Number of full generation attempts before falling back to the
/// deterministic block tiling.
const MAX_RETRIES: usize = 3;

/// Outcome of a single generation attempt.
#[derive(Debug)]
enum Attempt {
    /// The attempt produced a complete partition.
    Success(Partition),

    /// Every cell was claimed before enough regions were accepted.
    Stuck,
}

/// Region sizing and shape parameters.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorConfig {
    /// Smallest region size that is accepted.
    pub min_region_size: usize,

    /// Largest target size ever drawn for a region.
    pub max_region_size: usize,

    /// Complexity level, selecting the neighbor offsets and the target-size
    /// variance.
    pub complexity: Complexity,
}

impl GeneratorConfig {
    /// Default sizing for the given board size and complexity level.
    pub fn new(board_size: usize, complexity: Complexity) -> Self {
        Self {
            min_region_size: 2,
            max_region_size: board_size + 2,
            complexity,
        }
    }
}

/// Divide an N×N board into N contiguous regions.
#[derive(Debug)]
pub struct RegionGenerator {
    /// Size of the board side, which is also the number of regions.
    board_size: usize,

    /// Sizing and shape parameters.
    config: GeneratorConfig,
}

impl RegionGenerator {
    /// Create a generator with the default sizing for the complexity level.
    pub fn new(board_size: usize, complexity: Complexity) -> Self {
        Self {
            board_size,
            config: GeneratorConfig::new(board_size, complexity),
        }
    }

    /// Create a generator with explicit sizing parameters.
    pub fn with_config(board_size: usize, config: GeneratorConfig) -> Self {
        Self { board_size, config }
    }

    /// Generate a partition of the board into `board_size` regions.
    ///
    /// The call never fails: when no randomized attempt completes within
    /// the retry budget, the deterministic block tiling is returned
    /// instead, indistinguishable to the caller from a regular success.
    pub fn generate(&self, rng: &mut impl Rng) -> Partition {
        for attempt in 1..=MAX_RETRIES {
            match self.attempt(rng) {
                Attempt::Success(partition) => {
                    debug!("Partition generated on attempt {attempt}");
                    return partition;
                }
                Attempt::Stuck => {
                    debug!("Attempt {attempt} got stuck, retrying region generation");
                }
            }
        }
        warn!("No attempt succeeded after {MAX_RETRIES} tries, using the block tiling");
        tiling::block_tiling(self.board_size)
    }

    /// Run one full generation attempt on a fresh working grid.
    fn attempt(&self, rng: &mut impl Rng) -> Attempt {
        let mut grid = WorkGrid::new(self.board_size);
        let mut regions: Vec<Region> = Vec::with_capacity(self.board_size);

        while regions.len() < self.board_size {
            let seed = match grid.random_unassigned(rng) {
                Some(cell) => cell,
                None => return Attempt::Stuck,
            };
            let target_size: usize = self.draw_target_size(rng);
            debug!(
                "Growing region {} from seed {seed} (target size {target_size})",
                regions.len()
            );

            let cells = self.grow_region(&mut grid, seed, regions.len(), target_size, rng);

            if cells.len() >= self.config.min_region_size {
                regions.push(Region {
                    id: regions.len(),
                    cells,
                });
            } else {
                // The undersized region is discarded, but its cells stay
                // claimed on the grid and shrink the pool for the regions
                // that follow.
                debug!("Discarding an undersized region of {} cells", cells.len());
            }

            if grid.is_full() && regions.len() < self.board_size {
                return Attempt::Stuck;
            }
        }

        // A discarded region, or free cells left over after the last
        // accepted region, would leave part of the board outside every
        // region. Such an attempt does not count as a success.
        let covered: usize = regions.iter().map(|region| region.len()).sum();
        if covered != self.board_size * self.board_size {
            debug!("Regions cover {covered} cells, the attempt is incomplete");
            return Attempt::Stuck;
        }

        Attempt::Success(Partition {
            board: grid.into_board(),
            regions,
        })
    }

    /// Grow one region from the seed cell by breadth-first expansion.
    ///
    /// Claimed cells are written to the working grid with the given region
    /// identifier.
    /// Growth stops once the region reaches the target size or the frontier
    /// empties.
    fn grow_region(
        &self,
        grid: &mut WorkGrid,
        seed: Cell,
        region_id: usize,
        target_size: usize,
        rng: &mut impl Rng,
    ) -> Vec<Cell> {
        let directions = self.config.complexity.directions();
        let mut cells: Vec<Cell> = Vec::with_capacity(target_size);
        let mut frontier: VecDeque<Cell> = VecDeque::new();
        frontier.push_back(seed);

        while cells.len() < target_size {
            let cell = match frontier.pop_front() {
                Some(c) => c,
                None => break,
            };
            if !grid.is_unassigned(&cell) {
                continue;
            }
            grid.claim(&cell, region_id);
            cells.push(cell);

            let mut neighbors: Vec<Cell> = grid.unassigned_neighbors(&cell, directions);
            neighbors.shuffle(rng);
            frontier.extend(neighbors);
        }
        cells
    }

    /// Draw a random target size within the configured bounds.
    fn draw_target_size(&self, rng: &mut impl Rng) -> usize {
        // N² cells shared by N regions give a base size of N.
        let base: usize = self.board_size;
        let variance: usize = self.config.complexity.size_variance();
        let min = self.config.min_region_size.max(base.saturating_sub(variance));
        let max = self.config.max_region_size.min(base + variance).max(min);
        rng.random_range(min..=max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    /// Breadth-first check that the region holds together under the given
    /// neighbor offsets, starting from its first claimed cell.
    fn is_contiguous(region: &Region, directions: &[(i32, i32)]) -> bool {
        let cells: HashSet<Cell> = region.cells.iter().copied().collect();
        let mut seen: HashSet<Cell> = HashSet::new();
        let mut queue: VecDeque<Cell> = VecDeque::new();
        seen.insert(region.cells[0]);
        queue.push_back(region.cells[0]);

        while let Some(cell) = queue.pop_front() {
            for (dr, dc) in directions {
                let row = match cell.row.checked_add_signed(*dr as isize) {
                    Some(row) => row,
                    None => continue,
                };
                let col = match cell.col.checked_add_signed(*dc as isize) {
                    Some(col) => col,
                    None => continue,
                };
                let neighbor = Cell::new(row, col);
                if cells.contains(&neighbor) && seen.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }
        seen.len() == cells.len()
    }

    fn assert_valid_partition(partition: &Partition, board_size: usize) {
        assert_eq!(partition.regions.len(), board_size);
        assert_eq!(partition.size(), board_size);

        // Disjoint regions covering the full board.
        let mut all_cells: Vec<Cell> = partition
            .regions
            .iter()
            .flat_map(|region| region.cells.iter().copied())
            .collect();
        assert_eq!(all_cells.len(), board_size * board_size);
        all_cells.sort_unstable();
        all_cells.dedup();
        assert_eq!(all_cells.len(), board_size * board_size);

        // The dense board matches the regions.
        for region in &partition.regions {
            for cell in &region.cells {
                assert_eq!(partition.board[cell.row][cell.col], region.id);
            }
        }

        // Identifiers are positional.
        for (i, region) in partition.regions.iter().enumerate() {
            assert_eq!(region.id, i);
        }
    }

    #[test]
    fn generated_partitions_are_valid() {
        for board_size in [5, 6, 8, 9] {
            for complexity in [
                Complexity::Easy,
                Complexity::Medium,
                Complexity::Hard,
                Complexity::Expert,
            ] {
                let mut rng = StdRng::seed_from_u64(42);
                let generator = RegionGenerator::new(board_size, complexity);
                let partition = generator.generate(&mut rng);
                assert_valid_partition(&partition, board_size);
            }
        }
    }

    #[test]
    fn regions_are_contiguous() {
        for seed in 0..8 {
            let mut rng = StdRng::seed_from_u64(seed);
            let generator = RegionGenerator::new(8, Complexity::Easy);
            let partition = generator.generate(&mut rng);
            for region in &partition.regions {
                assert!(is_contiguous(region, Complexity::Easy.directions()));
            }
        }
    }

    #[test]
    fn same_seed_gives_same_partition() {
        let generator = RegionGenerator::new(8, Complexity::Hard);
        let mut first_rng = StdRng::seed_from_u64(1234);
        let mut second_rng = StdRng::seed_from_u64(1234);
        assert_eq!(
            generator.generate(&mut first_rng),
            generator.generate(&mut second_rng)
        );
    }

    #[test]
    fn accepted_regions_meet_the_minimum_size() {
        for seed in 0..8 {
            let mut rng = StdRng::seed_from_u64(seed);
            let generator = RegionGenerator::new(7, Complexity::Expert);
            let partition = generator.generate(&mut rng);
            for region in &partition.regions {
                assert!(region.len() >= 2);
            }
        }
    }

    #[test]
    fn impossible_sizing_falls_back_to_the_block_tiling() {
        // A minimum larger than the whole board rejects every grown region,
        // so all the attempts get stuck.
        let config = GeneratorConfig {
            min_region_size: 100,
            max_region_size: 100,
            complexity: Complexity::Easy,
        };
        let mut rng = StdRng::seed_from_u64(9);
        let generator = RegionGenerator::with_config(4, config);
        assert_eq!(generator.generate(&mut rng), tiling::block_tiling(4));
    }

    #[test]
    fn degenerate_board_falls_back_to_the_block_tiling() {
        // A 1×1 board can never host a 2-cell region.
        let mut rng = StdRng::seed_from_u64(0);
        let generator = RegionGenerator::new(1, Complexity::Medium);
        let partition = generator.generate(&mut rng);
        assert_eq!(partition, tiling::block_tiling(1));
        assert_valid_partition(&partition, 1);
    }
}
