/*
engine.rs

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

//! End-to-end tests of the generation and game engine.

use rand::SeedableRng;
use rand::rngs::StdRng;

use regina::generator::tiling;
use regina::{Cell, Complexity, Game, GameStatus, RegionGenerator};

mod generation {
    use super::*;

    #[test]
    fn partitions_are_complete_for_every_complexity() {
        for complexity in [
            Complexity::Easy,
            Complexity::Medium,
            Complexity::Hard,
            Complexity::Expert,
        ] {
            let mut rng = StdRng::seed_from_u64(2024);
            let partition = RegionGenerator::new(9, complexity).generate(&mut rng);

            assert_eq!(partition.regions.len(), 9);
            let mut cells: Vec<Cell> = partition
                .regions
                .iter()
                .flat_map(|region| region.cells.iter().copied())
                .collect();
            cells.sort_unstable();
            cells.dedup();
            assert_eq!(cells.len(), 81);
        }
    }

    #[test]
    fn fallback_tiling_matches_the_nine_by_nine_blocks() {
        let partition = tiling::block_tiling(9);
        for row in 0..9 {
            for col in 0..9 {
                assert_eq!(partition.board[row][col], (row / 3) * 3 + col / 3);
            }
        }
    }
}

mod play {
    use super::*;

    #[test]
    fn full_session() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut game = Game::new(8);
        game.new_board(Complexity::Medium, &mut rng);
        assert_eq!(game.status(), GameStatus::Playing);

        // Find a first legal cell and place a queen there.
        let first = (0..8)
            .flat_map(|row| (0..8).map(move |col| Cell::new(row, col)))
            .find(|cell| {
                regina::validation::is_valid_placement(cell, game.queens(), game.partition())
            })
            .expect("an empty board always has a legal cell");
        assert!(game.place(first));
        assert_eq!(game.move_count(), 1);

        // The same cell is no longer legal.
        assert!(!game.place(first));

        // Undo then reset leave an empty board over the same partition.
        let partition = game.partition().clone();
        game.undo();
        assert!(game.queens().is_empty());
        assert!(game.place(first));
        game.reset();
        assert!(game.queens().is_empty());
        assert_eq!(game.partition(), &partition);

        // A new board replaces the partition and stays playable.
        game.new_board(Complexity::Expert, &mut rng);
        assert_eq!(game.partition().regions.len(), 8);
        assert_eq!(game.status(), GameStatus::Playing);
    }

    #[test]
    fn seeded_games_are_reproducible() {
        let mut first_rng = StdRng::seed_from_u64(7);
        let mut second_rng = StdRng::seed_from_u64(7);
        let mut first = Game::new(9);
        let mut second = Game::new(9);

        first.new_board(Complexity::Hard, &mut first_rng);
        second.new_board(Complexity::Hard, &mut second_rng);
        assert_eq!(first.snapshot(), second.snapshot());
    }
}
