/*
lib.rs

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

//! Puzzle engine for a region-constrained queens game.
//!
//! An N×N board is divided into N contiguous colored regions, and the
//! player places one queen per row, per column, and per region so that no
//! two queens share a diagonal.
//!
//! The [`generator`] module builds random region partitions, [`validation`]
//! holds the placement rules, and [`game`] drives a game in progress.
//! A presentation layer typically creates a [`game::Game`], calls
//! [`game::Game::new_board`] at startup and on "new puzzle" requests, feeds
//! player actions to [`game::Game::place`], [`game::Game::undo`], and
//! [`game::Game::reset`], and re-renders from [`game::Game::snapshot`]
//! after each call.
//!
//! All the randomness is drawn from an injected [`rand::Rng`] source, so a
//! seeded generator reproduces the same puzzle.

pub mod cell;
pub mod game;
pub mod generator;
pub mod validation;

pub use cell::Cell;
pub use game::{Game, GameStatus, Snapshot};
pub use generator::complexity::Complexity;
pub use generator::growth::{GeneratorConfig, RegionGenerator};
pub use generator::partition::{Partition, Region};
