/*
generator.rs

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

//! Generate random region partitions of the board.
//!
//! A puzzle board is an N×N grid divided into N contiguous colored regions,
//! represented by a [`partition::Partition`] object.
//!
//! To create a puzzle, build a [`growth::RegionGenerator`] object and call
//! its [`growth::RegionGenerator::generate`] method with a random source.
//! The method grows regions one by one from random seed cells over a
//! [`work_grid::WorkGrid`] buffer, shuffling the expansion order of the
//! neighboring cells.
//! The [`complexity::Complexity`] level selects the neighbor offsets used
//! during the expansion, and therefore how irregular the region shapes get.
//!
//! A growth attempt can paint itself into a corner: when every cell is
//! claimed before N regions exist, the attempt is abandoned and a fresh one
//! is started.
//! When no attempt completes within the retry budget, the deterministic
//! block tiling from [`tiling::block_tiling`] is returned instead, so
//! generating a partition never fails.

pub mod complexity;
pub mod growth;
pub mod partition;
pub mod tiling;
pub mod work_grid;
