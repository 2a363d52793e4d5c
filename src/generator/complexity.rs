/*
complexity.rs

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

//! Complexity levels and their region-growth parameters.
//!
//! The complexity level selects the neighbor offsets considered while a
//! region grows.
//! Orthogonal-only growth produces compact shapes; adding diagonal offsets
//! lets regions thread between each other, which makes the puzzle harder to
//! read.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The four orthogonal neighbor offsets (up, down, left, right).
const ORTHOGONAL: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// The orthogonal offsets plus the up-left and up-right diagonals.
const WITH_UPPER_DIAGONALS: [(i32, i32); 6] =
    [(-1, 0), (1, 0), (0, -1), (0, 1), (-1, -1), (-1, 1)];

/// All eight neighbor offsets.
const ALL_DIRECTIONS: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Puzzle complexity level.
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, PartialOrd, PartialEq, Eq, Hash, ValueEnum, Default,
)]
pub enum Complexity {
    Easy,
    #[default]
    Medium,
    Hard,
    Expert,
}

impl Complexity {
    /// Neighbor offsets, as `(row, column)` deltas, considered when growing
    /// a region.
    pub fn directions(&self) -> &'static [(i32, i32)] {
        match self {
            Complexity::Easy => &ORTHOGONAL,
            Complexity::Medium => &WITH_UPPER_DIAGONALS,
            Complexity::Hard | Complexity::Expert => &ALL_DIRECTIONS,
        }
    }

    /// Variance applied around the base region size when drawing the target
    /// size of a region.
    pub fn size_variance(&self) -> usize {
        match self {
            Complexity::Expert => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Complexity::Easy => write!(f, "easy"),
            Complexity::Medium => write!(f, "medium"),
            Complexity::Hard => write!(f, "hard"),
            Complexity::Expert => write!(f, "expert"),
        }
    }
}
