/*
validation.rs

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

//! Queen placement rules.
//!
//! A placement is legal when the target cell is on the board, shares no
//! row, column, or diagonal with a placed queen, and lies in a region that
//! holds no queen yet.

use crate::cell::Cell;
use crate::generator::partition::Partition;

/// Whether a queen may be placed on the target cell.
///
/// The predicate has no side effects.
/// An off-board target fails the same bounds check as any other illegal
/// move, and a cell that no region owns is rejected as well.
pub fn is_valid_placement(target: &Cell, queens: &[Cell], partition: &Partition) -> bool {
    if !target.is_within(partition.size()) {
        return false;
    }

    if queens.iter().any(|queen| queen.row == target.row) {
        return false;
    }
    if queens.iter().any(|queen| queen.col == target.col) {
        return false;
    }
    if queens.iter().any(|queen| queen.same_diagonal(target)) {
        return false;
    }

    // One queen per region: the target's region must be empty.
    match partition.region_of(target) {
        Some(region) => !queens.iter().any(|queen| region.contains(queen)),
        None => false,
    }
}
