// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolving a gesture release to a resting detent.

use crate::detent::Detent;
use crate::spacing::SpacingTable;

/// Returns the detent whose spacing is closest to `predicted_offset`.
///
/// Ties go to the entry that comes first in `table`. Returns `None` only if
/// the table is empty.
///
/// ```
/// use understory_sheet::{Detent, DetentSet, SheetGeometry, SpacingTable, nearest};
///
/// let geometry = SheetGeometry::new(800.0, 0.0, 0.0);
/// let detents: DetentSet = [Detent::Medium, Detent::Large].into_iter().collect();
/// let table = SpacingTable::new(&detents, &geometry);
///
/// // Medium rests at 400, Large at 0.
/// assert_eq!(nearest(500.0, &table), Some(Detent::Medium));
/// assert_eq!(nearest(150.0, &table), Some(Detent::Large));
/// ```
#[must_use]
pub fn nearest(predicted_offset: f64, table: &SpacingTable) -> Option<Detent> {
    let mut best: Option<(Detent, f64)> = None;
    for (detent, value) in table.iter() {
        let distance = (value - predicted_offset).abs();
        match best {
            Some((_, best_distance)) if best_distance <= distance => {}
            _ => best = Some((detent, distance)),
        }
    }
    best.map(|(detent, _)| detent)
}

/// Returns the shortest detent: the one with the largest spacing.
///
/// Ties go to the entry that comes first in `table`. Returns `None` only if
/// the table is empty.
#[must_use]
pub fn shortest(table: &SpacingTable) -> Option<Detent> {
    let mut best: Option<(Detent, f64)> = None;
    for (detent, value) in table.iter() {
        match best {
            Some((_, best_value)) if best_value >= value => {}
            _ => best = Some((detent, value)),
        }
    }
    best.map(|(detent, _)| detent)
}
