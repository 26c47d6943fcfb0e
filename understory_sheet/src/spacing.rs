// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spacing: where the top of the sheet rests for each detent.
//!
//! "Spacing" is the distance from the top of the available area down to the
//! top of the sheet at rest, excluding any live drag translation. A larger
//! spacing means a shorter visible sheet.

use core::cmp::Ordering;

use smallvec::SmallVec;

use crate::detent::{Detent, DetentSet};
use crate::geometry::SheetGeometry;

/// Computes the resting spacing of `detent` under `geometry`.
///
/// With `available = container_height - bottom_safe_inset`:
///
/// | Detent        | Spacing                        |
/// |---------------|--------------------------------|
/// | `Natural`     | `available - content_height`   |
/// | `Medium`      | `available / 2`                |
/// | `Large`       | `0`                            |
/// | `Fraction(f)` | `available * (1 - f)`          |
/// | `Height(h)`   | `available - h`                |
///
/// Degenerate geometry (an inset larger than the container, or content taller
/// than the available height) produces negative spacings; they are returned
/// as is.
#[must_use]
pub fn spacing(detent: Detent, geometry: &SheetGeometry) -> f64 {
    let available = geometry.available_height();
    match detent {
        Detent::Natural => available - geometry.content_height(),
        Detent::Medium => available / 2.0,
        Detent::Large => 0.0,
        Detent::Fraction(fraction) => available * (1.0 - fraction),
        Detent::Height(height) => available - height,
    }
}

/// Spacing per available detent, with numerically coincident detents removed.
///
/// Entries are kept in candidate order: by [`Detent::rank`], then by
/// parameter for `Fraction`/`Height`. A detent whose spacing equals that of an
/// earlier candidate is skipped, so no two entries share a spacing and the
/// surviving detent does not depend on the order the host declared them in.
/// For example `Large` and `Height(available)` both rest at `0`; `Large` is
/// kept.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpacingTable {
    entries: SmallVec<[(Detent, f64); 4]>,
}

impl SpacingTable {
    /// Builds the table for `detents` under `geometry`.
    #[must_use]
    pub fn new(detents: &DetentSet, geometry: &SheetGeometry) -> Self {
        let mut candidates: SmallVec<[Detent; 4]> = detents.iter().collect();
        candidates.sort_by(candidate_order);

        let mut entries: SmallVec<[(Detent, f64); 4]> = SmallVec::new();
        for detent in candidates {
            let value = spacing(detent, geometry);
            if entries.iter().any(|&(_, existing)| existing == value) {
                continue;
            }
            entries.push((detent, value));
        }
        tracing::trace!(entries = entries.len(), "rebuilt spacing table");
        Self { entries }
    }

    /// Spacing recorded for `detent`, if it survived deduplication.
    #[must_use]
    pub fn get(&self, detent: Detent) -> Option<f64> {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == detent)
            .map(|&(_, value)| value)
    }

    /// Returns `true` if `detent` has an entry.
    #[must_use]
    pub fn contains(&self, detent: Detent) -> bool {
        self.get(detent).is_some()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(detent, spacing)` entries in candidate order.
    pub fn iter(&self) -> impl Iterator<Item = (Detent, f64)> + '_ {
        self.entries.iter().copied()
    }
}

fn candidate_order(a: &Detent, b: &Detent) -> Ordering {
    let parameter = |detent: &Detent| match *detent {
        Detent::Fraction(v) | Detent::Height(v) => v,
        Detent::Natural | Detent::Medium | Detent::Large => 0.0,
    };
    a.rank()
        .cmp(&b.rank())
        .then_with(|| parameter(a).total_cmp(&parameter(b)))
}
