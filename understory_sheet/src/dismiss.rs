// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interactive dismissal policy.

/// Fraction of the container height a downward drag must cover to dismiss.
pub const DISMISS_THRESHOLD: f64 = 0.2;

/// Decides at gesture release whether the sheet should close instead of
/// snapping to a detent.
///
/// Dismissal fires iff all of the following hold:
/// 1. interactive dismissal is not disabled,
/// 2. `release_translation / container_height >= threshold`,
/// 3. the sheet rested at the shortest detent before the drag.
///
/// Positions are compared by spacing, so a detent that coincides with the
/// shortest one counts as the shortest.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DismissPolicy {
    /// Whether interactive dismissal is disabled.
    pub disabled: bool,
    /// Minimum `translation / container_height` ratio.
    pub threshold: f64,
}

impl DismissPolicy {
    /// Creates a policy with the default [`DISMISS_THRESHOLD`].
    #[must_use]
    pub fn new(disabled: bool) -> Self {
        Self {
            disabled,
            threshold: DISMISS_THRESHOLD,
        }
    }

    /// Returns `true` if the release should dismiss the sheet.
    ///
    /// `resting_spacing` is the spacing the sheet rested at before the drag and
    /// `shortest_spacing` the largest spacing in the table, if any. A
    /// non-positive `container_height` never dismisses.
    #[must_use]
    pub fn should_dismiss(
        &self,
        release_translation: f64,
        container_height: f64,
        resting_spacing: f64,
        shortest_spacing: Option<f64>,
    ) -> bool {
        if self.disabled || container_height <= 0.0 {
            return false;
        }
        let ratio = release_translation / container_height;
        let at_shortest = shortest_spacing == Some(resting_spacing);
        let dismiss = ratio >= self.threshold && at_shortest;
        tracing::debug!(ratio, at_shortest, dismiss, "evaluated dismissal");
        dismiss
    }
}

impl Default for DismissPolicy {
    fn default() -> Self {
        Self::new(false)
    }
}
