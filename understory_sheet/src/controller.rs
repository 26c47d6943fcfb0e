// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The sheet controller: presentation state, current detent and drag handling.
//!
//! [`SheetController`] is the only owner of the sheet state. Hosts drive it
//! through a small set of entry points and read derived outputs back each
//! frame:
//!
//! | Input                         | Entry point                                     |
//! |-------------------------------|-------------------------------------------------|
//! | "is presented" binding        | [`present`], [`dismiss`], [`set_presented`]     |
//! | layout pass                   | [`set_geometry`]                                |
//! | configuration from content    | [`apply_preference`], [`apply_preferences`]     |
//! | drag samples                  | [`update_drag`], [`update_drag_position`]       |
//! | drag end                      | [`end_drag`], [`release`]                       |
//! | drag interrupted              | [`cancel_drag`]                                 |
//!
//! [`present`]: SheetController::present
//! [`dismiss`]: SheetController::dismiss
//! [`set_presented`]: SheetController::set_presented
//! [`set_geometry`]: SheetController::set_geometry
//! [`apply_preference`]: SheetController::apply_preference
//! [`apply_preferences`]: SheetController::apply_preferences
//! [`update_drag`]: SheetController::update_drag
//! [`update_drag_position`]: SheetController::update_drag_position
//! [`end_drag`]: SheetController::end_drag
//! [`release`]: SheetController::release
//! [`cancel_drag`]: SheetController::cancel_drag

use kurbo::{Point, Vec2};

use crate::config::{PreferenceKey, PreferenceQueue, SheetConfiguration, SheetPreference};
use crate::detent::Detent;
use crate::drag::DragSession;
use crate::geometry::SheetGeometry;
use crate::resolve::{nearest, shortest};
use crate::spacing::{SpacingTable, spacing};

/// Whether the sheet is on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Presentation {
    /// Not presented.
    Hidden,
    /// Presented and resting at (or being dragged from) a detent.
    Shown(Detent),
}

/// Snapshot of the state of a presented sheet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SheetState {
    /// Detent the sheet rests at, or was resting at when the current drag began.
    pub current_detent: Detent,
    /// Vertical translation of the in-progress drag; `0` when not dragging.
    pub live_translation: f64,
}

/// Result of ending a drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragOutcome {
    /// The sheet snapped to this detent, which may be the one it started at.
    Settled(Detent),
    /// The sheet was dismissed. The host must set its "is presented" binding
    /// to `false`. Carries the detent the release resolved to.
    Dismissed(Detent),
    /// Nothing was committed: the sheet is hidden or has no detents.
    Unchanged,
}

#[derive(Clone, Copy, Debug)]
struct Shown {
    detent: Detent,
    drag: Option<DragSession>,
}

/// Owns the state of one sheet and orchestrates detent resolution.
///
/// ## Example
///
/// ```
/// use kurbo::Vec2;
/// use understory_sheet::{Detent, DragOutcome, SheetController, SheetGeometry, SheetPreference};
///
/// let mut sheet = SheetController::default();
/// sheet.set_geometry(SheetGeometry::new(800.0, 0.0, 300.0));
/// sheet.apply_preference(SheetPreference::detents([Detent::Medium, Detent::Large]));
/// sheet.present();
/// assert_eq!(sheet.current_detent(), Some(Detent::Medium));
/// assert_eq!(sheet.render_offset(), Some(Vec2::new(0.0, 400.0)));
///
/// // Drag up by 300 and release: 400 - 300 = 100 is closest to Large (0).
/// sheet.update_drag(Vec2::new(0.0, -300.0));
/// assert_eq!(sheet.render_offset(), Some(Vec2::new(0.0, 100.0)));
/// assert_eq!(sheet.release(), DragOutcome::Settled(Detent::Large));
/// assert_eq!(sheet.render_offset(), Some(Vec2::ZERO));
/// ```
#[derive(Clone, Debug)]
pub struct SheetController {
    config: SheetConfiguration,
    geometry: SheetGeometry,
    table: SpacingTable,
    shown: Option<Shown>,
    last_detent: Option<Detent>,
}

impl SheetController {
    /// Creates a hidden controller with the given configuration.
    #[must_use]
    pub fn new(config: SheetConfiguration) -> Self {
        let geometry = SheetGeometry::default();
        let table = SpacingTable::new(&config.detents, &geometry);
        Self {
            config,
            geometry,
            table,
            shown: None,
            last_detent: None,
        }
    }

    // --- Presentation ---

    /// Current presentation state.
    #[must_use]
    pub fn presentation(&self) -> Presentation {
        match self.shown {
            Some(shown) => Presentation::Shown(shown.detent),
            None => Presentation::Hidden,
        }
    }

    /// Returns `true` while the sheet is presented.
    #[must_use]
    pub fn is_presented(&self) -> bool {
        self.shown.is_some()
    }

    /// Presents the sheet at the first configured detent, or `Natural`.
    ///
    /// Does nothing if the sheet is already presented.
    pub fn present(&mut self) {
        if self.shown.is_some() {
            return;
        }
        let detent = self.config.detents.first().unwrap_or(Detent::Natural);
        tracing::debug!(detent = ?detent, "presented sheet");
        self.shown = Some(Shown { detent, drag: None });
    }

    /// Hides the sheet, discarding any in-progress drag.
    ///
    /// The detent it rested at is kept as [`last_detent`](Self::last_detent).
    pub fn dismiss(&mut self) {
        if let Some(shown) = self.shown.take() {
            tracing::debug!(detent = ?shown.detent, "dismissed sheet");
            self.last_detent = Some(shown.detent);
        }
    }

    /// Follows the host's "is presented" binding.
    pub fn set_presented(&mut self, presented: bool) {
        if presented {
            self.present();
        } else {
            self.dismiss();
        }
    }

    /// Detent the sheet was resting at when it was last hidden.
    #[must_use]
    pub fn last_detent(&self) -> Option<Detent> {
        self.last_detent
    }

    // --- Inputs ---

    /// Current geometry snapshot.
    #[must_use]
    pub fn geometry(&self) -> &SheetGeometry {
        &self.geometry
    }

    /// Records the geometry from the host's latest layout pass.
    pub fn set_geometry(&mut self, geometry: SheetGeometry) {
        if self.geometry == geometry {
            return;
        }
        self.geometry = geometry;
        self.rebuild_table();
    }

    /// Current configuration.
    #[must_use]
    pub fn configuration(&self) -> &SheetConfiguration {
        &self.config
    }

    /// Replaces the whole configuration.
    ///
    /// If the current detent is no longer available, the sheet moves to the
    /// first available detent, or `Natural` if there are none.
    pub fn set_configuration(&mut self, config: SheetConfiguration) {
        let detents_changed = self.config.detents != config.detents;
        self.config = config;
        if detents_changed {
            self.detents_changed();
        }
    }

    /// Merges one preference published by the sheet content.
    pub fn apply_preference(&mut self, preference: SheetPreference) {
        let key = preference.key();
        self.config.apply(preference);
        if key == PreferenceKey::Detents {
            self.detents_changed();
        }
    }

    /// Drains `queue` and merges every pending preference.
    pub fn apply_preferences(&mut self, queue: &mut PreferenceQueue) {
        for preference in queue.drain() {
            self.apply_preference(preference);
        }
    }

    /// Records a drag sample: the cumulative translation since the drag began.
    ///
    /// Starts a drag session if none is active. Ignored while hidden.
    pub fn update_drag(&mut self, translation: Vec2) {
        let Some(shown) = self.shown.as_mut() else {
            return;
        };
        let drag = shown.drag.get_or_insert_with(DragSession::new);
        let live = drag.update_translation(translation);
        tracing::trace!(translation = live, "drag sample");
    }

    /// Records a drag sample as a pointer position.
    ///
    /// The first position of a drag becomes its start. Ignored while hidden.
    pub fn update_drag_position(&mut self, pos: Point) {
        let Some(shown) = self.shown.as_mut() else {
            return;
        };
        let drag = shown
            .drag
            .get_or_insert_with(|| DragSession::from_position(pos));
        let live = drag.update_position(pos);
        tracing::trace!(translation = live, "drag sample");
    }

    /// Ends the drag with its final cumulative translation.
    ///
    /// The release resolves to the detent nearest to the predicted offset,
    /// `spacing(current) + translation.y`; a detent at the same spacing as the
    /// current one resolves to the current one. If the sheet rested at the
    /// shortest spacing, interactive dismissal is allowed, and the drag covered
    /// at least [`DISMISS_THRESHOLD`](crate::DISMISS_THRESHOLD) of the container height,
    /// the sheet is dismissed instead. The resolved detent is committed before
    /// hiding, so it becomes [`last_detent`](Self::last_detent).
    pub fn end_drag(&mut self, translation: Vec2) -> DragOutcome {
        let Some(shown) = self.shown.as_mut() else {
            return DragOutcome::Unchanged;
        };
        let release = if translation.y.is_finite() {
            translation.y
        } else {
            shown.drag.map_or(0.0, |drag| drag.translation())
        };
        shown.drag = None;

        let resting = shown.detent;
        let resting_spacing = spacing(resting, &self.geometry);
        let predicted = resting_spacing + release;
        let Some(closest) = nearest(predicted, &self.table) else {
            tracing::debug!(predicted, "no detent to settle at");
            return DragOutcome::Unchanged;
        };
        // The resting detent may have lost its table entry to a coincident
        // detent; one resting at the same spacing is the same position.
        let target = if self.table.get(closest) == Some(resting_spacing) {
            resting
        } else {
            closest
        };

        let dismiss = self.config.dismiss_policy().should_dismiss(
            release,
            self.geometry.container_height(),
            resting_spacing,
            shortest(&self.table).and_then(|detent| self.table.get(detent)),
        );

        shown.detent = target;
        tracing::debug!(from = ?resting, to = ?target, predicted, "settled drag");
        if dismiss {
            self.dismiss();
            DragOutcome::Dismissed(target)
        } else {
            DragOutcome::Settled(target)
        }
    }

    /// Ends the drag using the last recorded sample as the release translation.
    pub fn release(&mut self) -> DragOutcome {
        let translation = self.live_translation();
        self.end_drag(Vec2::new(0.0, translation))
    }

    /// Abandons the in-progress drag without committing a detent.
    pub fn cancel_drag(&mut self) {
        if let Some(shown) = self.shown.as_mut() {
            if shown.drag.take().is_some() {
                tracing::debug!(detent = ?shown.detent, "cancelled drag");
            }
        }
    }

    // --- Outputs ---

    /// Snapshot of the presented sheet's state.
    #[must_use]
    pub fn state(&self) -> Option<SheetState> {
        self.shown.map(|shown| SheetState {
            current_detent: shown.detent,
            live_translation: shown.drag.map_or(0.0, |drag| drag.translation()),
        })
    }

    /// Detent the presented sheet rests at.
    #[must_use]
    pub fn current_detent(&self) -> Option<Detent> {
        self.shown.map(|shown| shown.detent)
    }

    /// Returns `true` while a drag session is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.shown.is_some_and(|shown| shown.drag.is_some())
    }

    /// Vertical translation of the in-progress drag; `0` when not dragging.
    #[must_use]
    pub fn live_translation(&self) -> f64 {
        self.state().map_or(0.0, |state| state.live_translation)
    }

    /// Offset at which to draw the sheet: `(0, spacing(current) + translation)`.
    ///
    /// `None` while hidden.
    #[must_use]
    pub fn render_offset(&self) -> Option<Vec2> {
        self.state().map(|state| {
            Vec2::new(
                0.0,
                spacing(state.current_detent, &self.geometry) + state.live_translation,
            )
        })
    }

    /// Spacing per available detent under the current geometry.
    #[must_use]
    pub fn spacing_table(&self) -> &SpacingTable {
        &self.table
    }

    /// Whether the drag indicator is shown.
    #[must_use]
    pub fn drag_indicator_visible(&self) -> bool {
        self.config.drag_indicator_visible()
    }

    /// Whether the passthrough background is shown.
    #[must_use]
    pub fn passthrough_background_visible(&self) -> bool {
        self.config.passthrough_background_visible()
    }

    /// Corner radius of the sheet background.
    #[must_use]
    pub fn corner_radius(&self) -> f64 {
        self.config.corner_radius
    }

    /// Shadow radius; `0` when the shadow is disabled.
    #[must_use]
    pub fn shadow_radius(&self) -> f64 {
        self.config.shadow_radius
    }

    /// Whether scrolling inside the sheet content should be disabled.
    ///
    /// True whenever the sheet top sits below the top of the available area.
    #[must_use]
    pub fn content_scroll_disabled(&self) -> bool {
        self.render_offset().is_some_and(|offset| offset.y > 0.0)
    }

    /// Height the sheet background must cover so it keeps reaching the
    /// container bottom while dragged: `container_height - translation`.
    #[must_use]
    pub fn background_extent(&self) -> f64 {
        self.geometry.container_height() - self.live_translation()
    }

    fn detents_changed(&mut self) {
        if let Some(shown) = self.shown.as_mut() {
            if !self.config.detents.contains(shown.detent) {
                let fallback = self.config.detents.first().unwrap_or(Detent::Natural);
                tracing::debug!(from = ?shown.detent, to = ?fallback, "current detent no longer available");
                shown.detent = fallback;
            }
        }
        self.rebuild_table();
    }

    fn rebuild_table(&mut self) {
        self.table = SpacingTable::new(&self.config.detents, &self.geometry);
    }
}

impl Default for SheetController {
    fn default() -> Self {
        Self::new(SheetConfiguration::default())
    }
}
