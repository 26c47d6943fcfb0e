// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag session: the live vertical translation of one in-progress drag.
//!
//! ## Usage
//!
//! 1) Create a session when the drag starts, with [`DragSession::new`] if the
//!    host reports cumulative translations, or [`DragSession::from_position`]
//!    if it reports raw pointer positions.
//! 2) Feed each sample with [`DragSession::update_translation`] or
//!    [`DragSession::update_position`].
//! 3) Drop the session when the drag ends or is cancelled.
//!
//! Only the vertical axis is tracked; horizontal movement is discarded.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_sheet::DragSession;
//!
//! let mut drag = DragSession::from_position(Point::new(10.0, 20.0));
//! assert_eq!(drag.update_position(Point::new(40.0, 65.0)), 45.0);
//! assert_eq!(drag.offset(), Vec2::new(0.0, 45.0));
//! ```

use kurbo::{Point, Vec2};

/// Tracks the cumulative vertical translation of a single drag.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragSession {
    start_pos: Point,
    translation: f64,
}

impl DragSession {
    /// Starts a session whose samples are cumulative translations.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session whose samples are pointer positions, relative to `start`.
    #[must_use]
    pub fn from_position(start: Point) -> Self {
        Self {
            start_pos: start,
            translation: 0.0,
        }
    }

    /// Records the cumulative translation since the drag started.
    ///
    /// Each sample replaces the previous one; it is not a delta. Non-finite
    /// samples are ignored. Returns the current vertical translation.
    pub fn update_translation(&mut self, translation: Vec2) -> f64 {
        if translation.y.is_finite() {
            self.translation = translation.y;
        }
        self.translation
    }

    /// Records a pointer position, measuring translation from the start position.
    ///
    /// Returns the current vertical translation.
    pub fn update_position(&mut self, pos: Point) -> f64 {
        self.update_translation(pos - self.start_pos)
    }

    /// Current vertical translation.
    #[must_use]
    pub fn translation(&self) -> f64 {
        self.translation
    }

    /// Current translation as a vector with a zero horizontal component.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        Vec2::new(0.0, self.translation)
    }
}
