// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry snapshot: the container and content measurements a host reports
//! after layout.

use kurbo::Size;

/// Layout measurements reported by the host for one layout pass.
///
/// The engine never measures layout itself. All values are clamped to be
/// finite and non-negative on construction; negative input is a contract
/// violation from the host.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SheetGeometry {
    container_height: f64,
    bottom_safe_inset: f64,
    content_height: f64,
}

impl SheetGeometry {
    /// Creates a snapshot from the container height, the bottom safe-area
    /// inset and the natural height of the sheet content.
    #[must_use]
    pub fn new(container_height: f64, bottom_safe_inset: f64, content_height: f64) -> Self {
        Self {
            container_height: sanitize(container_height),
            bottom_safe_inset: sanitize(bottom_safe_inset),
            content_height: sanitize(content_height),
        }
    }

    /// Creates a snapshot from container and content sizes; widths are ignored.
    #[must_use]
    pub fn from_sizes(container: Size, bottom_safe_inset: f64, content: Size) -> Self {
        Self::new(container.height, bottom_safe_inset, content.height)
    }

    /// Height of the container the sheet is presented in.
    #[must_use]
    pub fn container_height(&self) -> f64 {
        self.container_height
    }

    /// Bottom safe-area inset of the container.
    #[must_use]
    pub fn bottom_safe_inset(&self) -> f64 {
        self.bottom_safe_inset
    }

    /// Natural height of the sheet content.
    #[must_use]
    pub fn content_height(&self) -> f64 {
        self.content_height
    }

    /// Height available to the sheet: container height minus the bottom inset.
    ///
    /// May be negative when the inset exceeds the container.
    #[must_use]
    pub fn available_height(&self) -> f64 {
        self.container_height - self.bottom_safe_inset
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}
