// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_sheet --heading-base-level=0

//! Understory Sheet: detent positioning and drag resolution for bottom sheets.
//!
//! A bottom sheet rests at one of several discrete heights ("detents") above
//! the bottom of its container. The user can drag it between those heights or
//! drag it down to dismiss it. This crate is the headless engine behind such a
//! sheet. It:
//!
//! - converts a [`Detent`] into a concrete vertical [`spacing`] for a given
//!   [`SheetGeometry`],
//! - tracks a drag with a [`DragSession`] and exposes the live render offset,
//! - resolves a release to the [`nearest`] detent in a deduplicated
//!   [`SpacingTable`],
//! - and decides through a [`DismissPolicy`] whether the release closes the
//!   sheet instead.
//!
//! [`SheetController`] ties these together and owns the only mutable state.
//!
//! This crate does **not** render, animate, or hit test. Host frameworks are
//! responsible for:
//!
//! - Reporting container and content measurements after layout via
//!   [`SheetController::set_geometry`].
//! - Forwarding configuration published by the sheet content as
//!   [`SheetPreference`] messages, optionally coalesced in a [`PreferenceQueue`].
//! - Feeding drag samples and the drag end into the controller.
//! - Drawing the sheet at [`SheetController::render_offset`] and flipping
//!   their "is presented" binding when a drag ends in [`DragOutcome::Dismissed`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Vec2;
//! use understory_sheet::{Detent, DragOutcome, SheetController, SheetGeometry, SheetPreference};
//!
//! let mut sheet = SheetController::default();
//! sheet.set_geometry(SheetGeometry::new(800.0, 0.0, 240.0));
//! sheet.apply_preference(SheetPreference::detents([Detent::Medium, Detent::Large]));
//! sheet.present();
//!
//! // Medium rests halfway down; it is also the shortest detent.
//! assert_eq!(sheet.render_offset(), Some(Vec2::new(0.0, 400.0)));
//! assert!(sheet.drag_indicator_visible());
//!
//! // A downward drag of a quarter of the container dismisses the sheet.
//! sheet.update_drag(Vec2::new(0.0, 200.0));
//! assert_eq!(sheet.release(), DragOutcome::Dismissed(Detent::Medium));
//! assert!(!sheet.is_presented());
//! ```
//!
//! ## Tie-breaking
//!
//! Candidates are ordered by variant (`Natural`, `Medium`, `Large`,
//! `Fraction`, `Height`) and then by parameter. When two detents rest at the
//! same spacing only the earlier one enters the [`SpacingTable`], and
//! [`nearest`] prefers the earlier entry when two are equally close. The
//! outcome never depends on the order the host declared the detents in.
//!
//! ## Logging
//!
//! The controller emits `tracing` events: `debug` for presentation changes,
//! detent commits and dismissal decisions, `trace` for drag samples and table
//! rebuilds. No subscriber is installed.
//!
//! ## Features
//!
//! - `std` (default): forwards to `kurbo`, `thiserror` and `tracing`.
//! - `libm`: `no_std` float math for `kurbo`.
//! - `serde`: `Serialize`/`Deserialize` for detents and configuration.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod controller;
mod detent;
mod dismiss;
mod drag;
mod geometry;
mod resolve;
mod spacing;

pub use config::{
    DEFAULT_CORNER_RADIUS, DEFAULT_SHADOW_RADIUS, PreferenceKey, PreferenceQueue,
    SheetConfiguration, SheetPreference, Visibility,
};
pub use controller::{DragOutcome, Presentation, SheetController, SheetState};
pub use detent::{Detent, DetentError, DetentSet};
pub use dismiss::{DISMISS_THRESHOLD, DismissPolicy};
pub use drag::DragSession;
pub use geometry::SheetGeometry;
pub use resolve::{nearest, shortest};
pub use spacing::{SpacingTable, spacing};
