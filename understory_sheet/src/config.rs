// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sheet configuration and the upward preference channel.
//!
//! Content presented inside a sheet configures it by publishing
//! [`SheetPreference`] messages into a [`PreferenceQueue`]. The queue keeps
//! only the last write per [`PreferenceKey`]; the controller drains it and
//! merges the result into its [`SheetConfiguration`].
//!
//! ```
//! use understory_sheet::{Detent, PreferenceQueue, SheetConfiguration, SheetPreference};
//!
//! let mut queue = PreferenceQueue::new();
//! queue.publish(SheetPreference::CornerRadius(Some(4.0)));
//! queue.publish(SheetPreference::detents([Detent::Medium, Detent::Large]));
//! queue.publish(SheetPreference::CornerRadius(Some(12.0)));
//! assert_eq!(queue.len(), 2);
//!
//! let mut config = SheetConfiguration::default();
//! for preference in queue.drain() {
//!     config.apply(preference);
//! }
//! assert_eq!(config.corner_radius, 12.0);
//! assert!(config.drag_indicator_visible());
//! ```

use alloc::vec::Vec;

use crate::detent::{Detent, DetentSet};
use crate::dismiss::DismissPolicy;

/// Corner radius used when none is configured.
pub const DEFAULT_CORNER_RADIUS: f64 = 8.0;

/// Shadow radius used when the shadow is enabled without an explicit radius.
pub const DEFAULT_SHADOW_RADIUS: f64 = 8.0;

/// Visibility of an optional sheet decoration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Visibility {
    /// Chosen from context.
    #[default]
    Automatic,
    /// Always shown.
    Visible,
    /// Never shown.
    Hidden,
}

/// Host- and content-supplied configuration of a sheet.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SheetConfiguration {
    /// Detents the sheet may rest at, in declaration order. Defaults to `[Natural]`.
    pub detents: DetentSet,
    /// Prevents dismissal by dragging the sheet down.
    pub interactive_dismiss_disabled: bool,
    /// Removes the background layer between the presenting view and the sheet.
    pub passthrough_background_disabled: bool,
    /// Visibility of the drag indicator.
    pub drag_indicator: Visibility,
    /// Corner radius of the sheet background.
    pub corner_radius: f64,
    /// Shadow radius; `0` disables the shadow.
    pub shadow_radius: f64,
}

impl Default for SheetConfiguration {
    fn default() -> Self {
        Self {
            detents: DetentSet::default(),
            interactive_dismiss_disabled: false,
            passthrough_background_disabled: false,
            drag_indicator: Visibility::Automatic,
            corner_radius: DEFAULT_CORNER_RADIUS,
            shadow_radius: 0.0,
        }
    }
}

impl SheetConfiguration {
    /// Merges a single preference, overwriting the field it names.
    ///
    /// Radii are clamped to be finite and non-negative.
    pub fn apply(&mut self, preference: SheetPreference) {
        match preference {
            SheetPreference::Detents(detents) => self.detents = detents,
            SheetPreference::InteractiveDismissDisabled(disabled) => {
                self.interactive_dismiss_disabled = disabled;
            }
            SheetPreference::PassthroughBackgroundDisabled(disabled) => {
                self.passthrough_background_disabled = disabled;
            }
            SheetPreference::DragIndicator(visibility) => self.drag_indicator = visibility,
            SheetPreference::CornerRadius(radius) => {
                self.corner_radius = radius.map_or(DEFAULT_CORNER_RADIUS, non_negative);
            }
            SheetPreference::ShadowRadius(radius) => {
                self.shadow_radius = radius.map_or(DEFAULT_SHADOW_RADIUS, non_negative);
            }
            SheetPreference::ShadowEnabled(enabled) => {
                self.shadow_radius = if enabled { DEFAULT_SHADOW_RADIUS } else { 0.0 };
            }
        }
    }

    /// Whether the drag indicator is shown.
    ///
    /// `Automatic` shows it only when there is more than one detent to drag between.
    #[must_use]
    pub fn drag_indicator_visible(&self) -> bool {
        match self.drag_indicator {
            Visibility::Visible => true,
            Visibility::Automatic => self.detents.len() > 1,
            Visibility::Hidden => false,
        }
    }

    /// Whether the passthrough background is shown.
    #[must_use]
    pub fn passthrough_background_visible(&self) -> bool {
        !self.passthrough_background_disabled
    }

    /// Whether the shadow is drawn.
    #[must_use]
    pub fn shadow_enabled(&self) -> bool {
        self.shadow_radius > 0.0
    }

    /// The dismissal policy implied by this configuration.
    #[must_use]
    pub fn dismiss_policy(&self) -> DismissPolicy {
        DismissPolicy::new(self.interactive_dismiss_disabled)
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

/// Identifies the configuration field a [`SheetPreference`] writes.
///
/// `ShadowRadius` and `ShadowEnabled` share [`PreferenceKey::Shadow`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PreferenceKey {
    /// Available detents.
    Detents,
    /// Interactive dismissal.
    InteractiveDismissDisabled,
    /// Passthrough background.
    PassthroughBackgroundDisabled,
    /// Drag indicator visibility.
    DragIndicator,
    /// Background corner radius.
    CornerRadius,
    /// Shadow radius.
    Shadow,
}

/// A configuration value published by content inside the sheet.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SheetPreference {
    /// Replaces the available detents.
    ///
    /// If the current detent is not among them, the sheet moves to the first
    /// one, or to [`Detent::Natural`] if the list is empty.
    Detents(DetentSet),
    /// Prevents or allows dismissal by dragging.
    InteractiveDismissDisabled(bool),
    /// Removes or restores the passthrough background.
    PassthroughBackgroundDisabled(bool),
    /// Sets the drag indicator visibility.
    DragIndicator(Visibility),
    /// Sets the corner radius, or restores [`DEFAULT_CORNER_RADIUS`] with `None`.
    CornerRadius(Option<f64>),
    /// Sets the shadow radius, or [`DEFAULT_SHADOW_RADIUS`] with `None`. `0` disables it.
    ShadowRadius(Option<f64>),
    /// Turns the shadow on at [`DEFAULT_SHADOW_RADIUS`], or off.
    ShadowEnabled(bool),
}

impl SheetPreference {
    /// Builds a [`SheetPreference::Detents`] from any detent sequence.
    pub fn detents(detents: impl IntoIterator<Item = Detent>) -> Self {
        Self::Detents(detents.into_iter().collect())
    }

    /// The field this preference writes.
    #[must_use]
    pub fn key(&self) -> PreferenceKey {
        match self {
            Self::Detents(_) => PreferenceKey::Detents,
            Self::InteractiveDismissDisabled(_) => PreferenceKey::InteractiveDismissDisabled,
            Self::PassthroughBackgroundDisabled(_) => PreferenceKey::PassthroughBackgroundDisabled,
            Self::DragIndicator(_) => PreferenceKey::DragIndicator,
            Self::CornerRadius(_) => PreferenceKey::CornerRadius,
            Self::ShadowRadius(_) | Self::ShadowEnabled(_) => PreferenceKey::Shadow,
        }
    }
}

/// Pending preferences, coalesced so that the last write per key wins.
///
/// Keys keep the position of their first publication.
#[derive(Clone, Debug, Default)]
pub struct PreferenceQueue {
    pending: Vec<SheetPreference>,
}

impl PreferenceQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Publishes a preference, replacing any pending one with the same key.
    pub fn publish(&mut self, preference: SheetPreference) {
        let key = preference.key();
        if let Some(slot) = self.pending.iter_mut().find(|p| p.key() == key) {
            *slot = preference;
        } else {
            self.pending.push(preference);
        }
    }

    /// Number of pending keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns `true` if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Removes and yields all pending preferences.
    pub fn drain(&mut self) -> alloc::vec::Drain<'_, SheetPreference> {
        self.pending.drain(..)
    }
}
