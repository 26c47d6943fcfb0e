// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Detents: the discrete heights at which a sheet can rest.
//!
//! A [`Detent`] is an immutable value. Two detents are equal iff they share a
//! variant and, for [`Detent::Fraction`] and [`Detent::Height`], an equal
//! parameter. Detents have no ordering of their own; [`DetentSet`] keeps the
//! order in which the host declared them.
//!
//! ```
//! use understory_sheet::{Detent, DetentSet};
//!
//! let detents: DetentSet = ["medium", "large", "fraction:0.25"]
//!     .iter()
//!     .map(|s| s.parse::<Detent>())
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//!
//! assert_eq!(detents.len(), 3);
//! assert_eq!(detents.first(), Some(Detent::Medium));
//! assert!(detents.contains(Detent::Fraction(0.25)));
//! ```

use core::fmt;
use core::hash::{Hash, Hasher};
use core::str::FromStr;

use smallvec::SmallVec;

/// A height where a sheet naturally rests.
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "serde_repr::DetentRepr", into = "serde_repr::DetentRepr")
)]
pub enum Detent {
    /// The sheet grows to the natural height of its content.
    #[default]
    Natural,
    /// Approximately half of the available height.
    Medium,
    /// The full available height.
    Large,
    /// A fraction of the available height, in `0..=1`.
    Fraction(f64),
    /// A fixed height in logical units, `>= 0`.
    Height(f64),
}

impl Detent {
    /// Creates a fractional detent, clamping `fraction` into `0..=1`.
    ///
    /// NaN clamps to `0`.
    #[must_use]
    pub fn fraction(fraction: f64) -> Self {
        let fraction = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        Self::Fraction(fraction)
    }

    /// Creates a fixed-height detent, clamping `height` to be non-negative.
    ///
    /// NaN clamps to `0`.
    #[must_use]
    pub fn height(height: f64) -> Self {
        let height = if height.is_nan() { 0.0 } else { height.max(0.0) };
        Self::Height(height)
    }

    /// Creates a fractional detent, rejecting values outside `0..=1`.
    pub fn try_fraction(fraction: f64) -> Result<Self, DetentError> {
        if (0.0..=1.0).contains(&fraction) {
            Ok(Self::Fraction(fraction))
        } else {
            Err(DetentError::FractionOutOfRange(fraction))
        }
    }

    /// Creates a fixed-height detent, rejecting negative or non-finite values.
    pub fn try_height(height: f64) -> Result<Self, DetentError> {
        if height.is_finite() && height >= 0.0 {
            Ok(Self::Height(height))
        } else {
            Err(DetentError::InvalidHeight(height))
        }
    }

    /// Declaration rank of the variant, used to break ties deterministically.
    ///
    /// `Natural < Medium < Large < Fraction < Height`.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Natural => 0,
            Self::Medium => 1,
            Self::Large => 2,
            Self::Fraction(_) => 3,
            Self::Height(_) => 4,
        }
    }

    fn parameter_bits(self) -> u64 {
        match self {
            // `-0.0 == 0.0`, so both must hash alike.
            Self::Fraction(v) | Self::Height(v) if v == 0.0 => 0,
            Self::Fraction(v) | Self::Height(v) => v.to_bits(),
            Self::Natural | Self::Medium | Self::Large => 0,
        }
    }
}

impl PartialEq for Detent {
    fn eq(&self, other: &Self) -> bool {
        self.rank() == other.rank() && self.parameter_bits() == other.parameter_bits()
    }
}

impl Eq for Detent {}

impl Hash for Detent {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank().hash(state);
        self.parameter_bits().hash(state);
    }
}

impl fmt::Display for Detent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Natural => f.write_str("natural"),
            Self::Medium => f.write_str("medium"),
            Self::Large => f.write_str("large"),
            Self::Fraction(v) => write!(f, "fraction:{v}"),
            Self::Height(v) => write!(f, "height:{v}"),
        }
    }
}

impl FromStr for Detent {
    type Err = DetentError;

    /// Parses the forms produced by [`Display`](fmt::Display):
    /// `natural`, `medium`, `large`, `fraction:<f>` and `height:<h>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (name, value) = match s.split_once(':') {
            Some((name, value)) => (name.trim(), Some(value.trim())),
            None => (s, None),
        };
        let number = |value: Option<&str>| -> Result<f64, DetentError> {
            value
                .and_then(|v| v.parse::<f64>().ok())
                .ok_or(DetentError::InvalidNumber)
        };
        match (name, value) {
            ("natural", None) => Ok(Self::Natural),
            ("medium", None) => Ok(Self::Medium),
            ("large", None) => Ok(Self::Large),
            ("fraction", v) => Self::try_fraction(number(v)?),
            ("height", v) => Self::try_height(number(v)?),
            _ => Err(DetentError::UnknownDetent),
        }
    }
}

/// Errors produced when constructing or parsing a [`Detent`].
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum DetentError {
    /// A fraction outside `0..=1`, or NaN.
    #[error("fraction {0} is outside 0..=1")]
    FractionOutOfRange(f64),
    /// A negative or non-finite height.
    #[error("height {0} must be finite and non-negative")]
    InvalidHeight(f64),
    /// The detent name is not one of the known variants.
    #[error("unknown detent")]
    UnknownDetent,
    /// The detent parameter is missing or is not a number.
    #[error("detent parameter is missing or not a number")]
    InvalidNumber,
}

/// The detents a sheet may rest at, unique and in declaration order.
///
/// Uniqueness is enforced by [`Detent`] equality; the first occurrence of a
/// duplicate wins. The set may be empty, in which case the sheet falls back to
/// [`Detent::Natural`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "SmallVec<[Detent; 4]>", into = "SmallVec<[Detent; 4]>")
)]
pub struct DetentSet {
    detents: SmallVec<[Detent; 4]>,
}

impl DetentSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            detents: SmallVec::new(),
        }
    }

    /// Inserts `detent` at the end unless it is already present.
    ///
    /// Returns `true` if the set changed.
    pub fn insert(&mut self, detent: Detent) -> bool {
        if self.contains(detent) {
            return false;
        }
        self.detents.push(detent);
        true
    }

    /// Returns `true` if `detent` is a member.
    #[must_use]
    pub fn contains(&self, detent: Detent) -> bool {
        self.detents.contains(&detent)
    }

    /// The first declared detent, if any.
    #[must_use]
    pub fn first(&self) -> Option<Detent> {
        self.detents.first().copied()
    }

    /// Number of detents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.detents.len()
    }

    /// Returns `true` if there are no detents.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.detents.is_empty()
    }

    /// Detents in declaration order.
    #[must_use]
    pub fn as_slice(&self) -> &[Detent] {
        &self.detents
    }

    /// Iterates detents in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = Detent> + '_ {
        self.detents.iter().copied()
    }
}

impl Default for DetentSet {
    /// `[Natural]`.
    fn default() -> Self {
        Self::from_iter([Detent::Natural])
    }
}

impl FromIterator<Detent> for DetentSet {
    fn from_iter<I: IntoIterator<Item = Detent>>(iter: I) -> Self {
        let mut set = Self::new();
        for detent in iter {
            set.insert(detent);
        }
        set
    }
}

impl From<SmallVec<[Detent; 4]>> for DetentSet {
    fn from(detents: SmallVec<[Detent; 4]>) -> Self {
        detents.into_iter().collect()
    }
}

impl From<DetentSet> for SmallVec<[Detent; 4]> {
    fn from(set: DetentSet) -> Self {
        set.detents
    }
}

impl<'a> IntoIterator for &'a DetentSet {
    type Item = Detent;
    type IntoIter = core::iter::Copied<core::slice::Iter<'a, Detent>>;

    fn into_iter(self) -> Self::IntoIter {
        self.detents.iter().copied()
    }
}

/// Wire form of [`Detent`]; parameters are validated on the way in.
#[cfg(feature = "serde")]
mod serde_repr {
    use super::{Detent, DetentError};

    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename = "Detent")]
    pub(super) enum DetentRepr {
        Natural,
        Medium,
        Large,
        Fraction(f64),
        Height(f64),
    }

    impl TryFrom<DetentRepr> for Detent {
        type Error = DetentError;

        fn try_from(repr: DetentRepr) -> Result<Self, Self::Error> {
            match repr {
                DetentRepr::Natural => Ok(Self::Natural),
                DetentRepr::Medium => Ok(Self::Medium),
                DetentRepr::Large => Ok(Self::Large),
                DetentRepr::Fraction(fraction) => Self::try_fraction(fraction),
                DetentRepr::Height(height) => Self::try_height(height),
            }
        }
    }

    impl From<Detent> for DetentRepr {
        fn from(detent: Detent) -> Self {
            match detent {
                Detent::Natural => Self::Natural,
                Detent::Medium => Self::Medium,
                Detent::Large => Self::Large,
                Detent::Fraction(fraction) => Self::Fraction(fraction),
                Detent::Height(height) => Self::Height(height),
            }
        }
    }
}
