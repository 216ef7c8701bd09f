// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animation parameters passed to the host when scrolling to a page.

use core::fmt;
use core::time::Duration;

/// Timing function for an animated scroll.
///
/// The [`Display`](fmt::Display) form matches the CSS timing-function
/// keywords, so hosts backed by CSS transitions can forward it directly.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    /// Constant velocity.
    Linear,
    /// The CSS `ease` curve.
    Ease,
    /// Slow start.
    EaseIn,
    /// Slow finish.
    #[default]
    EaseOut,
    /// Slow start and finish.
    EaseInOut,
    /// Custom cubic Bézier with control points `(x1, y1, x2, y2)`.
    CubicBezier(f64, f64, f64, f64),
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => f.write_str("linear"),
            Self::Ease => f.write_str("ease"),
            Self::EaseIn => f.write_str("ease-in"),
            Self::EaseOut => f.write_str("ease-out"),
            Self::EaseInOut => f.write_str("ease-in-out"),
            Self::CubicBezier(x1, y1, x2, y2) => {
                write!(f, "cubic-bezier({x1}, {y1}, {x2}, {y2})")
            }
        }
    }
}

/// Duration and easing of an animated scroll.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transition {
    /// How long the animation runs.
    pub duration: Duration,
    /// Timing function applied over `duration`.
    pub easing: Easing,
}

impl Transition {
    /// Transition used when snapping back to the current page: 300ms, ease-out.
    pub const SNAP_TO_CURRENT: Self = Self::from_millis(300, Easing::EaseOut);

    /// Transition used when the index changes outside the UI: 350ms, ease-out.
    pub const INDEX_CHANGE: Self = Self::from_millis(350, Easing::EaseOut);

    /// Creates a transition.
    #[must_use]
    pub const fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }

    /// Creates a transition lasting `millis` milliseconds.
    #[must_use]
    pub const fn from_millis(millis: u64, easing: Easing) -> Self {
        Self::new(Duration::from_millis(millis), easing)
    }
}
