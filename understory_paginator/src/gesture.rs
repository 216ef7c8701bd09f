// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture signals from the host and the page decisions derived from them.
//!
//! The decision functions here are pure: they look at the signal plus the
//! current index and page count, and say what the paginator should do.

/// A one-page move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageStep {
    /// Advance to the next page.
    Next,
    /// Retreat to the previous page.
    Prev,
}

/// Reply to the host's inertial-continuation hook.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlickDisposition {
    /// The host must not run its own inertial animation.
    SuppressDefault,
}

/// Flags the host reports when a drag gesture is released.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct GestureEnd {
    /// The host is still running a flick.
    pub flicking: bool,
    /// The drag crossed the halfway distance toward a neighboring page.
    pub halfway: bool,
    /// The drag moved toward higher page indices.
    pub forward: bool,
}

/// A scroll-end signal from the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScrollEnd {
    /// The user released a drag.
    GestureMoveEnd(GestureEnd),
    /// Scrolling came to rest on its own, typically after an animation.
    Settled,
}

/// What the paginator does in response to a [`ScrollEnd`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScrollEndAction {
    /// Commit a one-page move.
    Step(PageStep),
    /// Animate back to the current page without changing the index.
    SnapToCurrent,
    /// Commit window bookkeeping for the last transition.
    Settle,
    /// Nothing to do; a flick is in charge.
    Ignore,
}

/// Picks the page move for a flick with the given axis velocity.
///
/// Positive velocity is motion toward higher page indices. Zero or non-finite
/// velocity, and motion against a sequence boundary, produce no move.
#[must_use]
pub fn flick_step(velocity: f64, index: usize, total: usize) -> Option<PageStep> {
    if velocity == 0.0 || !velocity.is_finite() {
        return None;
    }
    if velocity > 0.0 {
        (index + 1 < total).then_some(PageStep::Next)
    } else {
        (index > 0).then_some(PageStep::Prev)
    }
}

/// Resolves a scroll-end signal into an action.
///
/// A release past halfway advances when it was forward and a next page
/// exists, otherwise retreats when a previous page exists, and only snaps
/// back when neither move is possible.
#[must_use]
pub fn resolve_scroll_end(signal: ScrollEnd, index: usize, total: usize) -> ScrollEndAction {
    match signal {
        ScrollEnd::Settled => ScrollEndAction::Settle,
        ScrollEnd::GestureMoveEnd(end) if end.flicking => ScrollEndAction::Ignore,
        ScrollEnd::GestureMoveEnd(end) if !end.halfway => ScrollEndAction::SnapToCurrent,
        ScrollEnd::GestureMoveEnd(end) => {
            if end.forward && index + 1 < total {
                ScrollEndAction::Step(PageStep::Next)
            } else if index > 0 {
                ScrollEndAction::Step(PageStep::Prev)
            } else {
                ScrollEndAction::SnapToCurrent
            }
        }
    }
}
