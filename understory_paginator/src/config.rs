// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paginator configuration and validation.

use crate::error::PaginatorError;
use crate::host::PageSelector;
use crate::transition::Transition;

/// Smallest window that can hold the current page and one neighbor.
pub(crate) const MIN_WINDOW_SIZE: usize = 2;

/// Default number of mounted pages in windowed mode.
pub const DEFAULT_WINDOW_SIZE: usize = 3;

/// Configuration for a [`Paginator`](crate::Paginator).
///
/// All fields are fixed for the lifetime of the paginator. Use the `with_*`
/// setters to adjust the defaults:
///
/// ```
/// use understory_paginator::{PageSelector, PaginatorConfig};
///
/// let config = PaginatorConfig::default()
///     .with_selector(PageSelector::matching("li"))
///     .with_optimize_dom(true);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.window_size, 3);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PaginatorConfig {
    /// Which descendants count as pages.
    pub selector: PageSelector,
    /// Mount only a sliding window of pages instead of all of them.
    pub optimize_dom: bool,
    /// Number of mounted pages in windowed mode.
    pub window_size: usize,
    /// Page index before the first navigation.
    pub initial_index: usize,
    /// Transition for snapping back to the current page on scroll end.
    pub snap_transition: Transition,
    /// Transition for index changes that did not come from the UI.
    pub index_transition: Transition,
    /// Largest spacing difference between pages still treated as uniform.
    ///
    /// Windowed mode reads slot positions from the first pages, which is only
    /// exact when pages are evenly spaced.
    pub uniform_tolerance: f64,
}

impl Default for PaginatorConfig {
    fn default() -> Self {
        Self {
            selector: PageSelector::Children,
            optimize_dom: false,
            window_size: DEFAULT_WINDOW_SIZE,
            initial_index: 0,
            snap_transition: Transition::SNAP_TO_CURRENT,
            index_transition: Transition::INDEX_CHANGE,
            uniform_tolerance: 0.5,
        }
    }
}

impl PaginatorConfig {
    /// Sets [`selector`](Self::selector).
    #[must_use]
    pub fn with_selector(mut self, selector: PageSelector) -> Self {
        self.selector = selector;
        self
    }

    /// Sets [`optimize_dom`](Self::optimize_dom).
    #[must_use]
    pub fn with_optimize_dom(mut self, optimize_dom: bool) -> Self {
        self.optimize_dom = optimize_dom;
        self
    }

    /// Sets [`window_size`](Self::window_size).
    #[must_use]
    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    /// Sets [`initial_index`](Self::initial_index).
    #[must_use]
    pub fn with_initial_index(mut self, initial_index: usize) -> Self {
        self.initial_index = initial_index;
        self
    }

    /// Sets [`snap_transition`](Self::snap_transition).
    #[must_use]
    pub fn with_snap_transition(mut self, transition: Transition) -> Self {
        self.snap_transition = transition;
        self
    }

    /// Sets [`index_transition`](Self::index_transition).
    #[must_use]
    pub fn with_index_transition(mut self, transition: Transition) -> Self {
        self.index_transition = transition;
        self
    }

    /// Sets [`uniform_tolerance`](Self::uniform_tolerance).
    #[must_use]
    pub fn with_uniform_tolerance(mut self, tolerance: f64) -> Self {
        self.uniform_tolerance = tolerance;
        self
    }

    /// Checks that the configuration is usable.
    pub fn validate(&self) -> Result<(), PaginatorError> {
        if self.window_size < MIN_WINDOW_SIZE {
            return Err(PaginatorError::WindowTooSmall {
                size: self.window_size,
            });
        }
        if !self.uniform_tolerance.is_finite() || self.uniform_tolerance < 0.0 {
            return Err(PaginatorError::InvalidTolerance {
                tolerance: self.uniform_tolerance,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::{DEFAULT_WINDOW_SIZE, PaginatorConfig};
    use crate::error::PaginatorError;
    use crate::transition::Transition;

    #[test]
    fn defaults_match_paging_constants() {
        let config = PaginatorConfig::default();
        assert!(!config.optimize_dom);
        assert_eq!(config.window_size, DEFAULT_WINDOW_SIZE);
        assert_eq!(config.snap_transition, Transition::SNAP_TO_CURRENT);
        assert_eq!(config.index_transition, Transition::INDEX_CHANGE);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn tiny_window_is_rejected() {
        let config = PaginatorConfig::default().with_window_size(1);
        let err = config.validate().unwrap_err();
        assert_eq!(err, PaginatorError::WindowTooSmall { size: 1 });
        assert_eq!(err.to_string(), "window size must be at least 2, got 1");
    }

    #[test]
    fn bad_tolerance_is_rejected() {
        let config = PaginatorConfig::default().with_uniform_tolerance(-1.0);
        assert!(matches!(
            config.validate(),
            Err(PaginatorError::InvalidTolerance { .. })
        ));
        let config = PaginatorConfig::default().with_uniform_tolerance(f64::INFINITY);
        assert!(config.validate().is_err());
    }
}
