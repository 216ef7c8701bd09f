// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by the paginator.

use thiserror::Error;

/// Errors reported when validating a [`PaginatorConfig`](crate::PaginatorConfig).
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum PaginatorError {
    /// Windowed mode needs room for the current page and one neighbor.
    #[error("window size must be at least {min}, got {size}", min = crate::config::MIN_WINDOW_SIZE)]
    WindowTooSmall {
        /// The rejected window size.
        size: usize,
    },
    /// The page uniformity tolerance must be finite and non-negative.
    #[error("uniformity tolerance must be finite and non-negative, got {tolerance}")]
    InvalidTolerance {
        /// The rejected tolerance.
        tolerance: f64,
    },
}
