// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_paginator --heading-base-level=0

//! Understory Paginator: discrete page navigation for scrollable surfaces.
//!
//! This crate turns the continuous scroll and flick signals of a scrollable
//! host into discrete page transitions. It focuses on:
//!
//! - Page offsets: measuring each page's leading edge along the scroll axis
//!   ([`OffsetTable`]).
//! - Gesture decisions: flick velocity and drag release flags mapped to
//!   next/previous/snap-back ([`flick_step`], [`resolve_scroll_end`]).
//! - Navigation: [`Paginator::next`], [`Paginator::prev`],
//!   [`Paginator::scroll_to`] and [`Paginator::snap_to_current`].
//! - Windowed mode: optionally keeping only a small sliding run of pages
//!   mounted ([`PageWindow`]), with scroll targets remapped to window slots.
//!
//! It does **not** own touch physics, velocity tracking, or animation. Hosts
//! implement [`ScrollHost`] to expose measurements and accept commands, and
//! forward their lifecycle signals to the `on_*` methods of [`Paginator`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use understory_paginator::{
//!     Axis, GestureEnd, PageSelector, Paginator, PaginatorConfig, ScrollEnd, ScrollHost,
//!     Transition,
//! };
//!
//! /// Five 320px pages side by side.
//! #[derive(Default)]
//! struct Strip {
//!     target: f64,
//! }
//!
//! impl ScrollHost for Strip {
//!     type Page = usize;
//!     fn axis(&self) -> Axis { Axis::Horizontal }
//!     fn content_size(&self) -> Size { Size::new(1600.0, 480.0) }
//!     fn query_pages(&self, _: &PageSelector) -> Vec<usize> { (0..5).collect() }
//!     fn page_origin(&self, page: &usize) -> Point { Point::new(320.0 * *page as f64, 0.0) }
//!     fn scroll_position(&self, _: Axis) -> f64 { self.target }
//!     fn animate_scroll(&mut self, _: Axis, target: f64, _: Transition) { self.target = target; }
//!     fn cancel_scroll_animation(&mut self) {}
//!     fn set_scroll_position(&mut self, _: Axis, value: f64) { self.target = value; }
//!     fn clear_pages(&mut self) {}
//!     fn append_page(&mut self, _: usize) {}
//!     fn prepend_page(&mut self, _: usize) {}
//!     fn remove_page(&mut self, _: &usize) {}
//!     fn mark_paged(&mut self) {}
//! }
//!
//! let mut host = Strip::default();
//! let mut pages = Paginator::new(PaginatorConfig::default()).unwrap();
//! pages.on_dimensions_changed(&mut host);
//! assert_eq!(pages.total(), 5);
//!
//! // The user drags past the halfway point toward the next page and lets go.
//! let release = GestureEnd { flicking: false, halfway: true, forward: true };
//! pages.on_scroll_end(&mut host, ScrollEnd::GestureMoveEnd(release));
//! assert_eq!(pages.index(), 1);
//! assert_eq!(host.target, 320.0);
//! ```
//!
//! ## Windowed mode
//!
//! With [`PaginatorConfig::optimize_dom`] set, only
//! [`PaginatorConfig::window_size`] pages (three by default) stay mounted.
//! After each settled transition the window mounts the next page in the
//! direction of travel and evicts one from the far end, re-anchoring the host's
//! scroll position so the visible page does not move. Slot positions are read
//! from the first pages of the full layout, so pages are expected to be evenly
//! spaced; a warning is logged when they are not.
//!
//! ## Logging
//!
//! Transitions and window updates are reported through [`tracing`] at `debug`
//! and `trace` level; clamped indices and uneven windowed layouts at `warn`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod error;
mod gesture;
mod host;
mod offsets;
mod paginator;
mod transition;
mod window;

pub use config::{DEFAULT_WINDOW_SIZE, PaginatorConfig};
pub use error::PaginatorError;
pub use gesture::{
    FlickDisposition, GestureEnd, PageStep, ScrollEnd, ScrollEndAction, flick_step,
    resolve_scroll_end,
};
pub use host::{Axis, PageSelector, ScrollHost};
pub use offsets::OffsetTable;
pub use paginator::{IndexChange, IndexSource, Paginator, PaginatorDebugInfo};
pub use transition::{Easing, Transition};
pub use window::{Direction, PageWindow, WindowOp, WindowUpdate};
