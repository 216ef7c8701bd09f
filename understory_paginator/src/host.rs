// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The capability surface a scrollable host exposes to a [`Paginator`](crate::Paginator).
//!
//! The host owns everything physical: element measurement, touch and flick
//! physics, and animated scroll transitions. The paginator only queries page
//! positions and issues commands back through [`ScrollHost`].

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Debug;

use kurbo::{Point, Size};

use crate::paginator::IndexChange;
use crate::transition::Transition;

/// Scroll axis of the host surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    /// Pages are laid out left to right.
    #[default]
    Horizontal,
    /// Pages are laid out top to bottom.
    Vertical,
}

impl Axis {
    /// Returns the coordinate of `pt` along this axis.
    #[must_use]
    pub fn coord(self, pt: Point) -> f64 {
        match self {
            Self::Horizontal => pt.x,
            Self::Vertical => pt.y,
        }
    }

    /// Returns the extent of `size` along this axis.
    #[must_use]
    pub fn extent(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }
}

/// Which descendants of the host content count as pages.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PageSelector {
    /// Every direct child of the content container is a page.
    #[default]
    Children,
    /// Only descendants matching the given host-defined selector are pages.
    Matching(String),
}

impl PageSelector {
    /// Convenience constructor for [`PageSelector::Matching`].
    #[must_use]
    pub fn matching(selector: impl Into<String>) -> Self {
        Self::Matching(selector.into())
    }
}

/// Queries and commands a paginated scroll surface must support.
///
/// `Page` is the host's handle for a page element. Handles are compared with
/// `PartialEq` to decide whether a page is already mounted, so two handles
/// must compare equal exactly when they refer to the same element.
///
/// The mount methods ([`clear_pages`](Self::clear_pages),
/// [`append_page`](Self::append_page), [`prepend_page`](Self::prepend_page),
/// [`remove_page`](Self::remove_page)) are only called when the paginator runs
/// in windowed mode.
pub trait ScrollHost {
    /// Handle for a page element.
    type Page: Clone + PartialEq + Debug;

    /// Current scroll axis.
    fn axis(&self) -> Axis;

    /// Measured size of the scrollable content.
    fn content_size(&self) -> Size;

    /// Returns the pages selected by `selector`, in document order.
    fn query_pages(&self, selector: &PageSelector) -> Vec<Self::Page>;

    /// Leading-edge position of `page` within the content (left, top).
    fn page_origin(&self, page: &Self::Page) -> Point;

    /// Raw scroll coordinate along `axis`.
    fn scroll_position(&self, axis: Axis) -> f64;

    /// Animates the scroll coordinate along `axis` to `target`.
    fn animate_scroll(&mut self, axis: Axis, target: f64, transition: Transition);

    /// Cancels any in-flight scroll animation or pending timer.
    fn cancel_scroll_animation(&mut self);

    /// Sets the raw scroll coordinate along `axis` without animating.
    fn set_scroll_position(&mut self, axis: Axis, value: f64);

    /// Removes every page from the content container.
    fn clear_pages(&mut self);

    /// Mounts `page` after the last mounted page.
    fn append_page(&mut self, page: Self::Page);

    /// Mounts `page` before the first mounted page.
    fn prepend_page(&mut self, page: Self::Page);

    /// Unmounts `page`.
    fn remove_page(&mut self, page: &Self::Page);

    /// Adds the "paged" marker to the container.
    fn mark_paged(&mut self);

    /// Called whenever the page count is re-measured.
    fn total_changed(&mut self, _total: usize) {}

    /// Called after every committed index change.
    fn index_changed(&mut self, _change: IndexChange) {}
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size};

    use super::{Axis, PageSelector};

    #[test]
    fn axis_picks_matching_component() {
        let pt = Point::new(3.0, 7.0);
        assert_eq!(Axis::Horizontal.coord(pt), 3.0);
        assert_eq!(Axis::Vertical.coord(pt), 7.0);

        let size = Size::new(320.0, 480.0);
        assert_eq!(Axis::Horizontal.extent(size), 320.0);
        assert_eq!(Axis::Vertical.extent(size), 480.0);
    }

    #[test]
    fn selector_defaults_to_children() {
        assert_eq!(PageSelector::default(), PageSelector::Children);
        assert_eq!(
            PageSelector::matching(".slide"),
            PageSelector::Matching(".slide".into())
        );
    }
}
