// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sliding window of mounted pages for windowed (DOM-virtualized) mode.
//!
//! [`PageWindow`] keeps the full page sequence and the logical indices of the
//! pages currently mounted in the host. It never touches the host itself:
//! [`PageWindow::reconcile`] returns a [`WindowUpdate`] describing the mount
//! operations the caller must replay, in order.
//!
//! ## Minimal example
//!
//! ```
//! use understory_paginator::{PageWindow, WindowOp};
//!
//! let mut window = PageWindow::seed(vec!["a", "b", "c", "d", "e"], 1, 3);
//! assert_eq!(window.mounted(), &[1, 2, 3]);
//!
//! // Index moved forward from 2 to 3: page 4 is appended, page 1 evicted.
//! let update = window.reconcile(2, 3);
//! assert_eq!(update.ops(), &[WindowOp::Append(4), WindowOp::Evict(1)]);
//! assert_eq!(window.mounted(), &[2, 3, 4]);
//! ```

use alloc::vec::Vec;

use smallvec::SmallVec;

/// Direction of travel between two committed indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The index increased.
    Forward,
    /// The index decreased.
    Backward,
    /// The index did not change.
    Stationary,
}

impl Direction {
    /// Direction of travel from `previous` to `current`.
    #[must_use]
    pub fn between(previous: usize, current: usize) -> Self {
        match previous.cmp(&current) {
            core::cmp::Ordering::Less => Self::Forward,
            core::cmp::Ordering::Greater => Self::Backward,
            core::cmp::Ordering::Equal => Self::Stationary,
        }
    }
}

/// One mount operation to replay against the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WindowOp {
    /// Mount the page at this logical index after the last mounted page.
    Append(usize),
    /// Mount the page at this logical index before the first mounted page.
    Prepend(usize),
    /// Unmount the page at this logical index.
    Evict(usize),
    /// Unmount every page.
    Clear,
}

/// Ordered mount operations produced by [`PageWindow::reconcile`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WindowUpdate {
    ops: SmallVec<[WindowOp; 4]>,
}

impl WindowUpdate {
    /// Operations in the order they must be applied.
    #[must_use]
    pub fn ops(&self) -> &[WindowOp] {
        &self.ops
    }

    /// Returns `true` if nothing needs to change in the host.
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.ops.is_empty()
    }

    /// Returns `true` if mounted pages moved to a different slot.
    ///
    /// Prepending, evicting and clearing all shift the remaining pages, so
    /// callers re-anchor the host's scroll position whenever this is set.
    /// An append alone leaves every existing slot in place.
    #[must_use]
    pub fn shifts_content(&self) -> bool {
        self.ops.iter().any(|op| {
            matches!(
                op,
                WindowOp::Prepend(_) | WindowOp::Evict(_) | WindowOp::Clear
            )
        })
    }
}

/// A bounded, contiguous run of mounted pages over a full page sequence.
#[derive(Clone, Debug)]
pub struct PageWindow<P> {
    pages: Vec<P>,
    mounted: SmallVec<[usize; 4]>,
    capacity: usize,
}

impl<P> PageWindow<P> {
    /// Creates a window over `pages` mounting up to `capacity` pages from `start`.
    ///
    /// Fewer pages are mounted when the sequence ends early; the run is never
    /// padded or shifted backwards.
    #[must_use]
    pub fn seed(pages: Vec<P>, start: usize, capacity: usize) -> Self {
        let end = start.saturating_add(capacity).min(pages.len());
        let mounted = (start.min(end)..end).collect();
        Self {
            pages,
            mounted,
            capacity,
        }
    }

    /// The full page sequence, in document order.
    #[must_use]
    pub fn pages(&self) -> &[P] {
        &self.pages
    }

    /// Page handle at a logical index.
    #[must_use]
    pub fn page(&self, index: usize) -> Option<&P> {
        self.pages.get(index)
    }

    /// Logical indices of the mounted pages, in document order.
    #[must_use]
    pub fn mounted(&self) -> &[usize] {
        &self.mounted
    }

    /// Mounted page handles, in document order.
    pub fn mounted_pages(&self) -> impl Iterator<Item = &P> + '_ {
        self.mounted.iter().filter_map(|&i| self.pages.get(i))
    }

    /// Maximum number of mounted pages.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if the page at `index` is mounted.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.mounted.contains(&index)
    }

    /// Position of the page at `index` within the mounted run.
    #[must_use]
    pub fn slot_of(&self, index: usize) -> Option<usize> {
        self.mounted.iter().position(|&i| i == index)
    }

    /// Brings the window in line with a committed move from `previous` to `current`.
    ///
    /// A single step mounts the next page in the direction of travel and
    /// evicts from the opposite end once the run exceeds capacity. If
    /// `current` has left the window, or the page to mount would not be
    /// adjacent to it, the window is rebuilt around `current`.
    pub fn reconcile(&mut self, previous: usize, current: usize) -> WindowUpdate {
        let mut update = WindowUpdate::default();
        let direction = Direction::between(previous, current);
        if direction == Direction::Stationary || current >= self.pages.len() {
            return update;
        }
        if !self.contains(current) {
            self.reseed(current, &mut update);
            return update;
        }

        match direction {
            Direction::Forward => {
                let candidate = current + 1;
                if candidate < self.pages.len() && !self.contains(candidate) {
                    if self.mounted.last().map(|&last| last + 1) != Some(candidate) {
                        self.reseed(current, &mut update);
                        return update;
                    }
                    self.mounted.push(candidate);
                    update.ops.push(WindowOp::Append(candidate));
                }
                while self.mounted.len() > self.capacity {
                    let evicted = self.mounted.remove(0);
                    update.ops.push(WindowOp::Evict(evicted));
                }
            }
            Direction::Backward => {
                if let Some(candidate) = current.checked_sub(1)
                    && !self.contains(candidate)
                {
                    if self.mounted.first().map(|&first| first.checked_sub(1))
                        != Some(Some(candidate))
                    {
                        self.reseed(current, &mut update);
                        return update;
                    }
                    self.mounted.insert(0, candidate);
                    update.ops.push(WindowOp::Prepend(candidate));
                }
                while self.mounted.len() > self.capacity {
                    if let Some(evicted) = self.mounted.pop() {
                        update.ops.push(WindowOp::Evict(evicted));
                    }
                }
            }
            Direction::Stationary => {}
        }
        update
    }

    /// Remounts a run with `current` in the second slot where the sequence allows.
    fn reseed(&mut self, current: usize, update: &mut WindowUpdate) {
        let len = self.pages.len();
        let count = self.capacity.min(len);
        let start = current.saturating_sub(1).min(len - count);
        self.mounted.clear();
        self.mounted.extend(start..start + count);
        update.ops.push(WindowOp::Clear);
        update
            .ops
            .extend(self.mounted.iter().map(|&i| WindowOp::Append(i)));
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::{Direction, PageWindow, WindowOp};

    fn pages(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn direction_between_indices() {
        assert_eq!(Direction::between(1, 2), Direction::Forward);
        assert_eq!(Direction::between(2, 1), Direction::Backward);
        assert_eq!(Direction::between(2, 2), Direction::Stationary);
    }

    #[test]
    fn seed_mounts_from_start_without_padding() {
        let window = PageWindow::seed(pages(5), 0, 3);
        assert_eq!(window.mounted(), &[0, 1, 2]);

        let window = PageWindow::seed(pages(5), 3, 3);
        assert_eq!(window.mounted(), &[3, 4]);

        let window = PageWindow::seed(pages(0), 0, 3);
        assert!(window.mounted().is_empty());
    }

    #[test]
    fn forward_step_appends_and_evicts_head() {
        let mut window = PageWindow::seed(pages(5), 1, 3);
        let update = window.reconcile(2, 3);
        assert_eq!(update.ops(), &[WindowOp::Append(4), WindowOp::Evict(1)]);
        assert!(update.shifts_content());
        assert_eq!(window.mounted(), &[2, 3, 4]);
        assert_eq!(window.slot_of(3), Some(1));
    }

    #[test]
    fn forward_step_with_candidate_mounted_is_unchanged() {
        let mut window = PageWindow::seed(pages(5), 0, 3);
        let update = window.reconcile(0, 1);
        assert!(update.is_unchanged());
        assert_eq!(window.mounted(), &[0, 1, 2]);
    }

    #[test]
    fn forward_step_at_sequence_end_keeps_window() {
        let mut window = PageWindow::seed(pages(5), 2, 3);
        let update = window.reconcile(3, 4);
        assert!(update.is_unchanged());
        assert_eq!(window.mounted(), &[2, 3, 4]);
    }

    #[test]
    fn backward_step_prepends_and_evicts_tail() {
        let mut window = PageWindow::seed(pages(5), 2, 3);
        let update = window.reconcile(3, 2);
        assert_eq!(update.ops(), &[WindowOp::Prepend(1), WindowOp::Evict(4)]);
        assert_eq!(window.mounted(), &[1, 2, 3]);
    }

    #[test]
    fn backward_step_at_sequence_start_keeps_window() {
        let mut window = PageWindow::seed(pages(5), 0, 3);
        let update = window.reconcile(1, 0);
        assert!(update.is_unchanged());
        assert_eq!(window.mounted(), &[0, 1, 2]);
    }

    #[test]
    fn backward_step_into_short_window_grows_without_eviction() {
        let mut window = PageWindow::seed(pages(5), 4, 3);
        assert_eq!(window.mounted(), &[4]);
        let update = window.reconcile(4, 3);
        // Page 3 is not mounted yet, so the window is rebuilt around it.
        assert_eq!(
            update.ops(),
            &[
                WindowOp::Clear,
                WindowOp::Append(2),
                WindowOp::Append(3),
                WindowOp::Append(4)
            ]
        );
        assert_eq!(window.mounted(), &[2, 3, 4]);
    }

    #[test]
    fn backward_prepend_without_eviction_shifts_content() {
        let mut window = PageWindow::seed(pages(5), 3, 3);
        assert_eq!(window.mounted(), &[3, 4]);
        let update = window.reconcile(4, 3);
        assert_eq!(update.ops(), &[WindowOp::Prepend(2)]);
        assert!(update.shifts_content());
        assert_eq!(window.slot_of(3), Some(1));
    }

    #[test]
    fn jump_rebuilds_window_around_current() {
        let mut window = PageWindow::seed(pages(10), 0, 3);
        let update = window.reconcile(1, 7);
        assert_eq!(update.ops()[0], WindowOp::Clear);
        assert_eq!(window.mounted(), &[6, 7, 8]);
        assert!(window.contains(7));
    }

    #[test]
    fn stationary_reconcile_is_a_no_op() {
        let mut window = PageWindow::seed(pages(5), 1, 3);
        assert!(window.reconcile(2, 2).is_unchanged());
        assert_eq!(window.mounted(), &[1, 2, 3]);
    }

    #[test]
    fn window_never_exceeds_capacity_over_a_sweep() {
        let mut window = PageWindow::seed(pages(8), 0, 3);
        let mut previous = 0;
        let path = vec![1, 2, 3, 4, 5, 6, 7, 6, 5, 4, 3, 2, 1, 0];
        for current in path {
            let _ = window.reconcile(previous, current);
            assert!(window.mounted().len() <= 3);
            assert!(window.contains(current));
            assert!(
                window.mounted().windows(2).all(|w| w[1] == w[0] + 1),
                "mounted run must stay contiguous"
            );
            previous = current;
        }
    }

    #[test]
    fn mounted_pages_resolve_handles() {
        let window = PageWindow::seed(vec!["a", "b", "c", "d"], 1, 3);
        let mounted: Vec<_> = window.mounted_pages().copied().collect();
        assert_eq!(mounted, vec!["b", "c", "d"]);
        assert_eq!(window.page(0), Some(&"a"));
    }
}
