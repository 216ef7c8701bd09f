// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The paginator state machine.

use alloc::vec::Vec;
use core::fmt::Debug;

use tracing::{debug, trace, warn};

use crate::config::PaginatorConfig;
use crate::error::PaginatorError;
use crate::gesture::{
    FlickDisposition, PageStep, ScrollEnd, ScrollEndAction, flick_step, resolve_scroll_end,
};
use crate::host::ScrollHost;
use crate::offsets::OffsetTable;
use crate::transition::Transition;
use crate::window::{Direction, PageWindow, WindowOp};

/// Where an index change came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IndexSource {
    /// Navigation calls, gesture decisions, and external `set_index` calls.
    Api,
    /// The host reporting a page it already shows; no scroll is issued.
    Ui,
}

/// A committed change of the current page index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IndexChange {
    /// Index before the change.
    pub previous: usize,
    /// Index after the change.
    pub current: usize,
    /// Origin of the change.
    pub source: IndexSource,
}

impl IndexChange {
    /// Returns `true` if the host must be scrolled to the new page.
    #[must_use]
    pub fn needs_ui_sync(&self) -> bool {
        self.source == IndexSource::Api
    }
}

/// Discrete page navigation on top of a scrollable host.
///
/// A `Paginator` holds the current page index, the measured page offsets and,
/// in windowed mode, the run of mounted pages. It reacts to host signals
/// (`on_*` methods) and exposes navigation calls; both drive the host through
/// a [`ScrollHost`] passed in by the caller.
///
/// The invariant `index < total` holds after every committed transition
/// whenever `total > 0`.
#[derive(Clone, Debug)]
pub struct Paginator<P> {
    config: PaginatorConfig,
    index: usize,
    previous_index: usize,
    total: usize,
    offsets: OffsetTable,
    window: Option<PageWindow<P>>,
}

impl<P: Clone + PartialEq + Debug> Paginator<P> {
    /// Creates a paginator after validating `config`.
    ///
    /// No pages are known until the first [`recalculate`](Self::recalculate).
    pub fn new(config: PaginatorConfig) -> Result<Self, PaginatorError> {
        config.validate()?;
        let index = config.initial_index;
        Ok(Self {
            config,
            index,
            previous_index: index,
            total: 0,
            offsets: OffsetTable::new(),
            window: None,
        })
    }

    /// The configuration this paginator was built with.
    #[must_use]
    pub fn config(&self) -> &PaginatorConfig {
        &self.config
    }

    /// Current page index.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Index at the last settled transition.
    #[must_use]
    pub fn previous_index(&self) -> usize {
        self.previous_index
    }

    /// Number of pages found by the last recalculation.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Page offsets from the last recalculation.
    #[must_use]
    pub fn offsets(&self) -> &OffsetTable {
        &self.offsets
    }

    /// Mounted page window, present only in windowed mode after a recalculation.
    #[must_use]
    pub fn window(&self) -> Option<&PageWindow<P>> {
        self.window.as_ref()
    }

    /// Returns `true` if windowed mode is enabled.
    #[must_use]
    pub fn is_windowed(&self) -> bool {
        self.config.optimize_dom
    }

    /// Direction of the transition in progress, relative to the last settle.
    #[must_use]
    pub fn direction(&self) -> Direction {
        Direction::between(self.previous_index, self.index)
    }

    /// Handles the host's dimension-changed signal.
    pub fn on_dimensions_changed<H: ScrollHost<Page = P>>(&mut self, host: &mut H) {
        self.recalculate(host);
    }

    /// Handles the host's render-complete signal.
    pub fn on_render<H: ScrollHost<Page = P>>(&mut self, host: &mut H) {
        host.mark_paged();
    }

    /// Re-measures pages and rebuilds the offset table.
    ///
    /// In windowed mode every known page is remounted first so the full layout
    /// can be measured, then the window is reseeded from the current index.
    /// Pages the host mounted since the last recalculation are kept after the
    /// known pages, and mounted pages the host removed are forgotten.
    /// Unmounted pages cannot be observed, so they stay in the sequence.
    pub fn recalculate<H: ScrollHost<Page = P>>(&mut self, host: &mut H) {
        let axis = host.axis();
        if let Some(window) = self.window.take() {
            let present = host.query_pages(&self.config.selector);
            let mounted: Vec<&P> = window.mounted_pages().collect();
            let known = window
                .pages()
                .iter()
                .filter(|page| present.contains(*page) || !mounted.contains(page));
            let added = present.iter().filter(|page| !window.pages().contains(*page));
            let sequence: Vec<P> = known.chain(added).cloned().collect();
            trace!(
                known = window.pages().len(),
                remounted = sequence.len(),
                "remounting pages for measurement"
            );
            host.clear_pages();
            for page in sequence {
                host.append_page(page);
            }
        }

        let pages = host.query_pages(&self.config.selector);
        self.offsets = OffsetTable::measure(host, axis, &pages);
        let total = pages.len();
        if total != self.total {
            self.total = total;
            host.total_changed(total);
        }

        let last = total.saturating_sub(1);
        if self.index > last {
            warn!(index = self.index, total, "page count shrank below index");
            if let Some(change) = self.commit_index(last, IndexSource::Ui) {
                host.index_changed(change);
            }
        }

        if self.config.optimize_dom {
            self.previous_index = self.index;
            if !self.offsets.is_uniform(self.config.uniform_tolerance) {
                warn!(
                    total,
                    tolerance = self.config.uniform_tolerance,
                    "windowed pages are not evenly spaced"
                );
            }
            let window = PageWindow::seed(pages, self.index, self.config.window_size);
            host.clear_pages();
            for page in window.mounted_pages() {
                host.append_page(page.clone());
            }
            if let Some(position) = window
                .slot_of(self.index)
                .and_then(|slot| self.offsets.get(slot))
            {
                host.set_scroll_position(axis, position);
            }
            debug!(mounted = ?window.mounted(), "seeded page window");
            self.window = Some(window);
        }

        debug!(total, index = self.index, "recalculated page offsets");
    }

    /// Handles the host's inertial-continuation hook.
    ///
    /// Steps one page in the direction of `velocity` when there is room, and
    /// always tells the host to drop its own inertia.
    pub fn on_flick<H: ScrollHost<Page = P>>(
        &mut self,
        host: &mut H,
        velocity: f64,
    ) -> FlickDisposition {
        let step = flick_step(velocity, self.index, self.total);
        trace!(velocity, index = self.index, ?step, "flick");
        match step {
            Some(PageStep::Next) => {
                self.next(host);
            }
            Some(PageStep::Prev) => {
                self.prev(host);
            }
            None => {}
        }
        FlickDisposition::SuppressDefault
    }

    /// Handles the host's scroll-end signal.
    pub fn on_scroll_end<H: ScrollHost<Page = P>>(&mut self, host: &mut H, signal: ScrollEnd) {
        let action = resolve_scroll_end(signal, self.index, self.total);
        trace!(?signal, index = self.index, ?action, "scroll end");
        match action {
            ScrollEndAction::Step(PageStep::Next) => {
                self.next(host);
            }
            ScrollEndAction::Step(PageStep::Prev) => {
                self.prev(host);
            }
            ScrollEndAction::SnapToCurrent => {
                self.snap_to_current(host, self.config.snap_transition);
            }
            ScrollEndAction::Settle => {
                if self.config.optimize_dom {
                    self.reconcile_window(host);
                }
                self.previous_index = self.index;
            }
            ScrollEndAction::Ignore => {}
        }
    }

    /// Advances one page; a no-op on the last page.
    pub fn next<H: ScrollHost<Page = P>>(&mut self, host: &mut H) -> Option<IndexChange> {
        if self.index + 1 >= self.total {
            return None;
        }
        self.transition(host, self.index + 1, IndexSource::Api)
    }

    /// Retreats one page; a no-op on the first page.
    pub fn prev<H: ScrollHost<Page = P>>(&mut self, host: &mut H) -> Option<IndexChange> {
        let target = self.index.checked_sub(1)?;
        self.transition(host, target, IndexSource::Api)
    }

    /// Moves to `index` and scrolls the host there.
    ///
    /// Out-of-range indices are clamped to the last page; with no pages the
    /// call is ignored.
    pub fn set_index<H: ScrollHost<Page = P>>(
        &mut self,
        host: &mut H,
        index: usize,
    ) -> Option<IndexChange> {
        let index = self.clamp_index(index)?;
        self.transition(host, index, IndexSource::Api)
    }

    /// Records that the host already shows page `index`, without scrolling.
    pub fn sync_index_from_ui<H: ScrollHost<Page = P>>(
        &mut self,
        host: &mut H,
        index: usize,
    ) -> Option<IndexChange> {
        let index = self.clamp_index(index)?;
        self.transition(host, index, IndexSource::Ui)
    }

    /// Returns to the first page.
    ///
    /// The previous index follows on the next settle, like any other move.
    pub fn reset<H: ScrollHost<Page = P>>(&mut self, host: &mut H) -> Option<IndexChange> {
        self.set_index(host, 0)
    }

    /// Animates the host to page `index`.
    ///
    /// Returns the scroll target, or `None` when there are no pages. An
    /// out-of-range index is clamped to the last page.
    pub fn scroll_to<H: ScrollHost<Page = P>>(
        &mut self,
        host: &mut H,
        index: usize,
        transition: Transition,
    ) -> Option<f64> {
        let index = self.clamp_index(index)?;
        let target = self.target_offset(index)?;
        let axis = host.axis();
        debug!(index, target, ?axis, "scroll to page");
        host.animate_scroll(axis, target, transition);
        Some(target)
    }

    /// Cancels any host animation and animates back to the current page.
    pub fn snap_to_current<H: ScrollHost<Page = P>>(
        &mut self,
        host: &mut H,
        transition: Transition,
    ) -> Option<f64> {
        host.cancel_scroll_animation();
        self.scroll_to(host, self.index, transition)
    }

    /// Scroll coordinate that shows page `index`.
    ///
    /// Without windowing this is the page's own offset. In windowed mode it is
    /// the offset of the slot the page occupies in the mounted run; a page not
    /// mounted yet resolves to the slot it is about to land in, the last slot
    /// when moving forward and the first slot otherwise.
    #[must_use]
    pub fn target_offset(&self, index: usize) -> Option<f64> {
        let Some(window) = self.window.as_ref().filter(|_| self.config.optimize_dom) else {
            return self.offsets.get(index);
        };
        let slot = window
            .slot_of(index)
            .unwrap_or_else(|| match self.direction() {
                Direction::Forward => index.min(window.capacity() - 1),
                Direction::Backward | Direction::Stationary => 0,
            });
        self.offsets.get(slot)
    }

    /// Snapshot of the paginator state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> PaginatorDebugInfo {
        PaginatorDebugInfo {
            index: self.index,
            previous_index: self.previous_index,
            total: self.total,
            direction: self.direction(),
            optimize_dom: self.config.optimize_dom,
            offsets: self.offsets.offsets().to_vec(),
            mounted: self
                .window
                .as_ref()
                .map(|window| window.mounted().to_vec())
                .unwrap_or_default(),
        }
    }

    fn clamp_index(&self, index: usize) -> Option<usize> {
        if self.total == 0 {
            warn!(index, "no pages to move to");
            return None;
        }
        let last = self.total - 1;
        if index > last {
            warn!(index, total = self.total, "page index out of range, clamping");
        }
        Some(index.min(last))
    }

    fn commit_index(&mut self, index: usize, source: IndexSource) -> Option<IndexChange> {
        if index == self.index {
            return None;
        }
        let change = IndexChange {
            previous: self.index,
            current: index,
            source,
        };
        self.index = index;
        debug!(
            previous = change.previous,
            current = change.current,
            ?source,
            "page index changed"
        );
        Some(change)
    }

    fn transition<H: ScrollHost<Page = P>>(
        &mut self,
        host: &mut H,
        index: usize,
        source: IndexSource,
    ) -> Option<IndexChange> {
        let change = self.commit_index(index, source)?;
        host.index_changed(change);
        if change.needs_ui_sync() {
            self.scroll_to(host, change.current, self.config.index_transition);
        }
        Some(change)
    }

    fn reconcile_window<H: ScrollHost<Page = P>>(&mut self, host: &mut H) {
        let Some(window) = self.window.as_mut() else {
            return;
        };
        let update = window.reconcile(self.previous_index, self.index);
        if update.is_unchanged() {
            return;
        }
        for op in update.ops() {
            match *op {
                WindowOp::Append(i) => {
                    if let Some(page) = window.page(i) {
                        host.append_page(page.clone());
                    }
                }
                WindowOp::Prepend(i) => {
                    if let Some(page) = window.page(i) {
                        host.prepend_page(page.clone());
                    }
                }
                WindowOp::Evict(i) => {
                    if let Some(page) = window.page(i) {
                        host.remove_page(page);
                    }
                }
                WindowOp::Clear => host.clear_pages(),
            }
        }
        if update.shifts_content()
            && let Some(position) = window
                .slot_of(self.index)
                .and_then(|slot| self.offsets.get(slot))
        {
            let axis = host.axis();
            host.set_scroll_position(axis, position);
        }
        debug!(ops = ?update.ops(), mounted = ?window.mounted(), "reconciled page window");
    }
}

/// Debug snapshot of a [`Paginator`] state.
#[derive(Clone, Debug, PartialEq)]
pub struct PaginatorDebugInfo {
    /// Current page index.
    pub index: usize,
    /// Index at the last settled transition.
    pub previous_index: usize,
    /// Number of pages.
    pub total: usize,
    /// Direction of the transition in progress.
    pub direction: Direction,
    /// Whether windowed mode is enabled.
    pub optimize_dom: bool,
    /// Page offsets in document order.
    pub offsets: Vec<f64>,
    /// Logical indices of mounted pages; empty outside windowed mode.
    pub mounted: Vec<usize>,
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use kurbo::{Point, Size};

    use super::{IndexSource, Paginator};
    use crate::config::PaginatorConfig;
    use crate::host::{Axis, PageSelector, ScrollHost};
    use crate::transition::Transition;
    use crate::window::Direction;

    /// Evenly spaced horizontal pages that records only the last animation.
    struct StripHost {
        mounted: Vec<usize>,
        last_target: Option<f64>,
        position: f64,
    }

    impl StripHost {
        fn new(pages: usize) -> Self {
            Self {
                mounted: (0..pages).collect(),
                last_target: None,
                position: 0.0,
            }
        }
    }

    impl ScrollHost for StripHost {
        type Page = usize;

        fn axis(&self) -> Axis {
            Axis::Horizontal
        }

        fn content_size(&self) -> Size {
            Size::new(100.0 * self.mounted.len() as f64, 50.0)
        }

        fn query_pages(&self, _selector: &PageSelector) -> Vec<usize> {
            self.mounted.clone()
        }

        fn page_origin(&self, page: &usize) -> Point {
            let slot = self.mounted.iter().position(|p| p == page).unwrap_or(0);
            Point::new(100.0 * slot as f64, 0.0)
        }

        fn scroll_position(&self, _axis: Axis) -> f64 {
            self.position
        }

        fn animate_scroll(&mut self, _axis: Axis, target: f64, _transition: Transition) {
            self.last_target = Some(target);
        }

        fn cancel_scroll_animation(&mut self) {}

        fn set_scroll_position(&mut self, _axis: Axis, value: f64) {
            self.position = value;
        }

        fn clear_pages(&mut self) {
            self.mounted.clear();
        }

        fn append_page(&mut self, page: usize) {
            self.mounted.push(page);
        }

        fn prepend_page(&mut self, page: usize) {
            self.mounted.insert(0, page);
        }

        fn remove_page(&mut self, page: &usize) {
            self.mounted.retain(|p| p != page);
        }

        fn mark_paged(&mut self) {}
    }

    fn paginator(host: &mut StripHost, config: PaginatorConfig) -> Paginator<usize> {
        let mut paginator = Paginator::new(config).unwrap();
        paginator.recalculate(host);
        paginator
    }

    #[test]
    fn new_rejects_invalid_config() {
        let config = PaginatorConfig::default().with_window_size(0);
        assert!(Paginator::<usize>::new(config).is_err());
    }

    #[test]
    fn next_and_prev_stay_in_bounds() {
        let mut host = StripHost::new(3);
        let mut pg = paginator(&mut host, PaginatorConfig::default());

        assert!(pg.prev(&mut host).is_none());
        assert_eq!(pg.index(), 0);

        assert!(pg.next(&mut host).is_some());
        assert!(pg.next(&mut host).is_some());
        assert!(pg.next(&mut host).is_none());
        assert_eq!(pg.index(), 2);
        assert_eq!(host.last_target, Some(200.0));
    }

    #[test]
    fn ui_sourced_change_does_not_scroll() {
        let mut host = StripHost::new(4);
        let mut pg = paginator(&mut host, PaginatorConfig::default());

        let change = pg.sync_index_from_ui(&mut host, 2).unwrap();
        assert_eq!(change.source, IndexSource::Ui);
        assert!(!change.needs_ui_sync());
        assert_eq!(pg.index(), 2);
        assert_eq!(host.last_target, None);
    }

    #[test]
    fn set_index_clamps_to_last_page() {
        let mut host = StripHost::new(4);
        let mut pg = paginator(&mut host, PaginatorConfig::default());

        let change = pg.set_index(&mut host, 99).unwrap();
        assert_eq!(change.current, 3);
        assert_eq!(host.last_target, Some(300.0));
    }

    #[test]
    fn empty_host_makes_navigation_a_no_op() {
        let mut host = StripHost::new(0);
        let mut pg = paginator(&mut host, PaginatorConfig::default());

        assert_eq!(pg.total(), 0);
        assert!(pg.offsets().is_empty());
        assert!(pg.next(&mut host).is_none());
        assert!(pg.prev(&mut host).is_none());
        assert!(pg.set_index(&mut host, 2).is_none());
        assert_eq!(pg.scroll_to(&mut host, 0, Transition::INDEX_CHANGE), None);
        assert_eq!(host.last_target, None);
    }

    #[test]
    fn windowed_target_uses_mounted_slot() {
        let mut host = StripHost::new(6);
        let config = PaginatorConfig::default()
            .with_optimize_dom(true)
            .with_initial_index(2);
        let pg = paginator(&mut host, config);

        assert_eq!(host.mounted, [2, 3, 4]);
        assert_eq!(pg.target_offset(2), Some(0.0));
        assert_eq!(pg.target_offset(4), Some(200.0));
        assert_eq!(pg.direction(), Direction::Stationary);
    }

    #[test]
    fn windowed_target_for_unmounted_page_follows_direction() {
        let mut host = StripHost::new(8);
        let config = PaginatorConfig::default().with_optimize_dom(true);
        let mut pg = paginator(&mut host, config);

        pg.sync_index_from_ui(&mut host, 6);
        assert_eq!(pg.direction(), Direction::Forward);
        // Page 6 is not mounted: it lands in the last slot.
        assert_eq!(pg.target_offset(6), Some(200.0));
    }

    #[test]
    fn debug_info_reflects_state() {
        let mut host = StripHost::new(5);
        let config = PaginatorConfig::default().with_optimize_dom(true);
        let mut pg = paginator(&mut host, config);
        pg.next(&mut host);

        let info = pg.debug_info();
        assert_eq!(info.index, 1);
        assert_eq!(info.previous_index, 0);
        assert_eq!(info.total, 5);
        assert_eq!(info.direction, Direction::Forward);
        assert!(info.optimize_dom);
        assert_eq!(info.offsets.len(), 5);
        assert_eq!(info.mounted, [0, 1, 2]);
    }
}
