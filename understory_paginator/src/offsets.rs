// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Leading-edge offsets of every page along the scroll axis.

use alloc::vec::Vec;

use crate::host::{Axis, ScrollHost};

/// Cached page offsets, one per page in document order.
///
/// The table is rebuilt wholesale from host measurements; there is no partial
/// update. Each page's extent is the gap to the next page's offset, and the
/// last page extends to the end of the content.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OffsetTable {
    offsets: Vec<f64>,
    extents: Vec<f64>,
}

impl OffsetTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Measures `pages` along the host's current axis.
    #[must_use]
    pub fn measure<H: ScrollHost>(host: &H, axis: Axis, pages: &[H::Page]) -> Self {
        let offsets = pages
            .iter()
            .map(|page| axis.coord(host.page_origin(page)))
            .collect();
        Self::from_offsets(offsets, axis.extent(host.content_size()))
    }

    /// Builds a table from already-measured offsets.
    ///
    /// `content_end` closes the extent of the last page.
    #[must_use]
    pub fn from_offsets(offsets: Vec<f64>, content_end: f64) -> Self {
        let extents = offsets
            .iter()
            .enumerate()
            .map(|(i, &start)| {
                let end = offsets.get(i + 1).copied().unwrap_or(content_end);
                (end - start).max(0.0)
            })
            .collect();
        Self { offsets, extents }
    }

    /// Number of pages measured.
    #[must_use]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Returns `true` if no pages were measured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Offset of the page at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.offsets.get(index).copied()
    }

    /// Extent of the page at `index`.
    #[must_use]
    pub fn extent_of(&self, index: usize) -> Option<f64> {
        self.extents.get(index).copied()
    }

    /// All offsets in document order.
    #[must_use]
    pub fn offsets(&self) -> &[f64] {
        &self.offsets
    }

    /// Returns `true` if consecutive pages are evenly spaced within `tolerance`.
    ///
    /// Tables with fewer than three pages are trivially uniform.
    #[must_use]
    pub fn is_uniform(&self, tolerance: f64) -> bool {
        let mut gaps = self.offsets.windows(2).map(|w| w[1] - w[0]);
        let Some(first) = gaps.next() else {
            return true;
        };
        gaps.all(|gap| (gap - first).abs() <= tolerance)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::OffsetTable;

    #[test]
    fn extents_follow_gaps_and_content_end() {
        let table = OffsetTable::from_offsets(vec![0.0, 300.0, 600.0], 1000.0);
        assert_eq!(table.len(), 3);
        assert_eq!(table.extent_of(0), Some(300.0));
        assert_eq!(table.extent_of(1), Some(300.0));
        // Last page runs to the end of the content.
        assert_eq!(table.extent_of(2), Some(400.0));
        assert_eq!(table.extent_of(3), None);
    }

    #[test]
    fn empty_table_is_tolerated() {
        let table = OffsetTable::from_offsets(vec![], 0.0);
        assert!(table.is_empty());
        assert_eq!(table.get(0), None);
        assert!(table.is_uniform(0.0));
    }

    #[test]
    fn uniformity_ignores_trailing_padding() {
        let even = OffsetTable::from_offsets(vec![0.0, 300.0, 600.0, 900.0], 1500.0);
        assert!(even.is_uniform(0.5));

        let uneven = OffsetTable::from_offsets(vec![0.0, 300.0, 650.0], 950.0);
        assert!(!uneven.is_uniform(0.5));
        assert!(uneven.is_uniform(50.0));
    }
}
