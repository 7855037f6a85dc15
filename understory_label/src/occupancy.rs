// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounds committed during a paint pass, with linear-scan overlap queries.

use alloc::vec::Vec;

use kurbo::{Point, Rect};

/// Strict overlap: both rects have positive extent and their ranges share a
/// nonzero span on both axes. Touching edges do not overlap.
pub(crate) fn overlaps(a: Rect, b: Rect) -> bool {
    has_area(a) && has_area(b) && a.x0 < b.x1 && b.x0 < a.x1 && a.y0 < b.y1 && b.y0 < a.y1
}

/// Half-open containment, `x0 <= x < x1` and `y0 <= y < y1`.
pub(crate) fn contains(r: Rect, pt: Point) -> bool {
    r.x0 <= pt.x && pt.x < r.x1 && r.y0 <= pt.y && pt.y < r.y1
}

fn has_area(r: Rect) -> bool {
    r.x0 < r.x1 && r.y0 < r.y1
}

/// Flat list of rectangles placed so far in the current pass.
///
/// Small and simple; label counts per frame are low enough that linear scans win.
#[derive(Clone, Debug, Default)]
pub(crate) struct Occupancy {
    placed: Vec<Rect>,
}

impl Occupancy {
    pub(crate) fn with_capacity(n: usize) -> Self {
        Self {
            placed: Vec::with_capacity(n),
        }
    }

    pub(crate) fn insert(&mut self, rect: Rect) {
        self.placed.push(rect);
    }

    /// Whether `rect` overlaps anything inserted so far.
    pub(crate) fn is_occupied(&self, rect: Rect) -> bool {
        self.placed.iter().any(|r| overlaps(*r, rect))
    }
}
