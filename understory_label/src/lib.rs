// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_label --heading-base-level=0

//! Understory Label: anchored text labels with collision-avoiding placement.
//!
//! Understory Label annotates a 2D canvas with short text labels pinned to points.
//!
//! - Register labels with an anchor point, an anchor code, text, color, and optional source/tooltip.
//! - Run a [`Labels::paint`] pass per frame: every label is measured, placed so it avoids the
//!   labels placed before it, and drawn.
//! - After painting, ask whether a region is occupied ([`Labels::blocked`]) or which label sits
//!   under a point ([`Labels::find`]).
//!
//! ## Placement
//!
//! An [`Anchor`] code selects which corner of the label's text box sits on the anchor point, or
//! centers the box on it. Codes outside the known set are kept verbatim as [`Anchor::Other`]
//! and placed with [`Alignment::DEFAULT`].
//!
//! Labels are placed in insertion order. Each label tries its own [`Alignment`], then a short
//! fixed [fallback order](Alignment::fallback_order), and keeps the first box that does not
//! overlap a label already placed in the same pass. When every candidate overlaps, the last one
//! is used; placement never fails, it may only leave residual overlap. Earlier labels never move
//! to make room for later ones.
//!
//! ## Not a layout engine
//!
//! There is no constraint solving or force-directed relaxation here, and no styling beyond the
//! handful of knobs in [`LabelStyle`]. Text shaping and drawing belong to the caller's
//! [`Surface`]; [`RecordingSurface`] is a headless stand-in with fixed-advance metrics.
//!
//! ## Queries
//!
//! Bounds are `None` until a label has been painted, so before the first pass
//! [`Labels::find`] returns `None` and [`Labels::blocked`] returns `false` everywhere.
//! Overlap is strict (touching edges do not count) and probes with zero or negative size
//! overlap nothing. When several labels contain a point, the one added last wins, since it is
//! drawn on top.
//!
//! # Example
//!
//! ```rust
//! use understory_label::{Anchor, Labels, RecordingSurface};
//! use kurbo::Point;
//! use peniko::Color;
//!
//! let red = Color::from_rgba8(200, 30, 30, 255);
//! let mut labels: Labels = Labels::new();
//! let city = labels.add(red, Point::new(10.0, 20.0), Anchor::SouthWest, "foobar");
//!
//! // Nothing is placed until the first paint pass.
//! assert!(labels.find(Point::new(20.0, 15.0)).is_none());
//!
//! let mut surface = RecordingSurface::default();
//! let damage = labels.paint(&mut surface);
//! assert!(damage.union_rect().is_some());
//!
//! // The label now occupies space just above and to the right of its anchor.
//! assert!(labels.blocked(Point::new(0.0, 0.0), 10.0, 20.0));
//! assert!(!labels.blocked(Point::new(1000.0, 0.0), 10.0, 20.0));
//! assert_eq!(labels.hit_test(Point::new(20.0, 15.0)), Some(city));
//! ```
//!
//! ### Collision avoidance
//!
//! ```rust
//! use understory_label::{Anchor, LabelItem, Labels, RecordingSurface};
//! use kurbo::Point;
//! use peniko::Color;
//!
//! let ink = Color::from_rgba8(0, 0, 0, 255);
//! let mut labels: Labels<&str> = Labels::new();
//! labels.add_with_color("a", ink, Point::new(100.0, 100.0), Anchor::NorthWest, "first");
//! // Would cover the first label; flips to the other side of its anchor instead.
//! labels.add_with_color("b", ink, Point::new(140.0, 100.0), Anchor::NorthEast, "second");
//!
//! let damage = labels.paint(&mut RecordingSurface::default());
//! assert_eq!(damage.fallbacks, 1);
//! assert_eq!(damage.overlapping, 0);
//!
//! let bounds: Vec<_> = labels.iter().filter_map(LabelItem::bounds).collect();
//! assert!(bounds[0].intersect(bounds[1]).area() <= 0.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod item;
mod labels;
mod occupancy;
pub mod surface;
pub mod types;

pub use item::LabelItem;
pub use labels::{Labels, PaintDamage};
pub use surface::{DrawCommand, RecordingSurface, Surface, TextMetrics};
pub use types::{Alignment, Anchor, LabelId, LabelStyle};

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use kurbo::{Point, Rect};
    use peniko::Color;

    #[test]
    fn paint_then_query() {
        let mut labels: Labels<u32> = Labels::new();
        let ink = Color::from_rgba8(0, 0, 0, 255);
        let a = labels.add_with_tooltip(1, ink, Point::new(0.0, 0.0), Anchor::Center, "a", "A");
        let b = labels.add_with_color(2, ink, Point::new(200.0, 0.0), Anchor::SouthEast, "b");
        let _ = labels.paint(&mut RecordingSurface::default());

        let hit = labels.find(Point::new(0.0, 0.0)).unwrap();
        assert_eq!(hit.id(), Some(a));
        assert_eq!(hit.source(), Some(&1));
        assert_eq!(hit.tooltip(), Some("A"));
        assert_eq!(labels.hit_test(Point::new(195.0, -5.0)), Some(b));
        assert!(labels.blocked_rect(Rect::new(-1.0, -1.0, 1.0, 1.0)));
        assert!(!labels.blocked_rect(Rect::new(50.0, 50.0, 60.0, 60.0)));
    }

    #[test]
    fn labels_sharing_a_spot_fan_out_before_overlapping() {
        let mut labels: Labels = Labels::with_style(LabelStyle {
            padding: 0.0,
            ..LabelStyle::default()
        });
        let ink = Color::from_rgba8(0, 0, 0, 255);
        let anchor = Point::new(50.0, 50.0);
        for text in ["nw", "ne", "sw", "se", "center"] {
            labels.add(ink, anchor, Anchor::NorthWest, text);
        }
        let damage = labels.paint(&mut RecordingSurface::default());

        // Without padding the four corner boxes only touch at the anchor.
        assert_eq!(damage.fallbacks, 4);
        assert_eq!(damage.overlapping, 1);
        let boxes: Vec<_> = labels.iter().filter_map(LabelItem::bounds).collect();
        assert_eq!(boxes[1].x1, 50.0);
        assert_eq!(boxes[2].y1, 50.0);
        assert_eq!(boxes[3].x1, 50.0);
        assert_eq!(boxes[3].y1, 50.0);
    }
}
