// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single anchored label and its lazily assigned bounds.

use alloc::string::String;
use core::fmt;

use kurbo::{Point, Rect};
use peniko::Color;

use crate::occupancy::{contains, overlaps};
use crate::types::{Anchor, LabelId};

/// One text label anchored to a point.
///
/// Everything but the bounds is fixed at construction. Bounds start out unset and
/// are assigned by each [`Labels::paint`](crate::Labels::paint) pass; an unset
/// label takes no space, intersects nothing, and is never found by a hit test.
///
/// `S` is an arbitrary caller-side reference (a model object, an id, ...) carried
/// along for the caller's benefit and never looked at by the engine.
#[derive(Clone)]
pub struct LabelItem<S = ()> {
    source: Option<S>,
    color: Color,
    position: Point,
    anchor: Anchor,
    text: String,
    tooltip: Option<String>,
    bounds: Option<Rect>,
    id: Option<LabelId>,
}

impl<S> LabelItem<S> {
    /// Create a label with no source, no tooltip, and unset bounds.
    pub fn new(position: Point, anchor: Anchor, text: impl Into<String>, color: Color) -> Self {
        Self {
            source: None,
            color,
            position,
            anchor,
            text: text.into(),
            tooltip: None,
            bounds: None,
            id: None,
        }
    }

    /// Attach a source reference.
    #[must_use]
    pub fn with_source(mut self, source: S) -> Self {
        self.source = Some(source);
        self
    }

    /// Attach a tooltip.
    #[must_use]
    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    /// The caller's source reference, if any.
    pub fn source(&self) -> Option<&S> {
        self.source.as_ref()
    }

    /// Display color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Anchor point in canvas coordinates.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Anchor code as given at construction.
    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// Label text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Tooltip text, if any.
    pub fn tooltip(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }

    /// Registry slot, once the label has been added to a [`Labels`](crate::Labels).
    pub fn id(&self) -> Option<LabelId> {
        self.id
    }

    pub(crate) fn set_id(&mut self, id: LabelId) {
        self.id = Some(id);
    }

    /// Overwrite the bounds. The rectangle is stored as given, including
    /// zero-area or inverted ones.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = Some(bounds);
    }

    /// Overwrite the bounds from an origin and a size, without normalizing
    /// negative sizes.
    pub fn set_bounds_xywh(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.set_bounds(Rect::new(x, y, x + w, y + h));
    }

    /// Current bounds, or `None` if the label has never been placed.
    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    /// Whether the placed bounds overlap `rect` with nonzero area.
    ///
    /// Always false for an unplaced label. Touching edges do not count.
    pub fn intersects(&self, rect: Rect) -> bool {
        self.bounds.is_some_and(|b| overlaps(b, rect))
    }

    /// Whether the placed bounds contain `pt` (left/top edges inclusive,
    /// right/bottom exclusive). Always false for an unplaced label.
    pub fn contains(&self, pt: Point) -> bool {
        self.bounds.is_some_and(|b| contains(b, pt))
    }
}

struct IdDisplay(Option<LabelId>);

impl fmt::Debug for IdDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(id) => write!(f, "{id}"),
            None => f.write_str("unregistered"),
        }
    }
}

impl<S> fmt::Debug for LabelItem<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LabelItem")
            .field("id", &IdDisplay(self.id))
            .field("text", &self.text)
            .field("position", &self.position)
            .field("anchor", &self.anchor)
            .field("bounds", &self.bounds)
            .field("has_source", &self.source.is_some())
            .field("tooltip", &self.tooltip)
            .finish_non_exhaustive()
    }
}

impl<S> fmt::Display for LabelItem<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LabelItem[{:?}, {:?} at ({}, {}), {:?}",
            IdDisplay(self.id),
            self.text,
            self.position.x,
            self.position.y,
            self.anchor
        )?;
        match self.bounds {
            Some(b) => write!(f, ", bounds ({}, {})-({}, {})]", b.x0, b.y0, b.x1, b.y1),
            None => f.write_str(", unplaced]"),
        }
    }
}
