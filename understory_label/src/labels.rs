// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The label registry: insertion, the paint pass, and post-paint queries.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use peniko::Color;

use crate::item::LabelItem;
use crate::occupancy::{Occupancy, contains};
use crate::surface::Surface;
use crate::types::{Alignment, Anchor, LabelId, LabelStyle};

/// Summary of one [`Labels::paint`] pass.
#[derive(Clone, Debug, Default)]
pub struct PaintDamage {
    /// Old and new bounds of every label whose bounds changed in this pass.
    /// Zero-area rectangles are left out.
    pub dirty_rects: Vec<Rect>,
    /// Labels that could not use their own anchor's rule and were moved to a fallback.
    pub fallbacks: usize,
    /// Labels still overlapping an earlier label after every rule was tried.
    pub overlapping: usize,
}

impl PaintDamage {
    /// Returns the union of all dirty rects.
    pub fn union_rect(&self) -> Option<Rect> {
        let mut it = self.dirty_rects.iter().copied();
        let first = it.next()?;
        Some(it.fold(first, |acc, r| acc.union(r)))
    }
}

/// Ordered registry of labels.
///
/// Insertion order is priority order: during [`paint`](Self::paint) earlier labels
/// are fixed obstacles for later ones, and [`find`](Self::find) prefers later
/// labels because they are drawn on top.
#[derive(Clone)]
pub struct Labels<S = ()> {
    items: Vec<LabelItem<S>>,
    style: LabelStyle,
}

impl<S> core::fmt::Debug for Labels<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.items.len();
        let placed = self.items.iter().filter(|i| i.bounds().is_some()).count();
        f.debug_struct("Labels")
            .field("labels_total", &total)
            .field("labels_placed", &placed)
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}

impl<S> Default for Labels<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Labels<S> {
    /// Create an empty registry with the default [`LabelStyle`].
    pub fn new() -> Self {
        Self::with_style(LabelStyle::default())
    }

    /// Create an empty registry with the given style.
    pub fn with_style(style: LabelStyle) -> Self {
        Self {
            items: Vec::new(),
            style,
        }
    }

    /// Current style.
    pub fn style(&self) -> &LabelStyle {
        &self.style
    }

    /// Replace the style. Takes effect on the next paint pass.
    pub fn set_style(&mut self, style: LabelStyle) {
        self.style = style;
    }

    /// Number of labels.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the registry holds no labels.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up a label by id.
    pub fn get(&self, id: LabelId) -> Option<&LabelItem<S>> {
        self.items.get(id.index())
    }

    /// Iterate labels in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &LabelItem<S>> + '_ {
        self.items.iter()
    }

    /// Append a label with a color and no source.
    pub fn add(
        &mut self,
        color: Color,
        position: Point,
        anchor: Anchor,
        text: impl Into<String>,
    ) -> LabelId {
        self.push(LabelItem::new(position, anchor, text, color))
    }

    /// Append a label for `source`, drawn in the style's default color.
    pub fn add_for(
        &mut self,
        source: S,
        position: Point,
        anchor: Anchor,
        text: impl Into<String>,
    ) -> LabelId {
        let color = self.style.default_color;
        self.push(LabelItem::new(position, anchor, text, color).with_source(source))
    }

    /// Append a label for `source` with a color.
    pub fn add_with_color(
        &mut self,
        source: S,
        color: Color,
        position: Point,
        anchor: Anchor,
        text: impl Into<String>,
    ) -> LabelId {
        self.push(LabelItem::new(position, anchor, text, color).with_source(source))
    }

    /// Append a label for `source` with a color and a tooltip.
    pub fn add_with_tooltip(
        &mut self,
        source: S,
        color: Color,
        position: Point,
        anchor: Anchor,
        text: impl Into<String>,
        tooltip: impl Into<String>,
    ) -> LabelId {
        self.push(
            LabelItem::new(position, anchor, text, color)
                .with_source(source)
                .with_tooltip(tooltip),
        )
    }

    /// Append a caller-built label.
    ///
    /// Bounds the item already carries are kept until the next paint pass.
    pub fn push(&mut self, mut item: LabelItem<S>) -> LabelId {
        let id = LabelId::new(self.items.len());
        item.set_id(id);
        self.items.push(item);
        id
    }

    /// Measure, place, and draw every label in insertion order.
    ///
    /// Each label tries its anchor's [`Alignment`] first, then the rest of its
    /// [`fallback_order`](Alignment::fallback_order), and takes the first box that
    /// does not overlap a label already placed in this pass. If every box overlaps,
    /// the last one is used anyway. Bounds left over from an earlier pass never act
    /// as obstacles.
    ///
    /// Repeating a pass with unchanged labels, style, and metrics gives the same
    /// placements.
    pub fn paint(&mut self, surface: &mut impl Surface) -> PaintDamage {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("paint_labels", count = self.items.len()).entered();

        let style = &self.style;
        let mut occupancy = Occupancy::with_capacity(self.items.len());
        let mut damage = PaintDamage::default();

        for item in &mut self.items {
            let metrics = surface.measure_text(item.text());
            let size = metrics.size();
            let preferred: Alignment = item.anchor().alignment();

            let candidates = preferred.fallback_order().map(|rule| {
                let rect = rule
                    .place(item.position(), size, style.offset)
                    .inflate(style.padding, style.padding);
                (rule, rect)
            });
            let free = candidates
                .iter()
                .copied()
                .find(|(_, rect)| !occupancy.is_occupied(*rect));

            let bounds = match free {
                Some((rule, rect)) => {
                    if rule != preferred {
                        damage.fallbacks += 1;
                        #[cfg(feature = "tracing")]
                        tracing::trace!(
                            label = ?item.id(),
                            ?preferred,
                            used = ?rule,
                            "label placed on fallback rule"
                        );
                    }
                    rect
                }
                None => {
                    damage.fallbacks += 1;
                    damage.overlapping += 1;
                    #[cfg(feature = "tracing")]
                    tracing::debug!(
                        label = ?item.id(),
                        text = item.text(),
                        "no free placement; label overlaps an earlier one"
                    );
                    candidates[Alignment::CANDIDATES - 1].1
                }
            };

            if item.bounds() != Some(bounds) {
                if let Some(old) = item.bounds()
                    && old.width() > 0.0
                    && old.height() > 0.0
                {
                    damage.dirty_rects.push(old);
                }
                if bounds.width() > 0.0 && bounds.height() > 0.0 {
                    damage.dirty_rects.push(bounds);
                }
            }

            item.set_bounds(bounds);
            occupancy.insert(bounds);

            let anchor = item.position();
            if style.leader_lines && !contains(bounds, anchor) {
                surface.draw_leader(anchor, nearest_on_rect(bounds, anchor), item.color());
            }
            let origin = Point::new(
                bounds.x0 + style.padding,
                bounds.y0 + style.padding + metrics.baseline,
            );
            surface.draw_text(item.text(), origin, item.color());
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            fallbacks = damage.fallbacks,
            overlapping = damage.overlapping,
            dirty = damage.dirty_rects.len(),
            "labels painted"
        );

        damage
    }

    /// Whether a `width` × `height` probe at `point` overlaps any placed label.
    ///
    /// Probes with zero or negative width or height overlap nothing.
    pub fn blocked(&self, point: Point, width: f64, height: f64) -> bool {
        self.blocked_rect(Rect::new(
            point.x,
            point.y,
            point.x + width,
            point.y + height,
        ))
    }

    /// Whether `rect` overlaps any placed label.
    pub fn blocked_rect(&self, rect: Rect) -> bool {
        self.items.iter().any(|item| item.intersects(rect))
    }

    /// The topmost placed label containing `point`.
    ///
    /// When several labels contain the point, the most recently added wins.
    /// Before the first paint pass nothing is placed and this returns `None`.
    pub fn find(&self, point: Point) -> Option<&LabelItem<S>> {
        self.items.iter().rev().find(|item| item.contains(point))
    }

    /// Like [`find`](Self::find), returning the label's id.
    pub fn hit_test(&self, point: Point) -> Option<LabelId> {
        self.find(point).and_then(LabelItem::id)
    }
}

/// Closest point of `rect` to `pt`.
fn nearest_on_rect(rect: Rect, pt: Point) -> Point {
    Point::new(
        pt.x.max(rect.x0).min(rect.x1),
        pt.y.max(rect.y0).min(rect.y1),
    )
}
