// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rendering surface capability consumed by [`Labels::paint`](crate::Labels::paint).
//!
//! The label engine never shapes text or rasterizes anything itself. It asks a
//! [`Surface`] for text metrics under whatever font is active, and hands back
//! draw calls once each label has a position.
//!
//! [`RecordingSurface`] is a headless implementation with fixed-advance metrics.
//! It records every draw call, which makes it handy for tests and for previewing
//! placements without a real renderer.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use kurbo::{Point, Size};
use peniko::Color;

/// Extent of a run of text under the surface's current font.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TextMetrics {
    /// Advance width.
    pub width: f64,
    /// Line height (ascent + descent + leading).
    pub height: f64,
    /// Distance from the top of the line box down to the baseline.
    pub baseline: f64,
}

impl TextMetrics {
    /// Width and height as a [`Size`].
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// A drawing target that can measure and draw text.
pub trait Surface {
    /// Measure `text` with the active font.
    fn measure_text(&self, text: &str) -> TextMetrics;

    /// Draw `text` with its baseline starting at `origin`.
    fn draw_text(&mut self, text: &str, origin: Point, color: Color);

    /// Draw a leader line connecting a label's anchor to its box.
    ///
    /// The default does nothing, for surfaces that have no use for leaders.
    fn draw_leader(&mut self, from: Point, to: Point, color: Color) {
        let _ = (from, to, color);
    }
}

/// A draw call captured by [`RecordingSurface`].
#[derive(Clone, Debug)]
pub enum DrawCommand {
    /// Text drawn at a baseline origin.
    Text {
        /// The drawn string.
        text: String,
        /// Baseline origin.
        origin: Point,
        /// Fill color.
        color: Color,
    },
    /// Leader line from an anchor to a label box.
    Leader {
        /// Start point (the anchor).
        from: Point,
        /// End point (on the label box).
        to: Point,
        /// Stroke color.
        color: Color,
    },
}

/// Headless surface with fixed per-character advance that records draw calls.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    /// Horizontal advance of every character.
    pub advance: f64,
    /// Height of one line.
    pub line_height: f64,
    /// Distance from the top of the line to the baseline.
    pub ascent: f64,
    commands: Vec<DrawCommand>,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new(7.0, 14.0, 11.0)
    }
}

impl RecordingSurface {
    /// Create a surface with the given metrics and no recorded commands.
    pub fn new(advance: f64, line_height: f64, ascent: f64) -> Self {
        Self {
            advance,
            line_height,
            ascent,
            commands: Vec::new(),
        }
    }

    /// Commands recorded so far, in draw order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the surface empty.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        core::mem::take(&mut self.commands)
    }

    /// Strings drawn so far, in draw order.
    pub fn drawn_text(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            DrawCommand::Leader { .. } => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn measure_text(&self, text: &str) -> TextMetrics {
        let chars = text.chars().count() as f64;
        TextMetrics {
            width: chars * self.advance,
            height: self.line_height,
            baseline: self.ascent,
        }
    }

    fn draw_text(&mut self, text: &str, origin: Point, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            origin,
            color,
        });
    }

    fn draw_leader(&mut self, from: Point, to: Point, color: Color) {
        self.commands.push(DrawCommand::Leader { from, to, color });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_advance_metrics() {
        let s = RecordingSurface::new(5.0, 12.0, 9.0);
        let m = s.measure_text("héllo");
        assert_eq!(m.width, 25.0, "advance counts chars, not bytes");
        assert_eq!(m.height, 12.0);
        assert_eq!(m.baseline, 9.0);
        assert_eq!(s.measure_text("").size(), Size::new(0.0, 12.0));
    }

    #[test]
    fn records_in_order_and_take_clears() {
        let mut s = RecordingSurface::default();
        let black = Color::from_rgba8(0, 0, 0, 255);
        s.draw_leader(Point::ZERO, Point::new(1.0, 1.0), black);
        s.draw_text("a", Point::new(2.0, 3.0), black);
        assert_eq!(s.commands().len(), 2);
        assert!(matches!(s.commands()[0], DrawCommand::Leader { .. }));
        assert_eq!(s.drawn_text().collect::<Vec<_>>(), ["a"]);
        let taken = s.take_commands();
        assert_eq!(taken.len(), 2);
        assert!(s.commands().is_empty());
    }
}
