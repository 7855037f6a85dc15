// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for labels: identifiers, anchor codes, alignment rules, and style.

use kurbo::{Point, Rect, Size};
use peniko::Color;

/// Identifier for a label in a [`Labels`](crate::Labels) registry.
///
/// This is a small, copyable handle for the label's slot. Slots are handed out in
/// insertion order and never reused, so a higher id always means a label that was
/// added later (and therefore sits above earlier labels in paint order).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct LabelId(pub(crate) u32);

impl LabelId {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "LabelId uses 32-bit indices by design."
    )]
    pub(crate) const fn new(idx: usize) -> Self {
        Self(idx as u32)
    }

    /// Insertion index of the label.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl core::fmt::Display for LabelId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Anchor code selecting which corner (or the center) of a label's text box
/// touches its anchor point.
///
/// Codes follow the usual compass numbering (`CENTER = 0`, `NORTH_EAST = 2`,
/// `SOUTH_EAST = 4`, `SOUTH_WEST = 6`, `NORTH_WEST = 8`). Any other code is kept
/// verbatim in [`Anchor::Other`] and placed with [`Alignment::DEFAULT`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Anchor {
    /// The box hangs to the right of and below the anchor.
    NorthWest,
    /// The box hangs to the left of and below the anchor.
    NorthEast,
    /// The box sits to the right of and above the anchor.
    SouthWest,
    /// The box sits to the left of and above the anchor.
    SouthEast,
    /// The box is centered on the anchor.
    Center,
    /// Unrecognized code, kept as given.
    Other(i32),
}

impl Anchor {
    /// Raw code for [`Anchor::Center`].
    pub const CENTER: i32 = 0;
    /// Raw code for [`Anchor::NorthEast`].
    pub const NORTH_EAST: i32 = 2;
    /// Raw code for [`Anchor::SouthEast`].
    pub const SOUTH_EAST: i32 = 4;
    /// Raw code for [`Anchor::SouthWest`].
    pub const SOUTH_WEST: i32 = 6;
    /// Raw code for [`Anchor::NorthWest`].
    pub const NORTH_WEST: i32 = 8;

    /// Decode a raw anchor code. Never fails; unknown codes become [`Anchor::Other`].
    pub const fn from_code(code: i32) -> Self {
        match code {
            Self::CENTER => Self::Center,
            Self::NORTH_EAST => Self::NorthEast,
            Self::SOUTH_EAST => Self::SouthEast,
            Self::SOUTH_WEST => Self::SouthWest,
            Self::NORTH_WEST => Self::NorthWest,
            other => Self::Other(other),
        }
    }

    /// The raw code this anchor was built from.
    pub const fn code(self) -> i32 {
        match self {
            Self::Center => Self::CENTER,
            Self::NorthEast => Self::NORTH_EAST,
            Self::SouthEast => Self::SOUTH_EAST,
            Self::SouthWest => Self::SOUTH_WEST,
            Self::NorthWest => Self::NORTH_WEST,
            Self::Other(code) => code,
        }
    }

    /// The alignment rule this anchor asks for.
    pub const fn alignment(self) -> Alignment {
        match self {
            Self::NorthWest => Alignment::NorthWest,
            Self::NorthEast => Alignment::NorthEast,
            Self::SouthWest => Alignment::SouthWest,
            Self::SouthEast => Alignment::SouthEast,
            Self::Center => Alignment::Center,
            Self::Other(_) => Alignment::DEFAULT,
        }
    }
}

impl From<i32> for Anchor {
    fn from(code: i32) -> Self {
        Self::from_code(code)
    }
}

/// How a measured box is positioned relative to an anchor point.
///
/// Corner rules name the corner of the box that sits on the anchor.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Alignment {
    /// Anchor at the top-left corner; the box grows right and down.
    NorthWest,
    /// Anchor at the top-right corner; the box grows left and down.
    NorthEast,
    /// Anchor at the bottom-left corner; the box grows right and up.
    SouthWest,
    /// Anchor at the bottom-right corner; the box grows left and up.
    SouthEast,
    /// Box centered on the anchor.
    Center,
}

impl Alignment {
    /// Rule used for [`Anchor::Other`] codes.
    pub const DEFAULT: Self = Self::NorthWest;

    /// Number of rules tried per label during a paint pass.
    pub const CANDIDATES: usize = 5;

    /// Rules to try in order, starting with `self`.
    ///
    /// Corner rules try their horizontal mirror, then their vertical mirror, then
    /// the diagonal opposite, and finally [`Alignment::Center`]. Center falls back
    /// through the corners clockwise from the top-left.
    pub const fn fallback_order(self) -> [Self; Self::CANDIDATES] {
        match self {
            Self::NorthWest => [
                Self::NorthWest,
                Self::NorthEast,
                Self::SouthWest,
                Self::SouthEast,
                Self::Center,
            ],
            Self::NorthEast => [
                Self::NorthEast,
                Self::NorthWest,
                Self::SouthEast,
                Self::SouthWest,
                Self::Center,
            ],
            Self::SouthWest => [
                Self::SouthWest,
                Self::SouthEast,
                Self::NorthWest,
                Self::NorthEast,
                Self::Center,
            ],
            Self::SouthEast => [
                Self::SouthEast,
                Self::SouthWest,
                Self::NorthEast,
                Self::NorthWest,
                Self::Center,
            ],
            Self::Center => [
                Self::Center,
                Self::NorthWest,
                Self::NorthEast,
                Self::SouthWest,
                Self::SouthEast,
            ],
        }
    }

    /// Position a box of `size` against `anchor`.
    ///
    /// Corner rules push the box `offset` away from the anchor along both axes;
    /// the centered rule ignores it.
    pub fn place(self, anchor: Point, size: Size, offset: f64) -> Rect {
        let (w, h) = (size.width, size.height);
        let (x0, y0) = match self {
            Self::NorthWest => (anchor.x + offset, anchor.y + offset),
            Self::NorthEast => (anchor.x - offset - w, anchor.y + offset),
            Self::SouthWest => (anchor.x + offset, anchor.y - offset - h),
            Self::SouthEast => (anchor.x - offset - w, anchor.y - offset - h),
            Self::Center => (anchor.x - 0.5 * w, anchor.y - 0.5 * h),
        };
        Rect::new(x0, y0, x0 + w, y0 + h)
    }
}

/// Placement and drawing parameters shared by every label in a registry.
#[derive(Clone, Debug)]
pub struct LabelStyle {
    /// Space added around the measured text on every side. Part of the committed bounds.
    pub padding: f64,
    /// Gap between the anchor and the text box for the corner rules.
    pub offset: f64,
    /// Color for labels added without one ([`Labels::add_for`](crate::Labels::add_for)).
    pub default_color: Color,
    /// Draw a leader from the anchor to the box when the anchor ends up outside it.
    pub leader_lines: bool,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            padding: 2.0,
            offset: 0.0,
            default_color: Color::from_rgba8(0, 0, 0, 255),
            leader_lines: true,
        }
    }
}
