//! Closed clip outlines and the builders that produce them.
//!
//! An [`Outline`] is a value: every build returns a fresh path, and two builds
//! from the same inputs compare equal. Outlines carry their own
//! [`InsideRule`], so the compositor never needs to know whether the path came
//! from a circle or a rounded rectangle, nor which mask direction was asked for.

mod builder;
mod flatten;

pub use builder::{build_circle, build_outline, build_rounded_rect, clamp_radii};

use kurbo::{BezPath, Point, Shape};

use crate::coords::{Rect, Vec2};

/// One drawing command of an outline, in absolute coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathSegment {
    MoveTo(Vec2),
    LineTo(Vec2),
    QuadTo { ctrl: Vec2, to: Vec2 },
    CubicTo { ctrl1: Vec2, ctrl2: Vec2, to: Vec2 },
    Close,
}

/// Which side of the path counts as "inside" when the outline is filled.
///
/// Both variants use even-odd crossing; `Inverted` selects the complement.
/// The compositor clears everything inside, so:
/// - `Inverted` keeps the content enclosed by the path (standard mask),
/// - `Normal` punches the enclosed area out (reverse mask).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum InsideRule {
    Normal,
    Inverted,
}

impl InsideRule {
    /// Rule for the requested mask direction.
    #[inline]
    pub const fn for_mask(reverse_mask: bool) -> Self {
        if reverse_mask { InsideRule::Normal } else { InsideRule::Inverted }
    }

    #[inline]
    pub const fn inverse(self) -> Self {
        match self {
            InsideRule::Normal => InsideRule::Inverted,
            InsideRule::Inverted => InsideRule::Normal,
        }
    }

    #[inline]
    pub const fn is_inverted(self) -> bool {
        matches!(self, InsideRule::Inverted)
    }
}

/// Closed 2D path plus the rule deciding which side of it is filled.
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    segments: Vec<PathSegment>,
    rule: InsideRule,
}

impl Outline {
    /// Wraps raw segments. Callers are expected to close every subpath.
    pub fn from_segments(segments: Vec<PathSegment>, rule: InsideRule) -> Self {
        Self { segments, rule }
    }

    #[inline]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    #[inline]
    pub fn rule(&self) -> InsideRule {
        self.rule
    }

    /// True when this outline marks a hole rather than the region to keep.
    #[inline]
    pub fn is_reverse_mask(&self) -> bool {
        self.rule == InsideRule::Normal
    }

    /// Same geometry with a different inside-test rule.
    #[inline]
    pub fn with_rule(mut self, rule: InsideRule) -> Self {
        self.rule = rule;
        self
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The outline as a `kurbo` path, for hosts that draw with it directly.
    pub fn to_bez_path(&self) -> BezPath {
        flatten::to_bez_path(&self.segments)
    }

    /// Tight bounds of the drawn curve. Empty outlines report a zero rect.
    pub fn bounds(&self) -> Rect {
        if self.segments.is_empty() {
            return Rect::default();
        }

        let b = self.to_bez_path().bounding_box();
        Rect::from_ltrb(b.x0 as f32, b.y0 as f32, b.x1 as f32, b.y1 as f32)
    }

    /// Approximates every subpath by a closed polyline.
    ///
    /// `tolerance` is the maximum distance in pixels between a curve and its
    /// chords. Non-positive or non-finite values fall back to a quarter pixel.
    pub fn flatten(&self, tolerance: f32) -> Vec<Vec<Vec2>> {
        flatten::flatten(&self.to_bez_path(), tolerance)
    }

    /// Hit test under this outline's [`InsideRule`].
    pub fn contains(&self, p: Vec2) -> bool {
        let winding = self.to_bez_path().winding(Point::new(p.x as f64, p.y as f64));
        let enclosed = winding % 2 != 0;
        enclosed != self.rule.is_inverted()
    }

    /// True when the path is a single subpath whose boundary never turns back
    /// on itself. Degenerate paths (fewer than three distinct points) are not
    /// convex.
    pub fn is_convex(&self) -> bool {
        match self.flatten(flatten::HIT_TEST_TOLERANCE).as_slice() {
            [poly] => flatten::polygon_is_convex(poly),
            _ => false,
        }
    }
}
