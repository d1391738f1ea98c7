use super::{Insets, Vec2};

/// Axis-aligned rectangle in logical pixels (top-left origin).
///
/// Stored as origin + size. Edge accessors (`left`, `top`, `right`, `bottom`)
/// assume the rectangle is normalized; call [`Rect::normalized`] first when the
/// size may be negative.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Builds a rectangle from its four edges. Swapped edges are normalized.
    #[inline]
    pub fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Rect::new(left, top, right - left, bottom - top).normalized()
    }

    #[inline]
    pub fn left(self) -> f32 {
        self.origin.x
    }

    #[inline]
    pub fn top(self) -> f32 {
        self.origin.y
    }

    #[inline]
    pub fn right(self) -> f32 {
        self.origin.x + self.size.x
    }

    #[inline]
    pub fn bottom(self) -> f32 {
        self.origin.y + self.size.y
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x * 0.5, self.origin.y + self.size.y * 0.5)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let mut x = self.origin.x;
        let mut y = self.origin.y;
        let mut w = self.size.x;
        let mut h = self.size.y;

        if w < 0.0 {
            x += w;
            w = -w;
        }
        if h < 0.0 {
            y += h;
            h = -h;
        }

        Rect::new(x, y, w, h)
    }

    /// Shrinks the rectangle by `insets`. The size never goes below zero.
    #[inline]
    pub fn inset(self, insets: Insets) -> Self {
        let r = self.normalized();
        Rect::new(
            r.origin.x + insets.left,
            r.origin.y + insets.top,
            (r.size.x - insets.left - insets.right).max(0.0),
            (r.size.y - insets.top - insets.bottom).max(0.0),
        )
    }
}

/// Integer rectangle given by its edges, as consumed by shadow/elevation backends.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct IntRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl IntRect {
    #[inline]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Rounds every edge of `rect` up to the next integer.
    #[inline]
    pub fn ceil_from(rect: Rect) -> Self {
        let r = rect.normalized();
        Self {
            left: r.left().ceil() as i32,
            top: r.top().ceil() as i32,
            right: r.right().ceil() as i32,
            bottom: r.bottom().ceil() as i32,
        }
    }

    #[inline]
    pub fn width(self) -> i32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(self) -> i32 {
        self.bottom - self.top
    }
}
