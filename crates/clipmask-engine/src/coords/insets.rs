/// Per-side padding in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Insets {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Insets {
    #[inline]
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    #[inline]
    pub const fn uniform(v: f32) -> Self {
        Self::new(v, v, v, v)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::uniform(0.0)
    }
}
