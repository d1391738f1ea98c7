//! Geometry types shared by the outline builder, compositor, and host adapter.
//!
//! Canonical space:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down

mod corner_set;
mod insets;
mod rect;
mod vec2;

pub use corner_set::{Corner, CornerSet};
pub use insets::Insets;
pub use rect::{IntRect, Rect};
pub use vec2::Vec2;
