//! clipmask engine crate.
//!
//! Builds circle and rounded-rectangle clip outlines for rectangular surfaces
//! and composites rendered content through them, either keeping the inside of
//! the outline (standard mask) or punching it out (reverse mask).

pub mod compositor;
pub mod config;
pub mod coords;
pub mod logging;
pub mod outline;
pub mod shape;
pub mod surface;

pub use compositor::{CompositeError, MaskCompositor, PixmapSurface, SolidSurface, Surface};
pub use config::{CompositorConfig, MaskStyle};
pub use coords::{Corner, CornerSet, Insets, IntRect, Rect, Vec2};
pub use outline::{build_circle, build_outline, build_rounded_rect, InsideRule, Outline, PathSegment};
pub use shape::{elevation_outline, ElevationOutline, ElevationSupport, OutlineProvider, ShapeKind};
pub use surface::MaskedSurface;

/// Re-exported so hosts can name pixmaps and colors without a direct dependency.
pub use tiny_skia;
/// Re-exported for [`Outline::to_bez_path`].
pub use kurbo;
