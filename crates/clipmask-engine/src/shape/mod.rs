//! Shape classification and the simplified outlines handed to shadow casters.

mod elevation;
mod provider;

pub use elevation::{elevation_outline, ElevationOutline, ElevationSupport};
pub use provider::OutlineProvider;

use crate::coords::CornerSet;

/// Which outline strategy a masked surface uses.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShapeKind {
    Circle,
    RoundedRectangle,
}

impl ShapeKind {
    /// A surface is a circle only when every corner is rounded and the radius
    /// reaches half of both dimensions. A single sharp corner always yields
    /// `RoundedRectangle`.
    pub fn classify(width: f32, height: f32, corner_radius: f32, corners: CornerSet) -> Self {
        if corners.is_all() && corner_radius >= height * 0.5 && corner_radius >= width * 0.5 {
            ShapeKind::Circle
        } else {
            ShapeKind::RoundedRectangle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Corner;

    #[test]
    fn half_extent_radius_is_circle() {
        assert_eq!(ShapeKind::classify(400.0, 400.0, 200.0, CornerSet::ALL), ShapeKind::Circle);
        assert_eq!(ShapeKind::classify(400.0, 300.0, 200.0, CornerSet::ALL), ShapeKind::Circle);
    }

    #[test]
    fn small_radius_is_rounded_rect() {
        assert_eq!(
            ShapeKind::classify(400.0, 400.0, 40.0, CornerSet::ALL),
            ShapeKind::RoundedRectangle
        );
        assert_eq!(
            ShapeKind::classify(400.0, 300.0, 160.0, CornerSet::ALL),
            ShapeKind::RoundedRectangle
        );
    }

    #[test]
    fn any_sharp_corner_is_rounded_rect() {
        for corner in Corner::ALL {
            let corners = CornerSet::ALL.without(corner);
            assert_eq!(
                ShapeKind::classify(100.0, 100.0, 1000.0, corners),
                ShapeKind::RoundedRectangle,
                "{corner:?}"
            );
        }
    }

    #[test]
    fn zero_size_with_all_corners_is_circle() {
        assert_eq!(ShapeKind::classify(0.0, 0.0, 0.0, CornerSet::ALL), ShapeKind::Circle);
    }
}
