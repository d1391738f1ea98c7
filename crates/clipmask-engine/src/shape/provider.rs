use crate::coords::{CornerSet, Rect};
use crate::outline::Outline;

use super::{elevation_outline, ElevationOutline, ElevationSupport, ShapeKind};

/// Source of a surface's elevation silhouette.
///
/// `Circle` and `RoundedRectangle` are derived from the mask; `HostSupplied`
/// is whatever the host installed and is passed through untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum OutlineProvider {
    Circle,
    RoundedRectangle,
    HostSupplied(ElevationOutline),
}

impl OutlineProvider {
    /// Picks the provider for the current mask state.
    ///
    /// A host-supplied outline always wins. Otherwise reverse masks get no
    /// provider at all, and standard masks get the one matching `kind`.
    pub fn resolve(host_override: Option<ElevationOutline>, kind: ShapeKind, reverse_mask: bool) -> Option<Self> {
        match host_override {
            Some(outline) => Some(OutlineProvider::HostSupplied(outline)),
            None if reverse_mask => None,
            None => Some(match kind {
                ShapeKind::Circle => OutlineProvider::Circle,
                ShapeKind::RoundedRectangle => OutlineProvider::RoundedRectangle,
            }),
        }
    }

    pub fn outline(
        &self,
        mask: &Outline,
        rect: Rect,
        corner_radius: f32,
        corners: CornerSet,
        support: ElevationSupport,
    ) -> Option<ElevationOutline> {
        match self {
            OutlineProvider::Circle => {
                elevation_outline(ShapeKind::Circle, mask, rect, corner_radius, corners, support)
            }
            OutlineProvider::RoundedRectangle => {
                elevation_outline(ShapeKind::RoundedRectangle, mask, rect, corner_radius, corners, support)
            }
            OutlineProvider::HostSupplied(outline) => Some(outline.clone()),
        }
    }
}
