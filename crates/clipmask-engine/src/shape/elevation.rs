use crate::coords::{CornerSet, IntRect, Rect};
use crate::outline::{clamp_radii, InsideRule, Outline};

use super::ShapeKind;

/// Silhouette handed to a hardware compositor for shadows and hit testing.
///
/// This is separate from the render mask and may be coarser than it.
#[derive(Debug, Clone, PartialEq)]
pub enum ElevationOutline {
    /// Oval inscribed in integer bounds.
    Oval(IntRect),
    /// The exact mask path, with the enclosed region as the inside.
    ConvexPath(Outline),
    /// Uniformly rounded rectangle.
    RoundRect { bounds: IntRect, radius: f32 },
    /// No silhouette; the surface casts no shadow.
    Empty,
}

/// Outline forms the host's elevation backend can express.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ElevationSupport {
    pub convex_path: bool,
    pub round_rect: bool,
}

impl Default for ElevationSupport {
    fn default() -> Self {
        Self { convex_path: true, round_rect: true }
    }
}

/// Builds the elevation silhouette for a masked surface.
///
/// Returns `None` for reverse masks: a surface with a hole has no simple
/// silhouette, so shadow casting is suppressed.
///
/// A circle's oval is centered on `rect`, the padded mask rectangle, so it
/// sits over the visible disc. Under asymmetric padding that is off-center
/// relative to the full view bounds.
///
/// Rounded rectangles try, in order: the exact path, a uniform round rect, an
/// empty outline. The round-rect step ignores per-corner selection and is only
/// taken when every corner is rounded, so a rectangle with any sharp corner on
/// a backend without path support casts no shadow.
pub fn elevation_outline(
    kind: ShapeKind,
    outline: &Outline,
    rect: Rect,
    corner_radius: f32,
    corners: CornerSet,
    support: ElevationSupport,
) -> Option<ElevationOutline> {
    if outline.is_reverse_mask() {
        return None;
    }

    let r = rect.normalized();

    let shape = match kind {
        ShapeKind::Circle => {
            let c = r.center();
            let radius = r.width().min(r.height()).max(0.0) * 0.5;
            let oval = Rect::from_ltrb(c.x - radius, c.y - radius, c.x + radius, c.y + radius);
            ElevationOutline::Oval(IntRect::ceil_from(oval))
        }
        ShapeKind::RoundedRectangle => {
            if support.convex_path && outline.is_convex() {
                ElevationOutline::ConvexPath(outline.clone().with_rule(InsideRule::Normal))
            } else if support.round_rect && corners.is_all() {
                let (radius, _) = clamp_radii(r, corner_radius, corner_radius);
                let radius = radius.min(r.height() * 0.5);
                ElevationOutline::RoundRect { bounds: IntRect::ceil_from(r), radius }
            } else {
                log::debug!(
                    "elevation outline unavailable for corners={:?} support={:?}; casting no shadow",
                    corners, support
                );
                ElevationOutline::Empty
            }
        }
    };

    Some(shape)
}
