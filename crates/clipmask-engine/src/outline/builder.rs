use crate::coords::{Corner, CornerSet, Rect, Vec2};
use crate::shape::ShapeKind;

use super::{InsideRule, Outline, PathSegment};

/// Cubic control-point distance for a quarter circle of radius 1.
const KAPPA: f32 = 0.552_284_8;

/// Builds a circle of radius `min(width, height) / 2` around the given center.
///
/// The path starts at the rightmost point and runs counter-clockwise on
/// screen (right → top → left → bottom) as four cubic quarter arcs. A zero or
/// negative dimension yields a zero-radius circle, which masks as empty.
pub fn build_circle(center_x: f32, center_y: f32, width: f32, height: f32, reverse_mask: bool) -> Outline {
    let r = non_negative(width).min(non_negative(height)) * 0.5;
    let k = r * KAPPA;
    let c = Vec2::new(center_x, center_y);

    let right = c + Vec2::new(r, 0.0);
    let top = c + Vec2::new(0.0, -r);
    let left = c + Vec2::new(-r, 0.0);
    let bottom = c + Vec2::new(0.0, r);

    let segments = vec![
        PathSegment::MoveTo(right),
        PathSegment::CubicTo {
            ctrl1: right + Vec2::new(0.0, -k),
            ctrl2: top + Vec2::new(k, 0.0),
            to: top,
        },
        PathSegment::CubicTo {
            ctrl1: top + Vec2::new(-k, 0.0),
            ctrl2: left + Vec2::new(0.0, -k),
            to: left,
        },
        PathSegment::CubicTo {
            ctrl1: left + Vec2::new(0.0, k),
            ctrl2: bottom + Vec2::new(-k, 0.0),
            to: bottom,
        },
        PathSegment::CubicTo {
            ctrl1: bottom + Vec2::new(k, 0.0),
            ctrl2: right + Vec2::new(0.0, k),
            to: right,
        },
        PathSegment::Close,
    ];

    Outline::from_segments(segments, InsideRule::for_mask(reverse_mask))
}

/// Clamps corner radii to `[0, width / 2]` and `[0, height / 2]`.
///
/// Negative and non-finite radii become zero.
pub fn clamp_radii(rect: Rect, rx: f32, ry: f32) -> (f32, f32) {
    let r = rect.normalized();
    let rx = non_negative(rx).min(non_negative(r.width()) * 0.5);
    let ry = non_negative(ry).min(non_negative(r.height()) * 0.5);
    (rx, ry)
}

/// Builds a rectangle whose selected corners are rounded.
///
/// Each rounded corner is a single quadratic whose control point sits on the
/// corner vertex; this is coarser than a circular arc and is kept that way so
/// rendering matches existing assets pixel for pixel. Sharp corners are two
/// straight segments meeting at the vertex.
///
/// The walk starts on the right edge at `top + ry` and visits the corners in
/// the order top-right, top-left, bottom-left, bottom-right.
pub fn build_rounded_rect(rect: Rect, rx: f32, ry: f32, corners: CornerSet, reverse_mask: bool) -> Outline {
    let r = rect.normalized();
    let (rx, ry) = clamp_radii(r, rx, ry);
    let (left, top, right, bottom) = (r.left(), r.top(), r.right(), r.bottom());

    let mut segments = Vec::with_capacity(14);
    segments.push(PathSegment::MoveTo(Vec2::new(right, top + ry)));

    push_corner(
        &mut segments,
        corners.contains(Corner::TopRight),
        Vec2::new(right, top),
        Vec2::new(right - rx, top),
    );
    segments.push(PathSegment::LineTo(Vec2::new(left + rx, top)));

    push_corner(
        &mut segments,
        corners.contains(Corner::TopLeft),
        Vec2::new(left, top),
        Vec2::new(left, top + ry),
    );
    segments.push(PathSegment::LineTo(Vec2::new(left, bottom - ry)));

    push_corner(
        &mut segments,
        corners.contains(Corner::BottomLeft),
        Vec2::new(left, bottom),
        Vec2::new(left + rx, bottom),
    );
    segments.push(PathSegment::LineTo(Vec2::new(right - rx, bottom)));

    push_corner(
        &mut segments,
        corners.contains(Corner::BottomRight),
        Vec2::new(right, bottom),
        Vec2::new(right, bottom - ry),
    );
    segments.push(PathSegment::LineTo(Vec2::new(right, top + ry)));
    segments.push(PathSegment::Close);

    Outline::from_segments(segments, InsideRule::for_mask(reverse_mask))
}

/// Classifies the shape and builds the matching outline.
///
/// Circles are centered in `rect`; everything else is a rounded rectangle
/// using `corner_radius` on both axes.
pub fn build_outline(rect: Rect, corner_radius: f32, corners: CornerSet, reverse_mask: bool) -> (ShapeKind, Outline) {
    let r = rect.normalized();
    let kind = ShapeKind::classify(r.width(), r.height(), corner_radius, corners);

    let outline = match kind {
        ShapeKind::Circle => {
            let c = r.center();
            build_circle(c.x, c.y, r.width(), r.height(), reverse_mask)
        }
        ShapeKind::RoundedRectangle => {
            build_rounded_rect(r, corner_radius, corner_radius, corners, reverse_mask)
        }
    };

    log::trace!(
        "built {:?} outline: rect={:?} radius={} corners={:?} reverse={}",
        kind, r, corner_radius, corners, reverse_mask
    );

    (kind, outline)
}

fn push_corner(segments: &mut Vec<PathSegment>, rounded: bool, vertex: Vec2, to: Vec2) {
    if rounded {
        segments.push(PathSegment::QuadTo { ctrl: vertex, to });
    } else {
        segments.push(PathSegment::LineTo(vertex));
        segments.push(PathSegment::LineTo(to));
    }
}

#[inline]
fn non_negative(v: f32) -> f32 {
    if v.is_finite() && v > 0.0 { v } else { 0.0 }
}
