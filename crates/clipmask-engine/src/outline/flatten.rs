use kurbo::{BezPath, PathEl, Point};

use crate::coords::Vec2;

use super::PathSegment;

pub(super) const HIT_TEST_TOLERANCE: f32 = 0.1;

const DEFAULT_TOLERANCE: f32 = 0.25;

#[inline]
fn point(v: Vec2) -> Point {
    Point::new(v.x as f64, v.y as f64)
}

pub(super) fn to_bez_path(segments: &[PathSegment]) -> BezPath {
    let mut path = BezPath::new();
    for seg in segments {
        match *seg {
            PathSegment::MoveTo(p) => path.move_to(point(p)),
            PathSegment::LineTo(p) => path.line_to(point(p)),
            PathSegment::QuadTo { ctrl, to } => path.quad_to(point(ctrl), point(to)),
            PathSegment::CubicTo { ctrl1, ctrl2, to } => path.curve_to(point(ctrl1), point(ctrl2), point(to)),
            PathSegment::Close => path.close_path(),
        }
    }
    path
}

/// Splits a flattened path into one polyline per subpath. Subpaths with a
/// single point are dropped.
pub(super) fn flatten(path: &BezPath, tolerance: f32) -> Vec<Vec<Vec2>> {
    let tolerance = if tolerance.is_finite() && tolerance > 0.0 {
        tolerance
    } else {
        DEFAULT_TOLERANCE
    };

    let mut polys: Vec<Vec<Vec2>> = Vec::new();
    let mut current: Vec<Vec2> = Vec::new();

    path.flatten(tolerance as f64, |el| match el {
        PathEl::MoveTo(p) => {
            finish_subpath(&mut polys, &mut current);
            current.push(Vec2::new(p.x as f32, p.y as f32));
        }
        PathEl::LineTo(p) => current.push(Vec2::new(p.x as f32, p.y as f32)),
        PathEl::ClosePath => finish_subpath(&mut polys, &mut current),
        // Flattening only ever yields the three variants above.
        PathEl::QuadTo(..) | PathEl::CurveTo(..) => {}
    });

    finish_subpath(&mut polys, &mut current);
    polys
}

fn finish_subpath(polys: &mut Vec<Vec<Vec2>>, current: &mut Vec<Vec2>) {
    if current.len() > 1 {
        polys.push(std::mem::take(current));
    } else {
        current.clear();
    }
}

/// Convexity of a closed polyline: every turn goes the same way and the
/// boundary winds around exactly once.
pub(super) fn polygon_is_convex(poly: &[Vec2]) -> bool {
    const EPS: f32 = 1e-4;

    let mut points: Vec<Vec2> = Vec::with_capacity(poly.len());
    for &p in poly {
        if points.last().is_none_or(|&last| (p - last).length() > EPS) {
            points.push(p);
        }
    }
    while points.len() > 1 && (points[0] - points[points.len() - 1]).length() <= EPS {
        points.pop();
    }
    if points.len() < 3 {
        return false;
    }

    let n = points.len();
    let mut sign = 0.0f32;
    let mut turning = 0.0f32;

    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        let c = points[(i + 2) % n];
        let e0 = b - a;
        let e1 = c - b;

        let cross = e0.cross(e1);
        if cross.abs() > EPS {
            if sign == 0.0 {
                sign = cross.signum();
            } else if cross.signum() != sign {
                return false;
            }
        }
        turning += cross.atan2(e0.x * e1.x + e0.y * e1.y);
    }

    sign != 0.0 && (turning.abs() - std::f32::consts::TAU).abs() < 0.1
}
