//! CPU mask compositing.
//!
//! Each frame the surface is rendered into an offscreen layer sized exactly to
//! the surface, the outline is cleared with an opaque destination-out fill, and the
//! layer is composited onto the destination. The layer is the isolation
//! boundary: the clear never reaches pixels the surface does not own.

mod content;
mod error;

pub use content::{unpremultiplied_rgba8, PixmapSurface, SolidSurface, Surface};
pub use error::CompositeError;

use tiny_skia::{BlendMode, Color, FillRule, Mask, Paint, PathBuilder, Pixmap, PixmapMut, PixmapPaint, Transform};

use crate::config::CompositorConfig;
use crate::outline::{Outline, PathSegment};

/// Applies outlines to surfaces. Owns the offscreen layer and reuses it while
/// the surface size is unchanged.
pub struct MaskCompositor {
    config: CompositorConfig,
    layer: Option<Pixmap>,
    warned_fallback: bool,
}

impl Default for MaskCompositor {
    fn default() -> Self {
        Self::new(CompositorConfig::default())
    }
}

impl MaskCompositor {
    pub fn new(config: CompositorConfig) -> Self {
        Self {
            config,
            layer: None,
            warned_fallback: false,
        }
    }

    #[inline]
    pub fn config(&self) -> CompositorConfig {
        self.config
    }

    /// Size of the currently allocated layer, if any.
    pub fn layer_size(&self) -> Option<(u32, u32)> {
        self.layer.as_ref().map(|l| (l.width(), l.height()))
    }

    /// Draws `surface` at `origin` on `dest`, cleared wherever `outline`
    /// (under its inside-test rule) covers it.
    ///
    /// Never fails: when the layer cannot be allocated the surface is drawn
    /// directly, unmasked.
    pub fn apply_mask(&mut self, dest: &mut PixmapMut<'_>, origin: (i32, i32), surface: &dyn Surface, outline: &Outline) {
        if let Err(err) = self.try_apply_mask(dest, origin, surface, outline) {
            if self.warned_fallback {
                log::debug!("{err}; drawing unmasked");
            } else {
                log::warn!("{err}; drawing unmasked");
                self.warned_fallback = true;
            }
            let (width, height) = surface.size();
            if width > 0 && height > 0 {
                surface.draw(dest, Transform::from_translate(origin.0 as f32, origin.1 as f32));
            }
        }
    }

    /// Fallible form of [`apply_mask`](Self::apply_mask). On error nothing has
    /// been drawn to `dest`.
    pub fn try_apply_mask(
        &mut self,
        dest: &mut PixmapMut<'_>,
        origin: (i32, i32),
        surface: &dyn Surface,
        outline: &Outline,
    ) -> Result<(), CompositeError> {
        let (width, height) = surface.size();
        let anti_alias = self.config.anti_alias;

        let layer = self.ensure_layer(width, height)?;
        layer.fill(Color::TRANSPARENT);
        surface.draw(&mut layer.as_mut(), Transform::identity());

        carve(layer, outline, anti_alias)?;

        dest.draw_pixmap(
            origin.0,
            origin.1,
            layer.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );
        Ok(())
    }

    // ── private helpers ────────────────────────────────────────────────────

    fn ensure_layer(&mut self, width: u32, height: u32) -> Result<&mut Pixmap, CompositeError> {
        if self.layer_size() != Some((width, height)) {
            self.layer = Pixmap::new(width, height);
            match self.layer {
                Some(_) => log::debug!("allocated {width}x{height} mask layer"),
                None => return Err(CompositeError::LayerAllocation { width, height }),
            }
        }

        self.layer
            .as_mut()
            .ok_or(CompositeError::LayerAllocation { width, height })
    }
}

/// Clears every layer pixel inside `outline`, weighted by coverage.
fn carve(layer: &mut Pixmap, outline: &Outline, anti_alias: bool) -> Result<(), CompositeError> {
    let (width, height) = (layer.width(), layer.height());
    let inverted = outline.rule().is_inverted();

    let Some(path) = to_skia_path(outline) else {
        // Nothing is enclosed: an inverted rule covers the whole layer.
        if inverted {
            layer.fill(Color::TRANSPARENT);
        }
        return Ok(());
    };

    let mut mask = Mask::new(width, height).ok_or(CompositeError::MaskAllocation { width, height })?;
    mask.fill_path(&path, FillRule::EvenOdd, anti_alias, Transform::identity());
    if inverted {
        mask.invert();
    }

    let Some(bounds) = tiny_skia::Rect::from_xywh(0.0, 0.0, width as f32, height as f32) else {
        return Ok(());
    };

    // Destination-out scales each pixel by (1 - coverage), so zero coverage
    // leaves it untouched.
    let mut paint = Paint {
        blend_mode: BlendMode::DestinationOut,
        anti_alias: false,
        ..Paint::default()
    };
    paint.set_color(Color::BLACK);
    layer.fill_rect(bounds, &paint, Transform::identity(), Some(&mask));
    Ok(())
}

/// Converts an outline to a rasterizable path. `None` when the geometry
/// encloses no area the rasterizer can represent (empty or non-finite).
fn to_skia_path(outline: &Outline) -> Option<tiny_skia::Path> {
    let mut pb = PathBuilder::new();
    for seg in outline.segments() {
        match *seg {
            PathSegment::MoveTo(p) => pb.move_to(p.x, p.y),
            PathSegment::LineTo(p) => pb.line_to(p.x, p.y),
            PathSegment::QuadTo { ctrl, to } => pb.quad_to(ctrl.x, ctrl.y, to.x, to.y),
            PathSegment::CubicTo { ctrl1, ctrl2, to } => {
                pb.cubic_to(ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y)
            }
            PathSegment::Close => pb.close(),
        }
    }

    let path = pb.finish()?;
    let b = path.bounds();
    if b.width() <= 0.0 || b.height() <= 0.0 {
        return None;
    }
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{CornerSet, Rect};
    use crate::outline::{build_circle, build_outline, build_rounded_rect};
    use crate::shape::ShapeKind;

    const SIZE: u32 = 400;

    fn exact() -> MaskCompositor {
        MaskCompositor::new(CompositorConfig { anti_alias: false })
    }

    fn opaque(w: u32, h: u32) -> SolidSurface {
        SolidSurface::new(w, h, Color::from_rgba8(30, 120, 200, 255))
    }

    fn render(compositor: &mut MaskCompositor, surface: &dyn Surface, outline: &Outline) -> Pixmap {
        let (w, h) = surface.size();
        let mut dest = Pixmap::new(w.max(1), h.max(1)).unwrap();
        compositor.apply_mask(&mut dest.as_mut(), (0, 0), surface, outline);
        dest
    }

    fn alpha(p: &Pixmap, x: u32, y: u32) -> u8 {
        p.pixel(x, y).unwrap().alpha()
    }

    fn dist_from(x: u32, y: u32, cx: f32, cy: f32) -> f32 {
        (x as f32 + 0.5 - cx).hypot(y as f32 + 0.5 - cy)
    }

    fn dist_from_center(x: u32, y: u32) -> f32 {
        dist_from(x, y, 200.0, 200.0)
    }

    /// Translucent diagonal gradient, so every pixel has a distinct value.
    fn gradient(w: u32, h: u32) -> PixmapSurface {
        let data: Vec<u8> = (0..h)
            .flat_map(|y| {
                (0..w).flat_map(move |x| {
                    [(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8, 64 + ((x * 3 + y) % 192) as u8]
                })
            })
            .collect();
        PixmapSurface::from_rgba8(w, h, &data).unwrap()
    }

    // ── circle masks ──────────────────────────────────────────────────────

    #[test]
    fn standard_circle_keeps_only_the_disc() {
        let (kind, outline) = build_outline(Rect::new(0.0, 0.0, 400.0, 400.0), 200.0, CornerSet::ALL, false);
        assert_eq!(kind, ShapeKind::Circle);

        let surface = opaque(SIZE, SIZE);
        let out = render(&mut exact(), &surface, &outline);

        for y in 0..SIZE {
            for x in 0..SIZE {
                let d = dist_from_center(x, y);
                if d < 199.0 {
                    assert_eq!(alpha(&out, x, y), 255, "({x},{y}) d={d}");
                } else if d > 201.0 {
                    assert_eq!(alpha(&out, x, y), 0, "({x},{y}) d={d}");
                }
            }
        }
        assert_eq!(alpha(&out, 0, 0), 0);
        assert_eq!(alpha(&out, 399, 399), 0);
    }

    #[test]
    fn reverse_circle_keeps_the_complement() {
        let outline = build_circle(200.0, 200.0, 400.0, 400.0, true);
        let surface = opaque(SIZE, SIZE);
        let out = render(&mut exact(), &surface, &outline);

        for y in 0..SIZE {
            for x in 0..SIZE {
                let d = dist_from_center(x, y);
                if d < 199.0 {
                    assert_eq!(alpha(&out, x, y), 0, "({x},{y}) d={d}");
                } else if d > 201.0 {
                    assert_eq!(alpha(&out, x, y), 255, "({x},{y}) d={d}");
                }
            }
        }
    }

    #[test]
    fn antialiased_circle_is_exact_away_from_the_edge() {
        let surface = opaque(SIZE, SIZE);
        let disc = render(&mut MaskCompositor::default(), &surface, &build_circle(200.0, 200.0, 400.0, 400.0, false));
        let hole = render(&mut MaskCompositor::default(), &surface, &build_circle(200.0, 200.0, 400.0, 400.0, true));

        for y in 0..SIZE {
            for x in 0..SIZE {
                let d = dist_from_center(x, y);
                if d < 199.0 {
                    assert_eq!(alpha(&disc, x, y), 255, "disc ({x},{y}) d={d}");
                    assert_eq!(alpha(&hole, x, y), 0, "hole ({x},{y}) d={d}");
                } else if d > 201.0 {
                    assert_eq!(alpha(&disc, x, y), 0, "disc ({x},{y}) d={d}");
                    assert_eq!(alpha(&hole, x, y), 255, "hole ({x},{y}) d={d}");
                }
            }
        }
    }

    #[test]
    fn non_square_circle_uses_the_shorter_side() {
        let (kind, outline) = build_outline(Rect::new(0.0, 0.0, 300.0, 200.0), 150.0, CornerSet::ALL, false);
        assert_eq!(kind, ShapeKind::Circle);

        let out = render(&mut exact(), &opaque(300, 200), &outline);

        for y in 0..200 {
            for x in 0..300 {
                let d = dist_from(x, y, 150.0, 100.0);
                if d < 99.0 {
                    assert_eq!(alpha(&out, x, y), 255, "({x},{y}) d={d}");
                } else if d > 101.0 {
                    assert_eq!(alpha(&out, x, y), 0, "({x},{y}) d={d}");
                }
            }
        }
        assert_eq!(alpha(&out, 10, 100), 0);
        assert_eq!(alpha(&out, 289, 100), 0);
        assert_eq!(alpha(&out, 150, 5), 255);
    }

    #[test]
    fn kept_pixels_are_bit_identical_to_unmasked_render() {
        let surface = gradient(SIZE, SIZE);
        let mut unmasked = Pixmap::new(SIZE, SIZE).unwrap();
        surface.draw(&mut unmasked.as_mut(), Transform::identity());

        let outline = build_circle(200.0, 200.0, 400.0, 400.0, false);
        let out = render(&mut MaskCompositor::default(), &surface, &outline);

        let mut checked = 0;
        for y in 0..SIZE {
            for x in 0..SIZE {
                if dist_from_center(x, y) < 199.0 {
                    assert_eq!(out.pixel(x, y), unmasked.pixel(x, y), "({x},{y})");
                    checked += 1;
                }
            }
        }
        assert!(checked > 120_000);
    }

    #[test]
    fn reverse_mask_keeps_the_outside_bit_identical() {
        let surface = gradient(100, 100);
        let mut unmasked = Pixmap::new(100, 100).unwrap();
        surface.draw(&mut unmasked.as_mut(), Transform::identity());

        let outline = build_rounded_rect(Rect::new(20.0, 20.0, 60.0, 60.0), 10.0, 10.0, CornerSet::ALL, true);
        let out = render(&mut MaskCompositor::default(), &surface, &outline);

        for y in 0..100 {
            for x in 0..100 {
                if !(18..82).contains(&x) || !(18..82).contains(&y) {
                    assert_eq!(out.pixel(x, y), unmasked.pixel(x, y), "({x},{y})");
                }
            }
        }
        assert_eq!(alpha(&out, 50, 50), 0);
    }

    // ── rounded rectangles ────────────────────────────────────────────────

    #[test]
    fn top_rounded_rect_cuts_only_top_corners() {
        let (kind, outline) = build_outline(Rect::new(0.0, 0.0, 400.0, 400.0), 40.0, CornerSet::TOP, false);
        assert_eq!(kind, ShapeKind::RoundedRectangle);

        let out = render(&mut exact(), &opaque(SIZE, SIZE), &outline);

        assert_eq!(alpha(&out, 0, 0), 0);
        assert_eq!(alpha(&out, 399, 0), 0);
        assert_eq!(alpha(&out, 5, 5), 0);
        assert_eq!(alpha(&out, 0, 399), 255);
        assert_eq!(alpha(&out, 399, 399), 255);
        assert_eq!(alpha(&out, 200, 200), 255);
        assert_eq!(alpha(&out, 200, 0), 255);
        assert_eq!(alpha(&out, 0, 200), 255);
    }

    #[test]
    fn reversed_top_rounded_rect_is_a_cutout() {
        let (_, outline) = build_outline(Rect::new(0.0, 0.0, 400.0, 400.0), 40.0, CornerSet::TOP, true);
        let out = render(&mut exact(), &opaque(SIZE, SIZE), &outline);

        assert_eq!(alpha(&out, 0, 0), 255);
        assert_eq!(alpha(&out, 399, 0), 255);
        assert_eq!(alpha(&out, 200, 200), 0);
        assert_eq!(alpha(&out, 0, 399), 0);
        assert_eq!(alpha(&out, 399, 399), 0);
    }

    #[test]
    fn inset_reverse_mask_keeps_the_frame() {
        let outline = build_rounded_rect(Rect::new(20.0, 20.0, 60.0, 60.0), 10.0, 10.0, CornerSet::ALL, true);
        let out = render(&mut exact(), &opaque(100, 100), &outline);

        assert_eq!(alpha(&out, 5, 5), 255);
        assert_eq!(alpha(&out, 95, 50), 255);
        assert_eq!(alpha(&out, 50, 50), 0);
    }

    // ── degenerate input ──────────────────────────────────────────────────

    #[test]
    fn zero_radius_circle_clears_everything() {
        let outline = build_circle(50.0, 50.0, 0.0, 0.0, false);
        let out = render(&mut exact(), &opaque(100, 100), &outline);
        assert!(out.pixels().iter().all(|p| p.alpha() == 0));
    }

    #[test]
    fn zero_radius_reverse_circle_keeps_everything() {
        let outline = build_circle(50.0, 50.0, 0.0, 0.0, true);
        let out = render(&mut exact(), &opaque(100, 100), &outline);
        assert!(out.pixels().iter().all(|p| p.alpha() == 255));
    }

    #[test]
    fn zero_sized_surface_is_an_error_and_a_no_op() {
        let outline = build_circle(0.0, 0.0, 0.0, 0.0, false);
        let mut compositor = exact();
        let mut dest = Pixmap::new(4, 4).unwrap();

        let err = compositor
            .try_apply_mask(&mut dest.as_mut(), (0, 0), &opaque(0, 4), &outline)
            .unwrap_err();
        assert_eq!(err, CompositeError::LayerAllocation { width: 0, height: 4 });

        compositor.apply_mask(&mut dest.as_mut(), (0, 0), &opaque(0, 4), &outline);
        assert!(dest.pixels().iter().all(|p| p.alpha() == 0));
        assert_eq!(compositor.layer_size(), None);
    }

    // ── layer management ──────────────────────────────────────────────────

    #[test]
    fn layer_follows_surface_size() {
        let mut compositor = exact();
        let outline = build_circle(10.0, 10.0, 20.0, 20.0, false);

        render(&mut compositor, &opaque(20, 20), &outline);
        assert_eq!(compositor.layer_size(), Some((20, 20)));

        render(&mut compositor, &opaque(30, 10), &outline);
        assert_eq!(compositor.layer_size(), Some((30, 10)));
    }

    #[test]
    fn stale_layer_content_does_not_leak_between_frames() {
        let mut compositor = exact();
        let keep_all = build_circle(10.0, 10.0, 0.0, 0.0, true);
        render(&mut compositor, &opaque(20, 20), &keep_all);

        let transparent = SolidSurface::new(20, 20, Color::TRANSPARENT);
        let out = render(&mut compositor, &transparent, &keep_all);
        assert!(out.pixels().iter().all(|p| p.alpha() == 0));
    }

    #[test]
    fn carve_stays_inside_the_layer() {
        let mut dest = Pixmap::new(60, 60).unwrap();
        dest.fill(Color::WHITE);

        let outline = build_circle(10.0, 10.0, 20.0, 20.0, false);
        exact().apply_mask(&mut dest.as_mut(), (20, 20), &opaque(20, 20), &outline);

        // Outside the layer the destination is untouched, even though the
        // standard mask clears everything outside the circle.
        assert_eq!(dest.pixel(5, 5).unwrap().red(), 255);
        assert_eq!(dest.pixel(55, 55).unwrap().red(), 255);
        // Layer corner was cleared, so white shows through.
        assert_eq!(dest.pixel(20, 20).unwrap().red(), 255);
        // Disc center shows the surface color.
        assert_eq!(dest.pixel(30, 30).unwrap().red(), 30);
    }
}
