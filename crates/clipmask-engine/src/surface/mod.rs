//! Host-facing state holder for one masked surface.
//!
//! Wraps the mask parameters, the host padding and the surface size, and
//! rebuilds the outline only when one of them actually changes. Setters
//! return `true` on change so the host knows to invalidate.

use tiny_skia::PixmapMut;

use crate::compositor::{MaskCompositor, Surface};
use crate::config::{CompositorConfig, MaskStyle};
use crate::coords::{CornerSet, Insets, Rect, Vec2};
use crate::outline::{build_outline, Outline};
use crate::shape::{ElevationOutline, ElevationSupport, OutlineProvider, ShapeKind};

pub struct MaskedSurface {
    style: MaskStyle,
    padding: Insets,
    size: Vec2,

    kind: ShapeKind,
    outline: Outline,

    compositor: MaskCompositor,
}

impl MaskedSurface {
    pub fn new(style: MaskStyle, config: CompositorConfig) -> Self {
        let style = sanitize_style(style);
        let (kind, outline) = build_outline(Rect::default(), style.corner_radius, style.corners, style.reverse_mask);
        Self {
            style,
            padding: Insets::zero(),
            size: Vec2::zero(),
            kind,
            outline,
            compositor: MaskCompositor::new(config),
        }
    }

    #[inline]
    pub fn style(&self) -> MaskStyle {
        self.style
    }

    /// Padding as last set by the host, independent of the mask direction.
    #[inline]
    pub fn padding(&self) -> Insets {
        self.padding
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    #[inline]
    pub fn shape_kind(&self) -> ShapeKind {
        self.kind
    }

    #[inline]
    pub fn outline(&self) -> &Outline {
        &self.outline
    }

    /// Rectangle the outline is built in: the surface bounds minus padding.
    pub fn mask_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.size.x, self.size.y).inset(self.padding)
    }

    /// Padding the host should lay its content out with.
    ///
    /// A reverse mask lets the content fill the whole surface and insets the
    /// hole instead, so the effective padding drops to zero.
    pub fn effective_padding(&self) -> Insets {
        if self.style.reverse_mask { Insets::zero() } else { self.padding }
    }

    /// Negative or non-finite radii are stored as zero.
    pub fn set_corner_radius(&mut self, corner_radius: f32) -> bool {
        let corner_radius = sanitize(corner_radius);
        if self.style.corner_radius == corner_radius {
            return false;
        }
        self.style.corner_radius = corner_radius;
        self.rebuild();
        true
    }

    pub fn set_rounded_corners(&mut self, corners: CornerSet) -> bool {
        if self.style.corners == corners {
            return false;
        }
        self.style.corners = corners;
        self.rebuild();
        true
    }

    pub fn set_reverse_mask(&mut self, reverse_mask: bool) -> bool {
        if self.style.reverse_mask == reverse_mask {
            return false;
        }
        self.style.reverse_mask = reverse_mask;
        self.rebuild();
        true
    }

    pub fn set_style(&mut self, style: MaskStyle) -> bool {
        let style = sanitize_style(style);
        if self.style == style {
            return false;
        }
        self.style = style;
        self.rebuild();
        true
    }

    pub fn set_padding(&mut self, padding: Insets) -> bool {
        if self.padding == padding {
            return false;
        }
        self.padding = padding;
        self.rebuild();
        true
    }

    /// Updates the surface size. Negative or non-finite sizes count as zero.
    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        let size = Vec2::new(sanitize(width), sanitize(height));
        if self.size == size {
            return false;
        }
        self.size = size;
        self.rebuild();
        true
    }

    /// Renders `content` (drawn in surface coordinates) through the mask.
    pub fn draw(&mut self, dest: &mut PixmapMut<'_>, origin: (i32, i32), content: &dyn Surface) {
        self.compositor.apply_mask(dest, origin, content, &self.outline);
    }

    /// Elevation silhouette for the current state, or `None` when no shadow
    /// should be cast.
    pub fn elevation(&self, support: ElevationSupport, host_override: Option<ElevationOutline>) -> Option<ElevationOutline> {
        let provider = OutlineProvider::resolve(host_override, self.kind, self.style.reverse_mask)?;
        provider.outline(
            &self.outline,
            self.mask_rect(),
            self.style.corner_radius,
            self.style.corners,
            support,
        )
    }

    fn rebuild(&mut self) {
        let rect = self.mask_rect();
        let (kind, outline) = build_outline(rect, self.style.corner_radius, self.style.corners, self.style.reverse_mask);
        if kind != self.kind {
            log::debug!("mask shape changed {:?} -> {:?} for rect={:?}", self.kind, kind, rect);
        }
        self.kind = kind;
        self.outline = outline;
    }
}

fn sanitize(v: f32) -> f32 {
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}

fn sanitize_style(style: MaskStyle) -> MaskStyle {
    MaskStyle { corner_radius: sanitize(style.corner_radius), ..style }
}
