use tiny_skia::{Color, IntSize, Paint, Pixmap, PixmapMut, PixmapPaint, Transform};

/// Renderable content with a fixed pixel size.
///
/// `draw` paints the unmasked content with its top-left corner at the origin
/// of `transform`.
pub trait Surface {
    fn size(&self) -> (u32, u32);

    fn draw(&self, canvas: &mut PixmapMut<'_>, transform: Transform);
}

/// Surface filled with a single color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolidSurface {
    pub width: u32,
    pub height: u32,
    pub color: Color,
}

impl SolidSurface {
    pub fn new(width: u32, height: u32, color: Color) -> Self {
        Self { width, height, color }
    }
}

impl Surface for SolidSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn draw(&self, canvas: &mut PixmapMut<'_>, transform: Transform) {
        // tiny-skia accepts a zero-width rect and still paints a column.
        if self.width == 0 || self.height == 0 {
            return;
        }
        let Some(rect) = tiny_skia::Rect::from_xywh(0.0, 0.0, self.width as f32, self.height as f32) else {
            return;
        };

        let mut paint = Paint::default();
        paint.set_color(self.color);
        paint.anti_alias = false;
        canvas.fill_rect(rect, &paint, transform, None);
    }
}

/// Surface backed by an owned raster image.
#[derive(Clone)]
pub struct PixmapSurface {
    pixmap: Pixmap,
}

impl PixmapSurface {
    pub fn new(pixmap: Pixmap) -> Self {
        Self { pixmap }
    }

    /// Wraps straight-alpha RGBA8 rows. Returns `None` when the size is zero
    /// or `data` is not exactly `width * height * 4` bytes.
    pub fn from_rgba8(width: u32, height: u32, data: &[u8]) -> Option<Self> {
        let size = IntSize::from_wh(width, height)?;
        if data.len() != (width as usize) * (height as usize) * 4 {
            return None;
        }

        let premultiplied = data
            .chunks_exact(4)
            .flat_map(|px| {
                let a = px[3] as u16;
                let mul = |c: u8| ((c as u16 * a + 127) / 255) as u8;
                [mul(px[0]), mul(px[1]), mul(px[2]), px[3]]
            })
            .collect();

        Pixmap::from_vec(premultiplied, size).map(Self::new)
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }
}

impl Surface for PixmapSurface {
    fn size(&self) -> (u32, u32) {
        (self.pixmap.width(), self.pixmap.height())
    }

    fn draw(&self, canvas: &mut PixmapMut<'_>, transform: Transform) {
        canvas.draw_pixmap(0, 0, self.pixmap.as_ref(), &PixmapPaint::default(), transform, None);
    }
}

/// Straight-alpha RGBA8 copy of `pixmap`, row-major, for image encoders.
pub fn unpremultiplied_rgba8(pixmap: &Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|px| {
            let c = px.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect()
}
