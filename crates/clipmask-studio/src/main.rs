use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clipmask_engine::compositor::unpremultiplied_rgba8;
use clipmask_engine::logging::{init_logging, LoggingConfig};
use clipmask_engine::tiny_skia::{Color, Pixmap};
use clipmask_engine::{
    CompositorConfig, CornerSet, ElevationSupport, Insets, MaskStyle, MaskedSurface, PixmapSurface,
};

const SIZE: u32 = 400;

/// The four reference views: a circle, a fully rounded card, a card rounded
/// only on top, and the same card used as a reverse mask.
fn scenarios() -> [(&'static str, MaskStyle, Insets); 4] {
    [
        ("circle", MaskStyle { corner_radius: 200.0, ..MaskStyle::default() }, Insets::zero()),
        ("rounded", MaskStyle { corner_radius: 40.0, ..MaskStyle::default() }, Insets::zero()),
        (
            "rounded_top",
            MaskStyle { corner_radius: 40.0, corners: CornerSet::TOP, reverse_mask: false },
            Insets::zero(),
        ),
        (
            "reverse_top",
            MaskStyle { corner_radius: 40.0, corners: CornerSet::TOP, reverse_mask: true },
            Insets::uniform(40.0),
        ),
    ]
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let out_dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("clipmask-out"));
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    let content = sample_content().context("building sample content")?;

    for (name, style, padding) in scenarios() {
        let mut surface = MaskedSurface::new(style, CompositorConfig::default());
        surface.set_padding(padding);
        surface.resize(SIZE as f32, SIZE as f32);

        let mut dest = Pixmap::new(SIZE, SIZE).context("allocating destination pixmap")?;
        dest.fill(Color::TRANSPARENT);
        surface.draw(&mut dest.as_mut(), (0, 0), &content);

        let path = out_dir.join(format!("{name}.png"));
        save_png(&dest, &path)?;

        log::info!(
            "{name}: shape={:?} elevation={:?} -> {}",
            surface.shape_kind(),
            surface.elevation(ElevationSupport::default(), None),
            path.display()
        );
    }

    println!("wrote {} masks to {}", scenarios().len(), out_dir.display());
    Ok(())
}

/// Diagonal gradient with a light checker so cut edges are easy to inspect.
fn sample_content() -> Result<PixmapSurface> {
    let image = image::RgbaImage::from_fn(SIZE, SIZE, |x, y| {
        let t = (x + y) as f32 / (2 * SIZE) as f32;
        let checker = if (x / 25 + y / 25) % 2 == 0 { 0 } else { 24 };
        image::Rgba([
            (40.0 + 180.0 * t) as u8 + checker,
            (90.0 + 60.0 * (1.0 - t)) as u8,
            (200.0 - 120.0 * t) as u8 + checker,
            255,
        ])
    });

    PixmapSurface::from_rgba8(image.width(), image.height(), image.as_raw())
        .context("sample image has an invalid size")
}

fn save_png(pixmap: &Pixmap, path: &Path) -> Result<()> {
    let rgba = unpremultiplied_rgba8(pixmap);
    image::save_buffer(path, &rgba, pixmap.width(), pixmap.height(), image::ExtendedColorType::Rgba8)
        .with_context(|| format!("writing {}", path.display()))
}
