//! Plain configuration structs with host-facing defaults.

use crate::coords::CornerSet;

/// Mask parameters as a host widget would declare them.
///
/// Defaults: radius `0`, every corner rounded, standard (non-reversed) mask.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MaskStyle {
    /// Corner radius in device pixels.
    pub corner_radius: f32,
    pub corners: CornerSet,
    pub reverse_mask: bool,
}

impl Default for MaskStyle {
    fn default() -> Self {
        Self {
            corner_radius: 0.0,
            corners: CornerSet::ALL,
            reverse_mask: false,
        }
    }
}

impl MaskStyle {
    /// Decodes integer widget attributes.
    ///
    /// `rounded_corners` uses the [`CornerSet`] bit layout (`15` = all).
    /// Negative radii are kept as-is here and clamped when the outline is built.
    pub fn from_attributes(corner_radius_px: i32, rounded_corners: u32, reverse_mask: bool) -> Self {
        Self {
            corner_radius: corner_radius_px as f32,
            corners: CornerSet::from_bits(rounded_corners),
            reverse_mask,
        }
    }
}

/// Rasterization knobs for [`MaskCompositor`](crate::compositor::MaskCompositor).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct CompositorConfig {
    /// Smooth the carved edge. Disable for exact pixel-center coverage.
    pub anti_alias: bool,
}

impl Default for CompositorConfig {
    fn default() -> Self {
        Self { anti_alias: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Corner;

    #[test]
    fn default_style_rounds_all_corners_without_radius() {
        let style = MaskStyle::default();
        assert_eq!(style.corner_radius, 0.0);
        assert!(style.corners.is_all());
        assert!(!style.reverse_mask);
    }

    #[test]
    fn attributes_decode_corner_bits() {
        let style = MaskStyle::from_attributes(24, 0b1001, true);
        assert_eq!(style.corner_radius, 24.0);
        assert!(style.corners.contains(Corner::TopLeft));
        assert!(style.corners.contains(Corner::BottomRight));
        assert!(!style.corners.contains(Corner::TopRight));
        assert!(style.reverse_mask);
    }

    #[test]
    fn compositor_defaults_to_anti_aliasing() {
        assert!(CompositorConfig::default().anti_alias);
    }
}
