use std::fmt;

/// Why a mask could not be applied. The infallible entry point recovers from
/// every variant by drawing the surface unmasked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositeError {
    /// The offscreen layer could not be created (zero-sized surface).
    LayerAllocation { width: u32, height: u32 },
    /// The coverage mask for the outline could not be created.
    MaskAllocation { width: u32, height: u32 },
}

impl fmt::Display for CompositeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompositeError::LayerAllocation { width, height } => {
                write!(f, "cannot allocate {width}x{height} compositing layer")
            }
            CompositeError::MaskAllocation { width, height } => {
                write!(f, "cannot allocate {width}x{height} coverage mask")
            }
        }
    }
}

impl std::error::Error for CompositeError {}
