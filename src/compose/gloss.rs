//! Decorative gloss highlight over the screen's top-right corner.

use super::{Asset, FrameError};
use crate::imaging::{ImageBackend, Placement, Raster, Resize};
use crate::screenshot::Screenshot;
use std::path::Path;

/// Gloss covers this share of the screenshot's width...
pub const GLOSS_WIDTH_RATIO: f64 = 0.7;
/// ...and this share of its height.
pub const GLOSS_HEIGHT_RATIO: f64 = 0.69;

/// Size the gloss asset is forced to, ignoring its aspect ratio.
pub fn gloss_size(screen: (u32, u32)) -> (u32, u32) {
    let scale = |edge: u32, ratio: f64| ((f64::from(edge) * ratio).round() as u32).max(1);
    (
        scale(screen.0, GLOSS_WIDTH_RATIO),
        scale(screen.1, GLOSS_HEIGHT_RATIO),
    )
}

/// Overlay the gloss asset on `image` when `enabled`; otherwise return
/// `image` untouched.
pub fn add_gloss<B: ImageBackend>(
    backend: &B,
    image: B::Image,
    enabled: bool,
    gloss_path: &Path,
    screenshot: &Screenshot,
) -> Result<B::Image, FrameError> {
    if !enabled {
        return Ok(image);
    }

    let gloss = backend
        .open(gloss_path)
        .map_err(FrameError::asset(&screenshot.path, Asset::Gloss, gloss_path))?;
    let (width, height) = gloss_size(image.size());
    let gloss = backend
        .resize(gloss, Resize::Exact { width, height })
        .map_err(FrameError::imaging(&screenshot.path))?;
    Ok(backend.composite_over(image, &gloss, Placement::TopRight))
}
