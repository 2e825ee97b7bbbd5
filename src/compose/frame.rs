//! Put a screenshot into its device frame.
//!
//! Two ways to do it, depending on what happens to the result next:
//!
//! - **Simple**: the frame stays at its artwork size and the screenshot is
//!   scaled down to the calibrated screen width. Output is as large as the
//!   frame asset.
//! - **Complex**: the screenshot keeps its native resolution and the frame is
//!   scaled up around it. The offset is scaled with the frame, since it was
//!   measured on the unscaled artwork.

use super::FrameError;
use crate::imaging::calculations::resize_multiplier;
use crate::imaging::{ImageBackend, Placement, Raster, Resize};
use crate::offsets::OffsetInfo;
use crate::screenshot::Screenshot;

/// Which scale the frame and screenshot meet at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameMode {
    /// Screenshot scaled down to the frame.
    Simple,
    /// Frame scaled up to the screenshot.
    Complex,
}

impl std::fmt::Display for FrameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            FrameMode::Simple => "simple",
            FrameMode::Complex => "complex",
        })
    }
}

/// Scale the frame so its screen area matches the screenshot's native width,
/// correcting `offset` by the same factor.
pub fn fit_frame_to_screenshot<B: ImageBackend>(
    backend: &B,
    frame: B::Image,
    offset: &mut OffsetInfo,
    screenshot: &Screenshot,
) -> Result<B::Image, FrameError> {
    let multiplier = resize_multiplier(screenshot.width, offset.reference_width);
    let width = OffsetInfo::scaled_frame_width(frame.width(), multiplier);
    let frame = backend
        .resize(frame, Resize::Width(width))
        .map_err(FrameError::imaging(&screenshot.path))?;
    offset.modify_offset(multiplier);
    tracing::debug!(
        screenshot = %screenshot.path.display(),
        multiplier,
        offset = ?offset.offset,
        "scaled frame to screenshot"
    );
    Ok(frame)
}

/// Composite the screenshot into the frame.
///
/// `frame` pairs the asset with its calibration. Without one (bezel-less
/// devices) the screenshot is returned as is.
/// The returned image always has the frame's dimensions, after any scaling.
pub fn put_into_frame<B: ImageBackend>(
    backend: &B,
    mode: FrameMode,
    image: B::Image,
    frame: Option<(B::Image, OffsetInfo)>,
    screenshot: &Screenshot,
) -> Result<B::Image, FrameError> {
    let Some((frame, mut offset)) = frame else {
        return Ok(image);
    };

    let (frame, image) = match mode {
        FrameMode::Simple if image.width() == offset.reference_width => (frame, image),
        FrameMode::Simple => {
            let image = backend
                .resize(image, Resize::Width(offset.reference_width))
                .map_err(FrameError::imaging(&screenshot.path))?;
            (frame, image)
        }
        FrameMode::Complex => {
            let frame = fit_frame_to_screenshot(backend, frame, &mut offset, screenshot)?;
            (frame, image)
        }
    };

    let (dx, dy) = offset.offset;
    Ok(backend.composite_over(frame, &image, Placement::at(dx, dy)))
}
