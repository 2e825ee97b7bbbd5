//! Place the framed device on a background canvas.
//!
//! The background is forced to the screenshot's size, so the final image
//! has the dimensions the store expects. The device is shrunk to leave
//! `padding` on each side, centered, and sunk slightly below the bottom edge.
//! The band left above it holds the captions.

use super::{Asset, FrameError};
use crate::config::FrameConfig;
use crate::imaging::calculations::{device_width_in_background, frame_padding, place_device};
use crate::imaging::{ImageBackend, Placement, Raster, Resize};
use crate::screenshot::Screenshot;

/// Background canvas with the device placed on it.
pub struct Backdrop<I> {
    pub canvas: I,
    /// Height of the band above the device, available for captions.
    pub top_space: i64,
}

/// Open the background and make it exactly the screenshot's size when its
/// height differs.
pub fn load_background<B: ImageBackend>(
    backend: &B,
    config: &FrameConfig,
    screenshot: &Screenshot,
) -> Result<B::Image, FrameError> {
    let path = config.background.as_deref().ok_or_else(|| FrameError::Config {
        path: screenshot.path.clone(),
        source: crate::config::ConfigError::Validation("no background configured".into()),
    })?;
    let background = backend
        .open(path)
        .map_err(FrameError::asset(&screenshot.path, Asset::Background, path))?;

    if background.height() == screenshot.height {
        return Ok(background);
    }
    tracing::debug!(
        screenshot = %screenshot.path.display(),
        from = ?background.size(),
        to = ?screenshot.size(),
        "resizing background to screenshot"
    );
    backend
        .resize(
            background,
            Resize::Exact {
                width: screenshot.width,
                height: screenshot.height,
            },
        )
        .map_err(FrameError::imaging(&screenshot.path))
}

/// Put `device` on the configured background.
///
/// `framed` says whether `device` carries a bezel; only framed devices are
/// shrunk to the padded width. Bezel-less images keep their size.
pub fn place_on_background<B: ImageBackend>(
    backend: &B,
    device: B::Image,
    framed: bool,
    config: &FrameConfig,
    screenshot: &Screenshot,
) -> Result<Backdrop<B::Image>, FrameError> {
    let background = load_background(backend, config, screenshot)?;

    let device = if framed {
        let padding = frame_padding(config.padding, screenshot.density);
        let width = device_width_in_background(background.width(), padding);
        backend
            .resize(device, Resize::Width(width))
            .map_err(FrameError::imaging(&screenshot.path))?
    } else {
        device
    };

    let placement = place_device(
        background.size(),
        device.size(),
        screenshot.size_class,
        screenshot.orientation,
    );
    let canvas = backend.composite_over(
        background,
        &device,
        Placement::at(placement.left, placement.top_space),
    );

    Ok(Backdrop {
        canvas,
        top_space: placement.top_space,
    })
}
