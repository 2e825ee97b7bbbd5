//! Pure calculation functions for layout geometry.
//!
//! All functions here are pure and testable without any I/O or images.
//! The compositing stages call these to decide sizes and positions, then
//! hand the results to the backend.

use super::params::Resize;
use crate::screenshot::{Density, Orientation, SizeClass};

/// Frame padding multiplier in tenths, per density.
///
/// Triple-density frame assets are drawn at a higher pixel density, so they
/// need 1.7× the configured padding. Kept as an integer ratio so that
/// `padding * 1.7` is exact for whole-pixel paddings.
fn padding_tenths(density: Density) -> u32 {
    match density {
        Density::Triple => 17,
        Density::Single | Density::Double => 10,
    }
}

/// Horizontal padding between the framed device and the background edge.
///
/// ```text
/// padding 40, double density → 40
/// padding 40, triple density → 68
/// ```
pub fn frame_padding(padding: u32, density: Density) -> f64 {
    f64::from(padding) * f64::from(padding_tenths(density)) / 10.0
}

/// Factor that scales a frame calibrated at `reference_width` up to the
/// screenshot's native width.
pub fn resize_multiplier(screenshot_width: u32, reference_width: u32) -> f64 {
    f64::from(screenshot_width) / f64::from(reference_width.max(1))
}

/// Frame width after scaling by `multiplier`.
pub fn scaled_width(width: u32, multiplier: f64) -> u32 {
    ((f64::from(width) * multiplier).round() as u32).max(1)
}

/// Width the framed device is shrunk to so it fits the background padding.
pub fn device_width_in_background(background_width: u32, frame_padding: f64) -> u32 {
    ((f64::from(background_width) - frame_padding * 2.0).round() as i64).max(1) as u32
}

/// Vertical nudge per (size class, orientation), in pixels, added to the
/// bottom space. Negative values push the device further below the canvas.
///
/// These are tuned to the bezel artwork: every frame hangs a little off the
/// bottom edge, portrait frames hang further, and mini devices need their own
/// correction in both orientations.
pub const VERTICAL_ADJUSTMENTS: &[(SizeClass, Orientation, i64)] = &[
    (SizeClass::Regular, Orientation::Portrait, -40),
    (SizeClass::Regular, Orientation::Landscape, 0),
    (SizeClass::Mini, Orientation::Portrait, -90),
    (SizeClass::Mini, Orientation::Landscape, 65),
];

pub fn vertical_adjustment(size_class: SizeClass, orientation: Orientation) -> i64 {
    VERTICAL_ADJUSTMENTS
        .iter()
        .find(|(class, orient, _)| *class == size_class && *orient == orientation)
        .map(|(_, _, adjust)| *adjust)
        .unwrap_or(0)
}

/// Where the framed device lands on the background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DevicePlacement {
    /// X offset of the device's left edge.
    pub left: i64,
    /// Space from the device's bottom edge to the canvas bottom (negative
    /// when the device overhangs).
    pub bottom_space: i64,
    /// Y offset of the device's top edge; also the band available for captions.
    pub top_space: i64,
}

/// Center the device horizontally and sink it slightly below the bottom edge.
pub fn place_device(
    background: (u32, u32),
    device: (u32, u32),
    size_class: SizeClass,
    orientation: Orientation,
) -> DevicePlacement {
    let (bg_w, bg_h) = background;
    let (dev_w, dev_h) = device;

    let left = (f64::from(bg_w) / 2.0 - f64::from(dev_w) / 2.0).round() as i64;
    let bottom_space = -((f64::from(dev_h) / 10.0).round() as i64)
        + vertical_adjustment(size_class, orientation);
    let top_space = i64::from(bg_h) - i64::from(dev_h) - bottom_space;

    DevicePlacement {
        left,
        bottom_space,
        top_space,
    }
}

/// Caption point size.
///
/// An explicit size is always honored, scaled by 3 for triple density and
/// by 2 otherwise. Without one, the size follows the available space:
/// `max(top_space / 3, canvas_width / 30)`.
pub fn font_size(
    explicit: Option<u32>,
    density: Density,
    top_space: i64,
    canvas_width: u32,
) -> u32 {
    match explicit {
        Some(size) => {
            let multiplier = if density == Density::Triple { 3 } else { 2 };
            size.saturating_mul(multiplier)
        }
        None => {
            let by_space = top_space as f64 / 3.0;
            let by_width = f64::from(canvas_width) / 30.0;
            (by_space.max(by_width).round() as u32).max(1)
        }
    }
}

/// Gap between keyword and title.
pub fn keyword_padding(font_size: u32) -> u32 {
    (f64::from(font_size) / 2.0).round() as u32
}

/// Final sizes and positions of the caption images.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionLayout {
    /// Scale applied to both captions; 1.0 when they already fit.
    pub shrink: f64,
    pub title_size: (u32, u32),
    pub title_origin: (i64, i64),
    pub keyword_size: Option<(u32, u32)>,
    pub keyword_origin: Option<(i64, i64)>,
}

impl CaptionLayout {
    pub fn needs_resize(&self) -> bool {
        self.shrink < 1.0
    }
}

/// Lay out a title (and optional keyword before it) centered in the band
/// above the device.
///
/// If keyword, title and a padding on either side do not fit the canvas
/// width, both captions shrink by the same factor so that they exactly do.
/// Captions never scale up.
pub fn layout_captions(
    title: (u32, u32),
    keyword: Option<(u32, u32)>,
    font_size: u32,
    canvas_width: u32,
    top_space: i64,
) -> CaptionLayout {
    let padding = f64::from(keyword_padding(font_size));

    let mut sum_width = f64::from(title.0);
    let mut height = f64::from(title.1);
    if let Some((kw_w, kw_h)) = keyword {
        sum_width += f64::from(kw_w) + padding;
        height = height.max(f64::from(kw_h));
    }

    let mut shrink = 1.0;
    let mut title_size = title;
    let mut keyword_size = keyword;

    let ratio = (sum_width + padding * 2.0) / f64::from(canvas_width.max(1));
    if ratio > 1.0 {
        shrink = 1.0 / ratio;
        title_size = Resize::Width(scaled_width(title.0, shrink)).target_size(title);
        keyword_size = keyword.map(|kw| Resize::Width(scaled_width(kw.0, shrink)).target_size(kw));
        sum_width *= shrink;
        height *= shrink;
    }

    let top = (top_space as f64 / 2.0 - height / 2.0).round() as i64;
    let mut left = f64::from(canvas_width) / 2.0 - sum_width / 2.0;

    let keyword_origin = keyword_size.map(|(kw_w, _)| {
        let origin = (left.round() as i64, top);
        left = left.round() + f64::from(kw_w) + padding * shrink;
        origin
    });

    CaptionLayout {
        shrink,
        title_size,
        title_origin: (left.round() as i64, top),
        keyword_size,
        keyword_origin,
    }
}
