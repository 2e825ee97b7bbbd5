//! Screen offsets inside frame assets.
//!
//! Every frame asset has a transparent "screen" hole. An [`OffsetInfo`]
//! says where that hole is: the screenshot, scaled to `reference_width`,
//! goes at `offset` from the frame's top-left corner. The pair is only
//! valid together: when the frame is scaled by `m`, the offset must be
//! scaled by the same `m` ([`OffsetInfo::scaled`]) before compositing.
//!
//! Offsets come from the Framefile's `offset` entry when present, otherwise
//! from [`OFFSETS`], the calibration table for the bundled frame artwork.
//! In the Framefile they use the compact geometry notation:
//!
//! ```json
//! "offset": { "offset": "+133+50", "width": 500 }
//! ```

use crate::imaging::calculations::scaled_width;
use crate::screenshot::{Device, Orientation, Screenshot};
use serde::{Deserialize, Serialize};

/// Where a screenshot goes inside a frame, at the frame's reference size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetInfo {
    /// Width the screenshot occupies inside the unscaled frame.
    pub reference_width: u32,
    /// Top-left of the screen area inside the unscaled frame.
    pub offset: (i64, i64),
}

impl OffsetInfo {
    pub const fn new(reference_width: u32, dx: i64, dy: i64) -> Self {
        Self {
            reference_width,
            offset: (dx, dy),
        }
    }

    /// The same calibration for a frame scaled by `multiplier`.
    ///
    /// Only the offset changes: `reference_width` keeps describing the
    /// unscaled artwork. Coordinates round half away from zero.
    pub fn scaled(self, multiplier: f64) -> Self {
        let (dx, dy) = self.offset;
        Self {
            reference_width: self.reference_width,
            offset: (
                (dx as f64 * multiplier).round() as i64,
                (dy as f64 * multiplier).round() as i64,
            ),
        }
    }

    /// Correct the offset in place after the frame was scaled by `multiplier`.
    pub fn modify_offset(&mut self, multiplier: f64) {
        *self = self.scaled(multiplier);
    }

    /// Frame width after scaling the frame by `multiplier`.
    pub fn scaled_frame_width(frame_width: u32, multiplier: f64) -> u32 {
        scaled_width(frame_width, multiplier)
    }
}

/// Offset entry as written in a Framefile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawOffset {
    /// Geometry string, e.g. `"+133+50"`.
    #[serde(default)]
    pub offset: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
}

impl RawOffset {
    /// Convert to an [`OffsetInfo`]; `None` when the entry is incomplete or
    /// the geometry does not parse.
    pub fn resolve(&self) -> Option<OffsetInfo> {
        let (dx, dy) = parse_geometry(self.offset.as_deref()?)?;
        let width = self.width.filter(|w| *w > 0)?;
        Some(OffsetInfo::new(width, dx, dy))
    }
}

/// Parse `"+dx+dy"` geometry (either sign on each axis).
///
/// ```text
/// "+133+50" → (133, 50)
/// "-4+10"   → (-4, 10)
/// ```
pub fn parse_geometry(value: &str) -> Option<(i64, i64)> {
    let value = value.trim();
    let split = value
        .char_indices()
        .skip(1)
        .find(|(_, c)| *c == '+' || *c == '-')
        .map(|(i, _)| i)?;
    let (x, y) = value.split_at(split);
    if !x.starts_with(['+', '-']) {
        return None;
    }
    Some((parse_signed(x)?, parse_signed(y)?))
}

fn parse_signed(part: &str) -> Option<i64> {
    let digits = part.strip_prefix('+').unwrap_or(part);
    let value: f64 = digits.parse().ok()?;
    value.is_finite().then(|| value.round() as i64)
}

/// Calibration for the bundled frame artwork, per device and orientation.
pub const OFFSETS: &[(Device, Orientation, OffsetInfo)] = &[
    (Device::IPhone35, Orientation::Portrait, OffsetInfo::new(262, 29, 105)),
    (Device::IPhone35, Orientation::Landscape, OffsetInfo::new(393, 105, 29)),
    (Device::IPhone4, Orientation::Portrait, OffsetInfo::new(262, 29, 101)),
    (Device::IPhone4, Orientation::Landscape, OffsetInfo::new(465, 101, 29)),
    (Device::IPhone47, Orientation::Portrait, OffsetInfo::new(320, 44, 139)),
    (Device::IPhone47, Orientation::Landscape, OffsetInfo::new(569, 139, 44)),
    (Device::IPhone55, Orientation::Portrait, OffsetInfo::new(350, 50, 151)),
    (Device::IPhone55, Orientation::Landscape, OffsetInfo::new(622, 151, 50)),
    (Device::IPad, Orientation::Portrait, OffsetInfo::new(384, 64, 112)),
    (Device::IPad, Orientation::Landscape, OffsetInfo::new(512, 112, 64)),
    (Device::IPadPro, Orientation::Portrait, OffsetInfo::new(512, 70, 131)),
    (Device::IPadPro, Orientation::Landscape, OffsetInfo::new(683, 131, 70)),
];

/// Table lookup by device identity.
pub fn lookup(device: Device, orientation: Orientation) -> Option<OffsetInfo> {
    OFFSETS
        .iter()
        .find(|(d, o, _)| *d == device && *o == orientation)
        .map(|(_, _, info)| *info)
}

/// Resolve the offset for a screenshot: an explicit Framefile entry wins,
/// then the device table. `None` means the screenshot cannot be framed.
///
/// An explicit entry that is incomplete or malformed resolves to `None`
/// rather than silently using the table.
pub fn resolve(screenshot: &Screenshot, explicit: Option<&RawOffset>) -> Option<OffsetInfo> {
    match explicit {
        Some(raw) => raw.resolve(),
        None => lookup(screenshot.device, screenshot.orientation),
    }
}
