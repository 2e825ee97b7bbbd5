//! Screenshot descriptors and device identification.
//!
//! A screenshot is identified purely by its pixel size: every supported
//! device captures at one fixed resolution per orientation, so
//! `750×1334` is always a 4.7" iPhone in portrait and `1334×750` the same
//! device in landscape. The [`DEVICES`] table carries everything the
//! layout math needs per device:
//!
//! | Device | Portrait size | Density | Size class | Bezel |
//! |---|---|---|---|---|
//! | iPhone 3.5" | 640×960 | double | mini | yes |
//! | iPhone 4" | 640×1136 | double | mini | yes |
//! | iPhone 4.7" | 750×1334 | double | regular | yes |
//! | iPhone 5.5" | 1242×2208 | triple | regular | yes |
//! | iPad | 768×1024 / 1536×2048 | single / double | regular | yes |
//! | iPad Pro | 2048×2732 | double | regular | yes |
//! | Mac | 1280×800 … 2880×1800 | single / double | regular | no |
//!
//! Mac sizes are listed in their natural (landscape) orientation.

use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Suffix that replaces the extension of every framed output.
pub const OUTPUT_SUFFIX: &str = "_framed.png";

#[derive(Error, Debug)]
pub enum ScreenshotError {
    #[error("Unsupported screenshot size {width}x{height}: {path}")]
    UnknownDevice {
        path: PathBuf,
        width: u32,
        height: u32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    pub fn from_size(width: u32, height: u32) -> Self {
        if width > height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Portrait => f.write_str("portrait"),
            Orientation::Landscape => f.write_str("landscape"),
        }
    }
}

/// Screen pixel-density tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Density {
    Single,
    Double,
    Triple,
}

/// Physical size class. Mini devices need their own vertical placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeClass {
    Mini,
    Regular,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Device {
    IPhone35,
    IPhone4,
    IPhone47,
    IPhone55,
    IPad,
    IPadPro,
    Mac,
}

impl Device {
    /// Human-readable device name.
    pub fn name(self) -> &'static str {
        match self {
            Device::IPhone35 => "iPhone 3.5\"",
            Device::IPhone4 => "iPhone 4\"",
            Device::IPhone47 => "iPhone 4.7\"",
            Device::IPhone55 => "iPhone 5.5\"",
            Device::IPad => "iPad",
            Device::IPadPro => "iPad Pro",
            Device::Mac => "Mac",
        }
    }

    /// Stable identifier used for frame asset filenames.
    pub fn slug(self) -> &'static str {
        match self {
            Device::IPhone35 => "iphone-3.5",
            Device::IPhone4 => "iphone-4",
            Device::IPhone47 => "iphone-4.7",
            Device::IPhone55 => "iphone-5.5",
            Device::IPad => "ipad",
            Device::IPadPro => "ipad-pro",
            Device::Mac => "mac",
        }
    }

    /// Whether the device is drawn inside a physical bezel.
    pub fn has_bezel(self) -> bool {
        !matches!(self, Device::Mac)
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One row of the device table: a capture size in its natural orientation.
#[derive(Debug, Clone, Copy)]
pub struct DeviceSpec {
    pub device: Device,
    pub width: u32,
    pub height: u32,
    pub density: Density,
    pub size_class: SizeClass,
}

pub const DEVICES: &[DeviceSpec] = &[
    DeviceSpec {
        device: Device::IPhone35,
        width: 640,
        height: 960,
        density: Density::Double,
        size_class: SizeClass::Mini,
    },
    DeviceSpec {
        device: Device::IPhone4,
        width: 640,
        height: 1136,
        density: Density::Double,
        size_class: SizeClass::Mini,
    },
    DeviceSpec {
        device: Device::IPhone47,
        width: 750,
        height: 1334,
        density: Density::Double,
        size_class: SizeClass::Regular,
    },
    DeviceSpec {
        device: Device::IPhone55,
        width: 1242,
        height: 2208,
        density: Density::Triple,
        size_class: SizeClass::Regular,
    },
    DeviceSpec {
        device: Device::IPad,
        width: 768,
        height: 1024,
        density: Density::Single,
        size_class: SizeClass::Regular,
    },
    DeviceSpec {
        device: Device::IPad,
        width: 1536,
        height: 2048,
        density: Density::Double,
        size_class: SizeClass::Regular,
    },
    DeviceSpec {
        device: Device::IPadPro,
        width: 2048,
        height: 2732,
        density: Density::Double,
        size_class: SizeClass::Regular,
    },
    DeviceSpec {
        device: Device::Mac,
        width: 1280,
        height: 800,
        density: Density::Single,
        size_class: SizeClass::Regular,
    },
    DeviceSpec {
        device: Device::Mac,
        width: 1440,
        height: 900,
        density: Density::Single,
        size_class: SizeClass::Regular,
    },
    DeviceSpec {
        device: Device::Mac,
        width: 2560,
        height: 1600,
        density: Density::Double,
        size_class: SizeClass::Regular,
    },
    DeviceSpec {
        device: Device::Mac,
        width: 2880,
        height: 1800,
        density: Density::Double,
        size_class: SizeClass::Regular,
    },
];

/// Find the device spec for a capture size, in either orientation.
pub fn lookup_device(width: u32, height: u32) -> Option<&'static DeviceSpec> {
    DEVICES.iter().find(|spec| {
        (spec.width == width && spec.height == height)
            || (spec.width == height && spec.height == width)
    })
}

/// Immutable descriptor of one input screenshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Screenshot {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub device: Device,
    pub orientation: Orientation,
    pub density: Density,
    pub size_class: SizeClass,
}

impl Screenshot {
    /// Describe a screenshot of the given pixel size.
    pub fn new(path: impl Into<PathBuf>, width: u32, height: u32) -> Result<Self, ScreenshotError> {
        let path = path.into();
        let spec = lookup_device(width, height).ok_or_else(|| ScreenshotError::UnknownDevice {
            path: path.clone(),
            width,
            height,
        })?;
        Ok(Self {
            path,
            width,
            height,
            device: spec.device,
            orientation: Orientation::from_size(width, height),
            density: spec.density,
            size_class: spec.size_class,
        })
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Directory holding the screenshot.
    pub fn dir(&self) -> &Path {
        self.path.parent().unwrap_or(Path::new(""))
    }

    /// Where the framed result is written.
    pub fn output_path(&self) -> PathBuf {
        output_path_for(&self.path)
    }
}

impl fmt::Display for Screenshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} {}, {}x{})",
            self.path.display(),
            self.device,
            self.orientation,
            self.width,
            self.height
        )
    }
}

/// Replace the file extension (any case) with [`OUTPUT_SUFFIX`].
///
/// `shots/en-US/1.PNG` → `shots/en-US/1_framed.png`
pub fn output_path_for(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    path.with_file_name(format!("{}{}", stem, OUTPUT_SUFFIX))
}

/// Whether a path is itself a framed output.
pub fn is_framed_output(path: &Path) -> bool {
    path.file_name()
        .map(|n| n.to_string_lossy().to_ascii_lowercase())
        .is_some_and(|n| n.ends_with(OUTPUT_SUFFIX))
}
