//! Frame asset lookup.
//!
//! Frame artwork lives in one directory, one PNG per device and orientation:
//!
//! ```text
//! frames/
//! ├── gloss.png
//! ├── iphone-4.7-portrait.png
//! ├── iphone-4.7-landscape.png
//! ├── ipad-portrait.png
//! └── ...
//! ```
//!
//! Devices without a physical bezel (Mac) have no frame; their screenshots
//! are composed without one.

use crate::screenshot::Screenshot;
use std::path::{Path, PathBuf};

/// File name of the decorative gloss asset inside the frames directory.
pub const GLOSS_FILE: &str = "gloss.png";

/// File name of the frame asset for a screenshot's device and orientation.
pub fn frame_file_name(screenshot: &Screenshot) -> String {
    format!("{}-{}.png", screenshot.device.slug(), screenshot.orientation)
}

/// Path of the frame asset for a screenshot, or `None` for bezel-less
/// devices. The file is not checked for existence; opening it reports that.
pub fn frame_path(frames_dir: &Path, screenshot: &Screenshot) -> Option<PathBuf> {
    screenshot
        .device
        .has_bezel()
        .then(|| frames_dir.join(frame_file_name(screenshot)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_name_includes_device_and_orientation() {
        let shot = Screenshot::new("/s/a.png", 1334, 750).unwrap();
        assert_eq!(frame_file_name(&shot), "iphone-4.7-landscape.png");
    }

    #[test]
    fn frame_path_joins_frames_dir() {
        let shot = Screenshot::new("/s/a.png", 1536, 2048).unwrap();
        assert_eq!(
            frame_path(Path::new("/frames"), &shot),
            Some(PathBuf::from("/frames/ipad-portrait.png"))
        );
    }

    #[test]
    fn no_frame_for_mac() {
        let shot = Screenshot::new("/s/a.png", 1440, 900).unwrap();
        assert_eq!(frame_path(Path::new("/frames"), &shot), None);
    }
}
