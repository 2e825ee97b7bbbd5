//! End-to-end framing with the pure-Rust backend on generated PNGs.
//!
//! Each test builds a throwaway screenshots tree and frames directory:
//!
//! ```text
//! <tmp>/
//! ├── frames/
//! │   ├── iphone-4.7-portrait.png   # opaque gray 398x806
//! │   └── gloss.png
//! └── shots/
//!     └── en-US/
//!         └── 01-Home.png           # opaque blue 750x1334
//! ```

use bezel::compose::FrameError;
use bezel::config::FRAMEFILE_NAME;
use bezel::imaging::{ImageBackend, RustBackend};
use bezel::pipeline::{FrameEvent, FrameMode, Framer, FramerOptions};
use bezel::scan;
use bezel::screenshot::Screenshot;
use image::{Rgba, RgbaImage};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);
const GRAY: Rgba<u8> = Rgba([90, 90, 90, 255]);

fn write_png(path: &Path, width: u32, height: u32, color: Rgba<u8>) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    RgbaImage::from_pixel(width, height, color).save(path).unwrap();
}

struct Fixture {
    _tmp: TempDir,
    frames: PathBuf,
    shots: PathBuf,
}

impl Fixture {
    fn new() -> Self {
        let tmp = TempDir::new().unwrap();
        let frames = tmp.path().join("frames");
        let shots = tmp.path().join("shots");
        write_png(&frames.join("iphone-4.7-portrait.png"), 398, 806, GRAY);
        write_png(&frames.join("gloss.png"), 64, 64, Rgba([255, 255, 255, 80]));
        fs::create_dir_all(shots.join("en-US")).unwrap();
        Self {
            _tmp: tmp,
            frames,
            shots,
        }
    }

    fn screenshot(&self, name: &str, width: u32, height: u32) -> Screenshot {
        let path = self.shots.join("en-US").join(name);
        write_png(&path, width, height, BLUE);
        Screenshot::new(path, width, height).unwrap()
    }

    fn framer(&self, backend: RustBackend) -> Framer<RustBackend> {
        Framer::new(backend, FramerOptions::new(&self.frames))
    }
}

#[test]
fn simple_mode_writes_frame_sized_png() {
    let fixture = Fixture::new();
    let shot = fixture.screenshot("01-Home.png", 750, 1334);
    let framer = fixture.framer(RustBackend::with_default_font(None));

    let framed = framer.frame(&shot).unwrap();

    assert_eq!(framed.mode, FrameMode::Simple);
    assert_eq!(framed.output, fixture.shots.join("en-US/01-Home_framed.png"));
    let output = image::open(&framed.output).unwrap().to_rgba8();
    assert_eq!(output.dimensions(), (398, 806));

    // Inside the screen area: screenshot. Outside: frame.
    let inside = output.get_pixel(44 + 100, 139 + 200);
    assert!(inside[2] > 200 && inside[0] < 40, "got {inside:?}");
    assert_eq!(*output.get_pixel(5, 5), GRAY);
}

const BACKGROUND: Rgba<u8> = Rgba([250, 240, 230, 255]);

#[test]
fn complex_mode_places_device_and_caption_band() {
    let fixture = Fixture::new();
    write_png(&fixture.shots.join("background.png"), 400, 400, BACKGROUND);
    fs::write(
        fixture.shots.join(FRAMEFILE_NAME),
        r##"{
            "default": {
                "background": "background.png",
                "padding": 40,
                "addGloss": true,
                "title": { "color": "#202020" }
            },
            "data": [ { "filter": "Home", "title": { "text": "Plan your trip" } } ]
        }"##,
    )
    .unwrap();
    let shot = fixture.screenshot("01-Home.png", 750, 1334);
    // No font file anywhere: captions use the embedded font.
    let framer = fixture.framer(RustBackend::with_default_font(None));

    let framed = framer.frame(&shot).unwrap();

    assert_eq!(framed.mode, FrameMode::Complex);
    let output = image::open(&framed.output).unwrap().to_rgba8();
    assert_eq!(output.dimensions(), (750, 1334));
    assert_eq!(*output.get_pixel(2, 2), BACKGROUND);

    // Frame 398x806 scaled to 933x1889, then shrunk to 670x1357 for padding
    // 40: left 40, top 1334 - 1357 + 136 + 40 = 153.
    let top_space = 153;
    assert_eq!(*output.get_pixel(45, top_space - 1), BACKGROUND);
    assert_eq!(*output.get_pixel(35, top_space + 10), BACKGROUND);
    let device_edge = output.get_pixel(45, top_space + 10);
    assert!(device_edge[0] < 150, "got {device_edge:?}");

    // Caption ink sits inside the band above the device.
    let ink: Vec<u32> = (0..top_space)
        .flat_map(|y| (0..750).map(move |x| (x, y)))
        .filter(|&(x, y)| output.get_pixel(x, y)[0] < 128)
        .map(|(_, y)| y)
        .collect();
    assert!(!ink.is_empty(), "no caption ink above the device");
    let (first, last) = (ink[0], ink[ink.len() - 1]);
    assert!(first > 0 && last < top_space, "ink rows {first}..={last}");
}

#[test]
fn missing_caption_font_file_reports_font_asset() {
    let fixture = Fixture::new();
    write_png(&fixture.shots.join("background.png"), 750, 1334, BLUE);
    fs::write(
        fixture.shots.join(FRAMEFILE_NAME),
        r#"{"default": {"background": "background.png",
            "title": {"text": "Hi", "font": "missing.ttf"}}}"#,
    )
    .unwrap();
    let shot = fixture.screenshot("01-Home.png", 750, 1334);
    let framer = fixture.framer(RustBackend::with_default_font(None));

    let err = framer.frame(&shot).unwrap_err();

    assert!(matches!(err, FrameError::AssetLoad { .. }));
    assert!(err.to_string().contains("missing.ttf"));
    assert!(!shot.output_path().exists());
}

#[test]
fn batch_frames_scanned_tree_and_isolates_failures() {
    let fixture = Fixture::new();
    fixture.screenshot("01-Home.png", 750, 1334);
    // iPad: no frame asset in the fixture
    fixture.screenshot("02-Tablet.png", 1536, 2048);
    // Not a known device
    write_png(&fixture.shots.join("en-US/odd.png"), 10, 10, BLUE);
    let framer = fixture.framer(RustBackend::with_default_font(None));

    let report = scan::scan(framer.backend(), &fixture.shots).unwrap();
    assert_eq!(report.screenshots.len(), 2);
    assert_eq!(report.skipped.len(), 1);

    let (tx, rx) = std::sync::mpsc::channel();
    let summary = framer.frame_all(&report.screenshots, Some(tx));
    let events: Vec<FrameEvent> = rx.iter().collect();

    assert_eq!(events.len(), 2);
    assert_eq!(summary.framed.len(), 1);
    assert_eq!(summary.failed.len(), 1);
    assert!(fixture.shots.join("en-US/01-Home_framed.png").exists());
    assert!(!fixture.shots.join("en-US/02-Tablet_framed.png").exists());

    // A second scan ignores the framed output.
    let rescan = scan::scan(framer.backend(), &fixture.shots).unwrap();
    assert_eq!(rescan.screenshots.len(), 2);
}

#[test]
fn identify_reads_png_header() {
    let fixture = Fixture::new();
    let shot = fixture.screenshot("01-Home.png", 750, 1334);
    let dims = RustBackend::with_default_font(None)
        .identify(&shot.path)
        .unwrap();
    assert_eq!((dims.width, dims.height), (750, 1334));
}
