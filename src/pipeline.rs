//! Per-screenshot orchestration and batch runs.
//!
//! ## Modes
//!
//! The effective [`FrameConfig`] picks one of two paths:
//!
//! ```text
//! simple:  open → load frame + offset → scale screenshot into frame → write
//! complex: open → load frame + offset → gloss → scale frame to screenshot
//!          → frame → shrink onto background → captions → write
//! ```
//!
//! Complex mode runs when the config has a background and at least one
//! caption ([`FrameConfig::should_add_title`]); everything else is simple.
//!
//! ## Batches
//!
//! [`Framer::frame_all`] frames screenshots in parallel using
//! [rayon](https://docs.rs/rayon). Screenshots share nothing but the
//! read-only Framefile cache. A failure is recorded against its screenshot
//! and the rest of the batch carries on. Progress is reported through an
//! optional channel as each screenshot finishes.

use crate::compose::background::place_on_background;
use crate::compose::frame::put_into_frame;
use crate::compose::gloss::add_gloss;
use crate::compose::title::add_captions;
use crate::compose::Asset;
use crate::config::{ConfigCache, FrameConfig};
use crate::imaging::{ImageBackend, Raster};
use crate::offsets::{self, OffsetInfo};
use crate::screenshot::Screenshot;
use crate::templates::{self, GLOSS_FILE};
use rayon::prelude::*;
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::mpsc::Sender;

pub use crate::compose::FrameError;
pub use crate::compose::frame::FrameMode;

/// Where framing assets come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FramerOptions {
    /// Directory holding one frame PNG per device and orientation.
    pub frames_dir: PathBuf,
    /// Gloss asset; defaults to `gloss.png` inside `frames_dir`.
    pub gloss: Option<PathBuf>,
}

impl FramerOptions {
    pub fn new(frames_dir: impl Into<PathBuf>) -> Self {
        Self {
            frames_dir: frames_dir.into(),
            gloss: None,
        }
    }

    pub fn gloss_path(&self) -> PathBuf {
        self.gloss
            .clone()
            .unwrap_or_else(|| self.frames_dir.join(GLOSS_FILE))
    }
}

/// A screenshot that was framed and written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framed {
    pub screenshot: PathBuf,
    pub output: PathBuf,
    pub mode: FrameMode,
    pub size: (u32, u32),
}

/// Progress for one screenshot of a batch.
#[derive(Debug, Clone)]
pub enum FrameEvent {
    Framed(Framed),
    Failed { screenshot: PathBuf, message: String },
}

/// Outcome of a batch, in input order.
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub framed: Vec<Framed>,
    pub failed: Vec<FrameError>,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.framed.len() + self.failed.len()
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Whether the frame asset for a screenshot is in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameStatus {
    Found(PathBuf),
    Missing(PathBuf),
    NoBezel,
}

/// What framing a screenshot would need, checked without decoding anything.
#[derive(Debug, Clone)]
pub struct Readiness {
    pub screenshot: Screenshot,
    /// `None` when the Framefile could not be read.
    pub mode: Option<FrameMode>,
    pub frame: FrameStatus,
    pub offset: Option<OffsetInfo>,
    pub config_error: Option<String>,
}

impl Readiness {
    pub fn is_ready(&self) -> bool {
        self.config_error.is_none()
            && match self.frame {
                FrameStatus::NoBezel => true,
                FrameStatus::Found(_) => self.offset.is_some(),
                FrameStatus::Missing(_) => false,
            }
    }
}

/// Frames screenshots with one backend and one set of assets.
pub struct Framer<B: ImageBackend> {
    backend: B,
    options: FramerOptions,
    configs: ConfigCache,
}

impl<B: ImageBackend> Framer<B> {
    pub fn new(backend: B, options: FramerOptions) -> Self {
        Self {
            backend,
            options,
            configs: ConfigCache::new(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn options(&self) -> &FramerOptions {
        &self.options
    }

    /// Effective config for a screenshot; defaults when there is no Framefile.
    pub fn config_for(&self, screenshot: &Screenshot) -> Result<FrameConfig, FrameError> {
        self.configs
            .config_for(screenshot)
            .map_err(|source| FrameError::Config {
                path: screenshot.path.clone(),
                source,
            })
    }

    /// Check config, frame asset and offset for a screenshot.
    pub fn check(&self, screenshot: &Screenshot) -> Readiness {
        let (config, config_error) = match self.config_for(screenshot) {
            Ok(config) => (Some(config), None),
            Err(err) => (None, Some(err.to_string())),
        };
        let mode = config.as_ref().map(mode_for);
        let frame = match templates::frame_path(&self.options.frames_dir, screenshot) {
            None => FrameStatus::NoBezel,
            Some(path) if path.is_file() => FrameStatus::Found(path),
            Some(path) => FrameStatus::Missing(path),
        };
        let explicit = config.as_ref().and_then(|config| config.offset.as_ref());
        Readiness {
            screenshot: screenshot.clone(),
            mode,
            frame,
            offset: offsets::resolve(screenshot, explicit),
            config_error,
        }
    }

    /// Frame asset and its calibration, or `None` for bezel-less devices.
    fn load_frame(
        &self,
        screenshot: &Screenshot,
        config: &FrameConfig,
    ) -> Result<Option<(B::Image, OffsetInfo)>, FrameError> {
        let Some(frame_path) = templates::frame_path(&self.options.frames_dir, screenshot) else {
            tracing::debug!(
                screenshot = %screenshot.path.display(),
                device = %screenshot.device,
                "device has no bezel, skipping frame"
            );
            return Ok(None);
        };

        let offset = offsets::resolve(screenshot, config.offset.as_ref()).ok_or_else(|| {
            FrameError::OffsetNotFound {
                path: screenshot.path.clone(),
            }
        })?;
        let frame = self.backend.open(&frame_path).map_err(FrameError::asset(
            &screenshot.path,
            Asset::Frame,
            &frame_path,
        ))?;
        Ok(Some((frame, offset)))
    }

    /// Build the final image for a screenshot without writing it.
    pub fn compose(&self, screenshot: &Screenshot) -> Result<(B::Image, FrameMode), FrameError> {
        let config = self.config_for(screenshot)?;
        let mode = mode_for(&config);
        tracing::debug!(
            screenshot = %screenshot.path.display(),
            device = %screenshot.device,
            %mode,
            "framing"
        );

        let image = self.backend.open(&screenshot.path).map_err(FrameError::asset(
            &screenshot.path,
            Asset::Screenshot,
            &screenshot.path,
        ))?;
        let frame = self.load_frame(screenshot, &config)?;

        let image = match mode {
            FrameMode::Simple => put_into_frame(&self.backend, mode, image, frame, screenshot)?,
            FrameMode::Complex => {
                let has_frame = frame.is_some();
                let image = add_gloss(
                    &self.backend,
                    image,
                    config.add_gloss,
                    &self.options.gloss_path(),
                    screenshot,
                )?;
                let device = put_into_frame(&self.backend, mode, image, frame, screenshot)?;
                let backdrop =
                    place_on_background(&self.backend, device, has_frame, &config, screenshot)?;
                add_captions(&self.backend, backdrop, &config, screenshot)?
            }
        };
        Ok((image, mode))
    }

    /// Frame one screenshot and write it next to the original.
    pub fn frame(&self, screenshot: &Screenshot) -> Result<Framed, FrameError> {
        let (image, mode) = self.compose(screenshot)?;
        let output = screenshot.output_path();
        self.backend
            .write_png(&image, &output)
            .map_err(FrameError::imaging(&screenshot.path))?;
        tracing::info!(output = %output.display(), "Added frame");

        Ok(Framed {
            screenshot: screenshot.path.clone(),
            output,
            mode,
            size: image.size(),
        })
    }

    /// Frame every screenshot in parallel.
    ///
    /// Screenshots whose output path is already claimed by an earlier entry
    /// fail with [`FrameError::OutputConflict`] instead of overwriting it.
    pub fn frame_all(
        &self,
        screenshots: &[Screenshot],
        events: Option<Sender<FrameEvent>>,
    ) -> BatchSummary {
        let conflicts = output_conflicts(screenshots);

        let results: Vec<Result<Framed, FrameError>> = screenshots
            .par_iter()
            .zip(conflicts.par_iter())
            .map(|(screenshot, conflict)| {
                let result = match conflict {
                    Some(output) => Err(FrameError::OutputConflict {
                        path: screenshot.path.clone(),
                        output: output.clone(),
                    }),
                    None => self.frame(screenshot),
                };
                if let Err(err) = &result {
                    tracing::warn!("{err}");
                }
                if let Some(tx) = &events {
                    let event = match &result {
                        Ok(framed) => FrameEvent::Framed(framed.clone()),
                        Err(err) => FrameEvent::Failed {
                            screenshot: screenshot.path.clone(),
                            message: err.to_string(),
                        },
                    };
                    tx.send(event).ok();
                }
                result
            })
            .collect();

        let mut summary = BatchSummary::default();
        for result in results {
            match result {
                Ok(framed) => summary.framed.push(framed),
                Err(err) => summary.failed.push(err),
            }
        }
        summary
    }
}

fn mode_for(config: &FrameConfig) -> FrameMode {
    if config.should_add_title() {
        FrameMode::Complex
    } else {
        FrameMode::Simple
    }
}

/// For each screenshot, the output path it would contest with an earlier
/// entry of the batch, if any.
fn output_conflicts(screenshots: &[Screenshot]) -> Vec<Option<PathBuf>> {
    let mut claimed: HashSet<PathBuf> = HashSet::new();
    screenshots
        .iter()
        .map(|screenshot| {
            let output = screenshot.output_path();
            if claimed.contains(&output) {
                Some(output)
            } else {
                claimed.insert(output);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FRAMEFILE_NAME;
    use crate::imaging::backend::tests::{MockBackend, RecordedOp};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn framer(backend: MockBackend) -> Framer<MockBackend> {
        Framer::new(backend, FramerOptions::new("/frames"))
    }

    fn write_framefile(dir: &Path, content: &str) {
        fs::write(dir.join(FRAMEFILE_NAME), content).unwrap();
    }

    fn writes(backend: &MockBackend) -> Vec<RecordedOp> {
        backend
            .get_operations()
            .into_iter()
            .filter(|op| matches!(op, RecordedOp::WritePng { .. }))
            .collect()
    }

    // =========================================================================
    // Options
    // =========================================================================

    #[test]
    fn gloss_defaults_to_frames_dir() {
        let options = FramerOptions::new("/frames");
        assert_eq!(options.gloss_path(), PathBuf::from("/frames/gloss.png"));

        let options = FramerOptions {
            gloss: Some("/elsewhere/shine.png".into()),
            ..options
        };
        assert_eq!(options.gloss_path(), PathBuf::from("/elsewhere/shine.png"));
    }

    // =========================================================================
    // Simple mode
    // =========================================================================

    #[test]
    fn simple_mode_without_framefile() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("01.png");
        let backend = MockBackend::new()
            .with_image(&path, 750, 1334)
            .with_image("/frames/iphone-4.7-portrait.png", 398, 806);
        let framer = framer(backend);
        let shot = Screenshot::new(&path, 750, 1334).unwrap();

        let framed = framer.frame(&shot).unwrap();

        assert_eq!(framed.mode, FrameMode::Simple);
        assert_eq!(framed.output, tmp.path().join("01_framed.png"));
        assert_eq!(framed.size, (398, 806));
        assert_eq!(
            writes(framer.backend()),
            vec![RecordedOp::WritePng {
                path: tmp.path().join("01_framed.png").to_string_lossy().to_string(),
                width: 398,
                height: 806,
            }]
        );
    }

    #[test]
    fn simple_mode_ignores_gloss() {
        let tmp = TempDir::new().unwrap();
        write_framefile(tmp.path(), r#"{"default": {"addGloss": true}}"#);
        let path = tmp.path().join("01.png");
        let backend = MockBackend::new()
            .with_image(&path, 750, 1334)
            .with_image("/frames/iphone-4.7-portrait.png", 398, 806);
        let framer = framer(backend);
        let shot = Screenshot::new(&path, 750, 1334).unwrap();

        framer.frame(&shot).unwrap();

        assert!(!framer
            .backend()
            .get_operations()
            .contains(&RecordedOp::Open("/frames/gloss.png".into())));
    }

    #[test]
    fn missing_frame_asset_is_asset_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("01.png");
        let backend = MockBackend::new().with_image(&path, 750, 1334);
        let framer = framer(backend);
        let shot = Screenshot::new(&path, 750, 1334).unwrap();

        let err = framer.frame(&shot).unwrap_err();
        assert!(matches!(
            err,
            FrameError::AssetLoad {
                asset: Asset::Frame,
                ..
            }
        ));
        assert!(writes(framer.backend()).is_empty());
    }

    #[test]
    fn bezel_less_device_passes_through() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("mac.png");
        let backend = MockBackend::new().with_image(&path, 2880, 1800);
        let framer = framer(backend);
        let shot = Screenshot::new(&path, 2880, 1800).unwrap();

        let framed = framer.frame(&shot).unwrap();

        assert_eq!(framed.size, (2880, 1800));
        assert!(framer.backend().composites().is_empty());
    }

    #[test]
    fn simple_mode_identity_calibration_keeps_screenshot_unscaled() {
        let tmp = TempDir::new().unwrap();
        write_framefile(
            tmp.path(),
            r#"{"default": {"offset": {"offset": "+0+0", "width": 750}}}"#,
        );
        let path = tmp.path().join("01.png");
        let backend = MockBackend::new()
            .with_image(&path, 750, 1334)
            .with_image("/frames/iphone-4.7-portrait.png", 750, 1400);
        let framer = framer(backend);
        let shot = Screenshot::new(&path, 750, 1334).unwrap();

        let framed = framer.frame(&shot).unwrap();

        assert_eq!(framed.mode, FrameMode::Simple);
        assert_eq!(framed.size.0, 750);
        assert!(!framer
            .backend()
            .get_operations()
            .iter()
            .any(|op| matches!(op, RecordedOp::Resize { .. })));
        assert_eq!(
            framer.backend().composites(),
            vec![RecordedOp::Composite {
                base: "iphone-4.7-portrait.png".into(),
                overlay: "01.png".into(),
                x: 0,
                y: 0,
            }]
        );
    }

    #[test]
    fn malformed_framefile_offset_is_offset_not_found() {
        let tmp = TempDir::new().unwrap();
        write_framefile(
            tmp.path(),
            r#"{"default": {"offset": {"offset": "133x50", "width": 500}}}"#,
        );
        let path = tmp.path().join("01.png");
        let backend = MockBackend::new()
            .with_image(&path, 750, 1334)
            .with_image("/frames/iphone-4.7-portrait.png", 398, 806);
        let framer = framer(backend);
        let shot = Screenshot::new(&path, 750, 1334).unwrap();

        assert_eq!(framer.check(&shot).offset, None);
        let err = framer.frame(&shot).unwrap_err();
        assert!(matches!(err, FrameError::OffsetNotFound { .. }));
        assert!(writes(framer.backend()).is_empty());
    }

    #[test]
    fn framefile_offset_without_geometry_is_offset_not_found() {
        let tmp = TempDir::new().unwrap();
        write_framefile(tmp.path(), r#"{"default": {"offset": {"width": 500}}}"#);
        let path = tmp.path().join("01.png");
        let backend = MockBackend::new()
            .with_image(&path, 750, 1334)
            .with_image("/frames/iphone-4.7-portrait.png", 398, 806);
        let framer = framer(backend);
        let shot = Screenshot::new(&path, 750, 1334).unwrap();

        assert!(matches!(
            framer.frame(&shot),
            Err(FrameError::OffsetNotFound { .. })
        ));
    }

    // =========================================================================
    // Complex mode
    // =========================================================================

    #[test]
    fn complex_mode_end_to_end() {
        let tmp = TempDir::new().unwrap();
        write_framefile(
            tmp.path(),
            r#"{
                "default": {
                    "background": "bg.png",
                    "padding": 0,
                    "title": { "text": "Hello" },
                    "offset": { "offset": "+0+0", "width": 750 }
                }
            }"#,
        );
        let path = tmp.path().join("01.png");
        let backend = MockBackend::new()
            .with_image(&path, 750, 1334)
            .with_image("/frames/iphone-4.7-portrait.png", 750, 1334)
            .with_image(tmp.path().join("bg.png"), 750, 1334)
            .with_text("Hello", 200, 50);
        let framer = framer(backend);
        let shot = Screenshot::new(&path, 750, 1334).unwrap();

        let framed = framer.frame(&shot).unwrap();

        assert_eq!(framed.mode, FrameMode::Complex);
        assert_eq!(framed.size, (750, 1334));

        // frame: identity scale, screenshot at origin
        // background: device keeps 750 wide; bottom = -133 - 40 = -173,
        //   top = 1334 - 1334 + 173 = 173
        // title: size max(173/3, 25) = 58; top = round(86.5 - 25) = 62
        assert_eq!(
            framer.backend().composites(),
            vec![
                RecordedOp::Composite {
                    base: "iphone-4.7-portrait.png".into(),
                    overlay: "01.png".into(),
                    x: 0,
                    y: 0,
                },
                RecordedOp::Composite {
                    base: "bg.png".into(),
                    overlay: "iphone-4.7-portrait.png".into(),
                    x: 0,
                    y: 173,
                },
                RecordedOp::Composite {
                    base: "bg.png".into(),
                    overlay: "text:Hello".into(),
                    x: 275,
                    y: 62,
                },
            ]
        );
    }

    #[test]
    fn complex_mode_applies_gloss_before_frame() {
        let tmp = TempDir::new().unwrap();
        write_framefile(
            tmp.path(),
            r#"{"default": {"background": "bg.png", "addGloss": true, "title": {"text": "Hi"}}}"#,
        );
        let path = tmp.path().join("01.png");
        let backend = MockBackend::new()
            .with_image(&path, 750, 1334)
            .with_image("/frames/iphone-4.7-portrait.png", 398, 806)
            .with_image("/frames/gloss.png", 50, 50)
            .with_image(tmp.path().join("bg.png"), 750, 1334);
        let framer = framer(backend);
        let shot = Screenshot::new(&path, 750, 1334).unwrap();

        framer.frame(&shot).unwrap();

        let composites = framer.backend().composites();
        assert_eq!(
            composites[0],
            RecordedOp::Composite {
                base: "01.png".into(),
                overlay: "gloss.png".into(),
                x: 225,
                y: 0,
            }
        );
        assert!(matches!(
            &composites[1],
            RecordedOp::Composite { overlay, .. } if overlay == "01.png"
        ));
    }

    #[test]
    fn triple_density_padding_in_pipeline() {
        let tmp = TempDir::new().unwrap();
        write_framefile(
            tmp.path(),
            r#"{"default": {"background": "bg.png", "padding": 40, "title": {"text": "Hi"}}}"#,
        );
        let path = tmp.path().join("01.png");
        let backend = MockBackend::new()
            .with_image(&path, 1242, 2208)
            .with_image("/frames/iphone-5.5-portrait.png", 440, 900)
            .with_image(tmp.path().join("bg.png"), 1242, 2208);
        let framer = framer(backend);
        let shot = Screenshot::new(&path, 1242, 2208).unwrap();

        framer.frame(&shot).unwrap();

        // 1242 - 2 * (40 * 1.7) = 1106
        assert!(framer.backend().get_operations().iter().any(|op| matches!(
            op,
            RecordedOp::Resize { label, width: 1106, .. } if label == "iphone-5.5-portrait.png"
        )));
    }

    #[test]
    fn keyword_only_captions_fail_with_missing_title() {
        let tmp = TempDir::new().unwrap();
        write_framefile(
            tmp.path(),
            r#"{"default": {"background": "bg.png", "keyword": {"text": "Plan"}}}"#,
        );
        let path = tmp.path().join("01.png");
        let backend = MockBackend::new()
            .with_image(&path, 750, 1334)
            .with_image("/frames/iphone-4.7-portrait.png", 398, 806)
            .with_image(tmp.path().join("bg.png"), 750, 1334);
        let framer = framer(backend);
        let shot = Screenshot::new(&path, 750, 1334).unwrap();

        let err = framer.frame(&shot).unwrap_err();
        assert!(matches!(err, FrameError::MissingTitle { .. }));
        assert!(err.to_string().contains("01.png"));
        assert!(writes(framer.backend()).is_empty());
    }

    #[test]
    fn invalid_framefile_is_config_error() {
        let tmp = TempDir::new().unwrap();
        write_framefile(tmp.path(), r#"{"default": {"title": {"fontSize": 0}}}"#);
        let path = tmp.path().join("01.png");
        let framer = framer(MockBackend::new().with_image(&path, 750, 1334));
        let shot = Screenshot::new(&path, 750, 1334).unwrap();

        assert!(matches!(
            framer.frame(&shot),
            Err(FrameError::Config { .. })
        ));
    }

    // =========================================================================
    // Check
    // =========================================================================

    #[test]
    fn check_reports_missing_frame_and_table_offset() {
        let tmp = TempDir::new().unwrap();
        let framer = Framer::new(MockBackend::new(), FramerOptions::new(tmp.path()));
        let shot = Screenshot::new(tmp.path().join("01.png"), 750, 1334).unwrap();

        let readiness = framer.check(&shot);

        assert_eq!(readiness.mode, Some(FrameMode::Simple));
        assert_eq!(
            readiness.frame,
            FrameStatus::Missing(tmp.path().join("iphone-4.7-portrait.png"))
        );
        assert_eq!(readiness.offset, Some(OffsetInfo::new(320, 44, 139)));
        assert!(!readiness.is_ready());

        fs::write(tmp.path().join("iphone-4.7-portrait.png"), b"").unwrap();
        assert!(framer.check(&shot).is_ready());
    }

    #[test]
    fn check_surfaces_config_errors() {
        let tmp = TempDir::new().unwrap();
        write_framefile(tmp.path(), "not json");
        let framer = framer(MockBackend::new());
        let shot = Screenshot::new(tmp.path().join("mac.png"), 2880, 1800).unwrap();

        let readiness = framer.check(&shot);

        assert_eq!(readiness.frame, FrameStatus::NoBezel);
        assert_eq!(readiness.mode, None);
        assert!(readiness.config_error.is_some());
        assert!(!readiness.is_ready());
    }

    // =========================================================================
    // Batches
    // =========================================================================

    #[test]
    fn batch_isolates_failures() {
        let tmp = TempDir::new().unwrap();
        let good = tmp.path().join("good.png");
        let bad = tmp.path().join("bad.png");
        let backend = MockBackend::new()
            .with_image(&good, 750, 1334)
            .with_image(&bad, 1536, 2048)
            .with_image("/frames/iphone-4.7-portrait.png", 398, 806);
        let framer = framer(backend);
        let shots = vec![
            Screenshot::new(&bad, 1536, 2048).unwrap(),
            Screenshot::new(&good, 750, 1334).unwrap(),
        ];

        let (tx, rx) = std::sync::mpsc::channel();
        let summary = framer.frame_all(&shots, Some(tx));

        assert_eq!(summary.total(), 2);
        assert!(!summary.is_success());
        assert_eq!(summary.framed.len(), 1);
        assert_eq!(summary.framed[0].screenshot, good);
        assert_eq!(summary.failed[0].screenshot(), bad.as_path());

        let events: Vec<FrameEvent> = rx.iter().collect();
        assert_eq!(events.len(), 2);
        assert!(events.iter().any(|e| matches!(
            e,
            FrameEvent::Failed { screenshot, message }
                if screenshot == &bad && message.contains("ipad-portrait.png")
        )));
    }

    #[test]
    fn batch_rejects_colliding_outputs() {
        let shots = vec![
            Screenshot::new("/s/01.png", 750, 1334).unwrap(),
            Screenshot::new("/s/01.PNG", 750, 1334).unwrap(),
            Screenshot::new("/s/01.png", 750, 1334).unwrap(),
        ];
        let conflicts = output_conflicts(&shots);
        // 01.png and 01.PNG share the stem; only the first claim stands
        let contested = Some(PathBuf::from("/s/01_framed.png"));
        assert_eq!(conflicts, vec![None, contested.clone(), contested]);
    }

    #[test]
    fn batch_without_conflicts() {
        let shots = vec![
            Screenshot::new("/s/01.png", 750, 1334).unwrap(),
            Screenshot::new("/s/02.png", 750, 1334).unwrap(),
        ];
        assert_eq!(output_conflicts(&shots), vec![None, None]);
    }
}
