//! Framefile configuration.
//!
//! Handles loading, merging, and validating `Framefile.json`. The file lives
//! next to the screenshots, or one directory up so a single file can serve
//! every locale folder:
//!
//! ```text
//! screenshots/
//! ├── Framefile.json           # Shared by all locales below
//! ├── background.jpg
//! ├── en-US/
//! │   ├── title.strings        # Localized titles (see `strings`)
//! │   ├── iPhone6-01-Home.png
//! │   └── iPhone6-02-Search.png
//! └── de-DE/
//!     ├── Framefile.json       # Overrides the shared file for this folder
//!     └── iPhone6-01-Home.png
//! ```
//!
//! ## Format
//!
//! ```json
//! {
//!   "default": {
//!     "background": "./background.jpg",
//!     "padding": 50,
//!     "addGloss": false,
//!     "title":   { "color": "#545454", "fontSize": 60 },
//!     "keyword": { "color": "#d21559",
//!                  "fonts": [ { "font": "./fonts/NotoSansCJK.otf", "supported": ["zh-Hans", "ja"] },
//!                             { "font": "./fonts/Chalkduster.ttf" } ] }
//!   },
//!   "data": [
//!     { "filter": "Home",   "keyword": { "text": "Plan" } },
//!     { "filter": "Search", "keyword": { "text": "Find" }, "addGloss": true }
//!   ]
//! }
//! ```
//!
//! The effective config for a screenshot is `default` with the first `data`
//! entry whose `filter` appears in the screenshot path merged on top.
//! Objects merge key by key; any other value replaces the default. Relative
//! `background` and font paths resolve against the Framefile's directory.
//!
//! Keys not listed above are ignored, so Framefiles written for other
//! framing tools still load.
//!
//! ## Missing Framefile
//!
//! No Framefile is not an error: the screenshot gets [`FrameConfig::default`],
//! which frames it without background or captions.

use crate::imaging::Color;
use crate::offsets::RawOffset;
use crate::screenshot::Screenshot;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// File name looked up next to each screenshot.
pub const FRAMEFILE_NAME: &str = "Framefile.json";

/// Largest accepted `fontSize`, before the density multiplier.
pub const MAX_FONT_SIZE: u32 = 1000;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Settings for one caption (title or keyword).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CaptionConfig {
    /// Inline text, used when no `.strings` entry matches.
    pub text: Option<String>,
    pub color: String,
    /// A single font for every language. Wins over `fonts`.
    pub font: Option<PathBuf>,
    /// Fonts by language; the first applicable entry wins.
    pub fonts: Option<Vec<FontRule>>,
    /// Point size before the density multiplier; absent means "fit the space".
    pub font_size: Option<u32>,
}

impl Default for CaptionConfig {
    fn default() -> Self {
        Self {
            text: None,
            color: "#000000".to_string(),
            font: None,
            fonts: None,
            font_size: None,
        }
    }
}

impl CaptionConfig {
    pub fn fill_color(&self) -> Result<Color, ConfigError> {
        Color::parse(&self.color).map_err(|e| ConfigError::Validation(e.to_string()))
    }
}

/// A font with the language tags it should be used for.
///
/// An entry without `supported` applies to every language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontRule {
    pub font: PathBuf,
    #[serde(default)]
    pub supported: Option<Vec<String>>,
}

/// Effective configuration for one screenshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FrameConfig {
    /// Background image for complex mode.
    pub background: Option<PathBuf>,
    /// Horizontal padding between framed device and background edge.
    pub padding: u32,
    pub add_gloss: bool,
    pub title: Option<CaptionConfig>,
    pub keyword: Option<CaptionConfig>,
    /// Overrides the built-in offset table.
    pub offset: Option<RawOffset>,
}

impl FrameConfig {
    /// Whether to run the complex pipeline: a background plus at least one
    /// caption.
    pub fn should_add_title(&self) -> bool {
        self.background.is_some() && (self.title.is_some() || self.keyword.is_some())
    }

    /// Validate values that serde cannot check.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, caption) in [("title", &self.title), ("keyword", &self.keyword)] {
            let Some(caption) = caption else { continue };
            if caption.font_size == Some(0) {
                return Err(ConfigError::Validation(format!(
                    "{name}.fontSize must be greater than 0"
                )));
            }
            if caption.font_size.is_some_and(|size| size > MAX_FONT_SIZE) {
                return Err(ConfigError::Validation(format!(
                    "{name}.fontSize must be at most {MAX_FONT_SIZE}"
                )));
            }
            caption.fill_color().map_err(|e| {
                ConfigError::Validation(format!("{name}.color: {e}"))
            })?;
        }
        Ok(())
    }

    /// Resolve relative asset paths against `base`.
    fn expand_paths(&mut self, base: &Path) {
        if let Some(background) = self.background.as_mut() {
            *background = expand(base, background);
        }
        for caption in [self.title.as_mut(), self.keyword.as_mut()]
            .into_iter()
            .flatten()
        {
            if let Some(font) = caption.font.as_mut() {
                *font = expand(base, font);
            }
            for rule in caption.fonts.iter_mut().flatten() {
                rule.font = expand(base, &rule.font);
            }
        }
    }
}

fn expand(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// A parsed Framefile: shared defaults plus filtered overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct Framefile {
    /// Directory the file was read from; relative paths resolve here.
    pub dir: PathBuf,
    pub default: serde_json::Value,
    pub data: Vec<serde_json::Value>,
}

#[derive(Deserialize)]
struct RawFramefile {
    #[serde(default)]
    default: Option<serde_json::Value>,
    #[serde(default)]
    data: Vec<serde_json::Value>,
}

impl Framefile {
    pub fn parse(dir: impl Into<PathBuf>, content: &str) -> Result<Self, ConfigError> {
        let raw: RawFramefile = serde_json::from_str(content)?;
        let default = raw
            .default
            .unwrap_or_else(|| serde_json::Value::Object(Default::default()));
        if !default.is_object() {
            return Err(ConfigError::Validation(
                "\"default\" must be an object".into(),
            ));
        }
        if raw.data.iter().any(|entry| !entry.is_object()) {
            return Err(ConfigError::Validation(
                "every \"data\" entry must be an object".into(),
            ));
        }
        Ok(Self {
            dir: dir.into(),
            default,
            data: raw.data,
        })
    }

    /// Effective config for a screenshot path.
    pub fn fetch(&self, screenshot_path: &Path) -> Result<FrameConfig, ConfigError> {
        let path = screenshot_path.to_string_lossy();
        let overlay = self.data.iter().find(|entry| {
            entry
                .get("filter")
                .and_then(|f| f.as_str())
                .is_some_and(|filter| path.contains(filter))
        });

        let merged = match overlay {
            Some(entry) => merge_json(self.default.clone(), entry.clone()),
            None => self.default.clone(),
        };

        let mut config: FrameConfig = serde_json::from_value(merged)?;
        config.expand_paths(&self.dir);
        config.validate()?;
        Ok(config)
    }
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Objects are merged key-by-key (overlay keys override base keys).
/// - Non-object values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_json(base: serde_json::Value, overlay: serde_json::Value) -> serde_json::Value {
    match (base, overlay) {
        (serde_json::Value::Object(mut base_map), serde_json::Value::Object(overlay_map)) => {
            for (key, overlay_val) in overlay_map {
                let merged = match base_map.remove(&key) {
                    Some(base_val) => merge_json(base_val, overlay_val),
                    None => overlay_val,
                };
                base_map.insert(key, merged);
            }
            serde_json::Value::Object(base_map)
        }
        (_, overlay) => overlay,
    }
}

/// Find the Framefile for screenshots in `dir`: the directory itself first,
/// then its parent.
pub fn find_framefile(dir: &Path) -> Option<PathBuf> {
    let here = dir.join(FRAMEFILE_NAME);
    if here.is_file() {
        return Some(here);
    }
    let parent = dir.parent()?.join(FRAMEFILE_NAME);
    parent.is_file().then_some(parent)
}

/// Read and parse a Framefile.
pub fn load_framefile(path: &Path) -> Result<Framefile, ConfigError> {
    let content = fs::read_to_string(path)?;
    let dir = path.parent().unwrap_or(Path::new("")).to_path_buf();
    Framefile::parse(dir, &content)
}

/// Process-lifetime cache of Framefiles, keyed by screenshot directory.
///
/// Only successful loads are remembered: a directory without a Framefile is
/// looked up again next time, and two threads racing on the same directory
/// both parse the file and keep whichever lands first.
#[derive(Debug, Default)]
pub struct ConfigCache {
    entries: Mutex<HashMap<PathBuf, Arc<Framefile>>>,
}

impl ConfigCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The Framefile that applies to `dir`, if any.
    pub fn framefile_for(&self, dir: &Path) -> Result<Option<Arc<Framefile>>, ConfigError> {
        if let Some(hit) = self.get(dir) {
            return Ok(Some(hit));
        }

        let Some(path) = find_framefile(dir) else {
            return Ok(None);
        };
        let framefile = Arc::new(load_framefile(&path)?);
        tracing::debug!(path = %path.display(), "loaded Framefile");

        if let Ok(mut entries) = self.entries.lock() {
            let entry = entries
                .entry(dir.to_path_buf())
                .or_insert_with(|| Arc::clone(&framefile));
            return Ok(Some(Arc::clone(entry)));
        }
        Ok(Some(framefile))
    }

    /// Effective config for a screenshot; defaults when no Framefile exists.
    pub fn config_for(&self, screenshot: &Screenshot) -> Result<FrameConfig, ConfigError> {
        match self.framefile_for(screenshot.dir())? {
            Some(framefile) => framefile.fetch(&screenshot.path),
            None => {
                tracing::debug!(
                    screenshot = %screenshot.path.display(),
                    "no {FRAMEFILE_NAME} found, using defaults"
                );
                Ok(FrameConfig::default())
            }
        }
    }

    fn get(&self, dir: &Path) -> Option<Arc<Framefile>> {
        self.entries.lock().ok()?.get(dir).cloned()
    }
}
