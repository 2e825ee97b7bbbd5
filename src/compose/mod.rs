//! Compositing stages.
//!
//! Each stage takes the current canvas by value and returns the next one;
//! nothing here holds image state between calls.
//!
//! | Stage | Input → output |
//! |---|---|
//! | [`gloss`] | screenshot → screenshot with gloss overlay |
//! | [`frame`] | screenshot + frame asset → device image |
//! | [`background`] | device image → background canvas + caption band height |
//! | [`title`] | canvas + caption band → canvas with keyword/title |
//!
//! The [`pipeline`](crate::pipeline) decides which stages run.

pub mod background;
pub mod frame;
pub mod gloss;
pub mod title;

use crate::config::ConfigError;
use crate::imaging::BackendError;
use crate::strings::StringsError;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which file failed to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Asset {
    Screenshot,
    Frame,
    Background,
    Gloss,
    Font,
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Asset::Screenshot => "screenshot",
            Asset::Frame => "frame",
            Asset::Background => "background",
            Asset::Gloss => "gloss",
            Asset::Font => "font",
        })
    }
}

/// Why one screenshot could not be framed. Always names the screenshot.
#[derive(Error, Debug)]
pub enum FrameError {
    #[error("Could not find offset information for '{}'", path.display())]
    OffsetNotFound { path: PathBuf },
    #[error(
        "Could not get title for screenshot '{}'. Provide one in Framefile.json or title.strings",
        path.display()
    )]
    MissingTitle { path: PathBuf },
    #[error("Could not load {asset} '{}' for '{}': {source}", asset_path.display(), path.display())]
    AssetLoad {
        path: PathBuf,
        asset: Asset,
        asset_path: PathBuf,
        #[source]
        source: BackendError,
    },
    #[error("Invalid configuration for '{}': {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: ConfigError,
    },
    #[error("Could not read caption text for '{}': {source}", path.display())]
    Strings {
        path: PathBuf,
        #[source]
        source: StringsError,
    },
    #[error("Output '{}' for '{}' collides with another screenshot's output", output.display(), path.display())]
    OutputConflict { path: PathBuf, output: PathBuf },
    #[error("Image processing failed for '{}': {source}", path.display())]
    Imaging {
        path: PathBuf,
        #[source]
        source: BackendError,
    },
}

impl FrameError {
    /// The screenshot this error belongs to.
    pub fn screenshot(&self) -> &std::path::Path {
        match self {
            FrameError::OffsetNotFound { path }
            | FrameError::MissingTitle { path }
            | FrameError::AssetLoad { path, .. }
            | FrameError::Config { path, .. }
            | FrameError::Strings { path, .. }
            | FrameError::OutputConflict { path, .. }
            | FrameError::Imaging { path, .. } => path,
        }
    }

    pub(crate) fn asset(
        screenshot: &std::path::Path,
        asset: Asset,
        asset_path: &std::path::Path,
    ) -> impl FnOnce(BackendError) -> FrameError {
        let path = screenshot.to_path_buf();
        let asset_path = asset_path.to_path_buf();
        move |source| FrameError::AssetLoad {
            path,
            asset,
            asset_path,
            source,
        }
    }

    pub(crate) fn imaging(screenshot: &std::path::Path) -> impl FnOnce(BackendError) -> FrameError {
        let path = screenshot.to_path_buf();
        move |source| FrameError::Imaging { path, source }
    }
}
