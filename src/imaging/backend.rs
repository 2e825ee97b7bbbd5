//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait is the raster collaborator every compositing
//! stage talks to: identify, open, blank canvas, resize, composite, trim,
//! draw text and write. Stages never touch pixels directly, so the whole
//! layout pipeline can run against the recording mock in [`tests`].
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend): pure Rust, statically
//! linked, no ImageMagick.

use super::params::{Placement, Resize, TextParams};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to decode {path}: {message}")]
    Decode { path: String, message: String },
    #[error("Font error: {0}")]
    Font(String),
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),
}

/// Result of an identify operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Anything with a pixel size.
pub trait Raster {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    fn size(&self) -> (u32, u32) {
        (self.width(), self.height())
    }
}

/// Trait for image processing backends.
///
/// Every operation that changes pixels takes its input image by value and
/// returns the result, so each compositing step consumes the previous canvas
/// and hands back the next one.
pub trait ImageBackend: Sync {
    type Image: Raster + Send;

    /// Get image dimensions without a full decode.
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError>;

    /// Decode an image from disk.
    fn open(&self, path: &Path) -> Result<Self::Image, BackendError>;

    /// A fully transparent canvas.
    fn blank(&self, width: u32, height: u32) -> Self::Image;

    fn resize(&self, image: Self::Image, resize: Resize) -> Result<Self::Image, BackendError>;

    /// Draw `overlay` over `base` with source-over blending. The result keeps
    /// the base's size; overlay pixels outside it are clipped.
    fn composite_over(
        &self,
        base: Self::Image,
        overlay: &Self::Image,
        placement: Placement,
    ) -> Self::Image;

    /// Crop to the bounding box of non-transparent pixels.
    fn trim(&self, image: Self::Image) -> Self::Image;

    /// Draw one line of text centered on `canvas`.
    fn draw_text(
        &self,
        canvas: Self::Image,
        params: &TextParams,
    ) -> Result<Self::Image, BackendError>;

    fn write_png(&self, image: &Self::Image, path: &Path) -> Result<(), BackendError>;
}
