//! Captions above the device: an optional keyword followed by the title.
//!
//! Each caption is drawn onto an oversized transparent canvas, then trimmed
//! to its ink, so the layout works with the real extents of the rendered
//! text rather than font metrics. If keyword and title are too wide for the
//! canvas together, both shrink by the same factor.

use super::background::Backdrop;
use super::{Asset, FrameError};
use crate::config::{CaptionConfig, FrameConfig};
use crate::imaging::calculations::{font_size, layout_captions};
use crate::imaging::{BackendError, ImageBackend, Placement, Raster, Resize, TextParams};
use crate::screenshot::Screenshot;
use crate::strings::{CaptionKind, fetch_text};
use std::path::{Path, PathBuf};

/// Font for a caption.
///
/// A single `font` wins. Otherwise the first `fonts` entry that either lists
/// no languages or lists one that appears in the screenshot path (locale
/// folders such as `zh-Hans/`). `None` means the backend's default font.
pub fn select_font(caption: &CaptionConfig, screenshot_path: &Path) -> Option<PathBuf> {
    if let Some(font) = &caption.font {
        return Some(font.clone());
    }
    let path = screenshot_path.to_string_lossy();
    caption
        .fonts
        .as_ref()?
        .iter()
        .find(|rule| match &rule.supported {
            None => true,
            Some(tags) => tags.iter().any(|tag| path.contains(tag.as_str())),
        })
        .map(|rule| rule.font.clone())
}

/// Render one caption and trim it to its visible pixels.
fn render_caption<B: ImageBackend>(
    backend: &B,
    kind: CaptionKind,
    text: String,
    caption: &CaptionConfig,
    size: u32,
    max_width: u32,
    screenshot: &Screenshot,
) -> Result<B::Image, FrameError> {
    let color = caption.fill_color().map_err(|source| FrameError::Config {
        path: screenshot.path.clone(),
        source,
    })?;
    let font = select_font(caption, &screenshot.path);
    tracing::debug!(
        screenshot = %screenshot.path.display(),
        caption = %kind,
        font = ?font,
        size,
        "rendering caption"
    );

    let canvas = backend.blank(max_width.saturating_mul(3), size.saturating_mul(3));
    let params = TextParams {
        text,
        font: font.clone(),
        size,
        color,
    };
    let drawn = backend
        .draw_text(canvas, &params)
        .map_err(|source| match source {
            BackendError::Font(_) => FrameError::AssetLoad {
                path: screenshot.path.clone(),
                asset: Asset::Font,
                asset_path: font.unwrap_or_else(|| PathBuf::from("<default>")),
                source,
            },
            other => FrameError::Imaging {
                path: screenshot.path.clone(),
                source: other,
            },
        })?;
    Ok(backend.trim(drawn))
}

/// Draw keyword and title into the band above the device.
///
/// The title is required: a screenshot whose captions are configured but
/// which has no title text fails with [`FrameError::MissingTitle`].
pub fn add_captions<B: ImageBackend>(
    backend: &B,
    backdrop: Backdrop<B::Image>,
    config: &FrameConfig,
    screenshot: &Screenshot,
) -> Result<B::Image, FrameError> {
    let Backdrop {
        mut canvas,
        top_space,
    } = backdrop;
    let strings_error = |source| FrameError::Strings {
        path: screenshot.path.clone(),
        source,
    };

    let fallback = CaptionConfig::default();
    let title_config = config.title.as_ref().unwrap_or(&fallback);
    let keyword_config = config.keyword.as_ref().unwrap_or(&fallback);

    let title_text = fetch_text(CaptionKind::Title, screenshot, config.title.as_ref())
        .map_err(strings_error)?
        .ok_or_else(|| FrameError::MissingTitle {
            path: screenshot.path.clone(),
        })?;
    let keyword_text = fetch_text(CaptionKind::Keyword, screenshot, config.keyword.as_ref())
        .map_err(strings_error)?;

    let width = canvas.width();
    let size = font_size(title_config.font_size, screenshot.density, top_space, width);

    let mut title = render_caption(
        backend,
        CaptionKind::Title,
        title_text,
        title_config,
        size,
        width,
        screenshot,
    )?;
    let mut keyword = keyword_text
        .map(|text| {
            render_caption(
                backend,
                CaptionKind::Keyword,
                text,
                keyword_config,
                size,
                width,
                screenshot,
            )
        })
        .transpose()?;

    let layout = layout_captions(
        title.size(),
        keyword.as_ref().map(Raster::size),
        size,
        width,
        top_space,
    );

    if layout.needs_resize() {
        tracing::debug!(
            screenshot = %screenshot.path.display(),
            shrink = layout.shrink,
            "captions too wide, shrinking"
        );
        title = backend
            .resize(title, Resize::Width(layout.title_size.0))
            .map_err(FrameError::imaging(&screenshot.path))?;
        if let (Some(image), Some((w, _))) = (keyword.take(), layout.keyword_size) {
            keyword = Some(
                backend
                    .resize(image, Resize::Width(w))
                    .map_err(FrameError::imaging(&screenshot.path))?,
            );
        }
    }

    if let (Some(image), Some((x, y))) = (&keyword, layout.keyword_origin) {
        canvas = backend.composite_over(canvas, image, Placement::at(x, y));
    }
    let (x, y) = layout.title_origin;
    Ok(backend.composite_over(canvas, &title, Placement::at(x, y)))
}
