//! Pure Rust image processing backend.
//!
//! Everything is statically linked into the binary.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (PNG, JPEG) | `image` crate (pure Rust decoders) |
//! | Resize | `image::imageops::resize` with `Lanczos3` filter |
//! | Composite | `image::imageops::overlay` (source-over alpha blend) |
//! | Trim | alpha bounding box + `image::imageops::crop_imm` |
//! | Text | `rusttype` glyph layout + coverage rasterization |
//! | Fallback font | DejaVu Sans, embedded with `include_bytes!` |
//! | Encode → PNG | `image::DynamicImage::save_with_format` |

use super::backend::{BackendError, Dimensions, ImageBackend, Raster};
use super::params::{Placement, Resize, TextParams};
use image::imageops::FilterType;
use image::{ImageBuffer, ImageFormat, ImageReader, Pixel, Rgba, RgbaImage};
use rusttype::{Font, Scale, point};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

/// Caption font used when neither the caption nor the backend names one.
static EMBEDDED_FONT: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");

/// Fonts tried, in order, when no default font is given explicitly.
const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/System/Library/Fonts/Helvetica.ttc",
    "/Library/Fonts/Arial.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

impl Raster for RgbaImage {
    fn width(&self) -> u32 {
        ImageBuffer::width(self)
    }

    fn height(&self) -> u32 {
        ImageBuffer::height(self)
    }
}

/// Pure Rust backend using the `image` crate ecosystem.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend {
    default_font: Option<PathBuf>,
    fonts: Mutex<HashMap<PathBuf, Arc<Font<'static>>>>,
    embedded: OnceLock<Option<Arc<Font<'static>>>>,
}

impl RustBackend {
    /// Backend whose default font is the first system font found on disk,
    /// falling back to the embedded font when there is none.
    pub fn new() -> Self {
        let default_font = SYSTEM_FONT_CANDIDATES
            .iter()
            .map(PathBuf::from)
            .find(|p| p.exists());
        Self::with_default_font(default_font)
    }

    /// Backend with an explicit default font file. `None` uses the
    /// embedded font.
    pub fn with_default_font(default_font: Option<PathBuf>) -> Self {
        Self {
            default_font,
            fonts: Mutex::new(HashMap::new()),
            embedded: OnceLock::new(),
        }
    }

    pub fn default_font(&self) -> Option<&Path> {
        self.default_font.as_deref()
    }

    /// Load a font, decoding each file only once per backend.
    fn load_font(&self, path: &Path) -> Result<Arc<Font<'static>>, BackendError> {
        let cached = self
            .fonts
            .lock()
            .ok()
            .and_then(|cache| cache.get(path).cloned());
        if let Some(font) = cached {
            return Ok(font);
        }

        let bytes = std::fs::read(path)
            .map_err(|e| BackendError::Font(format!("{}: {e}", path.display())))?;
        let font = Font::try_from_vec(bytes)
            .map(Arc::new)
            .ok_or_else(|| BackendError::Font(format!("not a usable font: {}", path.display())))?;

        if let Ok(mut cache) = self.fonts.lock() {
            cache.insert(path.to_path_buf(), Arc::clone(&font));
        }
        Ok(font)
    }

    fn embedded_font(&self) -> Result<Arc<Font<'static>>, BackendError> {
        self.embedded
            .get_or_init(|| Font::try_from_bytes(EMBEDDED_FONT).map(Arc::new))
            .clone()
            .ok_or_else(|| BackendError::Font("embedded font is not usable".into()))
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Bounding box `(x, y, width, height)` of all pixels with non-zero alpha.
fn opaque_bounds(image: &RgbaImage) -> Option<(u32, u32, u32, u32)> {
    let mut min_x = u32::MAX;
    let mut min_y = u32::MAX;
    let mut max_x = 0;
    let mut max_y = 0;
    let mut found = false;

    for (x, y, pixel) in image.enumerate_pixels() {
        if pixel[3] > 0 {
            found = true;
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
    }

    found.then(|| (min_x, min_y, max_x - min_x + 1, max_y - min_y + 1))
}

impl ImageBackend for RustBackend {
    type Image = RgbaImage;

    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
        let (width, height) =
            image::image_dimensions(path).map_err(|e| BackendError::Decode {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        Ok(Dimensions { width, height })
    }

    fn open(&self, path: &Path) -> Result<RgbaImage, BackendError> {
        let decoded = ImageReader::open(path)
            .map_err(BackendError::Io)?
            .with_guessed_format()
            .map_err(BackendError::Io)?
            .decode()
            .map_err(|e| BackendError::Decode {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        Ok(decoded.to_rgba8())
    }

    fn blank(&self, width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_pixel(width.max(1), height.max(1), Rgba([0, 0, 0, 0]))
    }

    fn resize(&self, image: RgbaImage, resize: Resize) -> Result<RgbaImage, BackendError> {
        let (width, height) = resize.target_size(image.size());
        if (width, height) == image.size() {
            return Ok(image);
        }
        Ok(image::imageops::resize(
            &image,
            width,
            height,
            FilterType::Lanczos3,
        ))
    }

    fn composite_over(
        &self,
        mut base: RgbaImage,
        overlay: &RgbaImage,
        placement: Placement,
    ) -> RgbaImage {
        let (x, y) = placement.origin(base.size(), overlay.size());
        image::imageops::overlay(&mut base, overlay, x, y);
        base
    }

    fn trim(&self, image: RgbaImage) -> RgbaImage {
        match opaque_bounds(&image) {
            Some((x, y, w, h)) => image::imageops::crop_imm(&image, x, y, w, h).to_image(),
            None => RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 0])),
        }
    }

    fn draw_text(
        &self,
        mut canvas: RgbaImage,
        params: &TextParams,
    ) -> Result<RgbaImage, BackendError> {
        let font = match params.font.as_deref().or(self.default_font.as_deref()) {
            Some(path) => self.load_font(path)?,
            None => self.embedded_font()?,
        };

        let scale = Scale::uniform(params.size as f32);
        let v_metrics = font.v_metrics(scale);
        let text_width = font
            .layout(&params.text, scale, point(0.0, 0.0))
            .last()
            .map(|g| g.position().x + g.unpositioned().h_metrics().advance_width)
            .unwrap_or(0.0);
        let text_height = v_metrics.ascent - v_metrics.descent;

        let origin_x = (canvas.width() as f32 - text_width) / 2.0;
        let baseline_y = (canvas.height() as f32 - text_height) / 2.0 + v_metrics.ascent;

        let [r, g, b, a] = params.color.0;
        let (canvas_w, canvas_h) = canvas.size();

        for glyph in font.layout(&params.text, scale, point(origin_x, baseline_y)) {
            let Some(bb) = glyph.pixel_bounding_box() else {
                continue;
            };
            glyph.draw(|gx, gy, coverage| {
                let x = bb.min.x + gx as i32;
                let y = bb.min.y + gy as i32;
                if x < 0 || y < 0 || x as u32 >= canvas_w || y as u32 >= canvas_h {
                    return;
                }
                let alpha = (coverage * a as f32).round().clamp(0.0, 255.0) as u8;
                if alpha > 0 {
                    canvas
                        .get_pixel_mut(x as u32, y as u32)
                        .blend(&Rgba([r, g, b, alpha]));
                }
            });
        }

        Ok(canvas)
    }

    fn write_png(&self, image: &RgbaImage, path: &Path) -> Result<(), BackendError> {
        image
            .save_with_format(path, ImageFormat::Png)
            .map_err(|e| BackendError::ProcessingFailed(format!("PNG encode failed: {}", e)))
    }
}
