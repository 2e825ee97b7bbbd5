//! Parameter types for image operations.
//!
//! These types describe *what* to do, not *how* to do it. They are the
//! interface between the compositing stages (which decide where every layer
//! goes) and the [`backend`](super::backend) (which does the pixel work).
//! Keeping them backend-agnostic lets the geometry be tested against a mock.
//!
//! ## Types
//!
//! - [`Resize`]: Aspect-preserving resize to a width, or a forced exact size.
//! - [`Placement`]: Where an overlay lands on its base: a signed offset from
//!   the top-left corner, or anchored to the top-right corner.
//! - [`Color`]: RGBA fill color parsed from config strings.
//! - [`TextParams`]: Everything needed to draw one caption line.

use std::fmt;
use std::path::PathBuf;

/// How to resize an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resize {
    /// Scale to this width; height follows the source aspect ratio.
    Width(u32),
    /// Force exactly this size, ignoring the aspect ratio.
    Exact { width: u32, height: u32 },
}

impl Resize {
    /// Final `(width, height)` for a source of the given size.
    ///
    /// Aspect-preserving resizes round the derived height and never produce
    /// a zero-sized edge.
    pub fn target_size(self, source: (u32, u32)) -> (u32, u32) {
        match self {
            Resize::Width(width) => {
                let (src_w, src_h) = source;
                if src_w == 0 {
                    return (width.max(1), src_h.max(1));
                }
                let height = (src_h as f64 * width as f64 / src_w as f64).round() as u32;
                (width.max(1), height.max(1))
            }
            Resize::Exact { width, height } => (width.max(1), height.max(1)),
        }
    }
}

/// Where to composite an overlay onto its base image.
///
/// Offsets are signed: layers may hang off any edge of the base and are
/// clipped there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Overlay's top-left corner at `(dx, dy)` from the base's top-left.
    TopLeft { dx: i64, dy: i64 },
    /// Overlay's top-right corner pinned to the base's top-right.
    TopRight,
}

impl Placement {
    pub fn at(dx: i64, dy: i64) -> Self {
        Placement::TopLeft { dx, dy }
    }

    /// Resolve to a top-left offset for the given base and overlay sizes.
    pub fn origin(self, base: (u32, u32), overlay: (u32, u32)) -> (i64, i64) {
        match self {
            Placement::TopLeft { dx, dy } => (dx, dy),
            Placement::TopRight => (base.0 as i64 - overlay.0 as i64, 0),
        }
    }
}

/// An RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub [u8; 4]);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorParseError(pub String);

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid color '{}'", self.0)
    }
}

impl std::error::Error for ColorParseError {}

impl Color {
    pub const BLACK: Color = Color([0, 0, 0, 255]);
    pub const WHITE: Color = Color([255, 255, 255, 255]);
    pub const TRANSPARENT: Color = Color([0, 0, 0, 0]);

    /// Parse `#rgb`, `#rrggbb`, `#rrggbbaa`, or one of a few named colors.
    pub fn parse(value: &str) -> Result<Self, ColorParseError> {
        let trimmed = value.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "black" => return Ok(Color::BLACK),
            "white" => return Ok(Color::WHITE),
            "transparent" | "none" => return Ok(Color::TRANSPARENT),
            _ => {}
        }

        let err = || ColorParseError(value.to_string());
        let hex = trimmed.strip_prefix('#').ok_or_else(err)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(err());
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| err());

        match hex.len() {
            3 => {
                let mut rgba = [0, 0, 0, 255];
                for (i, c) in hex.chars().enumerate() {
                    let v = channel(&c.to_string())?;
                    rgba[i] = v * 17;
                }
                Ok(Color(rgba))
            }
            6 | 8 => {
                let mut rgba = [0, 0, 0, 255];
                for i in 0..hex.len() / 2 {
                    rgba[i] = channel(&hex[i * 2..i * 2 + 2])?;
                }
                Ok(Color(rgba))
            }
            _ => Err(err()),
        }
    }
}

/// Parameters for drawing one line of caption text.
///
/// Text is centered on the canvas it is drawn onto; callers trim afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct TextParams {
    pub text: String,
    /// Font file; `None` means the backend's default font.
    pub font: Option<PathBuf>,
    /// Point size in pixels.
    pub size: u32,
    pub color: Color,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_resize_preserves_aspect() {
        assert_eq!(Resize::Width(375).target_size((750, 1334)), (375, 667));
    }

    #[test]
    fn width_resize_never_collapses_to_zero() {
        assert_eq!(Resize::Width(1).target_size((1000, 10)), (1, 1));
    }

    #[test]
    fn exact_resize_ignores_aspect() {
        let resize = Resize::Exact {
            width: 100,
            height: 20,
        };
        assert_eq!(resize.target_size((750, 1334)), (100, 20));
    }

    #[test]
    fn top_right_origin() {
        assert_eq!(Placement::TopRight.origin((750, 1334), (525, 920)), (225, 0));
    }

    #[test]
    fn parse_long_hex() {
        assert_eq!(Color::parse("#545454").unwrap(), Color([84, 84, 84, 255]));
        assert_eq!(Color::parse("#ff000080").unwrap(), Color([255, 0, 0, 128]));
    }

    #[test]
    fn parse_short_hex() {
        assert_eq!(Color::parse("#fff").unwrap(), Color::WHITE);
    }

    #[test]
    fn parse_named() {
        assert_eq!(Color::parse("White").unwrap(), Color::WHITE);
        assert_eq!(Color::parse("black").unwrap(), Color::BLACK);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(Color::parse("545454").is_err());
        assert!(Color::parse("#12345").is_err());
        assert!(Color::parse("#zzzzzz").is_err());
    }
}
