//! Image processing in pure Rust, no ImageMagick.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `image::image_dimensions` |
//! | **Resize** | Lanczos3, width-driven or forced exact |
//! | **Composite** | source-over `overlay` at a signed offset |
//! | **Caption text** | `rusttype` onto a transparent canvas, then trim |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for layout math (unit testable)
//! - **Parameters**: Data structures describing image operations
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]

pub mod backend;
pub mod calculations;
pub mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend, Raster};
pub use params::{Color, Placement, Resize, TextParams};
pub use rust_backend::RustBackend;
