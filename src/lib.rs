//! # Bezel
//!
//! Puts app screenshots into device frames for store listings. In its basic
//! form a screenshot is scaled into the screen area of a bezel image. With a
//! background and captions configured, the device is instead placed on a
//! background canvas of the screenshot's own size, with a keyword and title
//! above it.
//!
//! # Pipeline
//!
//! ```text
//! scan         screenshots/  →  [Screenshot]        (walk + identify device by size)
//! config       Framefile.json → FrameConfig         (per screenshot, memoized per dir)
//! compose      Screenshot + FrameConfig → image     (frame, background, gloss, captions)
//! write        image → <name>_framed.png            (next to the original)
//! ```
//!
//! Screenshots are independent: a batch runs them in parallel and a failure
//! only affects its own screenshot.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Finds candidate PNGs and identifies their device |
//! | [`screenshot`] | Device table and the immutable [`screenshot::Screenshot`] descriptor |
//! | [`config`] | `Framefile.json` loading, filter merging, validation and the per-directory cache |
//! | [`strings`] | Localized caption text from `.strings` files |
//! | [`offsets`] | Where the screen sits inside each frame asset |
//! | [`templates`] | Frame asset file lookup |
//! | [`compose`] | The compositing stages and the per-screenshot error type |
//! | [`pipeline`] | Simple/complex orchestration, batches, readiness checks |
//! | [`imaging`] | Backend trait, pure-Rust backend, layout math |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Backend Trait
//!
//! Every compositing stage talks to an [`imaging::ImageBackend`] and never
//! touches pixels. The production [`imaging::RustBackend`] uses the `image`
//! crate and `rusttype`; tests use a recording mock, so layout rules are
//! checked as exact coordinates without decoding a single PNG.
//!
//! ## Pure Layout Math
//!
//! Sizes and positions are computed by plain functions in
//! [`imaging::calculations`]. The stages only feed them dimensions and apply
//! the results.
//!
//! ## Pure-Rust Imaging (No ImageMagick)
//!
//! Resizing, compositing, trimming and text rendering all run in-process.
//! The binary needs nothing installed: a caption font is embedded as a
//! fallback.

pub mod compose;
pub mod config;
pub mod imaging;
pub mod offsets;
pub mod output;
pub mod pipeline;
pub mod scan;
pub mod screenshot;
pub mod strings;
pub mod templates;
