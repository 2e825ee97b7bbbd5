//! Screenshot discovery.
//!
//! Walks a directory tree (or takes a single file) and identifies every PNG
//! that is not itself framed output:
//!
//! ```text
//! screenshots/
//! ├── Framefile.json
//! ├── en-US/
//! │   ├── iPhone6-01-Home.png          # candidate
//! │   ├── iPhone6-01-Home_framed.png   # output of a previous run, ignored
//! │   └── notes.txt                    # ignored
//! └── de-DE/
//!     └── iPhone6-01-Home.png          # candidate
//! ```
//!
//! Each candidate is identified (header only, no full decode). Sizes that
//! match no known device are reported as skipped rather than failing the
//! scan, so one stray image does not block a batch.

use crate::imaging::ImageBackend;
use crate::screenshot::{Screenshot, ScreenshotError, is_framed_output};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Path not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Why a candidate was left out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    UnknownDevice { width: u32, height: u32 },
    Unreadable(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::UnknownDevice { width, height } => {
                write!(f, "unsupported size {width}x{height}")
            }
            SkipReason::Unreadable(message) => write!(f, "unreadable: {message}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    pub path: PathBuf,
    pub reason: SkipReason,
}

/// Result of a scan, sorted by path.
#[derive(Debug, Default)]
pub struct ScanReport {
    pub screenshots: Vec<Screenshot>,
    pub skipped: Vec<Skipped>,
}

/// Whether a path looks like an input screenshot.
pub fn is_candidate(path: &Path) -> bool {
    let is_png = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("png"));
    is_png && !is_framed_output(path)
}

/// Candidate files under `root`, in path order. A file `root` is its own
/// single candidate if it qualifies.
pub fn find_candidates(root: &Path) -> Result<Vec<PathBuf>, ScanError> {
    if !root.exists() {
        return Err(ScanError::NotFound(root.to_path_buf()));
    }

    let mut candidates = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() && is_candidate(entry.path()) {
            candidates.push(entry.into_path());
        }
    }
    Ok(candidates)
}

/// Find and identify screenshots under `root`.
pub fn scan<B: ImageBackend>(backend: &B, root: &Path) -> Result<ScanReport, ScanError> {
    let mut report = ScanReport::default();

    for path in find_candidates(root)? {
        let dims = match backend.identify(&path) {
            Ok(dims) => dims,
            Err(err) => {
                tracing::warn!(path = %path.display(), "could not read image: {err}");
                report.skipped.push(Skipped {
                    path,
                    reason: SkipReason::Unreadable(err.to_string()),
                });
                continue;
            }
        };

        match Screenshot::new(&path, dims.width, dims.height) {
            Ok(screenshot) => report.screenshots.push(screenshot),
            Err(ScreenshotError::UnknownDevice { width, height, .. }) => {
                tracing::warn!(
                    path = %path.display(),
                    "skipping: {width}x{height} matches no supported device"
                );
                report.skipped.push(Skipped {
                    path,
                    reason: SkipReason::UnknownDevice { width, height },
                });
            }
        }
    }

    tracing::debug!(
        root = %root.display(),
        found = report.screenshots.len(),
        skipped = report.skipped.len(),
        "scan complete"
    );
    Ok(report)
}
