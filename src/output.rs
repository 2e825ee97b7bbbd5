//! CLI output formatting.
//!
//! Each report has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects. Paths are shown relative to
//! the scanned root when possible.
//!
//! # Output Format
//!
//! ## Frame
//!
//! ```text
//! en-US/01-Home.png → 01-Home_framed.png (complex, 750x1334)
//! en-US/02-Search.png: FAILED
//!     Could not find offset information for '.../02-Search.png'
//!
//! Framed 1 of 2 screenshots, 1 failed
//! ```
//!
//! ## Check
//!
//! ```text
//! Screenshots
//! 001 en-US/01-Home.png
//!     Device: iPhone 4.7" portrait (750x1334)
//!     Mode: complex
//!     Frame: iphone-4.7-portrait.png
//!     Offset: +44+139 at 320px
//! 002 mac/01.png
//!     Device: Mac landscape (2880x1800)
//!     Mode: simple
//!     Frame: none (no bezel)
//!
//! Skipped
//!     odd.png: unsupported size 123x456
//!
//! 2 of 2 screenshots ready
//! ```

use crate::pipeline::{BatchSummary, FrameEvent, FrameStatus, Readiness};
use crate::scan::Skipped;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// `path` relative to `root`, or as given when outside it.
fn relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .ok()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(path)
        .display()
        .to_string()
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

// ============================================================================
// Frame
// ============================================================================

/// Format a single frame progress event as display lines.
pub fn format_frame_event(event: &FrameEvent, root: &Path) -> Vec<String> {
    match event {
        FrameEvent::Framed(framed) => vec![format!(
            "{} → {} ({}, {}x{})",
            relative(&framed.screenshot, root),
            file_name(&framed.output),
            framed.mode,
            framed.size.0,
            framed.size.1
        )],
        FrameEvent::Failed {
            screenshot,
            message,
        } => vec![
            format!("{}: FAILED", relative(screenshot, root)),
            format!("{}{}", indent(1), message),
        ],
    }
}

/// Format the closing line of a batch.
pub fn format_summary(summary: &BatchSummary) -> Vec<String> {
    let total = summary.total();
    if total == 0 {
        return vec!["No screenshots to frame".to_string()];
    }
    let mut line = format!(
        "Framed {} of {} screenshot{}",
        summary.framed.len(),
        total,
        plural(total)
    );
    if !summary.failed.is_empty() {
        line.push_str(&format!(", {} failed", summary.failed.len()));
    }
    vec![String::new(), line]
}

/// Format skipped scan candidates.
pub fn format_skipped(skipped: &[Skipped], root: &Path) -> Vec<String> {
    if skipped.is_empty() {
        return Vec::new();
    }
    let mut lines = vec![String::new(), "Skipped".to_string()];
    for entry in skipped {
        lines.push(format!(
            "{}{}: {}",
            indent(1),
            relative(&entry.path, root),
            entry.reason
        ));
    }
    lines
}

pub fn print_frame_event(event: &FrameEvent, root: &Path) {
    for line in format_frame_event(event, root) {
        println!("{}", line);
    }
}

pub fn print_summary(summary: &BatchSummary) {
    for line in format_summary(summary) {
        println!("{}", line);
    }
}

pub fn print_skipped(skipped: &[Skipped], root: &Path) {
    for line in format_skipped(skipped, root) {
        println!("{}", line);
    }
}

// ============================================================================
// Check
// ============================================================================

fn format_frame_status(status: &FrameStatus) -> String {
    match status {
        FrameStatus::Found(path) => file_name(path),
        FrameStatus::Missing(path) => format!("{} (MISSING)", path.display()),
        FrameStatus::NoBezel => "none (no bezel)".to_string(),
    }
}

/// Format the readiness report of the `check` command.
pub fn format_check_output(entries: &[Readiness], skipped: &[Skipped], root: &Path) -> Vec<String> {
    let mut lines = vec!["Screenshots".to_string()];

    for (i, entry) in entries.iter().enumerate() {
        let shot = &entry.screenshot;
        let detail = indent(1);
        lines.push(format!("{} {}", format_index(i + 1), relative(&shot.path, root)));
        lines.push(format!(
            "{detail}Device: {} {} ({}x{})",
            shot.device, shot.orientation, shot.width, shot.height
        ));
        match (&entry.mode, &entry.config_error) {
            (Some(mode), _) => lines.push(format!("{detail}Mode: {mode}")),
            (None, Some(err)) => lines.push(format!("{detail}Config: {err}")),
            (None, None) => {}
        }
        lines.push(format!(
            "{detail}Frame: {}",
            format_frame_status(&entry.frame)
        ));
        if entry.frame != FrameStatus::NoBezel {
            match entry.offset {
                Some(info) => lines.push(format!(
                    "{detail}Offset: {:+}{:+} at {}px",
                    info.offset.0, info.offset.1, info.reference_width
                )),
                None => lines.push(format!("{detail}Offset: MISSING")),
            }
        }
    }

    lines.extend(format_skipped(skipped, root));

    let ready = entries.iter().filter(|e| e.is_ready()).count();
    lines.push(String::new());
    lines.push(format!(
        "{} of {} screenshot{} ready",
        ready,
        entries.len(),
        plural(entries.len())
    ));
    lines
}

pub fn print_check_output(entries: &[Readiness], skipped: &[Skipped], root: &Path) {
    for line in format_check_output(entries, skipped, root) {
        println!("{}", line);
    }
}
