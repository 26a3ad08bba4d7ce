//! Font provisioning for chart text.
//!
//! Plotters is built with `ab_glyph`, so fonts are registered from raw
//! TrueType bytes instead of being looked up through the platform font
//! service. When nothing can be loaded, charts are still rendered and
//! [`crate::charts::backend::FontSafeBackend`] drops the text.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use plotters::style::{FontStyle, register_font};
use tracing::{debug, info, warn};

/// Family name every chart style refers to.
pub const CHART_FONT_FAMILY: &str = "sans-serif";

const CANDIDATE_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

static INSTALLED: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Registers a chart font once per process and returns the file it came from.
///
/// `preferred` is tried first, then a list of common system locations.
/// Later calls return the result of the first one.
pub fn install(preferred: Option<&Path>) -> Option<&'static Path> {
    INSTALLED
        .get_or_init(|| load_first(preferred))
        .as_deref()
}

fn load_first(preferred: Option<&Path>) -> Option<PathBuf> {
    let candidates = preferred
        .map(Path::to_path_buf)
        .into_iter()
        .chain(CANDIDATE_FONTS.iter().map(PathBuf::from));

    for path in candidates {
        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "Font candidate unavailable");
                continue;
            }
        };

        // ab_glyph keeps borrowed font data for the rest of the process
        let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
        match register_font(CHART_FONT_FAMILY, FontStyle::Normal, bytes) {
            Ok(()) => {
                info!(path = %path.display(), "Chart font registered");
                return Some(path);
            }
            Err(_) => warn!(path = %path.display(), "Font file rejected"),
        }
    }

    warn!("No usable font found; chart text will be omitted");
    None
}
