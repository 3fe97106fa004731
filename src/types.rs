//! Shared value types used across pptscreenshot.
//! Includes the export `ImageFilter`, raster `SlideSize`, and the 1-based `SlideIndex`.
use std::path::Path;

/// Graphics filter name passed to the host's slide export, e.g. `PNG` or `JPG`.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct ImageFilter(String);

impl ImageFilter {
    pub const DEFAULT: &'static str = "PNG";

    /// Derive the filter from the output file extension, uppercased.
    /// Paths without an extension (or with an empty one) fall back to `PNG`.
    pub fn from_output(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if !ext.is_empty() => ImageFilter(ext.to_uppercase()),
            _ => ImageFilter(Self::DEFAULT.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ImageFilter {
    fn default() -> Self {
        ImageFilter(Self::DEFAULT.to_string())
    }
}

impl std::fmt::Display for ImageFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Export raster dimensions in pixels.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct SlideSize {
    pub width: u32,
    pub height: u32,
}

impl SlideSize {
    /// `None` when either side is zero, meaning "derive from the slide master".
    pub fn explicit(width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 {
            None
        } else {
            Some(SlideSize { width, height })
        }
    }

    /// Slide master dimensions come back as points in floating point; the
    /// fractional part is dropped and negative or NaN values saturate to 0.
    pub fn from_points(width: f64, height: f64) -> Self {
        SlideSize {
            width: width as u32,
            height: height as u32,
        }
    }
}

impl std::fmt::Display for SlideSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Requested 1-based slide position. Out of range requests are clamped, not rejected.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct SlideIndex(i32);

impl SlideIndex {
    pub const FIRST: SlideIndex = SlideIndex(1);

    pub fn new(index: i32) -> Self {
        SlideIndex(index)
    }

    pub fn get(self) -> i32 {
        self.0
    }

    /// Clamp into `[1, count]`. Callers must reject empty presentations first.
    pub fn clamp_to(self, count: i32) -> i32 {
        debug_assert!(count >= 1);
        self.0.max(1).min(count)
    }
}

impl Default for SlideIndex {
    fn default() -> Self {
        Self::FIRST
    }
}
