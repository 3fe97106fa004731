use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{SlideIndex, SlideSize};

/// Raw export knobs as supplied by a caller, before validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    /// Output width in pixels; 0 means "take it from the slide master"
    pub width: u32,
    /// Output height in pixels; 0 means "take it from the slide master"
    pub height: u32,
    /// 1-based slide position, clamped at export time
    pub slide: i32,
    /// Replace an existing output file
    pub force: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            slide: 1,
            force: false,
        }
    }
}

/// A validated export request with absolute paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    /// `None` derives both sides from the slide master
    pub size: Option<SlideSize>,
    pub slide: SlideIndex,
    pub force: bool,
}

impl ExportRequest {
    /// Validate paths and options. Nothing here touches the automation host.
    ///
    /// The input must exist; the output must not, unless `force` is set.
    /// Both paths come back absolute.
    pub fn resolve(
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
        options: &ExportOptions,
    ) -> Result<Self> {
        let input = input.as_ref();
        let output = output.as_ref();

        if input.as_os_str().is_empty() {
            return Err(Error::MissingArgument { arg: "--input" });
        }
        if !input.exists() {
            return Err(Error::InputNotFound(input.to_path_buf()));
        }
        if output.as_os_str().is_empty() {
            return Err(Error::MissingArgument { arg: "--output" });
        }
        if !options.force && output.exists() {
            return Err(Error::OutputExists(output.to_path_buf()));
        }

        check_dimension("--width", options.width)?;
        check_dimension("--height", options.height)?;

        let request = ExportRequest {
            input: std::path::absolute(input)?,
            output: std::path::absolute(output)?,
            size: SlideSize::explicit(options.width, options.height),
            slide: SlideIndex::new(options.slide),
            force: options.force,
        };
        debug!("Resolved request: {:?}", request);
        Ok(request)
    }
}

// The host takes 32-bit signed pixel counts.
fn check_dimension(arg: &'static str, value: u32) -> Result<()> {
    if i32::try_from(value).is_err() {
        return Err(Error::InvalidArgument {
            arg,
            value: value.to_string(),
        });
    }
    Ok(())
}
