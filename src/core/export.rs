use std::ops::Deref;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::core::request::ExportRequest;
use crate::error::{Error, Result};
use crate::io::{AutomationHost, Dispatch, Variant};
use crate::types::{ImageFilter, SlideSize};

/// ProgID of the presentation application driven over automation.
pub const PROG_ID: &str = "PowerPoint.Application";

// Office tri-state booleans.
const MSO_TRUE: i32 = -1;
const MSO_FALSE: i32 = 0;

/// What a successful export produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub output: PathBuf,
    pub filter: ImageFilter,
    pub size: SlideSize,
    /// Slide actually exported, after clamping
    pub slide: i32,
    pub slide_count: i32,
}

/// Export one slide of `request.input` to `request.output` through `host`.
///
/// Every handle acquired here is released before returning, on success and
/// on failure alike. The opened presentation is marked saved and closed
/// first; failures during that cleanup are logged, never returned.
pub fn export_slide<H: AutomationHost>(host: &H, request: &ExportRequest) -> Result<ExportSummary> {
    let filter = ImageFilter::from_output(&request.output);
    let input = path_arg(&request.input)?;
    let output = path_arg(&request.output)?;
    info!(
        "Exporting {:?} -> {:?} ({})",
        request.input, request.output, filter
    );

    let app = host.connect(PROG_ID)?;
    let presentations = app.get("Presentations")?.into_object("Presentations")?;

    debug!("Opening {}", input);
    let presentation = presentations
        .call(
            "Open",
            vec![
                Variant::Text(input),
                Variant::Int(MSO_TRUE),  // ReadOnly
                Variant::Int(MSO_FALSE), // Untitled
                Variant::Int(MSO_FALSE), // WithWindow
            ],
        )?
        .into_object("Presentations.Open")?;
    let presentation = OpenPresentation(presentation);

    let size = match request.size {
        Some(size) => size,
        None => {
            let size = slide_master_size(&*presentation)?;
            debug!("Using slide master size {}", size);
            size
        }
    };

    let slides = presentation.get("Slides")?.into_object("Slides")?;
    let slide_count = slides.get("Count")?.to_i32("Slides.Count")?;
    if slide_count < 1 {
        return Err(Error::NoSlides(request.input.clone()));
    }
    let index = request.slide.clamp_to(slide_count);
    if index != request.slide.get() {
        debug!(
            "Slide {} out of range 1..={}, using {}",
            request.slide.get(),
            slide_count,
            index
        );
    }

    let slide = slides
        .call("Item", vec![Variant::Int(index)])?
        .into_object("Slides.Item")?;
    slide.call(
        "Export",
        vec![
            Variant::Text(output),
            Variant::Text(filter.as_str().to_string()),
            Variant::Int(pixels(size.width)),
            Variant::Int(pixels(size.height)),
        ],
    )?;

    info!("Exported slide {}/{} at {}", index, slide_count, size);
    Ok(ExportSummary {
        output: request.output.clone(),
        filter,
        size,
        slide: index,
        slide_count,
    })
}

fn slide_master_size<D: Dispatch>(presentation: &D) -> Result<SlideSize> {
    let master = presentation.get("SlideMaster")?.into_object("SlideMaster")?;
    let width = master.get("Width")?.to_f64("SlideMaster.Width")?;
    let height = master.get("Height")?.to_f64("SlideMaster.Height")?;
    Ok(SlideSize::from_points(width, height))
}

fn path_arg(path: &Path) -> Result<String> {
    path.to_str()
        .map(str::to_string)
        .ok_or_else(|| Error::NonUnicodePath(path.to_path_buf()))
}

fn pixels(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

/// Open presentation; marked saved and closed when dropped, then released.
struct OpenPresentation<D: Dispatch>(D);

impl<D: Dispatch> Deref for OpenPresentation<D> {
    type Target = D;

    fn deref(&self) -> &D {
        &self.0
    }
}

impl<D: Dispatch> Drop for OpenPresentation<D> {
    fn drop(&mut self) {
        if let Err(e) = self.0.put("Saved", Variant::Int(MSO_TRUE)) {
            warn!("Failed to set Saved property: {}", e);
        }
        if let Err(e) = self.0.call("Close", Vec::new()) {
            warn!("Failed to close presentation: {}", e);
        }
    }
}
