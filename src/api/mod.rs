//! High-level, ergonomic library API: validate a request and export a slide
//! in one call, either through the platform's automation host or through a
//! caller-supplied one. Prefer these entrypoints over the `core` modules.
use std::path::Path;

use crate::core::export;
use crate::core::request::{ExportOptions, ExportRequest};
use crate::error::Result;
use crate::io::{AutomationHost, platform_host};

pub use crate::core::export::ExportSummary;

/// Export an already validated request through the platform host
pub fn export_slide(request: &ExportRequest) -> Result<ExportSummary> {
    let host = platform_host()?;
    export::export_slide(&host, request)
}

/// Export an already validated request through `host`
pub fn export_slide_with<H: AutomationHost>(
    host: &H,
    request: &ExportRequest,
) -> Result<ExportSummary> {
    export::export_slide(host, request)
}

/// Validate `input`/`output` and export through the platform host.
/// Validation failures return before any host is created.
pub fn export_file(
    input: &Path,
    output: &Path,
    options: &ExportOptions,
) -> Result<ExportSummary> {
    let request = ExportRequest::resolve(input, output, options)?;
    export_slide(&request)
}

/// Validate `input`/`output` and export through `host`
pub fn export_file_with<H: AutomationHost>(
    host: &H,
    input: &Path,
    output: &Path,
    options: &ExportOptions,
) -> Result<ExportSummary> {
    let request = ExportRequest::resolve(input, output, options)?;
    export::export_slide(host, &request)
}
