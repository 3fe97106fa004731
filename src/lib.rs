#![doc = r#"
pptscreenshot: export a single presentation slide to a raster image.

The crate drives a desktop presentation application (PowerPoint) through its
automation object model: it opens the presentation read-only and without a
window, picks a slide, and asks the application to export it with the graphics
filter matching the output file extension. It powers the `pptscreenshot` CLI
and can be embedded in your own Rust applications.

Requirements
------------
- Windows with PowerPoint installed for real exports. On other platforms the
  default host refuses to connect and every export fails with
  `HostError::Unsupported`.
- Rust 2024 edition toolchain.

Quick start: export a slide to a file
-------------------------------------
```rust,no_run
use std::path::Path;
use pptscreenshot::{export_file, ExportOptions};

fn main() -> pptscreenshot::Result<()> {
    let options = ExportOptions {
        width: 1920,
        height: 1080,
        slide: 2,
        force: true,
    };
    let summary = export_file(Path::new("deck.pptx"), Path::new("slide.png"), &options)?;
    println!("wrote {} ({}, {})", summary.output.display(), summary.filter, summary.size);
    Ok(())
}
```

Size from the slide master
--------------------------
Leave `width` or `height` at zero and both are read from the presentation's
slide master. The slide index is clamped into the presentation's range.

Custom automation hosts
-----------------------
Export logic is written against the [`AutomationHost`] and [`Dispatch`] traits,
so any object model speaking the same property/method vocabulary can be
plugged in with [`export_file_with`], e.g. an in-memory fake in tests.

Error handling
--------------
All public functions return `pptscreenshot::Result<T>`; match on
`pptscreenshot::Error` to tell validation failures from host failures.

```rust,no_run
use std::path::Path;
use pptscreenshot::{export_file, Error, ExportOptions};

fn main() {
    match export_file(Path::new("deck.pptx"), Path::new("out.png"), &ExportOptions::default()) {
        Ok(_) => {}
        Err(Error::OutputExists(path)) => eprintln!("refusing to overwrite {}", path.display()),
        Err(Error::Host(e)) => eprintln!("PowerPoint error: {e}"),
        Err(other) => eprintln!("{other}"),
    }
}
```

Useful modules
--------------
- [`api`]: high-level entry points.
- [`core`]: request validation and the export sequence.
- [`io`]: automation host traits and the COM backend.
- [`types`]: `ImageFilter`, `SlideSize`, `SlideIndex`.
- [`error`]: crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;
pub mod version;

// Types
pub use core::request::{ExportOptions, ExportRequest};
pub use error::{Error, Result};
pub use types::{ImageFilter, SlideIndex, SlideSize};
pub use version::{BuildInfo, build_info};

// Automation
pub use io::{AutomationHost, Dispatch, HostError, PlatformHost, Variant, platform_host};

// High-level API re-exports
pub use api::{ExportSummary, export_file, export_file_with, export_slide, export_slide_with};
