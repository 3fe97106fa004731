//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Wraps automation host and I/O failures, and provides semantic variants
//! for argument validation so callers can tell "bad request" from "host broke".
use std::path::PathBuf;

use thiserror::Error;

use crate::io::HostError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Automation error: {0}")]
    Host(#[from] HostError),

    #[error("Missing required argument: {arg}")]
    MissingArgument { arg: &'static str },

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("the input file does not exist: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("the output image file already exists: {}", .0.display())]
    OutputExists(PathBuf),

    #[error("Path is not valid Unicode: {}", .0.display())]
    NonUnicodePath(PathBuf),

    #[error("Presentation has no slides: {}", .0.display())]
    NoSlides(PathBuf),
}

impl Error {
    /// True for failures detected before any automation host was contacted.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::MissingArgument { .. }
                | Error::InvalidArgument { .. }
                | Error::InputNotFound(_)
                | Error::OutputExists(_)
                | Error::NonUnicodePath(_)
        )
    }
}
