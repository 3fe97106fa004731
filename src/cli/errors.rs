use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("the input file is required")]
    MissingInput,

    #[error("the output image file is required")]
    MissingOutput,

    #[error("{0}")]
    Export(#[from] pptscreenshot::Error),
}
