//! Error types for the edgequake-pdf2txt library.
//!
//! Three error types reflect three distinct failure modes:
//!
//! * [`Pdf2TxtError`] — **Fatal**: the conversion cannot proceed at all
//!   (input missing, output not writable). Returned as `Err(Pdf2TxtError)`
//!   from [`crate::convert::convert`].
//!
//! * [`ExtractError`] — **Non-fatal**: one extraction backend failed or is
//!   not installed. Recorded in [`crate::output::ConversionReport::warnings`]
//!   and the pipeline moves on to the next backend.
//!
//! * [`PageError`] — **Non-fatal**: a single page failed in the per-page
//!   fallback backend. The page contributes an empty segment and is recorded
//!   in [`crate::output::PageResult`].

use std::path::PathBuf;
use thiserror::Error;

/// Exit code for a missing input or an unwritable output.
pub const EXIT_FAILURE: u8 = 1;

/// All fatal errors returned by the edgequake-pdf2txt library.
#[derive(Debug, Error)]
pub enum Pdf2TxtError {
    /// Input path does not name an existing regular file.
    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Could not create or write the output text file.
    #[error("Failed to write output file '{}': {source}", path.display())]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Pdf2TxtError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        EXIT_FAILURE
    }
}

/// A non-fatal failure of one extraction backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// The backend is not compiled in or its library could not be loaded.
    #[error("{backend} not available")]
    Unavailable { backend: String },

    /// The backend returned an error for the whole document.
    #[error("{backend} failed: {detail}")]
    DocumentFailed { backend: String, detail: String },

    /// The backend panicked while reading the document.
    #[error("{backend} crashed: {detail}")]
    Panicked { backend: String, detail: String },
}

impl ExtractError {
    pub fn failed(backend: &str, detail: impl ToString) -> Self {
        ExtractError::DocumentFailed {
            backend: backend.to_string(),
            detail: detail.to_string(),
        }
    }
}

/// A non-fatal error for a single page of the fallback backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    /// The page could not be loaded or its text could not be read.
    #[error("Page {page}: text extraction failed: {detail}")]
    PageFailed { page: usize, detail: String },
}
