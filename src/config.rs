//! Configuration types for PDF-to-text conversion.
//!
//! Conversion behaviour is controlled through [`ConversionConfig`], built via
//! its [`ConversionConfigBuilder`]. The defaults reproduce the command-line
//! tool exactly: output lands at `<input>.txt` and fallback pages are joined
//! with a single newline.

use crate::error::Pdf2TxtError;
use crate::progress::ProgressCallback;
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

/// Suffix appended to the input path to form the output path.
pub const DEFAULT_OUTPUT_SUFFIX: &str = ".txt";

/// Separator placed between consecutive pages of the fallback backend.
pub const DEFAULT_PAGE_SEPARATOR: &str = "\n";

/// Configuration for a PDF-to-text conversion.
///
/// # Example
/// ```rust
/// use edgequake_pdf2txt::ConversionConfig;
///
/// let config = ConversionConfig::builder()
///     .output_suffix(".utf8.txt")
///     .build()
///     .unwrap();
/// assert_eq!(
///     config.output_path_for("paper.pdf"),
///     std::path::PathBuf::from("paper.pdf.utf8.txt")
/// );
/// ```
#[derive(Clone)]
pub struct ConversionConfig {
    /// Literal suffix appended to the input path. Default: `".txt"`.
    ///
    /// The suffix is appended, never substituted for the extension, so
    /// `report.v2.pdf` becomes `report.v2.pdf.txt`.
    pub output_suffix: String,

    /// String inserted between pages on the per-page fallback path. Default: `"\n"`.
    pub page_separator: String,

    /// Optional progress callback for extraction events.
    pub progress_callback: Option<ProgressCallback>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            output_suffix: DEFAULT_OUTPUT_SUFFIX.to_string(),
            page_separator: DEFAULT_PAGE_SEPARATOR.to_string(),
            progress_callback: None,
        }
    }
}

impl fmt::Debug for ConversionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversionConfig")
            .field("output_suffix", &self.output_suffix)
            .field("page_separator", &self.page_separator)
            .field(
                "progress_callback",
                &self
                    .progress_callback
                    .as_ref()
                    .map(|_| "<dyn ExtractionProgressCallback>"),
            )
            .finish()
    }
}

impl ConversionConfig {
    /// Create a new builder for `ConversionConfig`.
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder {
            config: Self::default(),
        }
    }

    /// Output path for `input`: the input path with the suffix appended.
    pub fn output_path_for(&self, input: impl AsRef<Path>) -> PathBuf {
        let mut raw: OsString = input.as_ref().as_os_str().to_owned();
        raw.push(&self.output_suffix);
        PathBuf::from(raw)
    }
}

/// Builder for [`ConversionConfig`].
#[derive(Debug)]
pub struct ConversionConfigBuilder {
    config: ConversionConfig,
}

impl ConversionConfigBuilder {
    pub fn output_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.config.output_suffix = suffix.into();
        self
    }

    pub fn page_separator(mut self, sep: impl Into<String>) -> Self {
        self.config.page_separator = sep.into();
        self
    }

    pub fn progress_callback(mut self, cb: ProgressCallback) -> Self {
        self.config.progress_callback = Some(cb);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ConversionConfig, Pdf2TxtError> {
        let c = &self.config;
        // An empty suffix would make the output path equal the input path.
        if c.output_suffix.is_empty() {
            return Err(Pdf2TxtError::InvalidConfig(
                "output suffix must not be empty".into(),
            ));
        }
        if c.output_suffix.contains(['/', '\\']) {
            return Err(Pdf2TxtError::InvalidConfig(format!(
                "output suffix must not contain a path separator, got {:?}",
                c.output_suffix
            )));
        }
        Ok(self.config)
    }
}
