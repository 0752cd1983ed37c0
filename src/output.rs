//! Conversion results: which backend produced the text, what was written,
//! and the process outcome.

use crate::error::{ExtractError, PageError};
use std::fmt;
use std::path::PathBuf;

/// Exit code when non-empty text was written.
pub const EXIT_OK: u8 = 0;

/// Exit code when the output file was written but is empty.
pub const EXIT_EMPTY: u8 = 2;

/// Which extraction backend supplied the text that was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSource {
    /// The whole-document primary backend.
    Primary,
    /// The per-page fallback backend.
    Fallback,
    /// Neither backend produced text.
    None,
}

impl fmt::Display for TextSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextSource::Primary => f.write_str("primary"),
            TextSource::Fallback => f.write_str("fallback"),
            TextSource::None => f.write_str("none"),
        }
    }
}

/// Result of one page on the fallback path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResult {
    /// 1-indexed page number.
    pub page_num: usize,
    /// Character count of the page text (0 when the page failed).
    pub chars: usize,
    /// Set when the page failed and contributed an empty segment.
    pub error: Option<PageError>,
}

/// Final status of a conversion that reached the write step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The output file has content.
    Written,
    /// The output file was written but is empty.
    Empty,
}

impl Outcome {
    /// Process exit code for this outcome.
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Written => EXIT_OK,
            Outcome::Empty => EXIT_EMPTY,
        }
    }
}

/// Everything the converter learned during one run.
#[derive(Debug, Clone)]
pub struct ConversionReport {
    /// Where the text was written.
    pub output_path: PathBuf,
    /// Size of the written file as reported by the filesystem.
    pub bytes_written: u64,
    /// Backend that supplied the text.
    pub source: TextSource,
    /// Per-page results; empty unless the fallback backend ran.
    pub pages: Vec<PageResult>,
    /// Downgraded backend failures, in the order they happened.
    pub warnings: Vec<ExtractError>,
    /// Wall-clock time of the whole conversion.
    pub duration_ms: u64,
}

impl ConversionReport {
    /// Outcome derived from the size of the written file.
    pub fn outcome(&self) -> Outcome {
        if self.bytes_written > 0 {
            Outcome::Written
        } else {
            Outcome::Empty
        }
    }

    /// Number of fallback pages that failed.
    pub fn failed_pages(&self) -> usize {
        self.pages.iter().filter(|p| p.error.is_some()).count()
    }
}
