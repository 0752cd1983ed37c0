//! # edgequake-pdf2txt
//!
//! Convert a PDF document to plain UTF-8 text, written next to the input as
//! `<input>.txt`.
//!
//! The crate does no PDF parsing of its own. It drives up to two extraction
//! backends in priority order and keeps the first non-empty result:
//!
//! ```text
//! PDF
//!  │
//!  ├─ 1. Input     must be an existing regular file
//!  ├─ 2. Primary   whole-document text (pdf-extract)
//!  ├─ 3. Fallback  page-by-page text (PDFium), only if 2 gave nothing
//!  ├─ 4. Polish    CRLF / CR → LF
//!  └─ 5. Output    <input>.txt, overwritten; exit 0 or 2 by file size
//! ```
//!
//! Backend failures never abort a conversion. They are collected as
//! warnings in the [`ConversionReport`]; only a missing input or an
//! unwritable output is fatal.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use edgequake_pdf2txt::{convert_file, ConversionConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let report = convert_file("lab2.pdf", &ConversionConfig::default())?;
//!     for w in &report.warnings {
//!         eprintln!("Warning: {w}");
//!     }
//!     println!("wrote {} ({} bytes)", report.output_path.display(), report.bytes_written);
//!     std::process::exit(report.outcome().exit_code().into());
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature       | Default | Description |
//! |---------------|---------|-------------|
//! | `cli`         | on      | Enables the `pdf2txt` binary (clap + anyhow + tracing-subscriber + indicatif) |
//! | `pdf-extract` | on      | Primary backend |
//! | `pdfium`      | on      | Fallback backend; also needs a libpdfium at runtime (`PDFIUM_LIB_PATH`) |

// ── Modules ──────────────────────────────────────────────────────────────

pub mod backend;
pub mod config;
pub mod convert;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod progress;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use backend::{DocumentExtractor, Extractors, PagedDocument, PagedExtractor};
pub use config::{ConversionConfig, ConversionConfigBuilder};
pub use convert::{convert, convert_file};
pub use error::{ExtractError, PageError, Pdf2TxtError};
pub use output::{ConversionReport, Outcome, PageResult, TextSource};
pub use progress::{ExtractionProgressCallback, NoopProgressCallback, ProgressCallback};
