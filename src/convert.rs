//! Conversion entry points.
//!
//! [`convert`] runs the whole pipeline against an explicit set of
//! [`Extractors`]; [`convert_file`] probes the compiled-in backends first and
//! is what the `pdf2txt` binary calls.

use crate::backend::Extractors;
use crate::config::ConversionConfig;
use crate::error::Pdf2TxtError;
use crate::output::ConversionReport;
use crate::pipeline::{extract, input, postprocess, write};
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Convert the PDF at `input_path` to text written next to it.
///
/// # Returns
/// `Ok(ConversionReport)` once the output file has been written, even when
/// it is empty (check [`ConversionReport::outcome`]).
///
/// # Errors
/// Returns `Err(Pdf2TxtError)` only for fatal errors:
/// - the input is not an existing regular file (no output is created)
/// - the output file cannot be written
pub fn convert(
    input_path: impl AsRef<Path>,
    extractors: &Extractors,
    config: &ConversionConfig,
) -> Result<ConversionReport, Pdf2TxtError> {
    let total_start = Instant::now();
    let input_path = input_path.as_ref();
    info!("Starting conversion: {}", input_path.display());

    // ── Step 1: Resolve input ────────────────────────────────────────────
    let pdf_path = input::resolve_input(input_path)?;
    let output_path = config.output_path_for(&pdf_path);

    // ── Step 2: Extract ──────────────────────────────────────────────────
    let extraction = extract::extract_text(&pdf_path, extractors, config);

    // ── Step 3: Normalise line endings ───────────────────────────────────
    let text = postprocess::normalise_line_endings(&extraction.text);

    // ── Step 4: Write ────────────────────────────────────────────────────
    let bytes_written = write::write_output(&output_path, &text)?;

    let report = ConversionReport {
        output_path,
        bytes_written,
        source: extraction.source,
        pages: extraction.pages,
        warnings: extraction.warnings,
        duration_ms: total_start.elapsed().as_millis() as u64,
    };

    info!(
        "Conversion complete: {} bytes via {} backend, {}ms total",
        report.bytes_written, report.source, report.duration_ms
    );

    Ok(report)
}

/// Probe the compiled-in backends, then [`convert`].
pub fn convert_file(
    input_path: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<ConversionReport, Pdf2TxtError> {
    let extractors = Extractors::detect();
    convert(input_path, &extractors, config)
}
