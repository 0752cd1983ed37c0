//! CLI binary for edgequake-pdf2txt.
//!
//! A thin shim over the library crate: probes the backends, runs one
//! conversion, prints human-readable status lines and maps the result to an
//! exit code (0 written, 1 input missing, 2 written but empty).

use anyhow::{Context, Result};
use clap::Parser;
use edgequake_pdf2txt::error::EXIT_FAILURE;
use edgequake_pdf2txt::{
    convert, ConversionConfig, ConversionReport, ExtractError, ExtractionProgressCallback,
    Extractors, Outcome, ProgressCallback, TextSource,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::{Arc, Mutex};
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn paint(code: &str, s: &str, enabled: bool) -> String {
    if enabled {
        format!("\x1b[{code}m{s}\x1b[0m")
    } else {
        s.to_string()
    }
}

fn green(s: &str, enabled: bool) -> String {
    paint("32", s, enabled)
}
fn red(s: &str, enabled: bool) -> String {
    paint("31", s, enabled)
}
fn yellow(s: &str, enabled: bool) -> String {
    paint("33", s, enabled)
}
fn dim(s: &str, enabled: bool) -> String {
    paint("2", s, enabled)
}

// ── CLI progress callback using indicatif ────────────────────────────────────

/// Terminal progress for the page-by-page fallback. The bar only exists
/// while the fallback backend is walking pages; indicatif hides it when
/// stderr is not a terminal.
struct CliProgressCallback {
    bar: Mutex<Option<ProgressBar>>,
    color: bool,
}

impl CliProgressCallback {
    fn new(color: bool) -> Arc<Self> {
        Arc::new(Self {
            bar: Mutex::new(None),
            color,
        })
    }

    fn with_bar(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(guard) = self.bar.lock() {
            if let Some(ref bar) = *guard {
                f(bar);
            }
        }
    }
}

impl ExtractionProgressCallback for CliProgressCallback {
    fn on_fallback_start(&self, total_pages: usize) {
        let bar = ProgressBar::new(total_pages as u64);
        let style = ProgressStyle::with_template(
            "{spinner:.cyan} {prefix:.bold}  [{bar:42.green/238}] {pos:>3}/{len} pages  {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏  ");
        bar.set_style(style);
        bar.set_prefix("Extracting");
        if let Ok(mut guard) = self.bar.lock() {
            *guard = Some(bar);
        }
    }

    fn on_page_complete(&self, page_num: usize, _total: usize, _chars: usize) {
        self.with_bar(|bar| {
            bar.set_message(format!("page {page_num}"));
            bar.inc(1);
        });
    }

    fn on_page_error(&self, page_num: usize, total: usize, error: &str) {
        let color = self.color;
        self.with_bar(|bar| {
            bar.println(format!(
                "  {} Page {:>3}/{:<3}  {}",
                red("✗", color),
                page_num,
                total,
                dim(error, color),
            ));
            bar.inc(1);
        });
    }

    fn on_extraction_complete(&self, _source: TextSource, _chars: usize) {
        if let Ok(mut guard) = self.bar.lock() {
            if let Some(bar) = guard.take() {
                bar.finish_and_clear();
            }
        }
    }
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Writes /path/to/Distributed_System__Lab_2.pdf.txt
  pdf2txt /path/to/Distributed_System__Lab_2.pdf

EXIT STATUS:
  0  text written
  1  input file not found (no output written)
  2  output written but empty

BACKENDS:
  pdf-extract  primary, whole document at once (compiled in)
  PDFium       fallback, page by page; used only when the primary
               produced no text and a libpdfium can be loaded

ENVIRONMENT VARIABLES:
  PDFIUM_LIB_PATH  Path to libpdfium (file or directory) for the fallback
  RUST_LOG         Log filter, e.g. RUST_LOG=edgequake_pdf2txt=debug

SCANNED PDFS:
  Image-only PDFs have no text layer and produce an empty file. Run OCR
  first, e.g. `ocrmypdf in.pdf out_searchable.pdf`, then convert again.
"#;

/// Convert a PDF to UTF-8 plain text written next to the input file.
#[derive(Parser, Debug)]
#[command(
    name = "pdf2txt",
    version,
    about = "Convert a PDF to UTF-8 plain text (<input>.txt)",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Input PDF file path.
    pdf: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    // Warnings reach the user as plain `Warning:` lines below; library
    // tracing stays quiet unless RUST_LOG asks for it.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn run(cli: &Cli) -> Result<u8> {
    let err_color = io::stderr().is_terminal();
    let out_color = io::stdout().is_terminal();

    let progress = CliProgressCallback::new(err_color);
    let config = ConversionConfig::builder()
        .progress_callback(progress as ProgressCallback)
        .build()
        .context("Invalid configuration")?;

    let extractors = Extractors::detect();

    let report = match convert(&cli.pdf, &extractors, &config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{} {}", red("Error:", err_color), e);
            return Ok(e.exit_code());
        }
    };

    print_warnings(&report, err_color);

    let output = report.output_path.display();
    let code = report.outcome().exit_code();
    match report.outcome() {
        Outcome::Written => {
            println!("{} wrote {}", green("OK:", out_color), output);
        }
        Outcome::Empty => {
            eprintln!(
                "{} output is empty: {}",
                yellow("Done, but", err_color),
                output
            );
        }
    }

    Ok(code)
}

fn print_warnings(report: &ConversionReport, color: bool) {
    let warning = yellow("Warning:", color);

    for w in &report.warnings {
        match w {
            ExtractError::Unavailable { backend } => {
                eprintln!("{warning} {backend} not available; trying fallback.");
            }
            other => eprintln!("{warning} {other}"),
        }
    }

    let failed = report.failed_pages();
    if failed > 0 {
        eprintln!(
            "{warning} {}/{} pages could not be read and were left empty.",
            failed,
            report.pages.len()
        );
    }

    if report.bytes_written == 0 {
        eprintln!("{warning} extracted text is empty. The PDF may be scanned (image-based).");
        eprintln!(
            "Tip: Install OCRmyPDF and run: ocrmypdf <in.pdf> <out_searchable.pdf> then re-run pdf2txt."
        );
    }
}
