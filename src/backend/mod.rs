//! Extraction backends and the capability set the converter runs with.
//!
//! The converter never parses PDF bytes itself. It holds up to two optional
//! backends, each either present or absent for the whole process:
//!
//! * a [`DocumentExtractor`] that returns the text of a whole document
//!   (primary, `pdf-extract`),
//! * a [`PagedExtractor`] that opens a document and answers page by page
//!   (fallback, PDFium).
//!
//! [`Extractors::detect`] probes both once at startup. Library users and
//! tests can assemble their own set with [`Extractors::none`] and the
//! `with_*` methods.

#[cfg(feature = "pdf-extract")]
pub mod pdfextract;
#[cfg(feature = "pdfium")]
pub mod pdfium;

use crate::error::ExtractError;
use std::cell::Cell;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use std::sync::Mutex;
use tracing::debug;

/// Backend that extracts the text of a whole document in one call.
pub trait DocumentExtractor: Send + Sync {
    /// Short name used in warnings and progress events.
    fn name(&self) -> &'static str;

    /// Extract the full text content of the PDF at `path`.
    fn extract_text(&self, path: &Path) -> Result<String, ExtractError>;
}

/// Backend that opens a document and extracts each page independently.
pub trait PagedExtractor: Send + Sync {
    /// Short name used in warnings and progress events.
    fn name(&self) -> &'static str;

    /// Open the PDF at `path`.
    fn open<'a>(&'a self, path: &Path) -> Result<Box<dyn PagedDocument + 'a>, ExtractError>;
}

/// An opened document whose pages can be queried one at a time.
pub trait PagedDocument {
    fn page_count(&self) -> usize;

    /// Text of the page at 0-based `index`.
    ///
    /// The error is a human-readable description; the caller turns it into a
    /// [`crate::error::PageError`] with the page number attached.
    fn page_text(&self, index: usize) -> Result<String, String>;
}

/// The extraction capabilities available to this process.
#[derive(Default)]
pub struct Extractors {
    pub primary: Option<Box<dyn DocumentExtractor>>,
    pub fallback: Option<Box<dyn PagedExtractor>>,
}

impl Extractors {
    /// No backends at all. Every conversion writes an empty file.
    pub fn none() -> Self {
        Self::default()
    }

    /// Probe the compiled-in backends once.
    ///
    /// The primary backend is available whenever the `pdf-extract` feature is
    /// compiled in. The fallback is available when the `pdfium` feature is
    /// compiled in *and* a libpdfium shared library can be bound.
    pub fn detect() -> Self {
        let extractors = Self {
            primary: detect_primary(),
            fallback: detect_fallback(),
        };
        debug!("Detected extractors: {:?}", extractors);
        extractors
    }

    pub fn with_primary(mut self, extractor: impl DocumentExtractor + 'static) -> Self {
        self.primary = Some(Box::new(extractor));
        self
    }

    pub fn with_fallback(mut self, extractor: impl PagedExtractor + 'static) -> Self {
        self.fallback = Some(Box::new(extractor));
        self
    }

    pub fn without_primary(mut self) -> Self {
        self.primary = None;
        self
    }

    pub fn without_fallback(mut self) -> Self {
        self.fallback = None;
        self
    }
}

impl fmt::Debug for Extractors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Extractors")
            .field("primary", &self.primary.as_ref().map(|e| e.name()))
            .field("fallback", &self.fallback.as_ref().map(|e| e.name()))
            .finish()
    }
}

/// Best-effort text of a panic payload caught from a backend.
pub(crate) fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "malformed document".to_string()
    }
}

static PANIC_HOOK_LOCK: Mutex<()> = Mutex::new(());

thread_local! {
    static QUIET_DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// Run a backend call, turning a panic into its message.
///
/// The default panic hook is swapped for one that only logs at debug level,
/// so a caught panic reaches the user as a warning and not as a
/// `thread 'main' panicked at ...` line on stderr. Nested calls on the same
/// thread reuse the outer quiet hook.
pub(crate) fn catch_backend_panic<R>(f: impl FnOnce() -> R) -> Result<R, String> {
    if QUIET_DEPTH.with(Cell::get) > 0 {
        return panic::catch_unwind(AssertUnwindSafe(f)).map_err(|p| panic_message(p.as_ref()));
    }

    let _guard = PANIC_HOOK_LOCK
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    let previous = panic::take_hook();
    panic::set_hook(Box::new(|info| debug!("Backend panicked: {}", info)));
    QUIET_DEPTH.with(|d| d.set(d.get() + 1));

    let result = panic::catch_unwind(AssertUnwindSafe(f));

    QUIET_DEPTH.with(|d| d.set(d.get() - 1));
    panic::set_hook(previous);
    result.map_err(|p| panic_message(p.as_ref()))
}

#[cfg(feature = "pdf-extract")]
fn detect_primary() -> Option<Box<dyn DocumentExtractor>> {
    Some(Box::new(pdfextract::PdfExtractBackend))
}

#[cfg(not(feature = "pdf-extract"))]
fn detect_primary() -> Option<Box<dyn DocumentExtractor>> {
    debug!("pdf-extract backend not compiled in");
    None
}

#[cfg(feature = "pdfium")]
fn detect_fallback() -> Option<Box<dyn PagedExtractor>> {
    match pdfium::PdfiumBackend::bind() {
        Ok(backend) => Some(Box::new(backend)),
        Err(e) => {
            debug!("PDFium backend unavailable: {}", e);
            None
        }
    }
}

#[cfg(not(feature = "pdfium"))]
fn detect_fallback() -> Option<Box<dyn PagedExtractor>> {
    debug!("PDFium backend not compiled in");
    None
}
