//! Fallback backend: per-page text via a dynamically bound libpdfium.
//!
//! The shared library is located once, when [`PdfiumBackend::bind`] runs
//! during capability detection. First match wins:
//!
//! 1. `PDFIUM_LIB_PATH` — a library file, or a directory containing one
//! 2. the platform library name in the current directory
//! 3. the system library search path
//!
//! If nothing binds, the fallback capability is simply absent.

use super::{PagedDocument, PagedExtractor};
use crate::error::ExtractError;
use pdfium_render::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const NAME: &str = "PDFium";

/// Environment variable naming an existing libpdfium (file or directory).
pub const PDFIUM_LIB_PATH_ENV: &str = "PDFIUM_LIB_PATH";

/// [`PagedExtractor`] backed by `pdfium-render`.
pub struct PdfiumBackend {
    pdfium: Pdfium,
}

impl PdfiumBackend {
    /// Locate and bind libpdfium.
    pub fn bind() -> Result<Self, PdfiumError> {
        let bindings = bind_library()?;
        info!("PDFium library bound");
        Ok(Self {
            pdfium: Pdfium::new(bindings),
        })
    }
}

fn bind_library() -> Result<Box<dyn PdfiumLibraryBindings>, PdfiumError> {
    if let Some(path) = library_path_from_env() {
        match Pdfium::bind_to_library(&path) {
            Ok(bindings) => return Ok(bindings),
            Err(e) => debug!(
                "{} set but binding {} failed: {}",
                PDFIUM_LIB_PATH_ENV,
                path.display(),
                e
            ),
        }
    }

    Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
        .or_else(|_| Pdfium::bind_to_system_library())
}

/// Resolve `PDFIUM_LIB_PATH`; a directory is expanded to the platform
/// library file inside it.
fn library_path_from_env() -> Option<PathBuf> {
    let raw = std::env::var_os(PDFIUM_LIB_PATH_ENV)?;
    if raw.is_empty() {
        return None;
    }
    Some(expand_library_path(PathBuf::from(raw)))
}

fn expand_library_path(path: PathBuf) -> PathBuf {
    if path.is_dir() {
        PathBuf::from(Pdfium::pdfium_platform_library_name_at_path(&path))
    } else {
        path
    }
}

impl PagedExtractor for PdfiumBackend {
    fn name(&self) -> &'static str {
        NAME
    }

    fn open<'a>(&'a self, path: &Path) -> Result<Box<dyn PagedDocument + 'a>, ExtractError> {
        let document = self
            .pdfium
            .load_pdf_from_file(path, None)
            .map_err(|e| ExtractError::failed(NAME, e))?;
        debug!(
            "{}: opened {} ({} pages)",
            NAME,
            path.display(),
            document.pages().len()
        );
        Ok(Box::new(PdfiumDocument { document }))
    }
}

struct PdfiumDocument<'a> {
    document: PdfDocument<'a>,
}

impl PagedDocument for PdfiumDocument<'_> {
    fn page_count(&self) -> usize {
        self.document.pages().len() as usize
    }

    fn page_text(&self, index: usize) -> Result<String, String> {
        let page = self
            .document
            .pages()
            .get(index as u16)
            .map_err(|e| e.to_string())?;
        let text = page.text().map_err(|e| e.to_string())?;
        Ok(text.all())
    }
}
