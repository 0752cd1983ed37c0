//! Progress-callback trait for extraction events.
//!
//! Inject an [`Arc<dyn ExtractionProgressCallback>`] via
//! [`crate::config::ConversionConfigBuilder::progress_callback`] to receive
//! events as the converter tries each backend and, on the fallback path,
//! walks the document page by page.
//!
//! # Example
//!
//! ```rust
//! use edgequake_pdf2txt::{ConversionConfig, ExtractionProgressCallback};
//! use std::sync::{Arc, atomic::{AtomicUsize, Ordering}};
//!
//! struct CountingCallback {
//!     pages: AtomicUsize,
//! }
//!
//! impl ExtractionProgressCallback for CountingCallback {
//!     fn on_page_complete(&self, page_num: usize, total_pages: usize, chars: usize) {
//!         self.pages.fetch_add(1, Ordering::SeqCst);
//!         eprintln!("Page {}/{} done ({} chars)", page_num, total_pages, chars);
//!     }
//! }
//!
//! let counter = Arc::new(CountingCallback { pages: AtomicUsize::new(0) });
//!
//! let config = ConversionConfig::builder()
//!     .progress_callback(counter as Arc<dyn ExtractionProgressCallback>)
//!     .build()
//!     .unwrap();
//! ```

use crate::output::TextSource;
use std::sync::Arc;

/// Called by the converter as it runs each extraction backend.
///
/// All methods have default no-op implementations so callers only override
/// what they care about. Events are delivered on the converting thread, in
/// order.
pub trait ExtractionProgressCallback: Send + Sync {
    /// Called before a backend is asked for text.
    ///
    /// # Arguments
    /// * `backend` — short backend name, e.g. `"pdf-extract"`
    fn on_strategy_start(&self, backend: &str) {
        let _ = backend;
    }

    /// Called once the fallback backend has opened the document.
    ///
    /// # Arguments
    /// * `total_pages` — number of pages that will be visited
    fn on_fallback_start(&self, total_pages: usize) {
        let _ = total_pages;
    }

    /// Called when a page's text was read.
    ///
    /// # Arguments
    /// * `page_num`    — 1-indexed page number
    /// * `total_pages` — total pages
    /// * `chars`       — character count of the page text
    fn on_page_complete(&self, page_num: usize, total_pages: usize, chars: usize) {
        let _ = (page_num, total_pages, chars);
    }

    /// Called when a page failed; it contributes an empty segment.
    fn on_page_error(&self, page_num: usize, total_pages: usize, error: &str) {
        let _ = (page_num, total_pages, error);
    }

    /// Called once after extraction, before normalisation and writing.
    ///
    /// # Arguments
    /// * `source` — which backend supplied the text
    /// * `chars`  — character count of the extracted text
    fn on_extraction_complete(&self, source: TextSource, chars: usize) {
        let _ = (source, chars);
    }
}

/// A no-op implementation for callers that don't need progress events.
pub struct NoopProgressCallback;

impl ExtractionProgressCallback for NoopProgressCallback {}

/// Convenience alias matching the type stored in [`crate::config::ConversionConfig`].
pub type ProgressCallback = Arc<dyn ExtractionProgressCallback>;
