//! Extraction stage: ask the backends for text in priority order.
//!
//! The policy is "first non-empty wins":
//!
//! 1. If a primary backend is present, call it once. An error or panic is
//!    recorded as a warning and counts as no text.
//! 2. Only if that left the text empty, and a fallback backend is present,
//!    open the document with the fallback and read it page by page. A page
//!    that fails contributes an empty segment at its position; the document
//!    as a whole still succeeds.
//! 3. If both come back empty (or are absent) the result is the empty string.
//!
//! A short but non-empty primary result suppresses the fallback entirely.

use crate::backend::{catch_backend_panic, DocumentExtractor, Extractors, PagedExtractor};
use crate::config::ConversionConfig;
use crate::error::{ExtractError, PageError};
use crate::output::{PageResult, TextSource};
use std::path::Path;
use tracing::{debug, info, warn};

/// Text produced by the extraction stage and everything that went wrong.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub text: String,
    pub source: TextSource,
    pub pages: Vec<PageResult>,
    pub warnings: Vec<ExtractError>,
}

/// Run the available backends against `path` in priority order.
///
/// Never fails: every backend error is downgraded into
/// [`Extraction::warnings`].
pub fn extract_text(path: &Path, extractors: &Extractors, config: &ConversionConfig) -> Extraction {
    let mut warnings = Vec::new();
    let mut pages = Vec::new();
    let mut text = String::new();
    let mut source = TextSource::None;

    match extractors.primary.as_deref() {
        Some(primary) => match run_primary(primary, path, config) {
            Ok(t) => {
                if !t.is_empty() {
                    source = TextSource::Primary;
                }
                text = t;
            }
            Err(e) => {
                warn!("Primary extraction failed: {}", e);
                warnings.push(e);
            }
        },
        None => {
            let e = ExtractError::Unavailable {
                backend: "primary extractor".to_string(),
            };
            warn!("{}; trying fallback", e);
            warnings.push(e);
        }
    }

    if text.is_empty() {
        if let Some(fallback) = extractors.fallback.as_deref() {
            match run_fallback(fallback, path, config) {
                Ok((t, page_results)) => {
                    if !t.is_empty() {
                        source = TextSource::Fallback;
                    }
                    text = t;
                    pages = page_results;
                }
                Err(e) => {
                    warn!("Fallback extraction failed: {}", e);
                    warnings.push(e);
                }
            }
        } else {
            debug!("No fallback extractor available");
        }
    }

    if text.is_empty() {
        warn!("Extracted text is empty");
    } else {
        info!("Extracted {} chars via {} backend", text.chars().count(), source);
    }

    if let Some(ref cb) = config.progress_callback {
        cb.on_extraction_complete(source, text.chars().count());
    }

    Extraction {
        text,
        source,
        pages,
        warnings,
    }
}

fn run_primary(
    primary: &dyn DocumentExtractor,
    path: &Path,
    config: &ConversionConfig,
) -> Result<String, ExtractError> {
    if let Some(ref cb) = config.progress_callback {
        cb.on_strategy_start(primary.name());
    }
    debug!("Trying primary extractor: {}", primary.name());
    catch_backend_panic(|| primary.extract_text(path)).unwrap_or_else(|detail| {
        Err(ExtractError::Panicked {
            backend: primary.name().to_string(),
            detail,
        })
    })
}

/// Open the document with the fallback and fold its pages into one string.
fn run_fallback(
    fallback: &dyn PagedExtractor,
    path: &Path,
    config: &ConversionConfig,
) -> Result<(String, Vec<PageResult>), ExtractError> {
    let name = fallback.name();
    if let Some(ref cb) = config.progress_callback {
        cb.on_strategy_start(name);
    }
    debug!("Trying fallback extractor: {}", name);

    let document = match catch_backend_panic(|| fallback.open(path)) {
        Ok(result) => result?,
        Err(detail) => {
            return Err(ExtractError::Panicked {
                backend: name.to_string(),
                detail,
            })
        }
    };

    let total = document.page_count();
    if let Some(ref cb) = config.progress_callback {
        cb.on_fallback_start(total);
    }

    let mut segments = Vec::with_capacity(total);
    let mut results = Vec::with_capacity(total);

    for index in 0..total {
        let page_num = index + 1;
        let outcome = catch_backend_panic(|| document.page_text(index)).unwrap_or_else(Err);

        match outcome {
            Ok(page_text) => {
                let chars = page_text.chars().count();
                debug!("{}: page {}/{} → {} chars", name, page_num, total, chars);
                if let Some(ref cb) = config.progress_callback {
                    cb.on_page_complete(page_num, total, chars);
                }
                segments.push(page_text);
                results.push(PageResult {
                    page_num,
                    chars,
                    error: None,
                });
            }
            Err(detail) => {
                let error = PageError::PageFailed {
                    page: page_num,
                    detail,
                };
                warn!("{}: {}", name, error);
                if let Some(ref cb) = config.progress_callback {
                    cb.on_page_error(page_num, total, &error.to_string());
                }
                segments.push(String::new());
                results.push(PageResult {
                    page_num,
                    chars: 0,
                    error: Some(error),
                });
            }
        }
    }

    Ok((segments.join(&config.page_separator), results))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::PagedDocument;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct Primary(Result<String, ExtractError>);

    impl DocumentExtractor for Primary {
        fn name(&self) -> &'static str {
            "stub-primary"
        }

        fn extract_text(&self, _path: &Path) -> Result<String, ExtractError> {
            self.0.clone()
        }
    }

    /// Pages are `Ok(text)` or `Err(detail)`; `None` pages panic.
    struct Paged {
        pages: Vec<Option<Result<String, String>>>,
        opens: Arc<AtomicUsize>,
    }

    struct PagedDoc<'a>(&'a [Option<Result<String, String>>]);

    impl PagedDocument for PagedDoc<'_> {
        fn page_count(&self) -> usize {
            self.0.len()
        }

        fn page_text(&self, index: usize) -> Result<String, String> {
            match &self.0[index] {
                Some(r) => r.clone(),
                None => panic!("page {index} exploded"),
            }
        }
    }

    impl PagedExtractor for Paged {
        fn name(&self) -> &'static str {
            "stub-paged"
        }

        fn open<'a>(
            &'a self,
            _path: &Path,
        ) -> Result<Box<dyn PagedDocument + 'a>, ExtractError> {
            self.opens.fetch_add(1, Ordering::SeqCst);
            Ok(Box::new(PagedDoc(&self.pages)))
        }
    }

    fn paged(pages: Vec<Option<Result<String, String>>>) -> (Paged, Arc<AtomicUsize>) {
        let opens = Arc::new(AtomicUsize::new(0));
        (
            Paged {
                pages,
                opens: Arc::clone(&opens),
            },
            opens,
        )
    }

    fn path() -> PathBuf {
        PathBuf::from("doc.pdf")
    }

    #[test]
    fn primary_text_suppresses_fallback() {
        let (fb, opens) = paged(vec![Some(Ok("fallback".into()))]);
        let ex = Extractors::none()
            .with_primary(Primary(Ok("primary".into())))
            .with_fallback(fb);

        let out = extract_text(&path(), &ex, &ConversionConfig::default());
        assert_eq!(out.text, "primary");
        assert_eq!(out.source, TextSource::Primary);
        assert_eq!(opens.load(Ordering::SeqCst), 0);
        assert!(out.warnings.is_empty());
    }

    #[test]
    fn short_primary_text_still_wins() {
        let (fb, opens) = paged(vec![Some(Ok("a much better fallback".into()))]);
        let ex = Extractors::none()
            .with_primary(Primary(Ok("x".into())))
            .with_fallback(fb);

        let out = extract_text(&path(), &ex, &ConversionConfig::default());
        assert_eq!(out.text, "x");
        assert_eq!(opens.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn primary_error_falls_back_with_warning() {
        let (fb, _) = paged(vec![Some(Ok("p1".into())), Some(Ok("p2".into()))]);
        let ex = Extractors::none()
            .with_primary(Primary(Err(ExtractError::failed("stub-primary", "boom"))))
            .with_fallback(fb);

        let out = extract_text(&path(), &ex, &ConversionConfig::default());
        assert_eq!(out.text, "p1\np2");
        assert_eq!(out.source, TextSource::Fallback);
        assert_eq!(out.warnings.len(), 1);
    }

    #[test]
    fn empty_primary_falls_back_without_warning() {
        let (fb, opens) = paged(vec![Some(Ok("only page".into()))]);
        let ex = Extractors::none()
            .with_primary(Primary(Ok(String::new())))
            .with_fallback(fb);

        let out = extract_text(&path(), &ex, &ConversionConfig::default());
        assert_eq!(out.text, "only page");
        assert_eq!(opens.load(Ordering::SeqCst), 1);
        assert!(out.warnings.is_empty());
    }

    #[test]
    fn failing_pages_keep_their_position() {
        let (fb, _) = paged(vec![
            Some(Ok("one".into())),
            Some(Err("bad glyphs".into())),
            None,
            Some(Ok("four".into())),
        ]);
        let ex = Extractors::none().with_fallback(fb);

        let out = extract_text(&path(), &ex, &ConversionConfig::default());
        assert_eq!(out.text, "one\n\n\nfour");
        assert_eq!(out.pages.len(), 4);
        assert!(out.pages[1].error.is_some());
        assert!(out.pages[2].error.is_some());
        assert_eq!(out.pages[3].chars, 4);
        assert_eq!(out.source, TextSource::Fallback);
    }

    #[test]
    fn all_pages_failing_leaves_only_separators() {
        let (fb, _) = paged(vec![Some(Err("x".into())), Some(Err("y".into()))]);
        let ex = Extractors::none().with_fallback(fb);

        let out = extract_text(&path(), &ex, &ConversionConfig::default());
        // Two empty segments joined by one separator.
        assert_eq!(out.text, "\n");
        assert_eq!(out.source, TextSource::Fallback);
    }

    #[test]
    fn zero_pages_is_empty() {
        let (fb, _) = paged(vec![]);
        let ex = Extractors::none().with_fallback(fb);

        let out = extract_text(&path(), &ex, &ConversionConfig::default());
        assert_eq!(out.text, "");
        assert_eq!(out.source, TextSource::None);
    }

    #[test]
    fn no_backends_is_empty_with_unavailable_warning() {
        let out = extract_text(&path(), &Extractors::none(), &ConversionConfig::default());
        assert_eq!(out.text, "");
        assert_eq!(out.source, TextSource::None);
        assert!(matches!(
            out.warnings.as_slice(),
            [ExtractError::Unavailable { .. }]
        ));
    }

    struct Exploding;

    impl DocumentExtractor for Exploding {
        fn name(&self) -> &'static str {
            "exploding"
        }

        fn extract_text(&self, _path: &Path) -> Result<String, ExtractError> {
            panic!("bad xref")
        }
    }

    #[test]
    fn primary_panic_becomes_warning() {
        let ex = Extractors::none().with_primary(Exploding);
        let out = extract_text(&path(), &ex, &ConversionConfig::default());
        assert_eq!(out.text, "");
        assert_eq!(
            out.warnings,
            vec![ExtractError::Panicked {
                backend: "exploding".into(),
                detail: "bad xref".into(),
            }]
        );
    }

    #[test]
    fn custom_page_separator() {
        let (fb, _) = paged(vec![Some(Ok("a".into())), Some(Ok("b".into()))]);
        let ex = Extractors::none().with_fallback(fb);
        let config = ConversionConfig::builder()
            .page_separator("\u{c}")
            .build()
            .unwrap();

        let out = extract_text(&path(), &ex, &config);
        assert_eq!(out.text, "a\u{c}b");
    }
}
