//! Primary backend: whole-document text via the `pdf-extract` crate.
//!
//! `pdf-extract` can panic on malformed input rather than returning an
//! error, so every call runs behind a quiet panic boundary and a panic
//! becomes [`ExtractError::Panicked`].

use super::{catch_backend_panic, DocumentExtractor};
use crate::error::ExtractError;
use std::path::Path;
use tracing::debug;

const NAME: &str = "pdf-extract";

/// [`DocumentExtractor`] backed by `pdf_extract::extract_text`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfExtractBackend;

impl DocumentExtractor for PdfExtractBackend {
    fn name(&self) -> &'static str {
        NAME
    }

    fn extract_text(&self, path: &Path) -> Result<String, ExtractError> {
        debug!("{}: extracting {}", NAME, path.display());
        match catch_backend_panic(|| pdf_extract::extract_text(path)) {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(e)) => Err(ExtractError::failed(NAME, e)),
            Err(detail) => Err(ExtractError::Panicked {
                backend: NAME.to_string(),
                detail,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    /// Minimal single-page PDF showing `text` in Helvetica.
    fn one_page_pdf(text: &str) -> Vec<u8> {
        let content = format!("BT /F1 24 Tf 72 700 Td ({text}) Tj ET");
        let objects = [
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Resources << /Font << /F1 5 0 R >> >> /Contents 4 0 R >>"
                .to_string(),
            format!("<< /Length {} >>\nstream\n{content}\nendstream", content.len()),
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
        ];

        let mut pdf = b"%PDF-1.4\n".to_vec();
        let mut offsets = Vec::with_capacity(objects.len());
        for (i, body) in objects.iter().enumerate() {
            offsets.push(pdf.len());
            pdf.extend_from_slice(format!("{} 0 obj\n{body}\nendobj\n", i + 1).as_bytes());
        }

        let xref = pdf.len();
        pdf.extend_from_slice(
            format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1).as_bytes(),
        );
        for off in offsets {
            pdf.extend_from_slice(format!("{off:010} 00000 n \n").as_bytes());
        }
        pdf.extend_from_slice(
            format!(
                "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref}\n%%EOF\n",
                objects.len() + 1
            )
            .as_bytes(),
        );
        pdf
    }

    #[test]
    fn extracts_text_from_simple_page() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(&one_page_pdf("Lab two results")).unwrap();
        let text = PdfExtractBackend.extract_text(f.path()).unwrap();
        assert!(text.contains("Lab two results"), "got: {text:?}");
    }

    #[test]
    fn garbage_file_is_an_error_not_a_panic() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"not a pdf at all").unwrap();
        let result = PdfExtractBackend.extract_text(f.path());
        assert!(result.is_err());
    }
}
