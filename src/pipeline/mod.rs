//! Pipeline stages for PDF-to-text conversion.
//!
//! Each submodule implements exactly one step, so each is testable on its
//! own and the converter in [`crate::convert`] reads as a straight line.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ extract ──▶ postprocess ──▶ write
//! (path)    (backends)  (line endings)  (<input>.txt)
//! ```
//!
//! 1. [`input`]       — check the user-supplied path names a regular file
//! 2. [`extract`]     — run the primary backend, then the per-page fallback
//!    if no text came back; every backend failure is downgraded to a warning
//! 3. [`postprocess`] — normalise CRLF and bare CR to LF
//! 4. [`write`]       — replace the output file and report its size

pub mod extract;
pub mod input;
pub mod postprocess;
pub mod write;
