//! Input resolution: check that a user-supplied path names a regular file.
//!
//! The converter never reads the PDF bytes itself, so there is no magic-byte
//! check here. Anything that exists as a regular file is handed to the
//! backends, which decide for themselves whether they can read it.

use crate::error::Pdf2TxtError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolve `input` to a path naming an existing regular file.
///
/// Symlinks are followed. Directories, dangling links and missing paths all
/// yield [`Pdf2TxtError::FileNotFound`].
pub fn resolve_input(input: impl AsRef<Path>) -> Result<PathBuf, Pdf2TxtError> {
    let path = input.as_ref().to_path_buf();

    match std::fs::metadata(&path) {
        Ok(meta) if meta.is_file() => {
            debug!("Resolved input: {}", path.display());
            Ok(path)
        }
        _ => Err(Pdf2TxtError::FileNotFound { path }),
    }
}
