//! Output stage: replace the output file's contents with the converted text.
//!
//! The file is opened with truncation and written in place. An existing
//! output keeps its inode and permissions, and a symlinked `<input>.txt` is
//! written through to its target.

use crate::error::Pdf2TxtError;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Write `text` as UTF-8 to `path`, overwriting any existing file.
///
/// Returns the size of the written file as reported by the filesystem.
pub fn write_output(path: &Path, text: &str) -> Result<u64, Pdf2TxtError> {
    let fail = |source| Pdf2TxtError::OutputWriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let mut file = fs::File::create(path).map_err(fail)?;
    file.write_all(text.as_bytes()).map_err(fail)?;
    file.flush().map_err(fail)?;

    let size = file.metadata().map_err(fail)?.len();
    debug!("Wrote {} bytes to {}", size, path.display());
    Ok(size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_utf8_and_reports_size() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("out.txt");
        let size = write_output(&p, "héllo\n").unwrap();
        assert_eq!(size, "héllo\n".len() as u64);
        assert_eq!(fs::read_to_string(&p).unwrap(), "héllo\n");
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("out.txt");
        fs::write(&p, "a much longer previous run\n").unwrap();
        let size = write_output(&p, "new").unwrap();
        assert_eq!(size, 3);
        assert_eq!(fs::read_to_string(&p).unwrap(), "new");
    }

    #[test]
    fn empty_text_yields_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("out.txt");
        assert_eq!(write_output(&p, "").unwrap(), 0);
        assert!(p.exists());
    }

    #[test]
    fn leaves_unrelated_siblings_alone() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("out.txt");
        let sibling = dir.path().join("out.txt.tmp");
        fs::write(&sibling, "keep me").unwrap();
        write_output(&p, "x").unwrap();
        assert_eq!(fs::read_to_string(&sibling).unwrap(), "keep me");
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_output_is_written_through() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("real.txt");
        fs::write(&target, "old contents").unwrap();
        let link = dir.path().join("out.txt");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        write_output(&link, "new").unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(fs::read_to_string(&target).unwrap(), "new");
    }

    #[cfg(unix)]
    #[test]
    fn existing_permissions_are_kept() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("out.txt");
        fs::write(&p, "old").unwrap();
        fs::set_permissions(&p, fs::Permissions::from_mode(0o640)).unwrap();

        write_output(&p, "new").unwrap();

        let mode = fs::metadata(&p).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o640);
    }

    #[test]
    fn missing_parent_is_write_failure() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("no/such/dir/out.txt");
        assert!(matches!(
            write_output(&p, "x"),
            Err(Pdf2TxtError::OutputWriteFailed { .. })
        ));
    }
}
