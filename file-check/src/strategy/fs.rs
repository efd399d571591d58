//! Filesystem access for check targets.
//!
//! Targets are opened read-only and never modified. Each handle is owned by
//! the caller for the duration of a single target's check.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Open a target file for reading.
///
/// Directories are rejected with `io::ErrorKind::InvalidInput`: on Unix
/// `File::open` succeeds on them but every read fails.
///
/// # Errors
///
/// Returns the underlying I/O error if the path does not exist, cannot be
/// opened, or is not a regular file.
pub fn open_target(path: &Path) -> io::Result<File> {
    let file = File::open(path)?;
    if file.metadata()?.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} is a directory", path.display()),
        ));
    }
    Ok(file)
}

/// Read the remaining content of an open target into memory.
///
/// # Errors
///
/// Returns the underlying I/O error if reading fails.
pub fn read_all(file: &mut File) -> io::Result<Vec<u8>> {
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_open_existing_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"hello\n").unwrap();
        let mut opened = open_target(file.path()).unwrap();
        assert_eq!(read_all(&mut opened).unwrap(), b"hello\n");
    }

    #[test]
    fn test_open_missing_file() {
        let tmp = TempDir::new().unwrap();
        let err = open_target(&tmp.path().join("missing.txt")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_open_directory_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let err = open_target(tmp.path()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
