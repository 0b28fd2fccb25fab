//! File-backed line I/O
//!
//! The persistence collaborator: path validation, directory creation, and
//! whole-file line reads and writes. Everything about the text format itself
//! lives in [`crate::codec`].

use std::fs::{self, File};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use crate::error::{Error, Result};

/// Reject any path whose extension is not `.txt`.
fn check_extension(path: &Path) -> Result<()> {
    if path.extension().and_then(|ext| ext.to_str()) != Some("txt") {
        return Err(Error::InvalidExtension(path.to_path_buf()));
    }
    Ok(())
}

/// Read all lines of a `.txt` file, without line terminators.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    check_extension(path)?;
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let lines = reader.lines().collect::<std::io::Result<Vec<String>>>()?;
    Ok(lines)
}

/// Write lines verbatim to a `.txt` file.
///
/// Parent directories are created if absent; an existing file is replaced.
pub fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    check_extension(path)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut file = File::create(path)?;
    for line in lines {
        file.write_all(line.as_bytes())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_rejects_non_txt_extension() {
        let err = read_lines(Path::new("data.csv")).unwrap_err();
        assert!(matches!(err, Error::InvalidExtension(_)));

        let err = write_lines(Path::new("data"), &[]).unwrap_err();
        assert!(matches!(err, Error::InvalidExtension(_)));
    }

    #[test]
    fn test_writes_and_reads_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.txt");
        write_lines(&path, &["a;b\n".to_string(), "1;2\n".to_string()]).unwrap();
        assert_eq!(read_lines(&path).unwrap(), vec!["a;b", "1;2"]);
    }

    #[test]
    fn test_creates_missing_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("deep").join("out.txt");
        write_lines(&path, &["x\n".to_string()]).unwrap();
        assert!(path.is_file());
    }

    #[test]
    fn test_missing_file_surfaces_io_error() {
        let dir = tempdir().unwrap();
        let err = read_lines(&dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
