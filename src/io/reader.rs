//! File reading utilities with memory mapping support.
//!
//! Reply files handed to the CLI are usually small, but nothing prevents
//! paginating a dump of arbitrary size; large files are memory mapped
//! instead of read into an intermediate buffer twice.

// Memory mapping requires unsafe but is safe for read-only access
#![allow(unsafe_code)]

use crate::error::{IoError, Result};
use memmap2::Mmap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Threshold for using memory mapping (1MB).
const MMAP_THRESHOLD: u64 = 1024 * 1024;

/// Maximum file size to read into memory (64MB).
const MAX_FILE_SIZE: u64 = 64 * 1024 * 1024;

/// File reader with support for memory mapping.
///
/// Automatically chooses the reading strategy based on file size:
/// - Small files (< 1MB): read directly into memory
/// - Large files (>= 1MB): memory mapped
///
/// # Examples
///
/// ```no_run
/// use reply_pager::io::FileReader;
///
/// let reader = FileReader::open("reply.html").unwrap();
/// let content = reader.read_to_string().unwrap();
/// ```
pub struct FileReader {
    /// File handle.
    file: File,
    /// File size in bytes.
    size: u64,
    /// File path for error messages.
    path: String,
}

impl FileReader {
    /// Opens a file for reading.
    ///
    /// # Errors
    ///
    /// Returns an error if the file doesn't exist, can't be opened, or
    /// exceeds the size limit.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        let path_str = path_ref.to_string_lossy().to_string();

        if !path_ref.exists() {
            return Err(IoError::FileNotFound { path: path_str }.into());
        }

        let file = File::open(path_ref).map_err(|e| IoError::ReadFailed {
            path: path_str.clone(),
            reason: e.to_string(),
        })?;

        let metadata = file.metadata().map_err(|e| IoError::ReadFailed {
            path: path_str.clone(),
            reason: e.to_string(),
        })?;

        let size = metadata.len();

        if size > MAX_FILE_SIZE {
            return Err(IoError::ReadFailed {
                path: path_str,
                reason: format!("file too large: {size} bytes (max: {MAX_FILE_SIZE} bytes)"),
            }
            .into());
        }

        Ok(Self {
            file,
            size,
            path: path_str,
        })
    }

    /// Returns the file size in bytes.
    #[must_use]
    pub const fn size(&self) -> u64 {
        self.size
    }

    /// Returns the file path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Reads the file content as a string.
    ///
    /// Uses memory mapping for large files.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or content is not valid UTF-8.
    pub fn read_to_string(&self) -> Result<String> {
        let bytes = if self.size >= MMAP_THRESHOLD {
            self.read_mmap_bytes()?
        } else {
            self.read_direct_bytes()?
        };
        String::from_utf8(bytes).map_err(|e| {
            IoError::ReadFailed {
                path: self.path.clone(),
                reason: format!("invalid UTF-8: {e}"),
            }
            .into()
        })
    }

    /// Reads bytes using memory mapping.
    fn read_mmap_bytes(&self) -> Result<Vec<u8>> {
        // Safety: we only read from the mapped file
        let mmap = unsafe {
            Mmap::map(&self.file).map_err(|e| IoError::MmapFailed {
                path: self.path.clone(),
                reason: e.to_string(),
            })?
        };

        Ok(mmap.to_vec())
    }

    /// Reads bytes directly into memory.
    #[allow(clippy::cast_possible_truncation)]
    fn read_direct_bytes(&self) -> Result<Vec<u8>> {
        let mut file = &self.file;
        let mut buffer = Vec::with_capacity(self.size as usize);
        file.read_to_end(&mut buffer)
            .map_err(|e| IoError::ReadFailed {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;
        Ok(buffer)
    }
}

/// Convenience function to read a file's content as a string.
///
/// # Errors
///
/// Returns an error if the file can't be opened or read.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    FileReader::open(path)?.read_to_string()
}

/// Reads CLI input: a file path, or stdin when `path` is `-`.
///
/// # Errors
///
/// Returns an error if the file or stdin can't be read.
pub fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| IoError::ReadFailed {
                path: "<stdin>".to_string(),
                reason: e.to_string(),
            })?;
        Ok(content)
    } else {
        read_file(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_small_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "reply body").unwrap();

        let reader = FileReader::open(file.path()).unwrap();
        assert_eq!(reader.size(), 10);
        assert_eq!(reader.read_to_string().unwrap(), "reply body");
    }

    #[test]
    fn test_read_file_convenience() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "content").unwrap();
        assert_eq!(read_file(file.path()).unwrap(), "content");
    }

    #[test]
    fn test_missing_file() {
        let result = FileReader::open("/nonexistent/reply.html");
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_utf8() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0xfd]).unwrap();

        let reader = FileReader::open(file.path()).unwrap();
        assert!(reader.read_to_string().is_err());
    }

    #[test]
    fn test_read_input_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "via path").unwrap();
        let path = file.path().to_string_lossy().to_string();
        assert_eq!(read_input(&path).unwrap(), "via path");
    }
}
