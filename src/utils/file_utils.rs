/// File handling utilities
///
/// This module loads a word list into a single corpus string and gathers
/// metadata about the input file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::Serialize;
use sha2::{Digest, Sha256};

/// Error raised while loading a corpus file
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Not a regular file: {}", .path.display())]
    NotAFile { path: PathBuf },

    #[error("{} is {size} bytes, above the {limit} byte limit", .path.display())]
    TooLarge { path: PathBuf, size: u64, limit: u64 },

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Details about the file a corpus was loaded from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileMetadata {
    pub file_name: String,
    /// Size on disk in bytes
    pub file_size: u64,
    pub line_count: usize,
    /// Hex encoded SHA-256 of the raw file bytes
    pub sha256: String,
}

/// A loaded corpus and the metadata of its file
#[derive(Debug, Clone)]
pub struct CorpusFile {
    /// Lines joined by single spaces
    pub content: String,
    pub metadata: FileMetadata,
}

/// Join raw file bytes into corpus text.
///
/// Bytes are decoded as UTF-8, replacing invalid sequences. Every line,
/// including the last one, is followed by a single space; a `\r` before the
/// line break is dropped.
///
/// # Arguments
///
/// * `bytes` - Raw file content
///
/// # Returns
///
/// The corpus text and the number of lines read
pub fn join_lines(bytes: &[u8]) -> (String, usize) {
    let text = String::from_utf8_lossy(bytes);
    let mut content = String::with_capacity(text.len() + 1);
    let mut line_count = 0;

    for line in text.split_terminator('\n') {
        content.push_str(line.strip_suffix('\r').unwrap_or(line));
        content.push(' ');
        line_count += 1;
    }

    (content, line_count)
}

/// Read a word list from disk.
///
/// # Arguments
///
/// * `file_path` - Path to the word list
/// * `max_size` - Optional size limit in bytes
///
/// # Returns
///
/// The corpus and its file metadata
pub fn read_corpus(file_path: &Path, max_size: Option<u64>) -> Result<CorpusFile, LoadError> {
    let metadata = fs::metadata(file_path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            LoadError::NotFound {
                path: file_path.to_path_buf(),
            }
        } else {
            LoadError::Io {
                path: file_path.to_path_buf(),
                source: e,
            }
        }
    })?;

    if !metadata.is_file() {
        return Err(LoadError::NotAFile {
            path: file_path.to_path_buf(),
        });
    }

    if let Some(limit) = max_size {
        if metadata.len() > limit {
            return Err(LoadError::TooLarge {
                path: file_path.to_path_buf(),
                size: metadata.len(),
                limit,
            });
        }
    }

    let bytes = fs::read(file_path).map_err(|e| LoadError::Io {
        path: file_path.to_path_buf(),
        source: e,
    })?;

    let (content, line_count) = join_lines(&bytes);
    info!(
        "Loaded {} ({} bytes, {} lines)",
        file_path.display(),
        bytes.len(),
        line_count
    );

    let sha256 = hex::encode(Sha256::digest(&bytes));
    debug!("SHA-256 of {}: {}", file_path.display(), sha256);

    Ok(CorpusFile {
        content,
        metadata: FileMetadata {
            file_name: file_path
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_else(|| "unknown".to_string()),
            file_size: metadata.len(),
            line_count,
            sha256,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_lines_space_separated() {
        let (content, lines) = join_lines(b"alpha\nbeta\r\ngamma");
        assert_eq!(content, "alpha beta gamma ");
        assert_eq!(lines, 3);
    }

    #[test]
    fn test_join_lines_trailing_newline() {
        let (content, lines) = join_lines(b"one\ntwo\n");
        assert_eq!(content, "one two ");
        assert_eq!(lines, 2);
    }

    #[test]
    fn test_join_lines_empty_and_blank() {
        assert_eq!(join_lines(b""), (String::new(), 0));
        assert_eq!(join_lines(b"\n"), (" ".to_string(), 1));
    }

    #[test]
    fn test_join_lines_invalid_utf8() {
        let (content, _) = join_lines(b"ab\xffcd");
        assert_eq!(content, "ab\u{FFFD}cd ");
    }

    #[test]
    fn test_read_corpus_missing_file() {
        let err = read_corpus(Path::new("does/not/exist.txt"), None).unwrap_err();
        assert!(matches!(err, LoadError::NotFound { .. }));
    }

    #[test]
    fn test_read_corpus_size_limit() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("list.txt");
        std::fs::write(&path, "password\n123456\n").expect("Failed to write file");

        let err = read_corpus(&path, Some(4)).unwrap_err();
        assert!(matches!(err, LoadError::TooLarge { size: 16, limit: 4, .. }));

        let corpus = read_corpus(&path, Some(1024)).expect("Failed to read corpus");
        assert_eq!(corpus.content, "password 123456 ");
        assert_eq!(corpus.metadata.file_name, "list.txt");
        assert_eq!(corpus.metadata.file_size, 16);
        assert_eq!(corpus.metadata.line_count, 2);
        assert_eq!(corpus.metadata.sha256.len(), 64);
    }

    #[test]
    fn test_read_corpus_directory() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let err = read_corpus(dir.path(), None).unwrap_err();
        assert!(matches!(err, LoadError::NotAFile { .. }));
    }
}
