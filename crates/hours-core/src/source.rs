//! Where an export is read from.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::PathBuf;

use crate::error::ParseError;

/// An export document, either on disk or an already open stream.
pub enum InputSource {
    /// Path to an existing regular file.
    Path(PathBuf),
    /// Any readable byte stream (e.g. stdin).
    Reader(Box<dyn Read>),
}

impl fmt::Debug for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => f.debug_tuple("Path").field(path).finish(),
            Self::Reader(_) => f.write_str("Reader(..)"),
        }
    }
}

impl InputSource {
    pub fn path(path: impl Into<PathBuf>) -> Self {
        Self::Path(path.into())
    }

    pub fn reader(reader: impl Read + 'static) -> Self {
        Self::Reader(Box::new(reader))
    }

    /// Human-readable name used in error messages.
    pub fn origin(&self) -> String {
        match self {
            Self::Path(path) => path.display().to_string(),
            Self::Reader(_) => "<stream>".to_string(),
        }
    }

    /// Resolves the source to a buffered reader without consuming any content.
    pub fn open(self) -> Result<Box<dyn BufRead>, ParseError> {
        let origin = self.origin();
        match self {
            Self::Path(path) => {
                let access = |source: io::Error| ParseError::Access {
                    origin: origin.clone(),
                    source,
                };
                let metadata = std::fs::metadata(&path).map_err(access)?;
                if !metadata.is_file() {
                    return Err(access(io::Error::new(
                        io::ErrorKind::InvalidInput,
                        "not a regular file",
                    )));
                }
                let file = File::open(&path).map_err(access)?;
                Ok(Box::new(BufReader::new(file)))
            }
            Self::Reader(reader) => Ok(Box::new(BufReader::new(reader))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_path_is_access_error() {
        let temp = tempfile::tempdir().unwrap();
        let source = InputSource::path(temp.path().join("does_not_exist.txt"));
        let err = source.open().err().unwrap();
        assert!(matches!(err, ParseError::Access { .. }), "{err}");
    }

    #[test]
    fn directory_is_access_error() {
        let temp = tempfile::tempdir().unwrap();
        let err = InputSource::path(temp.path()).open().err().unwrap();
        let ParseError::Access { source, .. } = err else {
            panic!("expected access error, got {err}");
        };
        assert_eq!(source.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn stream_is_passed_through() {
        let mut reader = InputSource::reader(io::Cursor::new("a\nb\n")).open().unwrap();
        let mut first = String::new();
        reader.read_line(&mut first).unwrap();
        assert_eq!(first, "a\n");
    }
}
