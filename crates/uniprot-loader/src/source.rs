//! Input stream handling for plain and gzip-compressed files.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::types::{UniprotError, UniprotResult};

/// Opens an input file for sequential reading.
///
/// Compression is decided purely from a `.gz` suffix on the path, not from
/// content sniffing. Each call returns an independent handle; callers that
/// need to inspect the stream prefix and then parse from the beginning open
/// the file twice.
pub(crate) fn open(path: &Path) -> UniprotResult<Box<dyn BufRead>> {
    if !path.exists() {
        return Err(UniprotError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let file = File::open(path)?;
    if path.extension().and_then(|s| s.to_str()) == Some("gz") {
        // MultiGzDecoder handles concatenated gzip members, which bulk
        // distribution files occasionally contain.
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::{Read, Write};

    #[test]
    fn test_open_plain_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.txt");
        std::fs::write(&path, b"hello").unwrap();

        let mut reader = open(&path).unwrap();
        let mut contents = String::new();
        reader.read_to_string(&mut contents).unwrap();
        assert_eq!(contents, "hello");
    }

    #[test]
    fn test_open_gzip_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.txt.gz");
        let file = File::create(&path).unwrap();
        let mut encoder = GzEncoder::new(file, Compression::default());
        encoder.write_all(b"hello").unwrap();
        encoder.finish().unwrap();

        let mut reader = open(&path).unwrap();
        let mut contents = String::new();
        reader.read_to_string(&mut contents).unwrap();
        assert_eq!(contents, "hello");
    }

    #[test]
    fn test_open_missing_file() {
        let err = open(Path::new("/nonexistent/uniprot_sprot.xml")).err().unwrap();
        assert!(matches!(err, UniprotError::FileNotFound { .. }));
    }
}
