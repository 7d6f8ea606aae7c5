//! Opening input files, with transparent gzip/BGZF decompression.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use tracing::debug;

/// Path that selects standard input
pub const STDIN_PATH: &str = "-";

/// Open `path` for buffered reading.
///
/// `-` reads from stdin. Gzip and BGZF input (`.vcf.gz`) is detected from the
/// magic bytes rather than the extension, so misnamed files still work.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or its first bytes cannot be read.
pub fn open_input(path: &Path) -> io::Result<Box<dyn BufRead>> {
    let reader: Box<dyn BufRead> = if path.as_os_str() == STDIN_PATH {
        Box::new(BufReader::new(io::stdin()))
    } else {
        Box::new(BufReader::new(File::open(path)?))
    };

    maybe_decompress(reader)
}

/// Wrap `reader` in a gzip decoder if it starts with the gzip magic bytes.
///
/// # Errors
///
/// Returns an error if peeking at the first bytes fails.
pub fn maybe_decompress<'a>(mut reader: Box<dyn BufRead + 'a>) -> io::Result<Box<dyn BufRead + 'a>> {
    let is_gzip = {
        let buf = reader.fill_buf()?;
        buf.len() >= 2 && buf[0] == 0x1f && buf[1] == 0x8b
    };

    if is_gzip {
        debug!("Detected gzip/BGZF input");
        // BGZF is a series of concatenated gzip members
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(reader))))
    } else {
        Ok(reader)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::{Read, Write};

    fn read_all(mut reader: Box<dyn BufRead + '_>) -> String {
        let mut out = String::new();
        reader.read_to_string(&mut out).unwrap();
        out
    }

    #[test]
    fn test_plain_passthrough() {
        let data = b"##fileformat=VCFv4.3\n".to_vec();
        let reader = maybe_decompress(Box::new(&data[..])).unwrap();
        assert_eq!(read_all(reader), "##fileformat=VCFv4.3\n");
    }

    #[test]
    fn test_gzip_detected() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"hello\n").unwrap();
        let compressed = encoder.finish().unwrap();

        let reader = maybe_decompress(Box::new(&compressed[..])).unwrap();
        assert_eq!(read_all(reader), "hello\n");
    }

    #[test]
    fn test_concatenated_gzip_members() {
        let mut data = Vec::new();
        for part in ["first\n", "second\n"] {
            let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
            encoder.write_all(part.as_bytes()).unwrap();
            data.extend(encoder.finish().unwrap());
        }

        let reader = maybe_decompress(Box::new(&data[..])).unwrap();
        assert_eq!(read_all(reader), "first\nsecond\n");
    }

    #[test]
    fn test_empty_input() {
        let data: Vec<u8> = Vec::new();
        let reader = maybe_decompress(Box::new(&data[..])).unwrap();
        assert_eq!(read_all(reader), "");
    }

    #[test]
    fn test_missing_file() {
        assert!(open_input(Path::new("/nonexistent/file.vcf")).is_err());
    }
}
