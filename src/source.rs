use crate::detect::{detect_compression, Compression};
use crate::error::{Gtf2BedError, Result};
use bzip2::read::BzDecoder;
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

const READ_BUFFER: usize = 128 * 1024;

/// A non-blank, non-comment input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// 1-based physical line number, comments and blanks included.
    pub number: usize,
    pub text: String,
}

/// Opens `path` for buffered reading, decompressing by suffix.
///
/// # Errors
///
/// Returns `Open` if the file cannot be opened.
///
/// # Example
///
/// ```rust, ignore
/// use gtf2bed::source::{open_input, LineSource};
/// use std::path::Path;
///
/// let reader = open_input(Path::new("genes.gtf.gz"))?;
/// for line in LineSource::new(reader) {
///     println!("{}", line?.text);
/// }
/// ```
pub fn open_input(path: &Path) -> Result<Box<dyn BufRead>> {
    let file = File::open(path).map_err(|source| Gtf2BedError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let compression = detect_compression(path);
    if compression.is_compressed() {
        log::debug!("decompressing {} as {:?}", path.display(), compression);
    }

    let inner: Box<dyn Read> = match compression {
        Compression::Gzip => Box::new(MultiGzDecoder::new(file)),
        Compression::Bzip2 => Box::new(BzDecoder::new(file)),
        Compression::None => Box::new(file),
    };

    Ok(Box::new(BufReader::with_capacity(READ_BUFFER, inner)))
}

/// Lazy, single-pass sequence of annotation lines.
///
/// Empty lines and lines starting with `#` are skipped. Once the reader
/// hits end of stream or fails, the source is exhausted and yields nothing
/// more.
pub struct LineSource<R: BufRead> {
    reader: R,
    buffer: Vec<u8>,
    number: usize,
    exhausted: bool,
}

impl<R: BufRead> LineSource<R> {
    /// Wraps an already opened (and decompressed) reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: Vec::with_capacity(1024),
            number: 0,
            exhausted: false,
        }
    }
}

impl<R: BufRead> Iterator for LineSource<R> {
    type Item = Result<Line>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.exhausted {
            self.buffer.clear();
            match self.reader.read_until(b'\n', &mut self.buffer) {
                Ok(0) => self.exhausted = true,
                Ok(_) => {
                    self.number += 1;
                    let bytes = strip_newline(&self.buffer);
                    if bytes.is_empty() || bytes[0] == b'#' {
                        continue;
                    }
                    return Some(Ok(Line {
                        number: self.number,
                        text: String::from_utf8_lossy(bytes).into_owned(),
                    }));
                }
                Err(err) => {
                    self.exhausted = true;
                    return Some(Err(err.into()));
                }
            }
        }
        None
    }
}

impl<R: BufRead> std::iter::FusedIterator for LineSource<R> {}

#[inline(always)]
fn strip_newline(bytes: &[u8]) -> &[u8] {
    let bytes = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    bytes.strip_suffix(b"\r").unwrap_or(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn collect(input: &str) -> Vec<Line> {
        LineSource::new(Cursor::new(input.as_bytes().to_vec()))
            .collect::<Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn test_skips_comments_and_blanks() {
        let lines = collect("#header\n\nchr1\ta\n##directive\nchr2\tb\n");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text, "chr1\ta");
        assert_eq!(lines[0].number, 3);
        assert_eq!(lines[1].text, "chr2\tb");
        assert_eq!(lines[1].number, 5);
    }

    #[test]
    fn test_crlf_and_missing_final_newline() {
        let lines = collect("chr1\ta\r\n\r\nchr2\tb");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text, "chr1\ta");
        assert_eq!(lines[1].text, "chr2\tb");
    }

    #[test]
    fn test_only_comments() {
        assert!(collect("# nothing\n#\n").is_empty());
    }

    #[test]
    fn test_exhausted_stays_exhausted() {
        let mut source = LineSource::new(Cursor::new(b"chr1\n".to_vec()));
        assert!(source.next().is_some());
        assert!(source.next().is_none());
        assert!(source.next().is_none());
    }

    #[test]
    fn test_open_missing_file() {
        let err = open_input(Path::new("/definitely/not/here.gtf")).err().unwrap();
        assert!(matches!(err, Gtf2BedError::Open { .. }));
    }
}
