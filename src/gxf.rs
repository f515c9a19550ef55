mod attr;
pub use attr::*;

use crate::cli::Format;
use crate::error::{Gtf2BedError, Result};

/// Number of fixed, whitespace-separated columns before the attribute field.
pub const FIXED_COLUMNS: usize = 8;

/// One parsed GTF/GFF/GFF3 line, independent of the source dialect.
#[derive(Debug, Clone, PartialEq)]
pub struct GxfRecord {
    /// 1-based line number in the input.
    pub line: usize,
    pub seqname: String,
    pub source: String,
    pub feature: String,
    pub start: i64,
    pub end: i64,
    pub score: String,
    pub strand: Strand,
    pub frame: String,
    pub attributes: Attributes,
}

/// Strand column; anything other than `+` or `-` is unknown.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Strand {
    Forward,
    Reverse,
    Unknown,
}

impl Strand {
    fn from_field(field: &str) -> Self {
        match field.chars().next() {
            Some('+') => Strand::Forward,
            Some('-') => Strand::Reverse,
            _ => Strand::Unknown,
        }
    }
}

impl std::fmt::Display for Strand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Strand::Forward => write!(f, "+"),
            Strand::Reverse => write!(f, "-"),
            Strand::Unknown => write!(f, "."),
        }
    }
}

impl GxfRecord {
    /// 0-based BED start.
    #[inline(always)]
    pub fn bed_start(&self) -> i64 {
        self.start.saturating_sub(1)
    }

    /// Value of attribute `key`, if the record carries it.
    #[inline(always)]
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

/// Line parser bound to one attribute dialect.
///
/// The decoder is picked once when the parser is built, so parsing a line
/// never re-dispatches on the format.
#[derive(Clone, Copy)]
pub struct RecordParser {
    decoder: AttributeDecoder,
}

impl RecordParser {
    /// Builds a parser for `format`.
    ///
    /// # Arguments
    ///
    /// * `format` - Dialect whose attribute grammar every line is decoded with
    ///
    /// # Returns
    ///
    /// Returns a parser holding the matching decoder.
    ///
    /// # Example
    ///
    /// ```rust, ignore
    /// use gtf2bed::gxf::RecordParser;
    /// use gtf2bed::Format;
    ///
    /// let parser = RecordParser::new(Format::Gff3);
    /// ```
    pub fn new(format: Format) -> Self {
        let decoder: AttributeDecoder = match format {
            Format::Gtf => decode_gtf,
            Format::Gff => decode_gff,
            Format::Gff3 => decode_gff3,
        };
        Self { decoder }
    }

    /// Parses a single non-comment line into a [`GxfRecord`].
    ///
    /// The first 8 columns are split on whitespace runs; whatever follows
    /// the 8th column is handed whole to the attribute decoder.
    ///
    /// # Errors
    ///
    /// Returns `MalformedLine` when fewer than 8 columns are present and
    /// `InvalidCoordinate` when start or end is not an integer.
    ///
    /// # Example
    ///
    /// ```rust, ignore
    /// let parser = RecordParser::new(Format::Gtf);
    /// let record = parser.parse(1, "chr1\tsrc\texon\t100\t200\t.\t+\t.\tgene_id \"G1\";")?;
    /// assert_eq!(record.bed_start(), 99);
    /// ```
    pub fn parse(&self, line: usize, text: &str) -> Result<GxfRecord> {
        let mut columns = [""; FIXED_COLUMNS];
        let mut rest = text;

        for (found, column) in columns.iter_mut().enumerate() {
            let (field, tail) =
                next_field(rest).ok_or(Gtf2BedError::MalformedLine { line, found })?;
            *column = field;
            rest = tail;
        }

        let [seqname, source, feature, start, end, score, strand, frame] = columns;

        let mut attributes = Attributes::new();
        (self.decoder)(rest, &mut attributes);

        Ok(GxfRecord {
            line,
            seqname: seqname.to_string(),
            source: source.to_string(),
            feature: feature.to_string(),
            start: parse_coordinate(line, "start", start)?,
            end: parse_coordinate(line, "end", end)?,
            score: score.to_string(),
            strand: Strand::from_field(strand),
            frame: frame.to_string(),
            attributes,
        })
    }
}

/// Splits off the next whitespace-delimited field, returning it and the
/// remainder (which still starts with its delimiter).
#[inline(always)]
fn next_field(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start_matches(is_blank);
    if s.is_empty() {
        return None;
    }
    let end = s.find(is_blank).unwrap_or(s.len());
    Some(s.split_at(end))
}

fn parse_coordinate(line: usize, field: &'static str, value: &str) -> Result<i64> {
    value
        .parse::<i64>()
        .map_err(|_| Gtf2BedError::InvalidCoordinate {
            line,
            field,
            value: value.to_string(),
        })
}
