use crate::error::{Gtf2BedError, Result};
use crate::gxf::GxfRecord;
use std::io::Write;

/// Fixed leading columns of the header line.
pub const HEADER: [&str; 6] = ["#chr", "start", "end", "id", "info", "strand"];

/// Attribute used as the BED name column.
pub const ID_ATTRIBUTE: &str = "gene_id";

/// Placeholder for attributes a record does not carry.
pub const MISSING: &str = ".";

/// Writes the header line: fixed columns followed by `keys`.
pub fn write_header<W: Write>(writer: &mut W, keys: &[String]) -> Result<()> {
    writer.write_all(HEADER.join("\t").as_bytes())?;
    for key in keys {
        writer.write_all(b"\t")?;
        writer.write_all(key.as_bytes())?;
    }
    writer.write_all(b"\n")?;
    Ok(())
}

/// Writes one record as a BED row.
///
/// Columns are seqname, `start - 1`, end, `gene_id`, feature type, score,
/// then one value per key (or `.` when absent). Values are written as-is.
///
/// # Errors
///
/// Returns `MissingAttribute` if the record has no `gene_id`.
pub fn write_record<W: Write>(writer: &mut W, record: &GxfRecord, keys: &[String]) -> Result<()> {
    let id = record
        .attribute(ID_ATTRIBUTE)
        .ok_or_else(|| Gtf2BedError::MissingAttribute {
            line: record.line,
            key: ID_ATTRIBUTE,
            seqname: record.seqname.clone(),
            feature: record.feature.clone(),
        })?;

    write!(
        writer,
        "{}\t{}\t{}\t{}\t{}\t{}",
        record.seqname,
        record.bed_start(),
        record.end,
        id,
        record.feature,
        record.score
    )?;

    for key in keys {
        writer.write_all(b"\t")?;
        let value = record.attribute(key).unwrap_or(MISSING);
        writer.write_all(value.as_bytes())?;
    }
    writer.write_all(b"\n")?;
    Ok(())
}

/// Writes the header and every record, in order.
///
/// # Example
///
/// ```rust, ignore
/// let keys = collection.sorted_keys();
/// let mut out = Vec::new();
/// write_bed(&mut out, &collection.records, &keys)?;
/// ```
pub fn write_bed<W: Write>(writer: &mut W, records: &[GxfRecord], keys: &[String]) -> Result<()> {
    write_header(writer, keys)?;
    for record in records {
        write_record(writer, record, keys)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gxf::{Attributes, Strand};

    fn record(attributes: &[(&str, &str)]) -> GxfRecord {
        GxfRecord {
            line: 4,
            seqname: "chr1".to_string(),
            source: "src".to_string(),
            feature: "exon".to_string(),
            start: 100,
            end: 200,
            score: "1000".to_string(),
            strand: Strand::Forward,
            frame: ".".to_string(),
            attributes: attributes
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<Attributes>(),
        }
    }

    fn keys(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_write_bed_fills_missing_with_dot() {
        let records = vec![record(&[
            ("gene_id", "gene1"),
            ("transcript_id", "tx1"),
            ("gene_name", "GeneName1"),
        ])];
        let keys = keys(&["transcript_id", "gene_name", "missing_key"]);

        let mut out = Vec::new();
        write_bed(&mut out, &records, &keys).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "#chr\tstart\tend\tid\tinfo\tstrand\ttranscript_id\tgene_name\tmissing_key\n\
             chr1\t99\t200\tgene1\texon\t1000\ttx1\tGeneName1\t.\n"
        );
    }

    #[test]
    fn test_header_without_keys() {
        let mut out = Vec::new();
        write_header(&mut out, &[]).unwrap();
        assert_eq!(out, b"#chr\tstart\tend\tid\tinfo\tstrand\n");
    }

    #[test]
    fn test_missing_gene_id() {
        let mut out = Vec::new();
        let err = write_record(&mut out, &record(&[("ID", "x")]), &[]).unwrap_err();
        match err {
            Gtf2BedError::MissingAttribute {
                line,
                key,
                seqname,
                feature,
            } => {
                assert_eq!(line, 4);
                assert_eq!(key, "gene_id");
                assert_eq!(seqname, "chr1");
                assert_eq!(feature, "exon");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
