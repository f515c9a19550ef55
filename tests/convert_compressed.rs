use bzip2::write::BzEncoder;
use flate2::write::GzEncoder;
use flate2::Compression as GzCompression;
use gtf2bed::collect::FeatureFilter;
use gtf2bed::{run, Config, Format, Reporter};
use indoc::indoc;
use std::io::Write;
use std::path::{Path, PathBuf};

const GTF: &str = indoc! {"
    #!genome-build test
    chr1\tsrc\ttranscript\t100\t200\t.\t+\t.\tgene_id \"g1\"; transcript_id \"tx1\";
    chr1\tsrc\texon\t100\t150\t.\t+\t.\tgene_id \"g1\"; transcript_id \"tx1\"; exon_number \"1\";
"};

const EXPECTED: &str = "#chr\tstart\tend\tid\tinfo\tstrand\texon_number\tgene_id\ttranscript_id\n\
                        chr1\t99\t200\tg1\ttranscript\t.\t.\tg1\ttx1\n\
                        chr1\t99\t150\tg1\texon\t.\t1\tg1\ttx1\n";

/// Writes gz-compressed contents to a file and returns its path.
fn write_gzip_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let mut encoder = GzEncoder::new(Vec::new(), GzCompression::default());
    encoder.write_all(contents.as_bytes()).unwrap();
    let gz = encoder.finish().unwrap();

    let path = dir.join(name);
    std::fs::write(&path, gz).unwrap();
    path
}

/// Writes bzip2-compressed contents to a file and returns its path.
fn write_bzip2_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let mut encoder = BzEncoder::new(Vec::new(), bzip2::Compression::default());
    encoder.write_all(contents.as_bytes()).unwrap();
    let bz = encoder.finish().unwrap();

    let path = dir.join(name);
    std::fs::write(&path, bz).unwrap();
    path
}

fn convert(input: PathBuf, output: &Path) -> String {
    let config = Config {
        input,
        output: output.to_path_buf(),
        format: Format::Gtf,
        feature_types: FeatureFilter::default(),
        log: None,
        silent: true,
    };
    run(&config, &mut Reporter::quiet()).unwrap();
    std::fs::read_to_string(output).unwrap()
}

/// Converts a gzipped GTF.
#[test]
fn convert_gzipped_gtf() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = write_gzip_file(dir.path(), "input.gtf.gz", GTF);
    let output = convert(input_path, &dir.path().join("output.bed"));
    assert_eq!(output, EXPECTED);
}

/// Converts a bzip2-compressed GTF.
#[test]
fn convert_bzipped_gtf() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = write_bzip2_file(dir.path(), "input.gtf.bz2", GTF);
    let output = convert(input_path, &dir.path().join("output.bed"));
    assert_eq!(output, EXPECTED);
}

/// Plain text is read as-is regardless of the extension.
#[test]
fn convert_plain_with_unknown_extension() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("input.txt");
    std::fs::write(&input_path, GTF).unwrap();
    let output = convert(input_path, &dir.path().join("output.bed"));
    assert_eq!(output, EXPECTED);
}
