use crate::bed::write_bed;
use crate::cli::Format;
use crate::collect::{collect, Collection, FeatureFilter};
use crate::config::Config;
use crate::error::{Gtf2BedError, Result};
use crate::gxf::{GxfRecord, RecordParser};
use crate::memory::max_mem_usage_mb;
use crate::report::Reporter;
use crate::source::{open_input, LineSource};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};

/// Summary statistics for a conversion run.
#[derive(Debug, Clone, Copy)]
pub struct RunStats {
    /// Wall clock time spent in the conversion.
    pub elapsed: Duration,
    /// Delta in maximum RSS memory usage, in MB.
    pub mem_delta_mb: f64,
    /// Number of records written.
    pub records: usize,
    /// Number of attribute columns written.
    pub attribute_keys: usize,
}

/// Runs a conversion with the provided configuration.
///
/// Reads the whole input, validates the requested feature types, sorts the
/// attribute keys and writes the BED file. Output goes to a temporary file
/// next to the destination and is moved into place only when complete, so
/// a failed run leaves nothing behind.
///
/// # Errors
///
/// Returns the first I/O, format or validation error encountered.
///
/// # Example
///
/// ```rust, ignore
/// use gtf2bed::{run, Config, Format, Reporter};
/// use gtf2bed::collect::FeatureFilter;
/// use std::path::PathBuf;
///
/// let config = Config {
///     input: PathBuf::from("input.gtf"),
///     output: PathBuf::from("output.bed"),
///     format: Format::Gtf,
///     feature_types: FeatureFilter::default(),
///     log: None,
///     silent: false,
/// };
/// let stats = run(&config, &mut Reporter::quiet())?;
/// println!("Conversion took: {:?}", stats.elapsed);
/// ```
pub fn run(config: &Config, reporter: &mut Reporter) -> Result<RunStats> {
    let start = Instant::now();
    let start_mem = max_mem_usage_mb();

    reporter.title("CONVERT GTF TO BED");
    reporter.bullet(&format!(
        "Reading {} as {}",
        config.input.display(),
        config.format
    ));

    let collection = read_input(&config.input, config.format, &config.feature_types, reporter)?;
    let keys = collection.sorted_keys();
    if collection.is_empty() {
        reporter.warning(&format!(
            "no records found in {}; writing header only",
            config.input.display()
        ));
    }

    reporter.bullet(&format!(
        "Writing {} records with {} attribute columns to {}",
        collection.len(),
        keys.len(),
        config.output.display()
    ));
    write_output(&config.output, &collection.records, &keys)?;

    let elapsed = start.elapsed();
    let mem_delta = (max_mem_usage_mb() - start_mem).max(0.0);

    Ok(RunStats {
        elapsed,
        mem_delta_mb: mem_delta,
        records: collection.len(),
        attribute_keys: keys.len(),
    })
}

/// Parses every line of `path` and collects the records.
///
/// The attribute decoder is fixed here, once, for the whole stream.
pub fn read_input(
    path: &Path,
    format: Format,
    filter: &FeatureFilter,
    reporter: &mut Reporter,
) -> Result<Collection> {
    let parser = RecordParser::new(format);
    let records = LineSource::new(open_input(path)?)
        .map(|line| line.and_then(|line| parser.parse(line.number, &line.text)));

    collect(records, filter, reporter)
}

/// Writes the BED file.
///
/// Regular (or not yet existing) destinations are written atomically: rows
/// are rendered into a temporary file in the destination directory, which
/// replaces `path` only after the last row is flushed. The temporary file
/// takes the destination's permissions, or the umask-filtered default for
/// new files. Other destinations (devices, FIFOs) are written in place once
/// every row has rendered.
///
/// # Arguments
///
/// * `path` - Output BED path
/// * `records` - Records in input order
/// * `keys` - Sorted attribute keys
///
/// # Errors
///
/// Returns `Create` if the destination cannot be written and
/// `MissingAttribute` if a record cannot be rendered.
fn write_output(path: &Path, records: &[GxfRecord], keys: &[String]) -> Result<()> {
    let create_err = |source: std::io::Error| Gtf2BedError::Create {
        path: path.to_path_buf(),
        source,
    };

    let existing = std::fs::metadata(path).ok();
    if let Some(meta) = existing.as_ref().filter(|meta| !meta.is_file()) {
        log::debug!("{} is not a regular file ({:?})", path.display(), meta.file_type());
        let mut buffer = Vec::with_capacity(records.len().saturating_mul(128));
        write_bed(&mut buffer, records, keys)?;

        let mut file = File::create(path).map_err(create_err)?;
        file.write_all(&buffer).map_err(create_err)?;
        file.flush().map_err(create_err)?;
        return Ok(());
    }

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // umask applies on creation
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    let tmp = builder.tempfile_in(dir).map_err(create_err)?;
    if let Some(meta) = existing.as_ref() {
        tmp.as_file()
            .set_permissions(meta.permissions())
            .map_err(create_err)?;
    }

    {
        let mut writer = BufWriter::with_capacity(256 * 1024, tmp.as_file());
        write_bed(&mut writer, records, keys)?;
        writer.flush()?;
    }
    tmp.persist(path).map_err(|err| create_err(err.error))?;

    Ok(())
}
