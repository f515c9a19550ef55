//! Command-line surface for gtf2bed.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(
    name = "gtf2bed",
    version = env!("CARGO_PKG_VERSION"),
    about = "GTF/GFF/GFF3-to-BED converter keeping every attribute as a column"
)]
pub struct Args {
    /// Input annotation file.
    ///
    /// Plain text, or gzip/bzip2 compressed when the name ends in .gz or .bz2.
    #[clap(
        short = 'i',
        long = "input",
        help = "Input GTF/GFF/GFF3 file",
        value_name = "GXF",
        required = true
    )]
    pub input: PathBuf,

    /// Output BED filepath.
    #[clap(
        short = 'o',
        long = "output",
        help = "Output file to write bed file",
        value_name = "BED",
        required = true
    )]
    pub output: PathBuf,

    /// Attribute grammar of the input; never inferred from the file name.
    #[clap(
        short = 'f',
        long = "format",
        help = "File format",
        value_name = "FORMAT",
        value_enum,
        required = true
    )]
    pub format: Format,

    /// Feature types that must be present in the input; default is "all".
    #[clap(
        short = 't',
        long = "feature-type",
        help = "Feature types to include; each must exist in the input",
        value_name = "TYPES",
        num_args = 1..,
        value_delimiter = ',',
        default_value = "all"
    )]
    pub feature_types: Vec<String>,

    /// Mirror all messages into this file.
    #[clap(long = "log", help = "Output on screen goes to this file", value_name = "LOG")]
    pub log: Option<PathBuf>,

    /// Disable screen output.
    #[clap(long = "silent", help = "Disable screen output")]
    pub silent: bool,
}

/// Annotation dialect, selecting the attribute grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// `key "value";`
    Gtf,
    /// `key=value;`
    Gff,
    /// `key=value;`
    Gff3,
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Format::Gtf => write!(f, "gtf"),
            Format::Gff => write!(f, "gff"),
            Format::Gff3 => write!(f, "gff3"),
        }
    }
}
