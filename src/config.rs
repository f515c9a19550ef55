use crate::cli::{Args, Format};
use crate::collect::FeatureFilter;
use std::path::PathBuf;

/// Normalized configuration for a conversion run.
#[derive(Clone, Debug)]
pub struct Config {
    /// Input GTF/GFF/GFF3 path.
    pub input: PathBuf,
    /// Output BED path.
    pub output: PathBuf,
    /// Attribute grammar of the input.
    pub format: Format,
    /// Feature types that must appear in the input.
    pub feature_types: FeatureFilter,
    /// Optional log file mirroring all messages.
    pub log: Option<PathBuf>,
    /// Suppress screen output.
    pub silent: bool,
}

impl Config {
    /// Builds a conversion config from CLI arguments.
    ///
    /// # Example
    ///
    /// ```rust, ignore
    /// use clap::Parser;
    /// use gtf2bed::{Args, Config};
    ///
    /// let args = Args::parse_from(["gtf2bed", "-i", "in.gtf", "-o", "out.bed", "-f", "gtf"]);
    /// let config = Config::from_args(&args);
    /// assert!(config.feature_types.is_default());
    /// ```
    pub fn from_args(args: &Args) -> Self {
        Self {
            input: args.input.clone(),
            output: args.output.clone(),
            format: args.format,
            feature_types: FeatureFilter::new(args.feature_types.iter().cloned()),
            log: args.log.clone(),
            silent: args.silent,
        }
    }
}
