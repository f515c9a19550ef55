//! # gtf2bed
//!
//! Converts GTF, GFF and GFF3 annotations into a BED-like table that keeps
//! every attribute as an extra column.
//!
//! The input is read once and retained in memory: the attribute columns are
//! the sorted union of every key seen, which is only known after the last
//! line. Each output row carries the sequence name, the 0-based start, the
//! end, the `gene_id` attribute, the feature type, the score and then one
//! column per attribute key (`.` when a record lacks it).
//!
//! ## Usage
//!
//! ```rust, ignore
//! use gtf2bed::{run, Config, Format, Reporter};
//! use gtf2bed::collect::FeatureFilter;
//! use std::path::PathBuf;
//!
//! let config = Config {
//!     input: PathBuf::from("annotations.gtf.gz"),
//!     output: PathBuf::from("annotations.bed"),
//!     format: Format::Gtf,
//!     feature_types: FeatureFilter::new(["exon", "CDS"]),
//!     log: None,
//!     silent: false,
//! };
//!
//! let stats = run(&config, &mut Reporter::quiet())?;
//! println!("{} records in {:?}", stats.records, stats.elapsed);
//! ```
//!
//! ### Decoding attributes directly
//!
//! ```rust, ignore
//! use gtf2bed::gxf::{decode_gff3, Attributes};
//!
//! let mut attrs = Attributes::new();
//! decode_gff3("ID=gene%3A001;Name=Foo", &mut attrs);
//! assert_eq!(attrs["ID"], "gene:001");
//! ```

pub mod bed;
pub mod cli;
pub mod collect;
pub mod config;
pub mod convert;
pub mod detect;
pub mod error;
pub mod gxf;
pub mod memory;
pub mod report;
pub mod source;

pub use cli::{Args, Format};
pub use config::Config;
pub use convert::{run, RunStats};
pub use error::{Gtf2BedError, Result};
pub use memory::max_mem_usage_mb;
pub use report::Reporter;
