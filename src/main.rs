//! # gtf2bed
//!
//! GTF/GFF/GFF3-to-BED converter keeping every attribute as a column.
//!
//! ## Usage
//!
//! ```bash
//! gtf2bed -i <INPUT> -o <OUTPUT> -f <FORMAT> [OPTIONS]
//!
//! Required arguments:
//!   -i, --input <GXF>             Input GTF/GFF/GFF3 file (.gz/.bz2 accepted)
//!   -o, --output <BED>            Output file to write bed file
//!   -f, --format <FORMAT>         File format [gtf, gff, gff3]
//!
//! Optional arguments:
//!   -t, --feature-type <TYPES>... Feature types that must exist in the input [default: all]
//!       --log <LOG>               Output on screen goes to this file
//!       --silent                  Disable screen output
//!   -h, --help                    Print help
//!   -V, --version                 Print version
//! ```
//!
//! ## Examples
//!
//! ```bash
//! gtf2bed -i annotations.gtf -o output.bed -f gtf
//! gtf2bed -i annotations.gff3.gz -o output.bed -f gff3 -t gene,exon --log run.log
//! ```
use clap::Parser;
use colored::Colorize;
use gtf2bed::{run, Args, Config, Reporter};
use log::LevelFilter;

fn main() {
    let args = Args::parse();

    let level = if args.silent {
        LevelFilter::Off
    } else {
        LevelFilter::Info
    };
    if let Err(err) = simple_logger::SimpleLogger::new().with_level(level).init() {
        eprintln!("failed to initialize logger: {err}");
    }
    log::debug!("{:?}", args);

    let config = Config::from_args(&args);
    let mut reporter = match Reporter::new(config.silent, config.log.as_deref()) {
        Ok(reporter) => reporter,
        Err(err) => {
            eprintln!("{} {err}", "ERROR:".red().bold());
            std::process::exit(1);
        }
    };

    match run(&config, &mut reporter) {
        Ok(stats) => {
            reporter.bullet(&format!("Elapsed: {:.4?} secs", stats.elapsed.as_secs_f32()));
            reporter.bullet(&format!("Memory: {:.2} MB", stats.mem_delta_mb));
            reporter.done(&format!(
                "{} records written to {}",
                stats.records,
                config.output.display()
            ));
            if let Err(err) = reporter.finish() {
                eprintln!("failed to flush log file: {err}");
            }
        }
        Err(err) => {
            reporter.error(&err.to_string());
            if let Err(err) = reporter.finish() {
                eprintln!("failed to flush log file: {err}");
            }
            std::process::exit(1);
        }
    }
}
