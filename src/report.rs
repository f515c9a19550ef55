use crate::error::{Gtf2BedError, Result};
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Run-scoped message sink.
///
/// Screen output goes through the `log` facade unless silenced; every
/// message is also mirrored, uncoloured, into the optional log file.
pub struct Reporter {
    silent: bool,
    log: Option<BufWriter<File>>,
}

impl Reporter {
    /// Builds a reporter, creating the log file if one is requested.
    ///
    /// # Errors
    ///
    /// Returns `Create` if the log file cannot be opened for writing.
    pub fn new(silent: bool, log_path: Option<&Path>) -> Result<Self> {
        let log = match log_path {
            Some(path) => {
                let file = File::create(path).map_err(|source| Gtf2BedError::Create {
                    path: path.to_path_buf(),
                    source,
                })?;
                Some(BufWriter::new(file))
            }
            None => None,
        };

        Ok(Self { silent, log })
    }

    /// A reporter that prints nothing and keeps no log.
    pub fn quiet() -> Self {
        Self {
            silent: true,
            log: None,
        }
    }

    /// Prints a section title.
    ///
    /// # Arguments
    ///
    /// * `message` - Title text; coloured on screen, plain in the log file
    pub fn title(&mut self, message: &str) {
        if !self.silent {
            log::info!("{}", message.magenta().bold());
        }
        self.mirror(format_args!("\n{message}"));
    }

    /// Prints a `  * message` progress line.
    ///
    /// # Arguments
    ///
    /// * `message` - Progress text
    ///
    /// # Example
    ///
    /// ```rust, ignore
    /// let mut reporter = Reporter::new(false, None)?;
    /// reporter.bullet("Read 10000 records");
    /// ```
    pub fn bullet(&mut self, message: &str) {
        if !self.silent {
            log::info!("  * {message}");
        }
        self.mirror(format_args!("  * {message}"));
    }

    /// Non-fatal condition worth the user's attention.
    pub fn warning(&mut self, message: &str) {
        if !self.silent {
            log::warn!("{message}");
        }
        self.mirror(format_args!("WARNING: {message}"));
    }

    /// Fatal error; the caller decides how to exit.
    pub fn error(&mut self, message: &str) {
        if !self.silent {
            log::error!("{} {message}", "ERROR:".red().bold());
        }
        self.mirror(format_args!("ERROR: {message}"));
    }

    /// Closing line of a successful run.
    pub fn done(&mut self, message: &str) {
        if !self.silent {
            log::info!("{} {message}", "DONE:".green().bold());
        }
        self.mirror(format_args!("DONE: {message}"));
    }

    /// Flushes the log file, if any.
    pub fn finish(&mut self) -> Result<()> {
        if let Some(file) = self.log.as_mut() {
            file.flush()?;
        }
        Ok(())
    }

    fn mirror(&mut self, line: std::fmt::Arguments<'_>) {
        let Some(file) = self.log.as_mut() else {
            return;
        };
        if let Err(err) = writeln!(file, "{line}") {
            log::warn!("log file disabled after write failure: {err}");
            self.log = None;
        }
    }
}
