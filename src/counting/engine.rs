use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::core::substitution::Classification;
use crate::core::tally::{Snapshot, TiTvTally};
use crate::core::variant::{AltSelection, VariantAlleles};
use crate::counting::report::Reporter;
use crate::parsing::vcf::{ParseError, RecordSource, VcfRecordSource};

/// Default number of records between progress reports
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 1000;

#[derive(Error, Debug)]
pub enum CountingError {
    #[error("{}", path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Failed to write report: {0}")]
    Report(#[from] io::Error),
}

/// Configuration for the counting engine
#[derive(Debug, Clone)]
pub struct CountingConfig {
    /// Maximum number of records to read and classify from each file
    pub nlimit: Option<u64>,
    /// Report progress whenever the cumulative record count is a multiple of
    /// this value; 0 disables progress reports
    pub progress_interval: u64,
    /// Which alternate allele(s) take part in classification
    pub alt_selection: AltSelection,
}

impl Default for CountingConfig {
    fn default() -> Self {
        Self {
            nlimit: None,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            alt_selection: AltSelection::First,
        }
    }
}

/// Drives record sources through the classifier and keeps the running tally
pub struct CountingEngine {
    config: CountingConfig,
    tally: TiTvTally,
}

impl CountingEngine {
    #[must_use]
    pub fn new(config: CountingConfig) -> Self {
        Self {
            config,
            tally: TiTvTally::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &CountingConfig {
        &self.config
    }

    #[must_use]
    pub fn tally(&self) -> &TiTvTally {
        &self.tally
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.tally.snapshot()
    }

    /// Count and classify a single record
    pub fn process_record(&mut self, alleles: &VariantAlleles) -> Classification {
        let class = alleles.classify(self.config.alt_selection);
        self.tally.record_seen();
        self.tally.record_classified(class);
        class
    }

    /// Process records from `source` until it is exhausted or the per-file
    /// limit is reached. Returns the number of records processed.
    ///
    /// # Errors
    ///
    /// Returns `CountingError::Parse` if the source fails, or
    /// `CountingError::Report` if the reporter cannot write.
    pub fn process_source<S, P>(&mut self, source: &mut S, reporter: &mut P) -> Result<u64, CountingError>
    where
        S: RecordSource + ?Sized,
        P: Reporter + ?Sized,
    {
        let mut records_in_file = 0u64;

        loop {
            if let Some(limit) = self.config.nlimit {
                if records_in_file >= limit {
                    debug!(limit, "Reached per-file record limit");
                    break;
                }
            }

            let Some(alleles) = source.next_record()? else {
                break;
            };

            records_in_file += 1;
            self.process_record(&alleles);

            let interval = self.config.progress_interval;
            if interval > 0 && self.tally.total_records() % interval == 0 {
                reporter.progress(records_in_file, &self.tally.snapshot())?;
            }
        }

        Ok(records_in_file)
    }

    /// Open and process a single VCF file
    ///
    /// # Errors
    ///
    /// Returns `CountingError::Input` if the file cannot be opened or parsed,
    /// or `CountingError::Report` if the reporter cannot write.
    pub fn process_file<P>(&mut self, path: &Path, reporter: &mut P) -> Result<u64, CountingError>
    where
        P: Reporter + ?Sized,
    {
        let with_path = |source: ParseError| CountingError::Input {
            path: path.to_path_buf(),
            source,
        };

        let mut source = VcfRecordSource::from_path(path).map_err(with_path)?;
        reporter.file_started(path)?;

        let n = self
            .process_source(&mut source, reporter)
            .map_err(|e| match e {
                CountingError::Parse(source) => with_path(source),
                other => other,
            })?;

        info!(
            path = %path.display(),
            records = n,
            total = self.tally.total_records(),
            "Finished VCF file"
        );

        Ok(n)
    }

    /// Process every file in order, then write the final summary.
    ///
    /// # Errors
    ///
    /// Stops at the first file that fails; see [`Self::process_file`].
    pub fn process_files<I, P>(&mut self, paths: I, reporter: &mut P) -> Result<Snapshot, CountingError>
    where
        I: IntoIterator,
        I::Item: AsRef<Path>,
        P: Reporter + ?Sized,
    {
        for path in paths {
            self.process_file(path.as_ref(), reporter)?;
        }

        let snapshot = self.tally.snapshot();
        reporter.summary(&snapshot)?;
        Ok(snapshot)
    }
}

impl Default for CountingEngine {
    fn default() -> Self {
        Self::new(CountingConfig::default())
    }
}
