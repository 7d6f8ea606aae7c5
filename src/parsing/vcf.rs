//! VCF record source.
//!
//! Reads the header and then records with noodles, handing the core only the
//! REF and ALT alleles of each record. Records are decoded lazily into a single
//! reusable buffer; nothing beyond the current record is retained.

use std::io::{self, BufRead};
use std::path::Path;

use noodles::vcf;
use noodles::vcf::variant::record::AlternateBases as _;
use thiserror::Error;
use tracing::debug;

use crate::core::variant::VariantAlleles;
use crate::parsing::input::open_input;

/// Placeholder for an absent ALT allele
const MISSING: &str = ".";

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid VCF header: {0}")]
    InvalidHeader(String),

    #[error("Invalid VCF record {record}: {message}")]
    InvalidRecord { record: u64, message: String },
}

/// Supplies variant records one at a time
pub trait RecordSource {
    /// Read the next record, or `None` at end of stream.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if the underlying input cannot be read or decoded.
    fn next_record(&mut self) -> Result<Option<VariantAlleles>, ParseError>;
}

/// Record source over a VCF stream
pub struct VcfRecordSource<R> {
    reader: vcf::io::Reader<R>,
    record: vcf::Record,
    records_read: u64,
}

impl<R: BufRead> VcfRecordSource<R> {
    /// Read the VCF header from `inner` and position the source at the first record.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::InvalidHeader` if the header cannot be parsed.
    pub fn new(inner: R) -> Result<Self, ParseError> {
        let mut reader = vcf::io::Reader::new(inner);

        let header = reader
            .read_header()
            .map_err(|e| ParseError::InvalidHeader(e.to_string()))?;

        debug!(
            samples = header.sample_names().len(),
            contigs = header.contigs().len(),
            "Read VCF header"
        );

        Ok(Self {
            reader,
            record: vcf::Record::default(),
            records_read: 0,
        })
    }

    /// Number of records read so far
    #[must_use]
    pub fn records_read(&self) -> u64 {
        self.records_read
    }

    fn invalid_record(&self, e: &io::Error) -> ParseError {
        ParseError::InvalidRecord {
            record: self.records_read + 1,
            message: e.to_string(),
        }
    }
}

impl VcfRecordSource<Box<dyn BufRead>> {
    /// Open a VCF file (plain, gzip or BGZF; `-` for stdin).
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Io` if the file cannot be opened, or
    /// `ParseError::InvalidHeader` if its header cannot be parsed.
    pub fn from_path(path: &Path) -> Result<Self, ParseError> {
        Self::new(open_input(path)?)
    }
}

impl<R: BufRead> RecordSource for VcfRecordSource<R> {
    fn next_record(&mut self) -> Result<Option<VariantAlleles>, ParseError> {
        let n = self.reader.read_record(&mut self.record).map_err(|e| {
            if e.kind() == io::ErrorKind::InvalidData {
                self.invalid_record(&e)
            } else {
                ParseError::Io(e)
            }
        })?;

        if n == 0 {
            return Ok(None);
        }

        let alternates = self
            .record
            .alternate_bases()
            .iter()
            .filter(|allele| allele.as_ref().map_or(true, |a| *a != MISSING))
            .map(|allele| allele.map(str::to_string))
            .collect::<io::Result<Vec<_>>>()
            .map_err(|e| self.invalid_record(&e))?;

        let reference = self.record.reference_bases().to_string();

        self.records_read += 1;

        Ok(Some(VariantAlleles::new(reference, alternates)))
    }
}
