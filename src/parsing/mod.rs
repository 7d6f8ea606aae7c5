//! Reading variant records from VCF input.
//!
//! - [`input`]: opening files or stdin, with transparent gzip/BGZF decompression
//! - [`vcf`]: the [`RecordSource`](vcf::RecordSource) trait and its noodles-backed
//!   implementation, [`VcfRecordSource`](vcf::VcfRecordSource)
//!
//! ## Example
//!
//! ```rust,no_run
//! use titv::parsing::vcf::{RecordSource, VcfRecordSource};
//! use std::path::Path;
//!
//! let mut source = VcfRecordSource::from_path(Path::new("calls.vcf.gz")).unwrap();
//! while let Some(alleles) = source.next_record().unwrap() {
//!     println!("{} -> {:?}", alleles.reference, alleles.alternates);
//! }
//! ```

pub mod input;
pub mod vcf;
