//! Driving record sources through the classifier and reporting the results.
//!
//! The [`CountingEngine`](engine::CountingEngine) owns the running
//! [`TiTvTally`](crate::core::tally::TiTvTally). It reads files in the order given
//! and records in file order, stops each file early once the per-file limit is
//! reached, and hands a [`Snapshot`](crate::core::tally::Snapshot) to the
//! [`Reporter`](report::Reporter) every N records and once at the end.
//!
//! ## Example
//!
//! ```rust,no_run
//! use titv::counting::engine::{CountingConfig, CountingEngine};
//! use titv::counting::report::TextReporter;
//!
//! let mut engine = CountingEngine::new(CountingConfig::default());
//! let mut reporter = TextReporter::new(std::io::stdout().lock());
//! let snapshot = engine.process_files(["a.vcf", "b.vcf.gz"], &mut reporter).unwrap();
//! println!("ti/tv = {}", snapshot.ratio);
//! ```

pub mod engine;
pub mod report;
