//! # titv
//!
//! Count the transition/transversion (ti/tv) ratio of SNPs in VCF files.
//!
//! Every record is classified from its REF and ALT alleles alone: a single-base
//! substitution within a chemical class (A<->G, C<->T) is a transition, across
//! classes a transversion. Indels, multi-base substitutions, symbolic alleles and
//! ambiguous bases are counted as records but not classified. The ti/tv ratio is
//! undefined, not a crash, while no transversions have been seen.
//!
//! ## Example
//!
//! ```rust
//! use titv::{classify, Classification, TiTvTally};
//!
//! let mut tally = TiTvTally::new();
//! for (r, a) in [("A", "G"), ("C", "T"), ("A", "C"), ("A", "A")] {
//!     tally.record_seen();
//!     tally.record_classified(classify(r, a));
//! }
//!
//! let snapshot = tally.snapshot();
//! assert_eq!(snapshot.total_records, 4);
//! assert_eq!(snapshot.transitions, 2);
//! assert_eq!(snapshot.transversions, 1);
//! assert_eq!(snapshot.ratio.value(), Some(2.0));
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Classification, variant alleles and the running tally
//! - [`parsing`]: VCF record sources, with gzip/BGZF support
//! - [`counting`]: The engine that drives sources and the progress reporters
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod counting;
pub mod parsing;

// Re-export commonly used types for convenience
pub use core::substitution::{classify, Classification, Nucleotide};
pub use core::tally::{Ratio, Snapshot, TiTvTally};
pub use core::variant::{AltSelection, VariantAlleles};
pub use counting::engine::{CountingConfig, CountingEngine};
