//! Core types for transition/transversion counting.
//!
//! - [`substitution`]: [`Nucleotide`](substitution::Nucleotide), [`Classification`](substitution::Classification)
//!   and the pure [`classify`](substitution::classify) function
//! - [`variant`]: [`VariantAlleles`](variant::VariantAlleles), the alleles of one VCF record
//! - [`tally`]: [`TiTvTally`](tally::TiTvTally) counters and the [`Snapshot`](tally::Snapshot)
//!   handed to reporters
//!
//! ## Substitution classes
//!
//! | Class | Pairs |
//! |-------|-------|
//! | Transition | A<->G, C<->T |
//! | Transversion | A<->C, A<->T, G<->C, G<->T |
//!
//! Anything that is not a single ACGT base on both sides (indels, MNPs, symbolic
//! alleles, ambiguity codes) or that does not change the base is `NotApplicable`.

pub mod substitution;
pub mod tally;
pub mod variant;
