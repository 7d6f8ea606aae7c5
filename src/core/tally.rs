use std::ops::AddAssign;

use serde::Serialize;

use crate::core::substitution::Classification;

/// Running transition/transversion counts for a run
///
/// `transitions + transversions <= total_records` holds at all times, since
/// every classified record has already been seen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TiTvTally {
    total_records: u64,
    transitions: u64,
    transversions: u64,
}

impl TiTvTally {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one input record, SNP or not
    pub fn record_seen(&mut self) {
        self.total_records += 1;
    }

    /// Count a classified record. `NotApplicable` is ignored.
    pub fn record_classified(&mut self, class: Classification) {
        match class {
            Classification::Transition => self.transitions += 1,
            Classification::Transversion => self.transversions += 1,
            Classification::NotApplicable => {}
        }
    }

    #[must_use]
    pub fn total_records(&self) -> u64 {
        self.total_records
    }

    #[must_use]
    pub fn transitions(&self) -> u64 {
        self.transitions
    }

    #[must_use]
    pub fn transversions(&self) -> u64 {
        self.transversions
    }

    /// Add the counts of another tally to this one
    pub fn merge(&mut self, other: &Self) {
        self.total_records += other.total_records;
        self.transitions += other.transitions;
        self.transversions += other.transversions;
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            total_records: self.total_records,
            transitions: self.transitions,
            transversions: self.transversions,
            ratio: Ratio::of(self.transitions, self.transversions),
        }
    }
}

impl AddAssign<&TiTvTally> for TiTvTally {
    fn add_assign(&mut self, rhs: &TiTvTally) {
        self.merge(rhs);
    }
}

/// Transitions divided by transversions
///
/// Undefined when no transversions have been observed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(into = "Option<f64>")]
pub enum Ratio {
    Defined(f64),
    Undefined,
}

impl Ratio {
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Counts far below 2^52 in practice
    pub fn of(numerator: u64, denominator: u64) -> Self {
        if denominator == 0 {
            Self::Undefined
        } else {
            Self::Defined(numerator as f64 / denominator as f64)
        }
    }

    #[must_use]
    pub fn value(self) -> Option<f64> {
        match self {
            Self::Defined(v) => Some(v),
            Self::Undefined => None,
        }
    }
}

impl From<Ratio> for Option<f64> {
    fn from(ratio: Ratio) -> Self {
        ratio.value()
    }
}

impl std::fmt::Display for Ratio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Defined(v) => write!(f, "{}", format_float(*v)),
            Self::Undefined => write!(f, "NA"),
        }
    }
}

/// Shortest round-trip text for `v`, keeping ".0" on whole numbers and
/// writing exponents with a sign and at least two digits (`1e-05`, `1e+16`).
fn format_float(v: f64) -> String {
    let text = format!("{v:?}");
    let Some((mantissa, exponent)) = text.split_once('e') else {
        return text;
    };

    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}

/// Point-in-time view of a tally, as handed to reporters
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Snapshot {
    pub total_records: u64,
    pub transitions: u64,
    pub transversions: u64,
    pub ratio: Ratio,
}
