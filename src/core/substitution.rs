use serde::Serialize;

/// One of the four standard DNA bases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nucleotide {
    A,
    C,
    G,
    T,
}

impl Nucleotide {
    /// Parse a single base, ignoring case. Ambiguity codes (N, R, ...) and
    /// symbols such as `*` or `.` are not nucleotides.
    #[must_use]
    pub fn from_ascii(base: u8) -> Option<Self> {
        match base.to_ascii_uppercase() {
            b'A' => Some(Self::A),
            b'C' => Some(Self::C),
            b'G' => Some(Self::G),
            b'T' => Some(Self::T),
            _ => None,
        }
    }

    /// Parse an allele that must be exactly one base long.
    #[must_use]
    pub fn from_allele(allele: &str) -> Option<Self> {
        match allele.as_bytes() {
            [base] => Self::from_ascii(*base),
            _ => None,
        }
    }

    /// A and G are purines; C and T are pyrimidines.
    #[must_use]
    pub fn is_purine(self) -> bool {
        matches!(self, Self::A | Self::G)
    }
}

/// Outcome of classifying a reference/alternate allele pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// Purine to purine (A<->G) or pyrimidine to pyrimidine (C<->T)
    Transition,
    /// Purine to pyrimidine or the reverse
    Transversion,
    /// Not a simple single-nucleotide substitution
    NotApplicable,
}

impl Classification {
    /// Classify a substitution between two known bases.
    ///
    /// Identical bases are not a substitution and yield `NotApplicable`.
    #[must_use]
    pub fn of_bases(reference: Nucleotide, alternate: Nucleotide) -> Self {
        if reference == alternate {
            Self::NotApplicable
        } else if reference.is_purine() == alternate.is_purine() {
            Self::Transition
        } else {
            Self::Transversion
        }
    }

    #[must_use]
    pub fn is_applicable(self) -> bool {
        self != Self::NotApplicable
    }
}

/// Classify a reference/alternate allele pair as a transition or transversion.
///
/// Returns `NotApplicable` unless both alleles are a single A, C, G or T
/// (case-insensitive) and they differ. This covers insertions, deletions,
/// multi-base substitutions, symbolic alleles (`<DEL>`, `*`) and ambiguity codes.
///
/// # Examples
///
/// ```
/// use titv::core::substitution::{classify, Classification};
///
/// assert_eq!(classify("A", "G"), Classification::Transition);
/// assert_eq!(classify("c", "a"), Classification::Transversion);
/// assert_eq!(classify("AT", "A"), Classification::NotApplicable);
/// ```
#[must_use]
pub fn classify(reference: &str, alternate: &str) -> Classification {
    match (
        Nucleotide::from_allele(reference),
        Nucleotide::from_allele(alternate),
    ) {
        (Some(r), Some(a)) => Classification::of_bases(r, a),
        _ => Classification::NotApplicable,
    }
}
