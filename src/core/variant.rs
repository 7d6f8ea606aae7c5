use crate::core::substitution::{classify, Classification};

/// Which alternate allele(s) of a record take part in classification
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum AltSelection {
    /// Classify against the first alternate allele, ignoring the rest
    #[default]
    First,
    /// Only classify records with exactly one alternate allele
    BiallelicOnly,
}

/// The alleles of a single VCF record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantAlleles {
    /// REF column
    pub reference: String,
    /// ALT column, empty when the record has no alternate (`.`)
    pub alternates: Vec<String>,
}

impl VariantAlleles {
    pub fn new(reference: impl Into<String>, alternates: Vec<String>) -> Self {
        Self {
            reference: reference.into(),
            alternates,
        }
    }

    /// Convenience constructor for a record with a single alternate allele
    pub fn biallelic(reference: impl Into<String>, alternate: impl Into<String>) -> Self {
        Self::new(reference, vec![alternate.into()])
    }

    #[must_use]
    pub fn is_multiallelic(&self) -> bool {
        self.alternates.len() > 1
    }

    /// The alternate allele used for classification under `selection`, if any
    #[must_use]
    pub fn considered_alternate(&self, selection: AltSelection) -> Option<&str> {
        match selection {
            AltSelection::First => self.alternates.first().map(String::as_str),
            AltSelection::BiallelicOnly if self.is_multiallelic() => None,
            AltSelection::BiallelicOnly => self.alternates.first().map(String::as_str),
        }
    }

    #[must_use]
    pub fn classify(&self, selection: AltSelection) -> Classification {
        self.considered_alternate(selection)
            .map_or(Classification::NotApplicable, |alt| {
                classify(&self.reference, alt)
            })
    }

    /// True when the record is a single-nucleotide substitution
    #[must_use]
    pub fn is_snp(&self, selection: AltSelection) -> bool {
        self.classify(selection).is_applicable()
    }
}
