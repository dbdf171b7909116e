//! Genetic code tables and codon classification.
//!
//! A [`GeneticCode`] answers two questions for the scanner: whether a codon
//! is a start, a stop, or neither, and which amino acid it maps to. The
//! amino-acid lookup is ambiguity tolerant: any codon not resolvable under
//! the strict table (ambiguity symbols included) maps to [`UNKNOWN_AMINO_ACID`]
//! instead of failing.

use std::collections::HashMap;

use crate::types::{CodonKind, OrfError};

/// Fallback symbol for codons the active table cannot resolve.
pub const UNKNOWN_AMINO_ACID: u8 = b'X';

/// Amino acid symbol for stop codons in translated output.
pub const STOP_AMINO_ACID: u8 = b'*';

/// The standard forward table (NCBI table 1), the base all supported
/// tables are derived from.
const STANDARD_FORWARD: [(&[u8; 3], u8); 64] = [
    (b"TTT", b'F'), (b"TTC", b'F'), (b"TTA", b'L'), (b"TTG", b'L'),
    (b"CTT", b'L'), (b"CTC", b'L'), (b"CTA", b'L'), (b"CTG", b'L'),
    (b"ATT", b'I'), (b"ATC", b'I'), (b"ATA", b'I'), (b"ATG", b'M'),
    (b"GTT", b'V'), (b"GTC", b'V'), (b"GTA", b'V'), (b"GTG", b'V'),
    (b"TCT", b'S'), (b"TCC", b'S'), (b"TCA", b'S'), (b"TCG", b'S'),
    (b"CCT", b'P'), (b"CCC", b'P'), (b"CCA", b'P'), (b"CCG", b'P'),
    (b"ACT", b'T'), (b"ACC", b'T'), (b"ACA", b'T'), (b"ACG", b'T'),
    (b"GCT", b'A'), (b"GCC", b'A'), (b"GCA", b'A'), (b"GCG", b'A'),
    (b"TAT", b'Y'), (b"TAC", b'Y'), (b"TAA", b'*'), (b"TAG", b'*'),
    (b"CAT", b'H'), (b"CAC", b'H'), (b"CAA", b'Q'), (b"CAG", b'Q'),
    (b"AAT", b'N'), (b"AAC", b'N'), (b"AAA", b'K'), (b"AAG", b'K'),
    (b"GAT", b'D'), (b"GAC", b'D'), (b"GAA", b'E'), (b"GAG", b'E'),
    (b"TGT", b'C'), (b"TGC", b'C'), (b"TGA", b'*'), (b"TGG", b'W'),
    (b"CGT", b'R'), (b"CGC", b'R'), (b"CGA", b'R'), (b"CGG", b'R'),
    (b"AGT", b'S'), (b"AGC", b'S'), (b"AGA", b'R'), (b"AGG", b'R'),
    (b"GGT", b'G'), (b"GGC", b'G'), (b"GGA", b'G'), (b"GGG", b'G'),
];

/// A resolved genetic code: forward table plus start/stop codon sets.
///
/// # Examples
///
/// ```rust
/// use orfscan_core::codon::GeneticCode;
/// use orfscan_core::types::CodonKind;
///
/// let code = GeneticCode::by_id(1)?;
/// assert_eq!(code.classify(b"ATG"), CodonKind::Start);
/// assert_eq!(code.classify(b"TAA"), CodonKind::Stop);
/// assert_eq!(code.amino_acid(b"NNN"), b'X');
/// # Ok::<(), orfscan_core::types::OrfError>(())
/// ```
#[derive(Debug, Clone)]
pub struct GeneticCode {
    id: u8,
    name: &'static str,
    forward: HashMap<[u8; 3], u8>,
    starts: Vec<[u8; 3]>,
    stops: Vec<[u8; 3]>,
}

impl GeneticCode {
    /// Resolve an NCBI translation table id.
    ///
    /// Supported tables: 1 (Standard), 2 (Vertebrate Mitochondrial),
    /// 4 (Mold/Protozoan Mitochondrial), 5 (Invertebrate Mitochondrial),
    /// 11 (Bacterial/Archaeal).
    ///
    /// # Errors
    ///
    /// Returns [`OrfError::UnknownTable`] for any other id.
    pub fn by_id(id: u8) -> Result<Self, OrfError> {
        let (name, diffs, starts, stops): (
            &'static str,
            &[(&[u8; 3], u8)],
            &[&[u8; 3]],
            &[&[u8; 3]],
        ) = match id {
            1 => (
                "Standard",
                &[],
                &[b"TTG", b"CTG", b"ATG"],
                &[b"TAA", b"TAG", b"TGA"],
            ),
            2 => (
                "Vertebrate Mitochondrial",
                &[(b"AGA", b'*'), (b"AGG", b'*'), (b"ATA", b'M'), (b"TGA", b'W')],
                &[b"ATT", b"ATC", b"ATA", b"ATG", b"GTG"],
                &[b"TAA", b"TAG", b"AGA", b"AGG"],
            ),
            4 => (
                "Mold/Protozoan Mitochondrial",
                &[(b"TGA", b'W')],
                &[b"TTA", b"TTG", b"CTG", b"ATT", b"ATC", b"ATA", b"ATG", b"GTG"],
                &[b"TAA", b"TAG"],
            ),
            5 => (
                "Invertebrate Mitochondrial",
                &[(b"AGA", b'S'), (b"AGG", b'S'), (b"ATA", b'M'), (b"TGA", b'W')],
                &[b"TTG", b"ATT", b"ATC", b"ATA", b"ATG", b"GTG"],
                &[b"TAA", b"TAG"],
            ),
            11 => (
                "Bacterial/Archaeal",
                &[],
                &[b"TTG", b"CTG", b"ATT", b"ATC", b"ATA", b"ATG", b"GTG"],
                &[b"TAA", b"TAG", b"TGA"],
            ),
            other => return Err(OrfError::UnknownTable(other)),
        };

        let mut forward: HashMap<[u8; 3], u8> = STANDARD_FORWARD
            .iter()
            .map(|(codon, aa)| (**codon, *aa))
            .collect();
        for (codon, aa) in diffs {
            forward.insert(**codon, *aa);
        }

        Ok(Self {
            id,
            name,
            forward,
            starts: starts.iter().map(|c| **c).collect(),
            stops: stops.iter().map(|c| **c).collect(),
        })
    }

    /// NCBI table id of this code.
    #[must_use]
    pub fn id(&self) -> u8 {
        self.id
    }

    /// Human-readable table name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Classify a codon as start, stop, or neither.
    ///
    /// Codons with ambiguity symbols never match a start or stop set and
    /// classify as [`CodonKind::Neither`]; classification cannot fail.
    #[must_use]
    pub fn classify(&self, codon: &[u8]) -> CodonKind {
        let codon: [u8; 3] = match codon.try_into() {
            Ok(codon) => codon,
            Err(_) => return CodonKind::Neither,
        };
        if self.starts.contains(&codon) {
            CodonKind::Start
        } else if self.stops.contains(&codon) {
            CodonKind::Stop
        } else {
            CodonKind::Neither
        }
    }

    /// Map a codon to its amino acid, falling back to [`UNKNOWN_AMINO_ACID`]
    /// for anything the strict table cannot resolve.
    #[must_use]
    pub fn amino_acid(&self, codon: &[u8]) -> u8 {
        let codon: [u8; 3] = match codon.try_into() {
            Ok(codon) => codon,
            Err(_) => return UNKNOWN_AMINO_ACID,
        };
        self.forward
            .get(&codon)
            .copied()
            .unwrap_or(UNKNOWN_AMINO_ACID)
    }

    /// Translate a nucleotide sequence codon by codon.
    ///
    /// Only complete codons are translated; a trailing partial codon is
    /// dropped. Stop codons render as `*`, unresolvable codons as `X`.
    #[must_use]
    pub fn translate(&self, seq: &[u8]) -> String {
        seq.chunks_exact(3)
            .map(|codon| char::from(self.amino_acid(codon)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_classification() {
        let code = GeneticCode::by_id(1).unwrap();
        assert_eq!(code.classify(b"ATG"), CodonKind::Start);
        assert_eq!(code.classify(b"TTG"), CodonKind::Start);
        assert_eq!(code.classify(b"TAA"), CodonKind::Stop);
        assert_eq!(code.classify(b"TAG"), CodonKind::Stop);
        assert_eq!(code.classify(b"TGA"), CodonKind::Stop);
        assert_eq!(code.classify(b"AAA"), CodonKind::Neither);
    }

    #[test]
    fn ambiguity_codons_classify_as_neither() {
        let code = GeneticCode::by_id(1).unwrap();
        assert_eq!(code.classify(b"ATN"), CodonKind::Neither);
        assert_eq!(code.classify(b"TAR"), CodonKind::Neither);
        assert_eq!(code.classify(b"AT"), CodonKind::Neither);
    }

    #[test]
    fn amino_acid_lookup_with_fallback() {
        let code = GeneticCode::by_id(1).unwrap();
        assert_eq!(code.amino_acid(b"ATG"), b'M');
        assert_eq!(code.amino_acid(b"TAA"), b'*');
        assert_eq!(code.amino_acid(b"GCT"), b'A');
        assert_eq!(code.amino_acid(b"NNN"), b'X');
        assert_eq!(code.amino_acid(b"XXX"), b'X');
    }

    #[test]
    fn translate_drops_trailing_partial_codon() {
        let code = GeneticCode::by_id(1).unwrap();
        assert_eq!(code.translate(b"ATGAAATAG"), "MK*");
        assert_eq!(code.translate(b"ATGAAATAGGC"), "MK*");
        assert_eq!(code.translate(b""), "");
    }

    #[test]
    fn vertebrate_mitochondrial_reassignments() {
        let code = GeneticCode::by_id(2).unwrap();
        assert_eq!(code.amino_acid(b"AGA"), b'*');
        assert_eq!(code.amino_acid(b"ATA"), b'M');
        assert_eq!(code.amino_acid(b"TGA"), b'W');
        assert_eq!(code.classify(b"AGA"), CodonKind::Stop);
        assert_eq!(code.classify(b"TGA"), CodonKind::Neither);
        assert_eq!(code.classify(b"ATA"), CodonKind::Start);
    }

    #[test]
    fn bacterial_table_extended_starts() {
        let code = GeneticCode::by_id(11).unwrap();
        assert_eq!(code.classify(b"GTG"), CodonKind::Start);
        assert_eq!(code.classify(b"ATT"), CodonKind::Start);
        assert_eq!(code.classify(b"TGA"), CodonKind::Stop);
        // Amino acids unchanged from the standard table
        assert_eq!(code.amino_acid(b"GTG"), b'V');
    }

    #[test]
    fn unknown_table_is_a_configuration_error() {
        assert!(matches!(
            GeneticCode::by_id(99),
            Err(OrfError::UnknownTable(99))
        ));
        assert!(GeneticCode::by_id(0).is_err());
    }
}
