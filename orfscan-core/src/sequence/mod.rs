//! Sequence preparation utilities.
//!
//! Records are uppercased and optionally windowed before scanning; the
//! reverse complement is derived once per record when the minus strand is
//! requested. Symbols outside {A,C,G,T} are carried through unchanged so
//! the codon classifier can apply its ambiguity fallback.

use bio::alphabets::dna;

pub mod io;

pub use io::read_fasta_records;

/// Uppercase a record and apply the configured scan window.
///
/// `start` is a 0-based offset; `stop` is an exclusive 0-based end, with 0
/// meaning end of sequence. A window beyond the record's length yields an
/// empty sequence rather than an error, so short records degrade to an
/// empty scan.
#[must_use]
pub fn prepare_window(seq: &[u8], start: usize, stop: usize) -> Vec<u8> {
    let end = if stop > 0 { stop.min(seq.len()) } else { seq.len() };
    if start >= end {
        return Vec::new();
    }
    seq[start..end].to_ascii_uppercase()
}

/// Reverse complement of a nucleotide sequence.
///
/// Delegates to rust-bio, which maps IUPAC ambiguity symbols to their
/// complements (e.g. `R` <-> `Y`). Round-tripping is exact over {A,C,G,T}.
#[must_use]
pub fn reverse_complement(seq: &[u8]) -> Vec<u8> {
    dna::revcomp(seq)
}
