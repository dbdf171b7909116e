use thiserror::Error;

/// Codon text of the terminal sentinel boundary appended to every frame.
///
/// The sentinel closes any ORF still open at sequence end; a real stop codon
/// never contains `X`, so the text doubles as the truncation marker.
pub const SENTINEL_CODON: [u8; 3] = *b"XXX";

/// Classification of a codon against the active genetic code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodonKind {
    /// Codon is in the table's start-codon set
    Start,
    /// Codon is in the table's stop-codon set
    Stop,
    /// Anything else, including codons with ambiguity symbols
    Neither,
}

/// Kind of a recorded frame boundary.
///
/// Only starts and stops are recorded while walking a frame; `Neither`
/// codons are skipped, not stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryKind {
    Start,
    Stop,
}

/// A start or stop codon located while walking one reading frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodonBoundary {
    /// 1-based nucleotide position of the first symbol of the codon
    pub position: usize,
    /// Start or stop
    pub kind: BoundaryKind,
    /// The three codon symbols as seen in the sequence
    pub codon: [u8; 3],
}

/// One accepted coding sequence span.
///
/// Coordinates are 1-based and inclusive, expressed in the coordinate space
/// of the scanned strand (the reverse complement for minus-strand hits; the
/// output stage maps them back to plus-strand space).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cds {
    /// Sequential ORF number assigned across all records, starting at 1.
    ///
    /// Zero until the orchestrator assigns the final numbering.
    pub index: usize,
    /// 1-based position of the first nucleotide
    pub start: usize,
    /// 1-based position of the last nucleotide, inclusive
    pub stop: usize,
    /// `stop - start + 1`, always a multiple of 3
    pub length: usize,
    /// The extracted nucleotide subsequence
    pub sequence: Vec<u8>,
    /// Signed frame tag: +1..+3 plus strand, -1..-3 minus strand
    pub frame: i8,
}

/// Errors surfaced by ORF scanning.
///
/// Classification gaps and length-bound rejections are deliberately not
/// represented here: unresolvable codons fall back to the unknown amino
/// acid and out-of-bounds ORFs are silently excluded.
#[derive(Error, Debug)]
pub enum OrfError {
    /// Genetic code table id not supported
    #[error("Unknown genetic code table: {0}")]
    UnknownTable(u8),
    /// Strand selection string not recognized
    #[error("Invalid strand selection: {0}")]
    InvalidStrand(String),
    /// Output mode string not recognized
    #[error("Invalid output mode: {0}")]
    InvalidOutputMode(String),
    /// File I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Error parsing input data
    #[error("Parse error: {0}")]
    Parse(String),
}
