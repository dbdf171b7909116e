use std::str::FromStr;

use crate::types::OrfError;

/// Which strand(s) of each record to scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrandChoice {
    /// Scan the record and its reverse complement
    Both,
    /// Scan the record as given
    Plus,
    /// Scan only the reverse complement
    Minus,
}

impl StrandChoice {
    /// Whether the plus strand is scanned under this selection.
    #[must_use]
    pub fn scans_plus(self) -> bool {
        matches!(self, Self::Both | Self::Plus)
    }

    /// Whether the minus strand is scanned under this selection.
    #[must_use]
    pub fn scans_minus(self) -> bool {
        matches!(self, Self::Both | Self::Minus)
    }
}

impl FromStr for StrandChoice {
    type Err = OrfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "both" => Ok(Self::Both),
            "plus" => Ok(Self::Plus),
            "minus" => Ok(Self::Minus),
            other => Err(OrfError::InvalidStrand(other.to_string())),
        }
    }
}

/// What to emit per accepted ORF.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Translated amino-acid FASTA
    AminoAcid,
    /// Raw nucleotide FASTA
    Nucleotide,
    /// Positional header line only
    Positions,
}

impl FromStr for OutputMode {
    type Err = OrfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "aa" => Ok(Self::AminoAcid),
            "nt" => Ok(Self::Nucleotide),
            "pos" => Ok(Self::Positions),
            other => Err(OrfError::InvalidOutputMode(other.to_string())),
        }
    }
}

/// Immutable configuration for one scanning run.
///
/// Constructed once before scanning begins and passed by reference into
/// each component; no component reads ambient state. Degenerate length
/// bounds (`min_length > max_length`) are accepted and simply emit no
/// records; an unknown `table` id is rejected when the scanner is built.
///
/// # Examples
///
/// ```rust
/// use orfscan_core::config::{OrfConfig, StrandChoice};
///
/// let config = OrfConfig {
///     min_length: 30,
///     strand: StrandChoice::Plus,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct OrfConfig {
    /// 0-based window start offset into each record.
    ///
    /// **Default**: `0`
    pub start: usize,

    /// 0-based exclusive window end; 0 means end of sequence.
    ///
    /// **Default**: `0`
    pub stop: usize,

    /// Minimum accepted ORF length in bp, inclusive.
    ///
    /// **Default**: `100`
    pub min_length: usize,

    /// Maximum accepted ORF length in bp, inclusive.
    ///
    /// **Default**: `100_000_000`
    pub max_length: usize,

    /// Strand selection.
    ///
    /// **Default**: [`StrandChoice::Both`]
    pub strand: StrandChoice,

    /// Open a virtual start at the frame origin and after every stop,
    /// for records whose true start lies upstream of the sequence.
    ///
    /// **Default**: `false`
    pub ignore_start: bool,

    /// Append per-codon-position GC statistics to each ORF header.
    ///
    /// **Default**: `false`
    pub gc_stats: bool,

    /// NCBI genetic code table id.
    ///
    /// **Default**: `1` (Standard)
    pub table: u8,

    /// Output mode for accepted ORFs.
    ///
    /// **Default**: [`OutputMode::AminoAcid`]
    pub output_mode: OutputMode,

    /// Suppress progress messages on stderr.
    ///
    /// **Default**: `false`
    pub quiet: bool,

    /// Rayon thread pool size; `None` uses all available cores.
    ///
    /// **Default**: `None`
    pub num_threads: Option<usize>,
}

impl Default for OrfConfig {
    fn default() -> Self {
        Self {
            start: 0,
            stop: 0,
            min_length: 100,
            max_length: 100_000_000,
            strand: StrandChoice::Both,
            ignore_start: false,
            gc_stats: false,
            table: 1,
            output_mode: OutputMode::AminoAcid,
            quiet: false,
            num_threads: None,
        }
    }
}
