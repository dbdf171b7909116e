//! Output formatting for accepted ORFs.
//!
//! One writer per output mode: translated FASTA (`aa`), nucleotide FASTA
//! (`nt`), and header-only positions (`pos`). All three share the header
//! layout `orf_{counter}:{record}:{frame}:{start}:{stop}`, with an optional
//! GC-statistics field appended, and report minus-strand coordinates in
//! plus-strand space.

use std::io::Write;

use crate::codon::GeneticCode;
use crate::config::OutputMode;
use crate::results::RecordOrfs;
use crate::stats::gc_by_codon_position;
use crate::types::{Cds, OrfError};

mod formats {
    pub mod aa;
    pub mod nt;
    pub mod pos;
}

use formats::{aa::write_aa_format, nt::write_nt_format, pos::write_pos_format};

/// Column width for FASTA sequence wrapping.
pub const FASTA_LINE_WIDTH: usize = 60;

/// Write one record's ORFs in the requested output mode.
///
/// # Errors
///
/// Returns [`OrfError::Io`] when the underlying writer fails.
pub fn write_record<W: Write>(
    writer: &mut W,
    record: &RecordOrfs,
    mode: OutputMode,
    code: &GeneticCode,
    gc_stats: bool,
) -> Result<(), OrfError> {
    match mode {
        OutputMode::AminoAcid => write_aa_format(writer, record, code, gc_stats),
        OutputMode::Nucleotide => write_nt_format(writer, record, gc_stats),
        OutputMode::Positions => write_pos_format(writer, record, gc_stats),
    }
}

/// Build the header for one ORF.
///
/// Minus-strand coordinates are mapped back onto the plus strand of the
/// scanned window: `(n - stop + 1, n - start + 1)` for window length `n`.
pub(crate) fn orf_header(record: &RecordOrfs, orf: &Cds, gc_stats: bool) -> String {
    let (start, stop) = if orf.frame < 0 {
        (
            record.window_length - orf.stop + 1,
            record.window_length - orf.start + 1,
        )
    } else {
        (orf.start, orf.stop)
    };
    let mut head = format!(
        "orf_{}:{}:{}:{}:{}",
        orf.index, record.header, orf.frame, start, stop
    );
    if gc_stats {
        head = format!("{}:{}", head, gc_by_codon_position(&orf.sequence));
    }
    head
}

/// Write one FASTA entry, wrapping the sequence at [`FASTA_LINE_WIDTH`].
pub(crate) fn write_fasta<W: Write>(
    writer: &mut W,
    header: &str,
    seq: &str,
) -> Result<(), OrfError> {
    writeln!(writer, ">{header}")?;
    for line in seq.as_bytes().chunks(FASTA_LINE_WIDTH) {
        writer.write_all(line)?;
        writeln!(writer)?;
    }
    Ok(())
}
