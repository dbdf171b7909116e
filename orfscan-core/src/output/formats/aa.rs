use std::io::Write;

use crate::codon::GeneticCode;
use crate::output::{orf_header, write_fasta};
use crate::results::RecordOrfs;
use crate::types::OrfError;

/// Write each ORF as a translated amino-acid FASTA entry.
pub fn write_aa_format<W: Write>(
    writer: &mut W,
    record: &RecordOrfs,
    code: &GeneticCode,
    gc_stats: bool,
) -> Result<(), OrfError> {
    for orf in &record.orfs {
        let protein = code.translate(&orf.sequence);
        write_fasta(writer, &orf_header(record, orf, gc_stats), &protein)?;
    }
    Ok(())
}
