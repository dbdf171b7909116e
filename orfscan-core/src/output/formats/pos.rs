use std::io::Write;

use crate::output::orf_header;
use crate::results::RecordOrfs;
use crate::types::OrfError;

/// Write each ORF as a bare positional header line.
pub fn write_pos_format<W: Write>(
    writer: &mut W,
    record: &RecordOrfs,
    gc_stats: bool,
) -> Result<(), OrfError> {
    for orf in &record.orfs {
        writeln!(writer, "{}", orf_header(record, orf, gc_stats))?;
    }
    Ok(())
}
