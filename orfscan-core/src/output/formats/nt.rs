use std::io::Write;

use crate::output::{orf_header, write_fasta};
use crate::results::RecordOrfs;
use crate::types::OrfError;

/// Write each ORF as a raw nucleotide FASTA entry.
pub fn write_nt_format<W: Write>(
    writer: &mut W,
    record: &RecordOrfs,
    gc_stats: bool,
) -> Result<(), OrfError> {
    for orf in &record.orfs {
        let seq = String::from_utf8_lossy(&orf.sequence);
        write_fasta(writer, &orf_header(record, orf, gc_stats), &seq)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cds;

    #[test]
    fn emits_nucleotide_subsequence() {
        let record = RecordOrfs {
            header: "t".to_string(),
            description: None,
            window_length: 9,
            orfs: vec![Cds {
                index: 3,
                start: 1,
                stop: 9,
                length: 9,
                sequence: b"ATGAAATAG".to_vec(),
                frame: 1,
            }],
        };
        let mut buffer = Vec::new();
        write_nt_format(&mut buffer, &record, false).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            ">orf_3:t:1:1:9\nATGAAATAG\n"
        );
    }
}
