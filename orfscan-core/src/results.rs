use crate::types::Cds;

/// ORF scan results for one sequence record.
///
/// `orfs` holds the accepted CDS records in deterministic order: plus
/// strand frames 1..3, then minus strand frames 1..3. Coordinates inside
/// each [`Cds`] are expressed on the scanned strand; the output stage maps
/// minus-strand hits back to plus-strand space using `window_length`.
#[derive(Debug, Clone)]
pub struct RecordOrfs {
    /// Sequence identifier from the FASTA header
    pub header: String,
    /// Full description after the identifier, if present
    pub description: Option<String>,
    /// Length of the scanned window in bp
    pub window_length: usize,
    /// Accepted coding sequences
    pub orfs: Vec<Cds>,
}
