use std::fs::File;

use bio::io::fasta;

use crate::types::OrfError;

/// One parsed FASTA record: id, optional description, sequence bytes.
pub type FastaRecord = (String, Option<String>, Vec<u8>);

/// Read all records from a FASTA file using rust-bio.
pub fn read_fasta_records(filename: &str) -> Result<Vec<FastaRecord>, OrfError> {
    let file = File::open(filename)?;
    let reader = fasta::Reader::new(file);
    let mut records = Vec::new();

    for result in reader.records() {
        let record = result.map_err(|e| OrfError::Parse(e.to_string()))?;
        let id = record.id().to_string();
        let description = record.desc().map(String::from);
        let seq = record.seq().to_vec();
        records.push((id, description, seq));
    }

    Ok(records)
}
