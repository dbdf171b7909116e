//! Run orchestration: strand selection, per-record scanning, and the
//! sequential ORF numbering handed to the output stage.

use bio::bio_types::strand::Strand;
use rayon::prelude::*;

use crate::codon::GeneticCode;
use crate::config::OrfConfig;
use crate::results::RecordOrfs;
use crate::scan::{assemble_cds, scan_frames, AssemblyParams};
use crate::sequence::{prepare_window, read_fasta_records, reverse_complement};
use crate::stats::gc_percentage;
use crate::types::{Cds, OrfError};

/// ORF scanner for a fixed configuration and genetic code.
///
/// Construction resolves the genetic code table and configures the thread
/// pool, so every configuration error surfaces before scanning begins.
/// Records are independent: file scans process them in parallel and the
/// shared codon table is read-only.
///
/// # Examples
///
/// ```rust,no_run
/// use orfscan_core::{config::OrfConfig, OrfScanner};
///
/// let scanner = OrfScanner::new(OrfConfig::default())?;
/// let records = scanner.scan_fasta_file("genome.fasta")?;
/// for record in &records {
///     println!("{}: {} ORFs", record.header, record.orfs.len());
/// }
/// # Ok::<(), orfscan_core::types::OrfError>(())
/// ```
#[derive(Debug)]
pub struct OrfScanner {
    /// Configuration for this run
    pub config: OrfConfig,
    code: GeneticCode,
}

impl OrfScanner {
    /// Build a scanner, validating the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`OrfError::UnknownTable`] for an unsupported genetic code
    /// id, or a configuration error if the thread pool cannot be built.
    pub fn new(config: OrfConfig) -> Result<Self, OrfError> {
        let code = GeneticCode::by_id(config.table)?;

        if let Some(num_threads) = config.num_threads {
            rayon::ThreadPoolBuilder::new()
                .num_threads(num_threads)
                .build_global()
                .map_err(|e| {
                    OrfError::Parse(format!("Failed to configure thread pool: {e}"))
                })?;
        }

        Ok(Self { config, code })
    }

    /// The genetic code resolved from the configured table id.
    #[must_use]
    pub fn code(&self) -> &GeneticCode {
        &self.code
    }

    /// Scan one record on the configured strands.
    ///
    /// The record is uppercased and windowed first; a window beyond the
    /// record yields an empty result. Output order is plus-strand frames
    /// 1..3 followed by minus-strand frames 1..3. ORF indices are left at
    /// zero here; file-level scans assign the global numbering.
    #[must_use]
    pub fn scan_sequence(&self, id: &str, description: Option<&str>, seq: &[u8]) -> RecordOrfs {
        let window = prepare_window(seq, self.config.start, self.config.stop);

        let mut orfs = Vec::new();
        if self.config.strand.scans_plus() {
            orfs.extend(self.scan_strand(&window, Strand::Forward));
        }
        if self.config.strand.scans_minus() {
            let rev = reverse_complement(&window);
            orfs.extend(self.scan_strand(&rev, Strand::Reverse));
        }

        if !self.config.quiet {
            eprintln!(
                "{}: {} ORFs in {} bp ({:.1}% GC)",
                id,
                orfs.len(),
                window.len(),
                gc_percentage(&window)
            );
        }

        RecordOrfs {
            header: id.to_string(),
            description: description.map(String::from),
            window_length: window.len(),
            orfs,
        }
    }

    /// Read a FASTA file and scan every record.
    ///
    /// Records are scanned in parallel and returned in input order, with
    /// the sequential ORF counter assigned across all records.
    pub fn scan_fasta_file(&self, path: &str) -> Result<Vec<RecordOrfs>, OrfError> {
        let records = read_fasta_records(path)?;

        let mut results: Vec<RecordOrfs> = records
            .par_iter()
            .map(|(id, description, seq)| {
                self.scan_sequence(id, description.as_deref(), seq)
            })
            .collect();

        let mut counter = 0;
        for record in &mut results {
            for orf in &mut record.orfs {
                counter += 1;
                orf.index = counter;
            }
        }

        Ok(results)
    }

    fn scan_strand(&self, seq: &[u8], strand: Strand) -> Vec<Cds> {
        let params = AssemblyParams {
            min_length: self.config.min_length,
            max_length: self.config.max_length,
            ignore_start: self.config.ignore_start,
        };

        let frames = scan_frames(seq, &self.code);
        let mut orfs = Vec::new();
        for (f, boundaries) in frames.iter().enumerate() {
            orfs.extend(assemble_cds(
                seq,
                boundaries,
                u8::try_from(f + 1).unwrap_or(1),
                strand,
                &params,
            ));
        }
        orfs
    }
}
