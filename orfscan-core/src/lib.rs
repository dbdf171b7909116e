//! # Orfscan - Open Reading Frame Scanner
//!
//! Locates candidate protein-coding regions (open reading frames, ORFs) in
//! nucleotide sequences read from FASTA records. Each record is scanned on
//! both strands in all three reading-frame offsets; start/stop codon
//! boundaries are identified against a configurable genetic-code table and
//! the bounded subsequences satisfying the length constraints are emitted
//! as translated or raw nucleotide output with positional metadata and
//! optional GC-content statistics.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use orfscan_core::{config::OrfConfig, OrfScanner};
//!
//! let scanner = OrfScanner::new(OrfConfig::default())?;
//! let records = scanner.scan_fasta_file("sequences.fasta")?;
//!
//! let total: usize = records.iter().map(|r| r.orfs.len()).sum();
//! println!("Found {total} ORFs");
//! # Ok::<(), orfscan_core::types::OrfError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`config`]: Immutable run configuration
//! - [`codon`]: Genetic code tables and ambiguity-tolerant classification
//! - [`sequence`]: FASTA reading, windowing, reverse complement
//! - [`scan`]: Frame scanning and CDS assembly (the core algorithm)
//! - [`stats`]: GC-content statistics
//! - [`engine`]: Strand orchestration and parallel per-record scanning
//! - [`results`]: Per-record scan results
//! - [`output`]: FASTA/positional writers
//! - [`types`]: Shared data types and the error enum
//!
//! ## Error Handling
//!
//! Fallible operations return [`Result<T, OrfError>`](types::OrfError).
//! Configuration problems (unknown table id, bad strand string) surface
//! before scanning begins; unresolvable codons and length-bound rejections
//! are handled by fallback and exclusion, never as errors.

pub mod codon;
pub mod config;
pub mod engine;
pub mod output;
pub mod results;
pub mod scan;
pub mod sequence;
pub mod stats;
pub mod types;

pub use engine::OrfScanner;
