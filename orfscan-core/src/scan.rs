//! Frame scanning and CDS assembly.
//!
//! [`scan_frames`] walks one strand of a sequence in all three reading
//! frames and records every start/stop codon boundary. [`assemble_cds`]
//! then runs a single left-to-right pass over one frame's boundary list,
//! pairing starts with subsequent stops under the configured length and
//! ignore-start policy, and extracting the accepted coding sequences.

use bio::bio_types::strand::Strand;

use crate::codon::GeneticCode;
use crate::types::{BoundaryKind, Cds, CodonBoundary, CodonKind, SENTINEL_CODON};

/// Length bounds and start policy for one assembly pass.
#[derive(Debug, Clone)]
pub struct AssemblyParams {
    /// Minimum accepted CDS length in bp, inclusive
    pub min_length: usize,
    /// Maximum accepted CDS length in bp, inclusive
    pub max_length: usize,
    /// Treat the frame origin (and each position after a stop) as an
    /// implicit start, for 5'-truncated records
    pub ignore_start: bool,
}

/// Locate start/stop boundaries in all three reading frames of `seq`.
///
/// For frame `f` only complete codons are classified; a trailing partial
/// codon is never examined. Codons that are neither start nor stop are
/// skipped, not stored. Every frame's list ends with the terminal sentinel
/// `(position = seq.len(), Stop, "XXX")`, which guarantees an ORF still
/// open at sequence end is closed rather than dropped. An empty sequence
/// yields three lists holding only the sentinel.
#[must_use]
pub fn scan_frames(seq: &[u8], code: &GeneticCode) -> [Vec<CodonBoundary>; 3] {
    let n = seq.len();
    std::array::from_fn(|frame| {
        let mut boundaries = Vec::new();
        let mut i = frame;
        while i + 3 <= n {
            let codon = &seq[i..i + 3];
            let kind = match code.classify(codon) {
                CodonKind::Start => Some(BoundaryKind::Start),
                CodonKind::Stop => Some(BoundaryKind::Stop),
                CodonKind::Neither => None,
            };
            if let Some(kind) = kind {
                boundaries.push(CodonBoundary {
                    position: i + 1,
                    kind,
                    codon: [codon[0], codon[1], codon[2]],
                });
            }
            i += 3;
        }
        boundaries.push(CodonBoundary {
            position: n,
            kind: BoundaryKind::Stop,
            codon: SENTINEL_CODON,
        });
        boundaries
    })
}

/// Largest stop position at or below the sentinel that keeps the length
/// from `start` a positive multiple of 3. `None` when less than one full
/// codon fits before the artificial end.
fn truncated_stop(start: usize, sentinel_position: usize) -> Option<usize> {
    if sentinel_position < start {
        return None;
    }
    let span = sentinel_position - start + 1;
    let codons = span / 3;
    if codons == 0 {
        None
    } else {
        Some(start + codons * 3 - 1)
    }
}

/// Assemble the CDS records for one frame's boundary list.
///
/// `frame` is the 1-based frame number; the emitted frame tag is signed by
/// `strand`. The pass maintains a single open-ORF cursor: the first start
/// of a run wins, internal starts are ignored, and a stop with no preceding
/// start is skipped. With `ignore_start` the cursor opens at the frame
/// origin and reopens immediately after every stop, so translation never
/// requires an explicit start codon.
///
/// Sentinel stops truncate to the last full codon before the sequence end;
/// length bounds are checked against the final (truncated, frame-shifted)
/// length, so `min_length <= length <= max_length` and `length % 3 == 0`
/// hold for every emitted record. Degenerate bounds
/// (`min_length > max_length`) emit nothing.
#[must_use]
pub fn assemble_cds(
    seq: &[u8],
    boundaries: &[CodonBoundary],
    frame: u8,
    strand: Strand,
    params: &AssemblyParams,
) -> Vec<Cds> {
    let signed_frame = match strand {
        Strand::Reverse => -(frame as i8),
        _ => frame as i8,
    };

    let mut cds = Vec::new();
    // 0 means no ORF open; ignore_start opens a virtual ORF at position 1.
    let mut start_site: usize = usize::from(params.ignore_start);

    for boundary in boundaries {
        match boundary.kind {
            BoundaryKind::Start => {
                if start_site == 0 {
                    start_site = boundary.position;
                }
            }
            BoundaryKind::Stop => {
                if start_site == 0 {
                    continue;
                }
                let raw_stop = boundary.position + 2;

                // The virtual start at position 1 is frame-agnostic; shift
                // it onto this frame's first codon before reporting.
                let start = if params.ignore_start && start_site == 1 {
                    frame as usize
                } else {
                    start_site
                };

                let stop = if boundary.codon == SENTINEL_CODON {
                    truncated_stop(start, boundary.position)
                } else {
                    Some(raw_stop)
                };

                if let Some(stop) = stop {
                    let length = stop - start + 1;
                    if params.min_length <= length && length <= params.max_length {
                        cds.push(Cds {
                            index: 0,
                            start,
                            stop,
                            length,
                            sequence: seq[start - 1..stop].to_vec(),
                            frame: signed_frame,
                        });
                    }
                }

                start_site = if params.ignore_start { raw_stop + 1 } else { 0 };
            }
        }
    }

    cds
}
