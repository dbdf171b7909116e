//! GC-content statistics over extracted coding sequences.
//!
//! Only the four unambiguous nucleotides are counted; ambiguity symbols
//! and the padding of an incomplete final codon contribute to no tally.
//! Every ratio degrades to 0.0 on an empty denominator.

use std::fmt;

/// Overall GC percentage: `100 * (G + C) / (A + T + G + C)`.
#[must_use]
pub fn gc_percentage(seq: &[u8]) -> f64 {
    let mut gc = 0usize;
    let mut at = 0usize;
    for &symbol in seq {
        match symbol {
            b'G' | b'C' => gc += 1,
            b'A' | b'T' => at += 1,
            _ => {}
        }
    }
    if gc + at == 0 {
        0.0
    } else {
        gc as f64 * 100.0 / (gc + at) as f64
    }
}

/// GC percentages per codon position plus the aggregate over all three.
///
/// Renders as the header fragment `"{all:.1}%, {p0:.1}%, {p1:.1}%, {p2:.1}%"`.
#[derive(Debug, Clone, PartialEq)]
pub struct GcStats {
    /// Aggregate GC% across all three codon positions
    pub overall: f64,
    /// GC% at codon positions 0, 1, 2
    pub by_position: [f64; 3],
}

impl fmt::Display for GcStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1}%, {:.1}%, {:.1}%, {:.1}%",
            self.overall, self.by_position[0], self.by_position[1], self.by_position[2]
        )
    }
}

/// Tally A/T/G/C counts at each codon position of `seq` and derive the
/// per-position and aggregate GC percentages.
#[must_use]
pub fn gc_by_codon_position(seq: &[u8]) -> GcStats {
    let mut gc = [0usize; 3];
    let mut total = [0usize; 3];

    for codon in seq.chunks(3) {
        for (pos, &symbol) in codon.iter().enumerate() {
            match symbol {
                b'G' | b'C' => {
                    gc[pos] += 1;
                    total[pos] += 1;
                }
                b'A' | b'T' => total[pos] += 1,
                _ => {}
            }
        }
    }

    let ratio = |gc: usize, n: usize| {
        if n == 0 {
            0.0
        } else {
            gc as f64 * 100.0 / n as f64
        }
    };

    GcStats {
        overall: ratio(gc.iter().sum(), total.iter().sum()),
        by_position: [
            ratio(gc[0], total[0]),
            ratio(gc[1], total[1]),
            ratio(gc[2], total[2]),
        ],
    }
}
