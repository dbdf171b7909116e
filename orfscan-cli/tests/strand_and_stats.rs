mod common;
use crate::common::run_orfscan;

#[test]
fn minus_strand_coordinates_are_reported_in_plus_space() {
    // Reverse complement of CCCTATTTCAT is ATGAAATAGGG: the minus-strand
    // ORF spans scan positions 1..9, reported as 3..11 on the plus strand.
    let out = run_orfscan(
        ">test\nCCCTATTTCAT\n",
        &["--minlength", "1", "-s", "minus", "-f", "pos"],
    );
    assert_eq!(out, "orf_1:test:-1:3:11\n");
}

#[test]
fn both_strands_list_plus_frames_first() {
    // ATGAAATAGCTATTTCAT is its own reverse complement, so each strand
    // contributes the same frame-1 ORF.
    let out = run_orfscan(
        ">pal\nATGAAATAGCTATTTCAT\n",
        &["--minlength", "1", "-f", "pos"],
    );
    assert_eq!(out, "orf_1:pal:1:1:9\norf_2:pal:-1:10:18\n");
}

#[test]
fn gc_statistics_are_appended_to_headers() {
    let out = run_orfscan(
        ">test\nATGAAATAG\n",
        &["--minlength", "1", "-s", "plus", "-f", "pos", "--gc"],
    );
    // ATG AAA TAG: GC only at codon position 2 (G, G).
    assert_eq!(out, "orf_1:test:1:1:9:22.2%, 0.0%, 0.0%, 66.7%\n");
}

#[test]
fn no_start_scans_without_a_start_codon() {
    let out = run_orfscan(
        ">test\nAAAAAATAG\n",
        &["--minlength", "1", "-s", "plus", "-f", "pos", "-n"],
    );
    assert_eq!(out, "orf_1:test:1:1:9\n");
}

#[test]
fn bacterial_table_accepts_gtg_starts() {
    let fasta = ">test\nGTGAAATAG\n";
    let standard = run_orfscan(fasta, &["--minlength", "1", "-s", "plus", "-f", "pos"]);
    assert!(standard.is_empty());
    let bacterial = run_orfscan(
        fasta,
        &["--minlength", "1", "-s", "plus", "-f", "pos", "-g", "11"],
    );
    assert_eq!(bacterial, "orf_1:test:1:1:9\n");
}

#[test]
fn sentinel_closes_orf_at_sequence_end() {
    // Start with no stop codon: the artificial end closes the ORF and the
    // trailing partial codon is dropped.
    let out = run_orfscan(
        ">test\nATGAAAAAAAA\n",
        &["--minlength", "1", "-s", "plus", "-f", "nt"],
    );
    assert_eq!(out, ">orf_1:test:1:1:9\nATGAAAAAA\n");
}
