mod common;
use crate::common::{run_orfscan, run_orfscan_failing};

#[test]
fn amino_acid_output_for_simple_orf() {
    let out = run_orfscan(
        ">test\nATGAAATAG\n",
        &["--minlength", "1", "-s", "plus"],
    );
    assert_eq!(out, ">orf_1:test:1:1:9\nMK*\n");
}

#[test]
fn nucleotide_output_for_simple_orf() {
    let out = run_orfscan(
        ">test\nATGAAATAG\n",
        &["--minlength", "1", "-s", "plus", "-f", "nt"],
    );
    assert_eq!(out, ">orf_1:test:1:1:9\nATGAAATAG\n");
}

#[test]
fn position_output_for_simple_orf() {
    let out = run_orfscan(
        ">test\nATGAAATAG\n",
        &["--minlength", "1", "-s", "plus", "-f", "pos"],
    );
    assert_eq!(out, "orf_1:test:1:1:9\n");
}

#[test]
fn default_minimum_length_rejects_short_orfs() {
    // 9 bp ORF against the default 100 bp minimum.
    let out = run_orfscan(">test\nATGAAATAG\n", &["-s", "plus"]);
    assert!(out.is_empty());
}

#[test]
fn explicit_minimum_length_rejects() {
    let out = run_orfscan(
        ">test\nATGAAATAG\n",
        &["--minlength", "12", "-s", "plus", "-f", "pos"],
    );
    assert!(out.is_empty());
}

#[test]
fn counter_runs_across_records() {
    let out = run_orfscan(
        ">a\nATGAAATAG\n>b\nATGCCCTAA\n",
        &["--minlength", "1", "-s", "plus", "-f", "pos"],
    );
    assert_eq!(out, "orf_1:a:1:1:9\norf_2:b:1:1:9\n");
}

#[test]
fn window_restricts_the_scan() {
    let out = run_orfscan(
        ">test\nCCCATGAAATAGCCC\n",
        &[
            "--minlength", "1", "-s", "plus", "-f", "pos", "--start", "3", "--stop", "12",
        ],
    );
    assert_eq!(out, "orf_1:test:1:1:9\n");
}

#[test]
fn unknown_table_is_rejected_before_scanning() {
    let err = run_orfscan_failing(">test\nATGAAATAG\n", &["-g", "99"]);
    assert!(err.contains("Unknown genetic code table: 99"));
}

#[test]
fn invalid_strand_is_rejected() {
    let err = run_orfscan_failing(">test\nATGAAATAG\n", &["-s", "forward"]);
    assert!(err.contains("Invalid strand selection"));
}

#[test]
fn non_numeric_bound_is_rejected() {
    let err = run_orfscan_failing(">test\nATGAAATAG\n", &["--minlength", "many"]);
    assert!(err.contains("Invalid numeric value"));
}
