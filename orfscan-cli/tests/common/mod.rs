#![allow(dead_code)]

use std::io::Write;

use assert_cmd::Command;
use tempfile::NamedTempFile;

/// Write FASTA content to a temporary file for one test.
pub fn fasta_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

/// Run the orfscan binary quietly over `fasta` with extra arguments,
/// asserting success and returning stdout.
pub fn run_orfscan(fasta: &str, args: &[&str]) -> String {
    let file = fasta_file(fasta);
    let mut cmd = Command::cargo_bin("orfscan").unwrap();
    cmd.arg("-i").arg(file.path()).arg("-q").args(args);
    let assert = cmd.assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

/// Run the orfscan binary expecting failure, returning stderr.
pub fn run_orfscan_failing(fasta: &str, args: &[&str]) -> String {
    let file = fasta_file(fasta);
    let mut cmd = Command::cargo_bin("orfscan").unwrap();
    cmd.arg("-i").arg(file.path()).arg("-q").args(args);
    let assert = cmd.assert().failure();
    String::from_utf8(assert.get_output().stderr.clone()).unwrap()
}
