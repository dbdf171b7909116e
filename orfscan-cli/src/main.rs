//! # Orfscan CLI - Command-Line ORF Scanner
//!
//! ## Usage
//!
//! ```bash
//! # Translated ORFs from both strands, at least 100 bp
//! orfscan -i genome.fasta
//!
//! # Nucleotide output, plus strand only, short ORFs allowed
//! orfscan -i genome.fasta -f nt -s plus --minlength 30
//!
//! # Positions with GC statistics, bacterial code
//! orfscan -i contigs.fasta -f pos --gc -g 11
//! ```
//!
//! ## Options
//!
//! - `-i, --input <FILE>`: Input FASTA file (required)
//! - `-o, --output <FILE>`: Output file (default: stdout)
//! - `-f, --format <FORMAT>`: Output mode: aa, nt, pos (default: aa)
//! - `-s, --strand <STRAND>`: Strand to analyse: both, plus, minus (default: both)
//! - `--start <N>`: Start position in sequence (default: 0)
//! - `--stop <N>`: Stop position in sequence, 0 = end (default: 0)
//! - `--minlength <N>`: Minimum ORF length in bp (default: 100)
//! - `--maxlength <N>`: Maximum ORF length in bp (default: 100000000)
//! - `-n, --no-start`: Ignore start codons (5'-truncated records)
//! - `--gc`: Append GC statistics to each ORF header
//! - `-g, --table <ID>`: Genetic code table (default: 1)
//! - `-t, --threads <N>`: Worker threads (default: all cores)
//! - `-q, --quiet`: Suppress progress messages

use std::fs::File;
use std::io::{self, BufWriter, Write};

use clap::{Arg, ArgAction, Command};
use orfscan_core::config::{OrfConfig, OutputMode, StrandChoice};
use orfscan_core::output::write_record;
use orfscan_core::OrfScanner;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("orfscan")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Find open reading frames in FASTA sequence records")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .required(true)
                .help("Input FASTA file"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Output file (default: stdout)"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("FORMAT")
                .help("Output mode: aa, nt, pos")
                .default_value("aa"),
        )
        .arg(
            Arg::new("strand")
                .short('s')
                .long("strand")
                .value_name("STRAND")
                .help("Strand to analyse: both, plus, minus")
                .default_value("both"),
        )
        .arg(
            Arg::new("start")
                .long("start")
                .value_name("N")
                .help("Start position in sequence")
                .default_value("0"),
        )
        .arg(
            Arg::new("stop")
                .long("stop")
                .value_name("N")
                .help("Stop position in sequence (0 = end of sequence)")
                .default_value("0"),
        )
        .arg(
            Arg::new("minlength")
                .long("minlength")
                .value_name("N")
                .help("Minimum ORF length in bp")
                .default_value("100"),
        )
        .arg(
            Arg::new("maxlength")
                .long("maxlength")
                .value_name("N")
                .help("Maximum ORF length in bp")
                .default_value("100000000"),
        )
        .arg(
            Arg::new("no-start")
                .short('n')
                .long("no-start")
                .action(ArgAction::SetTrue)
                .help("Ignore start codons (5'-truncated records)"),
        )
        .arg(
            Arg::new("gc")
                .long("gc")
                .action(ArgAction::SetTrue)
                .help("Append GC statistics to each ORF header"),
        )
        .arg(
            Arg::new("table")
                .short('g')
                .long("table")
                .value_name("ID")
                .help("Genetic code table")
                .default_value("1"),
        )
        .arg(
            Arg::new("threads")
                .short('t')
                .long("threads")
                .value_name("N")
                .help("Worker threads (default: all cores)"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Quiet mode"),
        )
        .get_matches();

    let parse_usize = |name: &str| -> Result<usize, Box<dyn std::error::Error>> {
        matches
            .get_one::<String>(name)
            .unwrap()
            .parse()
            .map_err(|_| format!("Invalid numeric value for --{name}").into())
    };

    let config = OrfConfig {
        start: parse_usize("start")?,
        stop: parse_usize("stop")?,
        min_length: parse_usize("minlength")?,
        max_length: parse_usize("maxlength")?,
        strand: matches
            .get_one::<String>("strand")
            .unwrap()
            .parse::<StrandChoice>()?,
        ignore_start: matches.get_flag("no-start"),
        gc_stats: matches.get_flag("gc"),
        table: matches
            .get_one::<String>("table")
            .unwrap()
            .parse()
            .map_err(|_| "Invalid genetic code table number")?,
        output_mode: matches
            .get_one::<String>("format")
            .unwrap()
            .parse::<OutputMode>()?,
        quiet: matches.get_flag("quiet"),
        num_threads: matches
            .get_one::<String>("threads")
            .map(|s| s.parse())
            .transpose()
            .map_err(|_| "Invalid thread count")?,
    };

    let scanner = OrfScanner::new(config)?;
    let input = matches.get_one::<String>("input").unwrap();
    let results = scanner.scan_fasta_file(input)?;

    let mut writer: Box<dyn Write> = if let Some(output_file) = matches.get_one::<String>("output")
    {
        Box::new(BufWriter::new(File::create(output_file)?))
    } else {
        Box::new(BufWriter::new(io::stdout()))
    };

    for record in &results {
        write_record(
            &mut writer,
            record,
            scanner.config.output_mode,
            scanner.code(),
            scanner.config.gc_stats,
        )?;
    }
    writer.flush()?;

    if !scanner.config.quiet {
        eprintln!(
            "Scan complete! Found {} ORFs in {} sequences.",
            results.iter().map(|r| r.orfs.len()).sum::<usize>(),
            results.len()
        );
    }

    Ok(())
}
