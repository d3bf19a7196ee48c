//! Merge delimited files sharing a header into one CSV.
//!
//! ```bash
//! record-merger --files input1 input2 input3 --sort FavoriteColor:asc LastName:asc --output merged.csv
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{ArgAction, Parser};
use log::LevelFilter;
use regex::Regex;
use simple_logger::SimpleLogger;

use record_merger::merge::Merge;

/// Merges records
#[derive(Parser, Debug)]
#[command(name = "record-merger", version)]
struct Args {
    /// Input files, each starting with the same header line
    #[arg(long = "files", visible_alias = "input", required = true, num_args = 1..)]
    files: Vec<PathBuf>,

    /// Sort directives, column[:asc|desc], at most two
    #[arg(long, num_args = 1..)]
    sort: Vec<String>,

    /// Output file, the CSV is written to STDOUT when omitted
    #[arg(long)]
    output: Option<PathBuf>,

    /// Skip data lines matching this regex
    #[arg(long)]
    ignore_lines: Option<String>,

    /// Log progress to STDERR, repeat for more detail
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn run(args: Args) -> Result<(), anyhow::Error> {
    let mut merge = Merge::new(args.files);
    merge.with_sort(args.sort);
    if let Some(output) = args.output {
        merge.with_output(output);
    }
    if let Some(pattern) = args.ignore_lines {
        let r = Regex::new(&pattern).with_context(|| format!("--ignore-lines {pattern}"))?;
        merge.with_ignore_lines(r);
    }
    merge.merge()
}

fn main() -> ExitCode {
    let args = Args::parse();
    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    if let Err(e) = SimpleLogger::new().with_level(level).init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
