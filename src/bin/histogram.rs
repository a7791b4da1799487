//! `histogram`: bin N-dimensional tuples from a stream.
//!
//! Examples:
//! - `histogram -l 0 -h 1 -w 20 < data.txt`
//! - `histogram -d 2 -r --raw8 -l 0 -h 1 -w 640 -l 0 -h 1 -w 480 -i xy.txt --output xy.raw`
//! - `histogram --config run.json -q < data.txt`

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::process::ExitCode;

use clap::Parser;

use histogram_nd::cli::{Args, init_tracing};
use histogram_nd::{HistogramError, run};

fn main() -> ExitCode {
    let args = Args::parse();

    match execute(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("histogram: {err}");
            ExitCode::FAILURE
        }
    }
}

fn execute(args: &Args) -> Result<(), HistogramError> {
    let config = args.to_config()?;
    init_tracing(config.verbosity);

    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(io::stdin().lock()),
    };
    let sink: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout().lock()),
    };
    let mut writer = BufWriter::new(sink);

    run(&config, reader, &mut writer)?;
    Ok(())
}
