//! Command line interface of the `histogram` binary.
//!
//! [`Args`] mirrors the classic option set: one `-l/-h/-w` triple per
//! dimension, given in dimension order. Because `-h` is the upper bound,
//! help is only available as `--help`.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::config::{ConfigError, DimensionSpec, HistogramConfig, MAX_DIMENSIONS, OutputFormat};
use crate::error::HistogramError;
use crate::logger::Verbosity;

const LONG_HELP: &str = "\
OUTPUT:
  Text output has one line per bin: the bin midpoint of every dimension
  followed by the count (or relative frequency), tab separated. The last
  dimension varies fastest and a blank line ends every sweep of it, so
  gnuplot reads 2-D histograms directly with `splot ... with pm3d`.

  Raw output (--raw8/--raw16) writes one grayscale sample per bin for 2-D
  histograms, scaled so the fullest bin is white, dimension 0 along the
  x-axis. Convert it with ImageMagick, flipping so bin (0, 0) is at the
  lower left:
    convert -flip -depth 8 -size WxH gray:file.raw file.pgm

EXAMPLES:
  Counts of one column in 20 bins over [0, 1):
    histogram -l 0 -h 1 -w 20 < data.txt

  Relative 2-D frequencies as an 8-bit image:
    histogram -d 2 -r --raw8 -l -1 -h 1 -w 640 -l -1 -h 1 -w 480 < xy.txt > xy.raw";

/// Build a histogram of N-dimensional tuples read from standard input.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "histogram",
    version,
    about,
    disable_help_flag = true,
    after_long_help = LONG_HELP
)]
pub struct Args {
    /// Output relative frequencies (count / (bin volume * tuples read))
    #[arg(short = 'r', long = "relative")]
    pub relative: bool,

    /// Number of dimensions (columns) per tuple
    #[arg(short = 'd', long = "dims", value_name = "DIMS", default_value_t = 1)]
    pub dims: usize,

    /// Lower bound of the next dimension (inclusive)
    #[arg(
        short = 'l',
        long = "low",
        value_name = "LOW",
        action = ArgAction::Append,
        allow_negative_numbers = true
    )]
    pub lows: Vec<f64>,

    /// Upper bound of the next dimension (exclusive)
    #[arg(
        short = 'h',
        long = "high",
        value_name = "HIGH",
        action = ArgAction::Append,
        allow_negative_numbers = true
    )]
    pub highs: Vec<f64>,

    /// Number of bins of the next dimension
    #[arg(short = 'w', long = "bins", value_name = "BINS", action = ArgAction::Append)]
    pub bins: Vec<usize>,

    /// Write an 8-bit raw grayscale image (2-D, relative only)
    #[arg(long)]
    pub raw8: bool,

    /// Write a 16-bit big-endian raw grayscale image (2-D, relative only)
    #[arg(long)]
    pub raw16: bool,

    /// Omit empty outer bins, keeping one empty bin of padding
    #[arg(short = 'o', long = "omit-empty")]
    pub omit_empty: bool,

    /// Only report problems on stderr
    #[arg(short = 'q', long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Also report the output window on stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Read tuples from FILE instead of standard input
    #[arg(short = 'i', long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Write the histogram to FILE instead of standard output
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Load the whole configuration from a JSON file
    #[arg(
        long,
        value_name = "FILE",
        conflicts_with_all = ["relative", "dims", "lows", "highs", "bins", "raw8", "raw16", "omit_empty"]
    )]
    pub config: Option<PathBuf>,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    pub help: Option<bool>,
}

impl Args {
    /// Verbosity selected by `-q`/`-v`, if any.
    pub fn verbosity_override(&self) -> Option<Verbosity> {
        if self.quiet {
            Some(Verbosity::Warning)
        } else if self.verbose {
            Some(Verbosity::Debug)
        } else {
            None
        }
    }

    /// Resolve the arguments into a validated configuration.
    ///
    /// With `--config` the JSON file is authoritative except for verbosity,
    /// which `-q`/`-v` still override.
    pub fn to_config(&self) -> Result<HistogramConfig, HistogramError> {
        let mut config = match &self.config {
            Some(path) => HistogramConfig::from_json_reader(BufReader::new(File::open(path)?))?,
            None => self.config_from_flags()?,
        };
        if let Some(verbosity) = self.verbosity_override() {
            config.verbosity = verbosity;
        }
        Ok(config)
    }

    fn config_from_flags(&self) -> Result<HistogramConfig, ConfigError> {
        if self.dims < 1 || self.dims > MAX_DIMENSIONS {
            return Err(ConfigError::InvalidDimensionCount {
                got: self.dims,
                max: MAX_DIMENSIONS,
            });
        }
        if self.lows.len() != self.dims
            || self.highs.len() != self.dims
            || self.bins.len() != self.dims
        {
            return Err(ConfigError::MismatchedDimensionArgs {
                dims: self.dims,
                lows: self.lows.len(),
                highs: self.highs.len(),
                bins: self.bins.len(),
            });
        }

        let output = match (self.raw8, self.raw16) {
            (true, true) => return Err(ConfigError::ConflictingRawFormats),
            (true, false) => OutputFormat::Raw8,
            (false, true) => OutputFormat::Raw16,
            (false, false) => OutputFormat::Text,
        };

        let dimensions = self
            .lows
            .iter()
            .zip(&self.highs)
            .zip(&self.bins)
            .map(|((&low, &high), &bins)| DimensionSpec::new(low, high, bins))
            .collect();

        HistogramConfig::builder()
            .dimensions(dimensions)
            .relative(self.relative)
            .output(output)
            .trim(self.omit_empty)
            .build()
    }
}

/// Install a stderr `tracing` subscriber matching `verbosity`.
///
/// Does nothing if a global subscriber is already set.
pub fn init_tracing(verbosity: Verbosity) {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(verbosity.level_filter())
        .with_target(false)
        .without_time()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("histogram").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_single_dimension() {
        let config = parse(&["-l", "0", "-h", "10", "-w", "2"]).to_config().unwrap();
        assert_eq!(config.dimensions, vec![DimensionSpec::new(0.0, 10.0, 2)]);
        assert_eq!(config.output, OutputFormat::Text);
        assert_eq!(config.verbosity, Verbosity::Info);
    }

    #[test]
    fn test_triples_in_dimension_order() {
        let config = parse(&[
            "-d", "2", "-r", "--raw16", "-l", "-1", "-h", "1", "-w", "64", "-l", "-2.5", "-h",
            "0", "-w", "32",
        ])
        .to_config()
        .unwrap();
        assert_eq!(
            config.dimensions,
            vec![
                DimensionSpec::new(-1.0, 1.0, 64),
                DimensionSpec::new(-2.5, 0.0, 32),
            ]
        );
        assert!(config.relative);
        assert_eq!(config.output, OutputFormat::Raw16);
    }

    #[test]
    fn test_quiet_and_trim() {
        let config = parse(&["-q", "-o", "-l", "0", "-h", "1", "-w", "4"])
            .to_config()
            .unwrap();
        assert!(config.trim);
        assert_eq!(config.verbosity, Verbosity::Warning);
    }

    #[test]
    fn test_missing_triple() {
        let result = parse(&["-d", "2", "-l", "0", "-h", "1", "-w", "4"]).to_config();
        assert!(matches!(
            result,
            Err(HistogramError::Config(ConfigError::MismatchedDimensionArgs {
                dims: 2,
                lows: 1,
                ..
            }))
        ));
    }

    #[test]
    fn test_both_raw_formats() {
        let result = parse(&[
            "-d", "2", "-r", "--raw8", "--raw16", "-l", "0", "-h", "1", "-w", "2", "-l", "0",
            "-h", "1", "-w", "2",
        ])
        .to_config();
        assert!(matches!(
            result,
            Err(HistogramError::Config(ConfigError::ConflictingRawFormats))
        ));
    }

    #[test]
    fn test_dimension_count_checked_first() {
        let result = parse(&["-d", "0"]).to_config();
        assert!(matches!(
            result,
            Err(HistogramError::Config(ConfigError::InvalidDimensionCount { got: 0, .. }))
        ));
    }

    #[test]
    fn test_config_conflicts_with_flags() {
        let result = Args::try_parse_from(["histogram", "--config", "c.json", "-r"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_positional_arguments_rejected() {
        assert!(Args::try_parse_from(["histogram", "data.txt"]).is_err());
    }

    #[test]
    fn test_missing_config_file_is_io_error() {
        let result = parse(&["--config", "/nonexistent/histogram.json"]).to_config();
        assert!(matches!(result, Err(HistogramError::Io(_))));
    }
}
