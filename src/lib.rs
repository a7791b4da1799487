//! histogram-nd: N-dimensional histograms of numeric tuple streams.
//!
//! Tuples are read one per line, counted into equal-width bins over a
//! configured `[low, high)` range per dimension, and rendered either as
//! gnuplot-friendly text or, for 2-D data, as a raw grayscale image.
//!
//! # Key Types
//!
//! - [`HistogramConfig`] / [`DimensionSpec`] - Validated run configuration
//! - [`Histogram`] - Binning engine and counters
//! - [`Odometer`] - Ordered enumeration of bin tuples
//! - [`HistogramLogger`] / [`Verbosity`] - Diagnostic channel
//!
//! # Example
//!
//! ```
//! use histogram_nd::{run, DimensionSpec, HistogramConfig, Verbosity};
//!
//! let config = HistogramConfig::builder()
//!     .dimensions(vec![DimensionSpec::new(0.0, 10.0, 2)])
//!     .verbosity(Verbosity::Silent)
//!     .build()
//!     .unwrap();
//!
//! let mut out = Vec::new();
//! run(&config, "1\n1\n6\n6\n6\n".as_bytes(), &mut out).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "2.500000\t2\n7.500000\t3\n\n");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod histogram;
pub mod import;
pub mod logger;
pub mod output;

use std::io::{BufRead, Write};

// =============================================================================
// Convenience Re-exports
// =============================================================================

pub use config::{ConfigError, DimensionSpec, HistogramConfig, MAX_DIMENSIONS, OutputFormat};
pub use error::HistogramError;
pub use histogram::{BinLayout, CarryOrder, Histogram, Insert, Odometer, SampleStats, Window};
pub use import::{ImportEnd, import};
pub use logger::{HistogramLogger, Verbosity};
pub use output::write_histogram;

// =============================================================================
// Pipeline
// =============================================================================

/// Result of a successful [`run`].
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// The filled histogram.
    pub histogram: Histogram,
    /// Whether import consumed all input or stopped at a malformed line.
    pub end: ImportEnd,
}

/// Import every tuple from `reader` and write the rendered histogram to `writer`.
///
/// The two phases are strictly sequential: nothing is written before the
/// input is exhausted (or a malformed line ends it).
///
/// # Errors
///
/// - [`HistogramError::Io`] if reading or writing fails
/// - [`HistogramError::NoInputData`] if no tuple fell inside the configured
///   ranges; nothing is written in that case
pub fn run<R: BufRead, W: Write>(
    config: &HistogramConfig,
    reader: R,
    writer: &mut W,
) -> Result<RunOutcome, HistogramError> {
    let logger = HistogramLogger::new(config.verbosity);
    logger.log_config(config);

    let mut histogram = Histogram::new(config)?;
    let end = import(reader, &mut histogram, &logger)?;

    let stats = histogram.stats();
    debug_assert_eq!(histogram.counts().total(), stats.accepted());
    logger.log_import_summary(stats);
    if stats.accepted() == 0 {
        return Err(HistogramError::NoInputData {
            read: stats.read,
            rejected: stats.rejected,
        });
    }

    write_histogram(config, &histogram, &logger, writer)?;
    writer.flush()?;

    Ok(RunOutcome { histogram, end })
}
