//! Rendering of a finished histogram.
//!
//! - [`text`]: midpoint/value lines in blank-line separated blocks
//! - [`raw`]: 8 or 16 bit grayscale samples for 2-D histograms

pub mod raw;
pub mod text;

pub use raw::{scale_sample, write_raw};
pub use text::{format_scientific, write_text};

use std::io::{self, Write};

use crate::config::HistogramConfig;
use crate::histogram::Histogram;
use crate::logger::HistogramLogger;

/// Render `histogram` in the format selected by `config`.
pub fn write_histogram<W: Write>(
    config: &HistogramConfig,
    histogram: &Histogram,
    logger: &HistogramLogger,
    writer: &mut W,
) -> io::Result<()> {
    if config.output.is_raw() {
        let max = histogram.max_count();
        logger.log_max_value(max);
        write_raw(histogram, config.output, max, writer)
    } else {
        let window = histogram.output_window(config.trim);
        logger.log_window(&window);
        write_text(config, histogram, &window, writer)
    }
}
