//! Raw grayscale rendering of 2-D histograms.
//!
//! One sample per bin, dimension 0 fastest, so dimension 0 is the image
//! x-axis. Samples are scaled so the fullest bin is white. To view:
//! ```text
//! convert -flip -depth 8 -size <w0>x<w1> gray:out.raw out.pgm
//! ```
//! `-flip` puts bin (0, 0) in the lower left corner.

use std::io::{self, Write};

use crate::config::OutputFormat;
use crate::histogram::{Histogram, Odometer};

/// Scale a count into `[0, full_scale]`, rounding to nearest.
///
/// An all-empty histogram (`max == 0`) scales every bin to 0.
#[inline]
pub fn scale_sample(count: u64, max: u64, full_scale: f64) -> f64 {
    if max == 0 {
        return 0.0;
    }
    (count as f64 / max as f64 * full_scale).round()
}

/// Write every bin as one raw sample scaled against `max`.
///
/// Writes `total_bins * bytes_per_sample` bytes. `format` must be a raw
/// format; text yields no output.
pub fn write_raw<W: Write>(
    histogram: &Histogram,
    format: OutputFormat,
    max: u64,
    writer: &mut W,
) -> io::Result<()> {
    let (Some(bytes_per_sample), Some(full_scale)) =
        (format.bytes_per_sample(), format.sample_max())
    else {
        return Ok(());
    };

    let mut samples = Vec::with_capacity(histogram.layout().total_bins() * bytes_per_sample);
    for pos in Odometer::new(histogram.layout().bin_counts()).positions() {
        let sample = scale_sample(histogram.get(&pos), max, full_scale);
        match format {
            OutputFormat::Raw8 => samples.push(sample as u8),
            OutputFormat::Raw16 => samples.extend_from_slice(&(sample as u16).to_be_bytes()),
            OutputFormat::Text => {}
        }
    }

    writer.write_all(&samples)
}
