//! Text rendering: one line per bin, gnuplot-style blocks.
//!
//! Each line holds the bin midpoint of every dimension followed by the bin
//! value, tab separated:
//! ```text
//! <mid d0>\t<mid d1>\t...\t<count or relative frequency>
//! ```
//! The last dimension varies fastest. A blank line follows every complete
//! sweep of the last dimension, which gnuplot reads as a new data block.

use std::io::{self, Write};

use crate::config::HistogramConfig;
use crate::histogram::{CarryOrder, Histogram, Odometer, Window};

/// Write the bins inside `window` as text lines.
pub fn write_text<W: Write>(
    config: &HistogramConfig,
    histogram: &Histogram,
    window: &Window,
    writer: &mut W,
) -> io::Result<()> {
    let axes = histogram.binner().axes();
    // Relative frequencies are normalised by every tuple read, rejected ones included
    let normaliser = config.bin_volume() * histogram.stats().read as f64;

    let mut odometer = Odometer::over(window, CarryOrder::LastFastest);
    loop {
        let pos = odometer.position();
        for (axis, &bin) in axes.iter().zip(pos) {
            write!(writer, "{:.6}\t", axis.bin_to_midpoint(bin))?;
        }

        let count = histogram.get(pos);
        if config.relative {
            writeln!(writer, "{}", format_scientific(count as f64 / normaliser))?;
        } else {
            writeln!(writer, "{}", count)?;
        }

        let exhausted = odometer.advance();
        if odometer.wrapped() > 0 {
            writeln!(writer)?;
        }
        if exhausted {
            return Ok(());
        }
    }
}

/// Format like C's `%e`: six fraction digits and a signed, two-digit exponent.
///
/// ```
/// use histogram_nd::output::format_scientific;
///
/// assert_eq!(format_scientific(0.123456), "1.234560e-01");
/// assert_eq!(format_scientific(0.0), "0.000000e+00");
/// assert_eq!(format_scientific(1.5e123), "1.500000e+123");
/// ```
pub fn format_scientific(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let formatted = format!("{:.6e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exp) => {
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{}e{}{:02}", mantissa, sign, exp.unsigned_abs())
            }
            Err(_) => formatted,
        },
        None => formatted,
    }
}
