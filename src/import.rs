//! Line-based import of numeric tuples.
//!
//! Input is read line by line:
//! - lines starting with `#` are comments and are skipped
//! - otherwise the first `D` numbers are parsed greedily, `strtod` style
//!   (leading whitespace skipped, longest numeric prefix taken, anything after
//!   the `D`th number ignored)
//! - a line with fewer than `D` numbers stops the import; whatever was counted
//!   so far is kept

use std::io::BufRead;

use crate::error::HistogramError;
use crate::histogram::Histogram;
use crate::logger::HistogramLogger;

/// Why an import finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportEnd {
    /// The whole input was consumed.
    EndOfInput,
    /// Import stopped at a line without enough numbers.
    Malformed {
        /// 1-based line number, comments included.
        line_nr: u64,
        /// The offending line, without its line terminator.
        line: String,
    },
}

/// Feed every record of `reader` into `histogram`.
///
/// Only I/O failures are errors; a malformed line ends the import with
/// [`ImportEnd::Malformed`] after logging it.
pub fn import<R: BufRead>(
    mut reader: R,
    histogram: &mut Histogram,
    logger: &HistogramLogger,
) -> Result<ImportEnd, HistogramError> {
    let dims = histogram.num_dims();
    let mut buf = Vec::new();
    let mut values = Vec::with_capacity(dims);
    let mut line_nr = 0u64;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(ImportEnd::EndOfInput);
        }
        line_nr += 1;

        let line = String::from_utf8_lossy(&buf);
        if line.starts_with('#') {
            continue;
        }

        if !parse_record(&line, dims, &mut values) {
            logger.log_parse_error(line_nr, &line);
            return Ok(ImportEnd::Malformed {
                line_nr,
                line: line.trim_end_matches(['\n', '\r']).to_string(),
            });
        }

        histogram.insert(&values);
    }
}

/// Parse the first `dims` numbers of `line` into `values`.
///
/// Returns `false` if the line holds fewer than `dims` numbers.
pub fn parse_record(line: &str, dims: usize, values: &mut Vec<f64>) -> bool {
    values.clear();
    let mut rest = line;
    for _ in 0..dims {
        match parse_leading_f64(rest) {
            Some((value, tail)) => {
                values.push(value);
                rest = tail;
            }
            None => return false,
        }
    }
    true
}

/// Parse the longest floating point prefix of `s` after leading whitespace.
///
/// Returns the value and the unparsed remainder.
pub fn parse_leading_f64(s: &str) -> Option<(f64, &str)> {
    let s = s.trim_start();
    // The prefix is ASCII, so `len` is a char boundary
    let len = numeric_prefix_len(s.as_bytes())?;
    let value = s[..len].parse::<f64>().ok()?;
    Some((value, &s[len..]))
}

/// Words accepted in place of a mantissa, longest first.
const SPECIAL_VALUES: [&[u8]; 3] = [b"infinity", b"inf", b"nan"];

/// Length of the longest prefix matching
/// `[+-] (inf | infinity | nan | digits [. digits] [e [+-] digits])`,
/// where at least one mantissa digit is required.
fn numeric_prefix_len(bytes: &[u8]) -> Option<usize> {
    let mut i = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    for special in SPECIAL_VALUES {
        if bytes
            .get(i..i + special.len())
            .is_some_and(|word| word.eq_ignore_ascii_case(special))
        {
            return Some(i + special.len());
        }
    }

    let int_digits = count_digits(&bytes[i..]);
    i += int_digits;
    let mut frac_digits = 0;
    if bytes.get(i) == Some(&b'.') {
        frac_digits = count_digits(&bytes[i + 1..]);
        if int_digits + frac_digits > 0 {
            i += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_digits = count_digits(&bytes[j..]);
        if exp_digits > 0 {
            i = j + exp_digits;
        }
    }
    Some(i)
}

#[inline]
fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
