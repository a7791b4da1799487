//! Diagnostic logging for histogram runs.
//!
//! All diagnostic text goes through [`HistogramLogger`], which emits `tracing`
//! events gated by a [`Verbosity`]. The library never installs a subscriber;
//! the `histogram` binary routes events to stderr.

use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;
use tracing::{debug, info, warn};

use crate::config::HistogramConfig;
use crate::histogram::{SampleStats, Window};

/// Verbosity level for diagnostic output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verbosity {
    /// No output at all.
    Silent,
    /// Only problems: lost tuples and input that could not be parsed.
    Warning,
    /// Configuration and import summaries.
    #[default]
    Info,
    /// Additionally the output window.
    Debug,
}

impl Verbosity {
    /// Most verbose `tracing` level this verbosity lets through.
    pub fn level_filter(self) -> LevelFilter {
        match self {
            Verbosity::Silent => LevelFilter::OFF,
            Verbosity::Warning => LevelFilter::WARN,
            Verbosity::Info => LevelFilter::INFO,
            Verbosity::Debug => LevelFilter::DEBUG,
        }
    }
}

/// Writes the diagnostic channel of a histogram run.
#[derive(Debug, Clone, Copy)]
pub struct HistogramLogger {
    verbosity: Verbosity,
}

impl HistogramLogger {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    /// Dimensions and bin layout about to be used.
    pub fn log_config(&self, config: &HistogramConfig) {
        if self.verbosity < Verbosity::Info {
            return;
        }
        info!(
            "Using {} dimensions, relative = {} with:",
            config.num_dims(),
            config.relative
        );
        for spec in &config.dimensions {
            info!(
                "  [{:.6}, {:.6}), bin_count = {}, bin_size = {:.6}",
                spec.low,
                spec.high,
                spec.bin_count,
                spec.bin_width()
            );
        }
    }

    /// A line that did not hold enough numbers; import stops there.
    pub fn log_parse_error(&self, line_nr: u64, line: &str) {
        if self.verbosity < Verbosity::Warning {
            return;
        }
        warn!("Error parsing this line ({}): '{}'", line_nr, line.trim_end());
        warn!("Stopping import here ...");
    }

    /// Observed ranges, lost tuples and totals after import.
    pub fn log_import_summary(&self, stats: &SampleStats) {
        if self.verbosity >= Verbosity::Info {
            let ranges: Vec<String> = stats
                .observed()
                .iter()
                .map(|(min, max)| format!("[{}, {}]", min, max))
                .collect();
            info!("Ranges of values read: {}", ranges.join(", "));
        }

        if stats.rejected > 0 && self.verbosity >= Verbosity::Warning {
            warn!(
                "Lost {} tuples because they were out of the specified range",
                stats.rejected
            );
        }

        if stats.accepted() > 0 && self.verbosity >= Verbosity::Info {
            info!(
                "Read {} tuples, {} were in the specified range",
                stats.read,
                stats.accepted()
            );
        }
    }

    /// Region of bins the text output will cover.
    pub fn log_window(&self, window: &Window) {
        if self.verbosity >= Verbosity::Debug {
            debug!(bins = window.num_bins(), "Output window: {}", window);
        }
    }

    /// Maximum count used to scale raw output.
    pub fn log_max_value(&self, max: u64) {
        if self.verbosity >= Verbosity::Info {
            info!("Maximum value found: {}", max);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_ordering() {
        assert!(Verbosity::Silent < Verbosity::Warning);
        assert!(Verbosity::Warning < Verbosity::Info);
        assert!(Verbosity::Info < Verbosity::Debug);
        assert_eq!(Verbosity::default(), Verbosity::Info);
    }

    #[test]
    fn test_level_filter() {
        assert_eq!(Verbosity::Silent.level_filter(), LevelFilter::OFF);
        assert_eq!(Verbosity::Warning.level_filter(), LevelFilter::WARN);
        assert_eq!(Verbosity::Debug.level_filter(), LevelFilter::DEBUG);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Verbosity::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
        let v: Verbosity = serde_json::from_str("\"silent\"").unwrap();
        assert_eq!(v, Verbosity::Silent);
    }
}
