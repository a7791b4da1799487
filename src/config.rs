//! Histogram configuration with builder pattern.
//!
//! [`HistogramConfig`] is the single immutable description of a run: the
//! per-axis bin layout, the normalisation mode, the output format and the
//! logging verbosity. It is built once (via `bon`), validated at build time,
//! and then passed by reference to every component.
//!
//! # Example
//!
//! ```
//! use histogram_nd::{DimensionSpec, HistogramConfig, OutputFormat};
//!
//! // One axis, [0, 10) split into 2 bins
//! let config = HistogramConfig::builder()
//!     .dimensions(vec![DimensionSpec::new(0.0, 10.0, 2)])
//!     .build()
//!     .unwrap();
//! assert_eq!(config.num_dims(), 1);
//!
//! // 8-bit grayscale image of a 2-D distribution
//! let config = HistogramConfig::builder()
//!     .dimensions(vec![
//!         DimensionSpec::new(0.0, 1.0, 640),
//!         DimensionSpec::new(0.0, 1.0, 480),
//!     ])
//!     .relative(true)
//!     .output(OutputFormat::Raw8)
//!     .build()
//!     .unwrap();
//! assert!(config.output.is_raw());
//! ```

use std::io::Read;

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::error::HistogramError;
use crate::histogram::BinLayout;
use crate::logger::Verbosity;

/// Maximum supported dimensionality.
pub const MAX_DIMENSIONS: usize = 100;

// =============================================================================
// ConfigError
// =============================================================================

/// Errors that can occur during configuration validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Dimensionality outside `1..=MAX_DIMENSIONS`.
    #[error("wrong dimensions specified: {got}, should be between 1 and {max}")]
    InvalidDimensionCount { got: usize, max: usize },

    /// Bounds or their span are not finite, or `low >= high`.
    #[error("wrong range for dimension {dim}: [{low}, {high}) is empty or its span is not finite")]
    InvalidRange { dim: usize, low: f64, high: f64 },

    /// Bins too narrow to be represented.
    #[error("wrong bins for dimension {dim}: bin width {width} is not a positive finite number")]
    InvalidBinWidth { dim: usize, width: f64 },

    /// Bin count must be at least 1.
    #[error("wrong bin count for dimension {dim}: need at least one bin")]
    InvalidBinCount { dim: usize },

    /// Raw output scales relative frequencies and needs them enabled.
    #[error("raw output requires relative frequencies (-r)")]
    RawNeedsRelative,

    /// Raw output renders a 2-D image.
    #[error("raw output requires exactly 2 dimensions, got {got}")]
    RawNeedsTwoDimensions { got: usize },

    /// Both 8-bit and 16-bit raw output were requested.
    #[error("you cannot have both raw8 and raw16, pick one")]
    ConflictingRawFormats,

    /// Boundary trimming only applies to text output.
    #[error("omitting empty outer bins (-o) does not work with raw output")]
    TrimWithRaw,

    /// The product of all bin counts does not fit the address space.
    #[error("histogram with bin counts {bin_counts:?} is too large to allocate")]
    TooManyBins { bin_counts: Vec<usize> },

    /// Number of low/high/bin-count options does not match the dimensionality.
    #[error(
        "expected {dims} (low, high, bins) tuples, got {lows} low, {highs} high and {bins} bin counts"
    )]
    MismatchedDimensionArgs {
        dims: usize,
        lows: usize,
        highs: usize,
        bins: usize,
    },
}

// =============================================================================
// DimensionSpec
// =============================================================================

/// Binning of a single axis: `bin_count` equal-width bins covering `[low, high)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionSpec {
    /// Inclusive lower bound.
    pub low: f64,
    /// Exclusive upper bound.
    pub high: f64,
    /// Number of bins.
    pub bin_count: usize,
}

impl DimensionSpec {
    /// Create an axis specification. Validation happens when the config is built.
    pub fn new(low: f64, high: f64, bin_count: usize) -> Self {
        Self {
            low,
            high,
            bin_count,
        }
    }

    /// Width of one bin: `(high - low) / bin_count`.
    #[inline]
    pub fn bin_width(&self) -> f64 {
        (self.high - self.low) / self.bin_count as f64
    }

    fn validate(&self, dim: usize) -> Result<(), ConfigError> {
        let finite = self.low.is_finite() && self.high.is_finite();
        if !finite || self.low >= self.high || !(self.high - self.low).is_finite() {
            return Err(ConfigError::InvalidRange {
                dim,
                low: self.low,
                high: self.high,
            });
        }
        if self.bin_count < 1 {
            return Err(ConfigError::InvalidBinCount { dim });
        }
        let width = self.bin_width();
        if !(width.is_finite() && width > 0.0) {
            return Err(ConfigError::InvalidBinWidth { dim, width });
        }
        Ok(())
    }
}

// =============================================================================
// OutputFormat
// =============================================================================

/// How the finished histogram is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Tab-separated text lines in blank-line delimited blocks.
    #[default]
    Text,
    /// Grayscale image, one unsigned byte per bin.
    Raw8,
    /// Grayscale image, one big-endian `u16` per bin.
    Raw16,
}

impl OutputFormat {
    /// Whether this is one of the raw image formats.
    #[inline]
    pub fn is_raw(self) -> bool {
        !matches!(self, OutputFormat::Text)
    }

    /// Bytes per emitted sample for raw formats.
    #[inline]
    pub fn bytes_per_sample(self) -> Option<usize> {
        match self {
            OutputFormat::Text => None,
            OutputFormat::Raw8 => Some(1),
            OutputFormat::Raw16 => Some(2),
        }
    }

    /// Largest sample value for raw formats.
    #[inline]
    pub fn sample_max(self) -> Option<f64> {
        match self {
            OutputFormat::Text => None,
            OutputFormat::Raw8 => Some(u8::MAX as f64),
            OutputFormat::Raw16 => Some(u16::MAX as f64),
        }
    }
}

// =============================================================================
// HistogramConfig
// =============================================================================

/// Validated configuration of a histogram run.
///
/// # Structure
///
/// - **Dimensions**: one [`DimensionSpec`] per axis, in input column order
/// - **Normalisation**: absolute counts or relative frequencies
/// - **Output**: text, raw8 or raw16, and optional trimming of empty outer bins
/// - **Logging**: [`Verbosity`] of the diagnostic channel
#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
#[builder(
    derive(Clone, Debug),
    finish_fn(vis = "", name = __build_internal)
)]
pub struct HistogramConfig {
    /// Per-axis binning, in input column order.
    pub dimensions: Vec<DimensionSpec>,

    /// Emit relative frequencies instead of counts. Default: `false`.
    #[builder(default)]
    #[serde(default)]
    pub relative: bool,

    /// Output rendering. Default: [`OutputFormat::Text`].
    #[builder(default)]
    #[serde(default)]
    pub output: OutputFormat,

    /// Restrict text output to the occupied bins plus one bin of padding.
    #[builder(default)]
    #[serde(default)]
    pub trim: bool,

    /// Diagnostic verbosity. Default: [`Verbosity::Info`].
    #[builder(default)]
    #[serde(default)]
    pub verbosity: Verbosity,
}

/// Custom finishing function that validates the config.
impl<S: histogram_config_builder::IsComplete> HistogramConfigBuilder<S> {
    /// Build and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if:
    /// - there are no dimensions or more than [`MAX_DIMENSIONS`]
    /// - any axis has `low >= high`, non-finite bounds or zero bins
    /// - a raw format is combined with absolute counts, trimming, or `D != 2`
    /// - the total number of bins overflows
    pub fn build(self) -> Result<HistogramConfig, ConfigError> {
        let config = self.__build_internal();
        config.validate()?;
        Ok(config)
    }
}

impl HistogramConfig {
    /// Deserialize a configuration from JSON and validate it.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, HistogramError> {
        let config: HistogramConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    /// Number of dimensions.
    #[inline]
    pub fn num_dims(&self) -> usize {
        self.dimensions.len()
    }

    /// Product of all bin widths, the volume of a single bin.
    pub fn bin_volume(&self) -> f64 {
        self.dimensions.iter().map(DimensionSpec::bin_width).product()
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let dims = self.dimensions.len();
        if dims < 1 || dims > MAX_DIMENSIONS {
            return Err(ConfigError::InvalidDimensionCount {
                got: dims,
                max: MAX_DIMENSIONS,
            });
        }

        if self.output.is_raw() {
            if dims != 2 {
                return Err(ConfigError::RawNeedsTwoDimensions { got: dims });
            }
            if !self.relative {
                return Err(ConfigError::RawNeedsRelative);
            }
            if self.trim {
                return Err(ConfigError::TrimWithRaw);
            }
        }

        for (dim, spec) in self.dimensions.iter().enumerate() {
            spec.validate(dim)?;
        }

        // Rejects bin products that overflow before anything is allocated
        BinLayout::new(&self.dimensions)?;

        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
