use std::path::Path;

use crate::cli::Args;
use crate::error::ConfigError;
use crate::model::AddressRecord;

use super::defaults::*;
use super::file::ConfigFile;

/// RGB text color, each component in 0.0-1.0
pub type FontColor = (f32, f32, f32);

/// How many filler labels to append after the real addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillerCount {
    /// One filler per real address (`repeat_default: -1`)
    PerAddress,
    /// A fixed number of fillers, possibly zero
    Exactly(usize),
}

impl Default for FillerCount {
    fn default() -> Self {
        FillerCount::Exactly(0)
    }
}

impl FillerCount {
    /// Interpret the `repeat_default` config value
    pub fn from_repeat_default(value: i64) -> Result<Self, ConfigError> {
        match value {
            -1 => Ok(FillerCount::PerAddress),
            n if n >= 0 => usize::try_from(n)
                .map(FillerCount::Exactly)
                .map_err(|_| ConfigError::InvalidRepeatDefault(value)),
            _ => Err(ConfigError::InvalidRepeatDefault(value)),
        }
    }

    /// Number of fillers for a run with `real_count` real addresses
    pub fn count(&self, real_count: usize) -> usize {
        match self {
            FillerCount::PerAddress => real_count,
            FillerCount::Exactly(n) => *n,
        }
    }
}

/// Placement options for one label sheet run
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Row (0-based) of the first label on the first page
    pub start_row: usize,
    /// Column (0-based) of the first label on the first page
    pub start_col: usize,
    pub font_color: FontColor,
    /// Filler printed on the padding labels
    pub default_address: AddressRecord,
    pub repeat_default: FillerCount,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            start_row: 0,
            start_col: 0,
            font_color: DEFAULT_FONT_COLOR,
            default_address: AddressRecord::default(),
            repeat_default: FillerCount::default(),
        }
    }
}

impl LayoutConfig {
    /// Check that the start position is on the sheet and the color is valid
    ///
    /// A start row of 10 would sit past the last row of the first page and
    /// is rejected rather than silently moved to the next page.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.start_row >= ROWS_PER_PAGE {
            return Err(ConfigError::InvalidStartRow(self.start_row as i64));
        }
        if self.start_col >= COLUMNS {
            return Err(ConfigError::InvalidStartColumn(self.start_col as i64));
        }
        validate_color(self.font_color)
    }
}

fn validate_color(color: FontColor) -> Result<(), ConfigError> {
    let (r, g, b) = color;
    for component in [r, g, b] {
        if !(0.0..=1.0).contains(&component) {
            return Err(ConfigError::InvalidColor(format!(
                "({}, {}, {}): components must be between 0 and 1",
                r, g, b
            )));
        }
    }
    Ok(())
}

fn start_row(value: i64) -> Result<usize, ConfigError> {
    usize::try_from(value)
        .ok()
        .filter(|row| *row < ROWS_PER_PAGE)
        .ok_or(ConfigError::InvalidStartRow(value))
}

fn start_col(value: i64) -> Result<usize, ConfigError> {
    usize::try_from(value)
        .ok()
        .filter(|col| *col < COLUMNS)
        .ok_or(ConfigError::InvalidStartColumn(value))
}

/// Runtime settings for one conversion run
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub layout: LayoutConfig,
    /// Orders below this total cost get labels, the rest go to the carrier CSV
    pub value_threshold: f64,
    /// Compress PDF streams after generation
    pub compress: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            value_threshold: DEFAULT_VALUE_THRESHOLD,
            compress: true,
        }
    }
}

impl Settings {
    /// Validate a parsed configuration document
    pub fn from_config(file: ConfigFile) -> Result<Self, ConfigError> {
        let layout = LayoutConfig {
            start_row: start_row(file.start_row)?,
            start_col: start_col(file.start_col)?,
            font_color: file.font_color,
            default_address: file.default_address,
            repeat_default: FillerCount::from_repeat_default(file.repeat_default)?,
        };
        layout.validate()?;

        let value_threshold = file.value_threshold.unwrap_or(DEFAULT_VALUE_THRESHOLD);
        if !value_threshold.is_finite() {
            return Err(ConfigError::InvalidThreshold(value_threshold));
        }

        Ok(Self {
            layout,
            value_threshold,
            ..Default::default()
        })
    }

    /// Load and validate a configuration file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::from_config(ConfigFile::load(path)?)
    }

    /// Apply command-line overrides (CLI values win over the file)
    pub fn with_args(mut self, args: &Args) -> Result<Self, ConfigError> {
        if let Some(row) = args.start_row {
            self.layout.start_row = start_row(row)?;
        }
        if let Some(col) = args.start_col {
            self.layout.start_col = start_col(col)?;
        }
        if let Some(threshold) = args.threshold {
            if !threshold.is_finite() {
                return Err(ConfigError::InvalidThreshold(threshold));
            }
            self.value_threshold = threshold;
        }
        if args.no_compress {
            self.compress = false;
        }
        Ok(self)
    }
}
