//! Configuration for the HDOB converter.
//!
//! All settings live in one immutable [`ConverterConfig`] value that is built
//! once (defaults, then an optional TOML file, then command-line overrides)
//! and passed by reference into the pipeline.
//!
//! ## TOML layout
//!
//! ```toml
//! [report]
//! interval = 30
//! lines_per_message = 20
//! center = "KNHC"
//! wmo_header = "URNT15"
//! flags = "00"
//!
//! [parse]
//! workers = 4
//!
//! [fetch]
//! timeout_secs = 60
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{HdobError, Result};

/// HDOB aggregation interval
///
/// Only the four resolutions the product defines are representable.
///
/// # Example
/// ```
/// use hdobconv::config::ReportInterval;
///
/// let interval: ReportInterval = "30".parse().unwrap();
/// assert_eq!(interval.as_secs(), 30);
/// assert!("45".parse::<ReportInterval>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "u32")]
pub enum ReportInterval {
    Ten,
    #[default]
    Thirty,
    Sixty,
    OneTwenty,
}

impl ReportInterval {
    pub fn as_secs(&self) -> i64 {
        match self {
            Self::Ten => 10,
            Self::Thirty => 30,
            Self::Sixty => 60,
            Self::OneTwenty => 120,
        }
    }
}

impl TryFrom<u32> for ReportInterval {
    type Error = HdobError;

    fn try_from(secs: u32) -> Result<Self> {
        match secs {
            10 => Ok(Self::Ten),
            30 => Ok(Self::Thirty),
            60 => Ok(Self::Sixty),
            120 => Ok(Self::OneTwenty),
            other => Err(HdobError::Interval(other)),
        }
    }
}

impl FromStr for ReportInterval {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        let secs = s
            .strip_suffix('s')
            .unwrap_or(s)
            .parse::<u32>()
            .map_err(|_| format!("invalid interval: {}", s))?;
        Self::try_from(secs).map_err(|e| e.to_string())
    }
}

impl fmt::Display for ReportInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.as_secs())
    }
}

/// A UTC time of day, in whole seconds since midnight.
///
/// # Parsing formats
/// - `HH:MM` or `HH:MM:SS`
/// - `HHMM` or `HHMMSS`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeOfDay(u32);

impl TimeOfDay {
    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Result<Self> {
        if hour >= 24 || minute >= 60 || second >= 60 {
            return Err(HdobError::TimeOfDayRange(format!(
                "{:02}:{:02}:{:02}",
                hour, minute, second
            )));
        }
        Ok(Self(hour * 3600 + minute * 60 + second))
    }

    pub fn seconds(&self) -> u32 {
        self.0
    }
}

impl FromStr for TimeOfDay {
    type Err = HdobError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let bad = || HdobError::TimeOfDay(s.to_string());
        let num = |part: &str| -> Result<u32> {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(bad());
            }
            part.parse().map_err(|_| bad())
        };

        let (h, m, sec) = if s.contains(':') {
            let parts: Vec<&str> = s.split(':').collect();
            match parts.as_slice() {
                [h, m] => (num(h)?, num(m)?, 0),
                [h, m, sec] => (num(h)?, num(m)?, num(sec)?),
                _ => return Err(bad()),
            }
        } else {
            if !s.bytes().all(|b| b.is_ascii_digit()) {
                return Err(bad());
            }
            match s.len() {
                4 => (num(&s[0..2])?, num(&s[2..4])?, 0),
                6 => (num(&s[0..2])?, num(&s[2..4])?, num(&s[4..6])?),
                _ => return Err(bad()),
            }
        };

        Self::from_hms(h, m, sec)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.0 / 3600,
            (self.0 / 60) % 60,
            self.0 % 60
        )
    }
}

/// Parse a `YYYYMMDD` storm date.
pub fn parse_storm_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y%m%d").map_err(|_| HdobError::StormDate(s.to_string()))
}

/// Converter configuration
///
/// Use `ConverterConfig::default()` for the operational defaults.
///
/// # Example
/// ```
/// use hdobconv::config::{ConverterConfig, ReportInterval};
///
/// let mut config = ConverterConfig::default();
/// config.report.interval = ReportInterval::Ten;
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConverterConfig {
    /// Report rendering and message packaging
    pub report: ReportConfig,
    /// Input parsing
    pub parse: ParseConfig,
    /// Remote retrieval
    pub fetch: FetchConfig,
}

/// Report rendering configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Aggregation bin length
    pub interval: ReportInterval,
    /// Maximum report lines per message (K)
    pub lines_per_message: usize,
    /// Originating center code in the message header
    pub center: String,
    /// WMO abbreviated heading in the message header
    pub wmo_header: String,
    /// Two-character flag group closing every report line
    pub flags: String,
    /// Observation number of the first message
    pub first_ob_number: u32,
}

/// Parsing configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParseConfig {
    /// Parser worker threads; 0 or 1 selects the sequential parser
    pub workers: usize,
}

/// Retrieval configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FetchConfig {
    /// Timeout for a single URL retrieval, in seconds
    pub timeout_secs: u64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            interval: ReportInterval::default(),
            lines_per_message: 20,
            center: "KNHC".to_string(),
            wmo_header: "URNT15".to_string(),
            flags: "00".to_string(),
            first_ob_number: 1,
        }
    }
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self { workers: 4 }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self { timeout_secs: 60 }
    }
}

impl ConverterConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| HdobError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if self.report.lines_per_message == 0 {
            return Err(HdobError::Config(
                "lines_per_message must be at least 1".to_string(),
            ));
        }
        if self.report.flags.chars().count() != 2 {
            return Err(HdobError::Config(format!(
                "flags must be two characters, got '{}'",
                self.report.flags
            )));
        }
        if self.fetch.timeout_secs == 0 {
            return Err(HdobError::Config("timeout_secs must be positive".to_string()));
        }
        Ok(())
    }
}
