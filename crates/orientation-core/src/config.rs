//! Event configuration.
//!
//! Everything has a compiled-in default; binaries may override individual
//! fields from their command line.

use std::time::Duration;

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default event start, in local time.
pub const DEFAULT_STARTS_AT: &str = "2025-02-21T11:00:00";

/// Default event title shown above the countdown.
pub const DEFAULT_TITLE: &str = "E-Cell Orientation 2025";

/// Naive timestamp format accepted on the command line.
const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Which camera the capture loop asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacingMode {
    /// Rear camera
    #[default]
    Environment,
    /// Front camera
    User,
}

impl FacingMode {
    /// Value for the `facingMode` media constraint.
    pub fn as_constraint(&self) -> &'static str {
        match self {
            FacingMode::Environment => "environment",
            FacingMode::User => "user",
        }
    }
}

/// Square (or rectangular) detection region, centred in each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub width: u32,
    pub height: u32,
}

/// Camera scan parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSettings {
    /// Frames tested per second
    pub fps: u32,
    /// Region of each frame handed to the decoder
    pub region: Region,
    /// Preferred camera
    pub facing: FacingMode,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            fps: 10,
            region: Region {
                width: 250,
                height: 250,
            },
            facing: FacingMode::Environment,
        }
    }
}

impl ScanSettings {
    /// Delay between two frame requests.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.fps.max(1)))
    }

    /// Check the settings are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fps == 0 || self.fps > 60 {
            return Err(ConfigError::InvalidScanSettings(format!(
                "fps must be between 1 and 60, got {}",
                self.fps
            )));
        }
        if self.region.width == 0 || self.region.height == 0 {
            return Err(ConfigError::InvalidScanSettings(
                "detection region must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration for the one event this app advertises.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventConfig {
    /// Event title
    pub title: String,
    /// When the event starts (countdown target)
    pub starts_at: DateTime<FixedOffset>,
    /// Camera scan parameters
    pub scan: ScanSettings,
}

impl Default for EventConfig {
    fn default() -> Self {
        let naive = NaiveDateTime::parse_from_str(DEFAULT_STARTS_AT, NAIVE_FORMAT)
            .unwrap_or_default();
        let starts_at = Local
            .from_local_datetime(&naive)
            .earliest()
            .map(|dt| dt.fixed_offset())
            .unwrap_or_else(|| naive.and_utc().fixed_offset());

        Self {
            title: DEFAULT_TITLE.to_string(),
            starts_at,
            scan: ScanSettings::default(),
        }
    }
}

impl EventConfig {
    /// Parse an event timestamp.
    ///
    /// Accepts RFC 3339 (`2025-02-21T11:00:00+05:30`) or a naive
    /// `YYYY-MM-DDTHH:MM:SS`, which is read as local time.
    pub fn parse_starts_at(input: &str) -> Result<DateTime<FixedOffset>, ConfigError> {
        let input = input.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
            return Ok(dt);
        }

        let naive = NaiveDateTime::parse_from_str(input, NAIVE_FORMAT)
            .map_err(|_| ConfigError::InvalidTimestamp(input.to_string()))?;
        Local
            .from_local_datetime(&naive)
            .earliest()
            .map(|dt| dt.fixed_offset())
            .ok_or_else(|| ConfigError::NonexistentLocalTime(input.to_string()))
    }

    /// Replace the start time from a command-line string.
    pub fn with_starts_at(mut self, input: &str) -> Result<Self, ConfigError> {
        self.starts_at = Self::parse_starts_at(input)?;
        Ok(self)
    }

    /// Target of the countdown in epoch milliseconds.
    pub fn target_epoch_ms(&self) -> i64 {
        self.starts_at.timestamp_millis()
    }

    /// Human date line, e.g. "February 21, 2025 at 11:00 AM".
    pub fn date_line(&self) -> String {
        self.starts_at.format("%B %-d, %Y at %-I:%M %p").to_string()
    }
}
