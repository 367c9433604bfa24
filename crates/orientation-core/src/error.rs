//! Error types for Orientation

use thiserror::Error;

/// Errors surfaced by a scan session.
///
/// Per-frame misses never leave the camera loop; only terminal outcomes
/// reach the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// Camera could not be started (permission denied, no device)
    #[error("Camera unavailable: {0}")]
    CameraUnavailable(String),

    /// Camera stream failed or ended after it was started
    #[error("Camera stream error: {0}")]
    Stream(String),

    /// No decodable QR code in the image or frame
    #[error("No QR code found")]
    NoCodeFound,

    /// Uploaded file could not be read or is not an image
    #[error("Unreadable image: {0}")]
    UnreadableImage(String),

    /// Session was force-released by a newer session or page teardown
    #[error("Scan session {0} was cancelled")]
    Cancelled(u64),
}

impl ScanError {
    /// Whether the user should see this error.
    ///
    /// A cancelled session was replaced or torn down by the user's own
    /// action, so there is nothing to tell them.
    pub fn is_reportable(&self) -> bool {
        !matches!(self, ScanError::Cancelled(_))
    }
}

impl From<image::ImageError> for ScanError {
    fn from(err: image::ImageError) -> Self {
        ScanError::UnreadableImage(err.to_string())
    }
}

/// Errors raised while building an [`EventConfig`](crate::EventConfig).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Timestamp did not match any accepted format
    #[error("Invalid event timestamp '{0}': expected YYYY-MM-DDTHH:MM:SS or RFC 3339")]
    InvalidTimestamp(String),

    /// Local time does not exist (DST gap)
    #[error("Event timestamp '{0}' does not exist in the local time zone")]
    NonexistentLocalTime(String),

    /// Unknown device class name
    #[error("Unknown device class '{0}': expected auto, mobile or desktop")]
    InvalidDeviceClass(String),

    /// Scan settings out of range
    #[error("Invalid scan settings: {0}")]
    InvalidScanSettings(String),
}

/// Result type alias using ScanError
pub type ScanResult<T> = Result<T, ScanError>;
