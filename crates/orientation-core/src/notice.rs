//! User-facing notices for scan outcomes.

use serde::{Deserialize, Serialize};

use crate::error::{ScanError, ScanResult};
use crate::scan::DecodedPayload;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Error,
}

/// Message shown to the user after a scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(payload: &DecodedPayload) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: format!("Successfully scanned: {}", payload),
        }
    }

    pub fn error(err: &ScanError) -> Self {
        let message = match err {
            ScanError::CameraUnavailable(_) => "Failed to start camera. Please check permissions.",
            ScanError::Stream(_) => "Camera stopped unexpectedly. Please try again.",
            ScanError::NoCodeFound => "No valid QR code found in the image",
            ScanError::UnreadableImage(_) => "Error scanning file. Please try again.",
            ScanError::Cancelled(_) => "Scan cancelled.",
        };
        Self {
            level: NoticeLevel::Error,
            message: message.to_string(),
        }
    }

    /// Notice for a finished scan; `None` when nothing should be shown.
    pub fn from_outcome(outcome: &ScanResult<DecodedPayload>) -> Option<Self> {
        match outcome {
            Ok(payload) => Some(Self::success(payload)),
            Err(e) if e.is_reportable() => Some(Self::error(e)),
            Err(_) => None,
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_carries_exact_text() {
        let notice = Notice::from_outcome(&Ok(DecodedPayload::new("team: Red Fox"))).unwrap();
        assert_eq!(notice.level, NoticeLevel::Success);
        assert_eq!(notice.message, "Successfully scanned: team: Red Fox");
    }

    #[test]
    fn test_error_messages() {
        let no_code = Notice::from_outcome(&Err(ScanError::NoCodeFound)).unwrap();
        assert!(no_code.is_error());
        assert_eq!(no_code.message, "No valid QR code found in the image");

        let camera = Notice::error(&ScanError::CameraUnavailable("denied".into()));
        assert_eq!(
            camera.message,
            "Failed to start camera. Please check permissions."
        );
    }

    #[test]
    fn test_cancelled_is_silent() {
        assert!(Notice::from_outcome(&Err(ScanError::Cancelled(1))).is_none());
    }

    #[test]
    fn test_json_shape() {
        let notice = Notice::error(&ScanError::NoCodeFound);
        let json = serde_json::to_string(&notice).unwrap();
        assert_eq!(
            json,
            r#"{"level":"error","message":"No valid QR code found in the image"}"#
        );
    }
}
