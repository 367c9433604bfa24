//! QR registration scanning.
//!
//! ## Flow
//!
//! ```text
//! Idle -> Requesting -> Active -> Decoded -> Idle
//!                              -> Failed  -> Idle
//! ```
//!
//! Mobile devices run a continuous camera capture ([`Scanner::scan_camera`]),
//! desktops decode one uploaded image ([`Scanner::scan_upload`]). Either way
//! the session is held through a [`SessionSlot`], which allows one session
//! per page and force-releases the previous one when a new one starts.

mod decode;
mod orchestrator;
mod session;
mod source;

use serde::{Deserialize, Serialize};

pub use decode::{centered_region, QrDecoder};
pub use orchestrator::{ScanPhase, Scanner, Upload};
pub use session::{ScanSession, SessionLease, SessionSlot};
pub use source::{CaptureConstraints, FrameSource};

/// Text decoded from a QR code.
///
/// No schema is applied; the text is handed to the caller as is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecodedPayload(String);

impl DecodedPayload {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for DecodedPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// What a session captures from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureMode {
    /// Live camera, every frame tested
    Continuous,
    /// One uploaded image, one attempt
    SingleImage,
}

impl std::fmt::Display for CaptureMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CaptureMode::Continuous => write!(f, "camera"),
            CaptureMode::SingleImage => write!(f, "image"),
        }
    }
}
