//! Device class capability.
//!
//! Decided once at startup by the host and injected into the pages, so the
//! scan flow never inspects platform strings on its own.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Broad device class used to pick a scan route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    /// Small screen with a camera: scan live
    Mobile,
    /// Large screen: upload an image
    #[default]
    Desktop,
}

/// How a registration scan is performed on a device class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanRoute {
    /// Continuous camera capture
    Camera,
    /// One uploaded image, one decode attempt
    Upload,
}

impl DeviceClass {
    /// Class of the platform this binary was built for.
    pub fn detect() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Class for an OS name as reported by `std::env::consts::OS`.
    pub fn from_os(os: &str) -> Self {
        match os {
            "android" | "ios" => DeviceClass::Mobile,
            _ => DeviceClass::Desktop,
        }
    }

    /// Best-effort guess from a browser user agent.
    ///
    /// Matches `Mobi` or `Android` anywhere, ignoring case. Tablets that
    /// advertise neither are treated as desktop.
    pub fn from_user_agent(user_agent: &str) -> Self {
        let ua = user_agent.to_ascii_lowercase();
        if ua.contains("mobi") || ua.contains("android") {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }

    /// Scan route for this class.
    pub fn scan_route(&self) -> ScanRoute {
        match self {
            DeviceClass::Mobile => ScanRoute::Camera,
            DeviceClass::Desktop => ScanRoute::Upload,
        }
    }

    /// Prompt shown on the scan card.
    pub fn scan_prompt(&self) -> &'static str {
        match self {
            DeviceClass::Mobile => "Tap to scan QR code",
            DeviceClass::Desktop => "Upload a QR code image",
        }
    }
}

impl std::fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeviceClass::Mobile => write!(f, "mobile"),
            DeviceClass::Desktop => write!(f, "desktop"),
        }
    }
}

impl FromStr for DeviceClass {
    type Err = ConfigError;

    /// Parses `mobile`, `desktop`, or `auto` (which runs [`DeviceClass::detect`]).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::detect()),
            "mobile" => Ok(DeviceClass::Mobile),
            "desktop" => Ok(DeviceClass::Desktop),
            other => Err(ConfigError::InvalidDeviceClass(other.to_string())),
        }
    }
}
