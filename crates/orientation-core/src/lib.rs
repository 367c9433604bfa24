//! Orientation Core Library
//!
//! Countdown and QR registration logic behind the event landing app.
//!
//! ## Overview
//!
//! - [`countdown`]: days/hours/minutes/seconds until the event, recomputed
//!   once per second and frozen once the event has started.
//! - [`scan`]: the registration scan. Mobile devices scan live from a
//!   camera, desktops decode one uploaded image. One session per page.
//! - [`device`]: the device class injected at startup.
//! - [`notice`]: user-facing messages for scan outcomes.
//!
//! ## Quick Start
//!
//! ```ignore
//! use orientation_core::{Countdown, EventConfig, DeviceClass, Scanner, Upload};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = EventConfig::default();
//!
//!     let mut countdown = Countdown::new(config.target_epoch_ms());
//!     if let orientation_core::Tick::Updated(state) = countdown.tick() {
//!         println!("{}", state.padded());
//!     }
//!
//!     let scanner = Scanner::new(DeviceClass::Desktop, config.scan);
//!     let upload = Upload::read("ticket.png".as_ref()).await?;
//!     if let Some(outcome) = scanner.scan_upload(Some(upload)).await {
//!         println!("{:?}", outcome);
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod countdown;
pub mod device;
pub mod error;
pub mod notice;
pub mod scan;

// Re-exports
pub use config::{EventConfig, FacingMode, Region, ScanSettings};
pub use countdown::{
    Clock, Countdown, CountdownState, PaddedCountdown, SystemClock, Tick, TimerUnit,
    TICK_PERIOD,
};
pub use device::{DeviceClass, ScanRoute};
pub use error::{ConfigError, ScanError, ScanResult};
pub use notice::{Notice, NoticeLevel};
pub use scan::{
    CaptureConstraints, CaptureMode, DecodedPayload, FrameSource, QrDecoder, ScanPhase,
    ScanSession, Scanner, SessionLease, SessionSlot, Upload,
};
