//! Camera frame sources.

use image::DynamicImage;

use crate::config::{FacingMode, Region, ScanSettings};
use crate::error::ScanResult;

/// Constraints passed to a source when the camera is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureConstraints {
    pub facing: FacingMode,
    pub fps: u32,
    pub region: Region,
}

impl From<&ScanSettings> for CaptureConstraints {
    fn from(settings: &ScanSettings) -> Self {
        Self {
            facing: settings.facing,
            fps: settings.fps,
            region: settings.region,
        }
    }
}

/// A live camera.
///
/// `stop` must release everything `start` acquired, including a partial
/// acquisition after `start` failed. [`ScanSession`](super::ScanSession)
/// guarantees it is called exactly once per started source.
#[allow(async_fn_in_trait)]
pub trait FrameSource {
    /// Open the camera. Permission or hardware failures are
    /// [`ScanError::CameraUnavailable`](crate::ScanError::CameraUnavailable).
    async fn start(&mut self, constraints: &CaptureConstraints) -> ScanResult<()>;

    /// Grab the current frame.
    ///
    /// `Ok(None)` means no frame is ready yet; errors end the session.
    async fn next_frame(&mut self) -> ScanResult<Option<DynamicImage>>;

    /// Release the camera.
    fn stop(&mut self);
}
