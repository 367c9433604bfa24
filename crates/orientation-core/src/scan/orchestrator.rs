//! Scan orchestration for the registration page.

use std::path::Path;
use std::sync::Arc;

use tokio::sync::watch;
use tokio::time::MissedTickBehavior;

use super::decode::QrDecoder;
use super::session::{ScanSession, SessionSlot};
use super::source::{CaptureConstraints, FrameSource};
use super::{CaptureMode, DecodedPayload};
use crate::config::ScanSettings;
use crate::device::{DeviceClass, ScanRoute};
use crate::error::{ScanError, ScanResult};

/// Observable state of the scanner.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ScanPhase {
    #[default]
    Idle,
    /// Acquiring the camera or the uploaded image
    Requesting(CaptureMode),
    /// Testing frames (camera) or decoding (upload)
    Active(CaptureMode),
    Decoded(DecodedPayload),
    Failed(ScanError),
}

impl ScanPhase {
    /// Whether a session is in progress.
    pub fn is_busy(&self) -> bool {
        matches!(self, ScanPhase::Requesting(_) | ScanPhase::Active(_))
    }
}

/// An image file picked for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// Read a picked file from disk.
    pub async fn read(path: &Path) -> ScanResult<Self> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| ScanError::UnreadableImage(format!("{}: {}", path.display(), e)))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self { name, bytes })
    }
}

struct ScannerInner {
    device: DeviceClass,
    settings: ScanSettings,
    slot: SessionSlot,
    phase: watch::Sender<ScanPhase>,
}

/// Registration scanner for one page instance.
///
/// Cheap to clone; clones share the session slot and phase.
#[derive(Clone)]
pub struct Scanner {
    inner: Arc<ScannerInner>,
}

impl std::fmt::Debug for Scanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scanner")
            .field("device", &self.inner.device)
            .field("phase", &self.phase())
            .field("slot", &self.inner.slot)
            .finish()
    }
}

impl Scanner {
    pub fn new(device: DeviceClass, settings: ScanSettings) -> Self {
        let (phase, _) = watch::channel(ScanPhase::Idle);
        Self {
            inner: Arc::new(ScannerInner {
                device,
                settings,
                slot: SessionSlot::new(),
                phase,
            }),
        }
    }

    pub fn device(&self) -> DeviceClass {
        self.inner.device
    }

    pub fn settings(&self) -> &ScanSettings {
        &self.inner.settings
    }

    /// Route a scan request takes on this device.
    pub fn route(&self) -> ScanRoute {
        self.inner.device.scan_route()
    }

    pub fn slot(&self) -> &SessionSlot {
        &self.inner.slot
    }

    pub fn phase(&self) -> ScanPhase {
        self.inner.phase.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ScanPhase> {
        self.inner.phase.subscribe()
    }

    /// Whether a session holds the slot.
    pub fn is_scanning(&self) -> bool {
        self.inner.slot.is_active()
    }

    /// Ask the running session to stop (page teardown).
    pub fn cancel(&self) {
        self.inner.slot.release_all();
    }

    /// Scan continuously from a camera until a code is decoded.
    ///
    /// Frames without a code are skipped. A camera that cannot be opened, or
    /// a stream that breaks, ends the session with an error. The camera is
    /// released on every path, including when this future is dropped.
    pub async fn scan_camera<S: FrameSource>(&self, source: S) -> ScanResult<DecodedPayload> {
        let mode = CaptureMode::Continuous;
        let lease = self.inner.slot.acquire(mode).await;
        let cancel = lease.token();
        let id = lease.id();
        self.set_phase(ScanPhase::Requesting(mode));

        let mut session = ScanSession::new(lease, source);
        let constraints = CaptureConstraints::from(&self.inner.settings);

        let outcome = tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(ScanError::Cancelled(id)),
            outcome = self.run_camera(&mut session, &constraints) => outcome,
        };

        session.release();
        drop(session);
        self.finish(outcome)
    }

    async fn run_camera<S: FrameSource>(
        &self,
        session: &mut ScanSession<S>,
        constraints: &CaptureConstraints,
    ) -> ScanResult<DecodedPayload> {
        if let Err(e) = session.start(constraints).await {
            tracing::error!("Failed to start camera: {}", e);
            return Err(e);
        }
        self.set_phase(ScanPhase::Active(CaptureMode::Continuous));

        let decoder = QrDecoder::with_region(constraints.region);
        let mut interval = tokio::time::interval(self.inner.settings.frame_interval());
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            interval.tick().await;
            let Some(frame) = session.next_frame().await? else {
                continue;
            };
            match decoder.decode_image(&frame) {
                Ok(payload) => return Ok(payload),
                Err(e) => tracing::trace!("No code in frame: {}", e),
            }
        }
    }

    /// Decode one uploaded image.
    ///
    /// `None` (no file picked) starts nothing and returns `None`.
    pub async fn scan_upload(
        &self,
        upload: Option<Upload>,
    ) -> Option<ScanResult<DecodedPayload>> {
        let Some(upload) = upload else {
            tracing::debug!("No file selected, nothing to scan");
            return None;
        };

        let mode = CaptureMode::SingleImage;
        let lease = self.inner.slot.acquire(mode).await;
        let id = lease.id();
        self.set_phase(ScanPhase::Requesting(mode));
        tracing::info!(
            "Scan session {} decoding '{}' ({} bytes)",
            id,
            upload.name,
            upload.bytes.len()
        );
        self.set_phase(ScanPhase::Active(mode));

        let decode = tokio::task::spawn_blocking(move || QrDecoder::new().decode_bytes(&upload.bytes));
        let outcome = tokio::select! {
            biased;
            _ = lease.cancelled() => Err(ScanError::Cancelled(id)),
            joined = decode => joined.unwrap_or_else(|e| Err(ScanError::UnreadableImage(e.to_string()))),
        };

        drop(lease);
        Some(self.finish(outcome))
    }

    fn finish(&self, outcome: ScanResult<DecodedPayload>) -> ScanResult<DecodedPayload> {
        match &outcome {
            Ok(payload) => {
                tracing::info!("Scanned QR code: {}", payload);
                self.set_phase(ScanPhase::Decoded(payload.clone()));
            }
            Err(e) if e.is_reportable() => {
                tracing::warn!("Scan failed: {}", e);
                self.set_phase(ScanPhase::Failed(e.clone()));
            }
            Err(e) => {
                tracing::debug!("{}", e);
                // A replacing session owns the phase once it holds the slot
                if !self.inner.slot.when_vacant(|| self.set_phase(ScanPhase::Idle)) {
                    tracing::debug!("Newer scan session active, leaving phase to it");
                }
                return outcome;
            }
        }
        self.set_phase(ScanPhase::Idle);
        outcome
    }

    fn set_phase(&self, phase: ScanPhase) {
        self.inner.phase.send_replace(phase);
    }
}
