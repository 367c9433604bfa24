//! Scan session ownership.
//!
//! A [`SessionSlot`] is shared by everything on one page that can start a
//! scan. [`SessionSlot::acquire`] hands out a [`SessionLease`]; if another
//! lease is still out, it is cancelled and the slot waits until that lease
//! has been dropped before registering the new one. At most one lease is
//! registered at any time.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use image::DynamicImage;
use parking_lot::Mutex;
use tokio_util::sync::{CancellationToken, DropGuard, WaitForCancellationFuture};

use super::source::{CaptureConstraints, FrameSource};
use super::CaptureMode;
use crate::error::ScanResult;

struct ActiveEntry {
    id: u64,
    mode: CaptureMode,
    cancel: CancellationToken,
    /// Cancelled once the lease has been dropped.
    released: CancellationToken,
}

#[derive(Default)]
struct SlotInner {
    next_id: AtomicU64,
    active: Mutex<Option<ActiveEntry>>,
    /// Held by the acquirer that is taking over the slot.
    handover: tokio::sync::Mutex<()>,
}

/// Single-session slot for one page instance.
#[derive(Clone, Default)]
pub struct SessionSlot {
    inner: Arc<SlotInner>,
}

impl std::fmt::Debug for SessionSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionSlot")
            .field("active", &self.active_id())
            .finish()
    }
}

impl SessionSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the slot, force-releasing whatever session holds it.
    ///
    /// Resolves only after the previous lease has been dropped. The old
    /// entry stays registered until then, and concurrent acquirers queue up
    /// in call order, so each one replaces the lease granted just before it.
    pub async fn acquire(&self, mode: CaptureMode) -> SessionLease {
        let _handover = self.inner.handover.lock().await;

        loop {
            let released = {
                let mut active = self.inner.active.lock();
                let Some(previous) = active.as_ref() else {
                    return self.register(&mut active, mode);
                };
                tracing::warn!(
                    "Scan session {} ({}) still active, force-releasing it",
                    previous.id,
                    previous.mode
                );
                previous.cancel.cancel();
                previous.released.clone()
            };
            released.cancelled().await;
        }
    }

    fn register(&self, active: &mut Option<ActiveEntry>, mode: CaptureMode) -> SessionLease {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let cancel = CancellationToken::new();
        let released = CancellationToken::new();
        *active = Some(ActiveEntry {
            id,
            mode,
            cancel: cancel.clone(),
            released: released.clone(),
        });
        tracing::debug!("Scan session {} acquired ({})", id, mode);
        SessionLease {
            id,
            mode,
            cancel,
            slot: self.clone(),
            _released: released.drop_guard(),
        }
    }

    /// Cancel the current session, if any. Used on page teardown.
    pub fn release_all(&self) {
        if let Some(entry) = self.inner.active.lock().as_ref() {
            tracing::info!("Cancelling scan session {} on teardown", entry.id);
            entry.cancel.cancel();
        }
    }

    /// Whether a session currently holds the slot.
    pub fn is_active(&self) -> bool {
        self.inner.active.lock().is_some()
    }

    /// Id of the session holding the slot.
    pub fn active_id(&self) -> Option<u64> {
        self.inner.active.lock().as_ref().map(|entry| entry.id)
    }

    /// Mode of the session holding the slot.
    pub fn active_mode(&self) -> Option<CaptureMode> {
        self.inner.active.lock().as_ref().map(|entry| entry.mode)
    }

    /// Run `f` under the slot lock if no session holds the slot.
    ///
    /// Returns whether `f` ran. A new lease cannot be registered while `f`
    /// runs.
    pub(crate) fn when_vacant(&self, f: impl FnOnce()) -> bool {
        let active = self.inner.active.lock();
        if active.is_some() {
            return false;
        }
        f();
        true
    }

    fn clear(&self, id: u64) {
        let mut active = self.inner.active.lock();
        if active.as_ref().map(|entry| entry.id) == Some(id) {
            *active = None;
        }
    }
}

/// Right to run one scan session. Dropping it frees the slot.
pub struct SessionLease {
    id: u64,
    mode: CaptureMode,
    cancel: CancellationToken,
    slot: SessionSlot,
    // Dropped after `Drop::drop` has cleared the slot
    _released: DropGuard,
}

impl std::fmt::Debug for SessionLease {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionLease")
            .field("id", &self.id)
            .field("mode", &self.mode)
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}

impl SessionLease {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn mode(&self) -> CaptureMode {
        self.mode
    }

    /// Whether a newer session (or teardown) asked this one to stop.
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Resolves when this session is asked to stop.
    pub fn cancelled(&self) -> WaitForCancellationFuture<'_> {
        self.cancel.cancelled()
    }

    /// Owned handle on the cancellation signal.
    pub fn token(&self) -> CancellationToken {
        self.cancel.clone()
    }
}

impl Drop for SessionLease {
    fn drop(&mut self) {
        self.slot.clear(self.id);
        tracing::debug!("Scan session {} lease dropped", self.id);
    }
}

/// A camera source bound to a lease.
///
/// The source is stopped exactly once: by [`ScanSession::release`] or, at
/// the latest, when the session is dropped. The lease is dropped after the
/// source has been stopped.
pub struct ScanSession<S: FrameSource> {
    source: S,
    running: bool,
    lease: SessionLease,
}

impl<S: FrameSource> ScanSession<S> {
    pub fn new(lease: SessionLease, source: S) -> Self {
        Self {
            source,
            running: false,
            lease,
        }
    }

    /// Open the camera. A failed start is released before returning.
    pub async fn start(&mut self, constraints: &CaptureConstraints) -> ScanResult<()> {
        // Marked running first so a partial acquisition is still stopped
        self.running = true;
        if let Err(e) = self.source.start(constraints).await {
            self.release();
            return Err(e);
        }
        tracing::info!(
            "Scan session {} started camera ({} fps, facing {})",
            self.lease.id,
            constraints.fps,
            constraints.facing.as_constraint()
        );
        Ok(())
    }

    pub async fn next_frame(&mut self) -> ScanResult<Option<DynamicImage>> {
        self.source.next_frame().await
    }

    /// Stop the source if it is still running.
    pub fn release(&mut self) {
        if self.running {
            self.running = false;
            self.source.stop();
            tracing::info!("Scan session {} released camera", self.lease.id);
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn lease(&self) -> &SessionLease {
        &self.lease
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S: FrameSource> Drop for ScanSession<S> {
    fn drop(&mut self) {
        self.release();
    }
}
