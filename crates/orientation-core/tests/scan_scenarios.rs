//! Scan orchestration scenarios
//!
//! Camera sessions run against scripted frame sources on paused tokio time;
//! uploads use PNGs rendered with `qrcode`.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use image::{DynamicImage, GrayImage, ImageFormat, Luma};
use orientation_core::{
    CaptureConstraints, DeviceClass, FrameSource, Notice, ScanError, ScanPhase, ScanResult,
    ScanRoute, ScanSettings, Scanner, Upload,
};
use qrcode::QrCode;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

type EventLog = Rc<RefCell<Vec<String>>>;

/// Camera that plays back a fixed list of frames, then hangs.
struct ScriptedCamera {
    name: &'static str,
    frames: VecDeque<ScanResult<Option<DynamicImage>>>,
    start_error: Option<ScanError>,
    log: EventLog,
}

impl ScriptedCamera {
    fn new(name: &'static str, log: &EventLog) -> Self {
        Self {
            name,
            frames: VecDeque::new(),
            start_error: None,
            log: log.clone(),
        }
    }

    fn frame(mut self, frame: DynamicImage) -> Self {
        self.frames.push_back(Ok(Some(frame)));
        self
    }

    fn not_ready(mut self) -> Self {
        self.frames.push_back(Ok(None));
        self
    }

    fn broken(mut self, err: ScanError) -> Self {
        self.frames.push_back(Err(err));
        self
    }

    fn denied(mut self) -> Self {
        self.start_error = Some(ScanError::CameraUnavailable("NotAllowedError".into()));
        self
    }
}

impl FrameSource for ScriptedCamera {
    async fn start(&mut self, _constraints: &CaptureConstraints) -> ScanResult<()> {
        self.log.borrow_mut().push(format!("start {}", self.name));
        match self.start_error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    async fn next_frame(&mut self) -> ScanResult<Option<DynamicImage>> {
        match self.frames.pop_front() {
            Some(frame) => frame,
            None => std::future::pending().await,
        }
    }

    fn stop(&mut self) {
        self.log.borrow_mut().push(format!("stop {}", self.name));
    }
}

fn qr_code(data: &str) -> GrayImage {
    QrCode::new(data.as_bytes())
        .unwrap()
        .render::<Luma<u8>>()
        .quiet_zone(true)
        .min_dimensions(200, 200)
        .build()
}

/// 640x480 camera frame with a code in the middle
fn frame_with_code(data: &str) -> DynamicImage {
    let code = qr_code(data);
    let mut frame = GrayImage::from_pixel(640, 480, Luma([255]));
    let x = (640 - code.width() as i64) / 2;
    let y = (480 - code.height() as i64) / 2;
    image::imageops::overlay(&mut frame, &code, x, y);
    DynamicImage::ImageLuma8(frame)
}

fn blank_frame() -> DynamicImage {
    DynamicImage::ImageLuma8(GrayImage::from_pixel(640, 480, Luma([200])))
}

fn png_bytes(image: &DynamicImage) -> Vec<u8> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut std::io::Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}

fn mobile_scanner() -> Scanner {
    Scanner::new(DeviceClass::Mobile, ScanSettings::default())
}

fn desktop_scanner() -> Scanner {
    Scanner::new(DeviceClass::Desktop, ScanSettings::default())
}

// ============================================================================
// Camera Tests
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_camera_skips_frames_without_code() {
    let log = EventLog::default();
    let scanner = mobile_scanner();
    assert_eq!(scanner.route(), ScanRoute::Camera);

    let camera = ScriptedCamera::new("rear", &log)
        .not_ready()
        .frame(blank_frame())
        .frame(blank_frame())
        .frame(frame_with_code("TEAM-07"));

    let payload = scanner.scan_camera(camera).await.unwrap();

    assert_eq!(payload.as_str(), "TEAM-07");
    assert_eq!(*log.borrow(), ["start rear", "stop rear"]);
    assert_eq!(scanner.phase(), ScanPhase::Idle);
    assert!(!scanner.is_scanning());
}

#[tokio::test(start_paused = true)]
async fn test_camera_tests_frames_at_scan_rate() {
    let log = EventLog::default();
    let scanner = mobile_scanner();
    let camera = ScriptedCamera::new("rear", &log)
        .frame(blank_frame())
        .frame(blank_frame())
        .frame(blank_frame())
        .frame(frame_with_code("paced"));

    let started = tokio::time::Instant::now();
    scanner.scan_camera(camera).await.unwrap();

    // Fourth frame is taken on the fourth tick at 10 fps
    assert_eq!(started.elapsed(), Duration::from_millis(300));
}

#[tokio::test(start_paused = true)]
async fn test_camera_permission_denied() {
    let log = EventLog::default();
    let scanner = mobile_scanner();
    let camera = ScriptedCamera::new("rear", &log).denied();

    let err = scanner.scan_camera(camera).await.unwrap_err();

    assert!(matches!(err, ScanError::CameraUnavailable(_)));
    assert_eq!(
        Notice::error(&err).message,
        "Failed to start camera. Please check permissions."
    );
    // Partial acquisition is still released, exactly once
    assert_eq!(*log.borrow(), ["start rear", "stop rear"]);
    assert_eq!(scanner.phase(), ScanPhase::Idle);
    assert!(!scanner.is_scanning());
}

#[tokio::test(start_paused = true)]
async fn test_camera_stream_failure() {
    let log = EventLog::default();
    let scanner = mobile_scanner();
    let camera = ScriptedCamera::new("rear", &log)
        .frame(blank_frame())
        .broken(ScanError::Stream("track ended".into()));

    let err = scanner.scan_camera(camera).await.unwrap_err();

    assert_eq!(err, ScanError::Stream("track ended".into()));
    assert_eq!(*log.borrow(), ["start rear", "stop rear"]);
    assert!(!scanner.is_scanning());
}

#[tokio::test(start_paused = true)]
async fn test_second_session_releases_first() {
    let log = EventLog::default();
    let scanner = mobile_scanner();

    // First camera never sees a code
    let first = ScriptedCamera::new("first", &log).frame(blank_frame());
    let second = ScriptedCamera::new("second", &log).frame(frame_with_code("second wins"));

    let (first_outcome, second_outcome) = tokio::join!(scanner.scan_camera(first), async {
        tokio::time::sleep(Duration::from_secs(1)).await;
        scanner.scan_camera(second).await
    });

    assert!(matches!(first_outcome, Err(ScanError::Cancelled(1))));
    assert!(Notice::from_outcome(&first_outcome).is_none());
    assert_eq!(second_outcome.unwrap().as_str(), "second wins");
    assert_eq!(
        *log.borrow(),
        ["start first", "stop first", "start second", "stop second"]
    );
    assert!(!scanner.is_scanning());
    assert_eq!(scanner.phase(), ScanPhase::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_dropped_scan_releases_camera() {
    let log = EventLog::default();
    let scanner = mobile_scanner();
    let camera = ScriptedCamera::new("rear", &log).frame(blank_frame());

    let timed_out =
        tokio::time::timeout(Duration::from_secs(2), scanner.scan_camera(camera)).await;

    assert!(timed_out.is_err());
    assert_eq!(*log.borrow(), ["start rear", "stop rear"]);
    assert!(!scanner.is_scanning());
}

#[tokio::test(start_paused = true)]
async fn test_teardown_cancels_camera() {
    let log = EventLog::default();
    let scanner = mobile_scanner();
    let camera = ScriptedCamera::new("rear", &log);

    let (outcome, _) = tokio::join!(scanner.scan_camera(camera), async {
        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(scanner.is_scanning());
        scanner.cancel();
    });

    assert!(matches!(outcome, Err(ScanError::Cancelled(_))));
    assert_eq!(*log.borrow(), ["start rear", "stop rear"]);
    assert!(!scanner.is_scanning());
    assert_eq!(scanner.phase(), ScanPhase::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_cancelled_scan_returns_to_idle() {
    let log = EventLog::default();
    let scanner = mobile_scanner();
    let camera = ScriptedCamera::new("rear", &log).not_ready();
    let phases = scanner.subscribe();

    let (outcome, busy_before_cancel) = tokio::join!(scanner.scan_camera(camera), async {
        tokio::time::sleep(Duration::from_millis(300)).await;
        let busy = phases.borrow().is_busy();
        scanner.cancel();
        busy
    });

    assert!(busy_before_cancel);
    assert!(matches!(outcome, Err(ScanError::Cancelled(1))));
    assert!(Notice::from_outcome(&outcome).is_none());
    assert_eq!(scanner.phase(), ScanPhase::Idle);
    assert!(!scanner.phase().is_busy());

    // The page can scan again after a cancel
    let retry = ScriptedCamera::new("retry", &log).frame(frame_with_code("again"));
    assert_eq!(scanner.scan_camera(retry).await.unwrap().as_str(), "again");
    assert_eq!(scanner.phase(), ScanPhase::Idle);
}

// ============================================================================
// Upload Tests
// ============================================================================

#[tokio::test]
async fn test_upload_with_code() {
    let scanner = desktop_scanner();
    assert_eq!(scanner.route(), ScanRoute::Upload);

    let text = "https://example.org/register?event=orientation-2025";
    let upload = Upload::new("ticket.png", png_bytes(&frame_with_code(text)));

    let payload = scanner.scan_upload(Some(upload)).await.unwrap().unwrap();

    assert_eq!(payload.as_str(), text);
    assert_eq!(
        Notice::success(&payload).message,
        format!("Successfully scanned: {}", text)
    );
    assert_eq!(scanner.phase(), ScanPhase::Idle);
    assert!(!scanner.is_scanning());
}

#[tokio::test]
async fn test_upload_without_code() {
    let scanner = desktop_scanner();
    let mut phases = scanner.subscribe();
    let upload = Upload::new("cat.png", png_bytes(&blank_frame()));

    let outcome = scanner.scan_upload(Some(upload)).await.unwrap();

    assert_eq!(outcome, Err(ScanError::NoCodeFound));
    assert_eq!(
        Notice::from_outcome(&outcome).unwrap().message,
        "No valid QR code found in the image"
    );
    // Back to idle, no retry pending
    assert!(phases.has_changed().unwrap());
    assert_eq!(*phases.borrow_and_update(), ScanPhase::Idle);
    assert!(!scanner.is_scanning());
}

#[tokio::test]
async fn test_upload_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("badge.png");
    std::fs::write(&path, png_bytes(&frame_with_code("BADGE-19"))).unwrap();

    let scanner = desktop_scanner();
    let upload = Upload::read(&path).await.unwrap();
    assert_eq!(upload.name, "badge.png");

    let payload = scanner.scan_upload(Some(upload)).await.unwrap().unwrap();
    assert_eq!(payload.as_str(), "BADGE-19");
}
