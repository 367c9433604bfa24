//! Webview camera.
//!
//! The desktop webview owns the camera through `getUserMedia`. A long-lived
//! eval script keeps the stream open, answers each "frame" request with a
//! JPEG data URL of the current video frame, and stops every track when it
//! receives "stop".

use base64::Engine;
use dioxus::document::{self, Eval};
use image::DynamicImage;
use orientation_core::{CaptureConstraints, FrameSource, ScanError, ScanResult};
use serde::Deserialize;

/// Element id of the `<video>` the camera renders into.
pub const READER_VIDEO_ID: &str = "reader-video";

const CAMERA_SCRIPT: &str = r#"
const video = document.getElementById("__VIDEO_ID__");
let stream = null;
try {
  stream = await navigator.mediaDevices.getUserMedia({
    video: { facingMode: { ideal: "__FACING__" } },
    audio: false,
  });
  window.__orientationStream = stream;
  video.srcObject = stream;
  await video.play();
  dioxus.send({ ok: true });
} catch (e) {
  if (stream) stream.getTracks().forEach((t) => t.stop());
  dioxus.send({ ok: false, error: String(e) });
  return;
}

const canvas = document.createElement("canvas");
const ctx = canvas.getContext("2d");
while (true) {
  const msg = await dioxus.recv();
  if (msg !== "frame") break;
  if (!video.videoWidth) {
    dioxus.send({ kind: "pending" });
    continue;
  }
  canvas.width = video.videoWidth;
  canvas.height = video.videoHeight;
  ctx.drawImage(video, 0, 0);
  dioxus.send({ kind: "frame", data: canvas.toDataURL("image/jpeg", 0.85) });
}

stream.getTracks().forEach((t) => t.stop());
video.srcObject = null;
window.__orientationStream = null;
"#;

// Covers a stop that arrives while getUserMedia is still pending
const STOP_SCRIPT: &str = r#"
if (window.__orientationStream) {
  window.__orientationStream.getTracks().forEach((t) => t.stop());
  window.__orientationStream = null;
}
"#;

#[derive(Deserialize)]
struct StartReply {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum FrameReply {
    Frame { data: String },
    Pending,
}

/// Camera frames from the webview.
pub struct WebviewCamera {
    video_id: &'static str,
    eval: Option<Eval>,
}

impl WebviewCamera {
    pub fn new(video_id: &'static str) -> Self {
        Self {
            video_id,
            eval: None,
        }
    }
}

impl FrameSource for WebviewCamera {
    async fn start(&mut self, constraints: &CaptureConstraints) -> ScanResult<()> {
        let script = CAMERA_SCRIPT
            .replace("__VIDEO_ID__", self.video_id)
            .replace("__FACING__", constraints.facing.as_constraint());

        // Kept before awaiting so a failed start is still stopped
        let eval = self.eval.insert(document::eval(&script));
        let reply: StartReply = eval
            .recv()
            .await
            .map_err(|e| ScanError::CameraUnavailable(format!("{:?}", e)))?;

        if reply.ok {
            Ok(())
        } else {
            Err(ScanError::CameraUnavailable(
                reply.error.unwrap_or_else(|| "unknown error".to_string()),
            ))
        }
    }

    async fn next_frame(&mut self) -> ScanResult<Option<DynamicImage>> {
        let eval = self
            .eval
            .as_mut()
            .ok_or_else(|| ScanError::Stream("camera not started".to_string()))?;

        eval.send("frame")
            .map_err(|e| ScanError::Stream(format!("{:?}", e)))?;
        let reply: FrameReply = eval
            .recv()
            .await
            .map_err(|e| ScanError::Stream(format!("{:?}", e)))?;

        match reply {
            FrameReply::Pending => Ok(None),
            // A frame that fails to decode is skipped like a frame without a code
            FrameReply::Frame { data } => match decode_data_url(&data) {
                Ok(image) => Ok(Some(image)),
                Err(e) => {
                    tracing::debug!("Dropping undecodable frame: {}", e);
                    Ok(None)
                }
            },
        }
    }

    fn stop(&mut self) {
        if let Some(eval) = self.eval.take() {
            let _ = eval.send("stop");
        }
        let _ = document::eval(STOP_SCRIPT);
    }
}

/// Decode a `data:image/...;base64,` URL into an image.
fn decode_data_url(url: &str) -> ScanResult<DynamicImage> {
    let (_, encoded) = url
        .split_once(',')
        .ok_or_else(|| ScanError::UnreadableImage("malformed frame data".to_string()))?;
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(encoded)
        .map_err(|e| ScanError::UnreadableImage(format!("frame is not base64: {}", e)))?;
    Ok(image::load_from_memory(&bytes)?)
}
