//! Events page - scan a registration QR code.
//!
//! Mobile devices scan with the camera, desktops upload an image. Either
//! way the outcome ends up in a notice banner.

use std::path::PathBuf;

use dioxus::prelude::*;
use orientation_core::{Notice, ScanRoute, Scanner, Upload};
use rfd::FileDialog;

use crate::camera::{WebviewCamera, READER_VIDEO_ID};
use crate::components::{NavBar, NoticeBanner, UploadModal};
use crate::context::{use_device_class, use_event_config};

/// Events page component.
#[component]
pub fn Events() -> Element {
    let config = use_event_config();
    let device = use_device_class();

    let scanner = use_hook(|| Scanner::new(device, config.scan));
    let mut scanning = use_signal(|| false);
    let mut show_upload = use_signal(|| false);
    let mut notice: Signal<Option<Notice>> = use_signal(|| None);

    // Leaving the page stops the camera and abandons any decode.
    use_drop({
        let scanner = scanner.clone();
        move || scanner.cancel()
    });

    let mut start_camera = {
        let scanner = scanner.clone();
        move || {
            let scanner = scanner.clone();
            notice.set(None);
            scanning.set(true);
            spawn(async move {
                let outcome = scanner
                    .scan_camera(WebviewCamera::new(READER_VIDEO_ID))
                    .await;
                if let Some(n) = Notice::from_outcome(&outcome) {
                    notice.set(Some(n));
                }
                scanning.set(false);
            });
        }
    };

    let pick_and_scan = {
        let scanner = scanner.clone();
        move |_| {
            let scanner = scanner.clone();
            notice.set(None);
            spawn(async move {
                let picked: Option<PathBuf> = tokio::task::spawn_blocking(|| {
                    FileDialog::new()
                        .add_filter("images", &["png", "jpg", "jpeg", "webp"])
                        .set_title("Select QR Code Image")
                        .pick_file()
                })
                .await
                .unwrap_or_else(|e| {
                    tracing::error!("File picker task failed: {}", e);
                    None
                });

                let upload = match picked {
                    Some(path) => match Upload::read(&path).await {
                        Ok(upload) => Some(upload),
                        Err(e) => {
                            tracing::warn!("Failed to read {}: {}", path.display(), e);
                            notice.set(Some(Notice::error(&e)));
                            return;
                        }
                    },
                    None => None,
                };

                scanning.set(true);
                let outcome = scanner.scan_upload(upload).await;
                scanning.set(false);

                match outcome {
                    Some(Ok(payload)) => {
                        notice.set(Some(Notice::success(&payload)));
                        show_upload.set(false);
                    }
                    Some(Err(e)) => {
                        if e.is_reportable() {
                            notice.set(Some(Notice::error(&e)));
                        }
                    }
                    None => {}
                }
            });
        }
    };

    let on_scan = move |_| {
        if scanning() {
            return;
        }
        match device.scan_route() {
            ScanRoute::Camera => start_camera(),
            ScanRoute::Upload => show_upload.set(true),
        }
    };

    let cancel_camera = {
        let scanner = scanner.clone();
        move |_| scanner.cancel()
    };

    let reader_open = scanning() && device.scan_route() == ScanRoute::Camera;

    rsx! {
        NavBar {}

        main { class: "page events",
            h1 { class: "page-title", "Events" }

            section { class: "scan-card",
                h2 { class: "section-title", "Scan to Register" }
                p { class: "scan-prompt", "{device.scan_prompt()}" }

                button {
                    class: "btn-primary",
                    disabled: scanning(),
                    onclick: on_scan,
                    if scanning() { "Scanning..." } else { "Scan QR Code" }
                }
            }

            // The video stays mounted so the camera script can always find it.
            div {
                class: if reader_open { "reader-overlay open" } else { "reader-overlay" },
                video {
                    id: READER_VIDEO_ID,
                    class: "reader-video",
                    autoplay: true,
                    playsinline: true,
                    muted: true,
                }
                div { class: "reader-frame" }
                button {
                    class: "btn-ghost reader-cancel",
                    onclick: cancel_camera,
                    "Cancel"
                }
            }

            UploadModal {
                show: show_upload(),
                busy: scanning(),
                on_close: move |_| show_upload.set(false),
                on_pick: pick_and_scan,
            }

            if let Some(n) = notice() {
                NoticeBanner {
                    notice: n,
                    on_close: move |_| notice.set(None),
                }
            }
        }
    }
}
