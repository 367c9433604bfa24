//! Upload Modal Component
//!
//! Modal for picking a QR code image on desktop devices.

use dioxus::prelude::*;

/// Upload Modal
///
/// The page owns the scan; this modal only asks for a file.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     UploadModal {
///         show: show_upload(),
///         busy: scanning(),
///         on_close: move |_| show_upload.set(false),
///         on_pick: move |_| pick_and_scan(),
///     }
/// }
/// ```
#[component]
pub fn UploadModal(
    /// Whether to show the modal
    show: bool,
    /// Whether a decode is running
    #[props(default = false)]
    busy: bool,
    /// Callback when modal is closed
    on_close: EventHandler<()>,
    /// Callback when the user asks to choose a file
    on_pick: EventHandler<()>,
) -> Element {
    if !show {
        return rsx! {};
    }

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),

            div {
                class: "upload-modal",
                onclick: move |e| e.stop_propagation(),

                h2 { class: "modal-title", "Upload QR Code Image" }

                button {
                    class: "btn-primary",
                    disabled: busy,
                    onclick: move |_| on_pick.call(()),
                    if busy { "Scanning..." } else { "Choose Image" }
                }

                p { class: "modal-description",
                    "Select an image containing a QR code to scan"
                }

                div { class: "modal-actions",
                    button {
                        class: "btn-ghost",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}
