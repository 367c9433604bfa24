//! Notice Banner Component

use dioxus::prelude::*;
use orientation_core::{Notice, NoticeLevel};

/// Floating banner with the outcome of a scan.
#[component]
pub fn NoticeBanner(notice: Notice, on_close: EventHandler<()>) -> Element {
    let class = match notice.level {
        NoticeLevel::Success => "notice-banner success",
        NoticeLevel::Error => "notice-banner error",
    };

    rsx! {
        div { class: "{class}", role: "alert",
            p { class: "notice-message", "{notice.message}" }
            button {
                class: "notice-close",
                "aria-label": "Dismiss",
                onclick: move |_| on_close.call(()),
                "✕"
            }
        }
    }
}
