//! Home page - countdown to the orientation.
//!
//! The card slides in on mount and slides out before it is dismissed.

use std::time::Duration;

use dioxus::prelude::*;
use orientation_core::{Countdown, CountdownState};

use crate::app::Route;
use crate::components::{CountdownDisplay, NavBar};
use crate::context::use_event_config;

/// Length of the exit transition in `styles.rs`.
const EXIT_TRANSITION: Duration = Duration::from_millis(400);

/// Home page component.
#[component]
pub fn Home() -> Element {
    let navigator = use_navigator();
    let config = use_event_config();

    let mut timer = use_signal(|| CountdownState::ZERO);
    let mut started = use_signal(|| false);
    let mut leaving = use_signal(|| false);
    let mut dismissed = use_signal(|| false);

    let target_ms = config.target_epoch_ms();
    // Dropped with the component, which stops the ticker.
    use_future(move || async move {
        let mut countdown = Countdown::new(target_ms);
        let frozen = countdown.run(|state| timer.set(state)).await;
        timer.set(frozen);
        started.set(true);
    });

    let dismiss = move |_| {
        leaving.set(true);
        spawn(async move {
            tokio::time::sleep(EXIT_TRANSITION).await;
            dismissed.set(true);
            tracing::debug!("Countdown card dismissed");
        });
    };

    let date_line = config.date_line();
    let card_class = if leaving() {
        "countdown-card leaving"
    } else {
        "countdown-card"
    };

    rsx! {
        NavBar {}

        main { class: "home",
            if !dismissed() {
                section { class: "{card_class}",
                    button {
                        class: "card-dismiss",
                        "aria-label": "Dismiss",
                        onclick: dismiss,
                        "✕"
                    }

                    h1 { class: "event-title", "{config.title}" }
                    p { class: "event-date", "{date_line}" }

                    // Tiles keep the last values once the target has passed
                    CountdownDisplay { state: timer() }
                    if started() {
                        p { class: "event-started", "The orientation has started!" }
                    }

                    button {
                        class: "btn-primary",
                        onclick: move |_| {
                            navigator.push(Route::Signup {});
                        },
                        "Register Now"
                    }
                }
            } else {
                section { class: "home-welcome",
                    h1 { class: "page-title", "E-Cell" }
                    p { class: "tagline", "Ideas worth building start here." }
                }
            }
        }
    }
}
