//! Countdown Display Component
//!
//! Four animated tiles: days, hours, minutes, seconds.

use dioxus::prelude::*;
use orientation_core::{CountdownState, TimerUnit};

/// Props for the countdown display.
#[derive(Props, Clone, PartialEq)]
pub struct CountdownDisplayProps {
    /// Latest countdown state
    pub state: CountdownState,
}

/// Countdown tiles.
///
/// Each number is keyed by its value, so a changed digit is re-mounted and
/// its slide-in animation plays again.
#[component]
pub fn CountdownDisplay(props: CountdownDisplayProps) -> Element {
    let padded = props.state.padded();

    rsx! {
        div { class: "countdown-grid",
            for unit in TimerUnit::ALL {
                div {
                    key: "{unit.label()}",
                    class: "countdown-unit",
                    for value in std::iter::once(padded.get(unit).to_string()) {
                        span { key: "{value}", class: "countdown-value", "{value}" }
                    }
                    span { class: "countdown-label", "{unit.label()}" }
                }
            }
        }
    }
}
