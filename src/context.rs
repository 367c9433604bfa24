//! Startup context for Orientation pages.
//!
//! The event configuration and the device class are decided once in `main`
//! and provided to every page through `use_context`.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let config = use_event_config();
//! let device = use_device_class();
//! ```

use dioxus::prelude::*;
use orientation_core::{DeviceClass, EventConfig};

/// Get the event configuration set at startup.
pub fn get_event_config() -> EventConfig {
    crate::get_event_config()
}

/// Get the device class set at startup.
pub fn get_device_class() -> DeviceClass {
    crate::get_device_class()
}

/// Hook to access the event configuration from context.
pub fn use_event_config() -> EventConfig {
    use_context::<EventConfig>()
}

/// Hook to access the device class from context.
///
/// Pages branch on this instead of inspecting the platform themselves.
pub fn use_device_class() -> DeviceClass {
    use_context::<DeviceClass>()
}
