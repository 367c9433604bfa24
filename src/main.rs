#![allow(non_snake_case)]

mod app;
mod camera;
mod components;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;

use anyhow::Result;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use orientation_core::{DeviceClass, EventConfig};

/// Event configuration, set from command line
static EVENT_CONFIG: OnceLock<EventConfig> = OnceLock::new();

/// Device class, decided once at startup
static DEVICE_CLASS: OnceLock<DeviceClass> = OnceLock::new();

/// Get the event configuration (set from command line or default)
pub fn get_event_config() -> EventConfig {
    EVENT_CONFIG.get().cloned().unwrap_or_default()
}

/// Get the device class (set from command line or detected)
pub fn get_device_class() -> DeviceClass {
    DEVICE_CLASS.get().copied().unwrap_or_else(DeviceClass::detect)
}

/// Orientation - event countdown and QR registration
#[derive(Parser, Debug)]
#[command(name = "orientation-desktop")]
#[command(about = "Orientation - event countdown and QR registration")]
struct Args {
    /// Event start (YYYY-MM-DDTHH:MM:SS local, or RFC 3339)
    #[arg(long)]
    event_at: Option<String>,

    /// Event title shown above the countdown
    #[arg(long)]
    title: Option<String>,

    /// Device class: auto, mobile or desktop (mobile scans with the camera)
    #[arg(long, default_value = "auto")]
    device: DeviceClass,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut config = EventConfig::default();
    if let Some(ref at) = args.event_at {
        config = config.with_starts_at(at)?;
    }
    if let Some(title) = args.title {
        config.title = title;
    }
    config.scan.validate()?;

    tracing::info!(
        "Starting '{}' ({}) as {} device",
        config.title,
        config.date_line(),
        args.device
    );

    // Phone-shaped window for the camera flow, wider for uploads
    let (window_width, window_height) = match args.device {
        DeviceClass::Mobile => (420.0, 860.0),
        DeviceClass::Desktop => (1100.0, 800.0),
    };
    let title = config.title.clone();

    // Store startup configuration globally
    let _ = EVENT_CONFIG.set(config);
    let _ = DEVICE_CLASS.set(args.device);

    // Configure desktop window
    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);

    Ok(())
}
