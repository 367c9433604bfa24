//! Color constants shared with Rust-side rendering.
//!
//! Keep these in sync with the custom properties in `styles.rs`.

/// Foreground of rendered QR codes (`--ink`).
pub const INK: &str = "#0b0d17";

/// Background of rendered QR codes (`--paper`).
pub const PAPER: &str = "#f5f5f5";
