//! CLI Integration Tests
//!
//! These tests verify the CLI commands work correctly end-to-end.
//! They test the "wiring" between the CLI and the core library.

use std::path::PathBuf;

use assert_cmd::Command;
use image::{DynamicImage, GrayImage, ImageFormat, Luma};
use predicates::prelude::*;
use qrcode::QrCode;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

fn cli_cmd() -> Command {
    Command::cargo_bin("orientation").expect("Failed to find orientation binary")
}

/// Write a PNG into the temp dir and return its path
fn write_png(dir: &TempDir, name: &str, image: DynamicImage) -> PathBuf {
    let path = dir.path().join(name);
    image.save_with_format(&path, ImageFormat::Png).unwrap();
    path
}

fn qr_png(dir: &TempDir, name: &str, data: &str) -> PathBuf {
    let code = QrCode::new(data.as_bytes())
        .unwrap()
        .render::<Luma<u8>>()
        .min_dimensions(240, 240)
        .build();
    write_png(dir, name, DynamicImage::ImageLuma8(code))
}

// ============================================================================
// Countdown Command Tests
// ============================================================================

#[test]
fn test_countdown_one_day_json() {
    cli_cmd()
        .args([
            "countdown",
            "--at",
            "2025-02-21T11:00:00",
            "--now",
            "2025-02-20T11:00:00",
            "--json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"{"days":"01","hours":"00","minutes":"00","seconds":"00"}"#,
        ));
}

#[test]
fn test_countdown_text() {
    cli_cmd()
        .args([
            "countdown",
            "--at",
            "2025-02-21T11:00:00+00:00",
            "--now",
            "2025-02-18T07:34:15+00:00",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("E-Cell Orientation 2025"))
        .stdout(predicate::str::contains(
            "03 days  03 hours  25 minutes  45 seconds",
        ));
}

#[test]
fn test_countdown_after_start() {
    cli_cmd()
        .args([
            "countdown",
            "--at",
            "2025-02-21T11:00:00",
            "--now",
            "2025-02-21T11:00:01",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("has started"));
}

#[test]
fn test_countdown_rejects_bad_timestamp() {
    cli_cmd()
        .args(["countdown", "--at", "tomorrow"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid event timestamp"));
}

// ============================================================================
// Decode Command Tests
// ============================================================================

#[test]
fn test_decode_qr_image() {
    let dir = TempDir::new().unwrap();
    let path = qr_png(&dir, "ticket.png", "REG-2025-0042");

    cli_cmd()
        .arg("decode")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::diff("REG-2025-0042\n"));
}

#[test]
fn test_decode_json() {
    let dir = TempDir::new().unwrap();
    let path = qr_png(&dir, "ticket.png", "team=blue");

    cli_cmd()
        .arg("decode")
        .arg(&path)
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""level":"success""#))
        .stdout(predicate::str::contains(r#""payload":"team=blue""#));
}

#[test]
fn test_decode_image_without_code() {
    let dir = TempDir::new().unwrap();
    let blank = DynamicImage::ImageLuma8(GrayImage::from_pixel(320, 320, Luma([255])));
    let path = write_png(&dir, "blank.png", blank);

    cli_cmd()
        .arg("decode")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No valid QR code found in the image"));
}

#[test]
fn test_decode_missing_file() {
    cli_cmd()
        .args(["decode", "/definitely/not/here.png"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn test_decode_json_without_code_fails() {
    let dir = TempDir::new().unwrap();
    let blank = DynamicImage::ImageLuma8(GrayImage::from_pixel(320, 320, Luma([255])));
    let path = write_png(&dir, "blank.png", blank);

    cli_cmd()
        .arg("decode")
        .arg(&path)
        .arg("--json")
        .assert()
        .failure()
        .stdout(predicate::str::contains(r#""level":"error""#))
        .stdout(predicate::str::contains(r#""payload":null"#))
        .stderr(predicate::str::contains("No valid QR code found in the image"));
}

#[test]
fn test_decode_rejects_event_time() {
    let dir = TempDir::new().unwrap();
    let path = qr_png(&dir, "ticket.png", "REG-2025-0042");

    cli_cmd()
        .arg("decode")
        .arg(&path)
        .args(["--at", "2025-02-21T11:00:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--at"));
}
