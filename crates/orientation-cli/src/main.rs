//! Orientation CLI
//!
//! Thin wrapper around orientation-core for terminal use.
//!
//! ## Usage
//!
//! ```bash
//! # Time left until the event
//! orientation countdown
//!
//! # Against another start time, as JSON
//! orientation countdown --at 2025-02-21T11:00:00 --json
//!
//! # Decode a QR code from an image file
//! orientation decode ticket.png
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use orientation_core::{
    CountdownState, DeviceClass, EventConfig, Notice, NoticeLevel, Scanner, Upload,
};

/// Orientation - event countdown and QR registration
#[derive(Parser)]
#[command(name = "orientation")]
#[command(version = "0.1.0")]
#[command(about = "Orientation - event countdown and QR registration")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the time left until the event
    Countdown {
        /// Event start (YYYY-MM-DDTHH:MM:SS local, or RFC 3339)
        #[arg(long)]
        at: Option<String>,

        /// Pretend the current time is this (same formats as --at)
        #[arg(long)]
        now: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Decode a QR code from an image file
    Decode {
        /// Image file (PNG, JPEG, WebP)
        image: PathBuf,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let mut config = EventConfig::default();

    match cli.command {
        Commands::Countdown { at, now, json } => {
            if let Some(ref at) = at {
                config = config.with_starts_at(at)?;
            }
            let now_ms = match now {
                Some(ref now) => EventConfig::parse_starts_at(now)?.timestamp_millis(),
                None => chrono::Utc::now().timestamp_millis(),
            };

            match CountdownState::between(config.target_epoch_ms(), now_ms) {
                Some(state) => {
                    let padded = state.padded();
                    if json {
                        println!("{}", serde_json::to_string(&padded)?);
                    } else {
                        println!("{}", config.title);
                        println!("  {}", config.date_line());
                        println!();
                        println!(
                            "  {} days  {} hours  {} minutes  {} seconds",
                            padded.days, padded.hours, padded.minutes, padded.seconds
                        );
                    }
                }
                None => {
                    if json {
                        println!("{}", serde_json::json!({ "started": true }));
                    } else {
                        println!("{} has started.", config.title);
                    }
                }
            }
        }

        Commands::Decode { image, json } => {
            let upload = Upload::read(&image)
                .await
                .with_context(|| format!("Failed to read {}", image.display()))?;

            let scanner = Scanner::new(DeviceClass::Desktop, config.scan);
            let Some(outcome) = scanner.scan_upload(Some(upload)).await else {
                return Ok(());
            };

            let notice = Notice::from_outcome(&outcome)
                .unwrap_or_else(|| Notice::error(&orientation_core::ScanError::NoCodeFound));

            if json {
                let payload = outcome.as_ref().ok().map(|p| p.as_str());
                println!(
                    "{}",
                    serde_json::json!({
                        "level": notice.level,
                        "message": notice.message,
                        "payload": payload,
                    })
                );
            } else if let Ok(ref payload) = outcome {
                println!("{}", payload);
            }

            if notice.level == NoticeLevel::Error {
                anyhow::bail!("{}", notice);
            }
        }
    }

    Ok(())
}
