//! flipbook-convert - convert an image sequence into Flipbook frames
//!
//! Extract a clip to zero-padded images first (e.g. with ffmpeg), then:
//!
//! ```text
//! flipbook-convert --src frames/ --width 240 --height 320 --out badapple/
//! ```
//!
//! and copy the output folder to `/screensavers/badapple` on the card.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use flipbook_convert::{convert_dir, BitOrder, ConvertOptions};

#[derive(Parser)]
#[command(name = "flipbook-convert")]
#[command(about = "Convert images into packed 1-bit Flipbook frames")]
#[command(version)]
struct Cli {
    /// Source frames directory (png, jpg, ...)
    #[arg(long)]
    src: PathBuf,

    /// Target width in pixels
    #[arg(long)]
    width: u32,

    /// Target height in pixels
    #[arg(long)]
    height: u32,

    /// Output directory for frame files
    #[arg(long)]
    out: PathBuf,

    /// Output extension
    #[arg(long, default_value = ".raw")]
    ext: String,

    /// Output filename prefix
    #[arg(long, default_value = "frame_")]
    prefix: String,

    /// Use LSB-first packing (default is MSB-first)
    #[arg(long)]
    lsb: bool,

    /// Luma values below this become ink
    #[arg(long, default_value_t = 128)]
    threshold: u8,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let options = ConvertOptions {
        width: cli.width,
        height: cli.height,
        ext: cli.ext,
        prefix: cli.prefix,
        order: if cli.lsb {
            BitOrder::LsbFirst
        } else {
            BitOrder::MsbFirst
        },
        threshold: cli.threshold,
    };

    let report = convert_dir(&cli.src, &cli.out, &options)?;
    tracing::info!(
        "Done: {} frames of {} bytes written, {} failed",
        report.written.len(),
        options.frame_bytes(),
        report.failed.len()
    );

    Ok(())
}
