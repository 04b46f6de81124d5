//! flipbook-convert - image sequence to packed frame conversion
//!
//! Turns a folder of ordinary images (PNG, JPEG, ...) into the raw frame
//! files the playback engine reads: grayscale, resized to the panel,
//! thresholded to 1 bit, packed 8 pixels per byte, one file per frame
//! with zero-padded names so they sort into play order.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use image::imageops::{self, FilterType};
use image::GrayImage;

/// Bit order within each packed byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BitOrder {
    /// Leftmost pixel in bit 7 (what the panel driver expects)
    #[default]
    MsbFirst,
    /// Leftmost pixel in bit 0
    LsbFirst,
}

/// Conversion settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Target width in pixels
    pub width: u32,
    /// Target height in pixels
    pub height: u32,
    /// Output file extension, including the dot
    pub ext: String,
    /// Output file name prefix
    pub prefix: String,
    pub order: BitOrder,
    /// Luma values below this become ink
    pub threshold: u8,
}

impl ConvertOptions {
    /// Defaults: `.raw` files named `frame_NNNNN`, MSB-first, threshold 128
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ext: ".raw".to_string(),
            prefix: "frame_".to_string(),
            order: BitOrder::MsbFirst,
            threshold: 128,
        }
    }

    /// Output name for the frame at `index`
    pub fn frame_name(&self, index: usize) -> String {
        format!("{}{:05}{}", self.prefix, index, self.ext)
    }

    /// Bytes per output file
    pub fn frame_bytes(&self) -> usize {
        (self.width as usize).div_ceil(8) * self.height as usize
    }
}

/// Outcome of a folder conversion
#[derive(Debug, Default)]
pub struct ConvertReport {
    /// Frames written, in order
    pub written: Vec<PathBuf>,
    /// Sources that failed, with the reason
    pub failed: Vec<(PathBuf, String)>,
}

/// Pack one row of 0/1 pixels into bytes
///
/// The row is padded with 0 up to a multiple of 8 pixels.
pub fn pack_row(bits: &[u8], order: BitOrder) -> Vec<u8> {
    bits.chunks(8)
        .map(|chunk| {
            chunk.iter().enumerate().fold(0u8, |byte, (i, &bit)| {
                let bit = bit & 1;
                match order {
                    BitOrder::MsbFirst => byte | (bit << (7 - i)),
                    BitOrder::LsbFirst => byte | (bit << i),
                }
            })
        })
        .collect()
}

/// Threshold and pack a grayscale image, row by row
pub fn pack_image(gray: &GrayImage, threshold: u8, order: BitOrder) -> Vec<u8> {
    let mut out = Vec::with_capacity((gray.width() as usize).div_ceil(8) * gray.height() as usize);
    for row in gray.rows() {
        let bits: Vec<u8> = row.map(|p| u8::from(p.0[0] < threshold)).collect();
        out.extend(pack_row(&bits, order));
    }
    out
}

/// Load, resize and pack one image file
pub fn convert_image(src: &Path, options: &ConvertOptions) -> Result<Vec<u8>> {
    let gray = image::open(src)
        .with_context(|| format!("Failed to open image {:?}", src))?
        .to_luma8();
    let resized = imageops::resize(&gray, options.width, options.height, FilterType::Lanczos3);
    Ok(pack_image(&resized, options.threshold, options.order))
}

/// Regular files in `src`, sorted by name
///
/// Sources are expected to be zero-padded so name order is frame order.
pub fn list_sources(src: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(src).with_context(|| format!("Failed to list {:?}", src))? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}

/// Convert every file in `src` into a frame in `out`
///
/// A file that fails to convert is logged and skipped; it still consumes
/// its index, so output numbering matches source order.
pub fn convert_dir(src: &Path, out: &Path, options: &ConvertOptions) -> Result<ConvertReport> {
    if options.width == 0 || options.height == 0 {
        bail!("Frame size must be non-zero, got {}x{}", options.width, options.height);
    }
    if !src.is_dir() {
        bail!("Source directory not found: {:?}", src);
    }
    fs::create_dir_all(out).with_context(|| format!("Failed to create {:?}", out))?;

    let sources = list_sources(src)?;
    let mut report = ConvertReport::default();
    if sources.is_empty() {
        tracing::info!("No files found in source directory {:?}", src);
        return Ok(report);
    }

    for (index, source) in sources.into_iter().enumerate() {
        let dest = out.join(options.frame_name(index));
        let result = convert_image(&source, options).and_then(|bytes| {
            fs::write(&dest, bytes).with_context(|| format!("Failed to write {:?}", dest))
        });

        match result {
            Ok(()) => {
                tracing::info!("Converted {:?} -> {:?}", source, dest);
                report.written.push(dest);
            }
            Err(e) => {
                tracing::warn!("Failed to convert {:?}: {:#}", source, e);
                report.failed.push((source, format!("{:#}", e)));
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn test_pack_row_msb() {
        assert_eq!(pack_row(&[1, 0, 0, 0, 0, 0, 0, 1], BitOrder::MsbFirst), [0x81]);
        assert_eq!(pack_row(&[1, 1, 0, 0, 0, 0, 0, 0], BitOrder::MsbFirst), [0xC0]);
    }

    #[test]
    fn test_pack_row_lsb() {
        assert_eq!(pack_row(&[1, 1, 0, 0, 0, 0, 0, 0], BitOrder::LsbFirst), [0x03]);
    }

    #[test]
    fn test_pack_row_pads_to_byte() {
        // 10 pixels -> 2 bytes, trailing pixels are paper
        assert_eq!(
            pack_row(&[1, 1, 1, 1, 1, 1, 1, 1, 1, 1], BitOrder::MsbFirst),
            [0xFF, 0xC0]
        );
        assert_eq!(pack_row(&[1, 0, 1], BitOrder::LsbFirst), [0x05]);
    }

    #[test]
    fn test_pack_image_threshold() {
        // Dark left column, light elsewhere
        let gray = GrayImage::from_fn(8, 2, |x, _| if x == 0 { Luma([10]) } else { Luma([200]) });
        assert_eq!(pack_image(&gray, 128, BitOrder::MsbFirst), [0x80, 0x80]);

        // Threshold is exclusive
        let edge = GrayImage::from_pixel(8, 1, Luma([128]));
        assert_eq!(pack_image(&edge, 128, BitOrder::MsbFirst), [0x00]);
        assert_eq!(pack_image(&edge, 129, BitOrder::MsbFirst), [0xFF]);
    }

    #[test]
    fn test_frame_naming() {
        let options = ConvertOptions::new(160, 200);
        assert_eq!(options.frame_name(0), "frame_00000.raw");
        assert_eq!(options.frame_name(1234), "frame_01234.raw");
        assert_eq!(options.frame_bytes(), 4000);
    }

    #[test]
    fn test_frame_bytes_rounds_rows_up() {
        assert_eq!(ConvertOptions::new(10, 3).frame_bytes(), 6);
    }
}
