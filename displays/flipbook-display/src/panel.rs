//! Panel trait and in-memory panel

use alloc::vec;
use alloc::vec::Vec;
use core::convert::Infallible;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

/// A monochrome draw target with an explicit refresh step
///
/// Drawing only touches controller RAM; `refresh` runs the update
/// waveform (e-ink) or flushes the buffer (OLED).
pub trait Panel: DrawTarget<Color = BinaryColor> + OriginDimensions {
    /// Push drawn content to the physical panel
    fn refresh(&mut self) -> Result<(), Self::Error>;
}

/// Packed 1-bit framebuffer panel
///
/// Rows are padded to whole bytes, MSB leftmost, set bit = ink. For
/// widths that are a multiple of 8 the memory layout is byte-for-byte the
/// frame file format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryPanel {
    width: u32,
    height: u32,
    stride: usize,
    bits: Vec<u8>,
    refreshes: usize,
}

impl MemoryPanel {
    /// Blank (all paper) panel
    pub fn new(width: u32, height: u32) -> Self {
        let stride = (width as usize).div_ceil(8);
        Self {
            width,
            height,
            stride,
            bits: vec![0; stride * height as usize],
            refreshes: 0,
        }
    }

    /// Ink state at `(x, y)`, `None` outside the panel
    pub fn pixel(&self, x: u32, y: u32) -> Option<bool> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let byte = self.bits[y as usize * self.stride + x as usize / 8];
        Some(byte & (0x80 >> (x % 8)) != 0)
    }

    /// Raw packed frame memory
    pub fn as_bytes(&self) -> &[u8] {
        &self.bits
    }

    /// Number of inked pixels
    pub fn ink_count(&self) -> u32 {
        self.bits.iter().map(|b| b.count_ones()).sum()
    }

    /// Number of completed refreshes
    pub fn refresh_count(&self) -> usize {
        self.refreshes
    }
}

impl OriginDimensions for MemoryPanel {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl DrawTarget for MemoryPanel {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0 || point.y < 0 {
                continue;
            }
            let (x, y) = (point.x as u32, point.y as u32);
            if x >= self.width || y >= self.height {
                continue;
            }
            let idx = y as usize * self.stride + x as usize / 8;
            let mask = 0x80 >> (x % 8);
            if color.is_on() {
                self.bits[idx] |= mask;
            } else {
                self.bits[idx] &= !mask;
            }
        }
        Ok(())
    }
}

impl Panel for MemoryPanel {
    fn refresh(&mut self) -> Result<(), Self::Error> {
        self.refreshes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

    #[test]
    fn test_new_panel_is_blank() {
        let panel = MemoryPanel::new(16, 4);
        assert_eq!(panel.as_bytes().len(), 8);
        assert_eq!(panel.ink_count(), 0);
        assert_eq!(panel.size(), Size::new(16, 4));
    }

    #[test]
    fn test_pixels_msb_first() {
        let mut panel = MemoryPanel::new(16, 2);
        panel
            .draw_iter([
                Pixel(Point::new(0, 0), BinaryColor::On),
                Pixel(Point::new(9, 1), BinaryColor::On),
            ])
            .unwrap();

        assert_eq!(panel.as_bytes(), &[0x80, 0x00, 0x00, 0x40]);
        assert_eq!(panel.pixel(0, 0), Some(true));
        assert_eq!(panel.pixel(1, 0), Some(false));
        assert_eq!(panel.pixel(9, 1), Some(true));
        assert_eq!(panel.pixel(16, 0), None);
    }

    #[test]
    fn test_out_of_bounds_clipped() {
        let mut panel = MemoryPanel::new(8, 8);
        Rectangle::new(Point::new(-4, -4), Size::new(8, 8))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut panel)
            .unwrap();
        assert_eq!(panel.ink_count(), 16);
    }

    #[test]
    fn test_clear_and_refresh() {
        let mut panel = MemoryPanel::new(10, 3);
        panel.clear(BinaryColor::On).unwrap();
        assert_eq!(panel.ink_count(), 30);
        // Padding bits in each row stay clear
        assert_eq!(panel.as_bytes()[1], 0xC0);

        panel.clear(BinaryColor::Off).unwrap();
        assert_eq!(panel.ink_count(), 0);

        panel.refresh().unwrap();
        assert_eq!(panel.refresh_count(), 1);
    }
}
