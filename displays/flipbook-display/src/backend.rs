//! `FrameDisplay` over an embedded-graphics panel
//!
//! Frame bitmaps are drawn through `ImageRaw<BinaryColor>`, whose 1-bpp
//! layout (rows padded to bytes, MSB leftmost) is the frame file format.

use embedded_graphics::image::{Image, ImageRaw};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

use flipbook_hal::{Color, DisplayError, FrameDisplay};

use crate::panel::Panel;

fn to_binary(color: Color) -> BinaryColor {
    match color {
        Color::Black => BinaryColor::On,
        Color::White => BinaryColor::Off,
    }
}

/// Draw target that remaps set/clear bits to caller-chosen colors
struct Remap<'a, P> {
    panel: &'a mut P,
    on: BinaryColor,
    off: BinaryColor,
}

impl<P: Panel> OriginDimensions for Remap<'_, P> {
    fn size(&self) -> Size {
        self.panel.size()
    }
}

impl<P: Panel> DrawTarget for Remap<'_, P> {
    type Color = BinaryColor;
    type Error = P::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let (on, off) = (self.on, self.off);
        self.panel.draw_iter(
            pixels
                .into_iter()
                .map(|Pixel(p, c)| Pixel(p, if c.is_on() { on } else { off })),
        )
    }
}

/// Full-screen frame display on a [`Panel`]
#[derive(Debug)]
pub struct GraphicsDisplay<P> {
    panel: P,
}

impl<P: Panel> GraphicsDisplay<P> {
    pub fn new(panel: P) -> Self {
        Self { panel }
    }

    pub fn panel(&self) -> &P {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut P {
        &mut self.panel
    }

    pub fn into_inner(self) -> P {
        self.panel
    }
}

impl<P: Panel> FrameDisplay for GraphicsDisplay<P> {
    fn width(&self) -> u32 {
        self.panel.size().width
    }

    fn height(&self) -> u32 {
        self.panel.size().height
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        self.panel
            .clear(BinaryColor::Off)
            .map_err(|_| DisplayError::Communication)
    }

    fn draw_bitmap(
        &mut self,
        origin: (i32, i32),
        bitmap: &[u8],
        width: u32,
        height: u32,
        on: Color,
        off: Color,
    ) -> Result<(), DisplayError> {
        let row_bytes = (width as usize).div_ceil(8);
        let needed = row_bytes
            .checked_mul(height as usize)
            .ok_or(DisplayError::InvalidDimensions)?;
        if width == 0 || height == 0 || bitmap.len() < needed {
            return Err(DisplayError::InvalidDimensions);
        }

        let raw = ImageRaw::<BinaryColor>::new(&bitmap[..needed], width);
        let mut target = Remap {
            panel: &mut self.panel,
            on: to_binary(on),
            off: to_binary(off),
        };
        Image::new(&raw, Point::new(origin.0, origin.1))
            .draw(&mut target)
            .map_err(|_| DisplayError::Communication)
    }

    fn refresh(&mut self) -> Result<(), DisplayError> {
        self.panel
            .refresh()
            .map_err(|_| DisplayError::Communication)
    }
}
