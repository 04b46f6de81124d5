//! One-line text status on a small panel

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};

use flipbook_hal::StatusLine;

use crate::panel::Panel;

/// Status line drawn in `FONT_6X10` at the panel's top-left corner
///
/// Each message replaces the previous one. Text that does not fit is
/// clipped by the panel.
#[derive(Debug)]
pub struct TextStatusLine<P> {
    panel: P,
}

impl<P: Panel> TextStatusLine<P> {
    pub fn new(panel: P) -> Self {
        Self { panel }
    }

    pub fn panel(&self) -> &P {
        &self.panel
    }

    fn render(&mut self, message: &str) -> Result<(), P::Error> {
        let style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
        self.panel.clear(BinaryColor::Off)?;
        Text::with_baseline(message, Point::zero(), style, Baseline::Top).draw(&mut self.panel)?;
        self.panel.refresh()
    }
}

impl<P: Panel> StatusLine for TextStatusLine<P> {
    fn show(&mut self, message: &str) {
        if self.render(message).is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("Status line update failed: {=str}", message);
        }
    }
}
