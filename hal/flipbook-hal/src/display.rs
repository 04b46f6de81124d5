//! Bistable display abstractions

/// Display errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with the panel controller
    Communication,
    /// Bitmap does not cover the requested dimensions
    InvalidDimensions,
}

impl core::fmt::Display for DisplayError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DisplayError::Communication => f.write_str("communication error"),
            DisplayError::InvalidDimensions => f.write_str("invalid dimensions"),
        }
    }
}

/// Two-level panel color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    /// Ink
    Black,
    /// Paper
    White,
}

/// Trait for a full-screen 1-bit display
///
/// Drawing goes to the controller's frame memory; nothing is visible until
/// [`FrameDisplay::refresh`] drives the panel.
pub trait FrameDisplay {
    /// Panel width in pixels
    fn width(&self) -> u32;

    /// Panel height in pixels
    fn height(&self) -> u32;

    /// Clear the drawable region to paper
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Draw a packed 1-bit bitmap
    ///
    /// - `origin`: top-left corner `(x, y)` in pixels
    /// - `bitmap`: 8 horizontal pixels per byte, MSB leftmost, row-major,
    ///   each row padded to a whole byte
    /// - `width`, `height`: bitmap dimensions in pixels
    /// - `on`: color for set bits
    /// - `off`: color for clear bits
    fn draw_bitmap(
        &mut self,
        origin: (i32, i32),
        bitmap: &[u8],
        width: u32,
        height: u32,
        on: Color,
        off: Color,
    ) -> Result<(), DisplayError>;

    /// Push frame memory to the physical panel
    ///
    /// On e-ink this blocks for the full waveform.
    fn refresh(&mut self) -> Result<(), DisplayError>;
}
