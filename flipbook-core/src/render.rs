//! Frame rendering
//!
//! Reads one frame file into the shared buffer, checks it, and pushes it
//! to the panel. Any failure leaves the panel untouched.

use flipbook_hal::{Color, FileReader, FrameDisplay, FrameStorage};

use crate::buffer::FrameBuffer;
use crate::error::FrameSkip;
use crate::path::FramePath;

/// Read `path` into `buffer` and draw it full-screen
///
/// The file must be exactly `buffer.len()` bytes. On success the panel is
/// cleared, the bitmap drawn at the origin with set bits as ink, and a
/// physical refresh triggered.
pub fn render_frame<S, D>(
    storage: &mut S,
    display: &mut D,
    path: &FramePath,
    buffer: &mut FrameBuffer,
) -> Result<(), FrameSkip>
where
    S: FrameStorage,
    D: FrameDisplay,
{
    let expected = buffer.len();

    {
        let mut file = storage.open_file(path.as_str()).map_err(FrameSkip::Open)?;

        let actual = file.size();
        if actual != expected {
            return Err(FrameSkip::SizeMismatch { expected, actual });
        }

        // A driver error mid-read counts as reading nothing
        let read = file.read(buffer.as_mut_slice()).unwrap_or(0);
        if read != expected {
            return Err(FrameSkip::ShortRead {
                expected,
                actual: read,
            });
        }
        // File handle closes here, before the slow panel refresh
    }

    let width = display.width();
    let height = display.height();

    display.clear().map_err(FrameSkip::Display)?;
    display
        .draw_bitmap(
            (0, 0),
            buffer.as_slice(),
            width,
            height,
            Color::Black,
            Color::White,
        )
        .map_err(FrameSkip::Display)?;
    display.refresh().map_err(FrameSkip::Display)?;

    Ok(())
}
