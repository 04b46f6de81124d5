//! Reusable frame buffer
//!
//! One buffer, sized to the panel's packed 1-bit frame, is allocated per
//! session and reused for every read.

use alloc::vec::Vec;

use crate::error::PlaybackError;

/// Packed size of a full-screen 1-bit frame
///
/// `width × height / 8` with integer division, so it is exact only when
/// the pixel count is a multiple of 8. Returns `None` on overflow.
pub fn expected_frame_size(width: u32, height: u32) -> Option<usize> {
    (width as usize).checked_mul(height as usize).map(|px| px / 8)
}

/// Owned, fixed-size byte buffer for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    bytes: Vec<u8>,
}

impl FrameBuffer {
    /// Allocate a zeroed buffer of exactly `size` bytes
    ///
    /// Allocation failure is reported instead of aborting, so a low-memory
    /// device can show a message and carry on without playback.
    pub fn allocate(size: usize) -> Result<Self, PlaybackError> {
        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(size)
            .map_err(|_| PlaybackError::Allocation { bytes: size })?;
        bytes.resize(size, 0);
        Ok(Self { bytes })
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.bytes
    }
}
