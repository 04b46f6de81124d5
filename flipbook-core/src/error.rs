//! Playback error types
//!
//! Terminal errors disable playback for the rest of the process.
//! Frame skips are scoped to a single frame; playback moves on.

use flipbook_hal::{DisplayError, StorageError};

use crate::config::{MSG_BAD_WIDTH, MSG_NO_FOLDER, MSG_NO_FRAMES, MSG_NO_RAM};

/// Terminal failures raised while initializing a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlaybackError {
    /// Frame folder could not be opened
    DirectoryOpen(StorageError),
    /// Frame folder holds no files
    EmptySequence,
    /// Frame buffer could not be allocated
    Allocation {
        /// Requested size in bytes
        bytes: usize,
    },
    /// Display width is not a multiple of 8 pixels
    ///
    /// Frame rows are packed to whole bytes, so such a panel can never
    /// match a frame file.
    UnsupportedWidth { width: u32 },
}

impl PlaybackError {
    /// Fixed status message shown to the user
    pub fn message(&self) -> &'static str {
        match self {
            PlaybackError::DirectoryOpen(_) => MSG_NO_FOLDER,
            PlaybackError::EmptySequence => MSG_NO_FRAMES,
            PlaybackError::Allocation { .. } => MSG_NO_RAM,
            PlaybackError::UnsupportedWidth { .. } => MSG_BAD_WIDTH,
        }
    }
}

impl core::fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PlaybackError::DirectoryOpen(e) => write!(f, "cannot open frame folder: {}", e),
            PlaybackError::EmptySequence => f.write_str("frame folder is empty"),
            PlaybackError::Allocation { bytes } => {
                write!(f, "cannot allocate {} byte frame buffer", bytes)
            }
            PlaybackError::UnsupportedWidth { width } => {
                write!(f, "display width {} is not a multiple of 8", width)
            }
        }
    }
}

/// Why a single frame was skipped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameSkip {
    /// Frame file could not be opened
    Open(StorageError),
    /// File length differs from the display's packed frame size
    SizeMismatch { expected: usize, actual: usize },
    /// Fewer bytes were read than the file reported
    ShortRead { expected: usize, actual: usize },
    /// Panel rejected the draw or refresh
    Display(DisplayError),
}

impl core::fmt::Display for FrameSkip {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FrameSkip::Open(e) => write!(f, "cannot open frame: {}", e),
            FrameSkip::SizeMismatch { expected, actual } => {
                write!(f, "frame is {} bytes, expected {}", actual, expected)
            }
            FrameSkip::ShortRead { expected, actual } => {
                write!(f, "short read: {} of {} bytes", actual, expected)
            }
            FrameSkip::Display(e) => write!(f, "display: {}", e),
        }
    }
}

/// Invalid playback configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Folder path exceeds `MAX_FOLDER_LEN`
    FolderTooLong,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::FolderTooLong => f.write_str("folder path too long"),
        }
    }
}
