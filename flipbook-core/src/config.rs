//! Playback configuration
//!
//! There is no configuration file: the frame folder and pacing interval
//! are fixed at build time. The constants live here together with the
//! user-visible status messages.

use heapless::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Folder on the card holding the frame files
pub const FRAME_FOLDER: &str = "/screensavers/badapple";

/// Minimum time between two frame advances (ms)
///
/// Lower is faster, but e-ink panels ghost badly below ~80 ms.
pub const FRAME_INTERVAL_MS: u32 = 80;

/// Maximum folder path length
pub const MAX_FOLDER_LEN: usize = 64;

/// Maximum status message length
pub const MAX_STATUS_LEN: usize = 40;

/// Shown when the frame folder cannot be opened
pub const MSG_NO_FOLDER: &str = "No frame folder";

/// Shown when the frame folder holds no files
pub const MSG_NO_FRAMES: &str = "No frames found";

/// Shown when the frame buffer cannot be allocated
pub const MSG_NO_RAM: &str = "No RAM for frames";

/// Shown when the display width cannot hold whole packed bytes per row
pub const MSG_BAD_WIDTH: &str = "Display width not /8";

/// Shown once per session for the first wrongly-sized frame
pub const MSG_SIZE_MISMATCH: &str = "Frame size mismatch";

/// Playback settings
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlaybackConfig {
    /// Absolute folder path on the card
    pub folder: String<MAX_FOLDER_LEN>,
    /// Minimum interval between frames (ms)
    pub frame_interval_ms: u32,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        let mut folder = String::new();
        // FRAME_FOLDER is well under MAX_FOLDER_LEN
        let _ = folder.push_str(FRAME_FOLDER);
        Self {
            folder,
            frame_interval_ms: FRAME_INTERVAL_MS,
        }
    }
}

impl PlaybackConfig {
    /// Build a config for another folder or pace
    pub fn new(folder: &str, frame_interval_ms: u32) -> Result<Self, ConfigError> {
        let mut path = String::new();
        path.push_str(folder)
            .map_err(|_| ConfigError::FolderTooLong)?;
        Ok(Self {
            folder: path,
            frame_interval_ms,
        })
    }

    /// Folder path as a string slice
    pub fn folder(&self) -> &str {
        self.folder.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PlaybackConfig::default();
        assert_eq!(config.folder(), FRAME_FOLDER);
        assert_eq!(config.frame_interval_ms, 80);
    }

    #[test]
    fn test_custom_folder() {
        let config = PlaybackConfig::new("/frames", 120).unwrap();
        assert_eq!(config.folder(), "/frames");
        assert_eq!(config.frame_interval_ms, 120);
    }

    #[test]
    fn test_folder_too_long() {
        let long = "/x".repeat(MAX_FOLDER_LEN);
        assert_eq!(
            PlaybackConfig::new(&long, 80),
            Err(ConfigError::FolderTooLong)
        );
    }
}
