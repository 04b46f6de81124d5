//! Frame folder scanning

use alloc::vec::Vec;

use flipbook_hal::{DirectoryReader, FrameStorage};

use crate::error::PlaybackError;
use crate::path::{normalize, FramePath};

/// List every file in `folder` as a normalized frame path
///
/// Subdirectories are skipped and no file content is read. The result is
/// in whatever order the driver listed it.
pub fn scan_folder<S: FrameStorage>(
    storage: &mut S,
    folder: &str,
) -> Result<Vec<FramePath>, PlaybackError> {
    let mut dir = storage
        .open_dir(folder)
        .map_err(PlaybackError::DirectoryOpen)?;

    let mut paths = Vec::new();
    while let Some(entry) = dir.next_entry() {
        if entry.is_dir {
            continue;
        }
        paths.push(normalize(entry.name, folder));
    }

    Ok(paths)
}
