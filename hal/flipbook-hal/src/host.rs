//! Host implementations backed by `std`
//!
//! Lets the engine run against a directory on the development machine,
//! standing in for the SD card. Device paths like `/screensavers/clip` are
//! resolved under a mount point.

use std::fs::{self, File, ReadDir};
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::clock::Clock;
use crate::storage::{DirEntry, DirectoryReader, FileReader, FrameStorage, StorageError};

/// Clock over `std::time::Instant`, starting at zero when created
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

/// Storage rooted at a host directory
///
/// Listing reports bare file names, like most FAT drivers.
#[derive(Debug, Clone)]
pub struct MountedStorage {
    root: PathBuf,
}

impl MountedStorage {
    /// Mount `root` as the card's `/`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Host path for a device path
    pub fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path.trim_start_matches('/'))
    }

    /// Mount point
    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn map_io(err: std::io::Error) -> StorageError {
    match err.kind() {
        ErrorKind::NotFound => StorageError::NotFound,
        _ => StorageError::Io,
    }
}

/// Open directory on the host
#[derive(Debug)]
pub struct MountedDir {
    entries: ReadDir,
    name: String,
}

impl DirectoryReader for MountedDir {
    fn next_entry(&mut self) -> Option<DirEntry<'_>> {
        // Unreadable entries are skipped, as the card driver does
        let entry = self.entries.by_ref().find_map(Result::ok)?;
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        self.name = entry.file_name().to_string_lossy().into_owned();
        Some(DirEntry {
            name: &self.name,
            is_dir,
        })
    }
}

/// File opened on the host
#[derive(Debug)]
pub struct MountedFile {
    file: File,
    size: usize,
}

impl FileReader for MountedFile {
    fn size(&self) -> usize {
        self.size
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, StorageError> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.file.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(map_io(e)),
            }
        }
        Ok(filled)
    }
}

impl FrameStorage for MountedStorage {
    type Dir<'a> = MountedDir;
    type File<'a> = MountedFile;

    fn open_dir(&mut self, path: &str) -> Result<MountedDir, StorageError> {
        let host_path = self.resolve(path);
        let meta = fs::metadata(&host_path).map_err(map_io)?;
        if !meta.is_dir() {
            return Err(StorageError::NotADirectory);
        }
        let entries = fs::read_dir(&host_path).map_err(map_io)?;
        Ok(MountedDir {
            entries,
            name: String::new(),
        })
    }

    fn open_file(&mut self, path: &str) -> Result<MountedFile, StorageError> {
        let host_path = self.resolve(path);
        let file = File::open(&host_path).map_err(map_io)?;
        let meta = file.metadata().map_err(map_io)?;
        if !meta.is_file() {
            return Err(StorageError::NotAFile);
        }
        Ok(MountedFile {
            file,
            size: meta.len() as usize,
        })
    }
}
