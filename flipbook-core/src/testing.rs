//! Test doubles for the capability traits

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::cell::Cell;

use flipbook_hal::{
    Clock, Color, DirEntry, DirectoryReader, DisplayError, FileReader, FrameDisplay,
    FrameStorage, StatusLine, StorageError,
};

use crate::path::normalize;
use crate::playback::Host;

/// Clock that only moves when told to
///
/// With a non-zero step, every read advances time by `step` ms after
/// returning, standing in for slow work between reads.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
    step: Cell<u64>,
}

impl ManualClock {
    pub fn set(&self, ms: u64) {
        self.now.set(ms);
    }

    pub fn set_step(&self, ms: u64) {
        self.step.set(ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        let now = self.now.get();
        self.now.set(now + self.step.get());
        now
    }
}

/// In-memory card with one frame folder
#[derive(Debug)]
pub struct MockStorage {
    folder: String,
    folder_exists: bool,
    listing: Vec<(String, bool)>,
    files: BTreeMap<String, Vec<u8>>,
    read_limits: BTreeMap<String, usize>,
    opened: Vec<String>,
    dirs_opened: usize,
}

impl MockStorage {
    pub fn new(folder: &str) -> Self {
        Self {
            folder: folder.to_string(),
            folder_exists: true,
            listing: Vec::new(),
            files: BTreeMap::new(),
            read_limits: BTreeMap::new(),
            opened: Vec::new(),
            dirs_opened: 0,
        }
    }

    /// Add a raw listing entry without backing content
    pub fn add_listing(&mut self, name: &str, is_dir: bool) {
        self.listing.push((name.to_string(), is_dir));
    }

    /// Add a listed, readable frame
    pub fn add_frame(&mut self, name: &str, data: Vec<u8>) {
        self.add_listing(name, false);
        let path = normalize(name, &self.folder);
        self.files.insert(path.as_str().to_string(), data);
    }

    /// Make a listed frame fail to open
    pub fn break_frame(&mut self, name: &str) {
        let path = normalize(name, &self.folder);
        self.files.remove(path.as_str());
    }

    /// Cap how many bytes a read of `name` returns
    pub fn limit_read(&mut self, name: &str, bytes: usize) {
        let path = normalize(name, &self.folder);
        self.read_limits.insert(path.as_str().to_string(), bytes);
    }

    pub fn remove_folder(&mut self) {
        self.folder_exists = false;
    }

    pub fn files_opened(&self) -> usize {
        self.opened.len()
    }

    pub fn opened(&self) -> &[String] {
        &self.opened
    }

    pub fn dirs_opened(&self) -> usize {
        self.dirs_opened
    }
}

pub struct MockDir<'a> {
    entries: &'a [(String, bool)],
    pos: usize,
}

impl DirectoryReader for MockDir<'_> {
    fn next_entry(&mut self) -> Option<DirEntry<'_>> {
        let (name, is_dir) = self.entries.get(self.pos)?;
        self.pos += 1;
        Some(DirEntry {
            name,
            is_dir: *is_dir,
        })
    }
}

pub struct MockFile<'a> {
    data: &'a [u8],
    limit: Option<usize>,
}

impl FileReader for MockFile<'_> {
    fn size(&self) -> usize {
        self.data.len()
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, StorageError> {
        let mut n = buf.len().min(self.data.len());
        if let Some(limit) = self.limit {
            n = n.min(limit);
        }
        buf[..n].copy_from_slice(&self.data[..n]);
        Ok(n)
    }
}

impl FrameStorage for MockStorage {
    type Dir<'a> = MockDir<'a>;
    type File<'a> = MockFile<'a>;

    fn open_dir(&mut self, path: &str) -> Result<MockDir<'_>, StorageError> {
        self.dirs_opened += 1;
        if !self.folder_exists || path != self.folder {
            return Err(StorageError::NotFound);
        }
        Ok(MockDir {
            entries: &self.listing,
            pos: 0,
        })
    }

    fn open_file(&mut self, path: &str) -> Result<MockFile<'_>, StorageError> {
        self.opened.push(path.to_string());
        let data = self.files.get(path).ok_or(StorageError::NotFound)?;
        Ok(MockFile {
            data,
            limit: self.read_limits.get(path).copied(),
        })
    }
}

/// One recorded bitmap draw
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draw {
    pub bitmap: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub on: Color,
    pub off: Color,
}

/// Display that records every call
#[derive(Debug)]
pub struct MockDisplay {
    width: u32,
    height: u32,
    pub clears: usize,
    pub refreshes: usize,
    pub draws: Vec<Draw>,
    pub fail_refresh: bool,
}

impl MockDisplay {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            clears: 0,
            refreshes: 0,
            draws: Vec::new(),
            fail_refresh: false,
        }
    }
}

impl FrameDisplay for MockDisplay {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        self.clears += 1;
        Ok(())
    }

    fn draw_bitmap(
        &mut self,
        _origin: (i32, i32),
        bitmap: &[u8],
        width: u32,
        height: u32,
        on: Color,
        off: Color,
    ) -> Result<(), DisplayError> {
        self.draws.push(Draw {
            bitmap: bitmap.to_vec(),
            width,
            height,
            on,
            off,
        });
        Ok(())
    }

    fn refresh(&mut self) -> Result<(), DisplayError> {
        if self.fail_refresh {
            return Err(DisplayError::Communication);
        }
        self.refreshes += 1;
        Ok(())
    }
}

/// Status line that keeps every message
#[derive(Debug, Default)]
pub struct MockStatus {
    pub messages: Vec<String>,
}

impl MockStatus {
    pub fn count(&self, message: &str) -> usize {
        self.messages.iter().filter(|m| m.as_str() == message).count()
    }
}

impl StatusLine for MockStatus {
    fn show(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

pub type MockHost = Host<ManualClock, MockStorage, MockDisplay, MockStatus>;

/// Host with `count` valid frames named `0001.bin`... on a 160x200 panel
///
/// Each frame's bytes are filled with its 1-based number.
pub fn host_with_frames(folder: &str, count: usize) -> MockHost {
    let mut storage = MockStorage::new(folder);
    for i in 1..=count {
        storage.add_frame(&alloc::format!("{:04}.bin", i), alloc::vec![i as u8; 4000]);
    }
    Host::new(
        ManualClock::default(),
        storage,
        MockDisplay::new(160, 200),
        MockStatus::default(),
    )
}
