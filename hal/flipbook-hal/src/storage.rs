//! Removable storage abstractions
//!
//! Provides read-only access to a FAT-style directory tree, as exposed by
//! the SD card driver. Handles are closed when dropped.

/// Errors from storage operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StorageError {
    /// Path does not exist (or no card is mounted)
    NotFound,
    /// Path exists but is not a directory
    NotADirectory,
    /// Path exists but is not a regular file
    NotAFile,
    /// Low-level read error
    Io,
}

impl core::fmt::Display for StorageError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StorageError::NotFound => f.write_str("not found"),
            StorageError::NotADirectory => f.write_str("not a directory"),
            StorageError::NotAFile => f.write_str("not a file"),
            StorageError::Io => f.write_str("I/O error"),
        }
    }
}

/// One entry yielded while listing a directory
///
/// `name` is whatever the driver reports. Some drivers return the bare
/// file name, others an absolute path; callers must normalize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirEntry<'a> {
    /// Entry name as reported by the driver
    pub name: &'a str,
    /// True for subdirectories
    pub is_dir: bool,
}

/// Open directory handle
pub trait DirectoryReader {
    /// Fetch the next entry, or `None` once the listing is exhausted
    ///
    /// The returned entry borrows the handle, so it must be consumed
    /// before asking for the next one.
    fn next_entry(&mut self) -> Option<DirEntry<'_>>;
}

/// File opened for reading
pub trait FileReader {
    /// Total file length in bytes
    fn size(&self) -> usize;

    /// Read into `buf`
    ///
    /// Returns the number of bytes actually read, which may be fewer than
    /// `buf.len()` if the file is shorter or the driver gives up early.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, StorageError>;
}

/// Storage trait
///
/// Paths are absolute, `/`-separated, rooted at the card's mount point.
pub trait FrameStorage {
    /// Directory handle type
    type Dir<'a>: DirectoryReader
    where
        Self: 'a;

    /// File handle type
    type File<'a>: FileReader
    where
        Self: 'a;

    /// Open a directory for listing
    fn open_dir(&mut self, path: &str) -> Result<Self::Dir<'_>, StorageError>;

    /// Open a file for reading
    fn open_file(&mut self, path: &str) -> Result<Self::File<'_>, StorageError>;
}
