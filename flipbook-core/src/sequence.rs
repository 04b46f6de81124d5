//! Frame play order
//!
//! Frames play in byte-wise lexicographic order of their paths. That only
//! matches the intended numeric order when filenames are zero-padded
//! (`0001.bin`, `0002.bin`, ...). This is a precondition on the card
//! content and is not checked. Other orderings can be supplied with
//! [`FrameSequence::sorted_by`].

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::path::FramePath;

/// Comparator used to order frames
pub type FrameOrder = fn(&FramePath, &FramePath) -> Ordering;

/// Byte-wise lexicographic order (the default)
pub fn lexicographic(a: &FramePath, b: &FramePath) -> Ordering {
    a.as_str().as_bytes().cmp(b.as_str().as_bytes())
}

/// Ordered, cyclic list of frames with a play cursor
///
/// The order is fixed at construction and never re-sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameSequence {
    paths: Vec<FramePath>,
    index: usize,
}

impl FrameSequence {
    /// Empty sequence
    pub fn empty() -> Self {
        Self::default()
    }

    /// Sort `paths` lexicographically
    pub fn new(paths: Vec<FramePath>) -> Self {
        Self::sorted_by(paths, lexicographic)
    }

    /// Sort `paths` with a caller-supplied comparator
    pub fn sorted_by<F>(mut paths: Vec<FramePath>, compare: F) -> Self
    where
        F: FnMut(&FramePath, &FramePath) -> Ordering,
    {
        paths.sort_by(compare);
        Self { paths, index: 0 }
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&FramePath> {
        self.paths.get(index)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, FramePath> {
        self.paths.iter()
    }

    /// Cursor position, always in `[0, len)` for a non-empty sequence
    pub fn index(&self) -> usize {
        self.index
    }

    /// Frame under the cursor
    pub fn current(&self) -> Option<&FramePath> {
        self.paths.get(self.index)
    }

    /// Move the cursor forward one frame, wrapping to 0 after the last
    pub fn advance(&mut self) {
        if self.paths.is_empty() {
            return;
        }
        self.index = (self.index + 1) % self.paths.len();
    }

    /// Drop every frame and reset the cursor
    pub fn clear(&mut self) {
        self.paths.clear();
        self.index = 0;
    }
}

impl<'a> IntoIterator for &'a FrameSequence {
    type Item = &'a FramePath;
    type IntoIter = core::slice::Iter<'a, FramePath>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}
