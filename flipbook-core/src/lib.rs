//! Board-agnostic playback engine for pre-rendered 1-bit frames
//!
//! This crate contains all playback logic that does not depend on
//! specific hardware implementations:
//!
//! - Path normalization for inconsistent storage drivers
//! - Directory scanning and lexicographic play order
//! - Frame buffer sizing from runtime display geometry
//! - Pacing against a monotonic clock
//! - Frame validation, drawing and skip-forward on failure
//! - The long-lived playback state driven by a periodic caller
//!
//! Hardware is reached only through the capability traits in
//! `flipbook-hal`, bundled per call in a [`playback::Host`].

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

pub mod buffer;
pub mod config;
pub mod error;
pub mod pacer;
pub mod path;
pub mod playback;
pub mod render;
pub mod scan;
pub mod sequence;

#[cfg(test)]
pub(crate) mod testing;

pub use config::PlaybackConfig;
pub use error::{FrameSkip, PlaybackError};
pub use path::FramePath;
pub use playback::{Host, PlaybackState, TickOutcome};
pub use sequence::FrameSequence;
