//! Flipbook Hardware Abstraction Layer
//!
//! This crate defines the narrow capability traits the playback engine
//! consumes from its host environment. Board support code implements them
//! over the real SD card, e-ink panel and status display; tests implement
//! them with doubles.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Periodic caller (flipbook-runtime)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  Playback engine (flipbook-core)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  flipbook-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ board drivers │       │ host (std fs) │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`clock::Clock`] - Monotonic millisecond time source
//! - [`storage::FrameStorage`] - Directory listing and file reads
//! - [`display::FrameDisplay`] - Packed 1-bit bitmap drawing and refresh
//! - [`status::StatusLine`] - One-line status/diagnostic text

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]

pub mod clock;
pub mod display;
pub mod status;
pub mod storage;

#[cfg(feature = "std")]
pub mod host;

// Re-export key traits at crate root for convenience
pub use clock::Clock;
pub use display::{Color, DisplayError, FrameDisplay};
pub use status::StatusLine;
pub use storage::{DirEntry, DirectoryReader, FileReader, FrameStorage, StorageError};
