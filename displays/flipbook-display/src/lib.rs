//! Display adapters for Flipbook built on `embedded-graphics`
//!
//! This crate provides:
//! - `Panel` trait: a 1-bit `DrawTarget` that can push its frame memory
//!   to the glass
//! - `GraphicsDisplay`: `FrameDisplay` for any `Panel`
//! - `TextStatusLine`: `StatusLine` rendering one line of text on a `Panel`
//! - `MemoryPanel`: packed in-RAM panel for host runs and tests
//!
//! # Architecture
//!
//! E-ink drivers (SSD1677, SSD1680, ...) and small OLED drivers already
//! implement `DrawTarget<Color = BinaryColor>`. Implementing `Panel` on
//! top adds the refresh step, after which the engine can drive them
//! through `flipbook-hal` without knowing the controller.
//!
//! Color mapping: `BinaryColor::On` is ink (black on e-ink, lit on OLED).

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

pub mod backend;
pub mod panel;
pub mod status;

// Re-export key types
pub use backend::GraphicsDisplay;
pub use panel::{MemoryPanel, Panel};
pub use status::TextStatusLine;
