//! Embassy runtime glue for the playback engine
//!
//! The engine is synchronous and must only ever be driven from one place.
//! This crate provides that place: an async loop meant to run as its own
//! Embassy task, plus a [`Clock`](flipbook_hal::Clock) over Embassy time.
//!
//! Board firmware wraps [`run_playback`] in an `#[embassy_executor::task]`
//! with its concrete storage and display types.

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod task;

pub use clock::EmbassyClock;
pub use task::{run_playback, STARTUP_DELAY_MS, TICK_PERIOD_MS};
