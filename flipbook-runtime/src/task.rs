//! Periodic playback task
//!
//! Ticks the engine on a fixed short period after a startup delay. The
//! engine does its own pacing, so the period only bounds how late a frame
//! can be; it is not the frame rate.

use embassy_time::{Duration, Ticker, Timer};

use flipbook_core::{Host, PlaybackState};
use flipbook_hal::{Clock, FrameDisplay, FrameStorage, StatusLine};

/// Delay before the first tick, letting the host finish booting (ms)
pub const STARTUP_DELAY_MS: u64 = 250;

/// Tick period (ms)
pub const TICK_PERIOD_MS: u64 = 50;

/// Drive `state` forever
///
/// Owns the state exclusively for its whole life, which is what makes the
/// unsynchronized engine safe. File reads and panel refreshes block this
/// task only. There is no shutdown path; the loop ends with the process.
pub async fn run_playback<C, S, D, L>(state: &mut PlaybackState, host: &mut Host<C, S, D, L>)
where
    C: Clock,
    S: FrameStorage,
    D: FrameDisplay,
    L: StatusLine,
{
    #[cfg(feature = "defmt")]
    defmt::info!("Playback task started");

    Timer::after(Duration::from_millis(STARTUP_DELAY_MS)).await;

    let mut ticker = Ticker::every(Duration::from_millis(TICK_PERIOD_MS));

    loop {
        let _outcome = state.tick(host);

        #[cfg(feature = "defmt")]
        defmt::trace!("Playback tick: {}", _outcome);

        ticker.next().await;
    }
}
