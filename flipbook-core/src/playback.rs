//! Playback state and the per-tick entry point
//!
//! A single periodic caller owns one [`PlaybackState`] and calls
//! [`PlaybackState::tick`] with the host collaborators on every period.
//! The first tick scans the card and allocates the frame buffer; later
//! ticks draw one frame whenever the pacing gate is open.
//!
//! Initialization happens exactly once per process. If it fails (bad
//! panel width, no folder, no frames, no memory) playback stays disabled
//! until restart; a card inserted later is never picked up.

use core::fmt::Write;

use flipbook_hal::{Clock, FrameDisplay, FrameStorage, StatusLine};

use crate::buffer::{expected_frame_size, FrameBuffer};
use crate::config::{PlaybackConfig, MAX_STATUS_LEN, MSG_SIZE_MISMATCH};
use crate::error::{FrameSkip, PlaybackError};
use crate::pacer::Pacer;
use crate::render::render_frame;
use crate::scan::scan_folder;
use crate::sequence::{lexicographic, FrameOrder, FrameSequence};

/// Host collaborators the engine talks to
///
/// Bundled so the engine never reaches for globals; tests substitute
/// doubles for each one.
#[derive(Debug)]
pub struct Host<C, S, D, L> {
    pub clock: C,
    pub storage: S,
    pub display: D,
    pub status: L,
}

impl<C, S, D, L> Host<C, S, D, L>
where
    C: Clock,
    S: FrameStorage,
    D: FrameDisplay,
    L: StatusLine,
{
    pub fn new(clock: C, storage: S, display: D, status: L) -> Self {
        Self {
            clock,
            storage,
            display,
            status,
        }
    }
}

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickOutcome {
    /// First tick: sequence built and buffer allocated
    Initialized { frames: usize },
    /// Playback is permanently disabled
    Disabled,
    /// Pacing gate closed, nothing done
    Waiting,
    /// Frame at `index` was drawn
    Drawn { index: usize },
    /// Frame at `index` was skipped
    Skipped { index: usize, reason: FrameSkip },
}

/// Long-lived playback session
#[derive(Debug, Clone)]
pub struct PlaybackState {
    config: PlaybackConfig,
    order: FrameOrder,
    initialized: bool,
    sequence: FrameSequence,
    pacer: Pacer,
    buffer: Option<FrameBuffer>,
    expected_frame_size: usize,
    warned_size_mismatch: bool,
    terminal_error: Option<PlaybackError>,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::new(PlaybackConfig::default())
    }
}

impl PlaybackState {
    /// Create an uninitialized session
    pub fn new(config: PlaybackConfig) -> Self {
        Self::with_order(config, lexicographic)
    }

    /// Create an uninitialized session with a custom play order
    pub fn with_order(config: PlaybackConfig, order: FrameOrder) -> Self {
        let pacer = Pacer::new(config.frame_interval_ms);
        Self {
            config,
            order,
            initialized: false,
            sequence: FrameSequence::empty(),
            pacer,
            buffer: None,
            expected_frame_size: 0,
            warned_size_mismatch: false,
            terminal_error: None,
        }
    }

    /// Run one tick
    ///
    /// Never fails and never blocks beyond one file read and one panel
    /// refresh. The cursor advances after every frame attempt, so an
    /// unreadable frame costs exactly one interval.
    pub fn tick<C, S, D, L>(&mut self, host: &mut Host<C, S, D, L>) -> TickOutcome
    where
        C: Clock,
        S: FrameStorage,
        D: FrameDisplay,
        L: StatusLine,
    {
        if !self.initialized {
            return self.initialize(host);
        }

        let Some(buffer) = self.buffer.as_mut() else {
            return TickOutcome::Disabled;
        };
        let Some(path) = self.sequence.current() else {
            return TickOutcome::Disabled;
        };

        if !self.pacer.try_advance(host.clock.now_ms()) {
            return TickOutcome::Waiting;
        }

        let index = self.sequence.index();
        let result = render_frame(&mut host.storage, &mut host.display, path, buffer);
        self.sequence.advance();

        match result {
            Ok(()) => TickOutcome::Drawn { index },
            Err(reason) => {
                #[cfg(feature = "defmt")]
                defmt::debug!("Skipped frame {}: {}", index, reason);

                if matches!(reason, FrameSkip::SizeMismatch { .. }) && !self.warned_size_mismatch
                {
                    self.warned_size_mismatch = true;
                    host.status.show(MSG_SIZE_MISMATCH);
                }
                TickOutcome::Skipped { index, reason }
            }
        }
    }

    fn initialize<C, S, D, L>(&mut self, host: &mut Host<C, S, D, L>) -> TickOutcome
    where
        C: Clock,
        S: FrameStorage,
        D: FrameDisplay,
        L: StatusLine,
    {
        self.initialized = true;
        self.pacer.mark(host.clock.now_ms());

        match self.load(host) {
            Ok(frames) => {
                #[cfg(feature = "defmt")]
                defmt::info!(
                    "Loaded {} frames from {}, {} bytes each",
                    frames,
                    self.config.folder(),
                    self.expected_frame_size
                );

                let mut msg: heapless::String<MAX_STATUS_LEN> = heapless::String::new();
                let _ = write!(msg, "Loaded {} frames", frames);
                host.status.show(&msg);

                // First interval counts from the end of loading
                self.pacer.mark(host.clock.now_ms());

                TickOutcome::Initialized { frames }
            }
            Err(e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Playback disabled: {}", e);

                self.sequence.clear();
                self.buffer = None;
                self.terminal_error = Some(e);
                host.status.show(e.message());

                TickOutcome::Disabled
            }
        }
    }

    fn load<C, S, D, L>(&mut self, host: &mut Host<C, S, D, L>) -> Result<usize, PlaybackError>
    where
        C: Clock,
        S: FrameStorage,
        D: FrameDisplay,
        L: StatusLine,
    {
        let width = host.display.width();
        let height = host.display.height();
        if width % 8 != 0 {
            return Err(PlaybackError::UnsupportedWidth { width });
        }

        let paths = scan_folder(&mut host.storage, self.config.folder())?;
        let sequence = FrameSequence::sorted_by(paths, self.order);
        if sequence.is_empty() {
            return Err(PlaybackError::EmptySequence);
        }

        let size = expected_frame_size(width, height)
            .ok_or(PlaybackError::Allocation { bytes: usize::MAX })?;
        self.expected_frame_size = size;
        let buffer = FrameBuffer::allocate(size)?;

        self.sequence = sequence;
        self.buffer = Some(buffer);
        Ok(self.sequence.len())
    }

    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// True once initialization has run and left nothing to play
    pub fn is_disabled(&self) -> bool {
        self.initialized && (self.buffer.is_none() || self.sequence.is_empty())
    }

    /// Index of the next frame to play
    pub fn index(&self) -> usize {
        self.sequence.index()
    }

    pub fn sequence(&self) -> &FrameSequence {
        &self.sequence
    }

    /// Packed frame size fixed at initialization (0 before)
    pub fn expected_frame_size(&self) -> usize {
        self.expected_frame_size
    }

    pub fn warned_size_mismatch(&self) -> bool {
        self.warned_size_mismatch
    }

    /// Failure that disabled the session, if any
    pub fn terminal_error(&self) -> Option<PlaybackError> {
        self.terminal_error
    }
}
