//! Sound module
//!
//! Discrete feedback events (tick, click, completion) and a background
//! ambience, routed through an explicitly constructed [`SoundService`].

mod sink;
mod sound_service;

pub use sink::{SilentSink, SoundSink, TerminalBell};
#[cfg(test)]
pub use sink::{RecordingSink, SoundLog};
pub use sound_service::SoundService;

/// Discrete feedback events
///
/// The latest one is echoed as a glyph in the stage header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEvent {
    /// One spinner draw
    Tick,
    /// Any button-like interaction
    Click,
    /// The spinner stopped on a result
    Completion,
}
