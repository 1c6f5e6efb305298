use std::io::Write;

use super::SoundEvent;

/// Output device for sound events
pub trait SoundSink {
    fn emit(&mut self, event: SoundEvent);
    fn set_ambience(&mut self, playing: bool);
}

/// Rings the terminal bell when the spinner settles
///
/// Ticks and clicks are too frequent for the bell and are only shown
/// visually by the shell.
pub struct TerminalBell<W: Write> {
    out: W,
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl TerminalBell<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> SoundSink for TerminalBell<W> {
    fn emit(&mut self, event: SoundEvent) {
        // Tick and Click only show as a header glyph
        if event != SoundEvent::Completion {
            return;
        }
        if let Err(e) = self.out.write_all(b"\x07").and_then(|_| self.out.flush()) {
            log::debug!("Terminal bell failed: {}", e);
        }
    }

    fn set_ambience(&mut self, playing: bool) {
        log::debug!("Ambience {}", if playing { "on" } else { "off" });
    }
}

/// Discards everything
#[derive(Debug, Default)]
pub struct SilentSink;

impl SoundSink for SilentSink {
    fn emit(&mut self, _event: SoundEvent) {}
    fn set_ambience(&mut self, _playing: bool) {}
}

#[cfg(test)]
pub use recording::{RecordingSink, SoundLog};


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_bell_rings_only_on_completion() {
        let mut bell = TerminalBell::new(Vec::new());
        bell.emit(SoundEvent::Tick);
        bell.emit(SoundEvent::Click);
        assert!(bell.out.is_empty());

        bell.emit(SoundEvent::Completion);
        assert_eq!(bell.out, b"\x07");
    }

    #[test]
    fn test_recording_sink_captures_events() {
        let (mut sink, log) = RecordingSink::new();
        sink.emit(SoundEvent::Tick);
        sink.emit(SoundEvent::Tick);
        sink.set_ambience(true);

        assert_eq!(log.count(SoundEvent::Tick), 2);
        assert_eq!(log.ambience_changes(), vec![true]);
    }
}
