use super::{SoundEvent, SoundSink};

/// Sound feedback with an explicit lifecycle
///
/// Nothing is emitted before [`init`](Self::init), which the shell calls on
/// the first user input, or after [`dispose`](Self::dispose). Muting gates
/// every discrete event and pauses the ambience.
pub struct SoundService {
    sink: Box<dyn SoundSink>,
    muted: bool,
    initialized: bool,
    ambience_enabled: bool,
    ambience_playing: bool,
    last_event: Option<SoundEvent>,
}

impl SoundService {
    pub fn new(sink: Box<dyn SoundSink>, muted: bool, ambience_enabled: bool) -> Self {
        Self {
            sink,
            muted,
            initialized: false,
            ambience_enabled,
            ambience_playing: false,
            last_event: None,
        }
    }

    /// Unlock output. Idempotent.
    pub fn init(&mut self) {
        if self.initialized {
            return;
        }
        self.initialized = true;
        log::debug!("Sound service initialized (muted: {})", self.muted);
    }

    /// Stop the ambience and release the output
    pub fn dispose(&mut self) {
        self.stop_ambience();
        self.initialized = false;
        self.last_event = None;
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn ambience_playing(&self) -> bool {
        self.ambience_playing
    }

    /// Most recent event that actually reached the sink
    pub fn last_event(&self) -> Option<SoundEvent> {
        self.last_event
    }

    /// Flip mute and return the new state
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        if self.muted {
            self.stop_ambience();
        } else {
            self.start_ambience();
        }
        self.muted
    }

    pub fn play(&mut self, event: SoundEvent) {
        if self.muted || !self.initialized {
            return;
        }
        self.sink.emit(event);
        self.last_event = Some(event);
    }

    pub fn start_ambience(&mut self) {
        if self.muted || !self.initialized || !self.ambience_enabled || self.ambience_playing {
            return;
        }
        self.ambience_playing = true;
        self.sink.set_ambience(true);
    }

    pub fn stop_ambience(&mut self) {
        if !self.ambience_playing {
            return;
        }
        self.ambience_playing = false;
        self.sink.set_ambience(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sound::RecordingSink;

    fn service(muted: bool) -> (SoundService, crate::sound::SoundLog) {
        let (sink, log) = RecordingSink::new();
        (SoundService::new(Box::new(sink), muted, true), log)
    }

    #[test]
    fn test_nothing_plays_before_init() {
        let (mut sound, log) = service(false);
        sound.play(SoundEvent::Click);
        sound.start_ambience();

        assert!(log.events().is_empty());
        assert!(!sound.ambience_playing());
    }

    #[test]
    fn test_plays_after_init() {
        let (mut sound, log) = service(false);
        sound.init();
        sound.play(SoundEvent::Tick);
        sound.play(SoundEvent::Completion);

        assert_eq!(log.events(), vec![SoundEvent::Tick, SoundEvent::Completion]);
        assert_eq!(sound.last_event(), Some(SoundEvent::Completion));
    }

    #[test]
    fn test_init_is_idempotent() {
        let (mut sound, _log) = service(false);
        sound.init();
        sound.init();
        assert!(sound.is_initialized());
    }

    #[test]
    fn test_mute_gates_all_events() {
        let (mut sound, log) = service(true);
        sound.init();
        sound.play(SoundEvent::Tick);
        sound.play(SoundEvent::Click);
        sound.play(SoundEvent::Completion);

        assert!(log.events().is_empty());
    }

    #[test]
    fn test_toggle_mute_pauses_and_resumes_ambience() {
        let (mut sound, log) = service(false);
        sound.init();
        sound.start_ambience();
        assert!(sound.ambience_playing());

        assert!(sound.toggle_mute());
        assert!(!sound.ambience_playing());

        assert!(!sound.toggle_mute());
        assert!(sound.ambience_playing());
        assert_eq!(log.ambience_changes(), vec![true, false, true]);
    }

    #[test]
    fn test_unmute_before_init_does_not_start_ambience() {
        let (mut sound, log) = service(true);
        sound.toggle_mute();
        assert!(!sound.ambience_playing());
        assert!(log.ambience_changes().is_empty());
    }

    #[test]
    fn test_ambience_disabled_by_config() {
        let (sink, log) = RecordingSink::new();
        let mut sound = SoundService::new(Box::new(sink), false, false);
        sound.init();
        sound.start_ambience();
        assert!(!sound.ambience_playing());
        assert!(log.ambience_changes().is_empty());
    }

    #[test]
    fn test_dispose_stops_output() {
        let (mut sound, log) = service(false);
        sound.init();
        sound.start_ambience();
        sound.dispose();
        sound.play(SoundEvent::Click);

        assert!(!sound.is_initialized());
        assert!(log.events().is_empty());
        assert_eq!(log.ambience_changes(), vec![true, false]);
    }
}
