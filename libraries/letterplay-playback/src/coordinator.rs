//! Audio coordinator - core orchestration
//!
//! Coordinates the background music and song slots: the user-facing
//! music flag, mutual exclusion between the two slots, and
//! suspend/restore around priority sound effects.

use crate::{
    error::{PlaybackError, Result},
    events::PlaybackEvent,
    restore::{PlaybackSnapshot, RestoreToken},
    source::PlaybackSource,
    types::{CoordinatorConfig, SourceKind},
};

/// Central audio coordination
///
/// Owns the session-wide playback state the UI layer reads and drives:
/// - The user-togglable music flag (independent of actual play state)
/// - Mutual exclusion between the music and song slots
/// - Priority-effect suspension with snapshot-based restore
///
/// One coordinator exists per running UI session. The source handles are
/// injected at construction; the coordinator never creates or destroys
/// them. All operations run on the UI event loop - `&mut self` is the
/// whole concurrency story.
pub struct AudioCoordinator {
    // State
    music_enabled: bool,
    suspended: bool,

    // Injected source slots
    music: Box<dyn PlaybackSource>,
    song: Box<dyn PlaybackSource>,

    // Event queue for UI synchronization
    pending_events: Vec<PlaybackEvent>,
}

impl AudioCoordinator {
    /// Create a new coordinator over the injected source handles
    pub fn new(
        config: CoordinatorConfig,
        music: Box<dyn PlaybackSource>,
        song: Box<dyn PlaybackSource>,
    ) -> Self {
        Self {
            music_enabled: config.music_enabled,
            suspended: false,
            music,
            song,
            pending_events: Vec::new(),
        }
    }

    /// Create a coordinator with the default configuration (music enabled)
    pub fn with_defaults(music: Box<dyn PlaybackSource>, song: Box<dyn PlaybackSource>) -> Self {
        Self::new(CoordinatorConfig::default(), music, song)
    }

    // ===== Music Flag =====

    /// Flip the user-facing music flag, returning the new value
    ///
    /// Has no side effect on actual playback; callers read the flag to
    /// decide whether to start or stop the music slot. Two calls return
    /// the flag to its original value.
    pub fn toggle_music(&mut self) -> bool {
        self.music_enabled = !self.music_enabled;
        self.emit_music_toggled();
        self.music_enabled
    }

    /// Whether background music is enabled
    pub fn is_music_enabled(&self) -> bool {
        self.music_enabled
    }

    /// Set the music flag directly
    pub fn set_music_enabled(&mut self, enabled: bool) {
        if self.music_enabled != enabled {
            self.music_enabled = enabled;
            self.emit_music_toggled();
        }
    }

    // ===== Mutual Exclusion =====

    /// Toggle the primary slot, deferring the other slot to it
    ///
    /// The slot not named is the secondary. If the primary is paused,
    /// the secondary is paused first iff it is audibly playing, then the
    /// primary plays - the two slots are never left audibly playing
    /// together. If the primary is playing, it is paused and the
    /// secondary is untouched: starting the primary always stops the
    /// secondary, but stopping the primary never starts it.
    pub fn manage_playback(&mut self, primary: SourceKind) {
        let secondary = primary.other();

        if self.source(primary).is_paused() {
            if !self.source(secondary).is_paused() {
                self.source_mut(secondary).pause();
                self.emit_source_paused(secondary);
            }
            self.source_mut(primary).play();
            self.emit_source_started(primary);
        } else {
            self.source_mut(primary).pause();
            self.emit_source_paused(primary);
        }
    }

    // ===== Priority Effects =====

    /// Suspend current playback for a priority sound effect
    ///
    /// Captures which slots were audibly playing (music only counts while
    /// the music flag is on), pauses them, and invokes `play_action` with
    /// the [`RestoreToken`] that resumes them. The action starts the
    /// transient effect and holds the token until the effect completes -
    /// typically a media "ended" event on a later turn of the event loop -
    /// then redeems it via [`AudioCoordinator::restore`].
    ///
    /// Only one effect may be in flight: a second call before the prior
    /// token is redeemed returns [`PlaybackError::EffectInProgress`],
    /// since its snapshot would baseline the suspended state and clobber
    /// the pending restore.
    pub fn play_letter_sound<F>(&mut self, play_action: F) -> Result<()>
    where
        F: FnOnce(RestoreToken),
    {
        if self.suspended {
            return Err(PlaybackError::EffectInProgress);
        }

        let snapshot = PlaybackSnapshot {
            music_was_playing: self.music_enabled && !self.music.is_paused(),
            song_was_playing: !self.song.is_paused(),
        };

        if snapshot.music_was_playing {
            self.music.pause();
        }
        if snapshot.song_was_playing {
            self.song.pause();
        }

        self.suspended = true;
        self.emit(PlaybackEvent::EffectStarted);

        play_action(RestoreToken::new(snapshot));
        Ok(())
    }

    /// Redeem a restore token, resuming whatever its snapshot recorded
    ///
    /// Resumes each slot iff it was audibly playing when the effect
    /// began. The snapshot alone decides: music paused because the flag
    /// was off is not resumed, and a flag toggled while the effect ran
    /// does not change what comes back.
    pub fn restore(&mut self, token: RestoreToken) {
        let snapshot = token.into_snapshot();

        if snapshot.music_was_playing {
            self.music.play();
        }
        if snapshot.song_was_playing {
            self.song.play();
        }

        self.suspended = false;
        self.emit(PlaybackEvent::PlaybackRestored);
    }

    /// Whether a priority effect is currently suspending playback
    ///
    /// Stays true until the outstanding [`RestoreToken`] is redeemed; a
    /// dropped token leaves this latched, which is how a leaked restore
    /// shows up.
    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    // ===== Observability =====

    /// Whether a slot is currently paused
    pub fn is_paused(&self, kind: SourceKind) -> bool {
        self.source(kind).is_paused()
    }

    // ===== Events =====

    /// Drain all pending events (call from UI layer each turn)
    pub fn take_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Internal =====

    fn source(&self, kind: SourceKind) -> &dyn PlaybackSource {
        match kind {
            SourceKind::Music => self.music.as_ref(),
            SourceKind::Song => self.song.as_ref(),
        }
    }

    fn source_mut(&mut self, kind: SourceKind) -> &mut dyn PlaybackSource {
        match kind {
            SourceKind::Music => self.music.as_mut(),
            SourceKind::Song => self.song.as_mut(),
        }
    }

    fn emit(&mut self, event: PlaybackEvent) {
        self.pending_events.push(event);
    }

    fn emit_music_toggled(&mut self) {
        let enabled = self.music_enabled;
        self.emit(PlaybackEvent::MusicToggled { enabled });
    }

    fn emit_source_started(&mut self, kind: SourceKind) {
        self.emit(PlaybackEvent::SourceStarted { kind });
    }

    fn emit_source_paused(&mut self, kind: SourceKind) {
        self.emit(PlaybackEvent::SourcePaused { kind });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::test_support::{SourceProbe, TestSource};

    fn coordinator_with(
        music_paused: bool,
        song_paused: bool,
    ) -> (AudioCoordinator, SourceProbe, SourceProbe) {
        let (music, music_probe) = TestSource::with_state(music_paused);
        let (song, song_probe) = TestSource::with_state(song_paused);
        (
            AudioCoordinator::with_defaults(music, song),
            music_probe,
            song_probe,
        )
    }

    #[test]
    fn music_enabled_by_default() {
        let (coordinator, _, _) = coordinator_with(true, true);
        assert!(coordinator.is_music_enabled());
    }

    #[test]
    fn toggle_music_twice_is_identity() {
        let (mut coordinator, _, _) = coordinator_with(true, true);
        let original = coordinator.is_music_enabled();

        let flipped = coordinator.toggle_music();
        assert_ne!(flipped, original);

        let restored = coordinator.toggle_music();
        assert_eq!(restored, original);
    }

    #[test]
    fn toggle_music_does_not_touch_sources() {
        let (mut coordinator, music, song) = coordinator_with(false, true);
        coordinator.toggle_music();

        assert_eq!(music.play_calls(), 0);
        assert_eq!(music.pause_calls(), 0);
        assert_eq!(song.play_calls(), 0);
        assert_eq!(song.pause_calls(), 0);
    }

    #[test]
    fn manage_playback_pauses_playing_secondary() {
        // Song is playing; activating music must silence the song first
        let (mut coordinator, music, song) = coordinator_with(true, false);

        coordinator.manage_playback(SourceKind::Music);

        assert!(!music.is_paused());
        assert!(song.is_paused());
        assert_eq!(song.pause_calls(), 1);
    }

    #[test]
    fn manage_playback_pauses_playing_primary() {
        let (mut coordinator, music, song) = coordinator_with(false, true);

        coordinator.manage_playback(SourceKind::Music);

        assert!(music.is_paused());
        // Stopping the primary never starts the secondary
        assert!(song.is_paused());
        assert_eq!(song.play_calls(), 0);
        assert_eq!(song.pause_calls(), 0);
    }

    #[test]
    fn manage_playback_with_both_paused_skips_secondary() {
        let (mut coordinator, music, song) = coordinator_with(true, true);

        coordinator.manage_playback(SourceKind::Song);

        assert!(!song.is_paused());
        assert!(music.is_paused());
        // Already-paused secondary is not even touched
        assert_eq!(music.pause_calls(), 0);
    }

    #[test]
    fn play_letter_sound_suspends_and_restore_resumes() {
        let (mut coordinator, music, song) = coordinator_with(false, true);

        let mut slot = None;
        coordinator
            .play_letter_sound(|token| slot = Some(token))
            .unwrap();

        assert!(music.is_paused());
        assert!(song.is_paused());
        assert!(coordinator.is_suspended());

        coordinator.restore(slot.take().unwrap());

        assert!(!music.is_paused());
        assert!(song.is_paused());
        assert_eq!(song.play_calls(), 0);
        assert!(!coordinator.is_suspended());
    }

    #[test]
    fn disabled_music_is_not_snapshotted() {
        // Music audibly playing but flag off: the snapshot must not
        // record it, so the effect neither pauses nor resumes it
        let (mut coordinator, music, _song) = coordinator_with(false, true);
        coordinator.set_music_enabled(false);

        let mut slot = None;
        coordinator
            .play_letter_sound(|token| slot = Some(token))
            .unwrap();

        let token = slot.take().unwrap();
        assert!(!token.snapshot().music_was_playing);
        assert!(!music.is_paused());
        assert_eq!(music.pause_calls(), 0);

        coordinator.restore(token);
        assert_eq!(music.play_calls(), 0);
    }

    #[test]
    fn both_playing_suspend_and_restore() {
        let (mut coordinator, music, song) = coordinator_with(false, false);

        let mut slot = None;
        coordinator
            .play_letter_sound(|token| slot = Some(token))
            .unwrap();

        assert!(music.is_paused());
        assert!(song.is_paused());

        coordinator.restore(slot.take().unwrap());

        assert!(!music.is_paused());
        assert!(!song.is_paused());
    }

    #[test]
    fn overlapping_effect_is_rejected() {
        let (mut coordinator, _music, _song) = coordinator_with(false, true);

        let mut slot = None;
        coordinator
            .play_letter_sound(|token| slot = Some(token))
            .unwrap();

        let second = coordinator.play_letter_sound(|_token| {});
        assert_eq!(second, Err(PlaybackError::EffectInProgress));

        // The first restore still works after the rejected call
        coordinator.restore(slot.take().unwrap());
        assert!(!coordinator.is_suspended());
        assert!(!coordinator.is_paused(SourceKind::Music));
    }

    #[test]
    fn new_effect_allowed_after_restore() {
        let (mut coordinator, _music, _song) = coordinator_with(false, true);

        let mut slot = None;
        coordinator
            .play_letter_sound(|token| slot = Some(token))
            .unwrap();
        coordinator.restore(slot.take().unwrap());

        let again = coordinator.play_letter_sound(|token| slot = Some(token));
        assert!(again.is_ok());
    }

    #[test]
    fn flag_toggled_mid_effect_does_not_change_restore() {
        let (mut coordinator, music, _song) = coordinator_with(false, true);

        let mut slot = None;
        coordinator
            .play_letter_sound(|token| slot = Some(token))
            .unwrap();

        // User switches music off while the effect is playing
        coordinator.set_music_enabled(false);

        coordinator.restore(slot.take().unwrap());
        // Snapshot recorded music as playing, so it comes back
        assert!(!music.is_paused());
    }

    #[test]
    fn events_are_queued_and_drained() {
        let (mut coordinator, _music, _song) = coordinator_with(true, false);

        coordinator.toggle_music();
        coordinator.manage_playback(SourceKind::Music);

        assert!(coordinator.has_pending_events());
        let events = coordinator.take_events();
        assert_eq!(
            events,
            vec![
                PlaybackEvent::MusicToggled { enabled: false },
                PlaybackEvent::SourcePaused {
                    kind: SourceKind::Song
                },
                PlaybackEvent::SourceStarted {
                    kind: SourceKind::Music
                },
            ]
        );

        assert!(!coordinator.has_pending_events());
        assert!(coordinator.take_events().is_empty());
    }
}
