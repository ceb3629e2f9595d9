//! Platform-agnostic playback source trait
//!
//! Abstracts the audio elements supplied by the surrounding UI layer.

/// Opaque handle to a controllable audio stream
///
/// Implementors wrap whatever the platform plays audio with (an HTML
/// audio element behind a WebView bridge, a rodio sink, a test stub).
/// The coordinator never constructs sources; the UI layer injects them
/// and keeps them alive for the session.
///
/// Play and pause are infallible by contract: a handle that cannot play
/// is a programming error on the platform side, not a recoverable
/// condition.
pub trait PlaybackSource: Send {
    /// Start or resume playback
    fn play(&mut self);

    /// Pause playback
    ///
    /// Pausing an already-paused source is a no-op.
    fn pause(&mut self);

    /// Whether the source is currently paused
    fn is_paused(&self) -> bool;
}
