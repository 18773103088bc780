//! Turn progress port
//!
//! Lets the presentation layer render a response incrementally as fragments
//! arrive, without the use case knowing anything about terminals.

/// Progress callbacks for a streaming turn.
///
/// Fragments are delivered in arrival order; there is never more than one
/// turn in flight, so calls from different turns cannot interleave.
pub trait TurnProgress: Send + Sync {
    /// The upstream call succeeded and fragments are about to arrive.
    fn on_stream_start(&self) {}

    /// One text fragment, in order.
    fn on_chunk(&self, _text: &str) {}

    /// The stream finished (normally or with an error).
    fn on_stream_end(&self) {}
}

/// No-op progress for quiet mode and tests
pub struct NoTurnProgress;

impl TurnProgress for NoTurnProgress {}
