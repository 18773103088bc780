//! Run Turn use case.
//!
//! Executes one conversation turn: resolve system messages, append the user
//! message, stream the completion, append the assistant message.
//!
//! Per-turn state machine: Idle → UserSubmitted → SystemMessagesResolved →
//! Streaming → AssistantAppended → Idle. Streaming is entered only when a
//! completion client is configured; without one the store is left untouched
//! and [`TurnError::MissingCredential`] tells the caller to show its notice.

use crate::ports::completion_client::{
    CompletionClient, CompletionError, CompletionRequest, StreamHandle,
};
use crate::ports::turn_progress::TurnProgress;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};
use tutor_domain::{resolve_system_messages, ChatSession, Message, StreamEvent};

/// Errors that can occur during a turn.
///
/// Every failure is local to the turn: the user message stays in history
/// (except for `MissingCredential`, which aborts before any append) and the
/// user may retry by resubmitting.
#[derive(Error, Debug)]
pub enum TurnError {
    /// No API credential for this session; nothing was sent or stored.
    #[error("No API credential supplied")]
    MissingCredential,

    #[error(transparent)]
    Completion(#[from] CompletionError),
}

/// Use case for running a single conversation turn.
pub struct RunTurnUseCase {
    client: Option<Arc<dyn CompletionClient>>,
}

impl RunTurnUseCase {
    /// Create the use case. `None` models the credential-less session: every
    /// submission fails fast with [`TurnError::MissingCredential`].
    pub fn new(client: Option<Arc<dyn CompletionClient>>) -> Self {
        Self { client }
    }

    /// Whether a completion client (and therefore a credential) is present.
    pub fn has_client(&self) -> bool {
        self.client.is_some()
    }

    /// Execute one turn for `user_input`, streaming fragments to `progress`.
    ///
    /// On success the conversation has advanced by exactly two entries
    /// (user, then assistant) and the final assistant text is returned. On
    /// failure after submission the user entry is retained so the user can
    /// resubmit.
    pub async fn execute(
        &self,
        session: &mut ChatSession,
        user_input: &str,
        progress: &dyn TurnProgress,
    ) -> Result<String, TurnError> {
        let Some(client) = &self.client else {
            return Err(TurnError::MissingCredential);
        };

        let config = session.config().clone();
        let system_messages = resolve_system_messages(&config);

        session.conversation_mut().add_user_message(user_input);

        let history = history_window(session.conversation().all(), config.history_limit);
        let mut messages = system_messages;
        messages.extend_from_slice(history);

        debug!(
            model = %config.model,
            messages = messages.len(),
            "Starting completion stream"
        );

        let request = CompletionRequest::new(config.model, messages, config.generation);
        let handle = client.stream(request).await?;

        let answer = self.consume_stream(handle, progress).await?;

        session.conversation_mut().add_assistant_message(answer.clone());
        info!(turn_messages = session.conversation().len(), "Turn completed");

        Ok(answer)
    }

    /// Drain the stream fragment-by-fragment, forwarding each delta to the
    /// progress port in arrival order.
    async fn consume_stream(
        &self,
        mut handle: StreamHandle,
        progress: &dyn TurnProgress,
    ) -> Result<String, TurnError> {
        progress.on_stream_start();

        let mut collected = String::new();
        let mut completed = None;

        while let Some(event) = handle.receiver.recv().await {
            match event {
                StreamEvent::Delta(chunk) => {
                    progress.on_chunk(&chunk);
                    collected.push_str(&chunk);
                }
                StreamEvent::Completed(text) => {
                    completed = Some(text);
                    break;
                }
                StreamEvent::Error(e) => {
                    progress.on_stream_end();
                    return Err(CompletionError::Upstream(e).into());
                }
            }
        }

        progress.on_stream_end();

        // Prefer the concatenated deltas; the Completed payload covers
        // transports that only deliver a final text.
        if collected.is_empty() {
            Ok(completed.unwrap_or_default())
        } else {
            Ok(collected)
        }
    }
}

/// The slice of history to send upstream.
///
/// `limit` caps the number of most-recent completed turns; the just-appended
/// user message is always included. `None` sends everything — the original
/// behavior, unbounded with turn count.
fn history_window(all: &[Message], limit: Option<usize>) -> &[Message] {
    match limit {
        Some(turns) => {
            let keep = 2 * turns + 1;
            &all[all.len().saturating_sub(keep)..]
        }
        None => all,
    }
}
