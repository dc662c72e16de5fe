//! AI chat assistant panel.
//!
//! Holds the transcript, the input buffer, and at most one in-flight
//! generation request. Submission declines empty input and double
//! sends; completion is polled by the event loop. A failed call is
//! absorbed into the transcript as a fixed apology line -- no error ever
//! escapes to the caller. Dropping this state (closing the panel) drops
//! the reply receiver, which is the cancellation scope for a request
//! still in flight.

use std::sync::Arc;

use matcha_net::{ReplyRx, TextGenService, spawn_generate};

/// Who authored a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

/// One chat bubble.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

/// Greeting seeded into every fresh transcript.
pub const GREETING: &str = "Hi! I'm the matcha assistant. I can help you tune \
                            your settings or answer anything you're curious about.";

/// Substituted when the call succeeds but carries no text.
pub const EMPTY_REPLY_FALLBACK: &str =
    "I hit a small connection snag, mind trying that again?";

/// Substituted when the call fails outright.
pub const FAILURE_FALLBACK: &str =
    "System hiccup. Please check your connection and try again.";

/// Runtime state of the assistant panel.
pub struct AssistantState {
    transcript: Vec<ChatMessage>,
    input: String,
    loading: bool,
    pending: Option<ReplyRx>,
}

impl AssistantState {
    pub fn new() -> Self {
        Self {
            transcript: vec![ChatMessage {
                role: ChatRole::Assistant,
                content: GREETING.to_string(),
            }],
            input: String::new(),
            loading: false,
            pending: None,
        }
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
    }

    /// Submit the input buffer.
    ///
    /// Declined (no message sent, no state change) when the trimmed
    /// input is empty or a request is already in flight.
    pub fn submit(&mut self, service: &Arc<dyn TextGenService>) -> bool {
        let message = self.input.trim().to_string();
        if message.is_empty() || self.loading {
            return false;
        }
        self.input.clear();
        self.transcript.push(ChatMessage {
            role: ChatRole::User,
            content: message.clone(),
        });
        self.loading = true;
        self.pending = Some(spawn_generate(Arc::clone(service), message));
        true
    }

    /// Poll the in-flight request, if any.
    ///
    /// Returns `true` when a transcript entry was appended this call.
    pub fn poll(&mut self) -> bool {
        let Some(rx) = &self.pending else {
            return false;
        };
        let Some(reply) = rx.try_reply() else {
            return false;
        };
        let content = match reply {
            Ok(text) if !text.is_empty() => text,
            Ok(_) => EMPTY_REPLY_FALLBACK.to_string(),
            Err(e) => {
                log::warn!("assistant call failed: {e}");
                FAILURE_FALLBACK.to_string()
            },
        };
        self.transcript.push(ChatMessage {
            role: ChatRole::Assistant,
            content,
        });
        self.loading = false;
        self.pending = None;
        true
    }
}

impl Default for AssistantState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AssistantState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssistantState")
            .field("transcript_len", &self.transcript.len())
            .field("loading", &self.loading)
            .field("pending", &self.pending.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matcha_types::error::{MatchaError, Result};
    use std::thread;
    use std::time::Duration;

    struct CannedService(Result<String>);

    impl TextGenService for CannedService {
        fn generate(&self, _prompt: &str) -> Result<String> {
            match &self.0 {
                Ok(s) => Ok(s.clone()),
                Err(_) => Err(MatchaError::TextGen("simulated outage".into())),
            }
        }
    }

    fn service(reply: Result<String>) -> Arc<dyn TextGenService> {
        Arc::new(CannedService(reply))
    }

    fn poll_until_reply(state: &mut AssistantState) {
        for _ in 0..200 {
            if state.poll() {
                return;
            }
            thread::sleep(Duration::from_millis(5));
        }
        panic!("no reply within a second");
    }

    #[test]
    fn fresh_transcript_has_only_the_greeting() {
        let state = AssistantState::new();
        assert_eq!(state.transcript().len(), 1);
        assert_eq!(state.transcript()[0].content, GREETING);
        assert!(!state.is_loading());
    }

    #[test]
    fn empty_input_is_declined() {
        let mut state = AssistantState::new();
        state.set_input("   ");
        assert!(!state.submit(&service(Ok("unused".into()))));
        assert_eq!(state.transcript().len(), 1);
        assert!(!state.is_loading());
    }

    #[test]
    fn successful_reply_lands_in_transcript() {
        let mut state = AssistantState::new();
        state.set_input("hello");
        assert!(state.submit(&service(Ok("hey yourself".into()))));
        assert!(state.is_loading());
        assert_eq!(state.transcript().len(), 2);
        assert_eq!(state.transcript()[1].role, ChatRole::User);
        poll_until_reply(&mut state);
        assert_eq!(state.transcript().len(), 3);
        assert_eq!(state.transcript()[2].role, ChatRole::Assistant);
        assert_eq!(state.transcript()[2].content, "hey yourself");
        assert!(!state.is_loading());
    }

    #[test]
    fn failure_substitutes_the_fallback_line() {
        let mut state = AssistantState::new();
        state.set_input("hello");
        state.submit(&service(Err(MatchaError::TextGen("boom".into()))));
        poll_until_reply(&mut state);
        let last = state.transcript().last().unwrap();
        assert_eq!(last.content, FAILURE_FALLBACK);
        assert!(!state.is_loading());
    }

    #[test]
    fn empty_reply_substitutes_the_snag_line() {
        let mut state = AssistantState::new();
        state.set_input("hello");
        state.submit(&service(Ok(String::new())));
        poll_until_reply(&mut state);
        assert_eq!(
            state.transcript().last().unwrap().content,
            EMPTY_REPLY_FALLBACK
        );
    }

    #[test]
    fn second_submit_while_loading_is_declined() {
        let mut state = AssistantState::new();
        state.set_input("first");
        assert!(state.submit(&service(Ok("r".into()))));
        state.set_input("second");
        assert!(!state.submit(&service(Ok("r".into()))));
        // The declined input stays in the buffer.
        assert_eq!(state.input(), "second");
    }

    #[test]
    fn input_survives_a_declined_submit_but_clears_on_send() {
        let mut state = AssistantState::new();
        state.set_input("hello");
        state.submit(&service(Ok("r".into())));
        assert_eq!(state.input(), "");
    }

    #[test]
    fn dropping_the_panel_cancels_the_pending_reply() {
        let mut state = AssistantState::new();
        state.set_input("hello");
        state.submit(&service(Ok("late reply".into())));
        drop(state);
        // A reopened panel is a fresh transcript, untouched by the
        // request that outlived the old one.
        thread::sleep(Duration::from_millis(20));
        let reopened = AssistantState::new();
        assert_eq!(reopened.transcript().len(), 1);
    }
}
