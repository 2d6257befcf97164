//! Assistant session.
//!
//! Maintains the running conversation with the shopping assistant. The
//! session owns two views of the conversation: the visible transcript shown
//! to the user, and the upstream history actually exchanged with the model.
//! Fallback apologies after a failed call are appended to the transcript
//! only, so the two views can diverge - the next send still transmits the
//! uncorrected history.
//!
//! The session is stored in the tower-session and reset every time the
//! chat is opened; there is no state outside it.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::gemini::Content;

/// Greeting shown when the chat is opened.
pub const GREETING: &str =
    "Hello! I am Zephyra, your personal beauty assistant. How can I help you today?";

/// Fixed apology appended to the transcript when a send fails.
pub const FALLBACK_REPLY: &str =
    "I seem to be having trouble connecting. Please try again in a moment.";

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One entry in the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
}

/// Session-scoped assistant conversation state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssistantSession {
    transcript: Vec<ChatMessage>,
    history: Vec<ChatMessage>,
    busy: bool,
}

impl AssistantSession {
    /// Fresh session with the greeting in the visible transcript. The
    /// upstream history starts empty; the greeting is never sent upstream.
    #[must_use]
    pub fn open() -> Self {
        Self {
            transcript: vec![ChatMessage {
                role: Role::Assistant,
                text: GREETING.to_string(),
            }],
            history: Vec::new(),
            busy: false,
        }
    }

    /// Record an outgoing user message and mark the session busy.
    ///
    /// Returns `false` without changing anything if a send is already in
    /// flight or the message is blank; the busy flag gates duplicate
    /// submissions.
    pub fn begin_send(&mut self, text: &str) -> bool {
        let text = text.trim();
        if self.busy || text.is_empty() {
            return false;
        }

        let message = ChatMessage {
            role: Role::User,
            text: text.to_string(),
        };
        self.transcript.push(message.clone());
        self.history.push(message);
        self.busy = true;
        true
    }

    /// Record a successful reply in both the transcript and the history.
    pub fn record_reply(&mut self, text: String) {
        let message = ChatMessage {
            role: Role::Assistant,
            text,
        };
        self.transcript.push(message.clone());
        self.history.push(message);
        self.busy = false;
    }

    /// Record a failed send: the fixed apology goes to the visible
    /// transcript only, leaving the upstream history untouched.
    pub fn record_failure(&mut self) {
        self.transcript.push(ChatMessage {
            role: Role::Assistant,
            text: FALLBACK_REPLY.to_string(),
        });
        self.busy = false;
    }

    /// The visible transcript, oldest first.
    #[must_use]
    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// The upstream conversation history, oldest first.
    #[must_use]
    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    /// Whether a send is in flight.
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.busy
    }

    /// The accumulated history as upstream content turns.
    #[must_use]
    pub fn request_contents(&self) -> Vec<Content> {
        self.history
            .iter()
            .map(|message| match message.role {
                Role::User => Content::user_text(message.text.clone()),
                Role::Assistant => Content::model_text(message.text.clone()),
            })
            .collect()
    }
}

/// The fixed system instruction, embedding a serialized snapshot of the
/// full catalog.
#[must_use]
pub fn system_instruction(catalog: &Catalog) -> String {
    format!(
        "You are Zephyra, a friendly and expert AI shopping assistant for a luxury \
         beauty brand. Your goal is to help users discover the perfect skincare and \
         haircare products. You are knowledgeable about all the products listed below. \
         Use this information to answer questions, provide recommendations, and help \
         users find what they're looking for. Keep your responses helpful, elegant, \
         and concise, in line with the Zephyra brand. Here are the available products \
         in JSON format: {}",
        catalog.assistant_manifest()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_resets_to_greeting_only() {
        let session = AssistantSession::open();
        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.transcript()[0].text, GREETING);
        assert!(session.history().is_empty());
        assert!(!session.is_busy());
    }

    #[test]
    fn test_send_appends_to_both_views() {
        let mut session = AssistantSession::open();
        assert!(session.begin_send("Which serum suits dry skin?"));
        assert!(session.is_busy());

        session.record_reply("The Vitamin C Serum is a lovely match.".to_string());
        assert!(!session.is_busy());

        assert_eq!(session.transcript().len(), 3);
        assert_eq!(session.history().len(), 2);
        assert_eq!(session.history()[0].role, Role::User);
        assert_eq!(session.history()[1].role, Role::Assistant);
    }

    #[test]
    fn test_failure_appends_exactly_one_fallback_to_transcript_only() {
        let mut session = AssistantSession::open();
        assert!(session.begin_send("hello"));

        session.record_failure();

        let fallbacks = session
            .transcript()
            .iter()
            .filter(|m| m.text == FALLBACK_REPLY)
            .count();
        assert_eq!(fallbacks, 1);
        assert!(!session.is_busy());

        // History keeps only the user turn; the apology never goes upstream.
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history()[0].role, Role::User);
    }

    #[test]
    fn test_busy_flag_gates_duplicate_sends() {
        let mut session = AssistantSession::open();
        assert!(session.begin_send("first"));
        assert!(!session.begin_send("second"));

        // The gated message never reached either view.
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.transcript().len(), 2);
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let mut session = AssistantSession::open();
        assert!(!session.begin_send("   "));
        assert!(!session.is_busy());
    }

    #[test]
    fn test_request_contents_mirror_history_roles() {
        let mut session = AssistantSession::open();
        session.begin_send("hi");
        session.record_reply("hello!".to_string());

        let contents = session.request_contents();
        assert_eq!(contents.len(), 2);
        assert_eq!(contents[0].role.as_deref(), Some("user"));
        assert_eq!(contents[1].role.as_deref(), Some("model"));
    }

    #[test]
    fn test_system_instruction_embeds_catalog() {
        let catalog = Catalog::seed();
        let instruction = system_instruction(&catalog);
        assert!(instruction.contains("Glycolic Gloss Shampoo"));
        assert!(instruction.starts_with("You are Zephyra"));
    }
}
