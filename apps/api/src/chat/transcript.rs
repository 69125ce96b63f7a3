//! Widget-side conversation state.
//!
//! Insertion-ordered and in-memory only: every widget instance starts from
//! the seeded greeting and loses everything on reload. The server keeps no
//! conversation state at all.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::llm_client::prompts::CONNECTION_FALLBACK;

/// First assistant message of every transcript.
pub const GREETING: &str = "Hello! I'm YoGig AI Assistant. How can I help you today?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// Ordered message log plus the single-in-flight send gate: while a relay
/// call is pending the widget disables its submit control, so at most one
/// request is ever in flight per widget instance.
#[derive(Debug, Clone)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
    pending: bool,
}

impl Transcript {
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage {
                role: Role::Assistant,
                content: GREETING.to_string(),
                timestamp: None,
            }],
            pending: false,
        }
    }

    /// Records the outgoing user message and arms the pending gate.
    ///
    /// Returns the trimmed message to relay, or `None` when the input is
    /// blank or another send is already in flight.
    pub fn begin_send(&mut self, input: &str) -> Option<String> {
        if self.pending {
            return None;
        }
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }
        self.pending = true;
        self.push(Role::User, trimmed.to_string());
        Some(trimmed.to_string())
    }

    /// Appends the relayed reply and releases the gate.
    pub fn complete_send(&mut self, reply: String) {
        self.push(Role::Assistant, reply);
        self.pending = false;
    }

    /// Appends the fixed connection fallback and releases the gate.
    pub fn fail_send(&mut self) {
        self.push(Role::Assistant, CONNECTION_FALLBACK.to_string());
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    fn push(&mut self, role: Role, content: String) {
        self.messages.push(ChatMessage {
            role,
            content,
            timestamp: Some(Utc::now().to_rfc3339()),
        });
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_transcript_seeds_greeting() {
        let transcript = Transcript::new();
        assert_eq!(transcript.messages().len(), 1);
        assert_eq!(transcript.messages()[0].role, Role::Assistant);
        assert_eq!(transcript.messages()[0].content, GREETING);
        assert!(!transcript.is_pending());
    }

    #[test]
    fn test_begin_send_trims_and_appends_user_message() {
        let mut transcript = Transcript::new();
        let sent = transcript.begin_send("  hello  ").unwrap();
        assert_eq!(sent, "hello");
        assert!(transcript.is_pending());
        let last = transcript.messages().last().unwrap();
        assert_eq!(last.role, Role::User);
        assert_eq!(last.content, "hello");
    }

    #[test]
    fn test_blank_input_is_a_no_op() {
        let mut transcript = Transcript::new();
        assert!(transcript.begin_send("   ").is_none());
        assert_eq!(transcript.messages().len(), 1);
        assert!(!transcript.is_pending());
    }

    #[test]
    fn test_second_send_refused_while_pending() {
        let mut transcript = Transcript::new();
        assert!(transcript.begin_send("first").is_some());
        assert!(transcript.begin_send("second").is_none());
        assert_eq!(transcript.messages().len(), 2);
    }

    #[test]
    fn test_complete_send_releases_gate_in_order() {
        let mut transcript = Transcript::new();
        transcript.begin_send("question").unwrap();
        transcript.complete_send("answer".to_string());
        assert!(!transcript.is_pending());
        let contents: Vec<&str> = transcript
            .messages()
            .iter()
            .map(|m| m.content.as_str())
            .collect();
        assert_eq!(contents, vec![GREETING, "question", "answer"]);
    }

    #[test]
    fn test_fail_send_appends_fallback() {
        let mut transcript = Transcript::new();
        transcript.begin_send("question").unwrap();
        transcript.fail_send();
        assert!(!transcript.is_pending());
        let last = transcript.messages().last().unwrap();
        assert_eq!(last.role, Role::Assistant);
        assert_eq!(last.content, CONNECTION_FALLBACK);
    }

    #[test]
    fn test_send_allowed_again_after_failure() {
        let mut transcript = Transcript::new();
        transcript.begin_send("first").unwrap();
        transcript.fail_send();
        assert!(transcript.begin_send("retry").is_some());
    }
}
