//! Session-scoped chat history.
//!
//! One `ConversationLog` per interactive session, owned by that session and
//! passed explicitly through the request loop. Turns are append-only and
//! never persisted; the log dies with the session.

use chrono::{DateTime, Utc};

/// A resolved (question, answer) pair. `asked_at` is stamped at append time
/// and used only for history display.
#[derive(Debug, Clone)]
pub struct ChatTurn {
    pub question: String,
    pub answer: String,
    pub asked_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub struct ConversationLog {
    turns: Vec<ChatTurn>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, question: &str, answer: &str) {
        self.turns.push(ChatTurn {
            question: question.to_string(),
            answer: answer.to_string(),
            asked_at: Utc::now(),
        });
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }

    /// All turns, oldest first. Submission order is preserved exactly.
    pub fn all(&self) -> &[ChatTurn] {
        &self.turns
    }

    /// Most-recent-first view for the history panel.
    pub fn recent(&self) -> impl Iterator<Item = &ChatTurn> {
        self.turns.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
