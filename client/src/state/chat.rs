//! Conversation state: turns, the in-flight flag, and the active simulation.
//!
//! DESIGN
//! ======
//! Turns are append-only for the life of the page. The loading flag is the
//! single-request gate: submission paths check it before sending and the
//! input controls disable while it is set.

use uuid::Uuid;

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// Who authored a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

/// One message bubble in the conversation. Never mutated after creation.
#[derive(Clone, Debug, PartialEq)]
pub struct ConversationTurn {
    pub id: String,
    pub sender: Sender,
    pub text: String,
    /// Milliseconds since the Unix epoch, for the bubble's time caption.
    pub timestamp: f64,
    /// Error turns render in the assistant column with error styling.
    pub is_error: bool,
}

impl ConversationTurn {
    #[must_use]
    pub fn user(text: String, timestamp: f64) -> Self {
        Self::new(Sender::User, text, timestamp, false)
    }

    #[must_use]
    pub fn assistant(text: String, timestamp: f64) -> Self {
        Self::new(Sender::Assistant, text, timestamp, false)
    }

    #[must_use]
    pub fn error(text: String, timestamp: f64) -> Self {
        Self::new(Sender::Assistant, text, timestamp, true)
    }

    fn new(sender: Sender, text: String, timestamp: f64, is_error: bool) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            sender,
            text,
            timestamp,
            is_error,
        }
    }
}

/// Conversation state shared through a reactive context.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    /// Turns in display order.
    pub turns: Vec<ConversationTurn>,
    /// True while a query is in flight.
    pub loading: bool,
    /// Simulation run queries are scoped to, when one is selected.
    pub simulation_id: Option<String>,
}

impl ChatState {
    /// The welcome block shows until the first turn lands, including the
    /// connectivity banner.
    #[must_use]
    pub fn show_welcome(&self) -> bool {
        self.turns.is_empty()
    }
}
