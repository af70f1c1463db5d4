//! Chat transcript and conversation-history state.
//!
//! DESIGN
//! ======
//! Pure state transitions driven by the chat page: the page performs the API
//! calls and feeds replies back through these methods. The transcript always
//! opens with a local welcome message that is never sent to the backend.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::types::{ChatReply, ConversationDetail, ConversationSummary};

pub const WELCOME_MESSAGE: &str = "Hello! I'm your AI support assistant. I'm here to help you with any questions \
     based on your uploaded documents and conversation history. How can I assist you today?";

const WELCOME_ID: &str = "welcome";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
    /// Local notice for a failed request.
    Error,
}

/// Thumbs rating on an assistant answer. Kept locally only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feedback {
    Positive,
    Negative,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: String,
    pub sender: Sender,
    pub content: String,
    pub sources: Vec<String>,
    pub feedback: Option<Feedback>,
}

impl ChatMessage {
    fn new(sender: Sender, content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            sender,
            content: content.into(),
            sources: Vec::new(),
            feedback: None,
        }
    }

    fn welcome() -> Self {
        Self {
            id: WELCOME_ID.to_owned(),
            sender: Sender::Assistant,
            content: WELCOME_MESSAGE.to_owned(),
            sources: vec!["Knowledge Base".to_owned()],
            feedback: None,
        }
    }

    #[must_use]
    pub fn is_welcome(&self) -> bool {
        self.id == WELCOME_ID
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    /// A question is in flight.
    pub typing: bool,
    /// Backend conversation the next question continues.
    pub conversation_id: Option<String>,
    pub history: Vec<ConversationSummary>,
    pub history_open: bool,
    pub history_error: Option<String>,
}

impl Default for ChatState {
    fn default() -> Self {
        Self {
            messages: vec![ChatMessage::welcome()],
            typing: false,
            conversation_id: None,
            history: Vec::new(),
            history_open: false,
            history_error: None,
        }
    }
}

impl ChatState {
    /// Record the user's question. Returns the trimmed text to send, or
    /// `None` when it is blank or another question is still in flight.
    pub fn begin_question(&mut self, input: &str) -> Option<String> {
        let question = input.trim();
        if question.is_empty() || self.typing {
            return None;
        }
        self.messages.push(ChatMessage::new(Sender::User, question));
        self.typing = true;
        Some(question.to_owned())
    }

    pub fn receive_answer(&mut self, reply: ChatReply) {
        let mut message = ChatMessage::new(Sender::Assistant, reply.answer);
        message.sources = reply.sources;
        self.messages.push(message);
        if reply.conversation_id.is_some() {
            self.conversation_id = reply.conversation_id;
        }
        self.typing = false;
    }

    pub fn receive_error(&mut self, error: &str) {
        self.messages.push(ChatMessage::new(Sender::Error, format!("Sorry, something went wrong: {error}")));
        self.typing = false;
    }

    /// Rate an assistant answer. Returns `false` when `id` is not a rateable message.
    pub fn set_feedback(&mut self, id: &str, feedback: Feedback) -> bool {
        match self.messages.iter_mut().find(|m| m.id == id && m.sender == Sender::Assistant && !m.is_welcome()) {
            Some(message) => {
                message.feedback = Some(feedback);
                true
            }
            None => false,
        }
    }

    /// Start a fresh conversation, keeping the loaded history.
    pub fn new_conversation(&mut self) {
        self.messages = vec![ChatMessage::welcome()];
        self.conversation_id = None;
        self.typing = false;
    }

    /// Replace the transcript with a stored conversation and continue it.
    pub fn open_conversation(&mut self, id: &str, detail: ConversationDetail) {
        self.new_conversation();
        for turn in detail.messages {
            if let Some(question) = turn.question.filter(|q| !q.trim().is_empty()) {
                self.messages.push(ChatMessage::new(Sender::User, question));
            }
            if let Some(answer) = turn.answer.filter(|a| !a.trim().is_empty()) {
                self.messages.push(ChatMessage::new(Sender::Assistant, answer));
            }
        }
        self.conversation_id = Some(id.to_owned());
        self.history_open = false;
    }

    pub fn set_history(&mut self, history: Vec<ConversationSummary>) {
        self.history = history;
        self.history_error = None;
    }

    pub fn rename_in_history(&mut self, id: &str, name: &str) {
        if let Some(entry) = self.history.iter_mut().find(|c| c.id.as_deref() == Some(id)) {
            entry.title = Some(name.to_owned());
        }
    }

    /// Drop a deleted conversation; if it was open, start a new one.
    pub fn remove_from_history(&mut self, id: &str) {
        self.history.retain(|c| c.id.as_deref() != Some(id));
        if self.conversation_id.as_deref() == Some(id) {
            self.new_conversation();
        }
    }
}
