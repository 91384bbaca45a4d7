//! Conversation state for the simulated AI agent modal.
//!
//! DESIGN
//! ======
//! A session spans one open/close cycle of the modal. Each submission hands
//! back a `ReplyTicket` bound to the session that issued it; the delayed reply
//! is only applied if that session is still current. Closing or reopening the
//! modal therefore cancels any pending reply.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::util::dialogue::{CannedRule, respond};

/// Who authored a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatSender {
    User,
    Agent,
}

/// A single chat message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: u64,
    pub sender: ChatSender,
    pub text: String,
}

/// Phase of the conversation protocol.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChatPhase {
    /// Nothing typed, nothing pending.
    #[default]
    Idle,
    /// The draft holds submittable text.
    Composing,
    /// A reply is pending; submissions are rejected.
    AwaitingReply,
}

/// Proof that a reply was requested by a given session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplyTicket {
    session: u64,
    prompt: String,
}

impl ReplyTicket {
    pub fn session(&self) -> u64 {
        self.session
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }
}

/// State for the agent chat modal.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub draft: String,
    phase: ChatPhase,
    session: u64,
    next_id: u64,
}

impl ChatState {
    pub fn phase(&self) -> ChatPhase {
        self.phase
    }

    pub fn session(&self) -> u64 {
        self.session
    }

    pub fn is_awaiting_reply(&self) -> bool {
        self.phase == ChatPhase::AwaitingReply
    }

    /// Start a fresh session: clears the log and seeds `greeting`.
    pub fn open_session(&mut self, greeting: &str) {
        self.reset();
        self.push(ChatSender::Agent, greeting.to_owned());
    }

    /// End the current session, discarding the log and any pending reply.
    pub fn close_session(&mut self) {
        self.reset();
    }

    /// Replace the input draft.
    pub fn set_draft(&mut self, text: String) {
        self.draft = text;
        if self.phase != ChatPhase::AwaitingReply {
            self.phase = if self.draft.trim().is_empty() { ChatPhase::Idle } else { ChatPhase::Composing };
        }
    }

    /// Submit the current draft.
    ///
    /// Returns `None` without touching the log when the draft is blank or a
    /// reply is already pending.
    pub fn submit(&mut self) -> Option<ReplyTicket> {
        if self.phase == ChatPhase::AwaitingReply {
            return None;
        }
        let prompt = self.draft.trim().to_owned();
        if prompt.is_empty() {
            return None;
        }

        self.draft.clear();
        self.push(ChatSender::User, prompt.clone());
        self.phase = ChatPhase::AwaitingReply;
        Some(ReplyTicket { session: self.session, prompt })
    }

    /// Apply the agent reply for `ticket`.
    ///
    /// Returns `false` (and changes nothing) if the ticket belongs to an
    /// earlier session or no reply is pending.
    pub fn complete_reply(&mut self, ticket: &ReplyTicket, rules: &[CannedRule], fallback: &str) -> bool {
        if ticket.session != self.session || self.phase != ChatPhase::AwaitingReply {
            return false;
        }

        let reply = respond(&ticket.prompt, rules, fallback).to_owned();
        self.push(ChatSender::Agent, reply);
        self.phase = if self.draft.trim().is_empty() { ChatPhase::Idle } else { ChatPhase::Composing };
        true
    }

    fn reset(&mut self) {
        self.session += 1;
        self.messages.clear();
        self.draft.clear();
        self.phase = ChatPhase::Idle;
    }

    fn push(&mut self, sender: ChatSender, text: String) {
        self.next_id += 1;
        self.messages.push(ChatMessage { id: self.next_id, sender, text });
    }
}
