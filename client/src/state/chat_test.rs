use super::*;
use crate::util::dialogue::{CANNED_RULES, FALLBACK_REPLY, GREETING};

const RULES: &[CannedRule] = &[CannedRule { keyword: "cyber", response: "cyber reply" }];

fn open_chat() -> ChatState {
    let mut chat = ChatState::default();
    chat.open_session(GREETING);
    chat
}

fn submit_text(chat: &mut ChatState, text: &str) -> Option<ReplyTicket> {
    chat.set_draft(text.to_owned());
    chat.submit()
}

// =============================================================
// Defaults and sessions
// =============================================================

#[test]
fn chat_state_default_is_idle_and_empty() {
    let chat = ChatState::default();
    assert!(chat.messages.is_empty());
    assert!(chat.draft.is_empty());
    assert_eq!(chat.phase(), ChatPhase::Idle);
    assert!(!chat.is_awaiting_reply());
}

#[test]
fn open_session_seeds_greeting_from_agent() {
    let chat = open_chat();
    assert_eq!(chat.messages.len(), 1);
    assert_eq!(chat.messages[0].sender, ChatSender::Agent);
    assert_eq!(chat.messages[0].text, GREETING);
    assert_eq!(chat.phase(), ChatPhase::Idle);
}

#[test]
fn reopen_starts_fresh_log() {
    let mut chat = open_chat();
    let ticket = submit_text(&mut chat, "cyber").unwrap();
    assert!(chat.complete_reply(&ticket, RULES, FALLBACK_REPLY));
    assert_eq!(chat.messages.len(), 3);

    chat.close_session();
    assert!(chat.messages.is_empty());

    chat.open_session(GREETING);
    assert_eq!(chat.messages.len(), 1);
    assert_eq!(chat.messages[0].text, GREETING);
}

#[test]
fn message_ids_increase_across_sessions() {
    let mut chat = open_chat();
    let ticket = submit_text(&mut chat, "hi").unwrap();
    chat.complete_reply(&ticket, RULES, FALLBACK_REPLY);
    let first_session_max = chat.messages.iter().map(|m| m.id).max().unwrap();

    chat.close_session();
    chat.open_session(GREETING);
    assert!(chat.messages[0].id > first_session_max);

    let ids: Vec<u64> = {
        let ticket = submit_text(&mut chat, "again").unwrap();
        chat.complete_reply(&ticket, RULES, FALLBACK_REPLY);
        chat.messages.iter().map(|m| m.id).collect()
    };
    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
}

// =============================================================
// Draft / composing
// =============================================================

#[test]
fn set_draft_toggles_composing() {
    let mut chat = open_chat();
    chat.set_draft("hello".to_owned());
    assert_eq!(chat.phase(), ChatPhase::Composing);
    chat.set_draft("   ".to_owned());
    assert_eq!(chat.phase(), ChatPhase::Idle);
}

#[test]
fn blank_submission_is_rejected() {
    let mut chat = open_chat();
    assert!(submit_text(&mut chat, "").is_none());
    assert!(submit_text(&mut chat, " \t\n").is_none());
    assert_eq!(chat.messages.len(), 1);
    assert_eq!(chat.phase(), ChatPhase::Idle);
}

// =============================================================
// Submit / reply protocol
// =============================================================

#[test]
fn submit_appends_one_user_message_and_awaits() {
    let mut chat = open_chat();
    let before = chat.messages.len();
    let ticket = submit_text(&mut chat, "  I love cyber stuff  ").unwrap();

    assert_eq!(chat.messages.len(), before + 1);
    let last = chat.messages.last().unwrap();
    assert_eq!(last.sender, ChatSender::User);
    assert_eq!(last.text, "I love cyber stuff");
    assert_eq!(ticket.prompt(), "I love cyber stuff");
    assert_eq!(ticket.session(), chat.session());
    assert!(chat.draft.is_empty());
    assert_eq!(chat.phase(), ChatPhase::AwaitingReply);
    assert!(chat.is_awaiting_reply());
}

#[test]
fn second_submit_while_awaiting_is_noop() {
    let mut chat = open_chat();
    submit_text(&mut chat, "first").unwrap();
    let len = chat.messages.len();

    assert!(submit_text(&mut chat, "second").is_none());
    assert_eq!(chat.messages.len(), len);
    assert_eq!(chat.phase(), ChatPhase::AwaitingReply);
}

#[test]
fn complete_reply_appends_one_agent_message_and_idles() {
    let mut chat = open_chat();
    let ticket = submit_text(&mut chat, "CYBER?").unwrap();
    let len = chat.messages.len();

    assert!(chat.complete_reply(&ticket, RULES, FALLBACK_REPLY));
    assert_eq!(chat.messages.len(), len + 1);
    let last = chat.messages.last().unwrap();
    assert_eq!(last.sender, ChatSender::Agent);
    assert_eq!(last.text, "cyber reply");
    assert_eq!(chat.phase(), ChatPhase::Idle);
}

#[test]
fn complete_reply_uses_fallback_without_match() {
    let mut chat = open_chat();
    let ticket = submit_text(&mut chat, "hello world").unwrap();
    chat.complete_reply(&ticket, CANNED_RULES, FALLBACK_REPLY);
    assert_eq!(chat.messages.last().unwrap().text, FALLBACK_REPLY);
}

#[test]
fn complete_reply_twice_is_rejected() {
    let mut chat = open_chat();
    let ticket = submit_text(&mut chat, "cyber").unwrap();
    assert!(chat.complete_reply(&ticket, RULES, FALLBACK_REPLY));
    let len = chat.messages.len();
    assert!(!chat.complete_reply(&ticket, RULES, FALLBACK_REPLY));
    assert_eq!(chat.messages.len(), len);
}

#[test]
fn submit_allowed_again_after_reply() {
    let mut chat = open_chat();
    let ticket = submit_text(&mut chat, "one").unwrap();
    chat.complete_reply(&ticket, RULES, FALLBACK_REPLY);
    assert!(submit_text(&mut chat, "two").is_some());
}

// =============================================================
// Cancellation on close
// =============================================================

#[test]
fn close_cancels_pending_reply() {
    let mut chat = open_chat();
    let ticket = submit_text(&mut chat, "cyber").unwrap();

    chat.close_session();
    assert!(!chat.is_awaiting_reply());
    assert!(!chat.complete_reply(&ticket, RULES, FALLBACK_REPLY));
    assert!(chat.messages.is_empty());
}

#[test]
fn stale_ticket_does_not_leak_into_reopened_session() {
    let mut chat = open_chat();
    let stale = submit_text(&mut chat, "cyber").unwrap();
    chat.close_session();
    chat.open_session(GREETING);

    let fresh = submit_text(&mut chat, "hello").unwrap();
    assert!(!chat.complete_reply(&stale, RULES, FALLBACK_REPLY));
    assert!(chat.is_awaiting_reply());
    assert_eq!(chat.messages.len(), 2);

    assert!(chat.complete_reply(&fresh, RULES, FALLBACK_REPLY));
    assert_eq!(chat.messages.last().unwrap().text, FALLBACK_REPLY);
}
