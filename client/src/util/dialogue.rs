//! Canned-response lookup for the simulated AI agent.
//!
//! The "agent" is a finite keyword table: the first rule whose keyword occurs
//! in the utterance (case-insensitive) supplies the reply, otherwise the
//! fallback does. The conversation state machine lives in `state::chat`.

#[cfg(test)]
#[path = "dialogue_test.rs"]
mod dialogue_test;

use std::time::Duration;

/// Simulated typing latency before the agent replies.
pub const REPLY_DELAY: Duration = Duration::from_millis(1500);

/// Message seeded at the start of every chat session.
pub const GREETING: &str = "Bonjour ! Je suis une simulation de l'agent IA. Posez-moi une question.";

/// Reply used when no rule matches.
pub const FALLBACK_REPLY: &str = "C'est une excellente question. En tant que simulation, je ne peux que donner des réponses pré-programmées. Mais merci d'avoir essayé !";

/// A static keyword-to-response pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CannedRule {
    pub keyword: &'static str,
    pub response: &'static str,
}

/// Rules in match order.
pub const CANNED_RULES: &[CannedRule] = &[
    CannedRule {
        keyword: "cyber",
        response: "La cybersécurité est un domaine fascinant, n'est-ce pas ? SticksOnTheBeach s'y intéresse beaucoup.",
    },
    CannedRule {
        keyword: "projet",
        response: "Ce projet est une démonstration. Pour le vrai projet, consultez le lien GitHub !",
    },
];

/// Pick the reply for `utterance`.
pub fn respond<'a>(utterance: &str, rules: &'a [CannedRule], fallback: &'a str) -> &'a str {
    let folded = utterance.to_lowercase();
    rules
        .iter()
        .find(|rule| folded.contains(&rule.keyword.to_lowercase()))
        .map_or(fallback, |rule| rule.response)
}
