//! Modal hosting the simulated AI agent conversation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The modal owns one chat session: mounting opens a fresh session seeded
//! with the greeting, unmounting closes it. Replies are delivered after
//! `REPLY_DELAY` against the ticket returned by `submit`, so a reply whose
//! session has been closed is discarded.

#[cfg(test)]
#[path = "agent_chat_modal_test.rs"]
mod agent_chat_modal_test;

use leptos::prelude::*;

use crate::state::chat::{ChatMessage, ChatSender, ChatState};
use crate::util::dialogue::GREETING;
#[cfg(feature = "hydrate")]
use crate::util::dialogue::{CANNED_RULES, FALLBACK_REPLY, REPLY_DELAY};

/// Chat modal with message log, typing indicator, and prompt input.
#[component]
pub fn AgentChatModal(on_close: Callback<()>) -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let messages_ref = NodeRef::<leptos::html::Div>::new();
    let modal_ref = NodeRef::<leptos::html::Div>::new();

    chat.update(|c| c.open_session(GREETING));
    on_cleanup(move || chat.update(ChatState::close_session));

    Effect::new(move || {
        let _ = chat.with(|c| (c.messages.len(), c.is_awaiting_reply()));

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    // Keyboard focus moves into the modal on open so Escape works immediately.
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = modal_ref.get() {
                let _ = el.focus();
            }
        }
    });

    let do_send = move || {
        let mut ticket = None;
        chat.update(|c| ticket = c.submit());
        let Some(ticket) = ticket else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            log::debug!("agent chat: reply scheduled for session {}", ticket.session());
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(REPLY_DELAY).await;
                let mut applied = false;
                chat.update(|c| applied = c.complete_reply(&ticket, CANNED_RULES, FALLBACK_REPLY));
                if !applied {
                    log::debug!("agent chat: dropped reply for closed session {}", ticket.session());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ticket;
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        do_send();
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_dismiss_key(&ev.key()) {
            ev.prevent_default();
            on_close.run(());
        }
    };

    let awaiting = move || chat.with(ChatState::is_awaiting_reply);
    let can_send = move || chat.with(|c| !c.is_awaiting_reply() && !c.draft.trim().is_empty());

    view! {
        <div class="agent-modal__backdrop" on:click=move |_| on_close.run(())>
            <div
                class="agent-modal"
                node_ref=modal_ref
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
                tabindex="0"
            >
                <div class="agent-modal__header">
                    <h3>"Test de l'Agent IA (Simulation)"</h3>
                    <button class="agent-modal__close" on:click=move |_| on_close.run(()) title="Fermer">
                        "✕"
                    </button>
                </div>

                <div class="agent-modal__messages" node_ref=messages_ref>
                    <For
                        each=move || chat.with(|c| c.messages.clone())
                        key=|msg| msg.id
                        children=move |msg: ChatMessage| {
                            let from_user = msg.sender == ChatSender::User;
                            view! {
                                <div
                                    class="chat-message"
                                    class:chat-message--user=from_user
                                    class:chat-message--agent={!from_user}
                                >
                                    {msg.text}
                                </div>
                            }
                        }
                    />
                    {move || {
                        awaiting()
                            .then(|| {
                                view! { <div class="chat-message chat-message--agent chat-message--typing">"..."</div> }
                            })
                    }}
                </div>

                <form class="agent-modal__input-row" on:submit=on_submit>
                    <input
                        class="agent-modal__input"
                        type="text"
                        placeholder="Écrivez votre prompt..."
                        disabled=awaiting
                        prop:value=move || chat.with(|c| c.draft.clone())
                        on:input=move |ev| chat.update(|c| c.set_draft(event_target_value(&ev)))
                    />
                    <button class="btn" type="submit" disabled=move || !can_send()>
                        "Envoyer"
                    </button>
                </form>
            </div>
        </div>
    }
}

/// Keys that close the modal.
fn is_dismiss_key(key: &str) -> bool {
    key == "Escape"
}
