//! The single portfolio page: navbar, stacked sections, decorative layers,
//! and the agent chat modal.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns the browser subscriptions (window scroll, pointer move,
//! clicks) and translates them into `UiState` updates. The window scroll
//! listener is released in `on_cleanup`.

use leptos::prelude::*;

use crate::components::agent_chat_modal::AgentChatModal;
use crate::components::backdrop::{FloatingShapes, RippleLayer};
use crate::components::navbar::Navbar;
use crate::components::sections::{Contact, Experience, Hero, Objective, Projects, Skills};
use crate::content::SectionId;
use crate::state::ui::UiState;
use crate::util::theme;

/// Portfolio page: every section stacked top to bottom.
#[component]
pub fn PortfolioPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    Effect::new(move || {
        let mode = theme::read_preference();
        theme::apply(mode);
        ui.update(|u| u.theme = mode);
    });

    #[cfg(feature = "hydrate")]
    {
        let on_scroll = move || {
            let Some(active) = measure_active_section() else {
                return;
            };
            if ui.with_untracked(|u| u.active_section != active) {
                ui.update(|u| {
                    u.set_active_section(active);
                });
            }
        };
        Effect::new(move || on_scroll());
        let handle = window_event_listener(leptos::ev::scroll, move |_| on_scroll());
        on_cleanup(move || handle.remove());
    }

    let on_mouse_move = move |ev: leptos::ev::MouseEvent| {
        let pointer = (f64::from(ev.client_x()), f64::from(ev.client_y()));
        ui.update(|u| u.pointer = pointer);
    };

    let on_click = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            if click_hits_control(&ev) {
                return;
            }
        }
        let (x, y) = (f64::from(ev.client_x()), f64::from(ev.client_y()));
        ui.update(|u| {
            u.spawn_ripple(x, y);
        });
    };

    let glow_style = move || {
        let (x, y) = ui.with(|u| u.pointer);
        format!("--mouse-x: {x}px; --mouse-y: {y}px")
    };

    let open_chat = Callback::new(move |()| ui.update(|u| u.chat_open = true));
    let close_chat = Callback::new(move |()| ui.update(|u| u.chat_open = false));

    view! {
        <div class="portfolio" style=glow_style on:mousemove=on_mouse_move on:click=on_click>
            <FloatingShapes/>
            <Navbar/>
            <main class="portfolio__sections">
                {SectionId::ALL
                    .into_iter()
                    .map(|section| {
                        let body = match section {
                            SectionId::Home => view! { <Hero/> }.into_any(),
                            SectionId::Objective => view! { <Objective/> }.into_any(),
                            SectionId::Skills => view! { <Skills/> }.into_any(),
                            SectionId::Projects => view! { <Projects on_try_agent=open_chat/> }.into_any(),
                            SectionId::Experience => view! { <Experience/> }.into_any(),
                            SectionId::Contact => view! { <Contact/> }.into_any(),
                        };
                        view! {
                            <section id=section.as_str() class="portfolio__section" data-section=section.as_str()>
                                {body}
                            </section>
                        }
                    })
                    .collect_view()}
            </main>
            <RippleLayer/>
            <Show when=move || ui.with(|u| u.chat_open)>
                <AgentChatModal on_close=close_chat/>
            </Show>
        </div>
    }
}

/// Read the scroll offset and section tops from the DOM and resolve the
/// active section. Returns `None` when the measured layout is rejected, so
/// the current highlight stays in place.
#[cfg(feature = "hydrate")]
fn measure_active_section() -> Option<SectionId> {
    use wasm_bindgen::JsCast;

    use crate::util::scroll_spy::{NAV_OFFSET_PX, measure_sections, resolve_measured};

    let window = web_sys::window()?;
    let document = window.document()?;
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let sections = measure_sections(SectionId::ALL, |id| {
        document
            .get_element_by_id(id.as_str())
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
            .map(|el| f64::from(el.offset_top()))
    });
    match resolve_measured(scroll_y, sections, NAV_OFFSET_PX) {
        Ok(active) => Some(active),
        Err(e) => {
            log::debug!("scroll spy: ignoring measurement: {e}");
            None
        }
    }
}

/// Clicks on buttons and links do not spawn ripples.
#[cfg(feature = "hydrate")]
fn click_hits_control(ev: &leptos::ev::MouseEvent) -> bool {
    use wasm_bindgen::JsCast;

    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest("button, a").ok().flatten())
        .is_some()
}
