//! Decorative layers: floating background shapes and click ripples.

use leptos::prelude::*;

use crate::state::ui::{Ripple, UiState};

const FLOATING_SHAPES: usize = 10;

/// Slowly drifting shapes behind the page content.
#[component]
pub fn FloatingShapes() -> impl IntoView {
    view! {
        <div class="floating-shapes" aria-hidden="true">
            {(0..FLOATING_SHAPES).map(|_| view! { <div class="floating-shape"></div> }).collect_view()}
        </div>
    }
}

/// Expanding circles at click points. Each ripple removes itself from state
/// when its CSS animation ends.
#[component]
pub fn RippleLayer() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="ripple-layer" aria-hidden="true">
            <For
                each=move || ui.with(|u| u.ripples.clone())
                key=|ripple| ripple.id
                children=move |ripple: Ripple| {
                    let id = ripple.id;
                    view! {
                        <div
                            class="click-ripple"
                            style=format!("left: {}px; top: {}px", ripple.x, ripple.y)
                            on:animationend=move |_| ui.update(|u| u.retire_ripple(id))
                        ></div>
                    }
                }
            />
        </div>
    }
}
