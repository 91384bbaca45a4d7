//! Fixed top navigation with scroll-spy highlight and theme toggle.

use leptos::prelude::*;

use crate::content::SectionId;
use crate::state::ui::UiState;
use crate::util::theme;

/// Navbar linking every section; the active one carries an underline.
#[component]
pub fn Navbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_toggle_theme = move |_| {
        let next = theme::toggle(ui.with_untracked(|u| u.theme));
        ui.update(|u| u.theme = next);
    };

    view! {
        <nav class="navbar">
            <ul class="navbar__links">
                {SectionId::ALL
                    .into_iter()
                    .map(|section| {
                        let is_active = move || ui.with(|u| u.active_section == section);
                        view! {
                            <li class="navbar__item">
                                <a
                                    href=format!("#{}", section.as_str())
                                    class="navbar__link"
                                    class:navbar__link--active=is_active
                                >
                                    {section.label()}
                                    <Show when=is_active>
                                        <span class="navbar__underline"></span>
                                    </Show>
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
                <li class="navbar__item">
                    <button class="navbar__theme-toggle" on:click=on_toggle_theme title="Changer de thème">
                        {move || ui.with(|u| u.theme.toggle_icon())}
                    </button>
                </li>
            </ul>
        </nav>
    }
}
