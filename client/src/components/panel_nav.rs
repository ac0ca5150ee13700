//! Trigger buttons that switch between the three panels.

use leptos::prelude::*;

use crate::state::ui::{Section, UiState};

/// Row of action buttons, one per panel. Exactly one carries `active`.
#[component]
pub fn PanelNav() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <nav class="panel-nav">
            {Section::ALL
                .into_iter()
                .map(|section| {
                    view! {
                        <button
                            type="button"
                            class="panel-nav__button"
                            class:active=move || ui.get().is_active(section)
                            data-section=section.key()
                            aria-controls=section.panel_id()
                            on:click=move |_| ui.update(|u| u.select(section))
                        >
                            {section.label()}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </nav>
    }
}
