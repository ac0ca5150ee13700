//! Single page hosting the panel switcher and its three panels.

use leptos::prelude::*;

use crate::components::panel_nav::PanelNav;
use crate::components::predict_panel::PredictPanel;
use crate::components::recent_panel::RecentPanel;
use crate::components::report_panel::ReportPanel;
use crate::state::ui::{Section, UiState};

/// Landing page. Only the active section is visible; the others carry the
/// `hidden` attribute.
#[component]
pub fn HomePage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let active = move |section: Section| ui.get().is_active(section);

    view! {
        <main class="home-page">
            <header class="home-page__header">
                <h1>"SafeStreet"</h1>
                <p>"Accessibility hazards reported by the people who walk, roll, and ride here."</p>
            </header>

            <PanelNav/>

            <section
                id=Section::Report.panel_id()
                class="panel"
                class:active=move || active(Section::Report)
                hidden=move || !active(Section::Report)
            >
                <h2>{Section::Report.label()}</h2>
                <ReportPanel/>
            </section>

            <section
                id=Section::Recent.panel_id()
                class="panel"
                class:active=move || active(Section::Recent)
                hidden=move || !active(Section::Recent)
            >
                <h2>{Section::Recent.label()}</h2>
                <RecentPanel/>
            </section>

            <section
                id=Section::Predict.panel_id()
                class="panel"
                class:active=move || active(Section::Predict)
                hidden=move || !active(Section::Predict)
            >
                <h2>{Section::Predict.label()}</h2>
                <PredictPanel/>
            </section>
        </main>
    }
}
