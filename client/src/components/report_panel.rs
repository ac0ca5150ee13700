//! Hazard report form.
//!
//! Field ids match the markup contract (`location_name`, `hazard_type`,
//! ...). Submitting posts the draft and writes the outcome to
//! `submit-status`.

use leptos::prelude::*;

use crate::state::report::{ACCESSIBILITY_LEVELS, HAZARD_TYPES, ReportState, USER_TYPES};

#[component]
pub fn ReportPanel() -> impl IntoView {
    let report = expect_context::<RwSignal<ReportState>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let payload = report.try_update(ReportState::begin_submit);

        #[cfg(feature = "hydrate")]
        {
            if let Some(payload) = payload {
                leptos::task::spawn_local(async move {
                    let outcome = crate::net::api::submit_report(&payload).await;
                    report.update(|r| r.finish_submit(outcome));
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = payload;
    };

    let options = |pairs: &'static [(&'static str, &'static str)]| {
        pairs
            .iter()
            .map(|(value, label)| view! { <option value=*value>{*label}</option> })
            .collect::<Vec<_>>()
    };

    view! {
        <form id="form-report" class="report-form" on:submit=on_submit>
            <label for="location_name">"Location"</label>
            <input
                id="location_name"
                type="text"
                required=true
                placeholder="e.g. Fashion Square"
                prop:value=move || report.with(|r| r.draft.location_name.clone())
                on:input=move |ev| report.update(|r| r.draft.location_name = event_target_value(&ev))
            />

            <label for="hazard_type">"Hazard type"</label>
            <select
                id="hazard_type"
                prop:value=move || report.with(|r| r.draft.hazard_type.clone())
                on:change=move |ev| report.update(|r| r.draft.hazard_type = event_target_value(&ev))
            >
                {options(&HAZARD_TYPES)}
            </select>

            <label for="accessibility">"Accessibility"</label>
            <select
                id="accessibility"
                prop:value=move || report.with(|r| r.draft.accessibility.clone())
                on:change=move |ev| report.update(|r| r.draft.accessibility = event_target_value(&ev))
            >
                {options(&ACCESSIBILITY_LEVELS)}
            </select>

            <label for="user_type">"I am a"</label>
            <select
                id="user_type"
                prop:value=move || report.with(|r| r.draft.user_type.clone())
                on:change=move |ev| report.update(|r| r.draft.user_type = event_target_value(&ev))
            >
                {options(&USER_TYPES)}
            </select>

            <label class="report-form__checkbox" for="temporary">
                <input
                    id="temporary"
                    type="checkbox"
                    prop:checked=move || report.with(|r| r.draft.temporary)
                    on:change=move |ev| report.update(|r| r.draft.temporary = event_target_checked(&ev))
                />
                "Temporary hazard"
            </label>

            <label for="description">"Description (optional)"</label>
            <textarea
                id="description"
                rows="3"
                prop:value=move || report.with(|r| r.draft.description.clone())
                on:input=move |ev| report.update(|r| r.draft.description = event_target_value(&ev))
            ></textarea>

            <button type="submit" class="btn">"Submit report"</button>
            <p id="submit-status" class=move || report.with(|r| r.status.css_class())>
                {move || report.with(|r| r.status.message())}
            </p>
        </form>
    }
}
