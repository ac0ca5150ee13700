//! Recent-hazards lookup form and results list.

use leptos::prelude::*;

use crate::components::hazard_item::HazardItem;
use crate::state::recent::RecentState;

#[component]
pub fn RecentPanel() -> impl IntoView {
    let recent = expect_context::<RwSignal<RecentState>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        // Blank location: prompt shown, nothing sent.
        let Some(query) = recent.try_update(RecentState::begin_lookup).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::fetch_hazards(&query).await;
            recent.update(|r| r.finish_lookup(outcome));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = query;
    };

    view! {
        <form id="form-recent" class="recent-form" on:submit=on_submit>
            <label for="check-location">"Location"</label>
            <input
                id="check-location"
                type="text"
                placeholder="Where are you headed?"
                prop:value=move || recent.with(|r| r.location.clone())
                on:input=move |ev| recent.update(|r| r.location = event_target_value(&ev))
            />
            <button type="submit" class="btn">"Check"</button>
        </form>
        <div id="hazard-results" class="hazard-results">
            {move || {
                recent.with(|r| match r.message() {
                    Some(message) => view! { <p class="hazard-results__message">{message}</p> }.into_any(),
                    None => {
                        view! {
                            <ul class="hazard-results__list">
                                {r
                                    .items()
                                    .into_iter()
                                    .map(|summary| view! { <HazardItem summary=summary/> })
                                    .collect::<Vec<_>>()}
                            </ul>
                        }
                            .into_any()
                    }
                })
            }}
        </div>
    }
}
