//! "Should I avoid it?" panel backed by `/api/predict`.

use leptos::prelude::*;

use crate::state::predict::PredictState;

#[component]
pub fn PredictPanel() -> impl IntoView {
    let predict = expect_context::<RwSignal<PredictState>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(query) = predict.try_update(PredictState::begin_predict).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::fetch_prediction(&query).await;
            predict.update(|p| p.finish_predict(outcome));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = query;
    };

    view! {
        <form id="form-predict" class="predict-form" on:submit=on_submit>
            <label for="predict-location">"Location"</label>
            <input
                id="predict-location"
                type="text"
                placeholder="e.g. Elm St"
                prop:value=move || predict.with(|p| p.location.clone())
                on:input=move |ev| predict.update(|p| p.location = event_target_value(&ev))
            />
            <button type="submit" class="btn">"Predict"</button>
        </form>
        <p
            id="predict-result"
            class="predict-result"
            class:predict-result--avoid=move || predict.with(PredictState::should_avoid)
        >
            {move || predict.with(PredictState::message)}
        </p>
    }
}
