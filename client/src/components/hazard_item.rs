//! One entry in the recent-hazards list.

#[cfg(all(test, feature = "ssr"))]
#[path = "hazard_item_test.rs"]
mod hazard_item_test;

use leptos::prelude::*;

use crate::util::hazard_summary::HazardSummary;

#[component]
pub fn HazardItem(summary: HazardSummary) -> impl IntoView {
    let label = summary.plain_text();
    let HazardSummary { pill, location, hazard_type, accessibility, user_type, description } = summary;

    view! {
        <li class="hazard-item" aria-label=label>
            <span class="hazard-item__pill">{pill}</span>
            <strong class="hazard-item__location">{location}</strong>
            <span class="hazard-item__type">{hazard_type}</span>
            <span class="hazard-item__accessibility">{accessibility}</span>
            <span class="hazard-item__user">{user_type}</span>
            {description.map(|d| view! { <p class="hazard-item__description">{d}</p> })}
        </li>
    }
}
