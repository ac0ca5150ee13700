use super::*;

fn elm_st_response() -> HazardsResponse {
    serde_json::from_value(serde_json::json!({
        "hazards": [{
            "day": "Mon",
            "timestamp": "10:00",
            "location_name": "Elm St",
            "hazard_type": "pothole",
            "accessibility": 3,
            "user_type": "pedestrian"
        }]
    }))
    .unwrap()
}

// =============================================================
// begin_lookup
// =============================================================

#[test]
fn blank_location_prompts_and_sends_nothing() {
    let mut requests = 0;
    for blank in ["", "   ", "\t\n"] {
        let mut state = RecentState { location: blank.to_owned(), ..RecentState::default() };
        if state.begin_lookup().is_some() {
            requests += 1;
        }
        assert_eq!(state.status, LookupStatus::MissingLocation);
        assert_eq!(state.message(), Some("Please enter a location."));
    }
    assert_eq!(requests, 0);
}

#[test]
fn begin_lookup_trims_query() {
    let mut state = RecentState { location: "  Elm St ".to_owned(), ..RecentState::default() };
    assert_eq!(state.begin_lookup().as_deref(), Some("Elm St"));
    assert_eq!(state.status, LookupStatus::Pending);
    assert_eq!(state.location, "  Elm St ");
}

// =============================================================
// finish_lookup
// =============================================================

#[test]
fn one_record_renders_one_item() {
    let mut state = RecentState { location: "Elm St".to_owned(), ..RecentState::default() };
    assert!(state.begin_lookup().is_some());
    state.finish_lookup(Ok(elm_st_response()));

    let items = state.items();
    assert_eq!(items.len(), 1);
    let text = items[0].plain_text();
    assert!(text.contains("Elm St"));
    assert!(text.contains("pothole"));
    assert!(state.message().is_none());
}

#[test]
fn empty_hazards_shows_no_hazards_message() {
    let mut state = RecentState { location: "Elm St".to_owned(), ..RecentState::default() };
    state.begin_lookup();
    state.finish_lookup(Ok(HazardsResponse::default()));

    assert_eq!(state.status, LookupStatus::Empty);
    assert!(state.items().is_empty());
    assert_eq!(state.message(), Some("No recent hazards reported for this location."));
}

#[test]
fn failure_shows_fetch_error() {
    for err in [ApiError::Network("offline".to_owned()), ApiError::Decode("eof".to_owned())] {
        let mut state = RecentState { location: "Elm St".to_owned(), ..RecentState::default() };
        state.begin_lookup();
        state.finish_lookup(Err(err));
        assert_eq!(state.status, LookupStatus::Failed);
        assert_eq!(state.message(), Some("Error fetching hazards. Please try again."));
    }
}

#[test]
fn new_lookup_discards_previous_results() {
    let mut state = RecentState { location: "Elm St".to_owned(), ..RecentState::default() };
    state.begin_lookup();
    state.finish_lookup(Ok(elm_st_response()));
    assert_eq!(state.items().len(), 1);

    state.begin_lookup();
    assert!(state.items().is_empty());
    assert_eq!(state.message(), Some("Loading..."));
}
