use super::*;

fn active_count(state: &UiState) -> usize {
    Section::ALL.iter().filter(|s| state.is_active(**s)).count()
}

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_shows_report_panel() {
    let state = UiState::default();
    assert_eq!(state.active_section, Section::Report);
    assert_eq!(active_count(&state), 1);
}

// =============================================================
// Panel switching
// =============================================================

#[test]
fn select_leaves_exactly_one_matching_panel_active() {
    let mut state = UiState::default();
    for clicked in Section::ALL {
        state.select(clicked);
        assert_eq!(active_count(&state), 1);
        assert!(state.is_active(clicked));
    }
}

#[test]
fn select_same_section_twice_keeps_it_active() {
    let mut state = UiState::default();
    state.select(Section::Predict);
    state.select(Section::Predict);
    assert!(state.is_active(Section::Predict));
    assert_eq!(active_count(&state), 1);
}

// =============================================================
// Section
// =============================================================

#[test]
fn section_keys_match_trigger_markup() {
    let keys: Vec<_> = Section::ALL.into_iter().map(Section::key).collect();
    assert_eq!(keys, ["report", "recent", "predict"]);
}

#[test]
fn section_panel_ids_match_markup() {
    assert_eq!(Section::Report.panel_id(), "section-report");
    assert_eq!(Section::Recent.panel_id(), "section-recent");
    assert_eq!(Section::Predict.panel_id(), "section-predict");
}

#[test]
fn section_variants_are_distinct() {
    assert_ne!(Section::Report, Section::Recent);
    assert_ne!(Section::Report, Section::Predict);
    assert_ne!(Section::Recent, Section::Predict);
}
