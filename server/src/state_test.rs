use super::*;
use hazards::{Accessibility, HazardRecord};

#[tokio::test]
async fn test_state_starts_with_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_helpers::test_app_state(&dir);
    assert!(state.store.load_all().await.unwrap().is_empty());
    assert_eq!(state.config, HazardConfig::default());
}

#[tokio::test]
async fn cloned_state_shares_store() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_helpers::test_app_state(&dir);
    let clone = state.clone();

    let record = HazardRecord {
        day: "Friday".to_owned(),
        timestamp: "2024-03-08 12:00:00".to_owned(),
        location_name: "Main St".to_owned(),
        hazard_type: "ice".to_owned(),
        accessibility: Accessibility::Level(1),
        user_type: "cyclist".to_owned(),
        temporary: Some(true),
        description: None,
        media_url: None,
    };
    state.store.append(&record).await.unwrap();

    assert_eq!(clone.store.load_all().await.unwrap().len(), 1);
}
