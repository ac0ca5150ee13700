use super::*;
use hazards::Accessibility;

fn record() -> HazardRecord {
    HazardRecord {
        day: "Mon".to_owned(),
        timestamp: "10:00".to_owned(),
        location_name: "Elm St".to_owned(),
        hazard_type: "pothole".to_owned(),
        accessibility: Accessibility::Level(3),
        user_type: "pedestrian".to_owned(),
        temporary: None,
        description: None,
        media_url: None,
    }
}

#[test]
fn summary_formats_each_field() {
    let summary = HazardSummary::from_record(&record());
    assert_eq!(summary.pill, "Mon \u{b7} 10:00");
    assert_eq!(summary.location, "Elm St");
    assert_eq!(summary.hazard_type, "pothole");
    assert_eq!(summary.accessibility, "Accessibility: 3");
    assert_eq!(summary.user_type, "Reported by: pedestrian");
    assert!(summary.description.is_none());
}

#[test]
fn summary_humanizes_snake_case_values() {
    let mut r = record();
    r.hazard_type = "broken_curb_ramp".to_owned();
    r.user_type = "visually_impaired".to_owned();
    let summary = HazardSummary::from_record(&r);
    assert_eq!(summary.hazard_type, "broken curb ramp");
    assert_eq!(summary.user_type, "Reported by: visually impaired");
}

#[test]
fn summary_keeps_text_accessibility() {
    let mut r = record();
    r.accessibility = Accessibility::Label("steep".to_owned());
    assert_eq!(HazardSummary::from_record(&r).accessibility, "Accessibility: steep");
}

#[test]
fn summary_drops_blank_description() {
    let mut r = record();
    r.description = Some("   ".to_owned());
    assert!(HazardSummary::from_record(&r).description.is_none());
    r.description = Some(" cones everywhere ".to_owned());
    assert_eq!(HazardSummary::from_record(&r).description.as_deref(), Some("cones everywhere"));
}

#[test]
fn summary_leaves_markup_as_literal_text() {
    let mut r = record();
    r.location_name = "<img src=x onerror=alert(1)>".to_owned();
    let summary = HazardSummary::from_record(&r);
    assert_eq!(summary.location, "<img src=x onerror=alert(1)>");
}

#[test]
fn plain_text_joins_present_parts() {
    let mut r = record();
    r.description = Some("deep".to_owned());
    let text = HazardSummary::from_record(&r).plain_text();
    assert_eq!(text, "Mon \u{b7} 10:00 | Elm St | pothole | Accessibility: 3 | Reported by: pedestrian | deep");
}
