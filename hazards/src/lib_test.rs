use super::*;

fn sample_record_json() -> serde_json::Value {
    serde_json::json!({
        "day": "Mon",
        "timestamp": "10:00",
        "location_name": "Elm St",
        "hazard_type": "pothole",
        "accessibility": 3,
        "user_type": "pedestrian"
    })
}

#[test]
fn record_accepts_numeric_accessibility() {
    let record: HazardRecord = serde_json::from_value(sample_record_json()).expect("record");
    assert_eq!(record.accessibility, Accessibility::Level(3));
    assert_eq!(record.accessibility.to_string(), "3");
}

#[test]
fn record_accepts_string_accessibility() {
    let mut json = sample_record_json();
    json["accessibility"] = serde_json::json!("wheelchair only");
    let record: HazardRecord = serde_json::from_value(json).expect("record");
    assert_eq!(record.accessibility, Accessibility::Label("wheelchair only".to_owned()));
    assert_eq!(record.accessibility.to_string(), "wheelchair only");
}

#[test]
fn record_description_is_optional() {
    let record: HazardRecord = serde_json::from_value(sample_record_json()).expect("record");
    assert!(record.description.is_none());
    assert!(record.temporary.is_none());
    assert!(record.media_url.is_none());
}

#[test]
fn record_omits_absent_description_when_serialized() {
    let record: HazardRecord = serde_json::from_value(sample_record_json()).expect("record");
    let json = serde_json::to_value(&record).expect("json");
    assert!(json.get("description").is_none());
    assert_eq!(json["media_url"], serde_json::Value::Null);
}

#[test]
fn hazards_response_defaults_missing_array() {
    let resp: HazardsResponse = serde_json::from_str("{}").expect("response");
    assert!(resp.hazards.is_empty());
}

#[test]
fn hazards_response_treats_null_array_as_empty() {
    let resp: HazardsResponse = serde_json::from_str(r#"{"hazards":null}"#).expect("response");
    assert!(resp.hazards.is_empty());
}

#[test]
fn record_missing_display_fields_still_decodes() {
    let body = serde_json::json!({
        "hazards": [
            { "location_name": "Elm St", "hazard_type": "pothole" },
            sample_record_json()
        ]
    });
    let resp: HazardsResponse = serde_json::from_value(body).expect("response");
    assert_eq!(resp.hazards.len(), 2);
    assert_eq!(resp.hazards[0].location_name, "Elm St");
    assert!(resp.hazards[0].day.is_empty());
    assert!(resp.hazards[0].user_type.is_empty());
    assert_eq!(resp.hazards[0].accessibility, Accessibility::Label(String::new()));
}

#[test]
fn hazards_response_parses_records() {
    let body = serde_json::json!({ "hazards": [sample_record_json()] });
    let resp: HazardsResponse = serde_json::from_value(body).expect("response");
    assert_eq!(resp.hazards.len(), 1);
    assert_eq!(resp.hazards[0].location_name, "Elm St");
}

#[test]
fn error_body_tolerates_missing_field() {
    let body: ErrorBody = serde_json::from_str(r#"{"status":"nope"}"#).expect("body");
    assert!(body.error.is_none());
}

#[test]
fn error_body_new_serializes_message() {
    let json = serde_json::to_string(&ErrorBody::new("Invalid data")).expect("json");
    assert_eq!(json, r#"{"error":"Invalid data"}"#);
}

#[test]
fn report_serializes_expected_field_names() {
    let report = HazardReport {
        location_name: "Fashion Square".to_owned(),
        hazard_type: "construction".to_owned(),
        accessibility: "2".to_owned(),
        user_type: "wheelchair".to_owned(),
        temporary: true,
        description: String::new(),
    };
    let json = serde_json::to_value(&report).expect("json");
    let mut keys: Vec<_> = json.as_object().expect("object").keys().cloned().collect();
    keys.sort();
    assert_eq!(
        keys,
        ["accessibility", "description", "hazard_type", "location_name", "temporary", "user_type"]
    );
    assert_eq!(json["temporary"], serde_json::Value::Bool(true));
}

#[test]
fn prediction_parses_server_shape() {
    let body = r#"{"location":"Elm St","day":"Monday","score":4,"should_avoid":true}"#;
    let prediction: Prediction = serde_json::from_str(body).expect("prediction");
    assert_eq!(prediction.score, 4);
    assert!(prediction.should_avoid);
}
