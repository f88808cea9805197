use crate::{AnalysisPayload, EntryFields};

use serde_json::json;

#[test]
fn test_entry_fields_range_checks() {
    let mut fields = EntryFields {
        intensity: Some(10),
        confidence: Some(0),
        ..EntryFields::default()
    };
    assert!(fields.validate().is_ok());

    fields.intensity = Some(0);
    assert!(fields.validate().is_err());

    fields.intensity = Some(11);
    assert!(fields.validate().is_err());

    fields.intensity = None;
    fields.confidence = Some(101);
    assert!(fields.validate().is_err());
}

#[test]
fn test_entry_fields_structured_fields_flatten_into_json() {
    let mut fields = EntryFields {
        mood: Some("happy".to_string()),
        ..EntryFields::default()
    };
    *fields.analysis.slot_mut("chart_data").unwrap() =
        Some(AnalysisPayload::parse("chart_data", json!([1, 2, 3])).unwrap());

    let encoded = serde_json::to_value(&fields).unwrap();

    assert_eq!(encoded["mood"], json!("happy"));
    assert_eq!(encoded["chart_data"], json!([1, 2, 3]));
    assert_eq!(encoded["facial_analysis"], json!(null));
}

#[test]
fn test_structured_fields_unknown_slot() {
    let mut fields = EntryFields::default();
    assert!(fields.analysis.slot_mut("not_a_field").is_none());
    assert_eq!(fields.analysis.iter().count(), 10);
}
