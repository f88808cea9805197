use crate::apply_form_field;

use clarity_core::{CoreError, EntryFields};

use googletest::prelude::*;
use serde_json::json;

#[test]
fn given_text_fields_when_applying_then_sets_them_verbatim() {
    // Given
    let mut fields = EntryFields::default();

    // When
    apply_form_field(&mut fields, "mood", "Calm").unwrap();
    apply_form_field(&mut fields, "notes", "  walked by the river ").unwrap();
    apply_form_field(&mut fields, "primary_emotion", "joy").unwrap();

    // Then
    assert_that!(fields.mood.as_deref(), some(eq("Calm")));
    assert_that!(fields.notes.as_deref(), some(eq("  walked by the river ")));
    assert_that!(fields.primary_emotion.as_deref(), some(eq("joy")));
}

#[test]
fn given_numeric_text_when_applying_intensity_then_parses_it() {
    let mut fields = EntryFields::default();

    apply_form_field(&mut fields, "intensity", " 7 ").unwrap();

    assert_that!(fields.intensity, some(eq(7)));
}

#[test]
fn given_non_numeric_intensity_when_applying_then_validation_error_names_field() {
    let mut fields = EntryFields::default();

    let result = apply_form_field(&mut fields, "intensity", "very");

    match result {
        Err(CoreError::Validation { field, .. }) => {
            assert_that!(field.as_deref(), some(eq("intensity")))
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn given_json_list_when_applying_emotions_then_parses_strings() {
    let mut fields = EntryFields::default();

    apply_form_field(&mut fields, "emotions", r#"["joy","calm"]"#).unwrap();

    assert_eq!(
        fields.emotions,
        Some(vec!["joy".to_string(), "calm".to_string()])
    );
}

#[test]
fn given_non_list_when_applying_tips_then_validation_error() {
    let mut fields = EntryFields::default();

    let result = apply_form_field(&mut fields, "tips", "drink water");

    assert!(matches!(result, Err(CoreError::Validation { .. })));
}

#[test]
fn given_json_object_when_applying_structured_field_then_keeps_structure() {
    // Given
    let mut fields = EntryFields::default();
    let text = r#"{"scores":{"joy":0.8,"sad":0.1},"labels":["smile"]}"#;

    // When
    apply_form_field(&mut fields, "facial_analysis", text).unwrap();

    // Then
    let payload = fields.analysis.facial_analysis.unwrap();
    assert_eq!(
        payload.value(),
        &json!({"scores": {"joy": 0.8, "sad": 0.1}, "labels": ["smile"]})
    );
}

#[test]
fn given_plain_text_when_applying_structured_field_then_keeps_json_string() {
    let mut fields = EntryFields::default();

    apply_form_field(&mut fields, "quick_insight", "You seem rested").unwrap();

    let payload = fields.analysis.quick_insight.unwrap();
    assert_eq!(payload.value(), &json!("You seem rested"));
}

#[test]
fn given_blank_value_when_applying_then_field_stays_absent() {
    let mut fields = EntryFields::default();

    let known = apply_form_field(&mut fields, "intensity", "   ").unwrap();

    assert!(known);
    assert_that!(fields.intensity, none());
}

#[test]
fn given_unknown_field_when_applying_then_ignored() {
    let mut fields = EntryFields::default();

    let known = apply_form_field(&mut fields, "weather", "sunny").unwrap();

    assert!(!known);
    assert_eq!(fields, EntryFields::default());
}
