use std::io::Cursor;

use historial_core::models::pain::PainLevel;
use historial_core::models::vital::VitalKind;
use historial_replay::{read_events, read_events_file, replay};
use historial_session::{FieldChange, FieldEventSource, FieldId, FormConfig, Reaction};
use pretty_assertions::assert_eq;

const COMPLETE_VISIT: &str = r#"
# numeric click, then vitals
{ "field": "pain_numeric", "value": "5" }
{ "field": "vital", "kind": "pulse", "value": "72" }
{ "field": "vital", "kind": "blood_pressure", "value": "150/95" }
{ "field": "relative_status", "relative": "mother", "value": "alive" }
{ "field": "family_condition", "relative": "mother", "condition": "diabetes", "value": true }
{ "field": "habit", "habit": "thumb_sucking", "value": "always" }
"#;

#[test]
fn comments_and_blank_lines_are_skipped() {
    let mut events = read_events(Cursor::new(COMPLETE_VISIT)).unwrap();
    assert_eq!(events.len(), 6);
    assert_eq!(
        events.next_change(),
        Some(FieldChange::text(FieldId::PainNumeric, "5"))
    );
}

#[test]
fn bad_line_is_reported_with_its_number() {
    let input = "{ \"field\": \"pain_numeric\", \"value\": \"5\" }\n{ \"field\": \"wat\" }\n";
    let err = read_events(Cursor::new(input)).unwrap_err();
    assert!(format!("{err:#}").contains("line 2"));
}

#[test]
fn complete_visit_replays_to_a_submittable_snapshot() {
    let events = read_events(Cursor::new(COMPLETE_VISIT)).unwrap();
    let outcome = replay(FormConfig::default(), events).unwrap();

    assert_eq!(outcome.reactions.len(), 6);
    assert!(outcome.missing.is_empty());
    assert_eq!(outcome.snapshot.pain_numeric, PainLevel::new(5).ok());
    assert_eq!(outcome.snapshot.vital_signs[&VitalKind::BloodPressure], "150/95");
    assert!(matches!(
        outcome.reactions[5],
        Reaction::HabitAssessed { alert: Some(_), .. }
    ));
}

#[test]
fn incomplete_visit_lists_missing_fields() {
    let events =
        read_events(Cursor::new(r#"{ "field": "chief_complaint", "value": "Checkup" }"#)).unwrap();
    let outcome = replay(FormConfig::default(), events).unwrap();
    assert_eq!(outcome.missing.len(), 3);
}

#[test]
fn rejected_change_stops_the_replay() {
    let input = "{ \"field\": \"pain_faces\", \"value\": \"5\" }\n";
    let events = read_events(Cursor::new(input)).unwrap();
    assert!(replay(FormConfig::default(), events).is_err());
}

#[test]
fn events_file_is_read_from_disk() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("visit.jsonl");
    std::fs::write(&path, COMPLETE_VISIT).unwrap();
    assert_eq!(read_events_file(&path).unwrap().len(), 6);
    assert!(read_events_file(&dir.path().join("missing.jsonl")).is_err());
}
