use std::collections::BTreeSet;

use historial_core::models::family::{FamilyCondition, Relative, VitalStatus};
use historial_core::models::habit::{HabitFrequency, OralHabit};
use historial_core::models::pain::{FaceRating, PainLevel};
use historial_core::models::snapshot::ClinicalRecordSnapshot;
use historial_core::models::vital::VitalKind;
use historial_export::error::ExportError;
use historial_export::render::{
    render_summary, render_with_template, NO_FAMILY_HISTORY, NO_ORAL_HABITS,
};
use pretty_assertions::assert_eq;

#[test]
fn empty_snapshot_uses_fallbacks() {
    let text = render_summary(&ClinicalRecordSnapshot::default()).unwrap();
    assert!(text.contains("- Numeric scale: Not evaluated"));
    assert!(text.contains("- Faces scale: Not evaluated"));
    assert!(text.contains("- Pulse: Not recorded"));
    assert!(text.contains("- Respiratory rate: Not recorded"));
    assert!(text.contains(NO_FAMILY_HISTORY));
    assert!(text.contains(NO_ORAL_HABITS));
    assert!(text.contains("CHIEF COMPLAINT: Not specified"));
    assert!(text.contains("MEDICAL ALERT: None reported"));
}

#[test]
fn filled_snapshot_renders_each_section() {
    let mut snapshot = ClinicalRecordSnapshot {
        pain_numeric: PainLevel::new(7).ok(),
        pain_faces: FaceRating::new(6).ok(),
        medical_alert: Some("Penicillin allergy".to_string()),
        ..Default::default()
    };
    snapshot
        .relative_status
        .insert(Relative::Father, VitalStatus::Deceased);
    snapshot.family_history.insert(
        Relative::Father,
        BTreeSet::from([FamilyCondition::Diabetes, FamilyCondition::Cancer]),
    );
    snapshot
        .relative_notes
        .insert(Relative::Father, "diagnosed at 60".to_string());
    snapshot
        .relative_status
        .insert(Relative::Mother, VitalStatus::Alive);
    snapshot
        .habits
        .insert(OralHabit::NailBiting, HabitFrequency::Frequently);
    snapshot
        .vital_signs
        .insert(VitalKind::Pulse, "72".to_string());
    snapshot
        .vital_signs
        .insert(VitalKind::BloodPressure, "120/80".to_string());

    let text = render_summary(&snapshot).unwrap();
    assert!(text.contains("- Numeric scale: 7/10"));
    assert!(text.contains("- Faces scale: 6 (Hurts even more)"));
    assert!(text.contains("- Pulse: 72 bpm"));
    assert!(text.contains("- Blood pressure: 120/80 mmHg"));
    assert!(text.contains("- Temperature: Not recorded"));
    assert!(text.contains(
        "- Father: Deceased | Conditions: Diabetes, Cancer | Notes: diagnosed at 60"
    ));
    assert!(text.contains("- Mother: Alive\n"));
    assert!(text.contains("- Bites nails or objects: Frequently"));
    assert!(!text.contains(NO_FAMILY_HISTORY));
    assert!(!text.contains(NO_ORAL_HABITS));
    assert!(text.contains("MEDICAL ALERT: Penicillin allergy"));
}

#[test]
fn custom_template_sees_the_same_context() {
    let snapshot = ClinicalRecordSnapshot {
        pain_numeric: PainLevel::new(3).ok(),
        ..Default::default()
    };
    let template = "{{ pain_numeric }}|{{ vitals | length }}|{{ family | length }}";
    let text = render_with_template("short.txt", template, &snapshot).unwrap();
    assert_eq!(text, "3/10|4|0");
}

#[test]
fn broken_template_is_a_parse_error() {
    let err = render_with_template(
        "broken.txt",
        "{% for x in %}",
        &ClinicalRecordSnapshot::default(),
    )
    .unwrap_err();
    assert!(matches!(err, ExportError::TemplateParse(_)));
}

#[test]
fn unknown_variable_is_a_render_error() {
    let err = render_with_template(
        "missing.txt",
        "{{ patient_name }}",
        &ClinicalRecordSnapshot::default(),
    )
    .unwrap_err();
    assert!(matches!(err, ExportError::TemplateRender(_)));
}
