use historial_core::models::family::{FamilyCondition, Relative, VitalStatus};
use historial_core::models::habit::{HabitFrequency, OralHabit};
use historial_core::models::pain::{FaceRating, PainLevel, PainScale};
use historial_core::models::vital::VitalKind;
use historial_rules::alert::PainBand;
use historial_rules::habits::HabitHighlight;
use historial_rules::vitals::VitalVerdict;
use historial_session::config::PainScaleConfig;
use historial_session::{FormConfig, FormSession, PainSelection, SessionError};
use pretty_assertions::assert_eq;

fn level(v: u8) -> PainLevel {
    PainLevel::new(v).unwrap()
}

fn face(v: u8) -> FaceRating {
    FaceRating::new(v).unwrap()
}

fn session() -> FormSession {
    FormSession::new(FormConfig::default())
}

#[test]
fn numeric_selection_syncs_faces() {
    let mut s = session();
    assert_eq!(s.pain(), PainSelection::Unset);

    let alert = s.select_numeric(level(5)).unwrap();
    assert_eq!(alert.band, PainBand::Moderate);
    assert_eq!(
        s.pain(),
        PainSelection::Synced {
            numeric: level(5),
            faces: face(4),
            authority: PainScale::Numeric,
        }
    );
}

#[test]
fn face_selection_syncs_numeric_and_reclassifies() {
    let mut s = session();
    s.select_numeric(level(2)).unwrap();
    let alert = s.select_faces(face(8)).unwrap();

    assert_eq!(alert.band, PainBand::Severe);
    assert_eq!(s.pain().numeric(), Some(level(8)));
    assert_eq!(s.pain().authority(), Some(PainScale::Faces));
    assert_eq!(s.pain_alert().unwrap().level, level(8));
}

#[test]
fn latest_classification_replaces_previous() {
    let mut s = session();
    s.select_numeric(level(9)).unwrap();
    s.select_numeric(level(1)).unwrap();
    assert_eq!(s.pain_alert().unwrap().band, PainBand::Low);
}

#[test]
fn single_scale_form_rests_in_selected_state() {
    let config = FormConfig {
        pain: PainScaleConfig {
            numeric: true,
            faces: false,
            required: true,
        },
        ..Default::default()
    };
    let mut s = FormSession::new(config);
    s.select_numeric(level(7)).unwrap();
    assert_eq!(s.pain(), PainSelection::NumericSelected { numeric: level(7) });
    assert_eq!(s.pain().faces(), None);
    assert_eq!(s.pain_alert().unwrap().band, PainBand::Severe);

    assert!(matches!(
        s.select_faces(face(2)),
        Err(SessionError::FieldNotInForm(_))
    ));
}

#[test]
fn faces_only_form_classifies_on_the_face() {
    let config = FormConfig {
        pain: PainScaleConfig {
            numeric: false,
            faces: true,
            required: false,
        },
        ..Default::default()
    };
    let mut s = FormSession::new(config);
    let alert = s.select_faces(face(4)).unwrap();
    assert_eq!(s.pain(), PainSelection::PictorialSelected { faces: face(4) });
    assert_eq!(s.pain().authoritative_level(), Some(level(4)));
    assert_eq!(alert.band, PainBand::Moderate);
}

#[test]
fn unknown_status_hides_and_clears_conditions() {
    let mut s = session();
    assert!(s.set_relative_status(Relative::Father, VitalStatus::Deceased).unwrap());
    assert!(s
        .toggle_condition(Relative::Father, FamilyCondition::HeartDisease, true)
        .unwrap());

    assert!(!s.set_relative_status(Relative::Father, VitalStatus::Unknown).unwrap());
    assert!(s.family_entry(Relative::Father).unwrap().conditions.is_empty());
    assert!(!s
        .toggle_condition(Relative::Father, FamilyCondition::Cancer, true)
        .unwrap());
}

#[test]
fn condition_without_status_is_ignored() {
    let mut s = session();
    assert!(!s
        .toggle_condition(Relative::Mother, FamilyCondition::Diabetes, true)
        .unwrap());
    assert!(s.snapshot().family_history.is_empty());
}

#[test]
fn habit_changes_refresh_the_alert() {
    let mut s = session();
    let (highlight, alert) = s.set_habit(OralHabit::ThumbSucking, HabitFrequency::Always).unwrap();
    assert_eq!(highlight, HabitHighlight::Risk);
    assert_eq!(alert.unwrap().habits.len(), 1);

    let (highlight, alert) = s.set_habit(OralHabit::ThumbSucking, HabitFrequency::Sometimes).unwrap();
    assert_eq!(highlight, HabitHighlight::Caution);
    assert!(alert.is_none());
    assert!(s.habit_alert().is_none());
}

#[test]
fn vital_values_are_filtered_then_validated() {
    let mut s = session();
    let (value, verdict) = s.set_vital(VitalKind::BloodPressure, "150 / 95").unwrap();
    assert_eq!(value, "150/95");
    assert_eq!(verdict, Some(VitalVerdict::Abnormal));
    assert_eq!(s.abnormal_vitals(), vec![VitalKind::BloodPressure]);

    let (_, verdict) = s.set_vital(VitalKind::BloodPressure, "120").unwrap();
    assert_eq!(verdict, None);
    assert_eq!(s.verdict(VitalKind::BloodPressure), None);
    assert!(s.abnormal_vitals().is_empty());
}

#[test]
fn unconfigured_vital_is_rejected() {
    let mut config = FormConfig::default();
    config.vitals.retain(|v| v.kind != VitalKind::Temperature);
    let mut s = FormSession::new(config);
    assert!(matches!(
        s.set_vital(VitalKind::Temperature, "36.5"),
        Err(SessionError::FieldNotInForm(_))
    ));
    assert_eq!(s.vital_value(VitalKind::Temperature), None);
}

#[test]
fn reset_returns_to_blank_form() {
    let mut s = session();
    s.select_numeric(level(6)).unwrap();
    s.set_habit(OralHabit::NailBiting, HabitFrequency::Frequently).unwrap();
    s.set_vital(VitalKind::Pulse, "120").unwrap();
    s.set_chief_complaint("Toothache");

    s.reset();
    assert_eq!(s.pain(), PainSelection::Unset);
    assert!(s.pain_alert().is_none());
    assert!(s.habit_alert().is_none());
    assert!(s.snapshot().is_empty());
}

#[test]
fn snapshot_omits_unset_and_never() {
    let mut s = session();
    s.select_numeric(level(3)).unwrap();
    s.set_relative_status(Relative::Mother, VitalStatus::Alive).unwrap();
    s.toggle_condition(Relative::Mother, FamilyCondition::Diabetes, true).unwrap();
    s.set_relative_status(Relative::Father, VitalStatus::Alive).unwrap();
    s.set_relative_notes(Relative::Father, "  hypertensive, controlled ").unwrap();
    s.set_habit(OralHabit::PoorBrushing, HabitFrequency::Never).unwrap();
    s.set_habit(OralHabit::MouthBreathing, HabitFrequency::Sometimes).unwrap();
    s.set_vital(VitalKind::Pulse, "72").unwrap();
    s.set_vital(VitalKind::Temperature, "").unwrap();
    s.set_medical_alert("   ");

    let snapshot = s.snapshot();
    assert_eq!(snapshot.pain_numeric, Some(level(3)));
    assert_eq!(snapshot.pain_faces, Some(face(2)));
    assert_eq!(snapshot.family_history.len(), 1);
    assert!(snapshot.family_history[&Relative::Mother].contains(&FamilyCondition::Diabetes));
    assert_eq!(snapshot.relative_status.len(), 2);
    assert_eq!(snapshot.relative_notes[&Relative::Father], "hypertensive, controlled");
    assert_eq!(snapshot.habits.len(), 1);
    assert_eq!(snapshot.habits[&OralHabit::MouthBreathing], HabitFrequency::Sometimes);
    assert_eq!(snapshot.vital_signs.len(), 1);
    assert_eq!(snapshot.vital_signs[&VitalKind::Pulse], "72");
    assert_eq!(snapshot.medical_alert, None);
}

#[test]
fn snapshot_is_idempotent() {
    let mut s = session();
    s.select_faces(face(6)).unwrap();
    s.set_habit(OralHabit::TongueThrust, HabitFrequency::Always).unwrap();
    s.set_vital(VitalKind::RespiratoryRate, "16").unwrap();

    let first = s.snapshot();
    let second = s.snapshot();
    assert_eq!(first, second);
    assert!(first.validate().is_ok());
}

#[test]
fn completeness_reports_missing_required_fields() {
    let s = session();
    assert_eq!(
        s.check_completeness(),
        vec![
            "A pain level must be selected".to_string(),
            "The field Pulse is required".to_string(),
            "The field Blood pressure is required".to_string(),
        ]
    );
}

#[test]
fn completeness_passes_once_filled() {
    let mut s = session();
    s.select_numeric(level(0)).unwrap();
    s.set_vital(VitalKind::Pulse, "70").unwrap();
    s.set_vital(VitalKind::BloodPressure, "118/76").unwrap();
    assert!(s.check_completeness().is_empty());
}
