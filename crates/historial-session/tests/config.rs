use historial_core::models::habit::HabitFrequency;
use historial_core::models::vital::VitalKind;
use historial_rules::habits::HabitRiskPolicy;
use historial_session::config::{load_config, parse_config, save_config, VitalFieldConfig};
use historial_session::{FormConfig, SessionError};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn default_config_matches_the_standard_form() {
    let config = FormConfig::default();
    assert!(config.pain.numeric && config.pain.faces && config.pain.required);
    assert_eq!(config.vitals.len(), 4);
    assert!(config.vital_field(VitalKind::Pulse).unwrap().required);
    assert!(!config.vital_field(VitalKind::Temperature).unwrap().required);
    assert_eq!(config.relatives.len(), 6);
    assert_eq!(config.habits.len(), 6);
    assert!(config.validate().is_ok());
}

#[test]
fn pre_versioned_config_is_migrated() {
    let config = parse_config(r#"{ "relatives": ["father", "mother"] }"#).unwrap();
    assert_eq!(config.config_version, 1);
    assert_eq!(config.habit_risk, HabitRiskPolicy::default());
    assert_eq!(config.relatives.len(), 2);
    assert_eq!(config.vitals.len(), 4);
}

#[test]
fn migration_keeps_an_existing_policy() {
    let config = parse_config(r#"{ "habit_risk": { "threshold": "always" } }"#).unwrap();
    assert_eq!(config.habit_risk.threshold, HabitFrequency::Always);
}

#[test]
fn future_version_is_rejected() {
    let err = parse_config(r#"{ "config_version": 7 }"#).unwrap_err();
    assert!(matches!(
        err,
        SessionError::UnsupportedConfigVersion {
            found: 7,
            supported: 1
        }
    ));
}

#[test]
fn v1_config_requires_habit_risk() {
    let err = parse_config(r#"{ "config_version": 1 }"#).unwrap_err();
    assert!(matches!(err, SessionError::Serialization(_)));
}

#[test]
fn non_object_config_is_rejected() {
    let err = parse_config("[1, 2, 3]").unwrap_err();
    assert!(matches!(err, SessionError::InvalidConfig(_)));
}

#[test]
fn inverted_threshold_fails_validation() {
    let json = r#"{
        "config_version": 1,
        "habit_risk": { "threshold": "frequently" },
        "thresholds": { "pulse": { "min": 100.0, "max": 60.0 } }
    }"#;
    let err = parse_config(json).unwrap_err();
    assert!(matches!(err, SessionError::Rules(_)));
}

#[test]
fn duplicate_vital_field_fails_validation() {
    let mut config = FormConfig::default();
    config.vitals.push(VitalFieldConfig::new(VitalKind::Pulse, false));
    assert!(matches!(config.validate(), Err(SessionError::InvalidConfig(_))));
}

#[test]
fn required_pain_without_a_scale_fails_validation() {
    let mut config = FormConfig::default();
    config.pain.numeric = false;
    config.pain.faces = false;
    assert!(config.validate().is_err());
}

#[test]
fn save_then_load_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("form.json");

    let mut config = FormConfig::default();
    config.pain.faces = false;
    config.thresholds.pulse.max = 110.0;
    save_config(&path, &config).unwrap();

    let loaded = load_config(&path).unwrap();
    assert_eq!(loaded, config);
    assert!(!path.with_extension("json.tmp").exists());
}

#[test]
fn missing_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");
    let err = load_config(&path).unwrap_err();
    assert!(matches!(err, SessionError::ConfigIo { .. }));
    assert!(err.to_string().contains("absent.json"));
}
