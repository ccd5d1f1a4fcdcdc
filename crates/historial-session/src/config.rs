use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use historial_core::models::family::Relative;
use historial_core::models::habit::OralHabit;
use historial_core::models::vital::VitalKind;
use historial_rules::habits::HabitRiskPolicy;
use historial_rules::ranges::VitalThresholds;

use crate::error::SessionError;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

/// Typed description of one form, built once when a session starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    #[serde(default)]
    pub pain: PainScaleConfig,
    #[serde(default = "default_vitals")]
    pub vitals: Vec<VitalFieldConfig>,
    #[serde(default)]
    pub thresholds: VitalThresholds,
    /// Added in v1; older configs get the default policy via migration.
    pub habit_risk: HabitRiskPolicy,
    #[serde(default = "default_relatives")]
    pub relatives: Vec<Relative>,
    #[serde(default = "default_habits")]
    pub habits: Vec<OralHabit>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PainScaleConfig {
    /// The 0–10 number row is rendered.
    pub numeric: bool,
    /// The faces row is rendered.
    pub faces: bool,
    pub required: bool,
}

impl Default for PainScaleConfig {
    fn default() -> Self {
        Self {
            numeric: true,
            faces: true,
            required: true,
        }
    }
}

impl PainScaleConfig {
    pub fn rendered(&self) -> bool {
        self.numeric || self.faces
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VitalFieldConfig {
    pub kind: VitalKind,
    pub label: String,
    #[serde(default)]
    pub required: bool,
}

impl VitalFieldConfig {
    pub fn new(kind: VitalKind, required: bool) -> Self {
        Self {
            kind,
            label: kind.label().to_string(),
            required,
        }
    }
}

fn default_vitals() -> Vec<VitalFieldConfig> {
    vec![
        VitalFieldConfig::new(VitalKind::Pulse, true),
        VitalFieldConfig::new(VitalKind::BloodPressure, true),
        VitalFieldConfig::new(VitalKind::Temperature, false),
        VitalFieldConfig::new(VitalKind::RespiratoryRate, false),
    ]
}

fn default_relatives() -> Vec<Relative> {
    Relative::ALL.to_vec()
}

fn default_habits() -> Vec<OralHabit> {
    OralHabit::ALL.to_vec()
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            pain: PainScaleConfig::default(),
            vitals: default_vitals(),
            thresholds: VitalThresholds::default(),
            habit_risk: HabitRiskPolicy::default(),
            relatives: default_relatives(),
            habits: default_habits(),
        }
    }
}

impl FormConfig {
    pub fn vital_field(&self, kind: VitalKind) -> Option<&VitalFieldConfig> {
        self.vitals.iter().find(|v| v.kind == kind)
    }

    pub fn has_relative(&self, relative: Relative) -> bool {
        self.relatives.contains(&relative)
    }

    pub fn has_habit(&self, habit: OralHabit) -> bool {
        self.habits.contains(&habit)
    }

    pub fn validate(&self) -> Result<(), SessionError> {
        self.thresholds.validate()?;

        for (i, field) in self.vitals.iter().enumerate() {
            if self.vitals[..i].iter().any(|v| v.kind == field.kind) {
                return Err(SessionError::InvalidConfig(format!(
                    "vital sign {} is listed more than once",
                    field.kind
                )));
            }
        }

        if self.pain.required && !self.pain.rendered() {
            return Err(SessionError::InvalidConfig(
                "pain is required but neither pain scale is rendered".to_string(),
            ));
        }

        Ok(())
    }
}

/// `<config dir>/historial/form.json`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join("historial").join("form.json"))
}

pub fn load_config(path: &Path) -> Result<FormConfig, SessionError> {
    let contents = std::fs::read_to_string(path).map_err(|source| SessionError::ConfigIo {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&contents)
}

/// Parse config JSON, migrating older versions before deserializing.
pub fn parse_config(contents: &str) -> Result<FormConfig, SessionError> {
    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: FormConfig = serde_json::from_value(migrated)?;
    config.validate()?;
    Ok(config)
}

/// Load from `explicit` if given, else from the default location if a file
/// exists there, else fall back to the built-in form.
pub fn load_or_default(explicit: Option<&Path>) -> Result<FormConfig, SessionError> {
    if let Some(path) = explicit {
        return load_config(path);
    }
    match default_config_path() {
        Some(path) if path.exists() => load_config(&path),
        _ => {
            tracing::debug!("no form config found, using built-in form");
            Ok(FormConfig::default())
        }
    }
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(
    mut json: serde_json::Value,
    from_version: u32,
) -> Result<serde_json::Value, SessionError> {
    if from_version > CURRENT_VERSION {
        return Err(SessionError::UnsupportedConfigVersion {
            found: from_version,
            supported: CURRENT_VERSION,
        });
    }

    // v0 → v1: add habit_risk with the default threshold
    if from_version < 1 {
        let default_policy = serde_json::to_value(HabitRiskPolicy::default())?;
        let obj = json
            .as_object_mut()
            .ok_or_else(|| SessionError::InvalidConfig("config is not a JSON object".to_string()))?;
        obj.entry("habit_risk").or_insert(default_policy);
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated form config v0 → v1 (added habit_risk)");
    }

    Ok(json)
}

pub fn save_config(path: &Path, config: &FormConfig) -> Result<(), SessionError> {
    let io_err = |source| SessionError::ConfigIo {
        path: path.to_path_buf(),
        source,
    };

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(io_err)?;
    }

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;
    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes()).map_err(io_err)?;
    std::fs::rename(&tmp_path, path).map_err(io_err)?;

    tracing::info!(path = %path.display(), "form config saved");
    Ok(())
}
