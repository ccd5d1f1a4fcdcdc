use std::collections::BTreeMap;

use historial_core::models::family::{FamilyCondition, FamilyHistoryEntry, Relative, VitalStatus};
use historial_core::models::habit::{HabitFrequency, HabitRecord, OralHabit};
use historial_core::models::pain::{FaceRating, PainLevel};
use historial_core::models::vital::VitalKind;
use historial_rules::alert::{classify, PainAlert};
use historial_rules::habits::{HabitAlert, HabitHighlight};
use historial_rules::scale::to_numeric;
use historial_rules::vitals::{self, VitalVerdict};

use crate::config::FormConfig;
use crate::error::SessionError;
use crate::pain::PainSelection;

/// All mutable state of one filled-in form.
///
/// Every rule evaluation reads from and writes to this struct; nothing is
/// kept in globals. Handlers borrow it mutably, so one update cascade runs
/// at a time.
#[derive(Debug, Clone)]
pub struct FormSession {
    pub(crate) config: FormConfig,
    pub(crate) pain: PainSelection,
    pub(crate) pain_alert: Option<PainAlert>,
    pub(crate) family: BTreeMap<Relative, FamilyHistoryEntry>,
    pub(crate) habits: BTreeMap<OralHabit, HabitFrequency>,
    pub(crate) habit_alert: Option<HabitAlert>,
    pub(crate) vitals: BTreeMap<VitalKind, String>,
    pub(crate) verdicts: BTreeMap<VitalKind, VitalVerdict>,
    pub(crate) chief_complaint: Option<String>,
    pub(crate) medical_alert: Option<String>,
}

impl FormSession {
    pub fn new(config: FormConfig) -> Self {
        Self {
            config,
            pain: PainSelection::Unset,
            pain_alert: None,
            family: BTreeMap::new(),
            habits: BTreeMap::new(),
            habit_alert: None,
            vitals: BTreeMap::new(),
            verdicts: BTreeMap::new(),
            chief_complaint: None,
            medical_alert: None,
        }
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn pain(&self) -> PainSelection {
        self.pain
    }

    pub fn pain_alert(&self) -> Option<&PainAlert> {
        self.pain_alert.as_ref()
    }

    pub fn habit_alert(&self) -> Option<&HabitAlert> {
        self.habit_alert.as_ref()
    }

    pub fn family_entry(&self, relative: Relative) -> Option<&FamilyHistoryEntry> {
        self.family.get(&relative)
    }

    pub fn vital_value(&self, kind: VitalKind) -> Option<&str> {
        self.vitals.get(&kind).map(String::as_str)
    }

    pub fn verdict(&self, kind: VitalKind) -> Option<VitalVerdict> {
        self.verdicts.get(&kind).copied()
    }

    /// Every abnormal vital sign, in kind order.
    pub fn abnormal_vitals(&self) -> Vec<VitalKind> {
        self.verdicts
            .iter()
            .filter(|(_, v)| v.is_abnormal())
            .map(|(k, _)| *k)
            .collect()
    }

    /// Current habit selections, `never` included.
    pub fn habit_records(&self) -> Vec<HabitRecord> {
        self.habits
            .iter()
            .map(|(habit, frequency)| HabitRecord::new(*habit, *frequency))
            .collect()
    }

    pub fn select_numeric(&mut self, level: PainLevel) -> Result<PainAlert, SessionError> {
        if !self.config.pain.numeric {
            return Err(SessionError::FieldNotInForm("pain_numeric".to_string()));
        }
        let next = self.pain.select_numeric(level, self.config.pain.faces);
        Ok(self.apply_pain(next, level))
    }

    pub fn select_faces(&mut self, face: FaceRating) -> Result<PainAlert, SessionError> {
        if !self.config.pain.faces {
            return Err(SessionError::FieldNotInForm("pain_faces".to_string()));
        }
        let next = self.pain.select_faces(face, self.config.pain.numeric);
        Ok(self.apply_pain(next, to_numeric(face)))
    }

    /// Move to `next` and replace the previous classification.
    fn apply_pain(&mut self, next: PainSelection, authoritative: PainLevel) -> PainAlert {
        tracing::debug!(from = self.pain.name(), to = next.name(), "pain selection changed");
        self.pain = next;

        let alert = classify(authoritative);
        self.pain_alert = Some(alert.clone());
        alert
    }

    /// Set a relative's vital status. Returns whether the conditions
    /// checklist is visible afterwards.
    pub fn set_relative_status(
        &mut self,
        relative: Relative,
        status: VitalStatus,
    ) -> Result<bool, SessionError> {
        self.ensure_relative(relative)?;
        self.family
            .entry(relative)
            .and_modify(|e| e.set_status(status))
            .or_insert_with(|| FamilyHistoryEntry::new(relative, status));
        tracing::debug!(%relative, status = status.as_str(), "relative status set");
        Ok(status.is_known())
    }

    /// Check or uncheck a condition. Returns whether it was recorded; a
    /// relative with unset or unknown status has its checklist hidden.
    pub fn toggle_condition(
        &mut self,
        relative: Relative,
        condition: FamilyCondition,
        checked: bool,
    ) -> Result<bool, SessionError> {
        self.ensure_relative(relative)?;
        let recorded = self
            .family
            .get_mut(&relative)
            .is_some_and(|entry| entry.toggle(condition, checked));
        if !recorded {
            tracing::debug!(%relative, condition = condition.as_str(), "condition ignored, status not known");
        }
        Ok(recorded)
    }

    pub fn set_relative_notes(&mut self, relative: Relative, notes: &str) -> Result<(), SessionError> {
        self.ensure_relative(relative)?;
        let entry = self
            .family
            .entry(relative)
            .or_insert_with(|| FamilyHistoryEntry::new(relative, VitalStatus::Unknown));
        entry.notes = non_empty(notes);
        Ok(())
    }

    /// Record a habit frequency and re-run the risk aggregation.
    pub fn set_habit(
        &mut self,
        habit: OralHabit,
        frequency: HabitFrequency,
    ) -> Result<(HabitHighlight, Option<HabitAlert>), SessionError> {
        if !self.config.has_habit(habit) {
            return Err(SessionError::FieldNotInForm(format!("habit[{habit}]")));
        }
        self.habits.insert(habit, frequency);

        let policy = self.config.habit_risk;
        self.habit_alert = policy.alert(&self.habit_records());
        tracing::debug!(
            %habit,
            frequency = frequency.as_str(),
            flagged = self.habit_alert.as_ref().map_or(0, |a| a.habits.len()),
            "habit assessed"
        );
        Ok((policy.highlight(frequency), self.habit_alert.clone()))
    }

    /// Store a vital-sign value (after the keystroke filter) and revalidate.
    pub fn set_vital(
        &mut self,
        kind: VitalKind,
        raw: &str,
    ) -> Result<(String, Option<VitalVerdict>), SessionError> {
        if self.config.vital_field(kind).is_none() {
            return Err(SessionError::FieldNotInForm(format!("vital[{kind}]")));
        }
        let value = vitals::sanitize(kind, raw);
        let verdict = vitals::evaluate(kind, &value, &self.config.thresholds);

        match verdict {
            Some(v) => self.verdicts.insert(kind, v),
            None => self.verdicts.remove(&kind),
        };
        self.vitals.insert(kind, value.clone());

        tracing::debug!(%kind, ?verdict, "vital sign assessed");
        Ok((value, verdict))
    }

    pub fn set_chief_complaint(&mut self, text: &str) {
        self.chief_complaint = non_empty(text);
    }

    pub fn set_medical_alert(&mut self, text: &str) {
        self.medical_alert = non_empty(text);
    }

    /// Discard every selection and derived result. The config is kept.
    pub fn reset(&mut self) {
        *self = Self::new(self.config.clone());
        tracing::debug!("form session reset");
    }

    fn ensure_relative(&self, relative: Relative) -> Result<(), SessionError> {
        if self.config.has_relative(relative) {
            Ok(())
        } else {
            Err(SessionError::FieldNotInForm(format!("relative[{relative}]")))
        }
    }
}

fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
