use historial_core::models::habit::HabitFrequency;
use historial_core::models::snapshot::ClinicalRecordSnapshot;

use crate::session::FormSession;

impl FormSession {
    /// Collect the current selections into a snapshot. Reads only.
    ///
    /// Family history covers relatives with a known status; conditions are
    /// listed only when at least one is checked. Habits at `never` and
    /// vital signs left blank are omitted.
    pub fn snapshot(&self) -> ClinicalRecordSnapshot {
        let mut snapshot = ClinicalRecordSnapshot {
            pain_numeric: self.pain.numeric(),
            pain_faces: self.pain.faces(),
            chief_complaint: self.chief_complaint.clone(),
            medical_alert: self.medical_alert.clone(),
            ..Default::default()
        };

        for (relative, entry) in &self.family {
            if !entry.status.is_known() {
                continue;
            }
            snapshot.relative_status.insert(*relative, entry.status);
            if !entry.conditions.is_empty() {
                snapshot
                    .family_history
                    .insert(*relative, entry.conditions.clone());
            }
            if let Some(notes) = &entry.notes {
                snapshot.relative_notes.insert(*relative, notes.clone());
            }
        }

        snapshot.habits = self
            .habits
            .iter()
            .filter(|(_, frequency)| **frequency != HabitFrequency::Never)
            .map(|(habit, frequency)| (*habit, *frequency))
            .collect();

        snapshot.vital_signs = self
            .vitals
            .iter()
            .filter_map(|(kind, value)| {
                let trimmed = value.trim();
                (!trimmed.is_empty()).then(|| (*kind, trimmed.to_string()))
            })
            .collect();

        snapshot
    }

    /// Human-readable list of what is still missing before submission.
    /// Empty when the form is complete.
    pub fn check_completeness(&self) -> Vec<String> {
        let mut errors = Vec::new();

        let pain = &self.config.pain;
        if pain.rendered() && pain.required && !self.pain.is_set() {
            errors.push("A pain level must be selected".to_string());
        }

        for field in self.config.vitals.iter().filter(|f| f.required) {
            let filled = self
                .vitals
                .get(&field.kind)
                .is_some_and(|v| !v.trim().is_empty());
            if !filled {
                errors.push(format!("The field {} is required", field.label));
            }
        }

        errors
    }
}
