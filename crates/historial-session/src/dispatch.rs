use std::collections::{HashMap, VecDeque};

use serde::Serialize;

use historial_core::models::family::{FamilyCondition, Relative, VitalStatus};
use historial_core::models::habit::{HabitFrequency, OralHabit};
use historial_core::models::pain::{FaceRating, PainLevel};
use historial_core::models::vital::VitalKind;
use historial_rules::alert::PainAlert;
use historial_rules::habits::{HabitAlert, HabitHighlight};
use historial_rules::vitals::VitalVerdict;

use crate::config::FormConfig;
use crate::error::SessionError;
use crate::field::{FieldChange, FieldId, FieldKind, FieldValue};
use crate::pain::PainSelection;
use crate::session::FormSession;

/// What the UI layer should show after a field change.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "reaction", rename_all = "snake_case")]
pub enum Reaction {
    PainUpdated {
        selection: PainSelection,
        alert: PainAlert,
    },
    FamilySectionToggled {
        relative: Relative,
        visible: bool,
    },
    ConditionRecorded {
        relative: Relative,
        condition: FamilyCondition,
        checked: bool,
    },
    ConditionIgnored {
        relative: Relative,
        condition: FamilyCondition,
    },
    HabitAssessed {
        habit: OralHabit,
        frequency: HabitFrequency,
        highlight: HabitHighlight,
        alert: Option<HabitAlert>,
    },
    VitalAssessed {
        kind: VitalKind,
        value: String,
        verdict: Option<VitalVerdict>,
    },
    TextRecorded {
        field: FieldKind,
    },
}

pub type Handler = fn(&mut FormSession, &FieldId, &FieldValue) -> Result<Reaction, SessionError>;

/// Maps each kind of field to the handler that reacts to it.
pub struct DispatchTable {
    handlers: HashMap<FieldKind, Handler>,
}

impl Default for DispatchTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl DispatchTable {
    pub fn empty() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// A table with a handler for every field kind.
    pub fn standard() -> Self {
        let mut table = Self::empty();
        table.register(FieldKind::PainNumeric, on_pain_numeric);
        table.register(FieldKind::PainFaces, on_pain_faces);
        table.register(FieldKind::RelativeStatus, on_relative_status);
        table.register(FieldKind::FamilyCondition, on_condition);
        table.register(FieldKind::RelativeNotes, on_relative_notes);
        table.register(FieldKind::Habit, on_habit);
        table.register(FieldKind::Vital, on_vital);
        table.register(FieldKind::ChiefComplaint, on_free_text);
        table.register(FieldKind::MedicalAlert, on_free_text);
        table
    }

    /// Register `handler` for `kind`, returning the handler it replaces.
    pub fn register(&mut self, kind: FieldKind, handler: Handler) -> Option<Handler> {
        self.handlers.insert(kind, handler)
    }

    pub fn handles(&self, kind: FieldKind) -> bool {
        self.handlers.contains_key(&kind)
    }

    pub fn dispatch(
        &self,
        session: &mut FormSession,
        change: &FieldChange,
    ) -> Result<Reaction, SessionError> {
        let kind = change.field.kind();
        let handler = self
            .handlers
            .get(&kind)
            .ok_or(SessionError::UnhandledField(kind))?;
        handler(session, &change.field, &change.value)
    }
}

fn on_pain_numeric(
    session: &mut FormSession,
    field: &FieldId,
    value: &FieldValue,
) -> Result<Reaction, SessionError> {
    let level: PainLevel = value
        .as_text(field)?
        .parse()
        .map_err(|_| value.invalid_for(field))?;
    let alert = session.select_numeric(level)?;
    Ok(Reaction::PainUpdated {
        selection: session.pain(),
        alert,
    })
}

fn on_pain_faces(
    session: &mut FormSession,
    field: &FieldId,
    value: &FieldValue,
) -> Result<Reaction, SessionError> {
    let face: FaceRating = value
        .as_text(field)?
        .parse()
        .map_err(|_| value.invalid_for(field))?;
    let alert = session.select_faces(face)?;
    Ok(Reaction::PainUpdated {
        selection: session.pain(),
        alert,
    })
}

fn on_relative_status(
    session: &mut FormSession,
    field: &FieldId,
    value: &FieldValue,
) -> Result<Reaction, SessionError> {
    let FieldId::RelativeStatus { relative } = *field else {
        return Err(value.invalid_for(field));
    };
    let status: VitalStatus = value
        .as_text(field)?
        .parse()
        .map_err(|_| value.invalid_for(field))?;
    let visible = session.set_relative_status(relative, status)?;
    Ok(Reaction::FamilySectionToggled { relative, visible })
}

fn on_condition(
    session: &mut FormSession,
    field: &FieldId,
    value: &FieldValue,
) -> Result<Reaction, SessionError> {
    let FieldId::FamilyCondition {
        relative,
        condition,
    } = *field
    else {
        return Err(value.invalid_for(field));
    };
    let checked = value.as_checked(field)?;
    if session.toggle_condition(relative, condition, checked)? {
        Ok(Reaction::ConditionRecorded {
            relative,
            condition,
            checked,
        })
    } else {
        Ok(Reaction::ConditionIgnored {
            relative,
            condition,
        })
    }
}

fn on_relative_notes(
    session: &mut FormSession,
    field: &FieldId,
    value: &FieldValue,
) -> Result<Reaction, SessionError> {
    let FieldId::RelativeNotes { relative } = *field else {
        return Err(value.invalid_for(field));
    };
    session.set_relative_notes(relative, value.as_text(field)?)?;
    Ok(Reaction::TextRecorded {
        field: field.kind(),
    })
}

fn on_habit(
    session: &mut FormSession,
    field: &FieldId,
    value: &FieldValue,
) -> Result<Reaction, SessionError> {
    let FieldId::Habit { habit } = *field else {
        return Err(value.invalid_for(field));
    };
    let text = value.as_text(field)?.trim();
    // The select's blank placeholder counts as "never".
    let frequency = if text.is_empty() {
        HabitFrequency::Never
    } else {
        text.parse().map_err(|_| value.invalid_for(field))?
    };
    let (highlight, alert) = session.set_habit(habit, frequency)?;
    Ok(Reaction::HabitAssessed {
        habit,
        frequency,
        highlight,
        alert,
    })
}

fn on_vital(
    session: &mut FormSession,
    field: &FieldId,
    value: &FieldValue,
) -> Result<Reaction, SessionError> {
    let FieldId::Vital { kind } = *field else {
        return Err(value.invalid_for(field));
    };
    let (value, verdict) = session.set_vital(kind, value.as_text(field)?)?;
    Ok(Reaction::VitalAssessed {
        kind,
        value,
        verdict,
    })
}

fn on_free_text(
    session: &mut FormSession,
    field: &FieldId,
    value: &FieldValue,
) -> Result<Reaction, SessionError> {
    let text = value.as_text(field)?;
    match field {
        FieldId::ChiefComplaint => session.set_chief_complaint(text),
        FieldId::MedicalAlert => session.set_medical_alert(text),
        _ => return Err(value.invalid_for(field)),
    }
    Ok(Reaction::TextRecorded {
        field: field.kind(),
    })
}

/// Capability to deliver "user changed field X" events, owned by the UI
/// layer. Events are handled one at a time, in order.
pub trait FieldEventSource {
    fn next_change(&mut self) -> Option<FieldChange>;
}

/// First-in, first-out queue of pending field changes.
#[derive(Debug, Clone, Default)]
pub struct QueuedEvents {
    queue: VecDeque<FieldChange>,
}

impl QueuedEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, change: FieldChange) {
        self.queue.push_back(change);
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl FromIterator<FieldChange> for QueuedEvents {
    fn from_iter<I: IntoIterator<Item = FieldChange>>(iter: I) -> Self {
        Self {
            queue: iter.into_iter().collect(),
        }
    }
}

impl FieldEventSource for QueuedEvents {
    fn next_change(&mut self) -> Option<FieldChange> {
        self.queue.pop_front()
    }
}

/// Binds one form session to a dispatch table.
pub struct FormController {
    session: FormSession,
    table: DispatchTable,
}

impl FormController {
    pub fn new(config: FormConfig) -> Self {
        Self::with_table(FormSession::new(config), DispatchTable::standard())
    }

    pub fn with_table(session: FormSession, table: DispatchTable) -> Self {
        Self { session, table }
    }

    pub fn session(&self) -> &FormSession {
        &self.session
    }

    pub fn into_session(self) -> FormSession {
        self.session
    }

    /// Handle one change. On error the session is left as it was.
    pub fn handle(&mut self, change: &FieldChange) -> Result<Reaction, SessionError> {
        self.table.dispatch(&mut self.session, change)
    }

    /// Drain `source`, stopping at the first change that fails.
    pub fn run(&mut self, source: &mut dyn FieldEventSource) -> Result<Vec<Reaction>, SessionError> {
        let mut reactions = Vec::new();
        while let Some(change) = source.next_change() {
            match self.handle(&change) {
                Ok(reaction) => reactions.push(reaction),
                Err(e) => {
                    tracing::warn!(field = %change.field, error = %e, "field change rejected");
                    return Err(e);
                }
            }
        }
        tracing::info!(handled = reactions.len(), "field events drained");
        Ok(reactions)
    }

    pub fn reset(&mut self) {
        self.session.reset();
    }
}
