use std::collections::BTreeSet;

use serde::Serialize;
use tera::{Context, Tera};

use historial_core::models::family::Relative;
use historial_core::models::snapshot::ClinicalRecordSnapshot;
use historial_core::models::vital::VitalKind;

use crate::error::ExportError;

pub const NOT_EVALUATED: &str = "Not evaluated";
pub const NOT_RECORDED: &str = "Not recorded";
pub const NO_FAMILY_HISTORY: &str = "No significant family history reported.";
pub const NO_ORAL_HABITS: &str = "No problematic oral habits reported.";

const SUMMARY_TEMPLATE_NAME: &str = "summary.txt";

const SUMMARY_TEMPLATE: &str = "\
CHIEF COMPLAINT: {{ chief_complaint }}

PAIN SCALES:
- Numeric scale: {{ pain_numeric }}
- Faces scale: {{ pain_faces }}

VITAL SIGNS:
{% for vital in vitals %}- {{ vital.label }}: {{ vital.value }}
{% endfor %}
FAMILY HISTORY:
{% if family | length > 0 %}{% for line in family %}- {{ line }}
{% endfor %}{% else %}{{ no_family_history }}
{% endif %}
ORAL HABITS:
{% if habits | length > 0 %}{% for line in habits %}- {{ line }}
{% endfor %}{% else %}{{ no_oral_habits }}
{% endif %}
MEDICAL ALERT: {{ medical_alert }}
";

#[derive(Debug, Serialize)]
struct VitalLine {
    label: &'static str,
    value: String,
}

/// Flattened, display-ready view of a snapshot. Every field has a value so
/// templates never need to test for presence.
#[derive(Debug, Serialize)]
struct SummaryContext {
    pain_numeric: String,
    pain_faces: String,
    vitals: Vec<VitalLine>,
    family: Vec<String>,
    habits: Vec<String>,
    chief_complaint: String,
    medical_alert: String,
    no_family_history: &'static str,
    no_oral_habits: &'static str,
}

impl SummaryContext {
    fn from_snapshot(snapshot: &ClinicalRecordSnapshot) -> Self {
        let pain_numeric = snapshot
            .pain_numeric
            .map(|level| format!("{level}/10"))
            .unwrap_or_else(|| NOT_EVALUATED.to_string());
        let pain_faces = snapshot
            .pain_faces
            .map(|face| format!("{face} ({})", face.label()))
            .unwrap_or_else(|| NOT_EVALUATED.to_string());

        let vitals = VitalKind::ALL
            .iter()
            .map(|kind| VitalLine {
                label: kind.label(),
                value: snapshot
                    .vital_signs
                    .get(kind)
                    .map(|v| format!("{v} {}", kind.unit()))
                    .unwrap_or_else(|| NOT_RECORDED.to_string()),
            })
            .collect();

        let habits = snapshot
            .habits
            .iter()
            .map(|(habit, frequency)| format!("{}: {}", habit.label(), frequency.label()))
            .collect();

        Self {
            pain_numeric,
            pain_faces,
            vitals,
            family: family_lines(snapshot),
            habits,
            chief_complaint: text_or(&snapshot.chief_complaint, "Not specified"),
            medical_alert: text_or(&snapshot.medical_alert, "None reported"),
            no_family_history: NO_FAMILY_HISTORY,
            no_oral_habits: NO_ORAL_HABITS,
        }
    }
}

fn text_or(value: &Option<String>, fallback: &str) -> String {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(fallback)
        .to_string()
}

/// One line per relative mentioned anywhere in the snapshot, in form order.
fn family_lines(snapshot: &ClinicalRecordSnapshot) -> Vec<String> {
    let mentioned: BTreeSet<Relative> = snapshot
        .relative_status
        .keys()
        .chain(snapshot.family_history.keys())
        .chain(snapshot.relative_notes.keys())
        .copied()
        .collect();

    mentioned
        .into_iter()
        .map(|relative| {
            let status = snapshot
                .relative_status
                .get(&relative)
                .map(|s| s.label())
                .unwrap_or(NOT_RECORDED);
            let mut line = format!("{}: {status}", relative.label());

            if let Some(conditions) = snapshot.family_history.get(&relative) {
                let labels: Vec<&str> = conditions.iter().map(|c| c.label()).collect();
                if !labels.is_empty() {
                    line.push_str(" | Conditions: ");
                    line.push_str(&labels.join(", "));
                }
            }
            if let Some(notes) = snapshot.relative_notes.get(&relative) {
                line.push_str(" | Notes: ");
                line.push_str(notes);
            }
            line
        })
        .collect()
}

/// Render the built-in clinical history entry for a snapshot.
pub fn render_summary(snapshot: &ClinicalRecordSnapshot) -> Result<String, ExportError> {
    render_with_template(SUMMARY_TEMPLATE_NAME, SUMMARY_TEMPLATE, snapshot)
}

/// Render a Tera template against a snapshot.
///
/// The template sees `pain_numeric`, `pain_faces`, `vitals` (a list of
/// `label`/`value` pairs), `family` and `habits` (lists of lines),
/// `chief_complaint` and `medical_alert`. Absent values are already
/// replaced with their fallback text.
pub fn render_with_template(
    template_name: &str,
    template_content: &str,
    snapshot: &ClinicalRecordSnapshot,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(SummaryContext::from_snapshot(snapshot))?;
    let context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    tracing::debug!(template = template_name, bytes = rendered.len(), "summary rendered");
    Ok(rendered)
}
