//! Required-field checks for one step section

use super::field::FieldKind;
use super::form_state::ApplicationForm;
use crate::error::FormError;

/// Outcome of checking one step.
///
/// Every field is looked at, so `failures` lists all problems and
/// `markers` carries the error-marker state for every text, select and file
/// input of the step (true = flag it).
#[derive(Debug, Default)]
pub struct StepReport {
    pub failures: Vec<FormError>,
    pub markers: Vec<(String, bool)>,
}

impl StepReport {
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    /// Names of the fields that should carry the error marker
    #[allow(dead_code)]
    pub fn flagged(&self) -> impl Iterator<Item = &str> {
        self.markers
            .iter()
            .filter(|(_, invalid)| *invalid)
            .map(|(name, _)| name.as_str())
    }
}

/// Check every required field that belongs to `step`
pub fn validate_step(form: &ApplicationForm, step: usize) -> StepReport {
    let mut report = StepReport::default();
    let mut radio_groups: Vec<&'static str> = Vec::new();

    for field in form.fields_for_step(step) {
        match &field.kind {
            FieldKind::Text { .. } | FieldKind::Select { .. } | FieldKind::File => {
                if !field.required {
                    continue;
                }
                let blank = field.is_blank();
                if blank {
                    report.failures.push(FormError::RequiredFieldEmpty {
                        field: field.label.clone(),
                    });
                }
                report.markers.push((field.name.clone(), blank));
            }
            FieldKind::Checkbox => {
                if field.required && !field.is_checked() {
                    report.failures.push(FormError::RequiredCheckboxUnchecked {
                        field: field.label.clone(),
                    });
                }
            }
            FieldKind::Radio { group, .. } => {
                if field.required && !radio_groups.contains(group) {
                    radio_groups.push(*group);
                }
            }
        }
    }

    // Any member of the group counts, required or not.
    for group in radio_groups {
        let any_checked = form
            .fields_for_step(step)
            .filter(|f| f.radio_group() == Some(group))
            .any(|f| f.is_checked());
        if !any_checked {
            report.failures.push(FormError::RequiredRadioUnselected {
                group: group.replace('_', " "),
            });
        }
    }

    tracing::debug!(
        "Validated step {step}: {} failure(s)",
        report.failures.len()
    );
    report
}
