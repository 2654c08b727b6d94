//! The application form: every field of every step, plus the focus cursor

use super::field::{FieldKind, FormField};
use super::mask::InputMask;
use crate::state::session::TOTAL_STEPS;
use crate::submission::{SubmissionPayload, SubmittedValue};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        if count == 0 {
            return;
        }
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        if count == 0 {
            return;
        }
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

const FUNDING_AMOUNTS: &[&str] = &[
    "",
    "$10,000 - $25,000",
    "$25,000 - $50,000",
    "$50,000 - $100,000",
    "$100,000 - $250,000",
    "$250,000+",
];

const FUNDING_PURPOSES: &[&str] = &[
    "",
    "Working Capital",
    "Equipment",
    "Inventory",
    "Expansion",
    "Payroll",
    "Other",
];

const STATES: &[&str] = &[
    "", "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
    "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ", "NM",
    "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT", "VA", "WA",
    "WV", "WI", "WY",
];

const INDUSTRIES: &[&str] = &[
    "",
    "Retail",
    "Restaurant / Food Service",
    "Construction",
    "Healthcare",
    "Transportation",
    "Professional Services",
    "Manufacturing",
    "Other",
];

const MONTHLY_REVENUE: &[&str] = &[
    "",
    "Under $10,000",
    "$10,000 - $25,000",
    "$25,000 - $50,000",
    "$50,000 - $100,000",
    "$100,000+",
];

/// Build the field catalogue for all five steps
fn catalogue() -> Vec<FormField> {
    vec![
        // Step 1: Basic Information
        FormField::text(1, "first_name", "First Name").required(),
        FormField::text(1, "last_name", "Last Name").required(),
        FormField::text(1, "email", "Email").required(),
        FormField::masked(1, "phone", "Phone", InputMask::Phone).required(),
        FormField::select(1, "funding_amount", "Funding Amount", FUNDING_AMOUNTS).required(),
        FormField::select(1, "funding_purpose", "Use of Funds", FUNDING_PURPOSES),
        // Step 2: Business Information
        FormField::text(2, "business_name", "Legal Business Name").required(),
        FormField::text(2, "dba_name", "DBA (optional)"),
        FormField::masked(2, "tax_id", "Federal Tax ID (EIN)", InputMask::TaxId).required(),
        FormField::masked(2, "business_phone", "Business Phone", InputMask::Phone).required(),
        FormField::text(2, "business_address", "Business Address").required(),
        FormField::text(2, "business_city", "City").required(),
        FormField::select(2, "business_state", "State", STATES).required(),
        FormField::masked(2, "business_zip", "ZIP", InputMask::PostalCode).required(),
        FormField::select(2, "industry", "Industry", INDUSTRIES).required(),
        FormField::radio(2, "entity_type", "LLC").required(),
        FormField::radio(2, "entity_type", "Corporation").required(),
        FormField::radio(2, "entity_type", "Sole Proprietorship").required(),
        FormField::radio(2, "entity_type", "Partnership").required(),
        // Step 3: Owner Information
        FormField::text(3, "owner_name", "Owner Full Name").required(),
        FormField::masked(3, "ssn", "SSN", InputMask::NationalId).required(),
        FormField::text(3, "date_of_birth", "Date of Birth (MM/DD/YYYY)").required(),
        FormField::text(3, "ownership_percent", "Ownership %").required(),
        FormField::text(3, "home_address", "Home Address").required(),
        FormField::text(3, "home_city", "City").required(),
        FormField::select(3, "home_state", "State", STATES).required(),
        FormField::masked(3, "home_zip", "ZIP", InputMask::PostalCode).required(),
        FormField::radio(3, "credit_score", "Excellent (720+)").required(),
        FormField::radio(3, "credit_score", "Good (680-719)").required(),
        FormField::radio(3, "credit_score", "Fair (620-679)").required(),
        FormField::radio(3, "credit_score", "Poor (below 620)").required(),
        // Step 4: Acknowledge & Agree
        FormField::checkbox(4, "agree_terms", "I agree to the Terms & Conditions").required(),
        FormField::checkbox(
            4,
            "agree_credit_check",
            "I authorize a soft credit inquiry",
        )
        .required(),
        FormField::checkbox(4, "agree_contact", "Contact me about other offers"),
        FormField::text(4, "signature", "Signature (type full name)").required(),
        // Step 5: Bank Activity
        FormField::file(5, "statement_1", "Bank Statement (most recent month)").required(),
        FormField::file(5, "statement_2", "Bank Statement (previous month)").required(),
        FormField::file(5, "statement_3", "Bank Statement (two months ago)").required(),
        FormField::select(5, "monthly_revenue", "Average Monthly Revenue", MONTHLY_REVENUE)
            .required(),
    ]
}

/// All collected values of the application, one section per step.
///
/// Focus moves only within `focus_step`; the controller decides which step
/// that is.
#[derive(Debug, Clone)]
pub struct ApplicationForm {
    fields: Vec<FormField>,
    focus_step: usize,
    active_field_index: usize,
}

impl ApplicationForm {
    pub fn new() -> Self {
        Self::with_fields(catalogue())
    }

    /// Build a form from an arbitrary field list
    #[allow(dead_code)]
    pub fn with_fields(fields: Vec<FormField>) -> Self {
        Self {
            fields,
            focus_step: 1,
            active_field_index: 0,
        }
    }

    #[allow(dead_code)]
    pub fn focus_step(&self) -> usize {
        self.focus_step
    }

    /// Move focus to another step section, starting at its first field
    pub fn set_focus_step(&mut self, step: usize) {
        let step = step.clamp(1, TOTAL_STEPS);
        if step != self.focus_step {
            self.focus_step = step;
            self.active_field_index = 0;
        }
    }

    /// Fields belonging to one step section
    pub fn fields_for_step(&self, step: usize) -> impl Iterator<Item = &FormField> {
        self.fields.iter().filter(move |f| f.step == step)
    }

    #[allow(dead_code)]
    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    /// Index into `fields` of the n-th field of the focused step
    fn absolute_index(&self, index: usize) -> Option<usize> {
        self.fields
            .iter()
            .enumerate()
            .filter(|(_, f)| f.step == self.focus_step)
            .nth(index)
            .map(|(i, _)| i)
    }

    /// Toggle the active checkbox, or select the active radio and clear the
    /// rest of its group
    pub fn toggle_active(&mut self) {
        let Some(abs) = self.absolute_index(self.active_field_index) else {
            return;
        };
        let (kind, checked) = {
            let field = &self.fields[abs];
            (field.kind.clone(), field.is_checked())
        };
        match kind {
            FieldKind::Checkbox => self.fields[abs].set_checked(!checked),
            FieldKind::Radio { group, .. } => {
                for (i, field) in self.fields.iter_mut().enumerate() {
                    if field.radio_group() == Some(group) {
                        field.set_checked(i == abs);
                    }
                }
            }
            _ => {}
        }
    }

    /// Gather every field into the submission shape.
    ///
    /// Radio groups collapse to one entry keyed by group name; files are
    /// referenced by name and size only. Unchecked groups and empty file
    /// slots are left out.
    pub fn collect_payload(&self) -> SubmissionPayload {
        let mut payload = SubmissionPayload::default();
        for field in &self.fields {
            match &field.kind {
                FieldKind::Text { .. } | FieldKind::Select { .. } => {
                    payload.insert(&field.name, SubmittedValue::Text(field.as_text().to_string()));
                }
                FieldKind::Checkbox => {
                    payload.insert(&field.name, SubmittedValue::Flag(field.is_checked()));
                }
                FieldKind::Radio { group, value } => {
                    if field.is_checked() {
                        payload.insert(*group, SubmittedValue::Text(value.to_string()));
                    }
                }
                FieldKind::File => {
                    if let Some(pick) = field.file_pick() {
                        payload.insert(
                            &field.name,
                            SubmittedValue::File {
                                file_name: pick.file_name.clone(),
                                size_bytes: pick.size_bytes,
                            },
                        );
                    }
                }
            }
        }
        payload
    }
}

impl Default for ApplicationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ApplicationForm {
    fn field_count(&self) -> usize {
        self.fields_for_step(self.focus_step).count()
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.field_count().saturating_sub(1));
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        let abs = self.absolute_index(self.active_field_index)?;
        self.fields.get_mut(abs)
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        self.fields_for_step(self.focus_step).nth(index)
    }
}
