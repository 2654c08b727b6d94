//! Form field value objects

use super::file_pick::{FilePick, FileSlot};
use super::mask::InputMask;

/// What kind of input a field is
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text, optionally masked
    Text { mask: Option<InputMask> },
    /// Fixed option list; the first option is the empty placeholder
    Select { options: &'static [&'static str] },
    Checkbox,
    /// One member of a radio group
    Radio {
        group: &'static str,
        value: &'static str,
    },
    File,
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// Index into the select's options
    Choice(usize),
    Checked(bool),
    File(FileSlot),
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    /// Step section this field belongs to (1-based)
    pub step: usize,
    pub required: bool,
    pub kind: FieldKind,
    pub value: FieldValue,
}

impl FormField {
    fn new(step: usize, name: &str, label: &str, kind: FieldKind, value: FieldValue) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            step,
            required: false,
            kind,
            value,
        }
    }

    /// Create a new text field
    pub fn text(step: usize, name: &str, label: &str) -> Self {
        Self::new(
            step,
            name,
            label,
            FieldKind::Text { mask: None },
            FieldValue::Text(String::new()),
        )
    }

    /// Create a new text field that reformats its value on every edit
    pub fn masked(step: usize, name: &str, label: &str, mask: InputMask) -> Self {
        Self::new(
            step,
            name,
            label,
            FieldKind::Text { mask: Some(mask) },
            FieldValue::Text(String::new()),
        )
    }

    /// Create a new select field
    pub fn select(step: usize, name: &str, label: &str, options: &'static [&'static str]) -> Self {
        Self::new(
            step,
            name,
            label,
            FieldKind::Select { options },
            FieldValue::Choice(0),
        )
    }

    /// Create a new checkbox
    pub fn checkbox(step: usize, name: &str, label: &str) -> Self {
        Self::new(
            step,
            name,
            label,
            FieldKind::Checkbox,
            FieldValue::Checked(false),
        )
    }

    /// Create one radio button of `group`
    pub fn radio(step: usize, group: &'static str, value: &'static str) -> Self {
        let name = format!("{group}:{value}");
        Self::new(
            step,
            &name,
            value,
            FieldKind::Radio { group, value },
            FieldValue::Checked(false),
        )
    }

    /// Create a new file input
    pub fn file(step: usize, name: &str, label: &str) -> Self {
        Self::new(
            step,
            name,
            label,
            FieldKind::File,
            FieldValue::File(FileSlot::default()),
        )
    }

    /// Mark the field as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// The value as text: typed text, the chosen option, or the chosen file
    /// name. Checkboxes and radios have no text.
    pub fn as_text(&self) -> &str {
        match (&self.kind, &self.value) {
            (_, FieldValue::Text(s)) => s.as_str(),
            (FieldKind::Select { options }, FieldValue::Choice(i)) => {
                options.get(*i).copied().unwrap_or("")
            }
            (_, FieldValue::File(slot)) => slot.pick().map(|p| p.file_name.as_str()).unwrap_or(""),
            _ => "",
        }
    }

    pub fn is_checked(&self) -> bool {
        matches!(self.value, FieldValue::Checked(true))
    }

    pub fn set_checked(&mut self, checked: bool) {
        if let FieldValue::Checked(c) = &mut self.value {
            *c = checked;
        }
    }

    /// Radio group this field belongs to, if any
    pub fn radio_group(&self) -> Option<&'static str> {
        match self.kind {
            FieldKind::Radio { group, .. } => Some(group),
            _ => None,
        }
    }

    /// Whether the marker-carrying inputs (text, select, file) are blank
    pub fn is_blank(&self) -> bool {
        self.as_text().trim().is_empty()
    }

    /// Whether typed characters go into this field
    pub fn accepts_text(&self) -> bool {
        matches!(self.kind, FieldKind::Text { .. } | FieldKind::File)
    }

    pub fn file_slot(&self) -> Option<&FileSlot> {
        match &self.value {
            FieldValue::File(slot) => Some(slot),
            _ => None,
        }
    }

    pub fn file_slot_mut(&mut self) -> Option<&mut FileSlot> {
        match &mut self.value {
            FieldValue::File(slot) => Some(slot),
            _ => None,
        }
    }

    pub fn file_pick(&self) -> Option<&FilePick> {
        self.file_slot().and_then(FileSlot::pick)
    }

    /// Replace the text value wholesale, re-applying the mask if any
    pub fn set_text(&mut self, raw: &str) {
        let formatted = match self.kind {
            FieldKind::Text { mask: Some(mask) } => mask.apply(raw),
            _ => raw.to_string(),
        };
        match &mut self.value {
            FieldValue::Text(s) => *s = formatted,
            FieldValue::File(slot) => slot.path_input = formatted,
            _ => {}
        }
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        let mut raw = match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::File(slot) => slot.path_input.clone(),
            _ => return,
        };
        raw.push(c);
        self.set_text(&raw);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        match (&self.kind, &mut self.value) {
            (FieldKind::Text { mask: Some(mask) }, FieldValue::Text(s)) => {
                *s = mask.backspace(s);
            }
            (_, FieldValue::Text(s)) => {
                s.pop();
            }
            (_, FieldValue::File(slot)) => {
                slot.path_input.pop();
            }
            _ => {}
        }
    }

    /// Step a select to the next option (wraps around)
    pub fn next_option(&mut self) {
        if let (FieldKind::Select { options }, FieldValue::Choice(i)) = (&self.kind, &mut self.value)
        {
            *i = (*i + 1) % options.len().max(1);
        }
    }

    /// Step a select to the previous option (wraps around)
    pub fn prev_option(&mut self) {
        if let (FieldKind::Select { options }, FieldValue::Choice(i)) = (&self.kind, &mut self.value)
        {
            let count = options.len().max(1);
            *i = if *i == 0 { count - 1 } else { *i - 1 };
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Choice(_) => self.as_text().to_string(),
            FieldValue::Checked(true) => "[x]".to_string(),
            FieldValue::Checked(false) => "[ ]".to_string(),
            FieldValue::File(slot) => slot.display().to_string(),
        }
    }
}
