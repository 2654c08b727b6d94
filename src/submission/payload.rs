//! Submission payload and receipt types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// One submitted value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubmittedValue {
    Text(String),
    Flag(bool),
    /// Reference to a chosen file; contents are never read
    File { file_name: String, size_bytes: u64 },
}

/// Field name to value, for every step of the form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionPayload {
    values: BTreeMap<String, SubmittedValue>,
}

impl SubmissionPayload {
    pub fn insert(&mut self, name: impl Into<String>, value: SubmittedValue) {
        self.values.insert(name.into(), value);
    }

    #[allow(dead_code)]
    pub fn get(&self, name: &str) -> Option<&SubmittedValue> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Acknowledgement returned by a successful submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub reference: Uuid,
    pub submitted_at: DateTime<Utc>,
}

impl SubmissionReceipt {
    pub fn new() -> Self {
        Self {
            reference: Uuid::new_v4(),
            submitted_at: Utc::now(),
        }
    }

    /// Short reference shown to the applicant
    pub fn short_reference(&self) -> String {
        self.reference.simple().to_string()[..8].to_uppercase()
    }
}

impl Default for SubmissionReceipt {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_payload_serializes_as_flat_object() {
        let mut payload = SubmissionPayload::default();
        payload.insert("first_name", SubmittedValue::Text("Ada".to_string()));
        payload.insert("agree_terms", SubmittedValue::Flag(true));
        payload.insert(
            "statement_1",
            SubmittedValue::File {
                file_name: "jan.pdf".to_string(),
                size_bytes: 10,
            },
        );

        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "agree_terms": true,
                "first_name": "Ada",
                "statement_1": { "file_name": "jan.pdf", "size_bytes": 10 }
            })
        );
    }

    #[test]
    fn test_insert_replaces_existing_value() {
        let mut payload = SubmissionPayload::default();
        payload.insert("email", SubmittedValue::Text("a@x.io".to_string()));
        payload.insert("email", SubmittedValue::Text("b@x.io".to_string()));
        assert_eq!(payload.len(), 1);
        assert_eq!(
            payload.get("email"),
            Some(&SubmittedValue::Text("b@x.io".to_string()))
        );
    }

    #[test]
    fn test_short_reference() {
        let receipt = SubmissionReceipt::new();
        let short = receipt.short_reference();
        assert_eq!(short.len(), 8);
        assert_eq!(short, short.to_uppercase());
    }
}
