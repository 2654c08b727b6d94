//! Error types for the application form

use std::path::PathBuf;

/// Validation failures raised while checking a step or observing a file pick.
///
/// None of these are fatal: the handler that hits one refuses the transition
/// and tells the user.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("{field} is required")]
    RequiredFieldEmpty { field: String },

    #[error("{field} must be checked")]
    RequiredCheckboxUnchecked { field: String },

    #[error("an option must be selected for {group}")]
    RequiredRadioUnselected { group: String },

    #[error("File size must be less than {}", size_label(.limit_bytes))]
    FileTooLarge {
        file_name: String,
        size_bytes: u64,
        limit_bytes: u64,
    },

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures reported by the submission collaborator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("application rejected: {0}")]
    Rejected(String),

    #[error("submission cancelled")]
    Cancelled,

    #[error("transport error: {0}")]
    Transport(String),
}

const KIB: u64 = 1024;
const MIB: u64 = 1024 * KIB;

/// Human size for a limit: whole MB or KB when exact, one decimal MB above
/// a mebibyte, plain bytes otherwise
fn size_label(bytes: &u64) -> String {
    let bytes = *bytes;
    if bytes >= MIB && bytes % MIB == 0 {
        format!("{}MB", bytes / MIB)
    } else if bytes >= MIB {
        format!("{:.1}MB", bytes as f64 / MIB as f64)
    } else if bytes >= KIB && bytes % KIB == 0 {
        format!("{}KB", bytes / KIB)
    } else {
        format!("{bytes} bytes")
    }
}
