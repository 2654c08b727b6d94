//! File picker observer
//!
//! Only the chosen file's name and size are ever looked at; the bytes stay
//! on disk.

use crate::error::FormError;
use std::path::Path;

/// Text shown in a file slot with nothing selected
pub const NO_FILE_CHOSEN: &str = "No file chosen";

/// Name and size of a selected file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePick {
    pub file_name: String,
    pub size_bytes: u64,
}

impl FilePick {
    /// Stat a path into a pick. Fails if the path does not name a file.
    pub fn from_path(path: &Path) -> Result<Self, FormError> {
        let metadata = match std::fs::metadata(path) {
            Ok(m) if m.is_file() => m,
            Ok(_) => return Err(FormError::FileNotFound(path.to_path_buf())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(FormError::FileNotFound(path.to_path_buf()))
            }
            Err(e) => return Err(e.into()),
        };

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self {
            file_name,
            size_bytes: metadata.len(),
        })
    }
}

/// A file input together with the display slot bound to it.
///
/// The path buffer is what the user is typing; `pick` is the accepted
/// selection. A new selection replaces the old one wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSlot {
    pub path_input: String,
    pick: Option<FilePick>,
}

impl FileSlot {
    pub fn pick(&self) -> Option<&FilePick> {
        self.pick.as_ref()
    }

    /// Text for the bound display slot
    pub fn display(&self) -> &str {
        self.pick
            .as_ref()
            .map(|p| p.file_name.as_str())
            .unwrap_or(NO_FILE_CHOSEN)
    }

    /// Observe a change event. A pick above `max_bytes` clears the slot and
    /// is reported back so the user can be told.
    pub fn select(&mut self, pick: Option<FilePick>, max_bytes: u64) -> Result<(), FormError> {
        self.pick = None;
        let Some(pick) = pick else {
            return Ok(());
        };

        if pick.size_bytes > max_bytes {
            self.path_input.clear();
            tracing::warn!(
                "Rejected {} ({} bytes > {} bytes)",
                pick.file_name,
                pick.size_bytes,
                max_bytes
            );
            return Err(FormError::FileTooLarge {
                file_name: pick.file_name,
                size_bytes: pick.size_bytes,
                limit_bytes: max_bytes,
            });
        }

        tracing::debug!("Selected {} ({} bytes)", pick.file_name, pick.size_bytes);
        self.pick = Some(pick);
        Ok(())
    }

    /// Resolve the typed path and observe the result
    pub fn select_path(&mut self, max_bytes: u64) -> Result<(), FormError> {
        let input = self.path_input.trim().to_string();
        if input.is_empty() {
            return self.select(None, max_bytes);
        }
        match FilePick::from_path(Path::new(&input)) {
            Ok(pick) => self.select(Some(pick), max_bytes),
            Err(e) => {
                self.pick = None;
                Err(e)
            }
        }
    }

    pub fn clear(&mut self) {
        self.path_input.clear();
        self.pick = None;
    }
}
