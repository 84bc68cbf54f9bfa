use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use staytics_widget::{SnapshotProvider, StateSnapshot, WidgetError};

/// Reads widget state from a flat JSON object on disk.
///
/// A file that does not exist yet, or is blank, is an empty snapshot: the
/// tracking app simply has not written anything.
#[derive(Debug, Clone)]
pub struct FileSnapshotProvider {
    path: PathBuf,
}

impl FileSnapshotProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Last modification time of the state file, if it exists.
    pub fn modified_at(&self) -> Option<SystemTime> {
        std::fs::metadata(&self.path)
            .and_then(|meta| meta.modified())
            .ok()
    }
}

impl SnapshotProvider for FileSnapshotProvider {
    fn read_snapshot(&self) -> Result<StateSnapshot, WidgetError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no widget state yet");
                return Ok(StateSnapshot::empty());
            }
            Err(e) => {
                return Err(WidgetError::snapshot_unavailable(format!(
                    "failed to read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        if raw.trim().is_empty() {
            return Ok(StateSnapshot::empty());
        }

        StateSnapshot::from_json(&raw).map_err(|e| {
            WidgetError::snapshot_unavailable(format!(
                "failed to parse {}: {}",
                self.path.display(),
                e
            ))
        })
    }
}
