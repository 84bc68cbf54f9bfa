//! Snapshot provider port (outbound).

use crate::{snapshot::StateSnapshot, WidgetError};

/// Source of the shared widget state.
///
/// Implementations return an empty snapshot when nothing has been written
/// yet. An `Err` means the store itself could not be read, which abandons
/// the render cycle.
pub trait SnapshotProvider: Send + Sync + 'static {
    fn read_snapshot(&self) -> Result<StateSnapshot, WidgetError>;
}
