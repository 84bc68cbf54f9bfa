use thiserror::Error;

use crate::instance::WidgetId;

/// Errors that can occur while refreshing widgets.
///
/// Missing snapshot keys are not errors: extraction falls back to the
/// documented defaults and never reports them.
#[derive(Debug, Error)]
pub enum WidgetError {
    /// The snapshot could not be read. The whole cycle is abandoned.
    #[error("snapshot unavailable: {0}")]
    SnapshotUnavailable(String),
    /// The host could not list its placed widgets. The whole cycle is abandoned.
    #[error("widget registry unavailable: {0}")]
    RegistryUnavailable(String),
    /// A placed widget names a layout no binder exists for.
    #[error("widget {widget_id} has unknown layout {layout:?}")]
    UnknownVariant { widget_id: WidgetId, layout: String },
    /// The host renderer rejected a single submission.
    #[error("failed to submit view for widget {widget_id}: {reason}")]
    SubmitFailed { widget_id: WidgetId, reason: String },
    #[error("{0}")]
    Unknown(String),
}

impl WidgetError {
    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::Unknown(msg.into())
    }

    pub fn snapshot_unavailable(msg: impl Into<String>) -> Self {
        Self::SnapshotUnavailable(msg.into())
    }

    pub fn registry_unavailable(msg: impl Into<String>) -> Self {
        Self::RegistryUnavailable(msg.into())
    }

    /// Whether this error abandons the whole render cycle rather than one widget.
    pub fn aborts_cycle(&self) -> bool {
        matches!(
            self,
            Self::SnapshotUnavailable(_) | Self::RegistryUnavailable(_) | Self::Unknown(_)
        )
    }
}
