//! In-memory port implementations.
//!
//! Used by tests and by hosts that already hold their state in process.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError, RwLock};

use crate::instance::{PlacedWidget, WidgetId};
use crate::ports::{InstanceRegistry, SnapshotProvider, ViewRenderer};
use crate::snapshot::StateSnapshot;
use crate::view::ViewDescription;
use crate::WidgetError;

/// Snapshot provider backed by a value the caller can replace at any time.
///
/// # Examples
///
/// ```
/// use staytics_widget::{adapters::InMemorySnapshotProvider, StateSnapshot};
///
/// let provider = InMemorySnapshotProvider::new(StateSnapshot::empty());
/// provider.set_snapshot([("today_hours", "1.5")].into_iter().collect());
/// ```
#[derive(Debug, Default)]
pub struct InMemorySnapshotProvider {
    snapshot: RwLock<StateSnapshot>,
    failure: RwLock<Option<String>>,
}

impl InMemorySnapshotProvider {
    pub fn new(snapshot: StateSnapshot) -> Self {
        Self {
            snapshot: RwLock::new(snapshot),
            failure: RwLock::new(None),
        }
    }

    pub fn set_snapshot(&self, snapshot: StateSnapshot) {
        *self.snapshot.write().unwrap_or_else(PoisonError::into_inner) = snapshot;
    }

    /// Make every following read fail with the given message.
    pub fn fail_with(&self, message: impl Into<String>) {
        *self.failure.write().unwrap_or_else(PoisonError::into_inner) = Some(message.into());
    }

    pub fn clear_failure(&self) {
        *self.failure.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

impl SnapshotProvider for InMemorySnapshotProvider {
    fn read_snapshot(&self) -> Result<StateSnapshot, WidgetError> {
        if let Some(message) = self
            .failure
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            return Err(WidgetError::snapshot_unavailable(message.clone()));
        }
        Ok(self
            .snapshot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }
}

/// Registry with a fixed set of placed widgets.
#[derive(Debug, Clone, Default)]
pub struct StaticInstanceRegistry {
    widgets: Vec<PlacedWidget>,
    failure: Option<String>,
}

impl StaticInstanceRegistry {
    pub fn new(widgets: Vec<PlacedWidget>) -> Self {
        Self {
            widgets,
            failure: None,
        }
    }

    /// A registry whose listing always fails.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            widgets: Vec::new(),
            failure: Some(message.into()),
        }
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }
}

impl InstanceRegistry for StaticInstanceRegistry {
    fn placed_widgets(&self) -> Result<Vec<PlacedWidget>, WidgetError> {
        match &self.failure {
            Some(message) => Err(WidgetError::registry_unavailable(message.clone())),
            None => Ok(self.widgets.clone()),
        }
    }
}

/// Renderer that keeps every accepted submission in order of arrival.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    submissions: Mutex<Vec<(WidgetId, ViewDescription)>>,
    rejected: HashSet<WidgetId>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse submissions addressed to `widget_id`.
    pub fn rejecting(mut self, widget_id: WidgetId) -> Self {
        self.rejected.insert(widget_id);
        self
    }

    pub fn submissions(&self) -> Vec<(WidgetId, ViewDescription)> {
        self.submissions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The most recent view submitted for `widget_id`.
    pub fn latest(&self, widget_id: WidgetId) -> Option<ViewDescription> {
        self.submissions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .rev()
            .find(|(id, _)| *id == widget_id)
            .map(|(_, view)| view.clone())
    }

    pub fn len(&self) -> usize {
        self.submissions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.submissions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl ViewRenderer for RecordingRenderer {
    fn submit(&self, widget_id: WidgetId, view: ViewDescription) -> Result<(), WidgetError> {
        if self.rejected.contains(&widget_id) {
            return Err(WidgetError::SubmitFailed {
                widget_id,
                reason: "rejected by recording renderer".to_string(),
            });
        }
        self.submissions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((widget_id, view));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{bind, ExtractedFields, WidgetVariant};

    #[test]
    fn snapshot_provider_returns_latest_value_until_failing() {
        let provider = InMemorySnapshotProvider::default();
        assert!(provider.read_snapshot().unwrap().is_empty());

        provider.set_snapshot([("today_hours", "2.0")].into_iter().collect());
        assert_eq!(provider.read_snapshot().unwrap().len(), 1);

        provider.fail_with("store locked");
        assert!(matches!(
            provider.read_snapshot(),
            Err(WidgetError::SnapshotUnavailable(msg)) if msg == "store locked"
        ));

        provider.clear_failure();
        assert!(provider.read_snapshot().is_ok());
    }

    #[test]
    fn failing_registry_reports_unavailable() {
        let registry = StaticInstanceRegistry::failing("host restarting");
        assert!(matches!(
            registry.placed_widgets(),
            Err(WidgetError::RegistryUnavailable(_))
        ));
    }

    #[test]
    fn recording_renderer_rejects_configured_widgets() {
        let renderer = RecordingRenderer::new().rejecting(WidgetId::new(2));
        let view = bind(WidgetVariant::Small, &ExtractedFields::default());

        assert!(renderer.submit(WidgetId::new(1), view.clone()).is_ok());
        assert!(renderer.submit(WidgetId::new(2), view).is_err());
        assert_eq!(renderer.len(), 1);
        assert!(renderer.latest(WidgetId::new(1)).is_some());
        assert!(renderer.latest(WidgetId::new(2)).is_none());
    }
}
