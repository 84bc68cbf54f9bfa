use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::instrument;

use crate::binder::bind;
use crate::fields::extract;
use crate::instance::{PlacedWidget, WidgetId};
use crate::ports::{InstanceRegistry, SnapshotProvider, ViewRenderer};
use crate::snapshot::StateSnapshot;
use crate::variant::WidgetVariant;
use crate::WidgetError;

/// What asked for a render cycle. Only used for logging; every trigger runs
/// the same full cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderTrigger {
    Periodic,
    StateChanged,
    Refresh,
}

impl fmt::Display for RenderTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderTrigger::Periodic => write!(f, "periodic"),
            RenderTrigger::StateChanged => write!(f, "state_changed"),
            RenderTrigger::Refresh => write!(f, "refresh"),
        }
    }
}

/// Outcome of one render pass.
#[derive(Debug, Default, Serialize)]
pub struct RenderReport {
    /// Widgets whose view the renderer accepted.
    pub submitted: Vec<WidgetId>,
    /// Widgets left untouched because their layout is unknown.
    #[serde(serialize_with = "display_all")]
    pub skipped: Vec<WidgetError>,
    /// Widgets whose view the renderer refused.
    #[serde(serialize_with = "display_all")]
    pub failed: Vec<WidgetError>,
}

impl RenderReport {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty() && self.failed.is_empty()
    }
}

fn display_all<S: serde::Serializer>(errors: &[WidgetError], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(errors.iter().map(ToString::to_string))
}

/// Render every placed widget from one snapshot.
///
/// Fields are extracted once and shared by all widgets, so every view in the
/// pass reflects the same state. A widget with an unknown layout or a refused
/// submission is recorded in the report and the pass moves on.
pub fn render_pass<R>(widgets: &[PlacedWidget], snapshot: &StateSnapshot, renderer: &R) -> RenderReport
where
    R: ViewRenderer + ?Sized,
{
    let fields = extract(snapshot);
    let mut report = RenderReport::default();

    for widget in widgets {
        let variant = match widget.layout.parse::<WidgetVariant>() {
            Ok(variant) => variant,
            Err(_) => {
                tracing::warn!(
                    widget_id = %widget.id,
                    layout = %widget.layout,
                    "skipping widget with unknown layout"
                );
                report.skipped.push(WidgetError::UnknownVariant {
                    widget_id: widget.id,
                    layout: widget.layout.clone(),
                });
                continue;
            }
        };

        let view = bind(variant, &fields);
        match renderer.submit(widget.id, view) {
            Ok(()) => {
                tracing::debug!(widget_id = %widget.id, %variant, "submitted view");
                report.submitted.push(widget.id);
            }
            Err(e) => {
                tracing::error!(widget_id = %widget.id, "failed to submit view: {}", e);
                report.failed.push(e);
            }
        }
    }

    report
}

/// Runs full render cycles against the host's collaborators.
///
/// Holds no state between cycles: the snapshot and the widget list are read
/// again on every call.
pub struct WidgetDispatcher<S, I, R> {
    snapshots: Arc<S>,
    registry: Arc<I>,
    renderer: Arc<R>,
}

impl<S, I, R> Clone for WidgetDispatcher<S, I, R> {
    fn clone(&self) -> Self {
        Self {
            snapshots: Arc::clone(&self.snapshots),
            registry: Arc::clone(&self.registry),
            renderer: Arc::clone(&self.renderer),
        }
    }
}

impl<S, I, R> WidgetDispatcher<S, I, R>
where
    S: SnapshotProvider,
    I: InstanceRegistry,
    R: ViewRenderer,
{
    pub fn new(snapshots: Arc<S>, registry: Arc<I>, renderer: Arc<R>) -> Self {
        Self {
            snapshots,
            registry,
            renderer,
        }
    }

    /// Run one cycle.
    ///
    /// If either read fails the cycle stops before anything is submitted, so
    /// the host keeps showing the previous views.
    #[instrument(name = "WidgetDispatcher::refresh", skip_all, fields(trigger = %trigger))]
    pub fn refresh(&self, trigger: RenderTrigger) -> Result<RenderReport, WidgetError> {
        let snapshot = self.snapshots.read_snapshot().map_err(|e| {
            tracing::error!("aborting render cycle: {}", e);
            e
        })?;
        let widgets = self.registry.placed_widgets().map_err(|e| {
            tracing::error!("aborting render cycle: {}", e);
            e
        })?;

        let report = render_pass(&widgets, &snapshot, self.renderer.as_ref());
        tracing::info!(
            submitted = report.submitted.len(),
            skipped = report.skipped.len(),
            failed = report.failed.len(),
            "render cycle finished"
        );
        Ok(report)
    }
}
