use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use staytics_widget::{InstanceRegistry, RenderTrigger, ViewRenderer, WidgetDispatcher};
use tokio::time::MissedTickBehavior;

use crate::adapters::FileSnapshotProvider;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WatchStats {
    pub cycles: usize,
    pub state_changes: usize,
    pub abandoned: usize,
}

/// Re-render on a fixed period and whenever the snapshot file changes.
///
/// Runs one periodic cycle immediately, then keeps going until `shutdown`
/// resolves. An abandoned cycle leaves the previous views in place and the
/// loop carries on.
pub async fn watch<I, R>(
    dispatcher: WidgetDispatcher<FileSnapshotProvider, I, R>,
    snapshots: Arc<FileSnapshotProvider>,
    refresh_every: Duration,
    poll_every: Duration,
    shutdown: impl Future<Output = ()>,
) -> WatchStats
where
    I: InstanceRegistry,
    R: ViewRenderer,
{
    let mut refresh = tokio::time::interval(refresh_every);
    refresh.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut poll = tokio::time::interval(poll_every);
    poll.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut stats = WatchStats::default();
    let mut last_modified = snapshots.modified_at();
    tokio::pin!(shutdown);

    tracing::info!(
        path = %snapshots.path().display(),
        ?refresh_every,
        ?poll_every,
        "watching widget state"
    );

    loop {
        tokio::select! {
            _ = &mut shutdown => {
                tracing::info!("stopping widget watch");
                break;
            }
            _ = refresh.tick() => {
                run_cycle(&dispatcher, RenderTrigger::Periodic, &mut stats);
            }
            _ = poll.tick() => {
                let modified = snapshots.modified_at();
                if modified != last_modified {
                    last_modified = modified;
                    stats.state_changes += 1;
                    run_cycle(&dispatcher, RenderTrigger::StateChanged, &mut stats);
                }
            }
        }
    }

    stats
}

fn run_cycle<I, R>(
    dispatcher: &WidgetDispatcher<FileSnapshotProvider, I, R>,
    trigger: RenderTrigger,
    stats: &mut WatchStats,
) where
    I: InstanceRegistry,
    R: ViewRenderer,
{
    stats.cycles += 1;
    if dispatcher.refresh(trigger).is_err() {
        stats.abandoned += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use staytics_widget::adapters::{RecordingRenderer, StaticInstanceRegistry};
    use staytics_widget::{ElementId, PlacedWidget, WidgetId};

    #[tokio::test]
    async fn renders_on_start_and_on_state_change() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("widget_state.json");
        let snapshots = Arc::new(FileSnapshotProvider::new(&path));
        let renderer = Arc::new(RecordingRenderer::new());
        let dispatcher = WidgetDispatcher::new(
            Arc::clone(&snapshots),
            Arc::new(StaticInstanceRegistry::new(vec![PlacedWidget::new(1, "small")])),
            Arc::clone(&renderer),
        );

        let writer_path = path.clone();
        let shutdown = async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            let staged = writer_path.with_extension("tmp");
            std::fs::write(&staged, r#"{"today_hours":"3.0","is_tracking":true}"#).unwrap();
            std::fs::rename(&staged, &writer_path).unwrap();
            tokio::time::sleep(Duration::from_millis(300)).await;
        };

        let stats = watch(
            dispatcher,
            snapshots,
            Duration::from_secs(3600),
            Duration::from_millis(10),
            shutdown,
        )
        .await;

        assert!(stats.cycles >= 2);
        assert_eq!(stats.state_changes, 1);
        assert_eq!(stats.abandoned, 0);
        let latest = renderer.latest(WidgetId::new(1)).unwrap();
        assert_eq!(latest.text(ElementId::TodayHours), Some("3.0"));
        assert_eq!(latest.text(ElementId::StatusText), Some("TRACKING"));
    }

    #[tokio::test]
    async fn unreadable_state_abandons_cycles_but_keeps_watching() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("widget_state.json");
        std::fs::write(&path, "not json").unwrap();

        let snapshots = Arc::new(FileSnapshotProvider::new(&path));
        let renderer = Arc::new(RecordingRenderer::new());
        let dispatcher = WidgetDispatcher::new(
            Arc::clone(&snapshots),
            Arc::new(StaticInstanceRegistry::new(vec![PlacedWidget::new(1, "medium")])),
            Arc::clone(&renderer),
        );

        let stats = watch(
            dispatcher,
            snapshots,
            Duration::from_secs(3600),
            Duration::from_secs(3600),
            tokio::time::sleep(Duration::from_millis(100)),
        )
        .await;

        assert_eq!(stats.cycles, 1);
        assert_eq!(stats.abandoned, 1);
        assert!(renderer.is_empty());
    }
}
