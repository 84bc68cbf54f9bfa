//! Home-screen widget rendering for Staytics time tracking.
//!
//! A render cycle reads the shared tracking state once, extracts typed
//! fields with defaults, and binds them into a view for every placed widget
//! according to its layout:
//!
//! - [`SnapshotProvider`] - where the persisted state comes from
//! - [`InstanceRegistry`] - which widgets are placed, and as what layout
//! - [`ViewRenderer`] - where finished views go
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use staytics_widget::adapters::{
//!     InMemorySnapshotProvider, RecordingRenderer, StaticInstanceRegistry,
//! };
//! use staytics_widget::{PlacedWidget, RenderTrigger, StateSnapshot, WidgetDispatcher};
//!
//! let snapshots = Arc::new(InMemorySnapshotProvider::new(StateSnapshot::empty()));
//! let registry = Arc::new(StaticInstanceRegistry::new(vec![PlacedWidget::new(1, "small")]));
//! let renderer = Arc::new(RecordingRenderer::new());
//!
//! let dispatcher = WidgetDispatcher::new(snapshots, registry, renderer.clone());
//! let report = dispatcher.refresh(RenderTrigger::Refresh).unwrap();
//! assert_eq!(report.submitted.len(), 1);
//! ```

mod binder;
mod dispatcher;
mod error;
mod fields;
mod instance;
mod snapshot;
mod variant;
mod view;

pub mod adapters;
pub mod ports;

pub use binder::{bind, binder_for, Binder, MediumStatus, SmallStatus};
pub use dispatcher::{render_pass, RenderReport, RenderTrigger, WidgetDispatcher};
pub use error::WidgetError;
pub use fields::{extract, ExtractedFields};
pub use instance::{PlacedWidget, WidgetId};
pub use ports::{InstanceRegistry, SnapshotProvider, ViewRenderer};
pub use snapshot::{keys, RawValue, StateSnapshot};
pub use variant::{ElementId, WidgetVariant};
pub use view::{BoundedProgress, ElementValue, ViewDescription, PROGRESS_MAX};
