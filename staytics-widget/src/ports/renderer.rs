//! Host renderer port (outbound).

use crate::{instance::WidgetId, view::ViewDescription, WidgetError};

/// Paints views on behalf of the host.
///
/// Ownership of the view moves to the renderer on submission.
pub trait ViewRenderer: Send + Sync + 'static {
    fn submit(&self, widget_id: WidgetId, view: ViewDescription) -> Result<(), WidgetError>;
}
