//! Instance registry port (outbound).

use crate::{instance::PlacedWidget, WidgetError};

/// The host's list of widgets currently on screen.
pub trait InstanceRegistry: Send + Sync + 'static {
    /// Every placed widget, each with the layout name it was placed as.
    fn placed_widgets(&self) -> Result<Vec<PlacedWidget>, WidgetError>;
}
