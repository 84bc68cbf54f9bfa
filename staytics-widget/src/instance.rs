use serde::{Deserialize, Serialize};
use std::fmt;

/// Host-assigned identifier of one placed widget.
///
/// Opaque to the renderer; only used to address submissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WidgetId(i32);

impl WidgetId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    pub fn as_i32(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for WidgetId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl From<WidgetId> for i32 {
    fn from(id: WidgetId) -> Self {
        id.0
    }
}

/// A widget currently placed by the host, with the layout it was placed as.
///
/// The layout is kept as the host's raw name. Resolving it to a
/// [`WidgetVariant`](crate::WidgetVariant) happens during the render pass so
/// that a name this crate does not know only affects that one widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedWidget {
    pub id: WidgetId,
    pub layout: String,
}

impl PlacedWidget {
    pub fn new(id: impl Into<WidgetId>, layout: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            layout: layout.into(),
        }
    }
}
