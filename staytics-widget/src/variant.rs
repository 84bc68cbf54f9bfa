use serde::Serialize;
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Display elements a widget layout can expose.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Display, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ElementId {
    TodayHours,
    StatusText,
    BreakTime,
    BreakCount,
    Progress,
}

/// Fixed layout shapes the widget can be placed as.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString, EnumIter, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
pub enum WidgetVariant {
    #[strum(ascii_case_insensitive, serialize = "small")]
    Small,
    #[strum(ascii_case_insensitive, serialize = "medium")]
    Medium,
}

impl WidgetVariant {
    /// The elements this layout shows. Bound views contain exactly these keys.
    pub fn elements(self) -> &'static [ElementId] {
        match self {
            WidgetVariant::Small => &[ElementId::TodayHours, ElementId::StatusText],
            WidgetVariant::Medium => &[
                ElementId::TodayHours,
                ElementId::BreakTime,
                ElementId::BreakCount,
                ElementId::Progress,
                ElementId::StatusText,
            ],
        }
    }
}
