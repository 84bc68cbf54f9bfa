//! Per-layout view binding.
//!
//! Each layout has one pure binder function. [`binder_for`] is the lookup
//! table; a new layout needs a new [`WidgetVariant`] and one entry there.

use crate::fields::ExtractedFields;
use crate::variant::{ElementId, WidgetVariant};
use crate::view::{BoundedProgress, ElementValue, ViewDescription};

pub type Binder = fn(&ExtractedFields) -> ViewDescription;

/// Two-state label shown by the small layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmallStatus {
    Tracking,
    Idle,
}

impl SmallStatus {
    pub fn from_tracking(is_tracking: bool) -> Self {
        if is_tracking {
            Self::Tracking
        } else {
            Self::Idle
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Tracking => "TRACKING",
            Self::Idle => "IDLE",
        }
    }
}

/// Two-state label shown by the medium layout. Clocked in or out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediumStatus {
    In,
    Out,
}

impl MediumStatus {
    pub fn from_tracking(is_tracking: bool) -> Self {
        if is_tracking {
            Self::In
        } else {
            Self::Out
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::In => "IN",
            Self::Out => "OUT",
        }
    }
}

pub fn binder_for(variant: WidgetVariant) -> Binder {
    match variant {
        WidgetVariant::Small => bind_small,
        WidgetVariant::Medium => bind_medium,
    }
}

/// Build the view for one layout from this cycle's fields.
pub fn bind(variant: WidgetVariant, fields: &ExtractedFields) -> ViewDescription {
    binder_for(variant)(fields)
}

fn text(value: impl Into<String>) -> ElementValue {
    ElementValue::Text(value.into())
}

fn bind_small(fields: &ExtractedFields) -> ViewDescription {
    ViewDescription::new(
        WidgetVariant::Small,
        [
            (ElementId::TodayHours, text(&fields.today_hours)),
            (
                ElementId::StatusText,
                text(SmallStatus::from_tracking(fields.is_tracking).label()),
            ),
        ],
    )
}

/// Progress is clamped here; extraction hands it over untouched.
fn bind_medium(fields: &ExtractedFields) -> ViewDescription {
    ViewDescription::new(
        WidgetVariant::Medium,
        [
            (ElementId::TodayHours, text(&fields.today_hours)),
            (ElementId::BreakTime, text(&fields.break_time_minutes)),
            (ElementId::BreakCount, text(&fields.break_count)),
            (
                ElementId::Progress,
                ElementValue::Progress(BoundedProgress::clamped(fields.progress)),
            ),
            (
                ElementId::StatusText,
                text(MediumStatus::from_tracking(fields.is_tracking).label()),
            ),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn fields(is_tracking: bool, progress: i64) -> ExtractedFields {
        ExtractedFields {
            today_hours: "4.5".to_string(),
            is_tracking,
            break_time_minutes: "15m".to_string(),
            break_count: "2".to_string(),
            progress,
        }
    }

    #[test]
    fn every_variant_binds_exactly_its_elements() {
        for variant in WidgetVariant::iter() {
            let view = bind(variant, &ExtractedFields::default());
            let mut expected = variant.elements().to_vec();
            expected.sort();
            assert_eq!(view.element_ids().collect::<Vec<_>>(), expected);
            assert_eq!(view.variant(), variant);
        }
    }

    #[test]
    fn small_view_has_hours_and_status_only() {
        let view = bind(WidgetVariant::Small, &fields(true, 40));

        assert_eq!(view.len(), 2);
        assert_eq!(view.text(ElementId::TodayHours), Some("4.5"));
        assert_eq!(view.text(ElementId::StatusText), Some("TRACKING"));
        assert!(view.get(ElementId::BreakTime).is_none());
        assert!(view.get(ElementId::BreakCount).is_none());
        assert!(view.progress().is_none());
    }

    #[test]
    fn medium_view_has_all_five_elements() {
        let view = bind(WidgetVariant::Medium, &fields(true, 40));

        assert_eq!(view.len(), 5);
        assert_eq!(view.text(ElementId::TodayHours), Some("4.5"));
        assert_eq!(view.text(ElementId::BreakTime), Some("15m"));
        assert_eq!(view.text(ElementId::BreakCount), Some("2"));
        assert_eq!(view.progress().map(|p| p.value()), Some(40));
        assert_eq!(view.text(ElementId::StatusText), Some("IN"));
    }

    #[test]
    fn layouts_use_their_own_status_vocabulary() {
        let tracking = fields(true, 0);
        let idle = fields(false, 0);

        assert_eq!(
            bind(WidgetVariant::Small, &tracking).text(ElementId::StatusText),
            Some("TRACKING")
        );
        assert_eq!(
            bind(WidgetVariant::Medium, &tracking).text(ElementId::StatusText),
            Some("IN")
        );
        assert_eq!(
            bind(WidgetVariant::Small, &idle).text(ElementId::StatusText),
            Some("IDLE")
        );
        assert_eq!(
            bind(WidgetVariant::Medium, &idle).text(ElementId::StatusText),
            Some("OUT")
        );
    }

    #[test]
    fn medium_clamps_out_of_range_progress() {
        let low = bind(WidgetVariant::Medium, &fields(false, -5));
        let high = bind(WidgetVariant::Medium, &fields(false, 150));

        assert_eq!(low.progress().map(|p| (p.value(), p.max())), Some((0, 100)));
        assert_eq!(high.progress().map(|p| (p.value(), p.max())), Some((100, 100)));
        assert_eq!(low.len(), 5);
        assert_eq!(high.len(), 5);
    }
}
