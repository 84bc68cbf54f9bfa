//! Typed field extraction from a [`StateSnapshot`].

use serde::Serialize;

use crate::snapshot::{keys, RawValue, StateSnapshot};

pub const DEFAULT_TODAY_HOURS: &str = "0.0";
pub const DEFAULT_BREAK_TIME: &str = "0m";
pub const DEFAULT_BREAK_COUNT: &str = "0";

/// Normalized values for one render cycle.
///
/// `progress` is carried exactly as stored. Views that show it as a bounded
/// value are responsible for keeping it within `0..=100`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedFields {
    pub today_hours: String,
    pub is_tracking: bool,
    pub break_time_minutes: String,
    pub break_count: String,
    pub progress: i64,
}

impl Default for ExtractedFields {
    fn default() -> Self {
        Self {
            today_hours: DEFAULT_TODAY_HOURS.to_string(),
            is_tracking: false,
            break_time_minutes: DEFAULT_BREAK_TIME.to_string(),
            break_count: DEFAULT_BREAK_COUNT.to_string(),
            progress: 0,
        }
    }
}

/// Read every recognized field out of the snapshot.
///
/// Never fails: a key that is absent or holds a value of the wrong type is
/// replaced by its default.
pub fn extract(snapshot: &StateSnapshot) -> ExtractedFields {
    let defaults = ExtractedFields::default();

    ExtractedFields {
        today_hours: text_field(snapshot, keys::TODAY_HOURS).unwrap_or(defaults.today_hours),
        is_tracking: bool_field(snapshot, keys::IS_TRACKING).unwrap_or(defaults.is_tracking),
        break_time_minutes: text_field(snapshot, keys::BREAK_TIME_MINUTES)
            .unwrap_or(defaults.break_time_minutes),
        break_count: text_field(snapshot, keys::BREAK_COUNT).unwrap_or(defaults.break_count),
        progress: int_field(snapshot, keys::PROGRESS).unwrap_or(defaults.progress),
    }
}

fn text_field(snapshot: &StateSnapshot, key: &str) -> Option<String> {
    let found = snapshot.get(key);
    let value = match found {
        Some(RawValue::Text(value)) => Some(value.clone()),
        _ => None,
    };
    value.or_else(|| defaulted(key, found))
}

/// Booleans written through a string-only bridge arrive as "true"/"false".
fn bool_field(snapshot: &StateSnapshot, key: &str) -> Option<bool> {
    let found = snapshot.get(key);
    let value = match found {
        Some(RawValue::Bool(value)) => Some(*value),
        Some(RawValue::Text(value)) => match value.trim().to_ascii_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        _ => None,
    };
    value.or_else(|| defaulted(key, found))
}

fn int_field(snapshot: &StateSnapshot, key: &str) -> Option<i64> {
    let found = snapshot.get(key);
    let value = match found {
        Some(RawValue::Integer(value)) => Some(*value),
        Some(RawValue::Text(value)) => value.trim().parse::<i64>().ok(),
        _ => None,
    };
    value.or_else(|| defaulted(key, found))
}

fn defaulted<T>(key: &str, found: Option<&RawValue>) -> Option<T> {
    match found {
        None => tracing::trace!(key, "field missing, using default"),
        Some(value) => tracing::trace!(key, ?value, "field has unexpected type, using default"),
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_snapshot_yields_defaults() {
        let fields = extract(&StateSnapshot::empty());

        assert_eq!(
            fields,
            ExtractedFields {
                today_hours: "0.0".to_string(),
                is_tracking: false,
                break_time_minutes: "0m".to_string(),
                break_count: "0".to_string(),
                progress: 0,
            }
        );
    }

    #[test]
    fn reads_natively_typed_values() {
        let snapshot: StateSnapshot = [
            (keys::TODAY_HOURS, RawValue::from("7.25")),
            (keys::IS_TRACKING, RawValue::from(true)),
            (keys::BREAK_TIME_MINUTES, RawValue::from("45m")),
            (keys::BREAK_COUNT, RawValue::from("3")),
            (keys::PROGRESS, RawValue::from(90)),
        ]
        .into_iter()
        .collect();

        let fields = extract(&snapshot);
        assert_eq!(fields.today_hours, "7.25");
        assert!(fields.is_tracking);
        assert_eq!(fields.break_time_minutes, "45m");
        assert_eq!(fields.break_count, "3");
        assert_eq!(fields.progress, 90);
    }

    #[test]
    fn coerces_stringly_typed_bool_and_int() {
        let snapshot: StateSnapshot = [
            (keys::IS_TRACKING, RawValue::from(" TRUE ")),
            (keys::PROGRESS, RawValue::from("40")),
        ]
        .into_iter()
        .collect();

        let fields = extract(&snapshot);
        assert!(fields.is_tracking);
        assert_eq!(fields.progress, 40);
    }

    #[test]
    fn wrong_types_fall_back_to_defaults() {
        let snapshot: StateSnapshot = [
            (keys::TODAY_HOURS, RawValue::from(4)),
            (keys::IS_TRACKING, RawValue::from("yes")),
            (keys::BREAK_TIME_MINUTES, RawValue::from(false)),
            (keys::BREAK_COUNT, RawValue::Other(serde_json::json!([2]))),
            (keys::PROGRESS, RawValue::from("forty")),
        ]
        .into_iter()
        .collect();

        assert_eq!(extract(&snapshot), ExtractedFields::default());
    }

    #[test]
    fn progress_is_not_clamped() {
        let low: StateSnapshot = [(keys::PROGRESS, RawValue::from(-5))].into_iter().collect();
        let high: StateSnapshot = [(keys::PROGRESS, RawValue::from(150))].into_iter().collect();

        assert_eq!(extract(&low).progress, -5);
        assert_eq!(extract(&high).progress, 150);
    }

    #[test]
    fn unrelated_keys_are_ignored() {
        let snapshot: StateSnapshot = [("last_sync", RawValue::from("12:00"))]
            .into_iter()
            .collect();
        assert_eq!(extract(&snapshot), ExtractedFields::default());
    }
}
