//! The persisted key-value state the tracking app publishes for its widgets.
//!
//! The snapshot is owned by whatever persists it; this crate only reads it,
//! and reads it fresh for every render cycle.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Keys the tracking app writes into the shared widget state.
pub mod keys {
    pub const TODAY_HOURS: &str = "today_hours";
    pub const IS_TRACKING: &str = "is_tracking";
    pub const BREAK_TIME_MINUTES: &str = "break_time_minutes";
    pub const BREAK_COUNT: &str = "break_count";
    pub const PROGRESS: &str = "progress";
}

/// A single raw value as stored by the persistence layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Bool(bool),
    Integer(i64),
    Text(String),
    /// Anything else the store holds (floats, nulls, nested data).
    /// Never matches a recognized field's type.
    Other(serde_json::Value),
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Immutable view of the shared widget state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateSnapshot(BTreeMap<String, RawValue>);

impl StateSnapshot {
    /// A snapshot with no keys, used before the app has written anything.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&RawValue> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parse a snapshot from a flat JSON object.
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }
}

impl<K, V> FromIterator<(K, V)> for StateSnapshot
where
    K: Into<String>,
    V: Into<RawValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}
