use std::collections::BTreeMap;

use serde::Serialize;

use crate::variant::{ElementId, WidgetVariant};

/// Upper bound of every progress element.
pub const PROGRESS_MAX: u8 = 100;

/// A progress bar value, always within `0..=max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoundedProgress {
    value: u8,
    max: u8,
}

impl BoundedProgress {
    /// Clamp a raw percentage into `0..=PROGRESS_MAX`.
    pub fn clamped(raw: i64) -> Self {
        let value = raw.clamp(0, i64::from(PROGRESS_MAX)) as u8;
        Self {
            value,
            max: PROGRESS_MAX,
        }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn max(&self) -> u8 {
        self.max
    }
}

/// Rendered value of one display element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ElementValue {
    Text(String),
    Progress(BoundedProgress),
}

impl ElementValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ElementValue::Text(text) => Some(text),
            ElementValue::Progress(_) => None,
        }
    }

    pub fn as_progress(&self) -> Option<BoundedProgress> {
        match self {
            ElementValue::Progress(progress) => Some(*progress),
            ElementValue::Text(_) => None,
        }
    }
}

/// Everything the host needs to paint one widget.
///
/// Immutable once built. Elements are kept sorted so that equal inputs
/// serialize to identical bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewDescription {
    variant: WidgetVariant,
    elements: BTreeMap<ElementId, ElementValue>,
}

impl ViewDescription {
    pub fn new(
        variant: WidgetVariant,
        elements: impl IntoIterator<Item = (ElementId, ElementValue)>,
    ) -> Self {
        Self {
            variant,
            elements: elements.into_iter().collect(),
        }
    }

    pub fn variant(&self) -> WidgetVariant {
        self.variant
    }

    pub fn get(&self, element: ElementId) -> Option<&ElementValue> {
        self.elements.get(&element)
    }

    pub fn text(&self, element: ElementId) -> Option<&str> {
        self.get(element).and_then(ElementValue::as_text)
    }

    pub fn progress(&self) -> Option<BoundedProgress> {
        self.get(ElementId::Progress)
            .and_then(ElementValue::as_progress)
    }

    pub fn element_ids(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.elements.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
