//! OptionDescriptor - one caller-supplied row of the dropdown.

use serde::{Deserialize, Deserializer, Serialize};

use crate::control::{ControlKind, ControlValue, StepperBounds, parse_display};

/// Initial value as callers hand it over: JS numbers, booleans, or numeric text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InitialValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl InitialValue {
    /// Integer reading: `true` is 1, fractions truncate, unparsable text is 0.
    pub fn as_count(&self) -> i64 {
        match self {
            Self::Bool(b) => i64::from(*b),
            Self::Int(n) => *n,
            Self::Float(f) if f.is_finite() => f.trunc() as i64,
            Self::Float(_) => 0,
            Self::Text(s) => parse_display(s),
        }
    }

    /// Boolean reading for switches. Text is checked only for `"true"` or a
    /// non-zero integer.
    pub fn as_flag(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Text(s) if s.trim().eq_ignore_ascii_case("true") => true,
            other => other.as_count() != 0,
        }
    }
}

impl From<bool> for InitialValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for InitialValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for InitialValue {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

/// `min`/`max` as JS numbers: fractions truncate toward zero, and a
/// non-finite bound (`Infinity`, `NaN`) leaves that side unbounded.
fn lenient_bound<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Bound {
        Int(i64),
        Float(f64),
    }

    Ok(match Option::<Bound>::deserialize(deserializer)? {
        Some(Bound::Int(n)) => Some(n),
        Some(Bound::Float(f)) if f.is_finite() => Some(f.trunc() as i64),
        Some(Bound::Float(_)) | None => None,
    })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionDescriptor {
    /// Unique within one widget; derives the `input-<id>` element id.
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Form name carried by the control's input element.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<InitialValue>,
    #[serde(
        default,
        deserialize_with = "lenient_bound",
        skip_serializing_if = "Option::is_none"
    )]
    pub min: Option<i64>,
    #[serde(
        default,
        deserialize_with = "lenient_bound",
        skip_serializing_if = "Option::is_none"
    )]
    pub max: Option<i64>,
}

impl OptionDescriptor {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            description: None,
            name: None,
            value: None,
            min: None,
            max: None,
        }
    }

    /// Integer stepper over `[min, max]`.
    pub fn stepper(
        id: impl Into<String>,
        label: impl Into<String>,
        min: i64,
        max: Option<i64>,
        value: i64,
    ) -> Self {
        Self {
            min: Some(min),
            max,
            value: Some(value.into()),
            ..Self::new(id, label)
        }
    }

    /// Boolean switch (`min: 0, max: 1`).
    pub fn switch(id: impl Into<String>, label: impl Into<String>, on: bool) -> Self {
        Self {
            min: Some(0),
            max: Some(1),
            value: Some(on.into()),
            ..Self::new(id, label)
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn kind(&self) -> ControlKind {
        ControlKind::from_bounds(self.min, self.max)
    }

    pub fn bounds(&self) -> StepperBounds {
        StepperBounds::new(self.min, self.max)
    }

    /// Identifier of the value-holding input element.
    pub fn element_id(&self) -> String {
        format!("input-{}", self.id)
    }

    /// Starting control state. A stepper value outside its bounds is pulled
    /// into range; a missing value starts at 0 (then clamped).
    pub fn initial_value(&self) -> ControlValue {
        match self.kind() {
            ControlKind::Switch => {
                ControlValue::Flag(self.value.as_ref().is_some_and(InitialValue::as_flag))
            }
            ControlKind::Stepper => {
                let raw = self.value.as_ref().map_or(0, InitialValue::as_count);
                let bounds = self.bounds();
                if !bounds.contains(raw) {
                    tracing::warn!(
                        id = %self.id,
                        value = raw,
                        min = ?self.min,
                        max = ?self.max,
                        "initial stepper value out of bounds, clamping"
                    );
                }
                ControlValue::Count(bounds.clamp(raw))
            }
        }
    }
}
