//! Widget configuration
//!
//! `DropdownConfig` replaces the loose options object with named fields and
//! fixed defaults. Callbacks are not part of the serialized form; attach them
//! with the builder methods after loading the rest from JSON or JS.

mod descriptor;
mod handles;

pub use descriptor::{InitialValue, OptionDescriptor};
pub use handles::{ChangeCallback, ControlHandle, PanelToggle, ToggleCallback};

use serde::{Deserialize, Deserializer};

use crate::control::ControlValue;
use crate::error::Result;

pub const DEFAULT_EMPTY_SUMMARY: &str = "Select an option";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DropdownConfig {
    /// Rendered in declaration order.
    #[serde(deserialize_with = "null_as_empty")]
    pub options: Vec<OptionDescriptor>,
    #[serde(skip)]
    pub on_change: Option<ChangeCallback>,
    #[serde(skip)]
    pub on_dropdown_toggle: Option<ToggleCallback>,
    /// Extra class on the root box element.
    pub class_name: Option<String>,
    /// Shown when no option contributes to the summary.
    #[serde(deserialize_with = "text_or_default")]
    pub empty_summary_text: String,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// `null` reads like a missing field.
fn text_or_default<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?
        .unwrap_or_else(|| DEFAULT_EMPTY_SUMMARY.to_string()))
}

impl Default for DropdownConfig {
    fn default() -> Self {
        Self {
            options: Vec::new(),
            on_change: None,
            on_dropdown_toggle: None,
            class_name: None,
            empty_summary_text: DEFAULT_EMPTY_SUMMARY.to_string(),
        }
    }
}

impl DropdownConfig {
    pub fn new(options: Vec<OptionDescriptor>) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Parse the data half of a configuration (`options`, `className`,
    /// `emptySummaryText`).
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn on_change(mut self, f: impl Fn(&ControlHandle, ControlValue) + 'static) -> Self {
        self.on_change = Some(ChangeCallback::new(f));
        self
    }

    pub fn on_dropdown_toggle(mut self, f: impl Fn(PanelToggle) + 'static) -> Self {
        self.on_dropdown_toggle = Some(ToggleCallback::new(f));
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn empty_summary_text(mut self, text: impl Into<String>) -> Self {
        self.empty_summary_text = text.into();
        self
    }

    /// `dropdownbox box <className>`
    pub fn root_class(&self) -> String {
        match self.class_name.as_deref().map(str::trim) {
            Some(extra) if !extra.is_empty() => format!("dropdownbox box {extra}"),
            _ => "dropdownbox box".to_string(),
        }
    }

    /// Ids that appear more than once; their `input-<id>` elements would collide.
    pub fn duplicate_ids(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        let mut dupes = Vec::new();
        for option in &self.options {
            if !seen.insert(option.id.as_str()) && !dupes.contains(&option.id.as_str()) {
                dupes.push(option.id.as_str());
            }
        }
        dupes
    }
}
