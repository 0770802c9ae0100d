//! Summary label text
//!
//! Always derived from the live control values, never stored.

use crate::config::OptionDescriptor;
use crate::control::ControlValue;

/// One option's share of the summary, or `None` when it contributes nothing.
pub fn contribution(option: &OptionDescriptor, value: ControlValue) -> Option<String> {
    if !value.is_active() {
        return None;
    }
    match value {
        ControlValue::Count(n) => Some(format!("{n} {}", option.label)),
        ControlValue::Flag(_) => Some(option.label.clone()),
    }
}

/// Join contributions in declaration order with `", "`, falling back to
/// `empty_text` when nothing contributes.
pub fn summarize<'a, I>(entries: I, empty_text: &str) -> String
where
    I: IntoIterator<Item = (&'a OptionDescriptor, ControlValue)>,
{
    let parts: Vec<String> = entries
        .into_iter()
        .filter_map(|(option, value)| contribution(option, value))
        .collect();

    if parts.is_empty() {
        empty_text.to_string()
    } else {
        parts.join(", ")
    }
}
