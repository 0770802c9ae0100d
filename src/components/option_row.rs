use dioxus::prelude::*;

use crate::config::OptionDescriptor;
use crate::control::{ControlKind, ControlValue};

use super::{Stepper, Switch};

/// `col1` holds label and description, `col2` the control picked by the
/// descriptor's bounds.
#[component]
pub fn OptionRow(
    option: OptionDescriptor,
    value: Signal<ControlValue>,
    on_change: EventHandler<ControlValue>,
) -> Element {
    let control = match option.kind() {
        ControlKind::Stepper => rsx! {
            Stepper {
                option_id: option.id.clone(),
                name: option.name.clone(),
                bounds: option.bounds(),
                value,
                on_change,
            }
        },
        ControlKind::Switch => rsx! {
            Switch {
                option_id: option.id.clone(),
                name: option.name.clone(),
                value,
                on_change,
            }
        },
    };

    rsx! {
        div {
            class: "option",
            div {
                class: "col1",
                span { class: "option-label", "{option.label}" }
                if let Some(description) = &option.description {
                    span { class: "option-desc", "{description}" }
                }
            }
            div {
                class: "col2",
                {control}
            }
        }
    }
}
