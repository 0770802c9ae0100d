use dioxus::prelude::*;

use crate::control::ControlValue;

#[component]
pub fn Switch(
    option_id: String,
    #[props(!optional)]
    name: Option<String>,
    value: Signal<ControlValue>,
    on_change: EventHandler<ControlValue>,
) -> Element {
    let mut value = value;
    let on = value().as_flag();

    rsx! {
        label {
            class: "switch",
            input {
                r#type: "checkbox",
                class: "tbx_switch input-{option_id}",
                id: "input-{option_id}",
                name,
                checked: on,
                onchange: move |_| {
                    let next = ControlValue::Flag(!value.peek().as_flag());
                    tracing::debug!(after = %next, "switch toggled");
                    value.set(next);
                    on_change.call(next);
                },
            }
            span { class: "slider" }
        }
    }
}
