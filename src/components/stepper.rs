use dioxus::prelude::*;
use dioxus::web::WebEventExt;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::control::{ControlValue, Step, StepperBounds};

use super::is_activation_key;

fn step_class(base: &str, disabled: bool) -> String {
    if disabled {
        format!("{base} noselect is-disabled")
    } else {
        format!("{base} noselect")
    }
}

/// `-` / read-only display / `+`. Disabled affordances still accept
/// activation; the clamp makes it a no-op.
///
/// The display element is updated before `on_change` runs, so handlers that
/// read it back see the new value.
#[component]
pub fn Stepper(
    option_id: String,
    #[props(!optional)]
    name: Option<String>,
    bounds: StepperBounds,
    value: Signal<ControlValue>,
    on_change: EventHandler<ControlValue>,
) -> Element {
    let mut value = value;
    let mut display = use_signal(|| None::<web_sys::Element>);
    let current = value().as_count();
    let down_disabled = bounds.is_disabled(current, Step::Down);
    let up_disabled = bounds.is_disabled(current, Step::Up);

    let mut apply = move |step: Step| {
        let before = value.peek().as_count();
        let after = bounds.step(before, step);
        tracing::debug!(?step, before, after, "stepper activated");
        value.set(ControlValue::Count(after));
        if let Some(input) = display
            .peek()
            .as_ref()
            .and_then(|el| el.dyn_ref::<HtmlInputElement>())
        {
            input.set_value(&after.to_string());
        }
        on_change.call(ControlValue::Count(after));
    };

    rsx! {
        div {
            class: "stepper",
            "data-min": StepperBounds::attr(bounds.min),
            "data-max": StepperBounds::attr(bounds.max),

            span {
                class: step_class("step down", down_disabled),
                "aria-disabled": "{down_disabled}",
                role: "button",
                tabindex: "0",
                onclick: move |_| apply(Step::Down),
                onkeydown: move |evt| {
                    if is_activation_key(&evt) {
                        evt.prevent_default();
                        apply(Step::Down);
                    }
                },
                "-"
            }

            input {
                r#type: "text",
                class: "tbx_stepper input-{option_id}",
                id: "input-{option_id}",
                name,
                value: "{current}",
                readonly: true,
                onmounted: move |evt: MountedEvent| display.set(evt.data().try_as_web_event()),
            }

            span {
                class: step_class("step up", up_disabled),
                "aria-disabled": "{up_disabled}",
                role: "button",
                tabindex: "0",
                onclick: move |_| apply(Step::Up),
                onkeydown: move |evt| {
                    if is_activation_key(&evt) {
                        evt.prevent_default();
                        apply(Step::Up);
                    }
                },
                "+"
            }
        }
    }
}
