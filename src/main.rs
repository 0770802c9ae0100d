use dioxus::prelude::*;
use dropdown_box::styles::STYLESHEET;
use dropdown_box::{DropdownBox, DropdownConfig, OptionDescriptor};

const MAX_LOG: usize = 12;

fn guest_options() -> Vec<OptionDescriptor> {
    vec![
        OptionDescriptor::stepper("adults", "Adults", 1, Some(16), 2)
            .with_description("Ages 13 or above")
            .with_name("adults"),
        OptionDescriptor::stepper("children", "Children", 0, Some(15), 0)
            .with_description("Ages 2 - 12")
            .with_name("children"),
        OptionDescriptor::stepper("infants", "Infants", 0, Some(5), 0)
            .with_description("Under 2"),
        OptionDescriptor::switch("pets", "Pets", false)
            .with_description("Bringing a service animal?"),
    ]
}

#[allow(non_snake_case)]
fn App() -> Element {
    let log = use_signal(Vec::<String>::new);

    let config = use_hook(|| {
        DropdownConfig::new(guest_options())
            .class_name("guests")
            .empty_summary_text("Add guests")
            .on_change(move |handle, value| {
                let mut log = log;
                let mut lines = log.write();
                lines.push(format!("{} = {value}", handle.option_id));
                let overflow = lines.len().saturating_sub(MAX_LOG);
                lines.drain(..overflow);
            })
            .on_dropdown_toggle(move |panel| {
                let mut log = log;
                let state = if panel.visible { "opened" } else { "closed" };
                log.write().push(format!("panel {state}"));
            })
    });

    rsx! {
        style { {STYLESHEET} }
        div {
            id: "main",
            style: "min-height: 100vh; background: #0f0f1a; display: flex; flex-direction: column; align-items: center; padding: 60px 20px; gap: 32px; font-family: system-ui, -apple-system, sans-serif;",

            h1 {
                style: "font-size: 32px; font-weight: 700; color: #e5e7eb; margin: 0;",
                "Dropdown Box"
            }

            DropdownBox { config }

            div {
                id: "event-log",
                style: "width: 320px; background: #1a1a2e; border: 1px solid #2a2a4a; border-radius: 8px; padding: 12px 16px; color: #9ca3af; font-size: 13px; font-family: ui-monospace, monospace;",
                if log.read().is_empty() {
                    div { "no events yet" }
                }
                for (i, line) in log.read().iter().enumerate() {
                    div { key: "{i}", "{line}" }
                }
            }
        }
    }
}

fn main() {
    console_error_panic_hook::set_once();
    dioxus::launch(App);
}
