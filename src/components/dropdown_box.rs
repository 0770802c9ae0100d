use dioxus::prelude::*;
use dioxus::web::WebEventExt;

use crate::config::{ControlHandle, DropdownConfig, OptionDescriptor, PanelToggle};
use crate::control::ControlValue;
use crate::summary::summarize;

use super::{OptionRow, is_activation_key};

/// Configuration and per-option state captured on the first render.
struct Controls {
    config: DropdownConfig,
    values: Vec<Signal<ControlValue>>,
}

impl Controls {
    /// Summary from the latest values, without subscribing the caller.
    fn current_summary(&self) -> String {
        summarize(
            self.config
                .options
                .iter()
                .zip(self.values.iter().map(|v| *v.peek())),
            &self.config.empty_summary_text,
        )
    }
}

fn handle_for(option: &OptionDescriptor) -> ControlHandle {
    ControlHandle {
        option_id: option.id.clone(),
        element_id: option.element_id(),
    }
}

fn panel_style(open: bool) -> &'static str {
    if open { "display: block;" } else { "display: none;" }
}

/// Rewrite the label's text node in place. The renderer holds on to that node
/// and writes the same text into it on its next pass.
fn write_summary(label: &web_sys::Element, text: &str) {
    match label.first_child() {
        Some(node) => node.set_node_value(Some(text)),
        None => label.set_text_content(Some(text)),
    }
}

fn write_attr(element: &web_sys::Element, name: &str, value: &str) {
    if let Err(err) = element.set_attribute(name, value) {
        tracing::debug!(name, ?err, "attribute write rejected");
    }
}

/// Summary label plus a collapsible panel of option rows.
///
/// The options list is read once; each option gets one signal that lives as
/// long as the widget and is handed to its control. Callbacks run inside the
/// triggering event handler, after the summary, the stepper display and the
/// panel style have been written to the page.
#[component]
pub fn DropdownBox(config: DropdownConfig) -> Element {
    let controls = use_hook(|| {
        for id in config.duplicate_ids() {
            tracing::warn!(id, "duplicate option id, element ids will collide");
        }
        let values = config
            .options
            .iter()
            .map(|option| Signal::new(option.initial_value()))
            .collect();
        CopyValue::new(Controls {
            config: config.clone(),
            values,
        })
    });
    let mut open = use_signal(|| false);
    let mut summary_label = use_signal(|| None::<web_sys::Element>);
    let mut panel = use_signal(|| None::<web_sys::Element>);

    let (summary, rows) = {
        let controls = controls.read();
        let summary = summarize(
            controls
                .config
                .options
                .iter()
                .zip(controls.values.iter().map(|v| *v.read())),
            &controls.config.empty_summary_text,
        );
        let rows: Vec<(usize, OptionDescriptor, Signal<ControlValue>)> = controls
            .config
            .options
            .iter()
            .cloned()
            .zip(controls.values.iter().copied())
            .enumerate()
            .map(|(index, (option, value))| (index, option, value))
            .collect();
        (summary, rows)
    };

    let is_open = open();
    let mut toggle_panel = move || {
        let visible = !*open.peek();
        open.set(visible);
        tracing::debug!(visible, "dropdown toggled");

        if let Some(label) = summary_label.peek().as_ref() {
            write_attr(label, "aria-expanded", if visible { "true" } else { "false" });
        }
        if let Some(panel) = panel.peek().as_ref() {
            write_attr(panel, "style", panel_style(visible));
        }

        let callback = controls.read().config.on_dropdown_toggle.clone();
        if let Some(cb) = callback {
            cb.call(PanelToggle { visible });
        }
    };

    let notify_change = move |index: usize, value: ControlValue| {
        let (handle, callback, text) = {
            let controls = controls.read();
            let handle = controls.config.options.get(index).map(handle_for);
            (handle, controls.config.on_change.clone(), controls.current_summary())
        };
        if let Some(label) = summary_label.peek().as_ref() {
            write_summary(label, &text);
        }
        if let (Some(cb), Some(handle)) = (callback, handle) {
            cb.call(&handle, value);
        }
    };

    rsx! {
        div {
            class: config.root_class(),
            div {
                class: "inputBox",

                span {
                    class: "summary noselect js-toggle-drop",
                    role: "button",
                    tabindex: "0",
                    "aria-expanded": "{is_open}",
                    onmounted: move |evt: MountedEvent| {
                        summary_label.set(evt.data().try_as_web_event());
                    },
                    onclick: move |_| toggle_panel(),
                    onkeydown: move |evt| {
                        if is_activation_key(&evt) {
                            evt.prevent_default();
                            toggle_panel();
                        }
                    },
                    "{summary}"
                }

                div {
                    class: "options js-drop",
                    style: panel_style(is_open),
                    onmounted: move |evt: MountedEvent| {
                        panel.set(evt.data().try_as_web_event());
                    },

                    for (index, option, value) in rows {
                        OptionRow {
                            key: "{option.id}",
                            option: option.clone(),
                            value,
                            on_change: move |value: ControlValue| notify_change(index, value),
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_EMPTY_SUMMARY;

    fn render(config: DropdownConfig) -> String {
        let mut dom = VirtualDom::new_with_props(
            DropdownBox,
            DropdownBoxProps::builder().config(config).build(),
        );
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn renders_initial_stepper_value_and_summary() {
        let html = render(DropdownConfig::new(vec![OptionDescriptor::stepper(
            "a",
            "Volume",
            0,
            Some(10),
            3,
        )]));
        assert!(html.contains(r#"class="summary noselect js-toggle-drop""#));
        assert!(html.contains(">3 Volume<"));
        assert!(html.contains(r#"class="tbx_stepper input-a""#));
        assert!(html.contains(r#"id="input-a""#));
        assert!(html.contains(r#"value="3""#));
        assert!(html.contains(r#"data-min="0""#));
        assert!(html.contains(r#"data-max="10""#));
    }

    #[test]
    fn empty_options_show_placeholder() {
        let html = render(DropdownConfig::default());
        assert!(html.contains(&format!(">{DEFAULT_EMPTY_SUMMARY}<")));
    }

    #[test]
    fn custom_placeholder_and_root_class() {
        let html = render(
            DropdownConfig::default()
                .class_name("guests")
                .empty_summary_text("Nobody yet"),
        );
        assert!(html.contains(r#"class="dropdownbox box guests""#));
        assert!(html.contains(">Nobody yet<"));
    }

    #[test]
    fn panel_starts_hidden() {
        let html = render(DropdownConfig::default());
        assert!(html.contains(r#"class="options js-drop""#));
        assert!(html.contains("display: none;"));
        assert!(!html.contains("display: block;"));
    }

    #[test]
    fn switch_option_renders_checkbox() {
        let html = render(DropdownConfig::new(vec![OptionDescriptor::switch(
            "b", "Enabled", false,
        )]));
        assert!(html.contains(r#"class="switch""#));
        assert!(html.contains(r#"class="tbx_switch input-b""#));
        assert!(html.contains(r#"type="checkbox""#));
        assert!(!html.contains("tbx_stepper"));
        assert!(html.contains(&format!(">{DEFAULT_EMPTY_SUMMARY}<")));
    }

    #[test]
    fn zero_stepper_and_active_switch_summarize_to_label() {
        let html = render(DropdownConfig::new(vec![
            OptionDescriptor::stepper("kids", "Children", 0, Some(4), 0),
            OptionDescriptor::switch("pets", "Pets", true),
        ]));
        // once as the row label, once as the whole summary
        assert_eq!(html.matches(">Pets<").count(), 2);
        assert!(!html.contains("0 Children"));
        assert!(!html.contains(DEFAULT_EMPTY_SUMMARY));
    }

    #[test]
    fn stepper_at_min_disables_decrement_only() {
        let html = render(DropdownConfig::new(vec![OptionDescriptor::stepper(
            "a",
            "Volume",
            0,
            Some(10),
            0,
        )]));
        assert!(html.contains("step down noselect is-disabled"));
        assert!(html.contains(r#"class="step up noselect""#));
    }

    #[test]
    fn rows_render_label_and_optional_description() {
        let html = render(DropdownConfig::new(vec![
            OptionDescriptor::stepper("adults", "Adults", 1, Some(8), 2)
                .with_description("Ages 13 or above"),
            OptionDescriptor::stepper("kids", "Children", 0, Some(8), 0),
        ]));
        assert_eq!(html.matches(r#"class="option""#).count(), 2);
        assert_eq!(html.matches(r#"class="option-desc""#).count(), 1);
        assert!(html.contains("Ages 13 or above"));
        assert!(html.contains(r#"class="col1""#));
        assert!(html.contains(r#"class="col2""#));
    }

    #[test]
    fn out_of_range_initial_value_renders_clamped() {
        let html = render(DropdownConfig::new(vec![OptionDescriptor::stepper(
            "a",
            "Volume",
            0,
            Some(10),
            99,
        )]));
        assert!(html.contains(r#"value="10""#));
        assert!(html.contains(">10 Volume<"));
    }

    #[test]
    fn fractional_json_bounds_render_a_switch() {
        let config = DropdownConfig::from_json(
            r#"{"options":[{"id":"b","label":"Enabled","min":0.5,"max":1,"value":true}]}"#,
        )
        .unwrap();
        let html = render(config);
        assert!(html.contains(r#"class="tbx_switch input-b""#));
        assert!(html.contains(">Enabled<"));
    }

    #[test]
    fn handles_carry_element_ids() {
        let handle = handle_for(&OptionDescriptor::stepper("kids", "Children", 0, None, 0));
        assert_eq!(handle.option_id, "kids");
        assert_eq!(handle.element_id, "input-kids");
    }

    #[test]
    fn panel_style_flips() {
        assert_eq!(panel_style(false), "display: none;");
        assert_eq!(panel_style(true), "display: block;");
    }
}
