//! Mounting into a host page
//!
//! `Widget::mount` resolves a CSS selector, clears the element it finds and
//! launches a dedicated virtual DOM into it. The element's subtree is the
//! source of truth afterwards; the read accessors query it directly instead
//! of keeping a copy of control state.
//!
//! `mount` writes the first frame before returning, so the summary and the
//! control values can be read straight away. The live renderer takes over the
//! subtree in the next microtask, before the browser paints or dispatches
//! another event.

use dioxus::prelude::VirtualDom;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement};

use crate::components::{DropdownBox, DropdownBoxProps};
use crate::config::DropdownConfig;
use crate::control::{ControlValue, parse_display};
use crate::error::{Result, WidgetError};

const SUMMARY_SELECTOR: &str = ".js-toggle-drop";
const PANEL_SELECTOR: &str = ".js-drop";

pub fn document() -> Result<Document> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or(WidgetError::NoDocument)
}

/// First element matching `selector`. A selector the browser rejects
/// resolves to nothing, same as one that matches nothing.
pub fn resolve_mount(document: &Document, selector: &str) -> Result<Element> {
    match document.query_selector(selector) {
        Ok(Some(element)) => Ok(element),
        Ok(None) => Err(WidgetError::mount_not_found(selector)),
        Err(err) => {
            tracing::debug!(selector, ?err, "mount selector rejected");
            Err(WidgetError::mount_not_found(selector))
        }
    }
}

/// Static HTML of the widget's initial state.
fn first_frame(config: DropdownConfig) -> String {
    let mut vdom = VirtualDom::new_with_props(
        DropdownBox,
        DropdownBoxProps::builder().config(config).build(),
    );
    vdom.rebuild_in_place();
    dioxus_ssr::render(&vdom)
}

/// Attribute selector for an element id; ids are caller-supplied and may
/// contain characters that are not valid in `#id` form.
pub(crate) fn id_selector(id: &str) -> String {
    format!("[id=\"{}\"]", id.replace('\\', "\\\\").replace('"', "\\\""))
}

/// A widget mounted into a host page element.
#[derive(Debug, Clone)]
pub struct Widget {
    root: Element,
}

impl Widget {
    /// Mount a widget into the first element matching `selector`.
    ///
    /// Fails with [`WidgetError::MountNotFound`] before touching the document
    /// when nothing matches.
    pub fn mount(selector: &str, config: DropdownConfig) -> Result<Self> {
        let document = document()?;
        let root = resolve_mount(&document, selector)?;
        Ok(Self::mount_into(root, selector, config))
    }

    /// Mount into an element the caller already holds.
    pub fn mount_into(root: Element, selector: &str, config: DropdownConfig) -> Self {
        tracing::debug!(selector, options = config.options.len(), "mounting dropdown box");

        root.set_inner_html(&first_frame(config.clone()));

        let vdom = VirtualDom::new_with_props(
            DropdownBox,
            DropdownBoxProps::builder().config(config).build(),
        );
        let live_root = root.clone();
        wasm_bindgen_futures::spawn_local(async move {
            // The renderer appends to its root; drop the static frame in the
            // same task that builds the live one.
            live_root.set_inner_html("");
            dioxus::web::run(vdom, dioxus::web::Config::new().rootelement(live_root)).await;
        });

        Self { root }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Text currently shown in the summary label.
    pub fn summary(&self) -> Option<String> {
        self.find(SUMMARY_SELECTOR).and_then(|el| el.text_content())
    }

    pub fn summary_element(&self) -> Option<Element> {
        self.find(SUMMARY_SELECTOR)
    }

    pub fn panel_element(&self) -> Option<Element> {
        self.find(PANEL_SELECTOR)
    }

    /// Whether the option panel is currently displayed.
    pub fn is_open(&self) -> bool {
        self.panel_element()
            .and_then(|panel| panel.get_attribute("style"))
            .is_some_and(|style| !style.contains("none"))
    }

    /// Value-holding element of option `id` (`input-<id>`).
    pub fn control_element(&self, id: &str) -> Option<Element> {
        self.find(&id_selector(&format!("input-{id}")))
    }

    /// Read option `id`'s control back from the page. Stepper text that is not
    /// an integer reads as 0.
    pub fn value(&self, id: &str) -> Option<ControlValue> {
        let input = self.control_element(id)?.dyn_into::<HtmlInputElement>().ok()?;
        if input.type_() == "checkbox" {
            Some(ControlValue::Flag(input.checked()))
        } else {
            Some(ControlValue::Count(parse_display(&input.value())))
        }
    }

    fn find(&self, selector: &str) -> Option<Element> {
        self.root.query_selector(selector).ok().flatten()
    }
}
