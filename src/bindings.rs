//! JavaScript entry point: `new DropdownBox(selector, config)`.
//!
//! The config object carries the same fields as [`DropdownConfig`] in
//! camelCase. `onChange(inputElement, value)` and
//! `onDropdownToggle(summaryElement, panelElement)` receive live DOM
//! elements. An exception thrown by either is rethrown from a timer task, so
//! it reaches the page's error handling without unwinding through the
//! renderer.

use std::cell::OnceCell;
use std::rc::Rc;

use js_sys::{Function, Reflect};
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::config::{DEFAULT_EMPTY_SUMMARY, DropdownConfig, OptionDescriptor};
use crate::control::ControlValue;
use crate::error::{Result, WidgetError};
use crate::mount::Widget;
use crate::{logging, styles};

fn field(config: &JsValue, name: &str) -> Result<JsValue> {
    Reflect::get(config, &JsValue::from_str(name))
        .map_err(|_| WidgetError::InvalidConfig(format!("cannot read `{name}`")))
}

fn callback(config: &JsValue, name: &str) -> Result<Option<Function>> {
    let value = field(config, name)?;
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    value
        .dyn_into::<Function>()
        .map(Some)
        .map_err(|_| WidgetError::InvalidConfig(format!("`{name}` must be a function")))
}

/// Report a callback exception on a fresh task. Throwing from inside the
/// event handler would leave the renderer mid-dispatch.
fn rethrow_later(err: JsValue) {
    tracing::error!(?err, "dropdown callback threw");
    let Some(window) = web_sys::window() else {
        return;
    };
    let rethrow = Closure::once_into_js(move || -> () {
        wasm_bindgen::throw_val(err);
    });
    if let Err(err) = window.set_timeout_with_callback(rethrow.unchecked_ref()) {
        tracing::debug!(?err, "could not schedule callback exception");
    }
}

fn element_or_null(element: Option<Element>) -> JsValue {
    element.map(JsValue::from).unwrap_or(JsValue::NULL)
}

fn to_js(value: ControlValue) -> JsValue {
    match value {
        ControlValue::Count(n) => JsValue::from_f64(n as f64),
        ControlValue::Flag(b) => JsValue::from_bool(b),
    }
}

/// Data fields only; callbacks are wired separately once the mount point is known.
fn data_config(config: &JsValue) -> Result<DropdownConfig> {
    if config.is_undefined() || config.is_null() {
        return Ok(DropdownConfig::default());
    }

    let options = field(config, "options")?;
    let options: Vec<OptionDescriptor> = if options.is_undefined() || options.is_null() {
        Vec::new()
    } else {
        serde_wasm_bindgen::from_value(options)?
    };

    Ok(DropdownConfig {
        options,
        class_name: field(config, "className")?.as_string(),
        empty_summary_text: field(config, "emptySummaryText")?
            .as_string()
            .unwrap_or_else(|| DEFAULT_EMPTY_SUMMARY.to_string()),
        ..DropdownConfig::default()
    })
}

#[wasm_bindgen(js_name = DropdownBox)]
pub struct JsDropdownBox {
    widget: Widget,
}

#[wasm_bindgen(js_class = DropdownBox)]
impl JsDropdownBox {
    #[wasm_bindgen(constructor)]
    pub fn new(selector: &str, config: JsValue) -> Result<JsDropdownBox, JsError> {
        logging::init(tracing::Level::INFO);

        let mut rust_config = data_config(&config)?;
        let (on_change, on_toggle) = if config.is_object() {
            (callback(&config, "onChange")?, callback(&config, "onDropdownToggle")?)
        } else {
            (None, None)
        };

        let root = resolve(selector)?;
        let mounted: Rc<OnceCell<Widget>> = Rc::new(OnceCell::new());

        if let Some(func) = on_change {
            let mounted = mounted.clone();
            rust_config = rust_config.on_change(move |handle, value| {
                let input = mounted
                    .get()
                    .and_then(|widget| widget.control_element(&handle.option_id));
                if let Err(err) = func.call2(&JsValue::NULL, &element_or_null(input), &to_js(value))
                {
                    rethrow_later(err);
                }
            });
        }

        if let Some(func) = on_toggle {
            let mounted = mounted.clone();
            rust_config = rust_config.on_dropdown_toggle(move |_| {
                let widget = mounted.get();
                let summary = widget.and_then(Widget::summary_element);
                let panel = widget.and_then(Widget::panel_element);
                if let Err(err) =
                    func.call2(&JsValue::NULL, &element_or_null(summary), &element_or_null(panel))
                {
                    rethrow_later(err);
                }
            });
        }

        let widget = Widget::mount_into(root, selector, rust_config);
        let _ = mounted.set(widget.clone());
        Ok(JsDropdownBox { widget })
    }

    /// Current summary text.
    #[wasm_bindgen(getter)]
    pub fn summary(&self) -> Option<String> {
        self.widget.summary()
    }

    #[wasm_bindgen(getter, js_name = isOpen)]
    pub fn is_open(&self) -> bool {
        self.widget.is_open()
    }

    /// Number for steppers, boolean for switches, `undefined` for unknown ids.
    pub fn value(&self, id: &str) -> JsValue {
        self.widget.value(id).map(to_js).unwrap_or(JsValue::UNDEFINED)
    }

    #[wasm_bindgen(getter)]
    pub fn root(&self) -> Element {
        self.widget.root().clone()
    }
}

fn resolve(selector: &str) -> Result<Element> {
    let document = crate::mount::document()?;
    crate::mount::resolve_mount(&document, selector)
}

/// Install the default stylesheet into the current document.
#[wasm_bindgen(js_name = injectStyles)]
pub fn inject_styles() -> Result<(), JsError> {
    let document = crate::mount::document()?;
    styles::inject(&document)?;
    Ok(())
}
