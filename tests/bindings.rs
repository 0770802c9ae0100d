//! Browser tests for the JavaScript constructor: `wasm-pack test --headless --firefox`
#![cfg(target_arch = "wasm32")]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use dropdown_box::DEFAULT_EMPTY_SUMMARY;
use dropdown_box::bindings::JsDropdownBox;
use gloo_timers::future::TimeoutFuture;
use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

fn fresh_mount(id: &str) -> Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let el = document.create_element("div").unwrap();
    el.set_id(id);
    document.body().unwrap().append_child(&el).unwrap();
    el
}

async fn settle() {
    TimeoutFuture::new(50).await;
}

fn click(root: &Element, selector: &str) {
    root.query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element for {selector}"))
        .unchecked_into::<HtmlElement>()
        .click();
}

fn set(target: &Object, key: &str, value: &JsValue) {
    Reflect::set(target, &JsValue::from_str(key), value).unwrap();
}

/// `{ options: [volume stepper, enabled switch] }`
fn guest_config() -> Object {
    let volume = Object::new();
    set(&volume, "id", &"a".into());
    set(&volume, "label", &"Volume".into());
    set(&volume, "min", &0.into());
    set(&volume, "max", &10.into());
    set(&volume, "value", &3.into());

    let enabled = Object::new();
    set(&enabled, "id", &"b".into());
    set(&enabled, "label", &"Enabled".into());
    set(&enabled, "min", &0.into());
    set(&enabled, "max", &1.into());

    let config = Object::new();
    set(&config, "options", &Array::of2(&volume, &enabled));
    config
}

#[wasm_bindgen_test]
fn missing_mount_throws_and_leaves_page_alone() {
    let body = web_sys::window().unwrap().document().unwrap().body().unwrap();
    let before = body.inner_html();

    assert!(JsDropdownBox::new("#nowhere", guest_config().into()).is_err());
    assert_eq!(body.inner_html(), before);
}

#[wasm_bindgen_test]
fn non_function_callback_is_rejected() {
    fresh_mount("js-bad-callback");
    let config = guest_config();
    set(&config, "onChange", &"not a function".into());

    assert!(JsDropdownBox::new("#js-bad-callback", config.into()).is_err());
}

#[wasm_bindgen_test]
fn missing_or_partial_config_takes_defaults() {
    fresh_mount("js-undefined");
    let widget = JsDropdownBox::new("#js-undefined", JsValue::UNDEFINED).unwrap();
    assert_eq!(widget.summary().as_deref(), Some(DEFAULT_EMPTY_SUMMARY));

    fresh_mount("js-null");
    let widget = JsDropdownBox::new("#js-null", JsValue::NULL).unwrap();
    assert_eq!(widget.summary().as_deref(), Some(DEFAULT_EMPTY_SUMMARY));

    fresh_mount("js-partial");
    let config = Object::new();
    set(&config, "className", &"guests".into());
    set(&config, "emptySummaryText", &JsValue::NULL);
    let widget = JsDropdownBox::new("#js-partial", config.into()).unwrap();
    assert_eq!(widget.summary().as_deref(), Some(DEFAULT_EMPTY_SUMMARY));
    let root = widget.root().first_element_child().unwrap();
    assert_eq!(root.class_name(), "dropdownbox box guests");
}

#[wasm_bindgen_test]
fn fractional_bounds_still_make_a_switch() {
    fresh_mount("js-fractional");
    let option = Object::new();
    set(&option, "id", &"b".into());
    set(&option, "label", &"Enabled".into());
    set(&option, "min", &JsValue::from_f64(0.5));
    set(&option, "max", &1.into());
    set(&option, "value", &true.into());
    let config = Object::new();
    set(&config, "options", &Array::of1(&option));

    let widget = JsDropdownBox::new("#js-fractional", config.into()).unwrap();

    assert_eq!(widget.value("b").as_bool(), Some(true));
    assert_eq!(widget.summary().as_deref(), Some("Enabled"));
}

#[wasm_bindgen_test]
async fn on_change_receives_input_element_and_value() {
    let mount = fresh_mount("js-change");
    let calls = Rc::new(RefCell::new(Vec::<(JsValue, JsValue)>::new()));
    let sink = calls.clone();
    let on_change = Closure::<dyn Fn(JsValue, JsValue)>::new(move |el, value| {
        sink.borrow_mut().push((el, value));
    });
    let config = guest_config();
    set(&config, "onChange", on_change.as_ref());

    let widget = JsDropdownBox::new("#js-change", config.into()).unwrap();
    settle().await;

    click(&mount, ".step.up");
    click(&mount, ".tbx_switch");

    let calls = calls.borrow();
    assert_eq!(calls.len(), 2);

    let input = calls[0].0.clone().dyn_into::<HtmlInputElement>().unwrap();
    assert_eq!(input.id(), "input-a");
    assert_eq!(input.value(), "4");
    assert_eq!(calls[0].1.as_f64(), Some(4.0));

    let checkbox = calls[1].0.clone().dyn_into::<HtmlInputElement>().unwrap();
    assert_eq!(checkbox.id(), "input-b");
    assert!(checkbox.checked());
    assert_eq!(calls[1].1.as_bool(), Some(true));

    assert_eq!(widget.summary().as_deref(), Some("4 Volume, Enabled"));
    assert_eq!(widget.value("a").as_f64(), Some(4.0));
    assert!(widget.value("missing").is_undefined());
}

#[wasm_bindgen_test]
async fn on_dropdown_toggle_receives_summary_and_panel() {
    let mount = fresh_mount("js-toggle");
    let calls = Rc::new(RefCell::new(Vec::<(JsValue, JsValue)>::new()));
    let sink = calls.clone();
    let on_toggle = Closure::<dyn Fn(JsValue, JsValue)>::new(move |summary, panel| {
        sink.borrow_mut().push((summary, panel));
    });
    let config = guest_config();
    set(&config, "onDropdownToggle", on_toggle.as_ref());

    let widget = JsDropdownBox::new("#js-toggle", config.into()).unwrap();
    settle().await;

    click(&mount, ".js-toggle-drop");

    let calls = calls.borrow();
    assert_eq!(calls.len(), 1);
    let summary = calls[0].0.clone().dyn_into::<Element>().unwrap();
    let panel = calls[0].1.clone().dyn_into::<Element>().unwrap();
    assert!(summary.class_list().contains("js-toggle-drop"));
    assert!(panel.class_list().contains("js-drop"));
    assert_eq!(panel.get_attribute("style").as_deref(), Some("display: block;"));
    assert!(widget.is_open());
}

#[wasm_bindgen_test]
async fn throwing_callback_leaves_widget_working() {
    let mount = fresh_mount("js-throwing");
    let reported = Rc::new(Cell::new(0));
    let counter = reported.clone();
    let on_error = Closure::<dyn Fn() -> bool>::new(move || {
        counter.set(counter.get() + 1);
        true
    });
    let window = web_sys::window().unwrap();
    window.set_onerror(Some(on_error.as_ref().unchecked_ref()));

    let config = guest_config();
    let thrower = Function::new_with_args("el, value", "throw new Error('rejected ' + value)");
    set(&config, "onChange", &thrower);

    let widget = JsDropdownBox::new("#js-throwing", config.into()).unwrap();
    settle().await;

    click(&mount, ".step.up");
    settle().await;
    click(&mount, ".step.up");
    settle().await;

    window.set_onerror(None);

    assert_eq!(widget.summary().as_deref(), Some("5 Volume"));
    assert_eq!(widget.value("a").as_f64(), Some(5.0));
    assert_eq!(reported.get(), 2);
}
