//! Default look for the widget's class contract.
//!
//! Nothing is injected implicitly. Hosts either ship `STYLESHEET` with their
//! own assets or call [`inject`] once at startup.

use wasm_bindgen::JsCast;
use web_sys::{Document, Node};

use crate::error::{Result, WidgetError};

const MARKER_ATTR: &str = "data-dropdownbox-styles";
const MARKER_SELECTOR: &str = "style[data-dropdownbox-styles]";

pub const STYLESHEET: &str = r#"
.dropdownbox.box {
  position: relative;
  display: inline-block;
  min-width: 260px;
  font-family: system-ui, -apple-system, sans-serif;
  font-size: 14px;
  color: #111827;
}

.dropdownbox .inputBox {
  position: relative;
}

.dropdownbox .summary {
  display: block;
  padding: 10px 32px 10px 14px;
  border: 1px solid #d1d5db;
  border-radius: 6px;
  background: #ffffff;
  cursor: pointer;
  white-space: nowrap;
  overflow: hidden;
  text-overflow: ellipsis;
}

.dropdownbox .options {
  position: absolute;
  top: calc(100% + 4px);
  left: 0;
  right: 0;
  z-index: 10;
  padding: 6px 0;
  border: 1px solid #d1d5db;
  border-radius: 6px;
  background: #ffffff;
  box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15);
}

.dropdownbox .option {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 12px;
  padding: 8px 14px;
}

.dropdownbox .col1 {
  display: flex;
  flex-direction: column;
}

.dropdownbox .option-desc {
  color: #6b7280;
  font-size: 12px;
}

.dropdownbox .stepper {
  display: flex;
  align-items: center;
  gap: 6px;
}

.dropdownbox .step {
  width: 28px;
  height: 28px;
  line-height: 26px;
  text-align: center;
  border: 1px solid #9ca3af;
  border-radius: 50%;
  cursor: pointer;
}

.dropdownbox .step.is-disabled {
  opacity: 0.35;
  cursor: default;
}

.dropdownbox .tbx_stepper {
  width: 32px;
  border: none;
  text-align: center;
  background: transparent;
}

.dropdownbox .switch {
  position: relative;
  display: inline-block;
  width: 44px;
  height: 24px;
}

.dropdownbox .switch input {
  opacity: 0;
  width: 0;
  height: 0;
}

.dropdownbox .switch .slider {
  position: absolute;
  inset: 0;
  border-radius: 12px;
  background: #d1d5db;
  cursor: pointer;
  transition: background 0.15s;
}

.dropdownbox .switch .slider::before {
  content: "";
  position: absolute;
  top: 2px;
  left: 2px;
  width: 20px;
  height: 20px;
  border-radius: 50%;
  background: #ffffff;
  box-shadow: 0 1px 3px rgba(0, 0, 0, 0.2);
  transition: left 0.15s;
}

.dropdownbox .switch input:checked + .slider {
  background: #3b82f6;
}

.dropdownbox .switch input:checked + .slider::before {
  left: 22px;
}

.noselect {
  user-select: none;
}
"#;

/// Append `STYLESHEET` to `<head>` unless a previous call already did.
pub fn inject(document: &Document) -> Result<()> {
    if document
        .query_selector(MARKER_SELECTOR)
        .map_err(WidgetError::dom)?
        .is_some()
    {
        return Ok(());
    }

    let head = document
        .head()
        .ok_or_else(|| WidgetError::Dom("document has no <head>".to_string()))?;

    let style = document.create_element("style").map_err(WidgetError::dom)?;
    style.set_attribute(MARKER_ATTR, "").map_err(WidgetError::dom)?;
    style.set_text_content(Some(STYLESHEET));
    head.append_child(&style.unchecked_into::<Node>())
        .map_err(WidgetError::dom)?;

    tracing::debug!("dropdown box stylesheet injected");
    Ok(())
}
