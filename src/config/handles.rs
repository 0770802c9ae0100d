//! Callback handles passed to `on_change` / `on_dropdown_toggle`.

use std::fmt;
use std::rc::Rc;

use crate::control::ControlValue;

/// Identifies the control that changed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ControlHandle {
    pub option_id: String,
    /// `input-<id>`, the id of the value-holding element.
    pub element_id: String,
}

/// Panel visibility right after a toggle activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelToggle {
    pub visible: bool,
}

/// `on_change(handle, new_value)`
#[derive(Clone)]
pub struct ChangeCallback(Rc<dyn Fn(&ControlHandle, ControlValue)>);

impl ChangeCallback {
    pub fn new(f: impl Fn(&ControlHandle, ControlValue) + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn call(&self, handle: &ControlHandle, value: ControlValue) {
        (self.0)(handle, value)
    }
}

/// `on_dropdown_toggle(panel)`
#[derive(Clone)]
pub struct ToggleCallback(Rc<dyn Fn(PanelToggle)>);

impl ToggleCallback {
    pub fn new(f: impl Fn(PanelToggle) + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn call(&self, panel: PanelToggle) {
        (self.0)(panel)
    }
}

// Props equality: same closure allocation.
impl PartialEq for ChangeCallback {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for ToggleCallback {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for ChangeCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ChangeCallback(..)")
    }
}

impl fmt::Debug for ToggleCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ToggleCallback(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn clones_compare_equal() {
        let cb = ToggleCallback::new(|_| {});
        assert_eq!(cb, cb.clone());
        assert_ne!(cb, ToggleCallback::new(|_| {}));
    }

    #[test]
    fn change_callback_receives_handle_and_value() {
        let seen = Rc::new(Cell::new(0));
        let sink = seen.clone();
        let cb = ChangeCallback::new(move |handle, value| {
            assert_eq!(handle.element_id, "input-a");
            sink.set(value.magnitude());
        });
        let handle = ControlHandle {
            option_id: "a".into(),
            element_id: "input-a".into(),
        };
        cb.call(&handle, ControlValue::Count(4));
        assert_eq!(seen.get(), 4);
    }
}
