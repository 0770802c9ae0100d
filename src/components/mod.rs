//! Dioxus components rendering the widget's DOM contract.

mod dropdown_box;
mod option_row;
mod stepper;
mod switch;

pub use dropdown_box::{DropdownBox, DropdownBoxProps};
pub use option_row::OptionRow;
pub use stepper::Stepper;
pub use switch::Switch;

use dioxus::prelude::*;

/// Enter and Space activate focusable affordances like a click.
pub(crate) fn is_activation_key(evt: &KeyboardEvent) -> bool {
    match evt.key() {
        Key::Enter => true,
        Key::Character(c) => c == " ",
        _ => false,
    }
}
