//! Dropdown option box
//!
//! A summary label that opens a panel of integer steppers and boolean
//! switches. The label lists every non-zero stepper and every enabled switch
//! in declaration order, or a placeholder when none qualify.
//!
//! Use it as a component inside a Dioxus app:
//!
//! ```ignore
//! rsx! { DropdownBox { config: DropdownConfig::new(options) } }
//! ```
//!
//! or mount it into an existing page element:
//!
//! ```ignore
//! let widget = Widget::mount("#guests", DropdownConfig::new(options))?;
//! ```

pub mod bindings;
pub mod components;
pub mod config;
pub mod control;
pub mod error;
pub mod logging;
pub mod mount;
pub mod styles;
pub mod summary;

pub use components::{DropdownBox, DropdownBoxProps};
pub use config::{
    ControlHandle, DEFAULT_EMPTY_SUMMARY, DropdownConfig, InitialValue, OptionDescriptor,
    PanelToggle,
};
pub use control::{ControlKind, ControlValue, Step, StepperBounds};
pub use error::{Result, WidgetError};
pub use mount::Widget;
