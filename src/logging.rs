//! Panic hook and tracing subscriber for pages that embed the widget
//! without a Dioxus app of their own.

use std::sync::Once;

static INIT: Once = Once::new();

/// Route panics and `tracing` output to the browser console. Safe to call
/// more than once; only the first call has an effect.
pub fn init(level: tracing::Level) {
    INIT.call_once(|| {
        console_error_panic_hook::set_once();
        // Another subscriber already installed by the host is fine.
        let _ = dioxus::logger::init(level);
    });
}
