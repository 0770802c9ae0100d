use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WidgetError {
    /// The mount locator matched no element. Nothing in the document was touched.
    #[error("container with selector \"{selector}\" not found")]
    MountNotFound { selector: String },

    #[error("no browser document available")]
    NoDocument,

    #[error("invalid widget configuration: {0}")]
    InvalidConfig(String),

    #[error("DOM operation failed: {0}")]
    Dom(String),
}

impl WidgetError {
    pub(crate) fn mount_not_found(selector: &str) -> Self {
        Self::MountNotFound {
            selector: selector.to_string(),
        }
    }

    /// Wrap a JS exception thrown by a web-sys call.
    pub(crate) fn dom(err: wasm_bindgen::JsValue) -> Self {
        Self::Dom(err.as_string().unwrap_or_else(|| format!("{err:?}")))
    }
}

impl From<serde_json::Error> for WidgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidConfig(err.to_string())
    }
}

impl From<serde_wasm_bindgen::Error> for WidgetError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        Self::InvalidConfig(err.to_string())
    }
}

pub type Result<T, E = WidgetError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mount_not_found_names_selector() {
        let err = WidgetError::mount_not_found("#missing");
        assert_eq!(err.to_string(), "container with selector \"#missing\" not found");
    }

    #[test]
    fn json_errors_become_invalid_config() {
        let err: WidgetError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, WidgetError::InvalidConfig(_)));
    }
}
