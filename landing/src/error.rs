use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures while wiring the page to the browser.
#[derive(Debug, Error)]
pub enum LandingError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("document has no body")]
    NoBody,

    #[error("document has no head")]
    NoHead,

    #[error("DOM call failed: {0}")]
    Dom(String),
}

impl From<JsValue> for LandingError {
    fn from(value: JsValue) -> Self {
        LandingError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub type Result<T> = std::result::Result<T, LandingError>;
