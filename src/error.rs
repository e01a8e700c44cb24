//! UI Error Types
//!
//! Failures inside the page components. None of these reach the page:
//! handlers log them and fall back to a no-op.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Common result type for DOM helpers
pub type UiResult<T> = Result<T, UiError>;

#[derive(Debug, Error)]
pub enum UiError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("missing element: {0}")]
    MissingElement(String),

    #[error("javascript error: {0}")]
    Js(String),

    #[error("invalid page config: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        UiError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
