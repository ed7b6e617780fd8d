use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures while wiring behaviors to the page.
///
/// None of these reach the user: an installer that hits one logs it at
/// debug level and leaves its behavior uninitialized.
#[derive(Debug, Error, PartialEq)]
pub enum FxError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("no element matches `{0}`")]
    MissingNode(String),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for FxError {
    fn from(value: JsValue) -> Self {
        FxError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub type FxResult<T> = Result<T, FxError>;
