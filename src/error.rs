//! Errors raised while wiring the particle background into the page.
//!
//! A missing canvas or 2d context is not an error: the background is simply
//! not started. These variants cover host calls failing after that point.

use std::fmt;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq)]
pub enum FieldError {
    /// No global `window` (e.g. running in a worker).
    NoWindow,
    /// The window has no document.
    NoDocument,
    /// A browser API threw or returned something unexpected.
    Host(String),
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::NoWindow => write!(f, "no global window available"),
            FieldError::NoDocument => write!(f, "window has no document"),
            FieldError::Host(msg) => write!(f, "browser call failed: {}", msg),
        }
    }
}

impl std::error::Error for FieldError {}

impl From<JsValue> for FieldError {
    fn from(value: JsValue) -> Self {
        FieldError::Host(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<FieldError> for JsValue {
    fn from(err: FieldError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
