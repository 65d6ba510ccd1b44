use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures talking to the browser. None of these are fatal for the page.
#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no root element")]
    NoRootElement,
    #[error("local storage unavailable")]
    NoStorage,
    #[error("{context}: {message}")]
    Js {
        context: &'static str,
        message: String,
    },
}

impl DomError {
    /// Wraps a thrown JS value with what we were doing at the time.
    pub fn js(context: &'static str) -> impl FnOnce(JsValue) -> DomError {
        move |value| DomError::Js {
            context,
            message: value
                .as_string()
                .unwrap_or_else(|| format!("{:?}", value)),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown theme `{0}`")]
pub struct ParseThemeError(pub String);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown page variant `{0}`")]
pub struct ParseVariantError(pub String);
