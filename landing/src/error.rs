//! DOM plumbing errors.
//!
//! Progress arithmetic cannot fail; only talking to the browser can.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug)]
pub enum DomError {
    #[error("no global window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body element")]
    NoBody,
    #[error("failed to set `{property}` on body style: {detail}")]
    Style {
        property: &'static str,
        detail: String,
    },
    #[error("failed to register `{event}` listener: {detail}")]
    Listener { event: &'static str, detail: String },
    #[error("element update failed: {detail}")]
    Element { detail: String },
}

impl DomError {
    pub(crate) fn style(property: &'static str, err: JsValue) -> Self {
        Self::Style {
            property,
            detail: describe(&err),
        }
    }

    pub(crate) fn listener(event: &'static str, err: JsValue) -> Self {
        Self::Listener {
            event,
            detail: describe(&err),
        }
    }

    pub(crate) fn element(err: JsValue) -> Self {
        Self::Element {
            detail: describe(&err),
        }
    }
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
