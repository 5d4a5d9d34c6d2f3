use thiserror::Error;

/// Every failure on the site falls into one of these, and every one of them
/// degrades to a logged no-op or a static fallback.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SiteError {
    #[error("network request failed: {0}")]
    Network(String),
    #[error("content not available: {0}")]
    MissingContent(String),
    #[error("document generation failed: {0}")]
    Generation(String),
}

impl From<gloo_net::Error> for SiteError {
    fn from(e: gloo_net::Error) -> Self {
        SiteError::Network(e.to_string())
    }
}

impl From<wasm_bindgen::JsValue> for SiteError {
    fn from(e: wasm_bindgen::JsValue) -> Self {
        SiteError::Generation(format!("{:?}", e))
    }
}
