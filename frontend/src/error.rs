use thiserror::Error;

/// Why a third-party SDK could not be brought up. Cloned out to every
/// caller waiting on the same load.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SdkError {
    #[error("failed to load script {url}")]
    ScriptLoad { url: String },
    #[error("{sdk} was not ready after {attempts} attempts")]
    Timeout { sdk: &'static str, attempts: u32 },
    #[error("{sdk} has no API key configured")]
    MissingKey { sdk: &'static str },
    #[error("{sdk}: {message}")]
    Js { sdk: &'static str, message: String },
    #[error("{sdk} loader went away before finishing")]
    Dropped { sdk: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CopyError {
    #[error("no browser window available")]
    NoWindow,
    #[error("clipboard call failed: {0}")]
    Js(String),
    #[error("browser refused the copy command")]
    Rejected,
}

/// Best-effort text for a thrown JS value.
pub fn js_message(value: &wasm_bindgen::JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}
