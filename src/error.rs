use wasm_bindgen::JsValue;

/// Error returned by fallible engine operations.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// `mount` was called on a driver that is already mounted.
    #[error("engine is already mounted")]
    AlreadyMounted,
    /// The driver was unmounted and cannot be mounted again.
    #[error("engine has been torn down")]
    TornDown,
    /// A configuration value is out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    /// The configuration JSON could not be parsed.
    #[error("failed to parse config: {0}")]
    Config(#[from] serde_json::Error),
    /// The canvas has no 2D rendering context.
    #[error("canvas has no 2d rendering context")]
    MissingContext,
    /// A host (browser) call failed.
    #[error("host call failed: {0}")]
    Host(String),
}

impl From<JsValue> for EngineError {
    fn from(value: JsValue) -> Self {
        Self::Host(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<EngineError> for JsValue {
    fn from(err: EngineError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
