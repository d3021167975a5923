use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors surfaced by page actions
///
/// Every error is terminal to the action that raised it; callers log and
/// alert, nothing is retried.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Element not found: {0}")]
    MissingElement(String),

    #[error("Network error: {0}")]
    Network(#[from] gloo::net::Error),

    #[error("Request failed with HTTP {status}")]
    HttpStatus { status: u16 },

    #[error("{}", .0.as_deref().unwrap_or("Unknown error"))]
    Server(Option<String>),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Renderer error: {0}")]
    Renderer(String),

    #[error("DOM error: {0}")]
    Dom(String),
}

impl AppError {
    pub fn missing(id: &str) -> Self {
        AppError::MissingElement(format!("#{}", id))
    }
}

impl From<JsValue> for AppError {
    fn from(value: JsValue) -> Self {
        AppError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_fallback() {
        assert_eq!(AppError::Server(None).to_string(), "Unknown error");
        assert_eq!(
            AppError::Server(Some("Quota exceeded".into())).to_string(),
            "Quota exceeded"
        );
    }

    #[test]
    fn test_missing_element_names_selector() {
        assert_eq!(AppError::missing("skillsList").to_string(), "Element not found: #skillsList");
    }

    #[test]
    fn test_status_display() {
        assert_eq!(AppError::HttpStatus { status: 502 }.to_string(), "Request failed with HTTP 502");
    }
}
