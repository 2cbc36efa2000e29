use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum SpotHintaError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Unexpected content type {content_type:?}: {body}")]
    UnexpectedContentType { content_type: String, body: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("No energy prices found")]
    NoData,

    #[error("Unsupported price resolution: {0} minutes")]
    UnsupportedResolution(i64),

    #[error("Invalid region code: {0}")]
    InvalidRegion(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl SpotHintaError {
    /// HTTP status carried by an `Api` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the API rejected the request with HTTP 429.
    pub fn is_rate_limited(&self) -> bool {
        self.status() == Some(429)
    }
}

impl From<serde_json::Error> for SpotHintaError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let error = SpotHintaError::Api {
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(error.to_string(), "API error 500: boom");
        assert_eq!(error.status(), Some(500));
        assert!(!error.is_rate_limited());
    }

    #[test]
    fn test_rate_limited() {
        let error = SpotHintaError::Api {
            status: 429,
            body: String::new(),
        };
        assert!(error.is_rate_limited());
        assert!(!SpotHintaError::NoData.is_rate_limited());
        assert_eq!(SpotHintaError::NoData.status(), None);
    }

    #[test]
    fn test_parse_error_from_serde() {
        let err = serde_json::from_str::<Vec<u32>>("[1,").unwrap_err();
        let error: SpotHintaError = err.into();
        assert!(matches!(error, SpotHintaError::Parse(_)));
    }
}
