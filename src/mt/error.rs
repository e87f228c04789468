use thiserror::Error;

/// Error types for the translation module
///
/// Provider failures (`ProviderHttp`, `ProviderEmptyResult`, `ProviderTransport`) never
/// reach callers of [`TranslationService`](crate::mt::TranslationService) as hard errors:
/// they are attached to the per-item result as diagnostics. The remaining variants are
/// configuration and request-shape errors raised before any translation work starts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MtError {
    /// Provider answered with a non-success HTTP status
    #[error("Provider HTTP error ({status}): {message}")]
    ProviderHttp { status: u16, message: String },

    /// Provider answered but yielded no usable translated text
    #[error("Provider returned no translation: {0}")]
    ProviderEmptyResult(String),

    /// Network, transport or timeout failure reaching the provider
    #[error("Provider transport error: {0}")]
    ProviderTransport(String),

    /// Locale code rejected before contacting the provider
    #[error("Invalid locale: {0}")]
    InvalidLocale(String),

    /// Invalid or missing configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Request is missing required fields
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl MtError {
    /// Short, stable name of the error class, used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            MtError::ProviderHttp { .. } => "ProviderHttpError",
            MtError::ProviderEmptyResult(_) => "ProviderEmptyResult",
            MtError::ProviderTransport(_) => "ProviderTransportError",
            MtError::InvalidLocale(_) => "InvalidLocale",
            MtError::ConfigError(_) => "ConfigError",
            MtError::InvalidRequest(_) => "InvalidRequest",
        }
    }
}

impl From<reqwest::Error> for MtError {
    fn from(err: reqwest::Error) -> Self {
        // Request URLs may carry credentials; keep them out of diagnostics
        let err = err.without_url();
        if err.is_decode() {
            MtError::ProviderEmptyResult(format!("Failed to decode provider response: {}", err))
        } else if let Some(status) = err.status() {
            MtError::ProviderHttp {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            MtError::ProviderTransport(err.to_string())
        }
    }
}

/// Result type for translation operations
pub type MtResult<T> = Result<T, MtError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_provider_failures() {
        let http = MtError::ProviderHttp {
            status: 503,
            message: "unavailable".to_string(),
        };
        assert_eq!(http.kind(), "ProviderHttpError");
        assert_eq!(
            MtError::ProviderEmptyResult("x".to_string()).kind(),
            "ProviderEmptyResult"
        );
        assert_eq!(
            MtError::ProviderTransport("x".to_string()).kind(),
            "ProviderTransportError"
        );
    }

    #[test]
    fn test_display_includes_status() {
        let err = MtError::ProviderHttp {
            status: 403,
            message: "forbidden".to_string(),
        };
        assert_eq!(err.to_string(), "Provider HTTP error (403): forbidden");
    }
}
