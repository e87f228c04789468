//! Google Translate API provider for machine translation
//!
//! This module integrates with Google Translate API v2.
//!
//! # Authentication
//!
//! The provider loads the API key from the `GOOGLE_TRANSLATE_API_KEY`
//! environment variable. Obtain a key from:
//! https://console.cloud.google.com/
//!
//! # Example
//!
//! ```ignore
//! use runtime_translate::mt::{MachineTranslator, GoogleTranslateProvider};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = GoogleTranslateProvider::from_env()?;
//!     let result = provider.translate("Hello, world!", "en", "fr").await?;
//!     println!("{}", result);
//!     Ok(())
//! }
//! ```

use std::time::Duration;

use crate::mt::error::{MtError, MtResult};
use crate::mt::language::{normalize_locale, validate_locale};
use crate::mt::translator::MachineTranslator;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

/// Default Google Translate v2 endpoint
pub const DEFAULT_BASE_URL: &str = "https://translation.googleapis.com/language/translate/v2";

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    data: TranslateData,
}

#[derive(Debug, Deserialize)]
struct TranslateData {
    translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Translation {
    translated_text: Option<String>,
}

/// Google Translate API v2 provider
///
/// One HTTP request per `translate` call.
#[derive(Clone)]
pub struct GoogleTranslateProvider {
    /// API key for authentication
    api_key: String,
    /// HTTP client for async requests
    client: reqwest::Client,
    /// Base URL for Google Translate API
    base_url: String,
}

impl GoogleTranslateProvider {
    /// Transport-level timeout applied to every request
    const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Create a new GoogleTranslateProvider with an explicit API key
    ///
    /// # Returns
    ///
    /// * `Ok(Self)` - New provider instance
    /// * `Err(MtError)` - If API key is empty or HTTP client creation fails
    pub fn new(api_key: String) -> MtResult<Self> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Create a provider pointed at a different endpoint (proxies, test servers)
    pub fn with_base_url(api_key: String, base_url: String) -> MtResult<Self> {
        if api_key.trim().is_empty() {
            return Err(MtError::ConfigError("API key cannot be empty".to_string()));
        }
        if base_url.trim().is_empty() {
            return Err(MtError::ConfigError("Base URL cannot be empty".to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(Self::REQUEST_TIMEOUT)
            .build()
            .map_err(|e| MtError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_key,
            client,
            base_url,
        })
    }

    /// Create a GoogleTranslateProvider from the `GOOGLE_TRANSLATE_API_KEY` environment variable
    pub fn from_env() -> MtResult<Self> {
        let api_key = std::env::var("GOOGLE_TRANSLATE_API_KEY").map_err(|_| {
            MtError::ConfigError(
                "GOOGLE_TRANSLATE_API_KEY environment variable not set".to_string(),
            )
        })?;

        Self::new(api_key)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Pull the first non-empty `translatedText` out of a v2 response body
    fn extract_translation(body: &str) -> MtResult<String> {
        let parsed: TranslateResponse = serde_json::from_str(body).map_err(|e| {
            MtError::ProviderEmptyResult(format!("Failed to parse API response: {}", e))
        })?;

        parsed
            .data
            .translations
            .into_iter()
            .next()
            .and_then(|t| t.translated_text)
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| {
                MtError::ProviderEmptyResult(
                    "API response contained no translated text".to_string(),
                )
            })
    }
}

impl std::fmt::Debug for GoogleTranslateProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleTranslateProvider")
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl MachineTranslator for GoogleTranslateProvider {
    async fn translate(
        &self,
        text: &str,
        source_locale: &str,
        target_code: &str,
    ) -> MtResult<String> {
        validate_locale(source_locale)?;
        validate_locale(target_code)?;

        let body = json!({
            "q": [text],
            "source": normalize_locale(source_locale),
            "target": target_code,
            "format": "text"
        });

        // Key goes in a header so it never appears in request URLs or error text
        let response = self
            .client
            .post(&self.base_url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(MtError::ProviderHttp {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let body = response.text().await?;
        Self::extract_translation(&body)
    }

    fn provider_name(&self) -> &str {
        "Google Translate"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    // ========== Initialization Tests ==========

    #[test]
    fn test_new_with_valid_key() {
        let provider = GoogleTranslateProvider::new("test-api-key".to_string());
        assert!(provider.is_ok());
        let provider = provider.unwrap();
        assert_eq!(provider.provider_name(), "Google Translate");
        assert_eq!(provider.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_new_with_empty_key() {
        match GoogleTranslateProvider::new("".to_string()) {
            Err(MtError::ConfigError(msg)) => assert!(msg.contains("empty")),
            _ => panic!("Expected ConfigError"),
        }
    }

    #[test]
    fn test_new_with_whitespace_key() {
        assert!(GoogleTranslateProvider::new("   ".to_string()).is_err());
    }

    #[test]
    fn test_custom_base_url() {
        let provider = GoogleTranslateProvider::with_base_url(
            "key".to_string(),
            "http://127.0.0.1:9/translate".to_string(),
        )
        .unwrap();
        assert_eq!(provider.base_url(), "http://127.0.0.1:9/translate");
    }

    #[test]
    #[serial]
    fn test_from_env_without_key() {
        unsafe {
            std::env::remove_var("GOOGLE_TRANSLATE_API_KEY");
        }
        match GoogleTranslateProvider::from_env() {
            Err(MtError::ConfigError(msg)) => assert!(msg.contains("not set")),
            _ => panic!("Expected ConfigError"),
        }
    }

    // ========== Response Parsing Tests ==========

    #[test]
    fn test_extract_translation() {
        let body = r#"{"data":{"translations":[{"translatedText":"Bonjour"}]}}"#;
        assert_eq!(
            GoogleTranslateProvider::extract_translation(body).unwrap(),
            "Bonjour"
        );
    }

    #[test]
    fn test_extract_translation_empty_list() {
        let body = r#"{"data":{"translations":[]}}"#;
        assert!(matches!(
            GoogleTranslateProvider::extract_translation(body),
            Err(MtError::ProviderEmptyResult(_))
        ));
    }

    #[test]
    fn test_extract_translation_blank_text() {
        let body = r#"{"data":{"translations":[{"translatedText":"  "}]}}"#;
        assert!(matches!(
            GoogleTranslateProvider::extract_translation(body),
            Err(MtError::ProviderEmptyResult(_))
        ));
    }

    #[test]
    fn test_extract_translation_malformed() {
        assert!(matches!(
            GoogleTranslateProvider::extract_translation("<html>oops</html>"),
            Err(MtError::ProviderEmptyResult(_))
        ));
        assert!(matches!(
            GoogleTranslateProvider::extract_translation(r#"{"error":{}}"#),
            Err(MtError::ProviderEmptyResult(_))
        ));
    }

    // ========== Validation Tests ==========

    #[tokio::test]
    async fn test_translate_invalid_target_code() {
        let provider = GoogleTranslateProvider::new("test-key".to_string()).unwrap();
        let result = provider.translate("hello", "en", "invalid#code").await;
        assert!(matches!(result, Err(MtError::InvalidLocale(_))));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        // Port 9 (discard) is closed on test machines
        let provider = GoogleTranslateProvider::with_base_url(
            "test-key".to_string(),
            "http://127.0.0.1:9/translate".to_string(),
        )
        .unwrap();
        let result = provider.translate("hello", "en", "fr").await;
        // An HTTP proxy in the environment may answer with a gateway error instead
        assert!(matches!(
            result,
            Err(MtError::ProviderTransport(_)) | Err(MtError::ProviderHttp { .. })
        ));
    }

    // ========== Debug Implementation Test ==========

    #[test]
    fn test_debug_output() {
        let provider = GoogleTranslateProvider::new("test-key".to_string()).unwrap();
        let debug_str = format!("{:?}", provider);
        assert!(debug_str.contains("***"));
        assert!(!debug_str.contains("test-key"));
    }

    // ========== Integration Tests (require real API key) ==========

    #[tokio::test]
    #[ignore] // Run with: cargo test --ignored
    async fn test_real_api_single_translation() {
        if std::env::var("GOOGLE_TRANSLATE_API_KEY").is_err() {
            eprintln!("Skipping: GOOGLE_TRANSLATE_API_KEY not set");
            return;
        }

        let provider = GoogleTranslateProvider::from_env().unwrap();
        let result = provider.translate("Hello", "en", "fr").await.unwrap();
        println!("Translation: {} → {}", "Hello", result);
        assert!(!result.is_empty());
    }

    #[tokio::test]
    #[ignore] // Run with: cargo test --ignored
    async fn test_real_api_invalid_key() {
        let provider = GoogleTranslateProvider::new("invalid-key-xyz".to_string()).unwrap();
        let result = provider.translate("hello", "en", "fr").await;
        assert!(matches!(result, Err(MtError::ProviderHttp { .. })));
    }
}
