//! Machine Translation trait
//!
//! `MachineTranslator` is the seam between the translation service and whatever backend
//! actually performs text → text translation (Google Translate, a mock, ...). The service
//! never talks to a backend directly.
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
//!     println!("{}", result); // "Bonjour, le monde!"
//!     Ok(())
//! }
//! ```

use crate::mt::error::MtResult;
use async_trait::async_trait;

/// Generic trait for machine translation providers
///
/// Implementations perform exactly one remote (or simulated) translation per call.
/// Caching, language policy and fallback all live above this trait.
#[async_trait]
pub trait MachineTranslator: Send + Sync {
    /// Translate a single text string
    ///
    /// # Arguments
    ///
    /// * `text` - The text to translate, already trimmed
    /// * `source_locale` - Source language code (always the service's source language)
    /// * `target_code` - Provider-facing target language code (e.g. "fr", "zh-CN")
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The translated text
    /// * `Err(MtError)` - `ProviderHttp`, `ProviderEmptyResult` or `ProviderTransport`
    async fn translate(
        &self,
        text: &str,
        source_locale: &str,
        target_code: &str,
    ) -> MtResult<String>;

    /// Name of this provider, for logs and the health endpoint
    fn provider_name(&self) -> &str;
}
