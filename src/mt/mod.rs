/// Dynamic content translation
///
/// Translates arbitrary runtime strings into a requested language through a machine
/// translation provider, memoizing provider results in a bounded in-process cache and
/// fanning batches out concurrently.
///
/// # Overview
///
/// 1. **Language policy** - decides whether a locale needs translating and maps it to a provider code
/// 2. **Translation cache** - FIFO-bounded `(text, provider code) → translation` store
/// 3. **MT Trait & Providers** - generic provider trait with Google Translate and mock implementations
/// 4. **Translation service** - single-item decision order with graceful fallback
/// 5. **Batch dispatcher** - concurrent fan-out, index-ordered fan-in
///
/// # Example
///
/// ```ignore
/// use runtime_translate::mt::{TranslateConfig, TranslationService};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let service = TranslationService::from_config(&TranslateConfig::from_env()?)?;
///
///     let one = service.translate("Add to cart", "fr").await;
///     println!("{}", one.translated_text);
///
///     let texts = vec!["Checkout".to_string(), "Free shipping".to_string()];
///     let batch = service.translate_batch(&texts, "de").await;
///     for item in batch.items {
///         println!("{} → {}", item.original_text, item.translated_text);
///     }
///     Ok(())
/// }
/// ```
pub mod api;
pub mod batch;
pub mod cache;
pub mod config;
pub mod error;
pub mod google_translate;
pub mod language;
pub mod mock;
pub mod service;
pub mod translator;


pub use batch::BatchTranslateResult;
pub use cache::{CacheKey, CacheStats, MAX_CACHE_SIZE, TranslationCache};
pub use config::{ProviderKind, TranslateConfig};
pub use error::{MtError, MtResult};
pub use google_translate::GoogleTranslateProvider;
pub use language::{
    SOURCE_LANGUAGE, is_english_target, is_supported, supported_languages, to_provider_code,
};
pub use mock::{MockMode, MockTranslator};
pub use service::{TranslateNote, TranslateResult, TranslationService};
pub use translator::MachineTranslator;
