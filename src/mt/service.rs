//! Single-item translation
//!
//! [`TranslationService`] owns the provider and the shared cache and runs the decision
//! order for one `(text, target locale)` pair:
//!
//! 1. blank text → identity
//! 2. English target → identity
//! 3. unsupported provider code → identity
//! 4. cache hit → cached value
//! 5. provider call → cache and return; on failure cache and return the original text
//!
//! Nothing in this path returns an error: provider failures are attached to the
//! [`TranslateResult`] as diagnostics.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::mt::cache::{CacheKey, TranslationCache};
use crate::mt::config::{ProviderKind, TranslateConfig};
use crate::mt::error::{MtError, MtResult};
use crate::mt::google_translate::GoogleTranslateProvider;
use crate::mt::language::{SOURCE_LANGUAGE, is_english_target, is_supported, to_provider_code};
use crate::mt::mock::{MockMode, MockTranslator};
use crate::mt::translator::MachineTranslator;

/// Default upper bound on a single provider call
pub const DEFAULT_PROVIDER_TIMEOUT: Duration = Duration::from_secs(10);

/// Why a text was returned without consulting the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslateNote {
    /// Text was empty or whitespace only
    EmptyText,
    /// Target is the source language
    SourceLanguage,
    /// Target language is not in the provider allow-list
    UnsupportedLanguage,
}

impl TranslateNote {
    pub fn message(&self) -> &'static str {
        match self {
            TranslateNote::EmptyText => "Empty text, nothing to translate",
            TranslateNote::SourceLanguage => "Target is the source language, no translation needed",
            TranslateNote::UnsupportedLanguage => {
                "Language not supported, returning original text"
            }
        }
    }
}

/// Outcome of translating one text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateResult {
    pub original_text: String,
    pub translated_text: String,
    pub from_cache: bool,
    pub note: Option<TranslateNote>,
    /// Provider failure that forced a fallback to the original text
    pub error: Option<MtError>,
}

impl TranslateResult {
    fn identity(text: &str, note: TranslateNote) -> Self {
        Self {
            original_text: text.to_string(),
            translated_text: text.to_string(),
            from_cache: false,
            note: Some(note),
            error: None,
        }
    }

    /// Original text returned in place of a translation because of `error`
    pub fn fallback(text: &str, error: MtError) -> Self {
        Self {
            original_text: text.to_string(),
            translated_text: text.trim().to_string(),
            from_cache: false,
            note: None,
            error: Some(error),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.error.is_some()
    }
}

/// Translation front door: policy, cache and provider wired together.
///
/// Cheap to clone; clones share the provider and the cache.
#[derive(Clone)]
pub struct TranslationService {
    translator: Arc<dyn MachineTranslator>,
    cache: Arc<TranslationCache>,
    provider_timeout: Duration,
    pub(crate) max_batch_concurrency: Option<usize>,
}

impl TranslationService {
    pub fn new(translator: Arc<dyn MachineTranslator>, cache: Arc<TranslationCache>) -> Self {
        Self {
            translator,
            cache,
            provider_timeout: DEFAULT_PROVIDER_TIMEOUT,
            max_batch_concurrency: None,
        }
    }

    /// Build the provider and cache described by `config`
    pub fn from_config(config: &TranslateConfig) -> MtResult<Self> {
        let translator: Arc<dyn MachineTranslator> = match config.provider {
            ProviderKind::Google => {
                let api_key = config.google_api_key.clone().ok_or_else(|| {
                    MtError::ConfigError(
                        "GOOGLE_TRANSLATE_API_KEY must be set for the google provider"
                            .to_string(),
                    )
                })?;
                let provider = match &config.google_base_url {
                    Some(url) => GoogleTranslateProvider::with_base_url(api_key, url.clone())?,
                    None => GoogleTranslateProvider::new(api_key)?,
                };
                Arc::new(provider)
            }
            ProviderKind::Mock => Arc::new(MockTranslator::new(MockMode::Suffix)),
        };

        let cache = Arc::new(TranslationCache::new(config.cache_size));
        Ok(Self::new(translator, cache)
            .with_provider_timeout(config.provider_timeout())
            .with_max_batch_concurrency(config.max_batch_concurrency))
    }

    pub fn with_provider_timeout(mut self, timeout: Duration) -> Self {
        self.provider_timeout = timeout;
        self
    }

    /// Cap simultaneous provider calls within one batch; `None` means unbounded
    pub fn with_max_batch_concurrency(mut self, limit: Option<usize>) -> Self {
        self.max_batch_concurrency = limit.filter(|n| *n > 0);
        self
    }

    pub fn cache(&self) -> &Arc<TranslationCache> {
        &self.cache
    }

    pub fn provider_name(&self) -> &str {
        self.translator.provider_name()
    }

    /// Translate one text into `target_locale`, degrading to the original text on any failure
    pub async fn translate(&self, text: &str, target_locale: &str) -> TranslateResult {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return TranslateResult::identity(text, TranslateNote::EmptyText);
        }

        if is_english_target(target_locale) {
            return TranslateResult::identity(text, TranslateNote::SourceLanguage);
        }

        let provider_code = to_provider_code(target_locale);
        if !is_supported(&provider_code) {
            debug!(target_locale, "unsupported target language, returning original text");
            return TranslateResult::identity(text, TranslateNote::UnsupportedLanguage);
        }

        let key = CacheKey::new(trimmed, &provider_code);
        if let Some(cached) = self.cache.get(&key) {
            debug!(provider_code = %provider_code, "translation cache hit");
            return TranslateResult {
                original_text: text.to_string(),
                translated_text: cached,
                from_cache: true,
                note: None,
                error: None,
            };
        }

        match self.call_provider(trimmed, &provider_code).await {
            Ok(translated) => {
                self.cache.put(key, translated.clone());
                TranslateResult {
                    original_text: text.to_string(),
                    translated_text: translated,
                    from_cache: false,
                    note: None,
                    error: None,
                }
            }
            Err(err) => {
                warn!(
                    provider = self.translator.provider_name(),
                    provider_code = %provider_code,
                    kind = err.kind(),
                    error = %err,
                    "translation failed, caching original text"
                );
                self.cache.put(key, trimmed.to_string());
                TranslateResult::fallback(text, err)
            }
        }
    }

    async fn call_provider(&self, text: &str, provider_code: &str) -> MtResult<String> {
        let call = self.translator.translate(text, SOURCE_LANGUAGE, provider_code);
        let translated = tokio::time::timeout(self.provider_timeout, call)
            .await
            .map_err(|_| {
                MtError::ProviderTransport(format!(
                    "Provider call timed out after {}ms",
                    self.provider_timeout.as_millis()
                ))
            })??;

        if translated.trim().is_empty() {
            return Err(MtError::ProviderEmptyResult(
                "Provider returned an empty translation".to_string(),
            ));
        }

        Ok(translated)
    }
}

impl std::fmt::Debug for TranslationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslationService")
            .field("provider", &self.translator.provider_name())
            .field("cache", &self.cache)
            .field("provider_timeout", &self.provider_timeout)
            .field("max_batch_concurrency", &self.max_batch_concurrency)
            .finish()
    }
}
