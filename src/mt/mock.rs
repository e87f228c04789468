//! Mock Machine Translator for testing
//!
//! A deterministic, API-free translator for exercising the cache and dispatcher
//! without API keys or network access. It counts calls so tests can assert how
//! often the provider was actually reached.
//!
//! # Example
//!
//! ```ignore
//! use runtime_translate::mt::{MachineTranslator, MockTranslator, MockMode};
//!
//! #[tokio::test]
//! async fn test_translation() {
//!     let mock = MockTranslator::new(MockMode::Suffix);
//!     let result = mock.translate("hello", "en", "fr").await.unwrap();
//!     assert_eq!(result, "hello_fr");
//! }
//! ```

use crate::mt::error::{MtError, MtResult};
use crate::mt::translator::MachineTranslator;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Mock translation modes for testing different scenarios
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Append target suffix: "hello" → "hello_fr"
    Suffix,

    /// Use predefined mappings, (text, target) → translation, falling back to suffix
    Mappings(HashMap<(String, String), String>),

    /// Fail every call with the given error
    Error(MtError),

    /// Fail only for the listed texts, suffix-translate everything else
    FailOn(HashSet<String>, MtError),

    /// Succeed with an empty string
    Empty,

    /// No-op: return input unchanged
    NoOp,
}

/// Mock translator that simulates various provider behaviours
///
/// Clones share the call counter.
#[derive(Debug, Clone)]
pub struct MockTranslator {
    mode: MockMode,
    /// Simulated network delay applied to every call
    delay_ms: u64,
    /// Extra per-text delays, to force out-of-order completion
    text_delays: HashMap<String, u64>,
    calls: Arc<AtomicUsize>,
}

impl MockTranslator {
    pub fn new(mode: MockMode) -> Self {
        Self {
            mode,
            delay_ms: 0,
            text_delays: HashMap::new(),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a MockTranslator with simulated network delay
    ///
    /// ```ignore
    /// let mock = MockTranslator::with_delay(MockMode::Suffix, 50);
    /// // Each translation will have ~50ms delay
    /// ```
    pub fn with_delay(mode: MockMode, delay_ms: u64) -> Self {
        Self {
            delay_ms,
            ..Self::new(mode)
        }
    }

    /// Delay calls for one specific text by `delay_ms` instead of the default
    pub fn with_text_delay(mut self, text: &str, delay_ms: u64) -> Self {
        self.text_delays.insert(text.to_string(), delay_ms);
        self
    }

    /// Number of `translate` calls received so far
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn apply_delay(&self, text: &str) {
        let delay = self.text_delays.get(text).copied().unwrap_or(self.delay_ms);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
    }

    fn apply_translation(&self, text: &str, target: &str) -> MtResult<String> {
        match &self.mode {
            MockMode::Suffix => Ok(format!("{}_{}", text, target)),
            MockMode::Mappings(map) => {
                let key = (text.to_string(), target.to_string());
                Ok(map
                    .get(&key)
                    .cloned()
                    .unwrap_or_else(|| format!("{}_{}", text, target)))
            }
            MockMode::Error(err) => Err(err.clone()),
            MockMode::FailOn(texts, err) => {
                if texts.contains(text) {
                    Err(err.clone())
                } else {
                    Ok(format!("{}_{}", text, target))
                }
            }
            MockMode::Empty => Ok(String::new()),
            MockMode::NoOp => Ok(text.to_string()),
        }
    }
}

#[async_trait]
impl MachineTranslator for MockTranslator {
    async fn translate(
        &self,
        text: &str,
        _source_locale: &str,
        target_code: &str,
    ) -> MtResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.apply_delay(text).await;
        self.apply_translation(text, target_code)
    }

    fn provider_name(&self) -> &str {
        "Mock Translator"
    }
}
