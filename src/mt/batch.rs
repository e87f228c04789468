//! Batch translation
//!
//! Every text in a batch is translated on its own tokio task. The dispatcher waits for
//! all of them and writes each result into the slot matching its input index, so output
//! order never depends on completion order. A failing or panicking item only affects its
//! own slot.

use std::sync::Arc;

use futures::future::join_all;
use tokio::sync::Semaphore;
use tracing::{debug, error};

use crate::mt::error::MtError;
use crate::mt::service::{TranslateResult, TranslationService};

/// Results of one batch, index-aligned with the input texts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchTranslateResult {
    pub items: Vec<TranslateResult>,
}

impl BatchTranslateResult {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items that fell back to the original text because of a provider failure
    pub fn failure_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_fallback()).count()
    }
}

impl TranslationService {
    /// Translate `texts` into `target_locale` concurrently.
    ///
    /// Returns exactly one result per input, in input order. Concurrency is unbounded
    /// unless a batch limit was configured.
    pub async fn translate_batch(
        &self,
        texts: &[String],
        target_locale: &str,
    ) -> BatchTranslateResult {
        let limiter = self
            .max_batch_concurrency
            .map(|limit| Arc::new(Semaphore::new(limit)));

        debug!(
            count = texts.len(),
            target_locale,
            limit = ?self.max_batch_concurrency,
            "dispatching translation batch"
        );

        let handles: Vec<_> = texts
            .iter()
            .map(|text| {
                let service = self.clone();
                let text = text.clone();
                let target = target_locale.to_string();
                let limiter = limiter.clone();
                tokio::spawn(async move {
                    // Held until the item completes; the semaphore is never closed
                    let _permit = match &limiter {
                        Some(semaphore) => semaphore.clone().acquire_owned().await.ok(),
                        None => None,
                    };
                    service.translate(&text, &target).await
                })
            })
            .collect();

        let mut items: Vec<Option<TranslateResult>> = vec![None; texts.len()];
        for (index, joined) in join_all(handles).await.into_iter().enumerate() {
            let result = match joined {
                Ok(result) => result,
                Err(join_error) => {
                    error!(index, error = %join_error, "translation task did not complete");
                    TranslateResult::fallback(
                        &texts[index],
                        MtError::ProviderTransport(format!(
                            "Translation task failed: {}",
                            join_error
                        )),
                    )
                }
            };
            items[index] = Some(result);
        }

        BatchTranslateResult {
            items: items.into_iter().flatten().collect(),
        }
    }
}
