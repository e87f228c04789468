//! Wire records for the translation endpoints
//!
//! Request bodies deserialize leniently (missing fields become empty) so that shape
//! problems are reported by [`TranslateRequest::validate`] as request errors instead of
//! as body parse failures.

use serde::{Deserialize, Serialize};

use crate::mt::error::{MtError, MtResult};
use crate::mt::language::{SOURCE_LANGUAGE, supported_languages};
use crate::mt::service::TranslateResult;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslateRequest {
    pub text: String,
    pub to: String,
}

impl TranslateRequest {
    pub fn validate(&self) -> MtResult<()> {
        if self.text.is_empty() {
            return Err(MtError::InvalidRequest("Text is required".to_string()));
        }
        validate_target(&self.to)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchTranslateRequest {
    pub texts: Vec<String>,
    pub to: String,
}

impl BatchTranslateRequest {
    pub fn validate(&self) -> MtResult<()> {
        if self.texts.is_empty() {
            return Err(MtError::InvalidRequest(
                "Texts array is required and must not be empty".to_string(),
            ));
        }
        validate_target(&self.to)
    }
}

fn validate_target(to: &str) -> MtResult<()> {
    if to.trim().is_empty() {
        return Err(MtError::InvalidRequest(
            "Target language (to) is required".to_string(),
        ));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResponse {
    pub success: bool,
    pub original_text: String,
    pub translated_text: String,
    pub from: String,
    pub to: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub cached: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TranslateResponse {
    pub fn from_result(result: TranslateResult, to: &str) -> Self {
        Self {
            success: true,
            original_text: result.original_text,
            translated_text: result.translated_text,
            from: SOURCE_LANGUAGE.to_string(),
            to: to.to_string(),
            cached: result.from_cache,
            note: result.note.map(|note| note.message().to_string()),
            error: result.error.map(|err| err.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchTranslationItem {
    pub original_text: String,
    pub translated_text: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub cached: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchTranslateResponse {
    pub success: bool,
    pub translations: Vec<BatchTranslationItem>,
}

impl BatchTranslateResponse {
    pub fn from_results(results: Vec<TranslateResult>) -> Self {
        Self {
            success: true,
            translations: results
                .into_iter()
                .map(|result| BatchTranslationItem {
                    original_text: result.original_text,
                    translated_text: result.translated_text,
                    cached: result.from_cache,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageInfo {
    pub code: &'static str,
    pub name: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguagesResponse {
    pub source: &'static str,
    pub languages: Vec<LanguageInfo>,
}

impl LanguagesResponse {
    pub fn current() -> Self {
        Self {
            source: SOURCE_LANGUAGE,
            languages: supported_languages()
                .iter()
                .map(|&(code, name)| LanguageInfo { code, name })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mt::service::TranslateNote;
    use serde_json::json;

    #[test]
    fn test_missing_fields_fail_validation_not_parsing() {
        let request: TranslateRequest = serde_json::from_value(json!({ "to": "fr" })).unwrap();
        assert!(matches!(request.validate(), Err(MtError::InvalidRequest(_))));

        let request: TranslateRequest = serde_json::from_value(json!({ "text": "Hi" })).unwrap();
        assert!(matches!(request.validate(), Err(MtError::InvalidRequest(_))));

        let request: TranslateRequest =
            serde_json::from_value(json!({ "text": "Hi", "to": "fr" })).unwrap();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_batch_validation() {
        let empty: BatchTranslateRequest =
            serde_json::from_value(json!({ "texts": [], "to": "fr" })).unwrap();
        assert!(empty.validate().is_err());

        let no_target: BatchTranslateRequest =
            serde_json::from_value(json!({ "texts": ["a"], "to": "  " })).unwrap();
        assert!(no_target.validate().is_err());

        let ok: BatchTranslateRequest =
            serde_json::from_value(json!({ "texts": ["a", ""], "to": "fr" })).unwrap();
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_single_response_shape() {
        let result = TranslateResult {
            original_text: "Hello".to_string(),
            translated_text: "Bonjour".to_string(),
            from_cache: true,
            note: None,
            error: None,
        };
        let value = serde_json::to_value(TranslateResponse::from_result(result, "fr")).unwrap();
        assert_eq!(
            value,
            json!({
                "success": true,
                "originalText": "Hello",
                "translatedText": "Bonjour",
                "from": "en",
                "to": "fr",
                "cached": true
            })
        );
    }

    #[test]
    fn test_single_response_with_note_and_error() {
        let unsupported = TranslateResult {
            original_text: "Hello".to_string(),
            translated_text: "Hello".to_string(),
            from_cache: false,
            note: Some(TranslateNote::UnsupportedLanguage),
            error: None,
        };
        let value =
            serde_json::to_value(TranslateResponse::from_result(unsupported, "tlh")).unwrap();
        assert!(value.get("cached").is_none());
        assert_eq!(
            value["note"],
            "Language not supported, returning original text"
        );

        let failed = TranslateResult::fallback(
            "Hello",
            MtError::ProviderEmptyResult("nothing".to_string()),
        );
        let value = serde_json::to_value(TranslateResponse::from_result(failed, "fr")).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["translatedText"], "Hello");
        assert!(value["error"].as_str().unwrap().contains("nothing"));
    }

    #[test]
    fn test_batch_response_shape() {
        let results = vec![
            TranslateResult {
                original_text: "a".to_string(),
                translated_text: "a_fr".to_string(),
                from_cache: false,
                note: None,
                error: None,
            },
            TranslateResult {
                original_text: "b".to_string(),
                translated_text: "b_fr".to_string(),
                from_cache: true,
                note: None,
                error: None,
            },
        ];
        let value = serde_json::to_value(BatchTranslateResponse::from_results(results)).unwrap();
        assert_eq!(
            value,
            json!({
                "success": true,
                "translations": [
                    { "originalText": "a", "translatedText": "a_fr" },
                    { "originalText": "b", "translatedText": "b_fr", "cached": true }
                ]
            })
        );
    }

    #[test]
    fn test_languages_response() {
        let response = LanguagesResponse::current();
        assert_eq!(response.source, "en");
        assert!(response.languages.iter().any(|l| l.code == "fr"));
    }
}
