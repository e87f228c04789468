//! Language support policy
//!
//! Decides whether a requested locale needs translating at all, and which code the
//! provider expects for it. Everything here is pure: unknown, empty or malformed locales
//! are reported as unsupported rather than as errors, so callers can always degrade to
//! the original text.

use crate::mt::error::{MtError, MtResult};

/// Language all dynamic content is authored in
pub const SOURCE_LANGUAGE: &str = "en";

/// Application locales whose provider code differs from the locale itself.
/// Matched case-insensitively.
const PROVIDER_CODE_OVERRIDES: &[(&str, &str)] = &[
    ("zh", "zh-CN"),
    ("zh-cn", "zh-CN"),
    ("zh-hans", "zh-CN"),
    ("zh-sg", "zh-CN"),
    ("zh-tw", "zh-TW"),
    ("zh-hant", "zh-TW"),
    ("zh-hk", "zh-TW"),
    ("he", "iw"),
    ("nb", "no"),
    ("fil", "tl"),
    ("pt-br", "pt"),
    ("pt-pt", "pt"),
];

/// Provider codes the translation backend accepts, with display names.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("ar", "Arabic"),
    ("bg", "Bulgarian"),
    ("bn", "Bengali"),
    ("cs", "Czech"),
    ("da", "Danish"),
    ("de", "German"),
    ("el", "Greek"),
    ("es", "Spanish"),
    ("fa", "Persian"),
    ("fi", "Finnish"),
    ("fr", "French"),
    ("hi", "Hindi"),
    ("hu", "Hungarian"),
    ("id", "Indonesian"),
    ("it", "Italian"),
    ("iw", "Hebrew"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("ms", "Malay"),
    ("nl", "Dutch"),
    ("no", "Norwegian"),
    ("pl", "Polish"),
    ("pt", "Portuguese"),
    ("ro", "Romanian"),
    ("ru", "Russian"),
    ("sv", "Swedish"),
    ("sw", "Swahili"),
    ("th", "Thai"),
    ("tl", "Filipino"),
    ("tr", "Turkish"),
    ("uk", "Ukrainian"),
    ("ur", "Urdu"),
    ("vi", "Vietnamese"),
    ("zh-CN", "Chinese (Simplified)"),
    ("zh-TW", "Chinese (Traditional)"),
];

/// Returns true when the target is the source language, so no translation is needed.
///
/// Regional English tags (`en-US`, `en_GB`) count as English.
pub fn is_english_target(locale: &str) -> bool {
    let locale = locale.trim();
    let primary = locale.split(['-', '_']).next().unwrap_or(locale);
    primary.eq_ignore_ascii_case(SOURCE_LANGUAGE)
}

/// Map an application locale to the provider-facing language code.
///
/// Applies [`PROVIDER_CODE_OVERRIDES`]; anything else passes through trimmed but
/// otherwise unchanged.
///
/// Only override lookups ignore case. Pass-through codes keep their case, and
/// [`is_supported`] matches exactly, so callers should send lowercase codes:
/// `ZH` maps to `zh-CN`, but `FR` stays `FR` and is unsupported.
///
/// ```ignore
/// assert_eq!(to_provider_code("zh"), "zh-CN");
/// assert_eq!(to_provider_code("fr"), "fr");
/// ```
pub fn to_provider_code(locale: &str) -> String {
    let locale = locale.trim();
    PROVIDER_CODE_OVERRIDES
        .iter()
        .find(|(from, _)| from.eq_ignore_ascii_case(locale))
        .map(|(_, to)| (*to).to_string())
        .unwrap_or_else(|| locale.to_string())
}

/// Membership test against the provider allow-list. Case sensitive.
pub fn is_supported(provider_code: &str) -> bool {
    !provider_code.is_empty()
        && SUPPORTED_LANGUAGES
            .iter()
            .any(|(code, _)| *code == provider_code)
}

/// All provider codes the service can translate into
pub fn supported_languages() -> &'static [(&'static str, &'static str)] {
    SUPPORTED_LANGUAGES
}

/// Normalize a locale code by stripping region information
///
/// - `en-US` → `en`
/// - `fr_FR` → `fr`
pub fn normalize_locale(locale: &str) -> String {
    locale
        .split(['-', '_'])
        .next()
        .unwrap_or(locale)
        .to_lowercase()
}

/// Validate that a locale code only contains alphanumerics, hyphens and underscores
pub fn validate_locale(locale: &str) -> MtResult<()> {
    if locale.is_empty() {
        return Err(MtError::InvalidLocale("Locale code is empty".to_string()));
    }

    if !locale
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(MtError::InvalidLocale(format!(
            "Invalid characters in locale code: {}",
            locale
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_targets() {
        assert!(is_english_target("en"));
        assert!(is_english_target("EN"));
        assert!(is_english_target(" en "));
        assert!(is_english_target("en-US"));
        assert!(is_english_target("en_GB"));
    }

    #[test]
    fn test_non_english_targets() {
        assert!(!is_english_target("fr"));
        assert!(!is_english_target(""));
        assert!(!is_english_target("eng"));
        assert!(!is_english_target("es-EN"));
    }

    #[test]
    fn test_provider_code_overrides() {
        assert_eq!(to_provider_code("zh"), "zh-CN");
        assert_eq!(to_provider_code("zh-Hant"), "zh-TW");
        assert_eq!(to_provider_code("ZH-TW"), "zh-TW");
        assert_eq!(to_provider_code("he"), "iw");
        assert_eq!(to_provider_code("nb"), "no");
    }

    #[test]
    fn test_provider_code_passthrough() {
        assert_eq!(to_provider_code("fr"), "fr");
        assert_eq!(to_provider_code(" de "), "de");
        assert_eq!(to_provider_code("xx-YY"), "xx-YY");
        assert_eq!(to_provider_code(""), "");
    }

    #[test]
    fn test_provider_code_case_only_folds_overrides() {
        assert_eq!(to_provider_code("ZH"), "zh-CN");
        assert!(is_supported(&to_provider_code("ZH")));
        assert_eq!(to_provider_code("FR"), "FR");
        assert!(!is_supported(&to_provider_code("FR")));
    }

    #[test]
    fn test_is_supported() {
        assert!(is_supported("fr"));
        assert!(is_supported("zh-CN"));
        assert!(!is_supported("zh"));
        assert!(!is_supported("FR"));
        assert!(!is_supported("klingon"));
        assert!(!is_supported(""));
    }

    #[test]
    fn test_every_override_target_is_supported() {
        for (from, to) in PROVIDER_CODE_OVERRIDES {
            assert!(is_supported(to), "override {} -> {} not in allow-list", from, to);
        }
    }

    #[test]
    fn test_source_language_not_in_allow_list() {
        assert!(!is_supported(SOURCE_LANGUAGE));
    }

    #[test]
    fn test_normalize_locale() {
        assert_eq!(normalize_locale("en-US"), "en");
        assert_eq!(normalize_locale("fr_FR"), "fr");
        assert_eq!(normalize_locale("EN"), "en");
        assert_eq!(normalize_locale("zh-CN"), "zh");
    }

    #[test]
    fn test_validate_locale() {
        assert!(validate_locale("en").is_ok());
        assert!(validate_locale("zh-TW").is_ok());
        assert!(validate_locale("de_DE").is_ok());
        assert!(validate_locale("").is_err());
        assert!(validate_locale("en@invalid").is_err());
    }

    #[test]
    fn test_validate_locale_error_messages() {
        match validate_locale("en@US") {
            Err(MtError::InvalidLocale(msg)) => {
                assert!(msg.contains("Invalid characters"));
            }
            _ => panic!("Expected InvalidLocale error"),
        }
    }
}
