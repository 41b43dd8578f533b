//! Locale identifiers, the default-locale provider and built-in locale data.

mod builtin;

pub use builtin::LocaleData;

/// Locale used when the process locale cannot be determined.
pub const FALLBACK_LOCALE: &str = "en_US";

/// Supplies the locale used when a caller does not pass one.
pub trait LocaleDefaults: Send + Sync {
    fn locale(&self) -> String;
}

/// Always reports the same locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedLocale(String);

impl FixedLocale {
    pub fn new(locale: impl Into<String>) -> Self {
        FixedLocale(locale.into())
    }
}

impl LocaleDefaults for FixedLocale {
    fn locale(&self) -> String {
        self.0.clone()
    }
}

/// Reports the operating system's locale, normalized to `ll_RR` form.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLocale;

impl LocaleDefaults for SystemLocale {
    fn locale(&self) -> String {
        sys_locale::get_locale()
            .map(|tag| canonicalize(&tag))
            .filter(|tag| !tag.is_empty() && tag != "C" && tag != "POSIX")
            .unwrap_or_else(|| FALLBACK_LOCALE.to_string())
    }
}

/// Normalizes `en-US`, `en_US.UTF-8` and `en_US@euro` to `en_US`.
pub fn canonicalize(locale: &str) -> String {
    let base = locale
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .trim();
    base.replace('-', "_")
}

/// The lowercase language subtag of a locale identifier.
pub fn language(locale: &str) -> String {
    canonicalize(locale)
        .split('_')
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase()
}

/// The uppercase region subtag of a locale identifier, if any.
///
/// Script subtags (`zh_Hant_TW`) are skipped.
pub fn region(locale: &str) -> Option<String> {
    canonicalize(locale)
        .split('_')
        .skip(1)
        .find(|part| {
            (part.len() == 2 && part.chars().all(|c| c.is_ascii_alphabetic()))
                || (part.len() == 3 && part.chars().all(|c| c.is_ascii_digit()))
        })
        .map(|part| part.to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonicalize() {
        assert_eq!(canonicalize("en-US"), "en_US");
        assert_eq!(canonicalize("fr_FR.UTF-8"), "fr_FR");
        assert_eq!(canonicalize("de_DE@euro"), "de_DE");
    }

    #[test]
    fn test_language_and_region() {
        assert_eq!(language("fr_CA"), "fr");
        assert_eq!(language("EN"), "en");
        assert_eq!(region("fr_CA").as_deref(), Some("CA"));
        assert_eq!(region("zh_Hant_tw").as_deref(), Some("TW"));
        assert_eq!(region("fr"), None);
    }

    #[test]
    fn test_fixed_locale() {
        assert_eq!(FixedLocale::new("fr_FR").locale(), "fr_FR");
    }

    #[test]
    fn test_system_locale_is_never_empty() {
        assert!(!SystemLocale.locale().is_empty());
    }
}
