// Supported languages
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    English,
    Japanese,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Japanese => "jp",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Japanese => "日本語",
        }
    }

    /// The other member of the two-language set.
    pub fn toggled(&self) -> Language {
        match self {
            Language::English => Language::Japanese,
            Language::Japanese => Language::English,
        }
    }

    /// Language for a BCP 47 locale tag. Japanese locales ("ja", "ja-JP")
    /// select Japanese, everything else falls back to English.
    pub fn from_locale(locale: &str) -> Language {
        if locale.starts_with("ja") {
            Language::Japanese
        } else {
            Language::English
        }
    }

    /// Detect the language from the host locale, once at startup.
    pub fn detect() -> Language {
        match sys_locale::get_locale() {
            Some(locale) => {
                tracing::info!("Detected system locale: {}", locale);
                Language::from_locale(&locale)
            }
            None => {
                tracing::warn!("Could not detect system locale, defaulting to English");
                Language::English
            }
        }
    }
}

/// A bilingual value. Both languages are required fields, so a record with
/// a missing translation does not compile; there is no fallback lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Localized<T: 'static> {
    pub jp: T,
    pub en: T,
}

impl<T> Localized<T> {
    pub const fn new(jp: T, en: T) -> Self {
        Self { jp, en }
    }

    pub fn get(&self, language: Language) -> &T {
        match language {
            Language::Japanese => &self.jp,
            Language::English => &self.en,
        }
    }
}

/// A bilingual string.
pub type LocalizedText = Localized<&'static str>;

/// A bilingual ordered list of strings.
pub type LocalizedList = Localized<&'static [&'static str]>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_is_an_involution() {
        for lang in [Language::English, Language::Japanese] {
            assert_eq!(lang.toggled().toggled(), lang);
        }
        assert_ne!(Language::English.toggled(), Language::English);
    }

    #[test]
    fn locale_detection() {
        assert_eq!(Language::from_locale("ja"), Language::Japanese);
        assert_eq!(Language::from_locale("ja-JP"), Language::Japanese);
        assert_eq!(Language::from_locale("en-US"), Language::English);
        assert_eq!(Language::from_locale("fr-FR"), Language::English);
        assert_eq!(Language::from_locale(""), Language::English);
    }

    #[test]
    fn localized_lookup_matches_language() {
        let greeting = LocalizedText::new("こんにちは", "Hello");

        assert_eq!(*greeting.get(Language::Japanese), "こんにちは");
        assert_eq!(*greeting.get(Language::English), "Hello");
    }

    #[test]
    fn codes_are_stable() {
        assert_eq!(Language::English.code(), "en");
        assert_eq!(Language::Japanese.code(), "jp");
        assert_eq!(Language::default(), Language::English);
    }
}
