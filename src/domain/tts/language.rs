/// A language the speech backend can render, pairing the human-readable name
/// shown in the dropdown with the locale code the TTS endpoint expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetLanguage {
    pub name: &'static str,
    pub code: &'static str,
}

impl TargetLanguage {
    /// Resolve a dropdown language name to its entry in the table.
    /// Lookup is exact; the UI only ever submits names from `LANGUAGES`.
    pub fn from_name(name: &str) -> Option<TargetLanguage> {
        LANGUAGES.iter().copied().find(|l| l.name == name)
    }
}

impl std::fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

const fn lang(name: &'static str, code: &'static str) -> TargetLanguage {
    TargetLanguage { name, code }
}

/// Every language offered in the UI, mapped to a locale code the Google
/// Translate TTS endpoint accepts. Read-only; never mutated at runtime.
pub const LANGUAGES: &[TargetLanguage] = &[
    lang("Afrikaans", "af"),
    lang("Arabic", "ar"),
    lang("Bengali", "bn"),
    lang("Chinese (Simplified)", "zh-CN"),
    lang("Chinese (Traditional)", "zh-TW"),
    lang("Czech", "cs"),
    lang("Danish", "da"),
    lang("Dutch", "nl"),
    lang("English", "en"),
    lang("Finnish", "fi"),
    lang("French", "fr"),
    lang("German", "de"),
    lang("Greek", "el"),
    lang("Gujarati", "gu"),
    lang("Hindi", "hi"),
    lang("Hungarian", "hu"),
    lang("Indonesian", "id"),
    lang("Italian", "it"),
    lang("Japanese", "ja"),
    lang("Javanese", "jw"),
    lang("Kannada", "kn"),
    lang("Korean", "ko"),
    lang("Malayalam", "ml"),
    lang("Marathi", "mr"),
    lang("Nepali", "ne"),
    lang("Norwegian", "no"),
    lang("Polish", "pl"),
    lang("Portuguese", "pt"),
    lang("Romanian", "ro"),
    lang("Russian", "ru"),
    lang("Serbian", "sr"),
    lang("Sinhala", "si"),
    lang("Slovak", "sk"),
    lang("Spanish", "es"),
    lang("Sundanese", "su"),
    lang("Swahili", "sw"),
    lang("Swedish", "sv"),
    lang("Tamil", "ta"),
    lang("Telugu", "te"),
    lang("Thai", "th"),
    lang("Turkish", "tr"),
    lang("Ukrainian", "uk"),
    lang("Urdu", "ur"),
    lang("Vietnamese", "vi"),
    lang("Welsh", "cy"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_french_resolves_to_fr() {
        let language = TargetLanguage::from_name("French").unwrap();
        assert_eq!(language.code, "fr");
    }

    #[test]
    fn test_chinese_variants_use_locale_codes() {
        assert_eq!(
            TargetLanguage::from_name("Chinese (Simplified)").unwrap().code,
            "zh-CN"
        );
        assert_eq!(
            TargetLanguage::from_name("Chinese (Traditional)").unwrap().code,
            "zh-TW"
        );
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        assert!(TargetLanguage::from_name("Klingon").is_none());
        assert!(TargetLanguage::from_name("french").is_none());
    }

    #[test]
    fn test_table_has_no_duplicates_or_empty_codes() {
        let mut names: Vec<&str> = LANGUAGES.iter().map(|l| l.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), LANGUAGES.len());

        for language in LANGUAGES {
            assert!(!language.code.is_empty(), "{} has empty code", language.name);
        }
    }

    #[test]
    fn test_display_uses_name() {
        let language = TargetLanguage::from_name("Spanish").unwrap();
        assert_eq!(language.to_string(), "Spanish");
    }
}
