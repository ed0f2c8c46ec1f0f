use crate::domain::tts::TargetLanguage;

/// Everything the presenter needs to render one successful request
#[derive(Debug, Clone)]
pub struct TranslationResult {
    pub detected_language: String,
    pub target_language: TargetLanguage,
    pub translated_text: String,
    pub audio_data: Vec<u8>,
}
