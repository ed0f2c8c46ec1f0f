use super::dto::TranslationResult;
use super::error::TranslationServiceError;
use crate::domain::tts::TargetLanguage;
use crate::infrastructure::repositories::{LanguageModelRepository, TtsRepository};
use async_trait::async_trait;
use regex::Regex;
use std::sync::{Arc, LazyLock};

/// Only the opening of the text is needed to identify its language
const DETECTION_PREFIX_CHARS: usize = 200;

/// Prefixes the model sometimes adds despite being told not to
static BOILERPLATE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(translated text:|translation:)").unwrap());

pub struct TranslationService {
    llm_repo: Arc<dyn LanguageModelRepository>,
    tts_repo: Arc<dyn TtsRepository>,
}

impl TranslationService {
    pub fn new(llm_repo: Arc<dyn LanguageModelRepository>, tts_repo: Arc<dyn TtsRepository>) -> Self {
        Self { llm_repo, tts_repo }
    }
}

#[async_trait]
pub trait TranslationServiceApi: Send + Sync {
    /// Run the full pipeline for one user action
    ///
    /// This operation:
    /// - Detects the source language from the opening of the text
    /// - Translates the full text into the target language
    /// - Strips any boilerplate prefix the model added
    /// - Synthesizes MP3 audio from the translation
    ///
    /// The two model calls are strictly sequential, translation needs the
    /// detected language name. Any failure aborts the whole action.
    async fn translate_and_speak(
        &self,
        text: String,
        target: TargetLanguage,
    ) -> Result<TranslationResult, TranslationServiceError>;
}

#[async_trait]
impl TranslationServiceApi for TranslationService {
    async fn translate_and_speak(
        &self,
        text: String,
        target: TargetLanguage,
    ) -> Result<TranslationResult, TranslationServiceError> {
        if text.trim().is_empty() {
            return Err(TranslationServiceError::Invalid(
                "There is no text to translate".to_string(),
            ));
        }

        tracing::info!(
            text_length = text.len(),
            target_language = %target,
            "Translation pipeline started"
        );

        // 1. Detect the source language
        let detected_language = self.detect_language(&text).await?;

        tracing::info!(
            detected_language = %detected_language,
            "Language detected"
        );

        // 2. Translate
        let translated_text = self.translate(&text, &detected_language, target).await?;

        tracing::info!(
            translated_length = translated_text.len(),
            "Text translated"
        );

        // 3. Synthesize speech
        let audio_data = self
            .tts_repo
            .synthesize(&translated_text, target)
            .await
            .map_err(TranslationServiceError::Dependency)?;

        tracing::info!(
            audio_size_bytes = audio_data.len(),
            "Speech synthesized"
        );

        Ok(TranslationResult {
            detected_language,
            target_language: target,
            translated_text,
            audio_data,
        })
    }
}

impl TranslationService {
    async fn detect_language(&self, text: &str) -> Result<String, TranslationServiceError> {
        let prompt = format!(
            "Identify only the language name of this text: {}",
            detection_prefix(text)
        );

        let response = self
            .llm_repo
            .generate(&prompt)
            .await
            .map_err(TranslationServiceError::Dependency)?;

        // The response is an opaque display string, not validated against
        // any known language set
        Ok(response.trim().to_string())
    }

    async fn translate(
        &self,
        text: &str,
        detected_language: &str,
        target: TargetLanguage,
    ) -> Result<String, TranslationServiceError> {
        let prompt = format!(
            "Translate this text from {} to {}. \
             Respond ONLY with the translated text, no explanation or prefix.\n\n{}",
            detected_language, target.name, text
        );

        let response = self
            .llm_repo
            .generate(&prompt)
            .await
            .map_err(TranslationServiceError::Dependency)?;

        Ok(strip_boilerplate(response.trim()))
    }
}

/// First DETECTION_PREFIX_CHARS characters of the text, on a char boundary.
fn detection_prefix(text: &str) -> &str {
    match text.char_indices().nth(DETECTION_PREFIX_CHARS) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

/// Strip a leading "translated text:" or "translation:" prefix from the
/// model's response.
fn strip_boilerplate(text: &str) -> String {
    BOILERPLATE_PREFIX.replace(text, "").trim().to_string()
}
