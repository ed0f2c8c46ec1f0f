use crate::domain::tts::TargetLanguage;
use async_trait::async_trait;

/// Repository for TTS synthesis operations.
/// Abstracts the underlying TTS provider (Google Translate, Polly, etc.)
///
/// Implementations are responsible for:
/// - Handling provider-specific text length limitations
/// - Splitting text into chunks if needed
/// - Merging audio chunks into a single audio stream
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Synthesize text to speech for a given language
    ///
    /// Returns merged audio data ready for playback (MP3 format)
    ///
    /// # Errors
    /// Returns error if the text is empty, the language code is not accepted
    /// by the provider, or the provider is unavailable
    async fn synthesize(&self, text: &str, language: TargetLanguage) -> Result<Vec<u8>, String>;
}
