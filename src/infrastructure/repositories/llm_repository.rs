use async_trait::async_trait;

/// Repository for generative-language-model calls.
/// Abstracts the underlying provider (Gemini, OpenAI, etc.)
///
/// Implementations are responsible for:
/// - Provider-specific request/response shapes
/// - Requesting text-only output
/// - Surfacing provider errors as readable messages
#[async_trait]
pub trait LanguageModelRepository: Send + Sync {
    /// Send a prompt and return the model's plain-text response.
    ///
    /// # Errors
    /// Returns error if the provider is unreachable, rejects the request
    /// (auth, quota) or answers with no text candidate
    async fn generate(&self, prompt: &str) -> Result<String, String>;
}
