pub mod gemini_repository;
pub mod google_tts_repository;
pub mod llm_repository;
pub mod tts_repository;

pub use gemini_repository::GeminiRepository;
pub use google_tts_repository::GoogleTranslateTtsRepository;
pub use llm_repository::LanguageModelRepository;
pub use tts_repository::TtsRepository;
