pub mod document;
pub mod translation;
pub mod tts;
