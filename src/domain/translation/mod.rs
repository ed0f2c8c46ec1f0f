pub mod dto;
pub mod error;
pub mod service;

pub use dto::TranslationResult;
pub use error::TranslationServiceError;
pub use service::{TranslationService, TranslationServiceApi};
