use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum TranslationServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("invalid input: {0}")]
    Invalid(String),
}

impl From<TranslationServiceError> for AppError {
    fn from(err: TranslationServiceError) -> Self {
        match err {
            TranslationServiceError::Dependency(msg) => AppError::ExternalService(msg),
            TranslationServiceError::Invalid(msg) => AppError::BadRequest(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dependency_error_maps_to_external_service() {
        let err = TranslationServiceError::Dependency("voice unavailable".to_string());
        match AppError::from(err) {
            AppError::ExternalService(msg) => assert_eq!(msg, "voice unavailable"),
            other => panic!("expected external service error, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_error_maps_to_bad_request() {
        let err = TranslationServiceError::Invalid("no text".to_string());
        match AppError::from(err) {
            AppError::BadRequest(msg) => assert_eq!(msg, "no text"),
            other => panic!("expected bad request error, got {other:?}"),
        }
    }
}
