use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("unsupported file type: {0}")]
    Unsupported(String),
    #[error("file is not valid UTF-8: {0}")]
    Encoding(String),
    #[error("could not parse file: {0}")]
    Parse(String),
}

impl From<DocumentError> for AppError {
    fn from(err: DocumentError) -> Self {
        match err {
            DocumentError::Unsupported(kind) => AppError::UnsupportedFileType(kind),
            DocumentError::Encoding(msg) | DocumentError::Parse(msg) => AppError::BadRequest(msg),
        }
    }
}
