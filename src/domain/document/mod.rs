pub mod error;
pub mod extract;

pub use error::DocumentError;
pub use extract::{extract_text, FileKind};
