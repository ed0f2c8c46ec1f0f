pub mod language;

pub use language::{TargetLanguage, LANGUAGES};
