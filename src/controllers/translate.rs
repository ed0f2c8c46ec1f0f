use axum::{
    extract::{Multipart, State},
    response::Html,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use std::sync::Arc;

use crate::{
    domain::{
        document::{extract_text, FileKind},
        translation::{TranslationResult, TranslationService, TranslationServiceApi},
        tts::TargetLanguage,
    },
    error::{AppError, AppResult},
};

const CONFLICTING_INPUT_MESSAGE: &str = "Please either type text or upload a file, not both";
const MISSING_INPUT_MESSAGE: &str = "Please enter text or upload a file to continue";

/// One uploaded file, as received from the multipart form
struct UploadedFile {
    name: String,
    content_type: String,
    bytes: Vec<u8>,
}

pub struct TranslateController {
    translation_service: Arc<TranslationService>,
}

impl TranslateController {
    pub fn new(translation_service: Arc<TranslationService>) -> Self {
        Self {
            translation_service,
        }
    }

    /// POST /api/translate - run the whole pipeline for one user action
    pub async fn translate(
        State(controller): State<Arc<TranslateController>>,
        multipart: Multipart,
    ) -> AppResult<Html<String>> {
        let (typed_text, uploaded_file, language_name) = read_form(multipart).await?;

        let target = TargetLanguage::from_name(&language_name).ok_or_else(|| {
            AppError::BadRequest(format!("Unknown target language: {}", language_name))
        })?;

        // Input resolution happens before any remote call
        let text = resolve_input(typed_text, uploaded_file)?;

        let result = controller
            .translation_service
            .translate_and_speak(text, target)
            .await?;

        Ok(Html(render_result(&result)))
    }
}

/// Pull the text, file and language fields out of the multipart form
async fn read_form(
    mut multipart: Multipart,
) -> AppResult<(Option<String>, Option<UploadedFile>, String)> {
    let mut typed_text: Option<String> = None;
    let mut uploaded_file: Option<UploadedFile> = None;
    let mut language_name: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Malformed form data: {}", e)))?
    {
        let field_name = field.name().unwrap_or_default().to_string();
        match field_name.as_str() {
            "text" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Malformed form data: {}", e)))?;
                if !value.trim().is_empty() {
                    typed_text = Some(value);
                }
            }
            "file" => {
                // Browsers submit an empty file part when nothing was picked
                let name = field.file_name().unwrap_or_default().to_string();
                if name.is_empty() {
                    continue;
                }
                let content_type = field.content_type().unwrap_or_default().to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Malformed form data: {}", e)))?;
                uploaded_file = Some(UploadedFile {
                    name,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            "language" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Malformed form data: {}", e)))?;
                language_name = Some(value);
            }
            _ => {}
        }
    }

    let language_name = language_name
        .ok_or_else(|| AppError::BadRequest("Missing target language".to_string()))?;

    Ok((typed_text, uploaded_file, language_name))
}

/// Exactly one of the two input modes must be active
fn resolve_input(
    typed_text: Option<String>,
    uploaded_file: Option<UploadedFile>,
) -> AppResult<String> {
    match (typed_text, uploaded_file) {
        (Some(_), Some(_)) => Err(AppError::BadRequest(CONFLICTING_INPUT_MESSAGE.to_string())),
        (None, None) => Err(AppError::BadRequest(MISSING_INPUT_MESSAGE.to_string())),
        (Some(text), None) => Ok(text),
        (None, Some(file)) => {
            let kind = FileKind::detect(&file.content_type, &file.name)
                .ok_or_else(|| AppError::UnsupportedFileType(file.name.clone()))?;

            tracing::info!(
                file_name = %file.name,
                content_type = %file.content_type,
                size_bytes = file.bytes.len(),
                kind = ?kind,
                "Extracting text from upload"
            );

            Ok(extract_text(kind, &file.bytes)?)
        }
    }
}

/// Render the result fragment: success banner, inline player, download link
/// and the translated text. The page script injects this verbatim.
fn render_result(result: &TranslationResult) -> String {
    let audio_base64 = BASE64.encode(&result.audio_data);
    format!(
        r#"<div class="result">
  <p class="banner success">Detected {detected}. Translated and spoken in {target}.</p>
  <audio controls controlsList="nodownload noplaybackrate">
    <source src="data:audio/mp3;base64,{audio}" type="audio/mp3">
    Your browser does not support the audio element.
  </audio>
  <p><a class="download" href="data:audio/mp3;base64,{audio}" download="translated_{target}.mp3">Download MP3</a></p>
  <h4>Translated Text:</h4>
  <p class="translated">{text}</p>
</div>"#,
        detected = escape_html(&result.detected_language),
        target = escape_html(result.target_language.name),
        audio = audio_base64,
        text = escape_html(&result.translated_text),
    )
}

/// Minimal escaping for model output embedded in the fragment
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
