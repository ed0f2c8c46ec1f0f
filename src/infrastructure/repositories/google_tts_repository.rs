use super::tts_repository::TtsRepository;
use crate::domain::tts::TargetLanguage;
use async_trait::async_trait;

/// The translate_tts endpoint rejects requests above ~100 characters
const MAX_CHUNK_SIZE: usize = 100;

const GOOGLE_TTS_BASE: &str = "https://translate.google.com/translate_tts";
const REFERER: &str = "http://translate.google.com/";
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; WOW64) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/47.0.2526.106 Safari/537.36";

/// Google Translate TTS implementation of the TTS repository.
/// Unofficial endpoint, same one the gTTS library uses.
pub struct GoogleTranslateTtsRepository {
    http_client: reqwest::Client,
    base_url: String,
}

impl GoogleTranslateTtsRepository {
    pub fn new() -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: GOOGLE_TTS_BASE.to_string(),
        }
    }

    /// Fetch the MP3 bytes for a single chunk
    async fn fetch_chunk(
        &self,
        chunk: &str,
        code: &str,
        index: usize,
        total: usize,
    ) -> Result<Vec<u8>, String> {
        let url = format!(
            "{}?ie=UTF-8&q={}&tl={}&total={}&idx={}&textlen={}&client=tw-ob",
            self.base_url,
            urlencoding::encode(chunk),
            code,
            total,
            index,
            chunk.chars().count(),
        );

        let response = self
            .http_client
            .get(&url)
            .header("Referer", REFERER)
            .header("User-Agent", USER_AGENT)
            .send()
            .await
            .map_err(|e| format!("TTS request failed: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(
                status = %status.as_u16(),
                language = code,
                chunk_index = index,
                "Google Translate TTS call failed"
            );
            return Err(format!(
                "TTS error ({}): language code '{}' may be unsupported",
                status.as_u16(),
                code
            ));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| format!("Failed to read TTS audio: {}", e))?;

        Ok(bytes.to_vec())
    }
}

impl Default for GoogleTranslateTtsRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TtsRepository for GoogleTranslateTtsRepository {
    async fn synthesize(&self, text: &str, language: TargetLanguage) -> Result<Vec<u8>, String> {
        if text.trim().is_empty() {
            return Err("Cannot synthesize empty text".to_string());
        }

        let start_time = std::time::Instant::now();
        let chunks = split_into_chunks(text);

        tracing::info!(
            language = %language.code,
            text_length = text.len(),
            chunk_count = chunks.len(),
            "Starting Google Translate TTS synthesis"
        );

        let mut merged_audio = Vec::new();
        for (index, chunk) in chunks.iter().enumerate() {
            let audio = self
                .fetch_chunk(chunk, language.code, index, chunks.len())
                .await?;
            merged_audio.extend(audio);
        }

        tracing::info!(
            provider = "google-translate",
            language = %language.code,
            latency_ms = start_time.elapsed().as_millis(),
            chunk_count = chunks.len(),
            audio_size_bytes = merged_audio.len(),
            "TTS synthesis completed"
        );

        Ok(merged_audio)
    }
}

/// Split text on whitespace into chunks of at most MAX_CHUNK_SIZE characters.
/// A single word longer than the limit is split at character boundaries.
fn split_into_chunks(text: &str) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if word.chars().count() > MAX_CHUNK_SIZE {
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
            }
            let chars: Vec<char> = word.chars().collect();
            for piece in chars.chunks(MAX_CHUNK_SIZE) {
                chunks.push(piece.iter().collect());
            }
            continue;
        }

        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };

        if needed > MAX_CHUNK_SIZE {
            chunks.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}
