use secrecy::{ExposeSecret, SecretString};

use super::client::TranscriptionClient;
use super::error::TranscriptionError;

const OPENAI_TRANSCRIPTION_URL: &str = "https://api.openai.com/v1/audio/transcriptions";
const OPENAI_MODEL: &str = "whisper-1";

/// OpenAI Whisper API client
pub struct OpenAIClient {
    api_key: SecretString,
    fallback_extension: String,
}

impl OpenAIClient {
    pub fn new(api_key: SecretString, fallback_extension: String) -> Self {
        Self {
            api_key,
            fallback_extension,
        }
    }
}

impl TranscriptionClient for OpenAIClient {
    fn transcription_url(&self) -> String {
        OPENAI_TRANSCRIPTION_URL.to_string()
    }

    fn add_auth(
        &self,
        request: reqwest::blocking::RequestBuilder,
    ) -> reqwest::blocking::RequestBuilder {
        request.bearer_auth(self.api_key.expose_secret())
    }

    fn build_form(
        &self,
        location: &str,
    ) -> Result<reqwest::blocking::multipart::Form, TranscriptionError> {
        let file_name = file_name_from_location(location, &self.fallback_extension);
        let subtype = subtype_from_file_name(&file_name, &self.fallback_extension);

        let audio_bytes = std::fs::read(location)?;
        let audio_part = reqwest::blocking::multipart::Part::bytes(audio_bytes)
            .file_name(file_name)
            .mime_str(&format!("audio/{}", subtype))
            .map_err(|e| {
                TranscriptionError::ApiError(format!("Failed to create audio part: {}", e))
            })?;

        let form = reqwest::blocking::multipart::Form::new()
            .part("file", audio_part)
            .text("model", OPENAI_MODEL);

        Ok(form)
    }
}

/// Trailing path segment of the location handle, or a generic name
pub(crate) fn file_name_from_location(location: &str, fallback_extension: &str) -> String {
    location
        .rsplit(['/', '\\'])
        .next()
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("audio.{}", fallback_extension))
}

/// Lower-cased extension of the file name, or the configured fallback subtype
pub(crate) fn subtype_from_file_name(file_name: &str, fallback: &str) -> String {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .filter(|ext| !ext.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_uses_trailing_segment() {
        assert_eq!(
            file_name_from_location("/data/user/0/cache/Recording 3.m4a", "mp3"),
            "Recording 3.m4a"
        );
        assert_eq!(
            file_name_from_location("C:\\Users\\me\\voice.wav", "mp3"),
            "voice.wav"
        );
    }

    #[test]
    fn file_name_falls_back_on_empty_segment() {
        assert_eq!(file_name_from_location("/tmp/uploads/", "mp3"), "audio.mp3");
        assert_eq!(file_name_from_location("", "wav"), "audio.wav");
    }

    #[test]
    fn subtype_comes_from_extension() {
        assert_eq!(subtype_from_file_name("voice.WAV", "mp3"), "wav");
        assert_eq!(subtype_from_file_name("a.b.m4a", "mp3"), "m4a");
    }

    #[test]
    fn subtype_falls_back_without_extension() {
        assert_eq!(subtype_from_file_name("voice", "mp3"), "mp3");
        assert_eq!(subtype_from_file_name("voice.", "mp3"), "mp3");
    }
}
