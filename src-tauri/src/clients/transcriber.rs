use std::path::Path;

use log::{error, info, warn};
use secrecy::{ExposeSecret, SecretString};

use crate::config::{AppConfig, OpenAIConfig};
use crate::keychain::{self, ProviderAccount};

use super::client::TranscriptionClient;
use super::config::ApiConfig;
use super::error::TranscriptionError;
use super::openai_client::OpenAIClient;

const OPENAI_MODELS_URL: &str = "https://api.openai.com/v1/models";

/// Transcription service that submits one audio file per call
///
/// Uses a `TranscriptionClient` implementation for the provider-specific
/// parts (endpoint, auth, form layout) and owns validation and the
/// request/response handling.
pub struct Transcriber {
    client: Box<dyn TranscriptionClient>,
    max_upload_bytes: u64,
}

impl Transcriber {
    fn new(client: Box<dyn TranscriptionClient>, max_upload_bytes: u64) -> Self {
        Self {
            client,
            max_upload_bytes,
        }
    }

    /// Create a Transcriber with the stored credential
    ///
    /// Reads the API key from the keychain, falling back to the
    /// `OPENAI_API_KEY` environment variable.
    pub fn from_stored_credential(config: &AppConfig) -> Result<Self, TranscriptionError> {
        let api_key = load_api_key()?;
        let client = OpenAIClient::new(api_key, config.fallback_extension.clone());
        Ok(Self::new(Box::new(client), config.max_upload_bytes))
    }

    /// Test whether an API key is accepted by the service
    ///
    /// # Returns
    /// * `Ok(true)` - Key is valid
    /// * `Ok(false)` - Key is invalid (401 Unauthorized)
    /// * `Err(TranscriptionError)` - Network or other API error
    pub fn test_api_key(config: &ApiConfig) -> Result<bool, TranscriptionError> {
        let client = reqwest::blocking::Client::new();
        let response = client
            .get(OPENAI_MODELS_URL)
            .bearer_auth(config.api_key.expose_secret())
            .send()
            .map_err(|e| {
                error!("API key test request failed: {}", e);
                TranscriptionError::RequestFailed(e.to_string())
            })?;

        let status = response.status();
        if status.is_success() {
            Ok(true)
        } else if status.as_u16() == 401 {
            warn!("API key is invalid (401 Unauthorized)");
            Ok(false)
        } else {
            let error_text = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(TranscriptionError::ApiError(format!(
                "API returned status {}: {}",
                status, error_text
            )))
        }
    }

    /// Transcribe the audio file behind the location handle
    ///
    /// Issues exactly one request per invocation; there is no retry and no
    /// client-side timeout beyond the HTTP stack's own.
    ///
    /// # Returns
    /// * `Ok(String)` - Transcribed text
    /// * `Err(TranscriptionError)` - Error details
    pub fn transcribe(&self, location: &str) -> Result<String, TranscriptionError> {
        self.validate_file(Path::new(location))?;

        let form = self.client.build_form(location)?;
        self.send_and_parse(form)
    }

    /// Validate file exists and is within the size ceiling
    fn validate_file(&self, file_path: &Path) -> Result<(), TranscriptionError> {
        if !file_path.exists() {
            error!("File not found: {:?}", file_path);
            return Err(TranscriptionError::FileNotFound(
                file_path.to_string_lossy().to_string(),
            ));
        }

        let metadata = std::fs::metadata(file_path)?;
        let file_size = metadata.len();

        if file_size > self.max_upload_bytes {
            error!(
                "File too large: {} bytes > {} bytes",
                file_size, self.max_upload_bytes
            );
            return Err(TranscriptionError::FileTooLarge {
                size_bytes: file_size,
                limit_bytes: self.max_upload_bytes,
            });
        }

        Ok(())
    }

    /// Send the request and parse the response body
    fn send_and_parse(
        &self,
        form: reqwest::blocking::multipart::Form,
    ) -> Result<String, TranscriptionError> {
        let http_client = reqwest::blocking::Client::new();
        let request = http_client.post(self.client.transcription_url());
        let request = self.client.add_auth(request);

        let response = request.multipart(form).send().map_err(|e| {
            error!("API request error: {}", e);
            TranscriptionError::RequestFailed(e.to_string())
        })?;

        // Non-success: relay the server's message when the body carries one
        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().unwrap_or_default();
            error!("API error response ({}): {}", status, error_text);

            let message = serde_json::from_str::<serde_json::Value>(&error_text)
                .ok()
                .and_then(|body| body["error"]["message"].as_str().map(str::to_string))
                .unwrap_or_else(|| format!("API returned status {}", status));

            return Err(TranscriptionError::ApiError(message));
        }

        let json: serde_json::Value = response.json().map_err(|e| {
            error!("Failed to parse response: {}", e);
            TranscriptionError::RequestFailed(format!("Failed to parse response: {}", e))
        })?;

        let text = json["text"].as_str().unwrap_or("").to_string();

        info!("Transcription successful: {} characters", text.len());

        Ok(text)
    }
}

/// Keychain first, `OPENAI_API_KEY` environment variable second
fn load_api_key() -> Result<SecretString, TranscriptionError> {
    match keychain::load_provider_config::<OpenAIConfig>(ProviderAccount::OpenAI) {
        Ok(Some(config)) => return Ok(SecretString::from(config.api_key)),
        Ok(None) => {}
        Err(e) => warn!("Failed to read API key from keychain: {}", e),
    }

    match std::env::var("OPENAI_API_KEY") {
        Ok(key) if !key.trim().is_empty() => Ok(SecretString::from(key)),
        _ => Err(TranscriptionError::ApiKeyMissing),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_LIMIT_BYTES: u64 = 25 * 1024 * 1024;

    /// Client pointed at a local mock server, form layout as in production
    struct MockServerClient {
        url: String,
    }

    impl TranscriptionClient for MockServerClient {
        fn transcription_url(&self) -> String {
            self.url.clone()
        }

        fn add_auth(
            &self,
            request: reqwest::blocking::RequestBuilder,
        ) -> reqwest::blocking::RequestBuilder {
            request.bearer_auth("sk-test")
        }

        fn build_form(
            &self,
            location: &str,
        ) -> Result<reqwest::blocking::multipart::Form, TranscriptionError> {
            let audio_bytes = std::fs::read(location)?;
            let part = reqwest::blocking::multipart::Part::bytes(audio_bytes)
                .file_name("test.mp3")
                .mime_str("audio/mp3")
                .map_err(|e| TranscriptionError::ApiError(e.to_string()))?;
            Ok(reqwest::blocking::multipart::Form::new()
                .part("file", part)
                .text("model", "whisper-1"))
        }
    }

    fn transcriber_for(server: &mockito::ServerGuard, max_upload_bytes: u64) -> Transcriber {
        Transcriber::new(
            Box::new(MockServerClient {
                url: format!("{}/v1/audio/transcriptions", server.url()),
            }),
            max_upload_bytes,
        )
    }

    fn write_temp_audio(name: &str, bytes: &[u8]) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("audioscribe-{}-{}", std::process::id(), name));
        std::fs::write(&path, bytes).expect("write temp audio file");
        path
    }

    #[test]
    fn returns_transcript_on_success() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/v1/audio/transcriptions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"text": "hello world"}"#)
            .create();

        let path = write_temp_audio("success.mp3", b"fake-audio-bytes");
        let result = transcriber_for(&server, TEST_LIMIT_BYTES)
            .transcribe(&path.to_string_lossy());
        std::fs::remove_file(&path).ok();

        mock.assert();
        assert_eq!(result.unwrap(), "hello world");
    }

    #[test]
    fn relays_server_error_message() {
        let mut server = mockito::Server::new();
        server
            .mock("POST", "/v1/audio/transcriptions")
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error": {"message": "bad file"}}"#)
            .create();

        let path = write_temp_audio("bad.mp3", b"fake-audio-bytes");
        let result = transcriber_for(&server, TEST_LIMIT_BYTES)
            .transcribe(&path.to_string_lossy());
        std::fs::remove_file(&path).ok();

        match result {
            Err(TranscriptionError::ApiError(message)) => assert_eq!(message, "bad file"),
            other => panic!("expected ApiError, got {:?}", other),
        }
    }

    #[test]
    fn generic_message_when_error_body_is_unparseable() {
        let mut server = mockito::Server::new();
        server
            .mock("POST", "/v1/audio/transcriptions")
            .with_status(500)
            .with_body("<html>oops</html>")
            .create();

        let path = write_temp_audio("oops.mp3", b"fake-audio-bytes");
        let result = transcriber_for(&server, TEST_LIMIT_BYTES)
            .transcribe(&path.to_string_lossy());
        std::fs::remove_file(&path).ok();

        match result {
            Err(TranscriptionError::ApiError(message)) => {
                assert!(message.contains("500"), "unexpected message: {}", message)
            }
            other => panic!("expected ApiError, got {:?}", other),
        }
    }

    #[test]
    fn oversize_file_is_rejected_before_any_request() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/v1/audio/transcriptions")
            .expect(0)
            .create();

        let path = write_temp_audio("big.mp3", &[0u8; 64]);
        let result = transcriber_for(&server, 16).transcribe(&path.to_string_lossy());
        std::fs::remove_file(&path).ok();

        mock.assert();
        match result {
            Err(TranscriptionError::FileTooLarge {
                size_bytes,
                limit_bytes,
            }) => {
                assert_eq!(size_bytes, 64);
                assert_eq!(limit_bytes, 16);
            }
            other => panic!("expected FileTooLarge, got {:?}", other),
        }
    }

    #[test]
    fn missing_file_is_rejected_locally() {
        let server = mockito::Server::new();
        let result = transcriber_for(&server, TEST_LIMIT_BYTES)
            .transcribe("/nonexistent/audioscribe-missing.mp3");

        assert!(matches!(result, Err(TranscriptionError::FileNotFound(_))));
    }
}
