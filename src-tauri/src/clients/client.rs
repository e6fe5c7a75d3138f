use super::error::TranscriptionError;

/// Trait for transcription API clients
///
/// Each implementation knows how to:
/// - Construct the correct API URL
/// - Add proper authentication headers
/// - Build the multipart form from a location handle
pub trait TranscriptionClient: Send + Sync {
    /// Get the transcription API endpoint URL
    fn transcription_url(&self) -> String;

    /// Add authentication to the request builder
    fn add_auth(
        &self,
        request: reqwest::blocking::RequestBuilder,
    ) -> reqwest::blocking::RequestBuilder;

    /// Build the multipart form for the file behind the location handle
    fn build_form(
        &self,
        location: &str,
    ) -> Result<reqwest::blocking::multipart::Form, TranscriptionError>;
}
