//! Typesafe events for the transcription flow.
//!
//! Emitted from Rust and listened to in TypeScript with full type safety
//! via tauri-specta.

use serde::{Deserialize, Serialize};

/// Transcription state change event - single event stream for the whole flow
#[derive(Debug, Clone, Serialize, Deserialize, specta::Type, tauri_specta::Event)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum TranscriptionStateChanged {
    /// Request was issued
    #[serde(rename = "started")]
    Started,
    /// Transcript received
    #[serde(rename = "finished")]
    Finished {
        /// The transcribed text
        text: String,
    },
    /// Request failed
    #[serde(rename = "error")]
    Error {
        /// Technical error message for debugging
        #[serde(rename = "errorMessage")]
        error_message: String,
        /// User-friendly error message
        #[serde(rename = "userMessage")]
        user_message: String,
    },
}
