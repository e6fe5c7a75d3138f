//! Session state - single source of truth for the pick/transcribe screen
//!
//! Three fields move together:
//! - the selected file (replaced on re-pick, cleared on removal)
//! - the latest transcript (cleared whenever the file changes)
//! - the pending flag (set while a request is in flight, always cleared
//!   on response or error)
//!
//! Commands are the only mutators; nothing here is persisted.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};

/// Descriptor of the currently picked audio file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, specta::Type)]
#[serde(rename_all = "camelCase")]
pub struct SelectedFile {
    /// Location handle, resolvable by the host file I/O layer
    pub uri: String,
    pub name: String,
    pub size: u64,
    pub mime_type: String,
}

/// Everything the screen needs to render
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, specta::Type)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub file: Option<SelectedFile>,
    pub transcript: Option<String>,
    pub pending: bool,
}

/// Coarse phase derived from the snapshot, for logging and rejections
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum SessionPhase {
    /// No file selected
    Empty,
    /// File selected, ready to transcribe
    FileSelected,
    /// Request in flight
    Transcribing,
}

impl SessionSnapshot {
    fn phase(&self) -> SessionPhase {
        if self.pending {
            SessionPhase::Transcribing
        } else if self.file.is_some() {
            SessionPhase::FileSelected
        } else {
            SessionPhase::Empty
        }
    }
}

/// Reason a transcription request was not started
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("transcription rejected in {phase} phase")]
pub struct TranscribeRejection {
    pub phase: SessionPhase,
}

impl TranscribeRejection {
    pub fn user_message(&self) -> String {
        match self.phase {
            SessionPhase::Empty => "Pick an audio file first.".to_string(),
            SessionPhase::Transcribing => "A transcription is already running.".to_string(),
            SessionPhase::FileSelected => "Transcription could not be started.".to_string(),
        }
    }
}

/// Thread-safe session state manager
#[derive(Debug, Default)]
pub struct SessionStateManager {
    state: Mutex<SessionSnapshot>,
}

impl SessionStateManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state (read-only, thread-safe)
    pub fn snapshot(&self) -> SessionSnapshot {
        self.state.lock().unwrap().clone()
    }

    /// Replace the selected file
    ///
    /// Clears any previous transcript and resets the pending flag, so the
    /// screen always starts fresh after a re-pick.
    pub fn select_file(&self, file: SelectedFile) {
        let mut state = self.state.lock().unwrap();
        state.file = Some(file);
        state.transcript = None;
        state.pending = false;
    }

    /// Clear the selected file and any transcript
    pub fn remove_file(&self) {
        let mut state = self.state.lock().unwrap();
        state.file = None;
        state.transcript = None;
        state.pending = false;
    }

    /// Mark a request as in flight and return the file to submit
    ///
    /// This is the ONLY way to enter the pending phase; it fails when no
    /// file is selected or a request is already running, so at most one
    /// request is ever in flight.
    pub fn begin_transcription(&self) -> Result<SelectedFile, TranscribeRejection> {
        let mut state = self.state.lock().unwrap();
        let phase = state.phase();

        match (phase, state.file.clone()) {
            (SessionPhase::FileSelected, Some(file)) => {
                state.pending = true;
                Ok(file)
            }
            _ => Err(TranscribeRejection { phase }),
        }
    }

    /// Store the transcript and clear the pending flag
    pub fn complete_transcription(&self, text: String) {
        let mut state = self.state.lock().unwrap();
        state.transcript = Some(text);
        state.pending = false;
    }

    /// Clear the pending flag after a failed request, keeping the file
    /// so the user may retry manually
    pub fn fail_transcription(&self) {
        let mut state = self.state.lock().unwrap();
        state.pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_file(name: &str) -> SelectedFile {
        SelectedFile {
            uri: format!("/tmp/{}", name),
            name: name.to_string(),
            size: 1024,
            mime_type: "audio/mpeg".to_string(),
        }
    }

    #[test]
    fn select_replaces_file_and_clears_transcript() {
        let manager = SessionStateManager::new();
        manager.select_file(sample_file("first.mp3"));
        manager.complete_transcription("old transcript".to_string());

        manager.select_file(sample_file("second.mp3"));

        let snapshot = manager.snapshot();
        assert_eq!(snapshot.file.unwrap().name, "second.mp3");
        assert_eq!(snapshot.transcript, None);
        assert!(!snapshot.pending);
    }

    #[test]
    fn remove_clears_file_and_transcript() {
        let manager = SessionStateManager::new();
        manager.select_file(sample_file("voice.m4a"));
        manager.complete_transcription("something".to_string());

        manager.remove_file();

        assert_eq!(manager.snapshot(), SessionSnapshot::default());
        // With nothing selected the transcribe trigger must stay rejected
        let rejection = manager.begin_transcription().unwrap_err();
        assert_eq!(rejection.phase, SessionPhase::Empty);
    }

    #[test]
    fn begin_requires_a_selected_file() {
        let manager = SessionStateManager::new();

        let rejection = manager.begin_transcription().unwrap_err();
        assert_eq!(rejection.phase, SessionPhase::Empty);
        assert!(!manager.snapshot().pending);
    }

    #[test]
    fn begin_returns_the_selected_file_and_sets_pending() {
        let manager = SessionStateManager::new();
        manager.select_file(sample_file("voice.wav"));

        let file = manager.begin_transcription().unwrap();
        assert_eq!(file.name, "voice.wav");
        assert!(manager.snapshot().pending);
    }

    #[test]
    fn second_begin_is_rejected_while_pending() {
        let manager = SessionStateManager::new();
        manager.select_file(sample_file("voice.wav"));
        manager.begin_transcription().unwrap();

        let rejection = manager.begin_transcription().unwrap_err();
        assert_eq!(rejection.phase, SessionPhase::Transcribing);
    }

    #[test]
    fn complete_stores_transcript_and_clears_pending() {
        let manager = SessionStateManager::new();
        manager.select_file(sample_file("voice.wav"));
        manager.begin_transcription().unwrap();

        manager.complete_transcription("hello world".to_string());

        let snapshot = manager.snapshot();
        assert_eq!(snapshot.transcript.as_deref(), Some("hello world"));
        assert!(!snapshot.pending);
    }

    #[test]
    fn failure_clears_pending_and_keeps_file_for_manual_retry() {
        let manager = SessionStateManager::new();
        manager.select_file(sample_file("voice.wav"));
        manager.begin_transcription().unwrap();

        manager.fail_transcription();

        let snapshot = manager.snapshot();
        assert!(!snapshot.pending);
        assert_eq!(snapshot.transcript, None);
        assert!(snapshot.file.is_some());
        // Retry is a fresh begin, not an automatic re-issue
        assert!(manager.begin_transcription().is_ok());
    }
}
