use log::{error, warn};
use tauri::State;
use tauri_specta::Event;

use crate::clients::{Transcriber, TranscriptionError};
use crate::config::{AppConfig, Config};
use crate::error::Error;
use crate::picker;
use crate::session::{
    SelectedFile, SessionSnapshot, SessionStateManager, TranscriptionStateChanged,
};

// ===== SESSION COMMANDS =====

#[tauri::command]
#[specta::specta]
pub fn get_session(session: State<SessionStateManager>) -> SessionSnapshot {
    session.snapshot()
}

#[tauri::command]
#[specta::specta]
pub fn pick_audio_file(
    app: tauri::AppHandle,
    session: State<SessionStateManager>,
    config_store: State<Config>,
) -> Result<Option<SelectedFile>, String> {
    let app_config = config_store.app_config();

    let picked = picker::pick_audio_file(&app, &app_config)
        .map_err(Error::from)
        .map_err(|e| {
            error!("File pick failed: {:?}", e);
            e.user_message()
        })?;

    // Cancellation leaves existing state untouched
    let Some(file) = picked else {
        return Ok(None);
    };

    session.select_file(file.clone());
    Ok(Some(file))
}

#[tauri::command]
#[specta::specta]
pub fn remove_audio_file(session: State<SessionStateManager>) {
    session.remove_file();
}

// ===== TRANSCRIPTION =====

#[tauri::command]
#[specta::specta]
pub async fn start_transcription(
    app: tauri::AppHandle,
    session: State<'_, SessionStateManager>,
    config_store: State<'_, Config>,
) -> Result<String, String> {
    let file = session.begin_transcription().map_err(|rejection| {
        warn!("{}", rejection);
        rejection.user_message()
    })?;

    let app_config = config_store.app_config();

    if let Err(e) = TranscriptionStateChanged::Started.emit(&app) {
        error!("Failed to emit transcription-started event: {}", e);
    }

    // The request itself is blocking (no timeout, no retry); keep it off
    // the async runtime. The pending flag set above blocks a second
    // request until this one resolves either way.
    let location = file.uri.clone();
    let outcome =
        tokio::task::spawn_blocking(move || run_transcription(&app_config, &location)).await;

    let result = match outcome {
        Ok(result) => result,
        Err(e) => Err(Error::from(TranscriptionError::RequestFailed(format!(
            "Transcription task failed: {}",
            e
        )))),
    };

    match result {
        Ok(text) => {
            session.complete_transcription(text.clone());

            let event = TranscriptionStateChanged::Finished { text: text.clone() };
            if let Err(e) = event.emit(&app) {
                error!("Failed to emit transcription-finished event: {}", e);
            }

            Ok(text)
        }
        Err(e) => {
            error!("Transcription error: {:?}", e);
            session.fail_transcription();

            let user_message = e.user_message();
            let event = TranscriptionStateChanged::Error {
                error_message: format!("{:?}", e),
                user_message: user_message.clone(),
            };
            if let Err(emit_err) = event.emit(&app) {
                error!("Failed to emit transcription-error event: {}", emit_err);
            }

            Err(user_message)
        }
    }
}

/// One credential lookup and one request per invocation
fn run_transcription(app_config: &AppConfig, location: &str) -> Result<String, Error> {
    let transcriber = Transcriber::from_stored_credential(app_config)?;
    Ok(transcriber.transcribe(location)?)
}
