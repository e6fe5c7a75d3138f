//! File selection and pre-upload validation.
//!
//! The host dialog constrains picks to the audio allow-list; everything a
//! picked file must satisfy before it may replace session state lives here.

use std::path::Path;

use log::{debug, error};
use tauri_plugin_dialog::DialogExt;

use crate::config::AppConfig;
use crate::session::SelectedFile;

struct AudioType {
    extension: &'static str,
    mime_type: &'static str,
}

/// Fixed allow-list of selectable audio types
const ALLOWED_AUDIO_TYPES: &[AudioType] = &[
    AudioType {
        extension: "mp3",
        mime_type: "audio/mpeg",
    },
    AudioType {
        extension: "wav",
        mime_type: "audio/wav",
    },
    AudioType {
        extension: "m4a",
        mime_type: "audio/x-m4a",
    },
];

#[derive(Debug, thiserror::Error)]
pub enum PickError {
    #[error("File too large: {size_bytes} bytes (limit {limit_bytes})")]
    FileTooLarge { size_bytes: u64, limit_bytes: u64 },
    #[error("Unsupported file type: {mime_type}")]
    UnsupportedType { mime_type: String },
    #[error("Selected file is not accessible: {0}")]
    Unreadable(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PickError {
    /// Returns a user-friendly error message suitable for display in the UI
    pub fn user_message(&self) -> String {
        match self {
            PickError::FileTooLarge {
                size_bytes,
                limit_bytes,
            } => {
                let mb = size_bytes / (1024 * 1024);
                let limit_mb = limit_bytes / (1024 * 1024);
                format!("Audio file too large ({}MB). Maximum is {}MB.", mb, limit_mb)
            }
            PickError::UnsupportedType { .. } => {
                "Unsupported file type. Pick an mp3, wav or m4a file.".to_string()
            }
            PickError::Unreadable(_) | PickError::Io(_) => {
                "Could not open the selected file. Please try again.".to_string()
            }
        }
    }
}

/// Open the host file dialog and validate the pick
///
/// # Returns
/// * `Ok(Some(SelectedFile))` - Validated descriptor
/// * `Ok(None)` - Dialog was cancelled; existing state must stay untouched
/// * `Err(PickError)` - Selection failed validation; no state change either
pub fn pick_audio_file(
    app: &tauri::AppHandle,
    config: &AppConfig,
) -> Result<Option<SelectedFile>, PickError> {
    let extensions: Vec<&str> = ALLOWED_AUDIO_TYPES.iter().map(|t| t.extension).collect();

    let Some(picked) = app
        .dialog()
        .file()
        .add_filter("Audio", &extensions)
        .blocking_pick_file()
    else {
        debug!("File pick cancelled");
        return Ok(None);
    };

    let path = picked
        .into_path()
        .map_err(|e| PickError::Unreadable(e.to_string()))?;

    let file = describe_file(&path)?;
    validate_selection(&file, config.max_upload_bytes)?;

    Ok(Some(file))
}

/// Build the descriptor for a picked path
fn describe_file(path: &Path) -> Result<SelectedFile, PickError> {
    let metadata = std::fs::metadata(path)?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mime_type = path
        .extension()
        .and_then(|ext| mime_for_extension(&ext.to_string_lossy().to_ascii_lowercase()))
        .unwrap_or_default()
        .to_string();

    Ok(SelectedFile {
        uri: path.to_string_lossy().into_owned(),
        name,
        size: metadata.len(),
        mime_type,
    })
}

/// Reject descriptors outside the allow-list or above the size ceiling
fn validate_selection(file: &SelectedFile, limit_bytes: u64) -> Result<(), PickError> {
    if !ALLOWED_AUDIO_TYPES
        .iter()
        .any(|t| t.mime_type == file.mime_type)
    {
        error!("Unsupported file type picked: '{}'", file.mime_type);
        return Err(PickError::UnsupportedType {
            mime_type: file.mime_type.clone(),
        });
    }

    if file.size > limit_bytes {
        error!(
            "Picked file too large: {} bytes > {} bytes",
            file.size, limit_bytes
        );
        return Err(PickError::FileTooLarge {
            size_bytes: file.size,
            limit_bytes,
        });
    }

    Ok(())
}

fn mime_for_extension(extension: &str) -> Option<&'static str> {
    ALLOWED_AUDIO_TYPES
        .iter()
        .find(|t| t.extension == extension)
        .map(|t| t.mime_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_MAX_UPLOAD_BYTES;

    fn descriptor(size: u64, mime_type: &str) -> SelectedFile {
        SelectedFile {
            uri: "/tmp/voice.mp3".to_string(),
            name: "voice.mp3".to_string(),
            size,
            mime_type: mime_type.to_string(),
        }
    }

    #[test]
    fn rejects_files_above_the_ceiling() {
        let result = validate_selection(
            &descriptor(DEFAULT_MAX_UPLOAD_BYTES + 1, "audio/mpeg"),
            DEFAULT_MAX_UPLOAD_BYTES,
        );

        assert!(matches!(
            result,
            Err(PickError::FileTooLarge { size_bytes, .. }) if size_bytes == DEFAULT_MAX_UPLOAD_BYTES + 1
        ));
    }

    #[test]
    fn accepts_files_exactly_at_the_ceiling() {
        for mime_type in ["audio/mpeg", "audio/wav", "audio/x-m4a"] {
            let result = validate_selection(
                &descriptor(DEFAULT_MAX_UPLOAD_BYTES, mime_type),
                DEFAULT_MAX_UPLOAD_BYTES,
            );
            assert!(result.is_ok(), "{} should be accepted", mime_type);
        }
    }

    #[test]
    fn rejects_types_outside_the_allow_list() {
        for mime_type in ["video/mp4", "audio/ogg", ""] {
            let result = validate_selection(&descriptor(1024, mime_type), DEFAULT_MAX_UPLOAD_BYTES);
            assert!(
                matches!(result, Err(PickError::UnsupportedType { .. })),
                "'{}' should be rejected",
                mime_type
            );
        }
    }

    #[test]
    fn describe_reads_name_size_and_mime_from_the_path() {
        let path = std::env::temp_dir().join(format!("audioscribe-pick-{}.mp3", std::process::id()));
        std::fs::write(&path, b"0123456789").unwrap();

        let file = describe_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert!(file.name.starts_with("audioscribe-pick-"));
        assert_eq!(file.size, 10);
        assert_eq!(file.mime_type, "audio/mpeg");
        assert_eq!(file.uri, path.to_string_lossy());
    }
}
