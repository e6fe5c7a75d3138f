//! Type-safe bindings between Rust and the webview.

use tauri_specta::{collect_events, Builder};

use crate::session::TranscriptionStateChanged;

/// Builder carrying every command and event exposed to the frontend
pub fn builder() -> Builder {
    Builder::<tauri::Wry>::new()
        .commands(crate::with_commands!(tauri_specta::collect_commands))
        .events(collect_events![TranscriptionStateChanged])
}

/// Export TypeScript bindings (debug builds only)
#[cfg(debug_assertions)]
pub fn export_bindings(builder: &Builder) {
    use specta_typescript::{BigIntExportBehavior, Typescript};

    builder
        .export(
            Typescript::default().bigint(BigIntExportBehavior::Number),
            "../src/bindings.ts",
        )
        .expect("Failed to export typescript bindings");
}
