mod clients;
mod commands;
mod config;
mod error;
mod keychain;
mod log;
mod picker;
mod session;
mod setup;
mod specta;
mod telemetry;

pub fn run() {
    let specta_builder = specta::builder();

    #[cfg(debug_assertions)]
    specta::export_bindings(&specta_builder);

    tauri::Builder::default()
        .plugin(log::create_plugin().build())
        .plugin(tauri_plugin_dialog::init())
        .plugin(tauri_plugin_store::Builder::new().build())
        .invoke_handler(specta_builder.invoke_handler())
        .setup(move |app| {
            specta_builder.mount_events(app);
            setup::setup_app(app)
        })
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
