/// TypeScript Bindings Generator
///
/// The TypeScript bindings (src/bindings.ts) are exported at runtime by
/// tauri-specta when the app starts in debug mode (see src/specta.rs).
///
/// Building this test compiles and links the library with the full
/// command/event list, so a drifted registry or event type fails here
/// without launching the GUI:
/// ```bash
/// cargo test --test generate_bindings
/// ```
#[test]
fn generate_bindings() {
    // Compile-time check only; the export itself runs with the app.
    println!("Run the app once in debug mode to refresh ../src/bindings.ts");
}
