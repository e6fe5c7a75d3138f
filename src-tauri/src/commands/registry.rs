/// Single source of truth for all commands
/// This macro takes a wrapper macro path and applies it to the command list
#[macro_export]
macro_rules! with_commands {
    ($($wrapper:tt)*) => {
        $($wrapper)*![
            // Session
            $crate::commands::get_session,
            $crate::commands::pick_audio_file,
            $crate::commands::remove_audio_file,
            $crate::commands::start_transcription,
            // App configuration
            $crate::commands::load_app_config,
            $crate::commands::save_app_config,
            // OpenAI credential
            $crate::commands::load_openai_config,
            $crate::commands::save_openai_config,
            $crate::commands::delete_openai_config,
            $crate::commands::test_openai_config,
        ]
    };
}
