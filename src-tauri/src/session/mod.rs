mod events;
mod state;

// Re-export public types
pub use events::TranscriptionStateChanged;
pub use state::{SelectedFile, SessionSnapshot, SessionStateManager};
