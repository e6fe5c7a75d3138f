mod api_keys;
mod general;

// Re-export all commands
pub use api_keys::*;
pub use general::*;
