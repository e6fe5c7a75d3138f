mod preferences;
mod registry;
mod session;

// Re-export all commands for convenience
pub use preferences::*;
pub use session::*;
