use std::fmt;

use secrecy::SecretString;

/// Configuration for making transcription API calls
pub struct ApiConfig {
    pub api_key: SecretString,
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}
