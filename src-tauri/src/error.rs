use derive_more::From;

#[derive(Debug, From)]
pub enum Error {
    #[from]
    Pick(crate::picker::PickError),

    #[from]
    Transcription(crate::clients::TranscriptionError),
}

impl Error {
    /// User-facing message for the wrapped error
    pub fn user_message(&self) -> String {
        match self {
            Error::Pick(e) => e.user_message(),
            Error::Transcription(e) => e.user_message(),
        }
    }
}
