use thiserror::Error;

#[derive(Error, Debug)]
pub enum SelkitError {
    /// Malformed JSON text, propagated from the decoder.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A selector construction rule was violated.
    #[error(transparent)]
    Selector(#[from] cssel::CsselError),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, SelkitError>;
