use thiserror::Error;

/// A rejected token. Both kinds are recoverable: the reader reports them and
/// asks again.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("malformed token `{token}`: {message}")]
    MalformedToken { token: String, message: String },

    #[error("domain violation for `{value}`: {message}")]
    DomainViolation { value: String, message: String },
}

impl InputError {
    /// The line shown to the operator, without the `Error:` prefix.
    pub fn user_friendly_message(&self) -> &str {
        match self {
            InputError::MalformedToken { message, .. } => message,
            InputError::DomainViolation { message, .. } => message,
        }
    }
}

#[derive(Error, Debug)]
pub enum KataError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl KataError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            KataError::IoError(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {
                "the output stream was closed".to_string()
            }
            KataError::IoError(e) => format!("could not talk to the terminal: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, KataError>;
