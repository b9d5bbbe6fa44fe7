use std::fmt;

/// Failure in the background reload round trip.
///
/// Every variant is non-fatal: the error is logged, surfaced as a transient
/// toast, and the next user-initiated change is the only recovery path.
#[derive(Debug)]
pub enum ReloadError {
    /// The POST could not be sent or the response body could not be read.
    Transport(gloo_net::Error),
    /// The form's current field values could not be captured.
    FormSerialization(String),
}

impl fmt::Display for ReloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReloadError::Transport(err) => write!(f, "request failed: {}", err),
            ReloadError::FormSerialization(detail) => {
                write!(f, "failed to serialize form data: {}", detail)
            }
        }
    }
}

impl std::error::Error for ReloadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReloadError::Transport(err) => Some(err),
            ReloadError::FormSerialization(_) => None,
        }
    }
}

impl From<gloo_net::Error> for ReloadError {
    fn from(err: gloo_net::Error) -> Self {
        ReloadError::Transport(err)
    }
}
