//! Sync-specific error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Endpoint error: {status} - {message}")]
    EndpointError { status: u16, message: String },

    #[error("Malformed response: {0}")]
    InvalidResponse(String),

    #[error("Save rejected: {0}")]
    SaveRejected(String),

    #[error("Request encoding failed: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl SyncError {
    /// User-friendly error message for terminal display.
    pub fn user_message(&self) -> String {
        match self {
            Self::EndpointError { .. } | Self::InvalidResponse(_) => {
                "The schedule endpoint returned an unexpected reply. \
                 Check the endpoint URL and its deployment."
                    .to_string()
            }
            Self::SaveRejected(msg) => format!("Save failed: {}", msg),
            Self::Encode(_) => "Save failed. Please try again.".to_string(),
            Self::Network(_) => "Network error. Check your connection.".to_string(),
        }
    }

    /// Whether this error came from a write the server refused.
    pub fn is_save_rejection(&self) -> bool {
        matches!(self, Self::SaveRejected(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        let err = SyncError::InvalidResponse("not json".to_string());
        assert!(err.user_message().contains("endpoint URL"));

        let err = SyncError::SaveRejected("row locked".to_string());
        assert!(err.user_message().contains("row locked"));
    }

    #[test]
    fn test_is_save_rejection() {
        assert!(SyncError::SaveRejected("x".to_string()).is_save_rejection());
        assert!(!SyncError::InvalidResponse("x".to_string()).is_save_rejection());
    }
}
