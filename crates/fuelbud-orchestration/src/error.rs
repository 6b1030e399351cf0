//! Failure classification for prediction service calls.

use std::fmt;

/// Failure categories surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The service could not be reached.
    Transport,
    /// The service answered with a non-success status.
    HttpStatus,
    /// The service answered with a body that is not the expected JSON.
    MalformedResponse,
}

impl FailureKind {
    /// Stable snake-case name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Transport => "transport",
            Self::HttpStatus => "http_status",
            Self::MalformedResponse => "malformed_response",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned by a [`PredictionService`](crate::interfaces::PredictionService).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// Connection refused, DNS failure, timeout, or a broken stream.
    #[error("transport error: {0}")]
    Transport(String),

    /// Non-2xx status.
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// The body could not be read as the expected JSON shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl ServiceError {
    /// Category of this error.
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Transport(_) => FailureKind::Transport,
            Self::HttpStatus { .. } => FailureKind::HttpStatus,
            Self::MalformedResponse(_) => FailureKind::MalformedResponse,
        }
    }

    /// Message for the user. Tells "unreachable" apart from "returned an error".
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport(_) => {
                "Server unreachable. Check that the prediction service is running.".to_string()
            }
            Self::HttpStatus { status, .. } => {
                format!("Server returned an error (HTTP {status}).")
            }
            Self::MalformedResponse(_) => {
                "Server returned an error: the response could not be understood.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        assert_eq!(
            ServiceError::Transport("refused".into()).kind(),
            FailureKind::Transport
        );
        assert_eq!(
            ServiceError::HttpStatus {
                status: 500,
                body: String::new()
            }
            .kind(),
            FailureKind::HttpStatus
        );
        assert_eq!(
            ServiceError::MalformedResponse("eof".into()).kind(),
            FailureKind::MalformedResponse
        );
    }

    #[test]
    fn kind_names() {
        assert_eq!(FailureKind::Transport.to_string(), "transport");
        assert_eq!(FailureKind::HttpStatus.to_string(), "http_status");
        assert_eq!(
            FailureKind::MalformedResponse.to_string(),
            "malformed_response"
        );
    }

    #[test]
    fn user_messages_distinguish_unreachable() {
        let unreachable = ServiceError::Transport("refused".into()).user_message();
        let status = ServiceError::HttpStatus {
            status: 503,
            body: "busy".into(),
        }
        .user_message();
        assert!(unreachable.contains("unreachable"));
        assert!(status.contains("returned an error"));
        assert!(status.contains("503"));
    }

    #[test]
    fn display() {
        let err = ServiceError::HttpStatus {
            status: 404,
            body: "not found".into(),
        };
        assert_eq!(err.to_string(), "HTTP 404: not found");
    }
}
