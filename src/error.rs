use thiserror::Error;

/// Broad failure class, used to pick the notice shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Submission blocked before any request was issued.
    Precondition,
    /// Network failure, non-2xx status, or an undecodable body.
    Transport,
    /// The body decoded but did not have the expected shape.
    MalformedResponse,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    #[error("Session key '{key}' is not set")]
    MissingSession { key: &'static str },

    #[error("Session key '{key}' holds a non-numeric value: {value:?}")]
    InvalidSession { key: &'static str, value: String },

    #[error("Duration must be between 1 and 30 years, got {0}")]
    InvalidDuration(u32),

    #[error("Network error: {0}")]
    Network(String),

    #[error("API error: {status}")]
    Http { status: u16 },

    #[error("Response body is not valid JSON: {0}")]
    Decode(String),

    #[error("Invalid response structure: {0}")]
    Malformed(String),
}

impl SimulationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SimulationError::MissingSession { .. }
            | SimulationError::InvalidSession { .. }
            | SimulationError::InvalidDuration(_) => ErrorKind::Precondition,
            SimulationError::Network(_)
            | SimulationError::Http { .. }
            | SimulationError::Decode(_) => ErrorKind::Transport,
            SimulationError::Malformed(_) => ErrorKind::MalformedResponse,
        }
    }

    /// Fixed, user-facing text for the notice area.
    pub fn user_message(&self) -> &'static str {
        match self.kind() {
            ErrorKind::Precondition => match self {
                SimulationError::InvalidDuration(_) => "Choose a simulation period between 1 and 30 years",
                _ => "Please login and create a digital twin first",
            },
            ErrorKind::Transport => "Simulation failed. Please check if backend is running.",
            ErrorKind::MalformedResponse => "Invalid simulation response. Check backend.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds_map_to_fixed_messages() {
        let missing = SimulationError::MissingSession { key: "userId" };
        assert_eq!(missing.kind(), ErrorKind::Precondition);
        assert_eq!(missing.user_message(), "Please login and create a digital twin first");

        let http = SimulationError::Http { status: 500 };
        assert_eq!(http.kind(), ErrorKind::Transport);
        assert_eq!(http.to_string(), "API error: 500");
        assert_eq!(
            http.user_message(),
            "Simulation failed. Please check if backend is running."
        );

        let malformed = SimulationError::Malformed("missing field `curves`".to_string());
        assert_eq!(malformed.kind(), ErrorKind::MalformedResponse);
        assert_eq!(malformed.user_message(), "Invalid simulation response. Check backend.");
    }

    #[test]
    fn test_decode_is_transport_failure() {
        let err = SimulationError::Decode("expected value at line 1".to_string());
        assert_eq!(err.kind(), ErrorKind::Transport);
    }
}
