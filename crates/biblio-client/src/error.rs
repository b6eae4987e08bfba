use thiserror::Error;

/// Failure of a backend call, as seen by the caller.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// A token was required but none was available. Raised before any
    /// network activity.
    #[error("Utilisateur non authentifié.")]
    Unauthenticated,

    /// The request never got a response.
    #[error("{0}")]
    Transport(String),

    /// The backend answered with a non-2xx status.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// A 2xx body that does not have the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),

    #[error("invalid request body: {0}")]
    Encode(String),
}

impl ApiError {
    /// HTTP status of the backend answer, if there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Returns the token, or `Unauthenticated` when it is missing or blank.
pub fn require_token(token: Option<&str>) -> Result<&str, ApiError> {
    match token {
        Some(t) if !t.trim().is_empty() => Ok(t),
        _ => Err(ApiError::Unauthenticated),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_blank_token_is_unauthenticated() {
        assert_eq!(require_token(None), Err(ApiError::Unauthenticated));
        assert_eq!(require_token(Some("")), Err(ApiError::Unauthenticated));
        assert_eq!(require_token(Some("  ")), Err(ApiError::Unauthenticated));
        assert_eq!(require_token(Some("abc")), Ok("abc"));
    }

    #[test]
    fn only_api_failures_carry_a_status() {
        let api = ApiError::Api {
            status: 404,
            message: "livre introuvable".into(),
        };
        assert_eq!(api.status(), Some(404));
        assert_eq!(api.to_string(), "livre introuvable");

        assert_eq!(ApiError::Transport("connection refused".into()).status(), None);
        assert_eq!(ApiError::Unauthenticated.status(), None);
    }
}
