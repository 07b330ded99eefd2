//! Typed failures for backend calls.
//!
//! A non-2xx response becomes [`ApiError::Status`] carrying the HTTP status
//! and the parsed JSON body, so views can distinguish a missing endpoint
//! (404) from a conflict (409/400, e.g. deleting a car with linked rentals)
//! without string-matching messages.

use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The backend answered with a non-success status.
    #[error("request failed with status {status}")]
    Status { status: u16, body: Value },

    /// The request never completed (DNS, refused connection, aborted fetch).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A 2xx response whose body did not match the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status of a backend rejection, `None` for transport failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The endpoint does not exist on this backend.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// The mutation conflicts with current server state. The backend reports
    /// linked-record conflicts as 409 or, from older deployments, 400.
    pub fn is_conflict(&self) -> bool {
        matches!(self.status(), Some(409) | Some(400))
    }

    /// The stored credential was rejected.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }

    /// Human-readable message from the response body, when the backend sent
    /// one (`{"detail": "..."}` convention).
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { body, .. } => body.get("detail")?.as_str(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_classification() {
        let not_found = ApiError::Status {
            status: 404,
            body: Value::Null,
        };
        assert!(not_found.is_not_found());
        assert!(!not_found.is_conflict());

        for status in [400, 409] {
            let conflict = ApiError::Status {
                status,
                body: Value::Null,
            };
            assert!(conflict.is_conflict(), "status {status}");
        }

        let forbidden = ApiError::Status {
            status: 403,
            body: Value::Null,
        };
        assert!(forbidden.is_unauthorized());
    }

    #[test]
    fn test_server_message_reads_detail_field() {
        let err = ApiError::Status {
            status: 409,
            body: json!({"detail": "Car has linked rentals"}),
        };
        assert_eq!(err.server_message(), Some("Car has linked rentals"));

        let bare = ApiError::Status {
            status: 500,
            body: json!(["unexpected shape"]),
        };
        assert_eq!(bare.server_message(), None);
    }
}
