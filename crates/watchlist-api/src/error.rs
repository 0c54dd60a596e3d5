use thiserror::Error;

/// What can go wrong talking to the shared-list server. Everything the
/// client surfaces on the status line funnels through one of these.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (connection refused,
    /// DNS, TLS).
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status. `message` carries
    /// the body's `message` field when the body parses as one.
    #[error("server responded with status {status}")]
    Status { status: u16, message: Option<String> },

    /// A success response whose body did not decode as expected.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// The server-provided message, when the failing response carried a
    /// parseable one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_only_comes_from_status_bodies() {
        let with_message = ApiError::Status {
            status: 400,
            message: Some("title cannot be empty".to_string()),
        };
        assert_eq!(with_message.server_message(), Some("title cannot be empty"));
        assert_eq!(with_message.status(), Some(400));

        let bare = ApiError::Status {
            status: 502,
            message: None,
        };
        assert_eq!(bare.server_message(), None);
        assert_eq!(bare.status(), Some(502));
    }
}
