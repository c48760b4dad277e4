use thiserror::Error;

/// Manifest or image fetch failure
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{url} returned HTTP {status}")]
    Status { status: u16, url: String },

    #[error("manifest is not a JSON array of strings: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorType {
    ConnectionRefused,
    Timeout,
    NotFound,        // HTTP 404
    ServerError,     // HTTP 500+
    NetworkError,    // DNS, routing, etc.
    InvalidManifest, // Body is not the expected JSON shape
    Other,
}

/// Classify a fetch error for the placeholder wording
pub fn classify_error(error: &FetchError) -> ErrorType {
    match error {
        FetchError::Status { status, .. } => match status {
            404 => ErrorType::NotFound,
            500..=599 => ErrorType::ServerError,
            _ => ErrorType::Other,
        },
        FetchError::Parse(_) => ErrorType::InvalidManifest,
        FetchError::InvalidUrl(_) => ErrorType::Other,
        FetchError::Transport(e) => {
            if e.is_timeout() {
                return ErrorType::Timeout;
            }
            let root = format_error_message(error).to_lowercase();
            if root.contains("connection refused") {
                ErrorType::ConnectionRefused
            } else if e.is_connect() || root.contains("dns") || root.contains("network") {
                ErrorType::NetworkError
            } else {
                ErrorType::Other
            }
        }
    }
}

/// Deepest message in the error chain
pub fn format_error_message(error: &(dyn std::error::Error + 'static)) -> String {
    let mut deepest = error.to_string();
    let mut source = error.source();

    while let Some(err) = source {
        deepest = err.to_string();
        source = err.source();
    }

    deepest
}

/// Short, user-facing reason shown in the grid placeholder
pub fn describe_failure(error: &FetchError) -> String {
    match classify_error(error) {
        ErrorType::ConnectionRefused => "server refused the connection".to_string(),
        ErrorType::Timeout => "request timed out".to_string(),
        ErrorType::NotFound => "manifest not found (HTTP 404)".to_string(),
        ErrorType::ServerError => format!("server error ({})", error),
        ErrorType::NetworkError => format!("network error ({})", format_error_message(error)),
        ErrorType::InvalidManifest => "manifest is not a list of image paths".to_string(),
        ErrorType::Other => error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_error() -> FetchError {
        FetchError::from(serde_json::from_str::<Vec<String>>("{\"a\": 1}").unwrap_err())
    }

    #[test]
    fn test_classify_not_found() {
        let err = FetchError::Status {
            status: 404,
            url: "http://localhost/data/newimages2.json".to_string(),
        };
        assert_eq!(classify_error(&err), ErrorType::NotFound);
    }

    #[test]
    fn test_classify_server_error() {
        let err = FetchError::Status {
            status: 503,
            url: "http://localhost/x".to_string(),
        };
        assert_eq!(classify_error(&err), ErrorType::ServerError);
    }

    #[test]
    fn test_classify_other_status() {
        let err = FetchError::Status {
            status: 403,
            url: "http://localhost/x".to_string(),
        };
        assert_eq!(classify_error(&err), ErrorType::Other);
    }

    #[test]
    fn test_classify_parse_error() {
        assert_eq!(classify_error(&parse_error()), ErrorType::InvalidManifest);
    }

    #[test]
    fn test_classify_invalid_url() {
        let err = FetchError::InvalidUrl("relative URL without a base".to_string());
        assert_eq!(classify_error(&err), ErrorType::Other);
    }

    #[test]
    fn test_format_shows_root_cause() {
        let err = parse_error();
        let msg = format_error_message(&err);
        // serde_json's own message, not the wrapper
        assert!(msg.starts_with("invalid type: map"), "got {}", msg);
    }

    #[test]
    fn test_format_preserves_simple_errors() {
        let err = FetchError::InvalidUrl("bad".to_string());
        assert_eq!(format_error_message(&err), "invalid URL: bad");
    }

    #[test]
    fn test_describe_failure() {
        let err = FetchError::Status {
            status: 404,
            url: "http://localhost/x".to_string(),
        };
        assert_eq!(describe_failure(&err), "manifest not found (HTTP 404)");
        assert_eq!(describe_failure(&parse_error()), "manifest is not a list of image paths");
    }
}
