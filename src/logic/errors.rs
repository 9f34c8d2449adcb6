use anyhow::Error;

use crate::api::BackendRejection;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorType {
    ConnectionRefused,
    Timeout,
    NotFound,     // HTTP 404
    ServerError,  // HTTP 500+
    NetworkError, // DNS, routing, etc.
    Rejected,     // success:false from the backend
    Other,
}

/// Classify an error based on its type and error chain
pub fn classify_error(error: &Error) -> ErrorType {
    // The backend answered; its own text must not be read as a transport error
    if error.chain().any(|e| e.is::<BackendRejection>()) {
        return ErrorType::Rejected;
    }

    let error_msg = format!("{:#}", error).to_lowercase();

    // Check for connection-specific errors
    if error_msg.contains("connection refused") {
        return ErrorType::ConnectionRefused;
    }
    if error_msg.contains("timeout") || error_msg.contains("timed out") {
        return ErrorType::Timeout;
    }

    // Check for HTTP status codes (via reqwest error chain)
    if let Some(reqwest_err) = error.downcast_ref::<reqwest::Error>() {
        if reqwest_err.is_connect() {
            return ErrorType::NetworkError;
        }
        if let Some(status) = reqwest_err.status() {
            return match status.as_u16() {
                404 => ErrorType::NotFound,
                500..=599 => ErrorType::ServerError,
                _ => ErrorType::Other,
            };
        }
    }

    if error_msg.contains("api error (404") {
        return ErrorType::NotFound;
    }
    if error_msg.contains("api error (5") {
        return ErrorType::ServerError;
    }

    // Network-level errors
    if error_msg.contains("dns") || error_msg.contains("network") || error_msg.contains("connect") {
        return ErrorType::NetworkError;
    }

    ErrorType::Other
}

/// Whether the backend answered at all (the connection itself is fine)
pub fn is_backend_reachable(error_type: &ErrorType) -> bool {
    matches!(
        error_type,
        ErrorType::NotFound | ErrorType::ServerError | ErrorType::Rejected
    )
}

/// Format error message for tech-savvy audience - show raw error details
pub fn format_error_message(error: &Error) -> String {
    // Walk the error chain to find reqwest::Error (most informative for network errors)
    let mut current: Option<&dyn std::error::Error> = Some(error.as_ref());

    while let Some(err) = current {
        if let Some(reqwest_err) = err.downcast_ref::<reqwest::Error>() {
            return reqwest_err.to_string();
        }
        current = err.source();
    }

    // If no reqwest error found, walk the chain to get the deepest (root cause) error
    let mut source = error.source();
    let mut deepest = error.to_string();

    while let Some(err) = source {
        deepest = err.to_string();
        source = err.source();
    }

    deepest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_connection_refused() {
        let err = anyhow::anyhow!("tcp connect error").context("connection refused (os error 111)");
        assert_eq!(classify_error(&err), ErrorType::ConnectionRefused);
    }

    #[test]
    fn test_classify_connection_refused_in_cause() {
        let err = anyhow::anyhow!("Connection Refused").context("Failed to fetch configurations");
        assert_eq!(classify_error(&err), ErrorType::ConnectionRefused);
    }

    #[test]
    fn test_classify_timeout() {
        let err = anyhow::anyhow!("operation timed out").context("Failed to fetch templates");
        assert_eq!(classify_error(&err), ErrorType::Timeout);
    }

    #[test]
    fn test_classify_status_from_api_error() {
        let err = anyhow::anyhow!("API error (404 Not Found): <html>");
        assert_eq!(classify_error(&err), ErrorType::NotFound);

        let err = anyhow::anyhow!("API error (502 Bad Gateway): upstream");
        assert_eq!(classify_error(&err), ErrorType::ServerError);
    }

    #[test]
    fn test_classify_dns_error() {
        let err = anyhow::anyhow!("dns lookup failed").context("Failed to fetch configurations");
        assert_eq!(classify_error(&err), ErrorType::NetworkError);
    }

    #[test]
    fn test_classify_backend_rejection() {
        let err = Error::new(BackendRejection("Configuration not found".to_string()));
        assert_eq!(classify_error(&err), ErrorType::Rejected);
        assert!(is_backend_reachable(&classify_error(&err)));
    }

    #[test]
    fn test_rejection_text_with_transport_words() {
        for text in [
            "Invalid networking value",
            "Cannot connect folder C:\\data",
            "Request timeout must be positive",
        ] {
            let err = Error::new(BackendRejection(text.to_string()));
            assert_eq!(classify_error(&err), ErrorType::Rejected, "{}", text);
        }
    }

    #[test]
    fn test_classify_other_error() {
        let err = anyhow::anyhow!("expected value at line 1").context("Failed to parse response");
        assert_eq!(classify_error(&err), ErrorType::Other);
        assert!(!is_backend_reachable(&ErrorType::Other));
    }

    #[test]
    fn test_format_shows_server_error_text() {
        let err = anyhow::anyhow!("Name is required");
        assert_eq!(format_error_message(&err), "Name is required");
    }

    #[test]
    fn test_format_shows_root_cause() {
        // Simulate anyhow context wrapping - should extract root cause
        let inner = anyhow::anyhow!("tcp connect error");
        let outer = inner.context("Failed to fetch configurations");
        let msg = format_error_message(&outer);
        // Should show the root cause, not the context wrapper
        assert_eq!(msg, "tcp connect error");
    }
}
