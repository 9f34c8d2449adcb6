//! Backend Model
//!
//! Where the backend lives and whether the last request reached it.

use crate::logic::errors::{classify_error, format_error_message, is_backend_reachable, ErrorType};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConnectionState {
    /// No response received yet
    Unknown,
    Connected,
    Disconnected {
        error_type: ErrorType,
        message: String,
    },
}

#[derive(Clone, Debug)]
pub struct BackendModel {
    pub base_url: String,
    pub connection_state: ConnectionState,
}

impl BackendModel {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            connection_state: ConnectionState::Unknown,
        }
    }

    pub fn record_success(&mut self) {
        self.connection_state = ConnectionState::Connected;
    }

    /// Update the connection state from a failed request
    ///
    /// Errors the backend itself produced (404, `success:false`) still mean
    /// the backend is up.
    pub fn record_failure(&mut self, error: &anyhow::Error) {
        let error_type = classify_error(error);
        self.connection_state = if is_backend_reachable(&error_type) {
            ConnectionState::Connected
        } else {
            ConnectionState::Disconnected {
                error_type,
                message: format_error_message(error),
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::BackendRejection;

    #[test]
    fn test_rejection_keeps_connected() {
        let mut model = BackendModel::new("http://localhost:5000".to_string());
        let err = anyhow::Error::new(BackendRejection("Invalid networking value".to_string()));
        model.record_failure(&err);
        assert_eq!(model.connection_state, ConnectionState::Connected);
    }

    #[test]
    fn test_transport_error_disconnects() {
        let mut model = BackendModel::new("http://localhost:5000".to_string());
        let err = anyhow::anyhow!("connection refused").context("Failed to fetch configurations");
        model.record_failure(&err);
        assert_eq!(
            model.connection_state,
            ConnectionState::Disconnected {
                error_type: ErrorType::ConnectionRefused,
                message: "connection refused".to_string(),
            }
        );

        model.record_success();
        assert_eq!(model.connection_state, ConnectionState::Connected);
    }
}
