//! Error types for the Factbus client

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when using the Factbus client
#[derive(Error, Debug)]
pub enum FactbusError {
    /// Topic name is empty or contains path-meaningful characters
    #[error("Invalid topic name: {0}")]
    InvalidTopic(String),

    /// Broker issued a subscription id that cannot be used in a request path
    #[error("Invalid subscription id: {0}")]
    InvalidSubscriptionId(String),

    /// Broker answered with a non-success status
    #[error("Broker returned {status}: {body}")]
    Http { status: StatusCode, body: String },

    /// Request could not be sent or the response could not be read
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    /// Failed to serialize or deserialize a fact or broker reply
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Broker reply violated the subscribe/poll protocol
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// The subscription was cancelled through its [`CancelHandle`](crate::CancelHandle)
    #[error("Subscription cancelled")]
    Cancelled,
}

/// Result type for Factbus operations
pub type Result<T> = std::result::Result<T, FactbusError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_topic() {
        let err = FactbusError::InvalidTopic("orders/archived".to_string());
        assert_eq!(err.to_string(), "Invalid topic name: orders/archived");
    }

    #[test]
    fn test_error_display_invalid_subscription_id() {
        let err = FactbusError::InvalidSubscriptionId("a/b".to_string());
        assert_eq!(err.to_string(), "Invalid subscription id: a/b");
    }

    #[test]
    fn test_error_display_http() {
        let err = FactbusError::Http {
            status: StatusCode::BAD_REQUEST,
            body: "malformed fact".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Broker returned 400 Bad Request: malformed fact"
        );
    }

    #[test]
    fn test_error_display_protocol() {
        let err = FactbusError::Protocol("no content in reply to a subscribe request".to_string());
        assert_eq!(
            err.to_string(),
            "Protocol error: no content in reply to a subscribe request"
        );
    }

    #[test]
    fn test_error_display_cancelled() {
        let err = FactbusError::Cancelled;
        assert_eq!(err.to_string(), "Subscription cancelled");
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_err = serde_json::from_str::<String>("not valid json").unwrap_err();
        let err: FactbusError = json_err.into();
        assert!(matches!(err, FactbusError::Serialization(_)));
        assert!(err.to_string().starts_with("Serialization error:"));
    }

    #[test]
    fn test_result_type_ok() {
        let result: Result<i32> = Ok(42);
        assert_eq!(result.unwrap(), 42);
    }

    #[test]
    fn test_error_debug() {
        let err = FactbusError::InvalidTopic("".to_string());
        let debug = format!("{:?}", err);
        assert!(debug.contains("InvalidTopic"));
    }
}
