//! Error details reported by the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Error details attached to an object built from an error response.
///
/// Serializes with the API's wire names (`type`, `exceptionCode`,
/// `developerMessage`, `moreInfoUrl`, `timeStamp`).
///
/// Fields built from a response are always text: a `null` value reads as an
/// empty string, and numbers, booleans, objects and arrays keep their JSON
/// rendering.
///
/// # Example
///
/// ```rust
/// use brickscout_api::models::ErrorInfo;
///
/// let info = ErrorInfo::new(
///     "NotFound",
///     "ORDER_NOT_FOUND",
///     "No order with id 42",
///     "https://docs.example.com/errors/404",
///     "2024-05-01T12:00:00Z",
/// );
///
/// assert_eq!(info.error_type(), "NotFound");
/// assert!(info.timestamp_utc().is_some());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    #[serde(rename = "type")]
    error_type: String,
    #[serde(rename = "exceptionCode")]
    exception_code: String,
    #[serde(rename = "developerMessage")]
    developer_message: String,
    #[serde(rename = "moreInfoUrl")]
    more_info_url: String,
    #[serde(rename = "timeStamp")]
    timestamp: String,
}

impl ErrorInfo {
    /// Creates a new error record.
    #[must_use]
    pub fn new(
        error_type: impl Into<String>,
        exception_code: impl Into<String>,
        developer_message: impl Into<String>,
        more_info_url: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            error_type: error_type.into(),
            exception_code: exception_code.into(),
            developer_message: developer_message.into(),
            more_info_url: more_info_url.into(),
            timestamp: timestamp.into(),
        }
    }

    /// Returns the error type.
    #[must_use]
    pub fn error_type(&self) -> &str {
        &self.error_type
    }

    /// Returns the exception code.
    #[must_use]
    pub fn exception_code(&self) -> &str {
        &self.exception_code
    }

    /// Returns the developer-facing message.
    #[must_use]
    pub fn developer_message(&self) -> &str {
        &self.developer_message
    }

    /// Returns the documentation URL for this error.
    #[must_use]
    pub fn more_info_url(&self) -> &str {
        &self.more_info_url
    }

    /// Returns the timestamp exactly as the API sent it.
    #[must_use]
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Parses the timestamp as RFC 3339, if it is one.
    #[must_use]
    pub fn timestamp_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.timestamp)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> ErrorInfo {
        ErrorInfo::new("T", "E", "D", "U", "2024-05-01T12:00:00+02:00")
    }

    #[test]
    fn test_serializes_with_wire_names() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "T",
                "exceptionCode": "E",
                "developerMessage": "D",
                "moreInfoUrl": "U",
                "timeStamp": "2024-05-01T12:00:00+02:00"
            })
        );
    }

    #[test]
    fn test_timestamp_parses_to_utc() {
        let parsed = sample().timestamp_utc().unwrap();
        assert_eq!(parsed.to_rfc3339(), "2024-05-01T10:00:00+00:00");
    }

    #[test]
    fn test_unparseable_timestamp_is_none() {
        let info = ErrorInfo::new("T", "E", "D", "U", "yesterday");
        assert!(info.timestamp_utc().is_none());
        assert_eq!(info.timestamp(), "yesterday");
    }
}
