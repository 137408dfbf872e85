// Request and response bodies of the HTTP API

use serde::{Deserialize, Serialize};

pub use crate::message_store::Message;

// Request Types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishRequest {
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeRangeRequest {
    pub start: String,
    pub end: String,
}

// Response Types
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PublishResponse {
    pub success: String,
}

impl PublishResponse {
    pub fn created() -> Self {
        Self {
            success: "new message added".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessagesList {
    pub messages: Vec<Message>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_publish_response_shape() {
        let value = serde_json::to_value(PublishResponse::created()).unwrap();
        assert_eq!(value, json!({ "success": "new message added" }));
    }

    #[test]
    fn test_messages_list_shape() {
        let list = MessagesList {
            messages: vec![Message::new("a"), Message::new("b")],
        };
        let value = serde_json::to_value(list).unwrap();
        assert_eq!(
            value,
            json!({ "messages": [{ "content": "a" }, { "content": "b" }] })
        );
    }

    #[test]
    fn test_time_range_request_requires_both_bounds() {
        let parsed: Result<TimeRangeRequest, _> =
            serde_json::from_value(json!({ "start": "2024-01-01T00:00:00" }));
        assert!(parsed.is_err());
    }
}
