use serde::{Deserialize, Serialize};
use serde_json::json;
use ticket_booking_core::contract::MessageBody;
use ticket_booking_core::error::BookingError;

pub const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResponseHeaders {
    #[serde(rename = "Content-Type")]
    pub content_type: String,
}

impl Default for ResponseHeaders {
    fn default() -> Self {
        Self {
            content_type: JSON_CONTENT_TYPE.to_string(),
        }
    }
}

/// API Gateway proxy response. `body` is JSON text of `{"message": ...}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiGatewayResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: ResponseHeaders,
    pub body: String,
}

impl ApiGatewayResponse {
    pub fn message(status_code: u16, message: &str) -> Self {
        Self {
            status_code,
            headers: ResponseHeaders::default(),
            body: json!({ "message": message }).to_string(),
        }
    }

    pub fn from_error(error: &BookingError) -> Self {
        Self::message(error.status_code(), &error.client_message())
    }

    pub fn message_body(&self) -> Result<MessageBody, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}
