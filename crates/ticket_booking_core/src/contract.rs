use serde::{Deserialize, Serialize};

pub const REQUIRED_FIELDS: [&str; 3] = ["first_name", "event_name", "ticket_count"];

pub const ATTR_TICKET_ID: &str = "ticket_id";
pub const ATTR_EVENT_NAME: &str = "event_name";
pub const ATTR_FIRST_NAME: &str = "first_name";
pub const ATTR_NATIONALITY: &str = "nationality";
pub const ATTR_TICKET_COUNT: &str = "ticket_count";

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error.";

/// A booking that passed validation. `ticket_count` is always a real integer here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookingRequest {
    pub first_name: String,
    pub event_name: String,
    pub ticket_count: i64,
}

/// Persisted booking. Written once, never updated by this system.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TicketRecord {
    pub ticket_id: String,
    pub event_name: String,
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    pub ticket_count: i64,
}

impl TicketRecord {
    pub fn assemble(
        request: BookingRequest,
        ticket_id: String,
        nationality: Option<String>,
    ) -> Self {
        Self {
            ticket_id,
            event_name: request.event_name,
            first_name: request.first_name,
            nationality,
            ticket_count: request.ticket_count,
        }
    }
}

/// Body of every handler response: `{"message": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub fn booking_success_message(record: &TicketRecord) -> String {
    format!(
        "Successfully booked {} tickets for event:{} by person: {}.",
        record.ticket_count, record.event_name, record.first_name
    )
}

pub fn ticket_total_message(total: i64) -> String {
    format!("Total tickets booked: {total}.")
}
