use thiserror::Error;

use crate::contract::INTERNAL_ERROR_MESSAGE;

/// Every way a booking or aggregation invocation can fail.
///
/// Client faults render their `Display` text to the caller. Server faults keep
/// the underlying cause for logs and always answer with a fixed message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("Missing request body.")]
    MissingBody,

    #[error("Invalid JSON format: {0}")]
    MalformedInput(String),

    #[error("Invalid request, required key(s) are missing: {}.", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Invalid ticket_count: must be an integer.")]
    InvalidTicketCount,

    #[error("Invalid {0}: must be a string.")]
    InvalidFieldType(&'static str),

    #[error("failed to write ticket record: {0}")]
    StoreWriteFailure(String),

    #[error("failed to scan ticket records: {0}")]
    StoreScanFailure(String),

    #[error("nationality lookup failed: {0}")]
    NationalityLookupFailure(String),

    #[error("unexpected failure: {0}")]
    UnexpectedFailure(String),
}

impl BookingError {
    pub fn is_client_fault(&self) -> bool {
        matches!(
            self,
            Self::MissingBody
                | Self::MalformedInput(_)
                | Self::MissingFields(_)
                | Self::InvalidTicketCount
                | Self::InvalidFieldType(_)
        )
    }

    pub fn status_code(&self) -> u16 {
        if self.is_client_fault() {
            400
        } else {
            500
        }
    }

    /// Text that is safe to return to the caller.
    pub fn client_message(&self) -> String {
        if self.is_client_fault() {
            self.to_string()
        } else {
            INTERNAL_ERROR_MESSAGE.to_string()
        }
    }

    /// Stable snake_case name used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingBody => "missing_body",
            Self::MalformedInput(_) => "malformed_input",
            Self::MissingFields(_) => "missing_fields",
            Self::InvalidTicketCount => "invalid_ticket_count",
            Self::InvalidFieldType(_) => "invalid_field_type",
            Self::StoreWriteFailure(_) => "store_write_failure",
            Self::StoreScanFailure(_) => "store_scan_failure",
            Self::NationalityLookupFailure(_) => "nationality_lookup_failure",
            Self::UnexpectedFailure(_) => "unexpected_failure",
        }
    }
}
