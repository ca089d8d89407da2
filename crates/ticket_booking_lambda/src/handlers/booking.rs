use serde_json::Value;
use ticket_booking_core::contract::{booking_success_message, TicketRecord};
use ticket_booking_core::error::BookingError;
use ticket_booking_core::ticket_id::TicketIdGenerator;
use ticket_booking_core::validation::{decode_body, validate_booking};
use tracing::{error, info, warn};

use crate::adapters::nationality::{resolve_nationality, NationalityLookup};
use crate::adapters::record_store::RecordStore;
use crate::config::NationalityFailurePolicy;
use crate::handlers::response::ApiGatewayResponse;

const COMPONENT: &str = "booking_handler";

/// Collaborators of one booking invocation. Borrowed from process-wide state.
pub struct BookingHandler<'a> {
    pub store: &'a dyn RecordStore,
    pub nationality: &'a dyn NationalityLookup,
    pub ticket_ids: &'a dyn TicketIdGenerator,
    pub nationality_failure_policy: NationalityFailurePolicy,
}

pub fn handle_booking_event(event: &Value, handler: &BookingHandler<'_>) -> ApiGatewayResponse {
    match process_booking(event, handler) {
        Ok(record) => {
            info!(
                component = COMPONENT,
                event = "booking_persisted",
                ticket_id = %record.ticket_id,
                event_name = %record.event_name,
                ticket_count = record.ticket_count,
                nationality = record.nationality.as_deref().unwrap_or(""),
            );
            ApiGatewayResponse::message(200, &booking_success_message(&record))
        }
        Err(failure) => {
            if failure.is_client_fault() {
                warn!(
                    component = COMPONENT,
                    event = "booking_rejected",
                    kind = failure.kind(),
                    reason = %failure,
                );
            } else {
                error!(
                    component = COMPONENT,
                    event = "booking_failed",
                    kind = failure.kind(),
                    error = %failure,
                );
            }
            ApiGatewayResponse::from_error(&failure)
        }
    }
}

/// Validates, enriches and persists one booking. Exactly one store write on success.
pub fn process_booking(
    event: &Value,
    handler: &BookingHandler<'_>,
) -> Result<TicketRecord, BookingError> {
    let body = event.as_object().and_then(|envelope| envelope.get("body"));
    let fields = decode_body(body)?;
    let request = validate_booking(&fields)?;
    info!(
        component = COMPONENT,
        event = "booking_received",
        event_name = %request.event_name,
        ticket_count = request.ticket_count,
    );

    let nationality = match resolve_nationality(handler.nationality, &request.first_name) {
        Ok(nationality) => nationality,
        Err(lookup_error) => match handler.nationality_failure_policy {
            NationalityFailurePolicy::Proceed => {
                warn!(
                    component = COMPONENT,
                    event = "nationality_lookup_failed",
                    error = %lookup_error,
                    "continuing without nationality"
                );
                None
            }
            NationalityFailurePolicy::Fail => {
                return Err(BookingError::NationalityLookupFailure(
                    lookup_error.to_string(),
                ));
            }
        },
    };

    let ticket_id = handler.ticket_ids.next_ticket_id();
    let record = TicketRecord::assemble(request, ticket_id, nationality);

    handler
        .store
        .put_ticket(&record)
        .map_err(|store_error| BookingError::StoreWriteFailure(store_error.to_string()))?;

    Ok(record)
}
