use ticket_booking_core::contract::ticket_total_message;
use ticket_booking_core::error::BookingError;
use tracing::{debug, error, info};

use crate::adapters::record_store::{RecordStore, ScanCursor, StoreError};
use crate::handlers::response::ApiGatewayResponse;

const COMPONENT: &str = "ticket_sum_handler";

pub fn handle_ticket_sum_event(store: &dyn RecordStore) -> ApiGatewayResponse {
    match total_ticket_count(store) {
        Ok(total) => ApiGatewayResponse::message(200, &ticket_total_message(total)),
        Err(failure) => {
            error!(
                component = COMPONENT,
                event = "scan_failed",
                kind = failure.kind(),
                error = %failure,
            );
            ApiGatewayResponse::from_error(&failure)
        }
    }
}

/// Sums `ticket_count` over every stored record, following continuation cursors
/// until the store reports the last page. Any page failure discards the partial sum.
pub fn total_ticket_count(store: &dyn RecordStore) -> Result<i64, BookingError> {
    let mut total = 0i64;
    let mut cursor: Option<ScanCursor> = None;
    let mut pages = 0usize;

    loop {
        let page = store
            .scan_ticket_counts(cursor.as_ref())
            .map_err(scan_failure)?;
        pages += 1;

        for count in &page.counts {
            total = total.checked_add(*count).ok_or_else(|| {
                BookingError::UnexpectedFailure("ticket total overflowed i64".to_string())
            })?;
        }
        debug!(
            component = COMPONENT,
            event = "scan_page",
            page = pages,
            records = page.counts.len(),
            running_total = total,
        );

        match page.next {
            Some(next) if cursor.as_ref() == Some(&next) => {
                return Err(BookingError::UnexpectedFailure(
                    "scan returned the same continuation cursor twice".to_string(),
                ));
            }
            Some(next) => cursor = Some(next),
            None => break,
        }
    }

    info!(
        component = COMPONENT,
        event = "tickets_summed",
        pages,
        total,
    );
    Ok(total)
}

fn scan_failure(store_error: StoreError) -> BookingError {
    match store_error {
        StoreError::Decode(detail) => BookingError::UnexpectedFailure(detail),
        other => BookingError::StoreScanFailure(other.to_string()),
    }
}
