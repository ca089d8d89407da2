mod support;

use serde_json::{json, Value};
use ticket_booking_core::contract::TicketRecord;
use ticket_booking_core::ticket_id::RandomTicketIds;
use ticket_booking_lambda::config::NationalityFailurePolicy;
use ticket_booking_lambda::handlers::booking::{handle_booking_event, BookingHandler};
use ticket_booking_lambda::handlers::response::ApiGatewayResponse;
use ticket_booking_lambda::handlers::ticket_sum::handle_ticket_sum_event;
use support::doubles::{SequentialTicketIds, StaticNationality, UnreachableNationality};
use support::store::{InMemoryRecordStore, UnavailableRecordStore};

fn booking_event(first_name: &str, event_name: &str, ticket_count: Value) -> Value {
    json!({
        "body": json!({
            "first_name": first_name,
            "event_name": event_name,
            "ticket_count": ticket_count,
        })
        .to_string()
    })
}

fn message(response: &ApiGatewayResponse) -> String {
    response
        .message_body()
        .expect("response body should be a message")
        .message
}

#[test]
fn missing_fields_are_rejected_in_fixed_order_without_writes() {
    let store = InMemoryRecordStore::new();
    let lookup = StaticNationality::new(&[("HR", 0.5)]);
    let ids = SequentialTicketIds::new();
    let handler = BookingHandler {
        store: &store,
        nationality: &lookup,
        ticket_ids: &ids,
        nationality_failure_policy: NationalityFailurePolicy::Proceed,
    };

    let cases = [
        (
            json!({"ticket_count": 2}),
            "Invalid request, required key(s) are missing: first_name, event_name.",
        ),
        (
            json!({"first_name": "John", "event_name": "Dancing with the stars"}),
            "Invalid request, required key(s) are missing: ticket_count.",
        ),
        (
            json!({"event_name": "", "ticket_count": 0, "first_name": ""}),
            "Invalid request, required key(s) are missing: first_name, event_name, ticket_count.",
        ),
    ];

    for (body, expected) in cases {
        let response = handle_booking_event(&json!({"body": body.to_string()}), &handler);
        assert_eq!(response.status_code, 400);
        assert_eq!(message(&response), expected);
        assert_eq!(response.headers.content_type, "application/json");
    }
    assert_eq!(store.writes(), 0);
}

#[test]
fn well_formed_booking_persists_one_record_with_generated_id() {
    let store = InMemoryRecordStore::new();
    let lookup = StaticNationality::new(&[("RS", 0.2), ("HR", 0.55), ("SI", 0.1)]);
    let ids = RandomTicketIds::default();
    let handler = BookingHandler {
        store: &store,
        nationality: &lookup,
        ticket_ids: &ids,
        nationality_failure_policy: NationalityFailurePolicy::Proceed,
    };

    let response = handle_booking_event(
        &booking_event("Kristijan", "Dancing with the stars", json!(2)),
        &handler,
    );

    assert_eq!(response.status_code, 200);
    let records = store.records();
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.ticket_id.len(), 5);
    assert!(record.ticket_id.chars().all(|c| c.is_ascii_alphabetic()));
    assert_eq!(record.first_name, "Kristijan");
    assert_eq!(record.event_name, "Dancing with the stars");
    assert_eq!(record.nationality.as_deref(), Some("HR"));
    assert_eq!(record.ticket_count, 2);
}

#[test]
fn unknown_name_books_without_nationality() {
    let store = InMemoryRecordStore::new();
    let lookup = StaticNationality::new(&[]);
    let ids = SequentialTicketIds::new();
    let handler = BookingHandler {
        store: &store,
        nationality: &lookup,
        ticket_ids: &ids,
        nationality_failure_policy: NationalityFailurePolicy::Fail,
    };

    let response = handle_booking_event(&booking_event("Zzyzx", "Opera", json!(1)), &handler);

    assert_eq!(response.status_code, 200);
    assert_eq!(store.records()[0].nationality, None);
}

#[test]
fn nationality_outage_follows_configured_policy() {
    let lookup = UnreachableNationality;
    let ids = SequentialTicketIds::new();

    let lenient_store = InMemoryRecordStore::new();
    let lenient = BookingHandler {
        store: &lenient_store,
        nationality: &lookup,
        ticket_ids: &ids,
        nationality_failure_policy: NationalityFailurePolicy::Proceed,
    };
    let response = handle_booking_event(&booking_event("Max", "Opera", json!(2)), &lenient);
    assert_eq!(response.status_code, 200);
    assert_eq!(lenient_store.records()[0].nationality, None);

    let strict_store = InMemoryRecordStore::new();
    let strict = BookingHandler {
        store: &strict_store,
        nationality: &lookup,
        ticket_ids: &ids,
        nationality_failure_policy: NationalityFailurePolicy::Fail,
    };
    let response = handle_booking_event(&booking_event("Max", "Opera", json!(2)), &strict);
    assert_eq!(response.status_code, 500);
    assert_eq!(message(&response), "Internal server error.");
    assert_eq!(strict_store.writes(), 0);
}

#[test]
fn same_payload_twice_yields_two_records() {
    let store = InMemoryRecordStore::new();
    let lookup = StaticNationality::new(&[("US", 0.3)]);
    let ids = SequentialTicketIds::new();
    let handler = BookingHandler {
        store: &store,
        nationality: &lookup,
        ticket_ids: &ids,
        nationality_failure_policy: NationalityFailurePolicy::Proceed,
    };

    let event = booking_event("John", "Dancing with the stars", json!(2));
    assert_eq!(handle_booking_event(&event, &handler).status_code, 200);
    assert_eq!(handle_booking_event(&event, &handler).status_code, 200);

    let records = store.records();
    assert_eq!(records.len(), 2);
    assert_ne!(records[0].ticket_id, records[1].ticket_id);
    assert_eq!(message(&handle_ticket_sum_event(&store)), "Total tickets booked: 4.");
}

#[test]
fn aggregation_over_empty_store_is_zero() {
    let store = InMemoryRecordStore::new();
    let response = handle_ticket_sum_event(&store);

    assert_eq!(response.status_code, 200);
    assert_eq!(message(&response), "Total tickets booked: 0.");
}

#[test]
fn aggregation_sums_seeded_records_across_pages() {
    let store = InMemoryRecordStore::with_page_size(2);
    for i in 0..5 {
        store.seed(TicketRecord {
            ticket_id: format!("id{i}"),
            event_name: format!("event_name{i}"),
            first_name: format!("first_name{i}"),
            nationality: Some(format!("nationality{i}")),
            ticket_count: i,
        });
    }

    let response = handle_ticket_sum_event(&store);

    assert_eq!(response.status_code, 200);
    assert_eq!(message(&response), "Total tickets booked: 10.");
    assert_eq!(store.scans(), 3);
}

#[test]
fn unavailable_store_yields_generic_500_for_both_handlers() {
    let store = UnavailableRecordStore;
    let lookup = StaticNationality::new(&[("HR", 0.5)]);
    let ids = SequentialTicketIds::new();
    let handler = BookingHandler {
        store: &store,
        nationality: &lookup,
        ticket_ids: &ids,
        nationality_failure_policy: NationalityFailurePolicy::Proceed,
    };

    let booking = handle_booking_event(&booking_event("Max", "Opera", json!(1)), &handler);
    assert_eq!(booking.status_code, 500);
    assert_eq!(message(&booking), "Internal server error.");
    assert!(!booking.body.contains("connection refused"));

    let sum = handle_ticket_sum_event(&store);
    assert_eq!(sum.status_code, 500);
    assert_eq!(message(&sum), "Internal server error.");
}

#[test]
fn full_happy_flow_books_two_events_and_totals_seven() {
    let store = InMemoryRecordStore::with_page_size(1);
    let lookup = StaticNationality::new(&[("GB", 0.4)]);
    let ids = SequentialTicketIds::new();
    let handler = BookingHandler {
        store: &store,
        nationality: &lookup,
        ticket_ids: &ids,
        nationality_failure_policy: NationalityFailurePolicy::Proceed,
    };

    let first = handle_booking_event(
        &booking_event("John", "Dancing with the stars", json!(2)),
        &handler,
    );
    let second = handle_booking_event(
        &booking_event("Max", "Viki Cristina Barcelona", json!("5")),
        &handler,
    );
    let total = handle_ticket_sum_event(&store);

    assert_eq!(first.status_code, 200);
    assert_eq!(second.status_code, 200);
    assert_eq!(
        message(&second),
        "Successfully booked 5 tickets for event:Viki Cristina Barcelona by person: Max."
    );
    assert_eq!(total.status_code, 200);
    assert_eq!(message(&total), "Total tickets booked: 7.");
}
