//! AWS-oriented adapters and handlers for ticket booking.
//!
//! This crate owns runtime integration details (Lambda handlers, DynamoDB and
//! nationality lookup adapters, configuration and logging). Validation and
//! record contracts live in `ticket_booking_core`.

pub mod adapters;
pub mod config;
pub mod handlers;
pub mod logging;
pub mod runtime;
