//! Shared ticket booking domain primitives.
//!
//! This crate owns request validation, record contracts, ticket identifiers and
//! nationality candidate selection. It intentionally excludes AWS SDK and Lambda
//! runtime concerns, which live in `ticket_booking_lambda`.

pub mod contract;
pub mod error;
pub mod nationality;
pub mod ticket_id;
pub mod validation;
