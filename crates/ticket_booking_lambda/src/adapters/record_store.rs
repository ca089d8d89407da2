use std::collections::BTreeMap;

use thiserror::Error;
use ticket_booking_core::contract::TicketRecord;

/// Opaque continuation handle for a paged scan: the string key attributes of
/// the last record the store evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanCursor {
    pub key: BTreeMap<String, String>,
}

/// One page of `ticket_count` values. `next` is `None` on the last page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketCountPage {
    pub counts: Vec<i64>,
    pub next: Option<ScanCursor>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("put failed: {0}")]
    Write(String),

    #[error("scan failed: {0}")]
    Scan(String),

    #[error("stored record could not be decoded: {0}")]
    Decode(String),
}

pub trait RecordStore {
    fn put_ticket(&self, record: &TicketRecord) -> Result<(), StoreError>;

    /// Returns the page that starts after `cursor`, or the first page when `None`.
    fn scan_ticket_counts(&self, cursor: Option<&ScanCursor>)
        -> Result<TicketCountPage, StoreError>;
}
