use std::collections::BTreeMap;
use std::sync::Mutex;

use ticket_booking_core::contract::{TicketRecord, ATTR_TICKET_ID};
use ticket_booking_lambda::adapters::record_store::{
    RecordStore, ScanCursor, StoreError, TicketCountPage,
};

/// Table keyed by `ticket_id`, scanned in key order, `page_size` records per page.
pub struct InMemoryRecordStore {
    records: Mutex<BTreeMap<String, TicketRecord>>,
    page_size: usize,
    writes: Mutex<usize>,
    scans: Mutex<usize>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::with_page_size(100)
    }

    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            records: Mutex::new(BTreeMap::new()),
            page_size,
            writes: Mutex::new(0),
            scans: Mutex::new(0),
        }
    }

    pub fn seed(&self, record: TicketRecord) {
        self.records
            .lock()
            .expect("poisoned mutex")
            .insert(record.ticket_id.clone(), record);
    }

    pub fn records(&self) -> Vec<TicketRecord> {
        self.records
            .lock()
            .expect("poisoned mutex")
            .values()
            .cloned()
            .collect()
    }

    pub fn writes(&self) -> usize {
        *self.writes.lock().expect("poisoned mutex")
    }

    pub fn scans(&self) -> usize {
        *self.scans.lock().expect("poisoned mutex")
    }
}

impl RecordStore for InMemoryRecordStore {
    fn put_ticket(&self, record: &TicketRecord) -> Result<(), StoreError> {
        *self.writes.lock().expect("poisoned mutex") += 1;
        self.seed(record.clone());
        Ok(())
    }

    fn scan_ticket_counts(
        &self,
        cursor: Option<&ScanCursor>,
    ) -> Result<TicketCountPage, StoreError> {
        *self.scans.lock().expect("poisoned mutex") += 1;
        let records = self.records.lock().expect("poisoned mutex");
        let after = cursor.and_then(|value| value.key.get(ATTR_TICKET_ID)).cloned();

        let remaining: Vec<&TicketRecord> = records
            .values()
            .filter(|record| after.as_ref().map_or(true, |key| &record.ticket_id > key))
            .collect();
        let page: Vec<&TicketRecord> = remaining.iter().take(self.page_size).copied().collect();

        let next = if remaining.len() > page.len() {
            page.last().map(|record| ScanCursor {
                key: BTreeMap::from([(ATTR_TICKET_ID.to_string(), record.ticket_id.clone())]),
            })
        } else {
            None
        };

        Ok(TicketCountPage {
            counts: page.iter().map(|record| record.ticket_count).collect(),
            next,
        })
    }
}

/// Every call fails, as an unreachable table would.
pub struct UnavailableRecordStore;

impl RecordStore for UnavailableRecordStore {
    fn put_ticket(&self, _record: &TicketRecord) -> Result<(), StoreError> {
        Err(StoreError::Write("dispatch failure: connection refused".to_string()))
    }

    fn scan_ticket_counts(
        &self,
        _cursor: Option<&ScanCursor>,
    ) -> Result<TicketCountPage, StoreError> {
        Err(StoreError::Scan("dispatch failure: connection refused".to_string()))
    }
}
