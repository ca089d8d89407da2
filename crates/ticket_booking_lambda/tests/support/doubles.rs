use std::sync::atomic::{AtomicUsize, Ordering};

use ticket_booking_core::nationality::CountryCandidate;
use ticket_booking_core::ticket_id::TicketIdGenerator;
use ticket_booking_lambda::adapters::nationality::{LookupError, NationalityLookup};

/// Yields `TKTAa`, `TKTAb`, ... so consecutive bookings never collide.
pub struct SequentialTicketIds {
    next: AtomicUsize,
}

impl SequentialTicketIds {
    pub fn new() -> Self {
        Self {
            next: AtomicUsize::new(0),
        }
    }
}

impl TicketIdGenerator for SequentialTicketIds {
    fn next_ticket_id(&self) -> String {
        const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
        let index = self.next.fetch_add(1, Ordering::SeqCst);
        let high = LETTERS[(index / LETTERS.len()) % LETTERS.len()].to_ascii_uppercase() as char;
        let low = LETTERS[index % LETTERS.len()] as char;
        format!("TKT{high}{low}")
    }
}

pub struct StaticNationality {
    candidates: Vec<CountryCandidate>,
}

impl StaticNationality {
    pub fn new(candidates: &[(&str, f64)]) -> Self {
        Self {
            candidates: candidates
                .iter()
                .map(|(country_id, probability)| CountryCandidate {
                    country_id: country_id.to_string(),
                    probability: *probability,
                })
                .collect(),
        }
    }
}

impl NationalityLookup for StaticNationality {
    fn lookup(&self, _name: &str) -> Result<Vec<CountryCandidate>, LookupError> {
        Ok(self.candidates.clone())
    }
}

pub struct UnreachableNationality;

impl NationalityLookup for UnreachableNationality {
    fn lookup(&self, _name: &str) -> Result<Vec<CountryCandidate>, LookupError> {
        Err(LookupError::Http("error sending request: timed out".to_string()))
    }
}
