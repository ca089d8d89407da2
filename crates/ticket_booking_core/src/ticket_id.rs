//! Short opaque ticket identifiers.
//!
//! Identifiers are drawn uniformly, with replacement, from the 52 ASCII letters.
//! Nothing checks them against existing records; collisions are accepted.

use rand::Rng;

pub const TICKET_ID_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DEFAULT_TICKET_ID_LENGTH: usize = 5;

pub trait TicketIdGenerator {
    fn next_ticket_id(&self) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomTicketIds {
    length: usize,
}

impl RandomTicketIds {
    pub fn new(length: usize) -> Self {
        Self { length }
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for RandomTicketIds {
    fn default() -> Self {
        Self::new(DEFAULT_TICKET_ID_LENGTH)
    }
}

impl TicketIdGenerator for RandomTicketIds {
    fn next_ticket_id(&self) -> String {
        generate_ticket_id(&mut rand::thread_rng(), self.length)
    }
}

pub fn generate_ticket_id<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| TICKET_ID_ALPHABET[rng.gen_range(0..TICKET_ID_ALPHABET.len())] as char)
        .collect()
}
