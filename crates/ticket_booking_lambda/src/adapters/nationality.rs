use thiserror::Error;
use ticket_booking_core::nationality::{most_likely_country, CountryCandidate};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("invalid nationality service url: {0}")]
    InvalidUrl(String),

    #[error("nationality request failed: {0}")]
    Http(String),

    #[error("nationality response could not be decoded: {0}")]
    Decode(String),
}

pub trait NationalityLookup {
    /// Candidates for `name` in the service's own order. Empty is not an error.
    fn lookup(&self, name: &str) -> Result<Vec<CountryCandidate>, LookupError>;
}

/// Most likely country code for `name`, or `None` when the service has no guess.
pub fn resolve_nationality(
    lookup: &dyn NationalityLookup,
    name: &str,
) -> Result<Option<String>, LookupError> {
    let candidates = lookup.lookup(name)?;
    Ok(most_likely_country(&candidates))
}
