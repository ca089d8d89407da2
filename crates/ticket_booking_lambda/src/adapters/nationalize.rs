//! HTTP client for the nationalize.io name classifier.
//!
//! The service answers `GET <base>?name=<name>` with
//! `{"name": .., "count": .., "country": [{"country_id": .., "probability": ..}]}`.
//! Calls are bridged onto the current Tokio runtime so the handlers stay synchronous.

use std::time::Duration;

use reqwest::{Client, Url};
use ticket_booking_core::nationality::{CountryCandidate, NationalizeResponse};

use crate::adapters::nationality::{LookupError, NationalityLookup};

#[derive(Debug, Clone)]
pub struct NationalizeClient {
    client: Client,
    base_url: Url,
}

impl NationalizeClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, LookupError> {
        let base_url =
            Url::parse(base_url).map_err(|error| LookupError::InvalidUrl(error.to_string()))?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|error| LookupError::Http(format!("failed to build client: {error}")))?;
        Ok(Self { client, base_url })
    }

    pub fn lookup_url(&self, name: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut().append_pair("name", name);
        url
    }
}

impl NationalityLookup for NationalizeClient {
    fn lookup(&self, name: &str) -> Result<Vec<CountryCandidate>, LookupError> {
        let client = self.client.clone();
        let url = self.lookup_url(name);

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                let response = client
                    .get(url)
                    .send()
                    .await
                    .and_then(|response| response.error_for_status())
                    .map_err(|error| LookupError::Http(error.to_string()))?;
                let parsed: NationalizeResponse = response
                    .json()
                    .await
                    .map_err(|error| LookupError::Decode(error.to_string()))?;
                Ok(parsed.into_candidates())
            })
        })
    }
}
