use serde::{Deserialize, Serialize};

/// One `{country_id, probability}` guess from the name classifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CountryCandidate {
    pub country_id: String,
    pub probability: f64,
}

/// Response shape of the name classifier. `country` may be absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NationalizeResponse {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub country: Option<Vec<CountryCandidate>>,
}

impl NationalizeResponse {
    pub fn into_candidates(self) -> Vec<CountryCandidate> {
        self.country.unwrap_or_default()
    }
}

/// Picks the highest-probability country. On ties the earliest candidate wins.
pub fn most_likely_country(candidates: &[CountryCandidate]) -> Option<String> {
    let mut best: Option<&CountryCandidate> = None;
    for candidate in candidates {
        if candidate.probability.is_nan() {
            continue;
        }
        match best {
            Some(current) if candidate.probability <= current.probability => {}
            _ => best = Some(candidate),
        }
    }
    best.map(|candidate| candidate.country_id.clone())
}
