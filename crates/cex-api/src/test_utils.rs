//! Test utilities for code that depends on a [`CountryService`]
//!
//! Provides an in-memory service with canned responses and request recording,
//! plus helpers for building domain fixtures.

use std::collections::HashMap;
use std::sync::Mutex;

use cex_core::{
    BorderCountry, CountryCode, CountryDetail, CountrySummary, PopulationPoint, PopulationSeries,
};

use crate::error::ApiError;
use crate::service::CountryService;

/// In-memory [`CountryService`] with canned responses.
///
/// Countries without a canned detail answer with `ApiError::NotFound`.
#[derive(Debug, Default)]
pub struct FakeCountryService {
    countries: Option<Result<Vec<CountrySummary>, ApiError>>,
    details: HashMap<CountryCode, Result<CountryDetail, ApiError>>,
    requests: Mutex<Vec<String>>,
}

impl FakeCountryService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer the listing request with these countries
    pub fn with_countries(mut self, countries: Vec<CountrySummary>) -> Self {
        self.countries = Some(Ok(countries));
        self
    }

    /// Fail the listing request
    pub fn with_countries_error(mut self, error: ApiError) -> Self {
        self.countries = Some(Err(error));
        self
    }

    /// Answer detail requests for `detail.code` with `detail`
    pub fn with_detail(mut self, detail: CountryDetail) -> Self {
        self.details.insert(detail.code.clone(), Ok(detail));
        self
    }

    /// Fail detail requests for `code`
    pub fn with_detail_error(mut self, code: &str, error: ApiError) -> Self {
        self.details.insert(CountryCode::new(code), Err(error));
        self
    }

    /// Paths requested so far, in order (e.g. `country-info/NO`)
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    fn record(&self, path: String) {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(path);
        }
    }
}

impl CountryService for FakeCountryService {
    async fn list_countries(&self) -> Result<Vec<CountrySummary>, ApiError> {
        self.record("AvailableCountries".to_string());
        self.countries.clone().unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn country_info(&self, code: &CountryCode) -> Result<CountryDetail, ApiError> {
        self.record(format!("country-info/{}", code));
        self.details
            .get(code)
            .cloned()
            .unwrap_or_else(|| Err(ApiError::NotFound(format!("country-info/{}", code))))
    }
}

/// `count` countries named `Country 0..count` with codes `C0..`
pub fn test_countries(count: usize) -> Vec<CountrySummary> {
    (0..count)
        .map(|i| CountrySummary::new(format!("C{}", i), format!("Country {}", i)))
        .collect()
}

/// A detail fixture with two borders and a three-year series
pub fn test_detail(code: &str, name: &str) -> CountryDetail {
    CountryDetail {
        code: CountryCode::new(code),
        common_name: name.to_string(),
        flag_url: Some(format!("https://flags.example/{}.svg", code.to_lowercase())),
        borders: vec![
            BorderCountry::new("FI", "Finland"),
            BorderCountry::new("SE", "Sweden"),
        ],
        population: PopulationSeries::from_points(vec![
            PopulationPoint::new(2000, 4_490_967),
            PopulationPoint::new(2010, 4_889_252),
            PopulationPoint::new(2020, 5_379_475),
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fake_records_requests_in_order() {
        let fake = FakeCountryService::new()
            .with_countries(test_countries(2))
            .with_detail(test_detail("NO", "Norway"));

        let countries = fake.list_countries().await.unwrap();
        assert_eq!(countries.len(), 2);

        let detail = fake.country_info(&CountryCode::new("NO")).await.unwrap();
        assert_eq!(detail.common_name, "Norway");

        assert_eq!(
            fake.requests(),
            vec!["AvailableCountries".to_string(), "country-info/NO".to_string()]
        );
    }

    #[tokio::test]
    async fn test_fake_unknown_country_is_not_found() {
        let fake = FakeCountryService::new();
        let err = fake.country_info(&CountryCode::new("XX")).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }
}
