//! HTTP implementation of [`CountryService`] using reqwest

use std::time::Duration;

use cex_core::{CountryCode, CountryDetail, CountrySummary};
use tracing::debug;
use url::Url;

use crate::error::ApiError;
use crate::response::handle_response;
use crate::service::CountryService;
use crate::types::{AvailableCountryDto, CountryInfoDto};

/// Request timeout used when none is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const AVAILABLE_COUNTRIES_PATH: &str = "AvailableCountries";
const COUNTRY_INFO_PATH: &str = "country-info";

/// Remote Data Service client
#[derive(Debug, Clone)]
pub struct HttpCountryService {
    base_url: Url,
    client: reqwest::Client,
}

impl HttpCountryService {
    /// Create a client for the service rooted at `base_url`.
    ///
    /// # Arguments
    /// * `base_url` - Base URL, e.g. `http://localhost:3000/api` (trailing slash optional)
    /// * `timeout` - Per-request timeout
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let base_url = parse_base_url(base_url)?;
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Client(e.to_string()))?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build `{base}/{segments...}`, percent-encoding each segment
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::invalid_url(self.base_url.as_str(), "cannot be a base URL"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

impl CountryService for HttpCountryService {
    async fn list_countries(&self) -> Result<Vec<CountrySummary>, ApiError> {
        let url = self.endpoint(&[AVAILABLE_COUNTRIES_PATH])?;
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let dtos: Vec<AvailableCountryDto> =
            handle_response(response, AVAILABLE_COUNTRIES_PATH).await?;

        debug!("Received {} countries", dtos.len());
        Ok(dtos.into_iter().map(Into::into).collect())
    }

    async fn country_info(&self, code: &CountryCode) -> Result<CountryDetail, ApiError> {
        let url = self.endpoint(&[COUNTRY_INFO_PATH, code.as_str()])?;
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let dto: CountryInfoDto =
            handle_response(response, &format!("{}/{}", COUNTRY_INFO_PATH, code)).await?;

        Ok(dto.into_detail(code.clone()))
    }
}

/// Validate the configured base URL (http/https only)
fn parse_base_url(raw: &str) -> Result<Url, ApiError> {
    let url = Url::parse(raw.trim()).map_err(|e| ApiError::invalid_url(raw, e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ApiError::invalid_url(
            raw,
            format!("unsupported scheme '{}'", other),
        )),
    }
}
