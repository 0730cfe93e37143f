//! Wire types for the Remote Data Service JSON payloads
//!
//! Field names follow the service (camelCase). Conversion into the domain
//! types happens here so the rest of the workspace never sees nullable wire
//! fields.

use cex_core::{
    BorderCountry, CountryCode, CountryDetail, CountrySummary, PopulationPoint, PopulationSeries,
};
use serde::Deserialize;

/// One element of `GET /AvailableCountries`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableCountryDto {
    pub country_code: String,
    pub name: String,
}

impl From<AvailableCountryDto> for CountrySummary {
    fn from(dto: AvailableCountryDto) -> Self {
        CountrySummary::new(dto.country_code, dto.name)
    }
}

/// Body of `GET /country-info/{code}`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryInfoDto {
    pub country: CountryDto,
    #[serde(default)]
    pub flag_url: Option<String>,
    #[serde(default)]
    pub population: Option<Vec<PopulationDto>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryDto {
    pub common_name: String,
    /// Absent and `null` are both treated as "no borders"
    #[serde(default)]
    pub borders: Option<Vec<BorderDto>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorderDto {
    pub country_code: String,
    pub common_name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulationDto {
    #[serde(default)]
    pub population_counts: Option<Vec<PopulationCountDto>>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PopulationCountDto {
    pub year: i32,
    pub value: u64,
}

impl CountryInfoDto {
    /// Convert into the domain type for the country that was requested.
    ///
    /// Only the first population series is used; a missing or empty one
    /// becomes [`PopulationSeries::NoData`].
    pub fn into_detail(self, code: CountryCode) -> CountryDetail {
        let borders = self
            .country
            .borders
            .unwrap_or_default()
            .into_iter()
            .map(|b| BorderCountry::new(b.country_code, b.common_name))
            .collect();

        let points = self
            .population
            .and_then(|series| series.into_iter().next())
            .and_then(|first| first.population_counts)
            .unwrap_or_default()
            .into_iter()
            .map(|c| PopulationPoint::new(c.year, c.value))
            .collect();

        CountryDetail {
            code,
            common_name: self.country.common_name,
            flag_url: self.flag_url,
            borders,
            population: PopulationSeries::from_points(points),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> CountryDetail {
        let dto: CountryInfoDto = serde_json::from_str(json).unwrap();
        dto.into_detail(CountryCode::new("NO"))
    }

    #[test]
    fn test_available_countries_payload() {
        let json = r#"[{"countryCode":"NO","name":"Norway"},{"countryCode":"SE","name":"Sweden"}]"#;
        let dtos: Vec<AvailableCountryDto> = serde_json::from_str(json).unwrap();
        let countries: Vec<CountrySummary> = dtos.into_iter().map(Into::into).collect();
        assert_eq!(countries[0], CountrySummary::new("NO", "Norway"));
        assert_eq!(countries[1].code.as_str(), "SE");
    }

    #[test]
    fn test_full_country_info_payload() {
        let detail = parse(
            r#"{
                "country": {
                    "commonName": "Norway",
                    "borders": [
                        {"countryCode": "FI", "commonName": "Finland"},
                        {"countryCode": "SE", "commonName": "Sweden"}
                    ]
                },
                "flagUrl": "https://flags.example/no.svg",
                "population": [
                    {"populationCounts": [{"year": 1960, "value": 3581239}, {"year": 1961, "value": 3609800}]}
                ]
            }"#,
        );

        assert_eq!(detail.common_name, "Norway");
        assert_eq!(detail.flag_url.as_deref(), Some("https://flags.example/no.svg"));
        assert_eq!(detail.borders.len(), 2);
        assert_eq!(detail.borders[0], BorderCountry::new("FI", "Finland"));
        assert_eq!(
            detail.population.points(),
            &[
                PopulationPoint::new(1960, 3_581_239),
                PopulationPoint::new(1961, 3_609_800)
            ]
        );
    }

    #[test]
    fn test_null_borders_become_empty() {
        let detail = parse(r#"{"country": {"commonName": "Iceland", "borders": null}, "flagUrl": null}"#);
        assert!(detail.borders.is_empty());
        assert!(detail.flag_url.is_none());
    }

    #[test]
    fn test_missing_borders_become_empty() {
        let detail = parse(r#"{"country": {"commonName": "Iceland"}}"#);
        assert!(detail.borders.is_empty());
    }

    #[test]
    fn test_empty_population_array_is_no_data() {
        let detail = parse(r#"{"country": {"commonName": "Iceland"}, "population": []}"#);
        assert_eq!(detail.population, PopulationSeries::NoData);
    }

    #[test]
    fn test_empty_population_counts_is_no_data() {
        let detail = parse(
            r#"{"country": {"commonName": "Iceland"}, "population": [{"populationCounts": []}]}"#,
        );
        assert_eq!(detail.population, PopulationSeries::NoData);
    }

    #[test]
    fn test_only_first_population_series_is_used() {
        let detail = parse(
            r#"{"country": {"commonName": "X"}, "population": [
                {"populationCounts": [{"year": 2000, "value": 1}]},
                {"populationCounts": [{"year": 2000, "value": 999}]}
            ]}"#,
        );
        assert_eq!(detail.population.points(), &[PopulationPoint::new(2000, 1)]);
    }

    #[test]
    fn test_requested_code_is_kept() {
        let dto: CountryInfoDto =
            serde_json::from_str(r#"{"country": {"commonName": "Ukraine"}}"#).unwrap();
        let detail = dto.into_detail(CountryCode::new("UA"));
        assert_eq!(detail.code.as_str(), "UA");
    }
}
