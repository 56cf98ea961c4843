use crate::constants::*;
use crate::error::{AppError, Result};
use crate::models::PlaceOfInterest;
use crate::services::corridor::BoundingBox;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

/// Free-text place search bounded to a box.
#[async_trait]
pub trait PlaceSearch: Send + Sync {
    async fn search_in_box(
        &self,
        keyword: &str,
        bbox: &BoundingBox,
        limit: usize,
    ) -> Result<Vec<PlaceOfInterest>>;
}

#[derive(Clone)]
pub struct NominatimClient {
    client: Client,
    base_url: String,
    user_agent: String,
}

impl NominatimClient {
    pub fn new() -> Self {
        Self::with_config(
            NOMINATIM_BASE_URL.to_string(),
            DEFAULT_NOMINATIM_USER_AGENT.to_string(),
        )
    }

    pub fn with_config(base_url: String, user_agent: String) -> Self {
        NominatimClient {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            user_agent,
        }
    }

    fn query_params(
        keyword: &str,
        bbox: &BoundingBox,
        limit: usize,
    ) -> Vec<(&'static str, String)> {
        vec![
            ("format", "json".to_string()),
            ("q", keyword.to_string()),
            ("bounded", "1".to_string()),
            ("viewbox", bbox.to_viewbox()),
            ("limit", limit.to_string()),
        ]
    }
}

impl Default for NominatimClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlaceSearch for NominatimClient {
    async fn search_in_box(
        &self,
        keyword: &str,
        bbox: &BoundingBox,
        limit: usize,
    ) -> Result<Vec<PlaceOfInterest>> {
        let url = format!("{}/search", self.base_url);

        tracing::debug!(
            keyword,
            viewbox = %bbox.to_viewbox(),
            limit,
            "Nominatim search: '{}' in {}",
            keyword, bbox.to_viewbox()
        );

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .query(&Self::query_params(keyword, bbox, limit))
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Place search request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!(status = %status, keyword, "Nominatim HTTP error {}", status);
            return Err(AppError::Network(format!(
                "Place search HTTP {}: {}",
                status, error_text
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| {
                AppError::Network(format!("Failed to read place search response: {}", e))
            })?;

        parse_places(&body)
    }
}

/// Decode a Nominatim `format=json` body, keeping result order
pub fn parse_places(body: &str) -> Result<Vec<PlaceOfInterest>> {
    let results: Vec<NominatimPlace> = serde_json::from_str(body)
        .map_err(|e| AppError::Data(format!("Failed to parse place search response: {}", e)))?;

    results
        .into_iter()
        .map(|place| {
            let lat = place.lat.parse::<f64>().map_err(|_| {
                AppError::Data(format!("Invalid latitude '{}' in place search", place.lat))
            })?;
            let lng = place.lon.parse::<f64>().map_err(|_| {
                AppError::Data(format!("Invalid longitude '{}' in place search", place.lon))
            })?;
            Ok(PlaceOfInterest::new(lat, lng, place.display_name))
        })
        .collect()
}

// Nominatim returns coordinates as strings
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
    #[serde(default)]
    display_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_params() {
        let bbox = BoundingBox {
            min_lng: 76.1,
            min_lat: 9.8,
            max_lng: 76.4,
            max_lat: 10.1,
        };

        let params = NominatimClient::query_params("gas station", &bbox, 20);
        assert_eq!(
            params,
            vec![
                ("format", "json".to_string()),
                ("q", "gas station".to_string()),
                ("bounded", "1".to_string()),
                ("viewbox", "76.1,10.1,76.4,9.8".to_string()),
                ("limit", "20".to_string()),
            ]
        );
    }

    #[test]
    fn test_with_config_trims_trailing_slash() {
        let client =
            NominatimClient::with_config("http://localhost:8080/".to_string(), "test".to_string());
        assert_eq!(client.base_url, "http://localhost:8080");
        assert_eq!(NominatimClient::new().base_url, NOMINATIM_BASE_URL);
    }

    #[test]
    fn test_parse_places() {
        let body = json!([
            {
                "place_id": 1,
                "lat": "9.9401",
                "lon": "76.2712",
                "display_name": "Kashi Art Cafe, Fort Kochi"
            },
            {"place_id": 2, "lat": "9.9655", "lon": "76.2421", "display_name": "Loafers Corner"}
        ])
        .to_string();

        let places = parse_places(&body).unwrap();
        assert_eq!(places.len(), 2);
        assert_eq!(places[0].lat, 9.9401);
        assert_eq!(places[0].lng, 76.2712);
        assert_eq!(places[1].display_name, "Loafers Corner");
    }

    #[test]
    fn test_parse_empty_result() {
        assert!(parse_places("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_bad_data() {
        let bad_lat = json!([{"lat": "north", "lon": "76.2", "display_name": "x"}]).to_string();
        assert!(matches!(parse_places(&bad_lat), Err(AppError::Data(_))));

        let not_a_list = json!({"error": "Bad request"}).to_string();
        assert!(matches!(parse_places(&not_a_list), Err(AppError::Data(_))));
    }
}
