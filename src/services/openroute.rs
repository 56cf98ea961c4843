use crate::constants::*;
use crate::error::{AppError, Result};
use crate::models::{Coordinates, RouteAlternative, RouteSummary};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Source of ordered route alternatives. Index 0 is the fastest.
#[async_trait]
pub trait RoutingProvider: Send + Sync {
    async fn fetch_alternatives(
        &self,
        start: &Coordinates,
        end: &Coordinates,
    ) -> Result<Vec<RouteAlternative>>;
}

/// How the client authenticates with the directions API.
#[derive(Clone, Debug)]
pub enum AuthMode {
    /// OpenRouteService default: raw key in the `Authorization` header.
    HeaderKey,
    /// Proxy mode: send `Authorization: Bearer` header.
    BearerHeader,
}

impl FromStr for AuthMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "header" => Ok(AuthMode::HeaderKey),
            "bearer" => Ok(AuthMode::BearerHeader),
            _ => Err(format!(
                "Invalid ORS auth mode: {}. Use 'header' or 'bearer'",
                s
            )),
        }
    }
}

#[derive(Clone)]
pub struct OpenRouteClient {
    client: Client,
    api_key: String,
    base_url: String,
    auth_mode: AuthMode,
}

impl OpenRouteClient {
    pub fn new(api_key: String) -> Self {
        OpenRouteClient {
            client: Client::new(),
            api_key,
            base_url: OPENROUTE_BASE_URL.to_string(),
            auth_mode: AuthMode::HeaderKey,
        }
    }

    pub fn with_config(api_key: String, base_url: String, auth_mode: AuthMode) -> Self {
        OpenRouteClient {
            client: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_mode,
        }
    }

    fn directions_url(&self) -> String {
        format!(
            "{}/v2/directions/{}/geojson",
            self.base_url, OPENROUTE_PROFILE
        )
    }

    fn request_body(start: &Coordinates, end: &Coordinates) -> DirectionsRequestBody {
        DirectionsRequestBody {
            coordinates: [start.to_lng_lat(), end.to_lng_lat()],
            alternative_routes: AlternativeRoutesParams {
                target_count: ALTERNATIVE_ROUTES_TARGET_COUNT,
                share_factor: ALTERNATIVE_ROUTES_SHARE_FACTOR,
                weight_factor: ALTERNATIVE_ROUTES_WEIGHT_FACTOR,
            },
        }
    }
}

#[async_trait]
impl RoutingProvider for OpenRouteClient {
    /// Request the fastest route plus alternatives between two points.
    /// The provider's order is kept unmodified.
    async fn fetch_alternatives(
        &self,
        start: &Coordinates,
        end: &Coordinates,
    ) -> Result<Vec<RouteAlternative>> {
        tracing::debug!(
            start_lat = start.lat,
            start_lng = start.lng,
            end_lat = end.lat,
            end_lng = end.lng,
            target_count = ALTERNATIVE_ROUTES_TARGET_COUNT,
            "OpenRouteService request: ({:.4}, {:.4}) -> ({:.4}, {:.4})",
            start.lat, start.lng, end.lat, end.lng
        );

        let mut request = self
            .client
            .post(self.directions_url())
            .json(&Self::request_body(start, end));

        request = match self.auth_mode {
            AuthMode::HeaderKey => request.header(reqwest::header::AUTHORIZATION, &self.api_key),
            AuthMode::BearerHeader => request.bearer_auth(&self.api_key),
        };

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Routing request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!(
                status = %status,
                "OpenRouteService HTTP error {}: {}",
                status, error_text
            );
            return Err(AppError::Network(format!(
                "Routing HTTP {}: {}",
                status, error_text
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::Network(format!("Failed to read routing response: {}", e)))?;

        let alternatives = parse_directions(&body)?;

        tracing::debug!(
            alternatives = alternatives.len(),
            fastest_km = %format!("{:.2}", alternatives[0].summary.distance_km()),
            fastest_min = alternatives[0].summary.duration_minutes(),
            "OpenRouteService response: {} alternatives, fastest {:.2}km",
            alternatives.len(),
            alternatives[0].summary.distance_km()
        );

        Ok(alternatives)
    }
}

/// Decode a GeoJSON directions body into alternatives. Never returns an
/// empty list.
pub fn parse_directions(body: &str) -> Result<Vec<RouteAlternative>> {
    let collection: OrsFeatureCollection = serde_json::from_str(body)
        .map_err(|e| AppError::Data(format!("Failed to parse routing response: {}", e)))?;

    let features = collection
        .features
        .ok_or_else(|| AppError::Data("Routing response has no feature list".to_string()))?;

    if features.is_empty() {
        return Err(AppError::Data(
            "Routing response contains no routes".to_string(),
        ));
    }

    Ok(features
        .into_iter()
        .map(|feature| {
            RouteAlternative::new(
                feature.geometry.coordinates,
                RouteSummary {
                    distance_meters: feature.properties.summary.distance,
                    duration_seconds: feature.properties.summary.duration,
                },
            )
        })
        .collect())
}

// OpenRouteService request/response types

#[derive(Debug, Serialize)]
struct DirectionsRequestBody {
    coordinates: [[f64; 2]; 2],
    alternative_routes: AlternativeRoutesParams,
}

#[derive(Debug, Serialize)]
struct AlternativeRoutesParams {
    target_count: u32,
    share_factor: f64,
    weight_factor: f64,
}

#[derive(Debug, Deserialize)]
struct OrsFeatureCollection {
    features: Option<Vec<OrsFeature>>,
}

#[derive(Debug, Deserialize)]
struct OrsFeature {
    geometry: OrsGeometry,
    properties: OrsProperties,
}

#[derive(Debug, Deserialize)]
struct OrsGeometry {
    coordinates: Vec<[f64; 2]>, // [lng, lat] pairs
}

#[derive(Debug, Deserialize)]
struct OrsProperties {
    summary: OrsSummary,
}

// ORS omits distance/duration when they are zero
#[derive(Debug, Deserialize)]
struct OrsSummary {
    #[serde(default)]
    distance: f64, // meters
    #[serde(default)]
    duration: f64, // seconds
}
