use crate::models::{Category, Coordinates, PlaceOfInterest};
use geo::LineString;
use serde::{Deserialize, Serialize};

/// Provider summary for one alternative.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct RouteSummary {
    pub distance_meters: f64,
    pub duration_seconds: f64,
}

impl RouteSummary {
    pub fn distance_km(&self) -> f64 {
        self.distance_meters / 1000.0
    }

    pub fn duration_minutes(&self) -> u32 {
        (self.duration_seconds / 60.0).round() as u32
    }
}

/// One candidate path for a start/end pair, exactly as the routing
/// provider returned it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteAlternative {
    /// GeoJSON coordinates as [lng, lat] pairs
    pub geometry: Vec<[f64; 2]>,
    pub summary: RouteSummary,
}

impl RouteAlternative {
    pub fn new(geometry: Vec<[f64; 2]>, summary: RouteSummary) -> Self {
        RouteAlternative { geometry, summary }
    }

    /// Structural equality of the path, ignoring the summary
    pub fn same_geometry(&self, other: &RouteAlternative) -> bool {
        self.geometry == other.geometry
    }

    pub fn line_string(&self) -> LineString<f64> {
        LineString::from(self.geometry.clone())
    }
}

/// POI search outcome for a single alternative.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AlternativeScore {
    pub index: usize,
    pub count: usize,
    pub places: Vec<PlaceOfInterest>,
}

/// Outcome of one mood query. `matched_places` always belong to
/// `mood_route`, including when the identical-geometry fallback fired.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectionResult {
    pub category: Category,
    pub fastest_route: RouteAlternative,
    pub mood_route: RouteAlternative,
    pub mood_route_index: usize,
    pub matched_places: Vec<PlaceOfInterest>,
    /// POI count per alternative, in provider order
    pub place_counts: Vec<usize>,
    pub fallback_applied: bool,
}

// Request/Response types for API endpoints

#[derive(Debug, Deserialize)]
pub struct MoodRouteRequest {
    pub start_point: Coordinates,
    pub end_point: Coordinates,
    /// Free-text mood, e.g. "I'm hungry"
    #[serde(default)]
    pub need: String,
    #[serde(default = "default_show_mood")]
    pub show_mood: bool,
}

fn default_show_mood() -> bool {
    true
}

impl MoodRouteRequest {
    pub fn validate(&self) -> Result<(), String> {
        self.start_point
            .validate()
            .map_err(|e| format!("start_point: {}", e))?;
        self.end_point
            .validate()
            .map_err(|e| format!("end_point: {}", e))?;

        // Same click twice; the provider cannot route a zero-length trip
        if self.start_point.distance_to(&self.end_point) < 0.001 {
            return Err("start_point and end_point must differ".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct RenderQuery {
    #[serde(default)]
    pub show_mood: bool,
}
