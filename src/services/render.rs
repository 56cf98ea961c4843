use crate::constants::{FASTEST_ROUTE_COLOR, MOOD_ROUTE_COLOR};
use crate::models::{Category, RouteAlternative, SelectionResult};
use geojson::{Feature, Geometry, JsonObject, Value};
use serde::Serialize;
use serde_json::json;

/// One place bubble on the map.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MarkerView {
    pub lat: f64,
    pub lng: f64,
    pub icon: &'static str,
    pub label: String,
    pub border_color: &'static str,
}

/// Everything a map client needs to draw one side of the comparison.
#[derive(Debug, Clone, Serialize)]
pub struct RouteView {
    pub show_mood: bool,
    pub category: Category,
    pub color: &'static str,
    pub route: Feature,
    pub markers: Vec<MarkerView>,
    pub status_line: String,
}

impl RouteView {
    pub fn build(result: &SelectionResult, show_mood: bool) -> Self {
        let (route, color) = if show_mood {
            (&result.mood_route, MOOD_ROUTE_COLOR)
        } else {
            (&result.fastest_route, FASTEST_ROUTE_COLOR)
        };

        // Bubbles only make sense next to the route they were found along
        let markers = if show_mood {
            result
                .matched_places
                .iter()
                .map(|place| MarkerView {
                    lat: place.lat,
                    lng: place.lng,
                    icon: result.category.emoji(),
                    label: place.display_name.clone(),
                    border_color: color,
                })
                .collect()
        } else {
            Vec::new()
        };

        RouteView {
            show_mood,
            category: result.category,
            color,
            route: route_feature(route, color),
            markers,
            status_line: status_line(result, show_mood),
        }
    }
}

/// `"7.20 km | 15 mins | Fastest Route"` or `"... | Found 5 restaurants"`.
/// Figures are those of the route being shown.
pub fn status_line(result: &SelectionResult, show_mood: bool) -> String {
    let route = if show_mood {
        &result.mood_route
    } else {
        &result.fastest_route
    };
    let prefix = format!(
        "{:.2} km | {} mins",
        route.summary.distance_km(),
        route.summary.duration_minutes()
    );

    if show_mood {
        format!(
            "{} | Found {} {}s",
            prefix,
            result.matched_places.len(),
            result.category
        )
    } else {
        format!("{} | Fastest Route", prefix)
    }
}

pub fn route_feature(route: &RouteAlternative, color: &str) -> Feature {
    let mut properties = JsonObject::new();
    properties.insert("color".to_string(), json!(color));
    properties.insert(
        "distance_km".to_string(),
        json!(route.summary.distance_km()),
    );
    properties.insert(
        "duration_minutes".to_string(),
        json!(route.summary.duration_minutes()),
    );

    Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::from(&route.line_string()))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}
