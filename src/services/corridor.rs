//! Corridor buffering around a route.
//!
//! A round-capped buffer of radius `r` around a line has exactly the line's
//! bounding box grown by `r` on every side, so the search area is derived
//! from the line's bounding rectangle without materialising the polygon.

use crate::constants::{KM_PER_DEGREE_LAT, KM_PER_DEGREE_LNG_EQUATOR};
use geo::{BoundingRect, LineString};
use serde::{Deserialize, Serialize};

/// Axis-aligned search window in degrees.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BoundingBox {
    pub min_lng: f64,
    pub min_lat: f64,
    pub max_lng: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    /// Nominatim `viewbox` order: left, top, right, bottom
    pub fn to_viewbox(&self) -> String {
        format!(
            "{},{},{},{}",
            self.min_lng, self.max_lat, self.max_lng, self.min_lat
        )
    }

    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        (self.min_lat..=self.max_lat).contains(&lat) && (self.min_lng..=self.max_lng).contains(&lng)
    }
}

/// Bounding box of the corridor of `radius_km` around `route`.
/// Returns `None` for an empty geometry.
pub fn corridor_bounds(route: &LineString<f64>, radius_km: f64) -> Option<BoundingBox> {
    let rect = route.bounding_rect()?;

    let lat_pad = radius_km / KM_PER_DEGREE_LAT;
    let min_lat = (rect.min().y - lat_pad).max(-90.0);
    let max_lat = (rect.max().y + lat_pad).min(90.0);

    // Longitude degrees shrink towards the poles; pad using the widest
    // latitude the corridor reaches so the box still encloses the buffer.
    let widest_lat = min_lat.abs().max(max_lat.abs()).to_radians();
    let km_per_degree_lng = (KM_PER_DEGREE_LNG_EQUATOR * widest_lat.cos()).max(1e-6);
    let lng_pad = (radius_km / km_per_degree_lng).min(180.0);

    Some(BoundingBox {
        min_lng: (rect.min().x - lng_pad).max(-180.0),
        min_lat,
        max_lng: (rect.max().x + lng_pad).min(180.0),
        max_lat,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinates;

    #[test]
    fn test_corridor_encloses_route_with_radius() {
        let route = LineString::from(vec![[76.2673, 9.9312], [76.2999, 9.9816]]);
        let bbox = corridor_bounds(&route, 1.5).unwrap();

        assert!(bbox.min_lng < 76.2673 && bbox.max_lng > 76.2999);
        assert!(bbox.min_lat < 9.9312 && bbox.max_lat > 9.9816);

        // Each edge sits ~1.5 km beyond the route's extreme point
        let south_edge = Coordinates::new(bbox.min_lat, 76.2673).unwrap();
        let start = Coordinates::new(9.9312, 76.2673).unwrap();
        assert!((south_edge.distance_to(&start) - 1.5).abs() < 0.05);

        let east_edge = Coordinates::new(9.9816, bbox.max_lng).unwrap();
        let end = Coordinates::new(9.9816, 76.2999).unwrap();
        assert!((east_edge.distance_to(&end) - 1.5).abs() < 0.05);
    }

    #[test]
    fn test_corridor_of_single_point() {
        let route = LineString::from(vec![[2.3522, 48.8566]]);
        let bbox = corridor_bounds(&route, 1.0).unwrap();

        assert!(bbox.contains(48.8566, 2.3522));
        assert!(bbox.max_lng - bbox.min_lng > bbox.max_lat - bbox.min_lat);
    }

    #[test]
    fn test_corridor_of_empty_route() {
        let route: LineString<f64> = LineString::new(vec![]);
        assert!(corridor_bounds(&route, 1.5).is_none());
    }

    #[test]
    fn test_corridor_clamps_near_pole() {
        let route = LineString::from(vec![[179.99, 89.999]]);
        let bbox = corridor_bounds(&route, 5.0).unwrap();

        assert_eq!(bbox.max_lat, 90.0);
        assert_eq!(bbox.max_lng, 180.0);
        assert!(bbox.min_lng >= -180.0);
    }

    #[test]
    fn test_viewbox_order() {
        let bbox = BoundingBox {
            min_lng: 76.1,
            min_lat: 9.8,
            max_lng: 76.4,
            max_lat: 10.1,
        };
        assert_eq!(bbox.to_viewbox(), "76.1,10.1,76.4,9.8");
    }
}
