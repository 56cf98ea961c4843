use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Result<Self, String> {
        let coords = Coordinates { lat, lng };
        coords.validate()?;
        Ok(coords)
    }

    /// Check bounds on a value that arrived through deserialization
    pub fn validate(&self) -> Result<(), String> {
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(format!(
                "Invalid latitude: {} (must be between -90 and 90)",
                self.lat
            ));
        }
        if !(-180.0..=180.0).contains(&self.lng) {
            return Err(format!(
                "Invalid longitude: {} (must be between -180 and 180)",
                self.lng
            ));
        }
        Ok(())
    }

    /// Calculate distance between two coordinates using Haversine formula
    /// Returns distance in kilometers
    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        const EARTH_RADIUS_KM: f64 = 6371.0;

        let lat1_rad = self.lat.to_radians();
        let lat2_rad = other.lat.to_radians();
        let delta_lat = (other.lat - self.lat).to_radians();
        let delta_lng = (other.lng - self.lng).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }

    /// GeoJSON position order: `[lng, lat]`
    pub fn to_lng_lat(&self) -> [f64; 2] {
        [self.lng, self.lat]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_validation() {
        assert!(Coordinates::new(9.9312, 76.2673).is_ok());
        assert!(Coordinates::new(91.0, 0.0).is_err()); // Invalid lat
        assert!(Coordinates::new(0.0, 181.0).is_err()); // Invalid lng

        let deserialized = Coordinates { lat: -95.0, lng: 0.0 };
        assert!(deserialized.validate().is_err());
    }

    #[test]
    fn test_distance_calculation() {
        let kochi = Coordinates::new(9.9312, 76.2673).unwrap();
        let aluva = Coordinates::new(10.1004, 76.3570).unwrap();

        let distance = kochi.distance_to(&aluva);
        // Kochi to Aluva is roughly 21 km as the crow flies
        assert!((distance - 21.0).abs() < 3.0);
    }

    #[test]
    fn test_lng_lat_order() {
        let coords = Coordinates::new(9.9312, 76.2673).unwrap();
        assert_eq!(coords.to_lng_lat(), [76.2673, 9.9312]);
    }
}
