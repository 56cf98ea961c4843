use serde::{Deserialize, Serialize};

/// A search hit near a route corridor. Lives for one query cycle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaceOfInterest {
    pub lat: f64,
    pub lng: f64,
    pub display_name: String,
}

impl PlaceOfInterest {
    pub fn new(lat: f64, lng: f64, display_name: impl Into<String>) -> Self {
        PlaceOfInterest {
            lat,
            lng,
            display_name: display_name.into(),
        }
    }
}
