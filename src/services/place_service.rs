use crate::error::Result;
use crate::models::{Category, PlaceOfInterest};
use crate::services::corridor::BoundingBox;
use crate::services::nominatim::PlaceSearch;
use std::sync::Arc;

/// Place lookups for one corridor box. Every call goes to the provider;
/// nothing is shared between queries.
#[derive(Clone)]
pub struct PlaceService {
    search: Arc<dyn PlaceSearch>,
}

impl PlaceService {
    pub fn new(search: Arc<dyn PlaceSearch>) -> Self {
        PlaceService { search }
    }

    /// Places of `category` inside `bbox`, at most `limit`, in provider order.
    pub async fn find_places(
        &self,
        category: Category,
        bbox: &BoundingBox,
        limit: usize,
    ) -> Result<Vec<PlaceOfInterest>> {
        let found = self
            .search
            .search_in_box(category.keyword(), bbox, limit)
            .await?;
        let returned = found.len();

        let places: Vec<PlaceOfInterest> = found
            .into_iter()
            .filter(|place| bbox.contains(place.lat, place.lng))
            .take(limit)
            .collect();

        if places.len() < returned {
            tracing::debug!(
                category = %category,
                returned,
                kept = places.len(),
                "Dropped {} place results outside {}",
                returned - places.len(),
                bbox.to_viewbox()
            );
        }

        Ok(places)
    }
}
