use crate::constants::*;
use crate::error::{AppError, Result};
use crate::models::{
    AlternativeScore, Category, Coordinates, RouteAlternative, SelectionResult,
};
use crate::services::corridor;
use crate::services::openroute::RoutingProvider;
use crate::services::place_service::PlaceService;
use std::sync::Arc;

/// Picks the fastest route and the alternative whose corridor holds the
/// most places matching the user's mood.
#[derive(Clone)]
pub struct MoodRouteSelector {
    routing: Arc<dyn RoutingProvider>,
    places: PlaceService,
}

impl MoodRouteSelector {
    pub fn new(routing: Arc<dyn RoutingProvider>, places: PlaceService) -> Self {
        MoodRouteSelector { routing, places }
    }

    pub async fn fetch_alternatives(
        &self,
        start: &Coordinates,
        end: &Coordinates,
    ) -> Result<Vec<RouteAlternative>> {
        self.routing.fetch_alternatives(start, end).await
    }

    /// Count places of `category` inside the corridor around one alternative.
    pub async fn score_alternative(
        &self,
        index: usize,
        route: &RouteAlternative,
        category: Category,
    ) -> Result<AlternativeScore> {
        let bbox = corridor::corridor_bounds(&route.line_string(), CORRIDOR_BUFFER_RADIUS_KM)
            .ok_or_else(|| AppError::Data(format!("Alternative {} has no geometry", index)))?;

        let places = self
            .places
            .find_places(category, &bbox, POI_RESULT_LIMIT)
            .await
            .map_err(|e| {
                tracing::error!(
                    alternative = index,
                    category = %category,
                    "Place search failed for alternative {}: {}",
                    index, e
                );
                e
            })?;

        tracing::debug!(
            alternative = index,
            category = %category,
            count = places.len(),
            "Alternative {} scored {} {} places",
            index, places.len(), category
        );

        Ok(AlternativeScore {
            index,
            count: places.len(),
            places,
        })
    }

    /// Score every alternative in list order. The first failure aborts the
    /// whole scan.
    pub async fn score_all(
        &self,
        alternatives: &[RouteAlternative],
        category: Category,
    ) -> Result<Vec<AlternativeScore>> {
        let mut scores = Vec::with_capacity(alternatives.len());
        for (index, route) in alternatives.iter().enumerate() {
            scores.push(self.score_alternative(index, route, category).await?);
        }
        Ok(scores)
    }

    /// Fetch, score and select for one query.
    pub async fn select(
        &self,
        start: &Coordinates,
        end: &Coordinates,
        need: &str,
    ) -> Result<SelectionResult> {
        let category = Category::derive(need);
        let alternatives = self.fetch_alternatives(start, end).await?;
        self.select_among(alternatives, category).await
    }

    /// Score and select among alternatives that were already fetched.
    pub async fn select_among(
        &self,
        alternatives: Vec<RouteAlternative>,
        category: Category,
    ) -> Result<SelectionResult> {
        if alternatives.is_empty() {
            return Err(AppError::Data(
                "No route alternatives to select from".to_string(),
            ));
        }

        let scores = self.score_all(&alternatives, category).await?;
        select_from_scores(alternatives, scores, category)
    }
}

/// Index of the strictly greatest count; earlier entries win ties.
pub fn best_index(counts: &[usize]) -> usize {
    let mut best = 0;
    let mut best_count: i64 = -1;

    for (index, &count) in counts.iter().enumerate() {
        if count as i64 > best_count {
            best_count = count as i64;
            best = index;
        }
    }

    best
}

/// Reduce per-alternative scores to a selection. Pure: same inputs, same
/// result.
///
/// When the best-scoring alternative has the same geometry as the fastest
/// one and there is more than one alternative, the second alternative is
/// chosen instead so the two routes can be told apart. The matched places
/// follow the route that is finally chosen.
pub fn select_from_scores(
    alternatives: Vec<RouteAlternative>,
    mut scores: Vec<AlternativeScore>,
    category: Category,
) -> Result<SelectionResult> {
    if alternatives.is_empty() {
        return Err(AppError::Data(
            "No route alternatives to select from".to_string(),
        ));
    }
    if scores.len() != alternatives.len() {
        return Err(AppError::Internal(format!(
            "Scored {} of {} alternatives",
            scores.len(),
            alternatives.len()
        )));
    }

    scores.sort_by_key(|score| score.index);
    let place_counts: Vec<usize> = scores.iter().map(|score| score.count).collect();

    let best = best_index(&place_counts);
    let fallback_applied =
        alternatives.len() > 1 && alternatives[best].same_geometry(&alternatives[0]);
    let mood_route_index = if fallback_applied { 1 } else { best };

    tracing::info!(
        category = %category,
        alternatives = alternatives.len(),
        best,
        mood_route_index,
        fallback_applied,
        "Mood route: alternative {} of {} ({} places, counts {:?})",
        mood_route_index,
        alternatives.len(),
        place_counts[mood_route_index],
        place_counts
    );

    let matched_places = std::mem::take(&mut scores[mood_route_index].places);
    let fastest_route = alternatives[0].clone();
    let mood_route = alternatives[mood_route_index].clone();

    Ok(SelectionResult {
        category,
        fastest_route,
        mood_route,
        mood_route_index,
        matched_places,
        place_counts,
        fallback_applied,
    })
}
