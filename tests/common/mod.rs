use async_trait::async_trait;
use moodroute::error::{AppError, Result};
use moodroute::models::{Coordinates, PlaceOfInterest, RouteAlternative, RouteSummary};
use moodroute::services::corridor::BoundingBox;
use moodroute::services::mood_selector::MoodRouteSelector;
use moodroute::services::nominatim::PlaceSearch;
use moodroute::services::openroute::RoutingProvider;
use moodroute::services::place_service::PlaceService;
use moodroute::session::SessionStore;
use moodroute::AppState;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::{oneshot, Mutex, Notify};

/// Kochi city centre
#[allow(dead_code)]
pub fn start_point() -> Coordinates {
    Coordinates::new(9.9312, 76.2673).unwrap()
}

/// Edappally
#[allow(dead_code)]
pub fn end_point() -> Coordinates {
    Coordinates::new(10.0261, 76.3086).unwrap()
}

/// Distinct alternatives between the same endpoints; `index` pushes the
/// middle vertex further west so every geometry and corridor differs.
#[allow(dead_code)]
pub fn alternative(index: usize) -> RouteAlternative {
    let bend = index as f64 * 0.01;
    RouteAlternative::new(
        vec![
            [76.2673, 9.9312],
            [76.2500 - bend, 9.9750],
            [76.3086, 10.0261],
        ],
        RouteSummary {
            distance_meters: 12_400.0 + index as f64 * 1_500.0,
            duration_seconds: 1_560.0 + index as f64 * 240.0,
        },
    )
}

#[allow(dead_code)]
pub fn alternatives(count: usize) -> Vec<RouteAlternative> {
    (0..count).map(alternative).collect()
}

/// Routing provider returning a fixed list.
pub struct StubRouting {
    alternatives: Vec<RouteAlternative>,
    failure: Option<fn() -> AppError>,
    pub calls: AtomicUsize,
}

#[allow(dead_code)]
impl StubRouting {
    pub fn new(alternatives: Vec<RouteAlternative>) -> Self {
        StubRouting {
            alternatives,
            failure: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(failure: fn() -> AppError) -> Self {
        StubRouting {
            alternatives: vec![],
            failure: Some(failure),
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl RoutingProvider for StubRouting {
    async fn fetch_alternatives(
        &self,
        _start: &Coordinates,
        _end: &Coordinates,
    ) -> Result<Vec<RouteAlternative>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.failure {
            Some(failure) => Err(failure()),
            None => Ok(self.alternatives.clone()),
        }
    }
}

/// Routing provider whose first call blocks until released.
#[allow(dead_code)]
pub struct GatedRouting {
    alternatives: Vec<RouteAlternative>,
    gate: Mutex<Option<oneshot::Receiver<()>>>,
    pub entered: Arc<Notify>,
}

#[allow(dead_code)]
impl GatedRouting {
    pub fn new(alternatives: Vec<RouteAlternative>) -> (Self, oneshot::Sender<()>) {
        let (release, gate) = oneshot::channel();
        let routing = GatedRouting {
            alternatives,
            gate: Mutex::new(Some(gate)),
            entered: Arc::new(Notify::new()),
        };
        (routing, release)
    }
}

#[async_trait]
impl RoutingProvider for GatedRouting {
    async fn fetch_alternatives(
        &self,
        _start: &Coordinates,
        _end: &Coordinates,
    ) -> Result<Vec<RouteAlternative>> {
        let gate = self.gate.lock().await.take();
        if let Some(gate) = gate {
            self.entered.notify_one();
            let _ = gate.await;
        }
        Ok(self.alternatives.clone())
    }
}

/// Place search answering calls in order with a scripted number of hits.
/// Call `n` gets `counts[n % counts.len()]` places, so a repeated
/// selection over the same alternatives replays the same answers. Places
/// sit at the centre of the searched box.
pub struct StubPlaces {
    counts: Vec<usize>,
    fail_on_call: Option<usize>,
    pub calls: AtomicUsize,
}

#[allow(dead_code)]
impl StubPlaces {
    pub fn new(counts: Vec<usize>) -> Self {
        StubPlaces {
            counts,
            fail_on_call: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing_on(counts: Vec<usize>, call: usize) -> Self {
        StubPlaces {
            counts,
            fail_on_call: Some(call),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PlaceSearch for StubPlaces {
    async fn search_in_box(
        &self,
        keyword: &str,
        bbox: &BoundingBox,
        limit: usize,
    ) -> Result<Vec<PlaceOfInterest>> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_on_call == Some(call) {
            return Err(AppError::Network("Place search HTTP 429".to_string()));
        }

        let count = self.counts[call % self.counts.len()].min(limit);
        let lat = (bbox.min_lat + bbox.max_lat) / 2.0;
        let lng = (bbox.min_lng + bbox.max_lng) / 2.0;

        Ok((0..count)
            .map(|i| PlaceOfInterest::new(lat, lng, format!("{keyword} #{i}")))
            .collect())
    }
}

#[allow(dead_code)]
pub fn selector(
    routing: Arc<dyn RoutingProvider>,
    places: Arc<dyn PlaceSearch>,
) -> MoodRouteSelector {
    MoodRouteSelector::new(routing, PlaceService::new(places))
}

#[allow(dead_code)]
pub fn app_state(
    routing: Arc<dyn RoutingProvider>,
    places: Arc<dyn PlaceSearch>,
) -> Arc<AppState> {
    Arc::new(AppState {
        selector: selector(routing, places),
        sessions: SessionStore::new(),
    })
}

/// Check if we should skip real API tests
#[allow(dead_code)]
pub fn should_skip_real_api_tests() -> bool {
    std::env::var("SKIP_REAL_API_TESTS").is_ok() || std::env::var("ORS_API_KEY").is_err()
}
