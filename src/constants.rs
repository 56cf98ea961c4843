//! Stable application-wide constants.
//!
//! Values here are fixed selection parameters and default fallbacks for
//! env-var-based configuration. The selection parameters are not runtime
//! options.

// --- Server defaults (used when HOST / PORT env vars are absent) ---

/// Default bind address for the HTTP server.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default port for the HTTP server.
pub const DEFAULT_PORT: &str = "3000";

// --- Provider endpoints ---

/// OpenRouteService API root. Overridden by `ORS_BASE_URL`.
pub const OPENROUTE_BASE_URL: &str = "https://api.openrouteservice.org";
/// Routing profile used for every directions request.
pub const OPENROUTE_PROFILE: &str = "driving-car";
/// Nominatim API root. Overridden by `NOMINATIM_BASE_URL`.
pub const NOMINATIM_BASE_URL: &str = "https://nominatim.openstreetmap.org";
/// Nominatim rejects requests without an identifying User-Agent.
pub const DEFAULT_NOMINATIM_USER_AGENT: &str = "moodroute/0.1";

// --- Alternative route request ---

/// Number of alternatives requested from the routing provider.
pub const ALTERNATIVE_ROUTES_TARGET_COUNT: u32 = 3;
/// Maximum shared fraction between two alternatives (0.5 = must deviate by 50%).
pub const ALTERNATIVE_ROUTES_SHARE_FACTOR: f64 = 0.5;
/// Maximum cost of an alternative relative to the fastest route.
pub const ALTERNATIVE_ROUTES_WEIGHT_FACTOR: f64 = 1.4;

// --- Corridor scoring ---

/// Radius (km) of the corridor buffered around each alternative.
pub const CORRIDOR_BUFFER_RADIUS_KM: f64 = 1.5;
/// Result cap for each POI search.
pub const POI_RESULT_LIMIT: usize = 20;

// --- Geodesy ---

/// Kilometers per degree of latitude.
pub const KM_PER_DEGREE_LAT: f64 = 110.574;
/// Kilometers per degree of longitude at the equator.
pub const KM_PER_DEGREE_LNG_EQUATOR: f64 = 111.320;

// --- Rendering ---

/// Line colour for the fastest route.
pub const FASTEST_ROUTE_COLOR: &str = "#3498db";
/// Line colour for the mood route and its markers.
pub const MOOD_ROUTE_COLOR: &str = "#8b5cf6";
