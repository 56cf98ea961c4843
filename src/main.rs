use axum::Router;
use moodroute::config::Config;
use moodroute::services::mood_selector::MoodRouteSelector;
use moodroute::services::nominatim::{NominatimClient, PlaceSearch};
use moodroute::services::openroute::{OpenRouteClient, RoutingProvider};
use moodroute::services::place_service::PlaceService;
use moodroute::session::SessionStore;
use moodroute::AppState;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moodroute=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| format!("Failed to load configuration: {}", e))?;

    tracing::info!("Starting MoodRoute API server");
    tracing::info!("Configuration loaded successfully");

    // Initialize services
    let routing: Arc<dyn RoutingProvider> = if let Some(ref base_url) = config.ors_base_url {
        Arc::new(OpenRouteClient::with_config(
            config.ors_api_key.clone(),
            base_url.clone(),
            config.ors_auth_mode.clone(),
        ))
    } else {
        Arc::new(OpenRouteClient::new(config.ors_api_key.clone()))
    };
    let search: Arc<dyn PlaceSearch> = Arc::new(NominatimClient::with_config(
        config.nominatim_base_url.clone(),
        config.nominatim_user_agent.clone(),
    ));
    let place_service = PlaceService::new(search);
    let selector = MoodRouteSelector::new(routing, place_service);

    // Create application state
    let state = Arc::new(AppState {
        selector,
        sessions: SessionStore::new(),
    });

    // Build router with CORS and tracing
    let app = Router::new()
        .nest("/api/v1", moodroute::routes::create_router(state))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.server_address();
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
