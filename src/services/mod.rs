pub mod corridor;
pub mod mood_selector;
pub mod nominatim;
pub mod openroute;
pub mod place_service;
pub mod render;
