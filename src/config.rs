use crate::constants::*;
use crate::services::openroute::AuthMode;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub ors_api_key: String,
    pub ors_base_url: Option<String>,
    pub ors_auth_mode: AuthMode,
    pub nominatim_base_url: String,
    pub nominatim_user_agent: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenv::dotenv().ok();

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| "Invalid PORT")?,
            ors_api_key: env::var("ORS_API_KEY").map_err(|_| "ORS_API_KEY must be set")?,
            ors_base_url: env::var("ORS_BASE_URL").ok(),
            ors_auth_mode: env::var("ORS_AUTH_MODE")
                .unwrap_or_else(|_| "header".to_string())
                .parse()?,
            nominatim_base_url: env::var("NOMINATIM_BASE_URL")
                .unwrap_or_else(|_| NOMINATIM_BASE_URL.to_string()),
            nominatim_user_agent: env::var("NOMINATIM_USER_AGENT")
                .unwrap_or_else(|_| DEFAULT_NOMINATIM_USER_AGENT.to_string()),
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
