use std::env;
use log::{error, info};

/// Runtime configuration, read once at startup from the environment.
#[derive(Clone)]
pub struct AppConfig {
    pub server_host: String,
    pub server_port: u16,
    pub mongodb_uri: String,
    pub jwt_secret: String,
    pub token_ttl_hours: i64,
    /// Operator number the storefront deep-links open a chat with.
    pub store_whatsapp: String,
    pub upload_url: String,
    pub upload_preset: String,
}

impl AppConfig {
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .map_err(|_| "SERVER_PORT must be a number")?;

        let mongodb_uri = env::var("MONGODB_URI").map_err(|_| "MONGODB_URI must be set")?;
        let jwt_secret = env::var("JWT_SECRET").map_err(|_| "JWT_SECRET must be set")?;

        let token_ttl_hours = env::var("TOKEN_TTL_HOURS")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(24);

        let store_whatsapp = env::var("STORE_WHATSAPP_NUMBER").unwrap_or_else(|e| {
            error!("STORE_WHATSAPP_NUMBER not found in environment: {}", e);
            String::new()
        });

        let upload_url = env::var("UPLOAD_URL").unwrap_or_else(|e| {
            error!("UPLOAD_URL not found in environment, uploads will fail: {}", e);
            String::new()
        });
        let upload_preset = env::var("UPLOAD_PRESET").unwrap_or_else(|_| "atelier".to_string());

        info!("Configuration loaded, serving on {}:{}", server_host, server_port);

        Ok(Self {
            server_host,
            server_port,
            mongodb_uri,
            jwt_secret,
            token_ttl_hours,
            store_whatsapp,
            upload_url,
            upload_preset,
        })
    }
}
