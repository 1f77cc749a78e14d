//! Server configuration from environment variables

use std::env;

const DEFAULT_BIND: &str = "127.0.0.1:3000";
const DEV_SECRET: &str = "corkboard-dev-secret";

/// Runtime configuration, read once at startup
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener to
    pub bind: String,
    /// Session token signing secret
    pub secret: String,
}

impl ServerConfig {
    /// Load config from the environment, falling back to dev defaults
    pub fn from_env() -> Self {
        let bind = env::var("CORKBOARD_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_string());
        let secret = match env::var("CORKBOARD_SECRET") {
            Ok(secret) if !secret.is_empty() => secret,
            _ => {
                tracing::warn!("CORKBOARD_SECRET not set, using the dev signing secret");
                DEV_SECRET.to_string()
            }
        };
        Self { bind, secret }
    }
}
