use std::env;

use agenthub_catalog::DEFAULT_API_URL;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Base URL of the remote catalog API.
    pub api_url: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let host = env::var("AGENTHUB_SERVER_HOST").unwrap_or_else(|_| default_host());
        let port = env::var("AGENTHUB_SERVER_PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or_else(default_port);
        let api_url =
            env::var("AGENTHUB_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Self {
            host,
            port,
            api_url,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
