use std::net::SocketAddr;

use anyhow::Context;
use roundup_connect::DEFAULT_STARLING_API_URL;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub starling_api_url: String,
    pub cors_allow: Vec<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("RU_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid RU_LISTEN_ADDR")?;
        let starling_api_url = std::env::var("RU_STARLING_API_URL")
            .unwrap_or_else(|_| DEFAULT_STARLING_API_URL.to_string());
        let cors_allow = std::env::var("RU_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        Ok(Self {
            listen_addr,
            starling_api_url,
            cors_allow,
        })
    }
}
