// src/config/mod.rs

use std::env;

use anyhow::Context;

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct Config {
    /// Connection string for the survey database, e.g. `postgres://...`.
    pub database_url: String,
    pub port: u16,
}

impl Config {
    /// Reads the configuration from the environment, loading `.env` first if present.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url =
            env::var("DATABASE_URL").context("DATABASE_URL must be set in the environment or .env")?;
        let port = parse_port(env::var("PORT").ok().as_deref());

        Ok(Self { database_url, port })
    }

    pub fn addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn parse_port(raw: Option<&str>) -> u16 {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(DEFAULT_PORT)
}
