//! Process configuration, loaded once at startup.
//!
//! Defaults are merged under environment variables prefixed with `CAFE_`
//! (e.g. `CAFE_DATABASE_URL`, `CAFE_SECRET_KEY`); a `.env` file is honored
//! via dotenvy before the figment extraction runs.

use axum_extra::extract::cookie::Key;
use figment::Figment;
use figment::providers::{Env, Serialized};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::error::CafeError;

/// Development-only fallback for the form-integrity secret. Override with
/// `CAFE_SECRET_KEY` in any real deployment.
const DEV_SECRET_KEY: &str = "this_is_very_secret_and_only_for_local_development_use";

pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::load().unwrap_or_else(|e| {
        eprintln!("invalid configuration: {e}");
        std::process::exit(1);
    })
});

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// sqlx connection string for the SQLite store.
    pub database_url: String,
    pub listen_addr: String,
    /// Secret backing the private CSRF cookie; minimum 32 bytes.
    pub secret_key: String,
    pub loglevel: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:cafes.db".to_string(),
            listen_addr: "0.0.0.0:8000".to_string(),
            secret_key: DEV_SECRET_KEY.to_string(),
            loglevel: "info".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, figment::Error> {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::prefixed("CAFE_"))
            .extract()
    }

    /// Derive the cookie encryption key from the configured secret.
    pub fn cookie_key(&self) -> Result<Key, CafeError> {
        if self.secret_key.len() < 32 {
            return Err(CafeError::Config(
                "secret_key must be at least 32 bytes".to_string(),
            ));
        }
        Ok(Key::derive_from(self.secret_key.as_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_produce_a_usable_cookie_key() {
        let cfg = Config::default();
        assert!(cfg.cookie_key().is_ok());
    }

    #[test]
    fn short_secret_is_rejected() {
        let cfg = Config {
            secret_key: "too short".to_string(),
            ..Config::default()
        };
        assert!(cfg.cookie_key().is_err());
    }
}
