use std::path::PathBuf;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_SEED_PATH: &str = "data/activities.json";
const DEFAULT_STATIC_DIR: &str = "static";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;

pub struct Config {
    /// SeaORM connection string, e.g. `sqlite://data/activities.db?mode=rwc`.
    pub database_url: String,
    /// JSON dataset used to populate an empty database.
    pub seed_path: PathBuf,
    /// Directory served under `/static`.
    pub static_dir: PathBuf,

    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// `from_env` delegates here with the process environment; tests pass a closure
    /// over a fixed map instead of mutating global state.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidEnvVar {
                name: "PORT".to_string(),
                value,
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_url: lookup("DATABASE_URL")
                .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            seed_path: lookup("SEED_PATH")
                .unwrap_or_else(|| DEFAULT_SEED_PATH.to_string())
                .into(),
            static_dir: lookup("STATIC_DIR")
                .unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string())
                .into(),
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
        })
    }

    /// Socket address string the HTTP listener binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
