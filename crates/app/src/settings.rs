//! Handles settings for the application. Configuration is read from an
//! optional `settings.toml` in the working directory.
//!
//! `DATABASE_URL` and `PORT` from the environment win over the file.
use config::{Config, ConfigError, File, Source};
use serde::Deserialize;

/// File-backed sqlite store used when nothing else is configured.
const DEFAULT_DATABASE_URL: &str = "sqlite:/tmp/test.db?mode=rwc";

#[derive(Debug, Deserialize)]
pub struct App {
    pub level: String,
}

#[derive(Debug, Deserialize)]
pub struct Server {
    pub bind: String,
    pub port: u16,
    pub database_url: String,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub app: App,
    pub server: Server,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::load(
            File::with_name("settings").required(false),
            std::env::var("DATABASE_URL").ok(),
            std::env::var("PORT").ok(),
        )
    }

    pub fn load<S>(
        file: S,
        database_url: Option<String>,
        port: Option<String>,
    ) -> Result<Self, ConfigError>
    where
        S: Source + Send + Sync + 'static,
    {
        let settings = Config::builder()
            .set_default("app.level", "info")?
            .set_default("server.bind", "127.0.0.1")?
            .set_default("server.port", 3000_i64)?
            .set_default("server.database_url", DEFAULT_DATABASE_URL)?
            .add_source(file)
            .set_override_option("server.database_url", database_url)?
            .set_override_option("server.port", port)?
            .build()?;

        settings.try_deserialize()
    }
}
