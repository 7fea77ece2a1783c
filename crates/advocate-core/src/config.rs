use std::num::NonZeroU32;

use anyhow::Result;
use config::{Config, ConfigBuilder, Map, builder::DefaultState};
use serde::Deserialize;

use crate::types::SpecialtyMatch;

/// Prefix of every settings environment variable.
pub const ENV_PREFIX: &str = "ADVOCATES";

/// Conventional database URL variable, shared with the Diesel CLI.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub directory: DirectoryConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u8,
    /// Apply the embedded migrations before serving.
    pub run_migrations: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// ## Summary
    /// Returns the address the listener binds to, in the format "host:port".
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// Directory search behaviour.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectoryConfig {
    /// Page size used when a request carries no `limit`.
    pub default_limit: NonZeroU32,
    pub specialty_match: SpecialtyMatch,
}

impl Settings {
    /// ## Summary
    /// Returns a configuration builder seeded with every default value.
    ///
    /// ## Errors
    /// Returns an error if a default cannot be registered.
    pub fn builder() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8698)?
            .set_default("database.max_connections", 4)?
            .set_default("database.run_migrations", false)?
            .set_default("logging.level", "debug")?
            .set_default("directory.default_limit", 12)?
            .set_default("directory.specialty_match", SpecialtyMatch::All.as_str())?)
    }

    /// ## Summary
    /// Loads configuration from environment variables and an optional
    /// `config.toml` into a `Settings`.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Self::layer_environment(Self::builder()?, None)?
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            .build()?
            .try_deserialize::<Settings>()?)
    }

    /// ## Summary
    /// Adds the environment layer to `builder`, reading `vars` instead of the
    /// process environment when given.
    ///
    /// Keys are `ADVOCATES_<SECTION>__<KEY>`, e.g. `ADVOCATES_DIRECTORY__DEFAULT_LIMIT`,
    /// so key names may themselves contain underscores. A plain `DATABASE_URL`
    /// is honoured as the lowest-precedence database URL.
    ///
    /// ## Errors
    /// Returns an error if the database URL default cannot be registered.
    pub fn layer_environment(
        builder: ConfigBuilder<DefaultState>,
        vars: Option<Map<String, String>>,
    ) -> Result<ConfigBuilder<DefaultState>> {
        let database_url = match &vars {
            Some(vars) => vars.get(DATABASE_URL_VAR).cloned(),
            None => std::env::var(DATABASE_URL_VAR).ok(),
        };

        let builder = match database_url.filter(|url| !url.is_empty()) {
            Some(url) => builder.set_default("database.url", url)?,
            None => builder,
        };

        Ok(builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .ignore_empty(true)
                .try_parsing(true)
                .source(vars),
        ))
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "No .env file loaded");
    }

    Settings::load()
}
