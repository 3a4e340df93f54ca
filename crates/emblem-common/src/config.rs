//! Application configuration loaded from environment variables and config files.
//!
//! Supports `.env` files for development and environment variables for production.
//! Config precedence: env vars > .env file > emblem.toml > defaults

use serde::Deserialize;

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "emblem";

/// Load configuration from the default file name and the environment.
pub fn load() -> Result<AppConfig, config::ConfigError> {
    load_from(DEFAULT_CONFIG_FILE)
}

/// Load configuration using `file` (extension optional) as the config file.
///
/// A missing file is not an error; defaults and env vars still apply.
pub fn load_from(file: &str) -> Result<AppConfig, config::ConfigError> {
    // Load .env file if present (development)
    let _ = dotenvy::dotenv();

    build(file, env_source())
}

/// Environment variables (EMBLEM_LOG__FILTER, EMBLEM_CATALOG__PATH, etc.)
fn env_source() -> config::Environment {
    config::Environment::with_prefix("EMBLEM")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

fn build(file: &str, env: config::Environment) -> Result<AppConfig, config::ConfigError> {
    let cfg = config::Config::builder()
        // Defaults
        .set_default("log.filter", "emblem=info")?
        .set_default("catalog.strict", false)?
        // Optional config file
        .add_source(config::File::with_name(file).required(false))
        .add_source(env)
        .build()?;

    cfg.try_deserialize()
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub log: LogConfig,
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogConfig {
    /// `tracing-subscriber` filter directive, used when `RUST_LOG` is unset
    pub filter: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// Role catalog file (`.json` or `.toml`)
    pub path: Option<String>,
    /// Treat catalog lint issues as fatal
    pub strict: bool,
}
