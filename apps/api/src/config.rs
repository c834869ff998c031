use anyhow::{bail, Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub gemini_api_key: String,
    pub rust_log: String,
}

/// Listener settings for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Raises the default log level to `debug` when `RUST_LOG` is unset.
    pub debug: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let debug = match std::env::var("DEBUG") {
            Ok(raw) => parse_bool(&raw).context("DEBUG must be a boolean")?,
            Err(_) => false,
        };

        let default_level = if debug { "debug" } else { "info" };

        Ok(Config {
            server: ServerConfig {
                host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("PORT")
                    .unwrap_or_else(|_| "5000".to_string())
                    .parse::<u16>()
                    .context("PORT must be a valid port number")?,
                debug,
            },
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_bool(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => bail!("unrecognised boolean value '{other}'"),
    }
}
