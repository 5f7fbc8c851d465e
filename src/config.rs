use std::fmt;

use actix_web::cookie::Key;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_MAX_CONNECTIONS: u32 = 8;
const MIN_SESSION_KEY_LEN: usize = 64;

/// Runtime configuration, read from the environment (and `.env` if present).
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub session_key: Key,
    pub cookie_secure: bool,
    pub db_max_connections: u32,
    pub seed_demo: bool,
}

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid { var: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(var) => write!(f, "{var} must be set"),
            ConfigError::Invalid { var, value } => write!(f, "{var} has an invalid value: {value:?}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            log::debug!("No .env loaded: {e}");
        }
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build a config from any variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let db_max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(v) => match v.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::Invalid { var: "DB_MAX_CONNECTIONS", value: v }),
            },
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Config {
            database_url,
            bind_addr,
            session_key: session_key(lookup("SESSION_KEY")),
            cookie_secure: flag(lookup("COOKIE_SECURE")),
            db_max_connections,
            seed_demo: flag(lookup("SEED_DEMO")),
        })
    }
}

// Session encryption key; a random one means sessions are lost on restart.
fn session_key(value: Option<String>) -> Key {
    match value {
        Some(val) if val.len() >= MIN_SESSION_KEY_LEN => {
            log::info!("Using SESSION_KEY from environment");
            Key::from(val.as_bytes())
        }
        Some(val) => {
            log::warn!("SESSION_KEY too short ({} bytes, need {}+), generating random key", val.len(), MIN_SESSION_KEY_LEN);
            Key::generate()
        }
        None => {
            log::warn!("No SESSION_KEY set, generating random key (sessions lost on restart)");
            Key::generate()
        }
    }
}

fn flag(value: Option<String>) -> bool {
    matches!(value.as_deref().map(str::trim), Some("1") | Some("true") | Some("TRUE") | Some("yes"))
}
