use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_SESSION_TTL_HOURS: i64 = 168;

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,

    /// Lifetime of an access token issued at sign-in.
    pub session_ttl: chrono::Duration,
    pub bcrypt_cost: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            session_ttl: chrono::Duration::hours(parse_env_or(
                "SESSION_TTL_HOURS",
                DEFAULT_SESSION_TTL_HOURS,
            )?),
            bcrypt_cost: parse_env_or("BCRYPT_COST", bcrypt::DEFAULT_COST)?,
        })
    }
}

fn parse_env_or<T: std::str::FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
        Err(_) => Ok(default),
    }
}
