use crate::server::error::config::ConfigError;

/// Runtime configuration sourced from the environment.
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub valkey_url: String,
    pub worker_count: usize,
    pub realtime_url: String,
    pub realtime_api_key: String,
    pub sfu_url: String,
    pub sfu_api_key: String,
    pub push_url: String,
    pub push_api_key: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: optional("HOST", "0.0.0.0"),
            port: parsed("PORT", 8080)?,
            database_url: required("DATABASE_URL")?,
            valkey_url: required("VALKEY_URL")?,
            worker_count: parsed("WORKER_COUNT", 4)?,
            realtime_url: required("REALTIME_URL")?,
            realtime_api_key: required("REALTIME_API_KEY")?,
            sfu_url: required("SFU_URL")?,
            sfu_api_key: required("SFU_API_KEY")?,
            push_url: required("PUSH_URL")?,
            push_api_key: required("PUSH_API_KEY")?,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parsed<T: std::str::FromStr>(name: &str, default: T) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(raw) => raw.parse().map_err(|err| ConfigError::InvalidEnvValue {
            var: name.to_string(),
            reason: format!("{err}"),
        }),
        Err(_) => Ok(default),
    }
}
