//! Process-environment configuration, read once at startup and never mutated.

use sqlx::mysql::MySqlConnectOptions;

pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone)]
pub struct Config {
    pub db_host: String,
    pub db_user: String,
    pub db_password: String,
    pub db_name: String,
    pub port: u16,
}

impl Config {
    /// Reads DB_HOST, DB_USER, DB_PASSWORD, DB_NAME and PORT. Missing database
    /// variables do not abort startup; the resulting connection simply fails
    /// per-request, matching the original deployment behavior.
    pub fn from_env() -> Self {
        Config {
            db_host: var_or_empty("DB_HOST"),
            db_user: var_or_empty("DB_USER"),
            db_password: var_or_empty("DB_PASSWORD"),
            db_name: var_or_empty("DB_NAME"),
            port: parse_port(std::env::var("PORT").ok()),
        }
    }

    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.db_host)
            .username(&self.db_user)
            .password(&self.db_password)
            .database(&self.db_name)
    }
}

fn var_or_empty(key: &str) -> String {
    std::env::var(key).unwrap_or_default()
}

fn parse_port(raw: Option<String>) -> u16 {
    raw.and_then(|p| p.parse().ok()).unwrap_or(DEFAULT_PORT)
}
