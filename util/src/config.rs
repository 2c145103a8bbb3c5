//! Global application configuration manager.
//!
//! `AppConfig` is a lazily initialized, globally accessible singleton containing
//! runtime configuration values loaded from environment variables. It provides
//! thread-safe access and mutation for testing or overrides in runtime environments.
//!
//! Free functions at the bottom of this module (`config::host()`, `config::campus_latitude()`, ...)
//! are shorthands for reading single fields from the global instance.

use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::sync::{OnceLock, RwLock};

const DEV_JWT_SECRET: &str = "dev-secret-change-me";

/// Represents the complete application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub log_to_stdout: bool,
    pub database_path: String,
    pub host: String,
    pub port: u16,
    /// Scheme + host the QR scan URLs point at, e.g. `https://attend.example.edu`.
    pub public_base_url: String,
    pub jwt_secret: String,
    pub jwt_duration_minutes: u64,
    pub campus_latitude: f64,
    pub campus_longitude: f64,
    pub location_tolerance_m: i32,
    pub session_duration_minutes: i64,
    pub fuzzy_match_threshold: u8,
}

/// Lazily-initialized, thread-safe singleton instance of `AppConfig`.
static CONFIG_INSTANCE: OnceLock<RwLock<AppConfig>> = OnceLock::new();

/// Reads `key` and parses it, falling back to `default` when unset or malformed.
fn parse_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|e| {
            tracing::warn!("Invalid {key} value {raw:?}: {e}; using default");
            default
        }),
        Err(_) => default,
    }
}

impl AppConfig {
    /// Loads the configuration from `.env` and environment variables.
    ///
    /// Every key has a development default so tests and local runs start without a `.env`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set, using the development secret");
            DEV_JWT_SECRET.into()
        });

        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".into());
        let port = parse_or("PORT", 3000u16);

        Self {
            env: env::var("APP_ENV").unwrap_or_else(|_| "development".into()),
            project_name: env::var("PROJECT_NAME").unwrap_or_else(|_| "campus-attendance".into()),
            log_level: env::var("LOG_LEVEL")
                .unwrap_or_else(|_| "api=info,services=info,db=info".into()),
            log_file: env::var("LOG_FILE").unwrap_or_else(|_| "api.log".into()),
            log_to_stdout: env::var("LOG_TO_STDOUT").unwrap_or_else(|_| "false".into()) == "true",
            database_path: env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "data/attendance.db".into()),
            public_base_url: env::var("PUBLIC_BASE_URL")
                .unwrap_or_else(|_| format!("http://{host}:{port}")),
            host,
            port,
            jwt_secret,
            jwt_duration_minutes: parse_or("JWT_DURATION_MINUTES", 60),
            campus_latitude: parse_or("CAMPUS_LATITUDE", 6.6710),
            campus_longitude: parse_or("CAMPUS_LONGITUDE", -1.5658),
            location_tolerance_m: parse_or("LOCATION_TOLERANCE_M", 50),
            session_duration_minutes: parse_or("SESSION_DURATION_MINUTES", 10),
            fuzzy_match_threshold: parse_or("FUZZY_MATCH_THRESHOLD", 85),
        }
    }

    /// Returns a shared reference to the global configuration.
    ///
    /// # Panics
    /// Panics if the lock is poisoned.
    pub fn global() -> std::sync::RwLockReadGuard<'static, AppConfig> {
        CONFIG_INSTANCE
            .get_or_init(|| RwLock::new(AppConfig::from_env()))
            .read()
            .expect("Failed to acquire AppConfig read lock")
    }

    /// Resets the configuration by reloading from environment variables.
    ///
    /// Useful in tests to clear overrides.
    pub fn reset() {
        if let Some(lock) = CONFIG_INSTANCE.get() {
            let mut guard = lock
                .write()
                .expect("Failed to acquire AppConfig write lock");
            *guard = AppConfig::from_env();
        }
    }

    /// Generic internal setter for any field in the config.
    fn set_field<F>(setter: F)
    where
        F: FnOnce(&mut AppConfig),
    {
        let lock = CONFIG_INSTANCE.get_or_init(|| RwLock::new(AppConfig::from_env()));
        let mut guard = lock
            .write()
            .expect("Failed to acquire AppConfig write lock");
        setter(&mut guard);
    }

    // --- Per-field setters below ---

    pub fn set_public_base_url(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.public_base_url = value.into());
    }

    pub fn set_campus_location(latitude: f64, longitude: f64) {
        AppConfig::set_field(|cfg| {
            cfg.campus_latitude = latitude;
            cfg.campus_longitude = longitude;
        });
    }

    pub fn set_fuzzy_match_threshold(value: u8) {
        AppConfig::set_field(|cfg| cfg.fuzzy_match_threshold = value);
    }
}

// --- Single-field accessors ---

pub fn env() -> String {
    AppConfig::global().env.clone()
}

pub fn project_name() -> String {
    AppConfig::global().project_name.clone()
}

pub fn log_level() -> String {
    AppConfig::global().log_level.clone()
}

pub fn log_file() -> String {
    AppConfig::global().log_file.clone()
}

pub fn log_to_stdout() -> bool {
    AppConfig::global().log_to_stdout
}

pub fn database_path() -> String {
    AppConfig::global().database_path.clone()
}

pub fn host() -> String {
    AppConfig::global().host.clone()
}

pub fn port() -> u16 {
    AppConfig::global().port
}

pub fn public_base_url() -> String {
    AppConfig::global().public_base_url.clone()
}

pub fn jwt_secret() -> String {
    AppConfig::global().jwt_secret.clone()
}

pub fn jwt_duration_minutes() -> u64 {
    AppConfig::global().jwt_duration_minutes
}

pub fn campus_latitude() -> f64 {
    AppConfig::global().campus_latitude
}

pub fn campus_longitude() -> f64 {
    AppConfig::global().campus_longitude
}

pub fn location_tolerance_m() -> i32 {
    AppConfig::global().location_tolerance_m
}

pub fn session_duration_minutes() -> i64 {
    AppConfig::global().session_duration_minutes
}

pub fn fuzzy_match_threshold() -> u8 {
    AppConfig::global().fuzzy_match_threshold
}
