use std::env;
use std::fmt;

use chrono::{Days, NaiveDate};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} must be {expected}, got '{value}'")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// How many days back `GET /api/commandes` looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetentionWindow {
    days: u32,
}

impl RetentionWindow {
    pub fn from_days(days: i64) -> Result<Self, ConfigError> {
        match u32::try_from(days) {
            Ok(days) if days > 0 => Ok(Self { days }),
            _ => Err(ConfigError::Invalid {
                name: "COMMANDES_LAST",
                expected: "a positive number of days",
                value: days.to_string(),
            }),
        }
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    /// `today` minus the window. Saturates at the earliest representable date.
    pub fn cutoff(&self, today: NaiveDate) -> NaiveDate {
        today
            .checked_sub_days(Days::new(u64::from(self.days)))
            .unwrap_or(NaiveDate::MIN)
    }
}

impl fmt::Display for RetentionWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} days", self.days)
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub retention: RetentionWindow,
}

impl AppConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port: u16 = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                expected: "a valid port number",
                value: raw,
            })?,
            None => 8080,
        };

        let raw_days = lookup("COMMANDES_LAST").ok_or(ConfigError::Missing("COMMANDES_LAST"))?;
        let days: i64 = raw_days.trim().parse().map_err(|_| ConfigError::Invalid {
            name: "COMMANDES_LAST",
            expected: "a positive number of days",
            value: raw_days.clone(),
        })?;

        Ok(Self {
            database_url,
            host,
            port,
            retention: RetentionWindow::from_days(days)?,
        })
    }
}
