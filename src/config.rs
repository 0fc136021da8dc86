// src/config.rs

use crate::errors::ConfigError;
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_MODEL_PATH: &str = "model/london.json";
pub const DEFAULT_WORKERS: usize = 8;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub model_path: PathBuf,
    pub max_workers: usize,
    /// Overrides the artifact's default sale year.
    pub valuation_year: Option<i32>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env` but reads from `lookup`, so tests don't touch the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr = parse_or("ESTIMATOR_ADDR", &lookup, DEFAULT_ADDR)?;

        let model_path = lookup("ESTIMATOR_MODEL")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MODEL_PATH));

        let max_workers: usize = parse_or("ESTIMATOR_WORKERS", &lookup, &DEFAULT_WORKERS.to_string())?;
        if max_workers == 0 {
            return Err(ConfigError::InvalidEnv {
                key: "ESTIMATOR_WORKERS",
                value: "0".into(),
            });
        }

        let valuation_year = match lookup("ESTIMATOR_VALUATION_YEAR") {
            Some(v) => Some(parse("ESTIMATOR_VALUATION_YEAR", &v)?),
            None => None,
        };

        Ok(Self {
            addr,
            model_path,
            max_workers,
            valuation_year,
        })
    }
}

fn parse<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
        key,
        value: value.to_string(),
    })
}

fn parse_or<T, F>(key: &'static str, lookup: &F, default: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(key).unwrap_or_else(|| default.to_string());
    parse(key, &value)
}
