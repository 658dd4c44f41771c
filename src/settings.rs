//! Process settings read from the environment (after `.env`, if any, is loaded by the binary).

use crate::error::SettingsError;
use std::net::SocketAddr;

pub const DEFAULT_DATABASE_URL: &str = "sqlite:database.sqlite";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// Switches for the generic table surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AdminPolicy {
    /// Interpolate caller-supplied table names verbatim (no whitelist, no quoting) when reading tables.
    pub raw_identifiers: bool,
    /// Allow `add_record` on tables other than `user` through a dynamic INSERT.
    pub generic_insert: bool,
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_body_bytes: usize,
    pub policy: AdminPolicy,
}

impl Settings {
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build settings from any key lookup. `from_env` passes `std::env::var`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());

        let bind_raw = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr = bind_raw.parse().map_err(|_| SettingsError::InvalidValue {
            name: "BIND_ADDR",
            value: bind_raw.clone(),
        })?;

        let max_body_bytes = match lookup("MAX_BODY_BYTES") {
            Some(v) => v.trim().parse().map_err(|_| SettingsError::InvalidValue {
                name: "MAX_BODY_BYTES",
                value: v.clone(),
            })?,
            None => DEFAULT_MAX_BODY_BYTES,
        };

        let policy = AdminPolicy {
            raw_identifiers: parse_flag("ALLOW_RAW_IDENTIFIERS", lookup("ALLOW_RAW_IDENTIFIERS"))?,
            generic_insert: parse_flag("ENABLE_GENERIC_INSERT", lookup("ENABLE_GENERIC_INSERT"))?,
        };

        Ok(Settings {
            database_url,
            bind_addr,
            max_body_bytes,
            policy,
        })
    }
}

fn parse_flag(name: &'static str, raw: Option<String>) -> Result<bool, SettingsError> {
    let Some(raw) = raw else {
        return Ok(false);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(SettingsError::InvalidBool { name, value: raw }),
    }
}
