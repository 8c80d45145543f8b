//! Environment variable handling for configuration overrides.
//!
//! `ROOMBOOK_*` variables override values read from the configuration file.

use std::env;

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::operations::ListOrder;

/// Overrides `maximum_lock_wait_seconds`.
pub const LOCK_WAIT_ENV: &str = "ROOMBOOK_MAXIMUM_LOCK_WAIT_SECONDS";
/// Overrides `list_order`.
pub const LIST_ORDER_ENV: &str = "ROOMBOOK_LIST_ORDER";
/// Overrides `disable_autoinit`.
pub const DISABLE_AUTOINIT_ENV: &str = "ROOMBOOK_DISABLE_AUTOINIT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use roombook::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` if any variable holds an unparseable value.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(val) = env::var(LOCK_WAIT_ENV) {
            let seconds = val.trim().parse().map_err(|_| Error::Validation {
                field: LOCK_WAIT_ENV.into(),
                message: format!("Must be a positive integer, got '{val}'"),
            })?;
            config.maximum_lock_wait_seconds = Some(seconds);
        }

        if let Ok(val) = env::var(LIST_ORDER_ENV) {
            config.list_order = Some(Self::parse_list_order(&val)?);
        }

        if let Ok(val) = env::var(DISABLE_AUTOINIT_ENV) {
            config.disable_autoinit = Some(Self::parse_bool(DISABLE_AUTOINIT_ENV, &val)?);
        }

        Ok(())
    }

    fn parse_list_order(s: &str) -> Result<ListOrder> {
        match s.trim().to_lowercase().as_str() {
            "chronological" => Ok(ListOrder::Chronological),
            "insertion" => Ok(ListOrder::Insertion),
            _ => Err(Error::Validation {
                field: LIST_ORDER_ENV.into(),
                message: format!("Invalid list order: '{s}' (expected chronological/insertion)"),
            }),
        }
    }

    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
