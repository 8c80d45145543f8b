//! Configuration schema definitions.
//!
//! Every field is optional so that partial files and environment overrides
//! can be layered on top of each other. The resolved accessors apply the
//! built-in defaults.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::operations::ListOrder;

/// Default maximum time to wait for the database lock, in seconds.
pub const DEFAULT_LOCK_WAIT_SECONDS: u64 = 5;

/// Largest accepted lock wait, in seconds.
pub const MAX_LOCK_WAIT_SECONDS: u64 = 3600;

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use roombook::Config;
/// use roombook::operations::ListOrder;
///
/// let config = Config {
///     maximum_lock_wait_seconds: Some(10),
///     ..Default::default()
/// };
/// assert_eq!(config.lock_wait(), Duration::from_secs(10));
/// assert_eq!(config.list_order(), ListOrder::Chronological);
/// assert!(!config.disable_autoinit());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Maximum time to wait for another writer to release the database.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_lock_wait_seconds: Option<u64>,

    /// Ordering used when listing reservations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_order: Option<ListOrder>,

    /// Refuse to create the data directory and database on first use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_autoinit: Option<bool>,
}

impl Config {
    /// Busy timeout to configure on database connections.
    #[must_use]
    pub fn lock_wait(&self) -> Duration {
        Duration::from_secs(
            self.maximum_lock_wait_seconds
                .unwrap_or(DEFAULT_LOCK_WAIT_SECONDS),
        )
    }

    /// Ordering for reservation listings.
    #[must_use]
    pub fn list_order(&self) -> ListOrder {
        self.list_order.unwrap_or_default()
    }

    /// Whether auto-initialization of the data directory is disabled.
    #[must_use]
    pub fn disable_autoinit(&self) -> bool {
        self.disable_autoinit.unwrap_or(false)
    }
}
