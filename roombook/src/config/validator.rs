//! Configuration validation.

use crate::config::schema::{Config, MAX_LOCK_WAIT_SECONDS};
use crate::error::{Error, Result};

/// Validates configuration values after all sources are merged.
///
/// # Examples
///
/// ```
/// use roombook::config::{Config, ConfigValidator};
///
/// assert!(ConfigValidator::validate(&Config::default()).is_ok());
///
/// let bad = Config { maximum_lock_wait_seconds: Some(0), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` naming the offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(seconds) = config.maximum_lock_wait_seconds {
            Self::validate_lock_wait(seconds)?;
        }
        Ok(())
    }

    fn validate_lock_wait(seconds: u64) -> Result<()> {
        if seconds == 0 || seconds > MAX_LOCK_WAIT_SECONDS {
            return Err(Error::Validation {
                field: "maximum_lock_wait_seconds".into(),
                message: format!("must be between 1 and {MAX_LOCK_WAIT_SECONDS}, got {seconds}"),
            });
        }
        Ok(())
    }
}
