//! Configuration file loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::Result;

/// Name of the configuration file inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// A configuration read from a file.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Where the configuration was read from.
    pub path: PathBuf,
    /// The parsed configuration.
    pub config: Config,
}

/// Loads configuration files from disk.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load `<data_dir>/config.yaml` if it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from_data_dir(data_dir: &Path) -> Result<Option<ConfigSource>> {
        let path = data_dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(None);
        }

        let config = Self::load_file(&path)?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(Some(ConfigSource { path, config }))
    }

    /// Load and parse a YAML configuration file.
    ///
    /// A file holding only comments or whitespace yields the default
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the file cannot be read and
    /// `Error::Configuration` if the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse YAML configuration text.
    ///
    /// # Errors
    ///
    /// Returns `Error::Configuration` if the YAML is invalid or contains
    /// unknown keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use roombook::config::ConfigLoader;
    ///
    /// let config = ConfigLoader::parse("# nothing here\n").unwrap();
    /// assert_eq!(config, Default::default());
    ///
    /// let config = ConfigLoader::parse("disable_autoinit: true\n").unwrap();
    /// assert_eq!(config.disable_autoinit, Some(true));
    /// ```
    pub fn parse(contents: &str) -> Result<Config> {
        let has_content = contents
            .lines()
            .map(str::trim)
            .any(|line| !line.is_empty() && !line.starts_with('#'));
        if !has_content {
            return Ok(Config::default());
        }

        Ok(serde_yaml::from_str(contents)?)
    }
}
