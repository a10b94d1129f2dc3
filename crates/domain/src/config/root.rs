use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::path::Path;

use super::dns::DnsConfig;
use super::errors::ConfigError;
use super::local_records::LocalRecordConfig;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use crate::{DEFAULT_RECORD_CAPACITY, MAX_NAME_LEN};

/// Files tried, in order, when no path is given on the command line.
const SEARCH_PATHS: [&str; 2] = ["captive-dns.toml", "/etc/captive-dns/config.toml"];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub dns: DnsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Reads `path`, or the first of [`SEARCH_PATHS`] that exists, or falls
    /// back to defaults; then layers `overrides` on top.
    ///
    /// An explicit `path` that cannot be read is an error.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path.map(str::to_string).or_else(Self::get_config_path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_cli_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
        Ok(toml::from_str(&contents)?)
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        let CliOverrides {
            dns_port,
            bind_address,
            log_level,
            ttl,
            records,
        } = overrides;

        if let Some(port) = dns_port {
            self.server.dns_port = port;
        }
        if let Some(bind) = bind_address {
            self.server.bind_address = bind;
        }
        if let Some(level) = log_level {
            self.logging.level = level;
        }
        if let Some(ttl) = ttl {
            self.dns.ttl = ttl;
        }
        self.dns.records.extend(records);
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("dns_port cannot be 0".to_string()));
        }

        if self.server.bind_address.parse::<IpAddr>().is_err() {
            return Err(ConfigError::Validation(format!(
                "bind_address '{}' is not an IP address",
                self.server.bind_address
            )));
        }

        for record in &self.dns.records {
            if record.name.len() > MAX_NAME_LEN {
                return Err(ConfigError::Validation(format!(
                    "record name '{}' is longer than {} bytes",
                    record.name, MAX_NAME_LEN
                )));
            }
            record
                .to_record()
                .map_err(|e| ConfigError::Validation(e.to_string()))?;
        }

        Ok(())
    }

    /// Configured records that will be dropped because the table is full.
    pub fn overflowing_records(&self) -> usize {
        self.dns.records.len().saturating_sub(DEFAULT_RECORD_CAPACITY)
    }

    pub fn save(&self, path: &str) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents).map_err(|source| ConfigError::Write {
            path: path.to_string(),
            source,
        })
    }

    /// First existing file among [`SEARCH_PATHS`].
    pub fn get_config_path() -> Option<String> {
        SEARCH_PATHS
            .into_iter()
            .find(|path| Path::new(path).exists())
            .map(str::to_string)
    }
}

/// Values given on the command line; each one set wins over the file.
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub bind_address: Option<String>,
    pub log_level: Option<String>,
    pub ttl: Option<u32>,
    /// Appended after the records read from the file.
    pub records: Vec<LocalRecordConfig>,
}
