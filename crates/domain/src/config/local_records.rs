use crate::{DomainError, DomainName, LocalRecord};
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// A `name = ip` entry from the `[[dns.records]]` table or `--record`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LocalRecordConfig {
    pub name: String,

    pub ip: String,
}

impl LocalRecordConfig {
    pub fn new(name: impl Into<String>, ip: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ip: ip.into(),
        }
    }

    pub fn to_record(&self) -> Result<LocalRecord, DomainError> {
        if self.name.is_empty() {
            return Err(DomainError::InvalidDomainName(
                "record name cannot be empty".to_string(),
            ));
        }
        let name = DomainName::new(&self.name)?;
        let address = self
            .ip
            .parse::<Ipv4Addr>()
            .map_err(|_| DomainError::InvalidIpAddress(self.ip.clone()))?;
        Ok(LocalRecord::new(name, address))
    }
}

impl FromStr for LocalRecordConfig {
    type Err = DomainError;

    /// Parses `NAME=IP`, e.g. `portal.lan=192.168.4.1` or `*=10.0.0.1`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, ip) = s.split_once('=').ok_or_else(|| {
            DomainError::InvalidDomainName(format!("expected NAME=IP, got '{}'", s))
        })?;
        let record = Self::new(name.trim(), ip.trim());
        record.to_record()?;
        Ok(record)
    }
}
