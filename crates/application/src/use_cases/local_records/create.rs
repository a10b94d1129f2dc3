use std::net::Ipv4Addr;
use std::sync::Arc;

use captive_dns_domain::{DomainError, DomainName, LocalRecord};
use tracing::{debug, warn};

use crate::ports::RecordRepository;

pub struct CreateLocalRecordUseCase {
    records: Arc<dyn RecordRepository>,
}

impl CreateLocalRecordUseCase {
    pub fn new(records: Arc<dyn RecordRepository>) -> Self {
        Self { records }
    }

    /// Adds `name → address`. Returns `Ok(false)` when the store is full and
    /// the record was dropped; only malformed names are errors.
    pub fn execute(&self, name: &str, address: Ipv4Addr) -> Result<bool, DomainError> {
        if name.is_empty() {
            return Err(DomainError::InvalidDomainName(
                "record name cannot be empty".to_string(),
            ));
        }
        let name = DomainName::new(name)?;

        let stored = self.records.add(LocalRecord::new(name, address));
        if stored {
            debug!(domain = %name, ip = %address, "Local record added");
        } else {
            warn!(
                domain = %name,
                ip = %address,
                capacity = self.records.capacity(),
                "Record table full, record dropped"
            );
        }
        Ok(stored)
    }
}
