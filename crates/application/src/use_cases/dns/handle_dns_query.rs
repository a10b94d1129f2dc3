use crate::ports::{QueryObserver, RecordRepository};
use captive_dns_domain::DnsRequest;
use std::net::Ipv4Addr;
use std::sync::Arc;
use tracing::debug;

pub struct HandleDnsQueryUseCase {
    records: Arc<dyn RecordRepository>,
    observer: Option<Arc<dyn QueryObserver>>,
}

impl HandleDnsQueryUseCase {
    pub fn new(records: Arc<dyn RecordRepository>) -> Self {
        Self {
            records,
            observer: None,
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn QueryObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Looks the question up in the record store. `None` means the caller
    /// should answer with the configured miss reply code.
    pub fn execute(&self, request: &DnsRequest<'_>) -> Option<Ipv4Addr> {
        let address = self.records.find(request.name).map(|record| record.address);

        debug!(
            domain = %request.name,
            client = %request.client,
            matched = ?address,
            "Local record lookup"
        );

        if let Some(observer) = &self.observer {
            observer.on_query(request.name, address);
        }

        address
    }
}
