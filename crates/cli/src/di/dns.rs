use captive_dns_domain::{Config, RecordTable};
use captive_dns_infrastructure::dns::{DnsResponder, QueryEventEmitter, QueryEventLogger};
use captive_dns_infrastructure::repositories::InMemoryRecordRepository;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

pub struct DnsServices {
    pub responder: DnsResponder,
    pub query_logger: JoinHandle<u64>,
}

impl DnsServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let records = Arc::new(InMemoryRecordRepository::new());

        let (emitter, rx) = QueryEventEmitter::new_enabled();
        let query_logger = QueryEventLogger::new().start(rx);

        let mut responder = DnsResponder::with_observer(records, Arc::new(emitter));
        responder.set_ttl(config.dns.ttl);
        responder.set_error_reply_code(config.dns.error_reply_code);

        let overflow = config.overflowing_records();
        if overflow > 0 {
            warn!(
                dropped = overflow,
                "More records configured than the record table holds"
            );
        }

        for record in &config.dns.records {
            let address = record.to_record()?.address;
            responder.add_record(&record.name, address)?;
        }

        log_records(&responder.snapshot());
        info!(
            ttl = config.dns.ttl,
            miss_reply = %config.dns.error_reply_code,
            "DNS services initialized"
        );

        Ok(Self {
            responder,
            query_logger,
        })
    }
}

fn log_records(table: &RecordTable) {
    if table.is_empty() {
        warn!("No records configured, every query will get the miss reply");
        return;
    }

    let mut cursor = table.cursor();
    while cursor.next_entry() {
        if let (Some(name), Some(ip)) = (cursor.current_name(), cursor.current_address()) {
            info!(domain = %name, ip = %ip, "Local record");
        }
    }
}
