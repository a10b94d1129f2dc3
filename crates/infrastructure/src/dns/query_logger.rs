use crate::dns::events::QueryEvent;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Writes every observed query to the log.
#[derive(Debug, Default)]
pub struct QueryEventLogger;

impl QueryEventLogger {
    pub fn new() -> Self {
        Self
    }

    /// Consumes events until every emitter is dropped.
    pub fn start(self, mut rx: mpsc::UnboundedReceiver<QueryEvent>) -> tokio::task::JoinHandle<u64> {
        tokio::spawn(async move {
            debug!("QueryEventLogger: Starting consumer");

            let mut total_events = 0u64;
            while let Some(event) = rx.recv().await {
                total_events += 1;
                Self::log_event(&event);
            }

            debug!(total_events, "QueryEventLogger: Consumer shutting down gracefully");
            total_events
        })
    }

    fn log_event(event: &QueryEvent) {
        match event.address {
            Some(ip) => info!(domain = %event.name, ip = %ip, "Query answered"),
            None => info!(domain = %event.name, "Query not matched"),
        }
    }
}
