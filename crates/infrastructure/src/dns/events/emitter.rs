use super::QueryEvent;
use captive_dns_application::ports::QueryObserver;
use captive_dns_domain::DomainName;
use std::net::Ipv4Addr;
use tokio::sync::mpsc;

/// Forwards observed queries to a channel so the request path never waits
/// on whoever consumes them.
#[derive(Clone, Debug)]
pub struct QueryEventEmitter {
    sender: Option<mpsc::UnboundedSender<QueryEvent>>,
}

impl QueryEventEmitter {
    pub fn new_disabled() -> Self {
        Self { sender: None }
    }

    pub fn new_enabled() -> (Self, mpsc::UnboundedReceiver<QueryEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let emitter = Self { sender: Some(tx) };
        (emitter, rx)
    }

    /// Never blocks. Events are dropped once the receiver is gone.
    pub fn emit(&self, event: QueryEvent) {
        if let Some(tx) = &self.sender {
            let _ = tx.send(event);
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.sender.is_some()
    }
}

impl QueryObserver for QueryEventEmitter {
    fn on_query(&self, name: &DomainName, address: Option<Ipv4Addr>) {
        self.emit(QueryEvent::new(*name, address));
    }
}

impl Default for QueryEventEmitter {
    fn default() -> Self {
        Self::new_disabled()
    }
}
