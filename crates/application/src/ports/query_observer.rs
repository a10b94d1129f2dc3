use captive_dns_domain::DomainName;
use std::net::Ipv4Addr;

/// Notified once for every question that reaches the record lookup.
///
/// Called on the request path: implementations must return promptly and
/// must not panic.
pub trait QueryObserver: Send + Sync {
    fn on_query(&self, name: &DomainName, address: Option<Ipv4Addr>);
}

impl<F> QueryObserver for F
where
    F: Fn(&DomainName, Option<Ipv4Addr>) + Send + Sync,
{
    fn on_query(&self, name: &DomainName, address: Option<Ipv4Addr>) {
        self(name, address)
    }
}
