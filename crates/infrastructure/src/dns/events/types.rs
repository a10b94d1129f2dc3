use captive_dns_domain::DomainName;
use std::net::Ipv4Addr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryEvent {
    pub name: DomainName,

    /// Address answered with, `None` when the lookup missed.
    pub address: Option<Ipv4Addr>,
}

impl QueryEvent {
    pub fn new(name: DomainName, address: Option<Ipv4Addr>) -> Self {
        Self { name, address }
    }

    pub fn is_answered(&self) -> bool {
        self.address.is_some()
    }
}
